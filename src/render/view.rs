//! Dashboard view
//!
//! Owns the state container, the render guard and the mount lifetime of one
//! dashboard view. Activation issues exactly one load; dropping the view
//! deactivates it so a late completion is discarded.

use std::fmt;

use tracing::debug;

use crate::{
    client::{DashboardSource, SessionToken},
    constants::{cards, LOADING_PLACEHOLDER},
    models::AggregateTotals,
    notify::Notifier,
    render::{ChartRenderer, ChartSection, RenderGuard},
    services::{DashboardLoader, LoadOutcome},
    state::{ViewLifetime, ViewStateContainer},
    utils::format_number,
};

/// One mounted dashboard view
#[derive(Debug)]
pub struct DashboardView {
    state: ViewStateContainer,
    lifetime: ViewLifetime,
    guard: RenderGuard,
    activated: bool,
}

/// Output of one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDashboard {
    pub totals: AggregateTotals,
    pub chart: ChartSection,
}

impl DashboardView {
    /// Mount a view at default state
    pub fn mount() -> Self {
        Self {
            state: ViewStateContainer::new(),
            lifetime: ViewLifetime::new(),
            guard: RenderGuard::new(),
            activated: false,
        }
    }

    /// Run the one load of this mount. Later calls do nothing and return `None`.
    pub async fn activate<S, N>(
        &mut self,
        loader: &DashboardLoader<S, N>,
        token: &SessionToken,
    ) -> Option<LoadOutcome>
    where
        S: DashboardSource,
        N: Notifier,
    {
        if self.activated {
            debug!("Dashboard view already activated, skipping load");
            return None;
        }
        self.activated = true;

        Some(
            loader
                .load_dashboard(token, &self.state, &self.lifetime)
                .await,
        )
    }

    pub fn state(&self) -> &ViewStateContainer {
        &self.state
    }

    pub fn guard(&self) -> &RenderGuard {
        &self.guard
    }

    /// Reset the render guard after a chart failure
    pub fn retry_chart(&mut self) {
        self.guard.retry();
    }

    /// Handle shared with in-flight work
    pub fn lifetime(&self) -> ViewLifetime {
        self.lifetime.clone()
    }

    pub fn unmount(&self) {
        self.lifetime.deactivate();
    }

    /// Render cards and chart from the current state
    pub fn render<R>(&mut self, renderer: &R) -> RenderedDashboard
    where
        R: ChartRenderer + ?Sized,
    {
        let current = self.state.current();
        RenderedDashboard {
            totals: current.totals,
            chart: self.guard.render(&current.chart, renderer),
        }
    }
}

impl Drop for DashboardView {
    fn drop(&mut self) {
        self.lifetime.deactivate();
    }
}

impl fmt::Display for RenderedDashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<18} {}", cards::USERS, self.totals.users)?;
        writeln!(f, "{:<18} {}", cards::CONTESTS, self.totals.contests)?;
        writeln!(
            f,
            "{:<18} {}",
            cards::SUBMISSIONS,
            format_number(self.totals.submissions)
        )?;
        writeln!(f)?;

        match &self.chart {
            ChartSection::Chart(output) => write!(f, "{output}"),
            ChartSection::Loading => writeln!(f, "{LOADING_PLACEHOLDER}"),
            ChartSection::Empty => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{MockDashboardSource, SourceResponse};
    use crate::models::ChartSpec;
    use crate::notify::MockNotifier;
    use crate::render::{GuardState, RenderError, TextChartRenderer};
    use serde_json::{json, Value};

    struct BrokenRenderer;

    impl ChartRenderer for BrokenRenderer {
        fn render(&self, _spec: &ChartSpec) -> Result<String, RenderError> {
            Err(RenderError::new("canvas unavailable"))
        }
    }

    fn loader_with(body: Value) -> DashboardLoader<MockDashboardSource, MockNotifier> {
        let mut source = MockDashboardSource::new();
        source
            .expect_fetch_dashboard()
            .times(1)
            .returning(move |_| Ok(SourceResponse { status: 200, body: body.clone() }));
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().never();
        DashboardLoader::new(source, notifier)
    }

    fn spring_winter() -> Value {
        json!({
            "dashboarDetails": {
                "usersCount": 10,
                "contestSubmissions": {
                    "contests": ["Spring Cup", "Winter Cup"],
                    "submissionsCount": [5, "7"]
                }
            }
        })
    }

    #[test]
    fn test_fresh_view_shows_placeholder() {
        let mut view = DashboardView::mount();
        let rendered = view.render(&TextChartRenderer::default());

        assert_eq!(rendered.totals, AggregateTotals::default());
        assert_eq!(rendered.chart, ChartSection::Loading);
        assert!(rendered.to_string().contains(LOADING_PLACEHOLDER));
    }

    #[tokio::test]
    async fn test_activation_loads_once() {
        let loader = loader_with(spring_winter());
        let token = SessionToken::new("t");
        let mut view = DashboardView::mount();

        assert_eq!(view.activate(&loader, &token).await, Some(LoadOutcome::Published));
        // mock expects exactly one fetch
        assert_eq!(view.activate(&loader, &token).await, None);

        let rendered = view.render(&TextChartRenderer::new(10));
        assert_eq!(rendered.totals.submissions, 12.0);
        let text = rendered.to_string();
        assert!(text.contains("Total Users        10"));
        assert!(text.contains("Spring Cup | ####### 5"));
    }

    #[tokio::test]
    async fn test_render_failure_keeps_state() {
        let loader = loader_with(spring_winter());
        let mut view = DashboardView::mount();
        view.activate(&loader, &SessionToken::new("t")).await;
        let before = view.state().current();

        let rendered = view.render(&BrokenRenderer);
        assert_eq!(rendered.chart, ChartSection::Empty);
        assert_eq!(rendered.totals.users, 10);
        assert_eq!(view.guard().state(), GuardState::Degraded);
        assert_eq!(view.state().current(), before);

        view.retry_chart();
        let rendered = view.render(&TextChartRenderer::default());
        assert!(matches!(rendered.chart, ChartSection::Chart(_)));
    }

    #[tokio::test]
    async fn test_unmounted_view_discards_load() {
        let loader = loader_with(spring_winter());
        let mut view = DashboardView::mount();
        view.unmount();

        let outcome = view.activate(&loader, &SessionToken::new("t")).await;
        assert_eq!(outcome, Some(LoadOutcome::Discarded));
        assert!(view.state().current().chart.is_empty());
    }

    #[test]
    fn test_drop_deactivates_lifetime() {
        let view = DashboardView::mount();
        let lifetime = view.lifetime();
        drop(view);
        assert!(!lifetime.is_active());
    }
}
