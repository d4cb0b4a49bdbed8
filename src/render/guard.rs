//! Render guard
//!
//! Two states. `Normal` renders the chart, or the loading placeholder while
//! the series is empty. The first failure moves to `Degraded`, which renders
//! nothing until [`RenderGuard::retry`] is called.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, error};

use crate::models::ChartModel;
use crate::render::{ChartRenderer, RenderError};

/// Guard state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    #[default]
    Normal,
    Degraded,
}

/// What the chart section shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartSection {
    /// Rendered chart output
    Chart(String),
    /// No data yet
    Loading,
    /// Rendering failed; nothing is shown
    Empty,
}

/// Containment boundary around the chart renderer
#[derive(Debug, Default)]
pub struct RenderGuard {
    state: GuardState,
    last_failure: Option<RenderError>,
}

impl RenderGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Failure that degraded the guard, if any
    pub fn last_failure(&self) -> Option<&RenderError> {
        self.last_failure.as_ref()
    }

    /// Render the chart section. Never fails and never panics, whatever
    /// the renderer does.
    pub fn render<R>(&mut self, chart: &ChartModel, renderer: &R) -> ChartSection
    where
        R: ChartRenderer + ?Sized,
    {
        if self.state == GuardState::Degraded {
            return ChartSection::Empty;
        }
        if chart.is_empty() {
            return ChartSection::Loading;
        }

        let spec = chart.to_spec();
        match panic::catch_unwind(AssertUnwindSafe(|| renderer.render(&spec))) {
            Ok(Ok(output)) => ChartSection::Chart(output),
            Ok(Err(err)) => self.degrade(err),
            Err(payload) => self.degrade(RenderError::from_panic(payload)),
        }
    }

    /// Leave `Degraded` so the next render tries the chart again
    pub fn retry(&mut self) {
        if self.state == GuardState::Degraded {
            debug!("Render guard reset");
        }
        self.state = GuardState::Normal;
        self.last_failure = None;
    }

    fn degrade(&mut self, err: RenderError) -> ChartSection {
        error!(error = %err, "Chart Error");
        debug!(trace = ?err.trace, "Chart error trace");
        self.state = GuardState::Degraded;
        self.last_failure = Some(err);
        ChartSection::Empty
    }
}
