//! Dashboard loader
//!
//! Fetches the aggregates once, runs them through the sanitizer and the
//! builder, and publishes the result. Every failure stops at this boundary:
//! it is logged, routed to the notifier, and the view keeps its prior state.

use tracing::{debug, error, info};

use crate::{
    client::{DashboardSource, SessionToken},
    constants::SUCCESS_STATUS,
    error::{DashboardError, DashboardResult, ErrorKind},
    models::{RawDashboardPayload, ViewState},
    notify::{Notifier, Severity},
    services::DashboardService,
    state::{ViewLifetime, ViewStateContainer},
};

/// Outcome of one dashboard load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// New state was published to the view
    Published,
    /// The load failed and the user was notified
    Failed(ErrorKind),
    /// The view was unmounted before the load completed
    Discarded,
}

/// Fetch orchestrator for the dashboard view
pub struct DashboardLoader<S, N> {
    source: S,
    notifier: N,
}

impl<S, N> DashboardLoader<S, N>
where
    S: DashboardSource,
    N: Notifier,
{
    pub fn new(source: S, notifier: N) -> Self {
        Self { source, notifier }
    }

    /// Fetch and build the view state without publishing it
    pub async fn fetch_view_state(&self, token: &SessionToken) -> DashboardResult<ViewState> {
        let response = self.source.fetch_dashboard(token).await?;
        if response.status != SUCCESS_STATUS {
            return Err(DashboardError::UnexpectedStatus(response.status));
        }

        let payload = RawDashboardPayload::from_body(response.body)?;
        DashboardService::build_view_state(&payload)
    }

    /// Load the dashboard into `state`.
    ///
    /// Publishes only while `lifetime` is active; a completion that arrives
    /// after the view is gone is dropped without publishing or notifying.
    pub async fn load_dashboard(
        &self,
        token: &SessionToken,
        state: &ViewStateContainer,
        lifetime: &ViewLifetime,
    ) -> LoadOutcome {
        let result = self.fetch_view_state(token).await;

        if !lifetime.is_active() {
            debug!(
                succeeded = result.is_ok(),
                "View deactivated before dashboard load completed, discarding result"
            );
            return LoadOutcome::Discarded;
        }

        match result {
            Ok(view_state) => {
                info!(
                    users = view_state.totals.users,
                    contests = view_state.totals.contests,
                    submissions = view_state.totals.submissions,
                    "Dashboard loaded"
                );
                state.replace(view_state);
                LoadOutcome::Published
            }
            Err(err) => {
                error!(code = err.error_code(), error = %err, "Dashboard error");
                self.notifier.notify(&err.user_message(), Severity::Error);
                LoadOutcome::Failed(err.kind())
            }
        }
    }
}
