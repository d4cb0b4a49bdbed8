//! Dashboard service
//!
//! Builds the presented model out of a raw payload: sanitized chart model
//! first, then the totals derived from it.

use serde_json::Value;
use tracing::warn;

use crate::{
    error::DashboardResult,
    models::{AggregateTotals, ChartModel, RawDashboardPayload, SubmissionCount, ViewState},
    services::sanitizer,
};

/// Aggregate model builder
pub struct DashboardService;

impl DashboardService {
    /// Derive the metric card totals from a validated chart model
    pub fn build_totals(chart: &ChartModel, raw_users_count: &Value) -> AggregateTotals {
        AggregateTotals {
            users: sanitizer::sanitize_users_count(raw_users_count),
            contests: chart.categories().len() as u64,
            submissions: Self::total_submissions(chart.series()),
        }
    }

    /// Sum of the series, saturating at `f64::MAX`
    fn total_submissions(series: &[SubmissionCount]) -> f64 {
        let total: f64 = series.iter().map(|count| count.value()).sum();
        if total.is_finite() {
            total
        } else {
            warn!(entries = series.len(), "Submission total overflowed, capping");
            f64::MAX
        }
    }

    /// Build the chart model from the raw contest and count sequences
    pub fn build_chart(payload: &RawDashboardPayload) -> DashboardResult<ChartModel> {
        let submissions = &payload.contest_submissions;
        let labels = sanitizer::sanitize_labels(&submissions.contests);
        let counts = sanitizer::validate_counts(&submissions.submissions_count);
        sanitizer::reconcile(labels, counts)
    }

    /// Run the whole pipeline over one payload
    pub fn build_view_state(payload: &RawDashboardPayload) -> DashboardResult<ViewState> {
        let chart = Self::build_chart(payload)?;
        let totals = Self::build_totals(&chart, &payload.users_count);
        Ok(ViewState { totals, chart })
    }
}
