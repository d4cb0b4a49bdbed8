//! Dashboard model
//!
//! Sanitized values and the two shapes the view presents: scalar totals and
//! the category/series pair behind the submissions chart.

use std::fmt;

use serde::Serialize;

use crate::constants::FALLBACK_LABEL_PREFIX;
use crate::error::{DashboardError, DashboardResult};
use crate::models::chart::ChartSpec;
use crate::utils::{format_number, non_blank};

/// Display-safe contest label. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContestLabel(String);

impl ContestLabel {
    /// Build a label from text, `None` when nothing is left after sanitizing
    pub fn from_text(text: &str) -> Option<Self> {
        non_blank(text).map(Self)
    }

    /// Generated label for the entry at `index` (0-based): `"Contest {index + 1}"`
    pub fn positional(index: usize) -> Self {
        Self(format!("{} {}", FALLBACK_LABEL_PREFIX, index + 1))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContestLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContestLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Submission count that is finite and non-negative
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct SubmissionCount(f64);

impl SubmissionCount {
    pub const ZERO: Self = Self(0.0);

    /// `None` for non-finite or negative values
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() && value >= 0.0 {
            // normalizes -0.0
            Some(Self(value + 0.0))
        } else {
            None
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for SubmissionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_number(self.0))
    }
}

/// Scalar totals shown on the metric cards
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AggregateTotals {
    pub users: u64,
    pub contests: u64,
    /// Exact sum of the chart series
    pub submissions: f64,
}

/// Chart-ready categories and series.
///
/// Both sequences always have the same length and keep the backend's order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartModel {
    categories: Vec<ContestLabel>,
    series: Vec<SubmissionCount>,
}

impl ChartModel {
    /// Pair labels with counts. Mismatched lengths are an error, never
    /// truncated or padded.
    pub fn try_new(
        categories: Vec<ContestLabel>,
        series: Vec<SubmissionCount>,
    ) -> DashboardResult<Self> {
        if categories.len() != series.len() {
            return Err(DashboardError::DataShapeMismatch {
                contests: categories.len(),
                counts: series.len(),
            });
        }
        Ok(Self { categories, series })
    }

    pub fn categories(&self) -> &[ContestLabel] {
        &self.categories
    }

    pub fn series(&self) -> &[SubmissionCount] {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Contract handed to the charting collaborator
    pub fn to_spec(&self) -> ChartSpec {
        ChartSpec::submissions(self)
    }
}

/// Everything the view presents. Replaced as a whole, never patched.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ViewState {
    pub totals: AggregateTotals,
    pub chart: ChartModel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_label_is_one_based() {
        assert_eq!(ContestLabel::positional(0).as_str(), "Contest 1");
        assert_eq!(ContestLabel::positional(2).as_str(), "Contest 3");
    }

    #[test]
    fn test_label_from_blank_text() {
        assert!(ContestLabel::from_text("  \n").is_none());
        assert_eq!(
            ContestLabel::from_text(" Spring Cup ").unwrap().as_str(),
            "Spring Cup"
        );
    }

    #[test]
    fn test_submission_count_rejects_invalid() {
        assert!(SubmissionCount::new(-4.0).is_none());
        assert!(SubmissionCount::new(f64::NAN).is_none());
        assert!(SubmissionCount::new(f64::INFINITY).is_none());
        assert_eq!(SubmissionCount::new(-0.0).unwrap().value().to_bits(), 0.0f64.to_bits());
        assert_eq!(SubmissionCount::new(7.0).unwrap().to_string(), "7");
    }

    #[test]
    fn test_chart_model_rejects_mismatch() {
        let err = ChartModel::try_new(
            vec![ContestLabel::positional(0), ContestLabel::positional(1)],
            vec![SubmissionCount::ZERO],
        )
        .unwrap_err();

        match err {
            DashboardError::DataShapeMismatch { contests, counts } => {
                assert_eq!(contests, 2);
                assert_eq!(counts, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_default_view_state_is_empty() {
        let state = ViewState::default();
        assert_eq!(state.totals, AggregateTotals::default());
        assert!(state.chart.is_empty());
        assert_eq!(state.chart.len(), 0);
    }
}
