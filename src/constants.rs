//! Application-wide constants
//!
//! This module contains all constant values used throughout the dashboard.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// ENDPOINT DEFAULTS
// =============================================================================

/// Default path of the aggregation endpoint, relative to the API base URL
pub const DEFAULT_ENDPOINT_PATH: &str = "/admin/dashboard";

/// HTTP status the aggregation endpoint answers with on success
pub const SUCCESS_STATUS: u16 = 200;

// =============================================================================
// PRESENTATION DEFAULTS
// =============================================================================

/// Default width in characters of the longest bar in the terminal chart
pub const DEFAULT_CHART_WIDTH: usize = 40;

/// Maximum width of the terminal chart
pub const MAX_CHART_WIDTH: usize = 200;

/// Default logging filter
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// LABELS
// =============================================================================

/// Prefix of the positional fallback label (`"Contest 3"`)
pub const FALLBACK_LABEL_PREFIX: &str = "Contest";

/// Object field read when a raw contest entry is an object
pub const LABEL_NAME_FIELD: &str = "name";

/// Object keys that mark a UI element accidentally placed in the data
pub const ELEMENT_MARKER_KEYS: &[&str] = &["$$typeof", "prototype"];

/// Notification text used when an error carries no message
pub const FALLBACK_ERROR_MESSAGE: &str = "Data processing failed";

/// Placeholder shown while the chart has no data
pub const LOADING_PLACEHOLDER: &str = "Preparing visualization...";

/// Metric card captions
pub mod cards {
    pub const USERS: &str = "Total Users";
    pub const CONTESTS: &str = "Total Contests";
    pub const SUBMISSIONS: &str = "Total Submissions";
}

// =============================================================================
// CHART OPTIONS
// =============================================================================

/// Rendering options handed to the charting collaborator
pub mod chart {
    pub const TYPE: &str = "area";
    pub const HEIGHT: u32 = 350;
    pub const TITLE: &str = "Total Contest Submissions";
    pub const TITLE_ALIGN: &str = "center";
    pub const SERIES_NAME: &str = "Submission Count";
    /// Y axis labels are whole numbers
    pub const Y_AXIS_DECIMALS: u8 = 0;
}
