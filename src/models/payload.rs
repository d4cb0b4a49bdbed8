//! Raw dashboard payload
//!
//! Shapes of the aggregation endpoint's response body. Only the nesting is
//! typed; every leaf stays a [`serde_json::Value`] because the backend gives
//! no guarantees about it.

use serde::Deserialize;
use serde_json::Value;

use crate::error::DashboardResult;

/// Response body of the aggregation endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardEnvelope {
    #[serde(rename = "dashboarDetails")]
    pub dashboard_details: RawDashboardPayload,
}

/// Dashboard details as sent by the backend
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDashboardPayload {
    /// Expected to be number-like
    #[serde(default)]
    pub users_count: Value,
    pub contest_submissions: RawContestSubmissions,
}

/// Per-contest submission sequences, positionally aligned
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContestSubmissions {
    /// Expected contest identifiers or labels
    pub contests: Vec<Value>,
    /// Expected numeric counts
    pub submissions_count: Vec<Value>,
}

impl RawDashboardPayload {
    /// Extract the dashboard details from a response body
    pub fn from_body(body: Value) -> DashboardResult<Self> {
        let envelope: DashboardEnvelope = serde_json::from_value(body)?;
        Ok(envelope.dashboard_details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use serde_json::json;

    #[test]
    fn test_from_body_keeps_leaves_untyped() {
        let body = json!({
            "dashboarDetails": {
                "usersCount": "10",
                "contestSubmissions": {
                    "contests": ["Spring Cup", null, {"name": "Finals"}],
                    "submissionsCount": [5, "7", -1]
                }
            }
        });

        let payload = RawDashboardPayload::from_body(body).unwrap();
        assert_eq!(payload.users_count, json!("10"));
        assert_eq!(payload.contest_submissions.contests.len(), 3);
        assert_eq!(payload.contest_submissions.contests[1], Value::Null);
        assert_eq!(payload.contest_submissions.submissions_count[1], json!("7"));
    }

    #[test]
    fn test_missing_users_count_is_null() {
        let body = json!({
            "dashboarDetails": {
                "contestSubmissions": { "contests": [], "submissionsCount": [] }
            }
        });

        let payload = RawDashboardPayload::from_body(body).unwrap();
        assert_eq!(payload.users_count, Value::Null);
    }

    #[test]
    fn test_non_sequence_contests_is_malformed() {
        let body = json!({
            "dashboarDetails": {
                "usersCount": 1,
                "contestSubmissions": { "contests": null, "submissionsCount": [] }
            }
        });

        let err = RawDashboardPayload::from_body(body).unwrap_err();
        assert!(matches!(err, DashboardError::MalformedPayload(_)));
    }

    #[test]
    fn test_missing_details_is_malformed() {
        let err = RawDashboardPayload::from_body(json!({ "dashboardDetails": {} })).unwrap_err();
        assert!(matches!(err, DashboardError::MalformedPayload(_)));
    }
}
