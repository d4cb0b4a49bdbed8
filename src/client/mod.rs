//! Aggregation endpoint client
//!
//! The dashboard reads its data through [`DashboardSource`]; the HTTP
//! implementation lives in [`http`].

pub mod http;

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::DashboardResult;

pub use http::HttpDashboardSource;

/// Credential of the current session
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token value, as sent in the `Authorization` header
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

/// Status and body of one endpoint call
#[derive(Debug, Clone, PartialEq)]
pub struct SourceResponse {
    pub status: u16,
    /// `Null` for non-success responses
    pub body: Value,
}

/// Source of the raw dashboard payload
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Fetch the dashboard aggregates on behalf of `token`
    async fn fetch_dashboard(&self, token: &SessionToken) -> DashboardResult<SourceResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_debug_is_redacted() {
        let token = SessionToken::new("eyJhbGciOi.secret");
        assert_eq!(format!("{token:?}"), "SessionToken(***)");
        assert_eq!(token.expose(), "eyJhbGciOi.secret");
    }
}
