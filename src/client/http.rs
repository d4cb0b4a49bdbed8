//! HTTP dashboard source

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde_json::{json, Value};
use tracing::{debug, warn};
use validator::Validate;

use crate::{
    client::{DashboardSource, SessionToken, SourceResponse},
    config::ApiConfig,
    constants::SUCCESS_STATUS,
    error::DashboardResult,
};

/// Dashboard source backed by the aggregation endpoint
#[derive(Debug, Clone)]
pub struct HttpDashboardSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpDashboardSource {
    /// Create a source from configuration. The configuration is validated first.
    pub fn new(config: &ApiConfig) -> DashboardResult<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint_url(),
        })
    }

}

#[async_trait]
impl DashboardSource for HttpDashboardSource {
    async fn fetch_dashboard(&self, token: &SessionToken) -> DashboardResult<SourceResponse> {
        debug!(endpoint = %self.endpoint, "Requesting dashboard aggregates");

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, token.expose())
            .json(&json!({}))
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != SUCCESS_STATUS {
            warn!(endpoint = %self.endpoint, status, "Dashboard endpoint returned non-success status");
            return Ok(SourceResponse {
                status,
                body: Value::Null,
            });
        }

        let body = response.json::<Value>().await?;

        Ok(SourceResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_ENDPOINT_PATH;
    use crate::error::DashboardError;

    fn api_config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            token: SessionToken::new("token"),
            request_timeout: None,
        }
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let err = HttpDashboardSource::new(&api_config("not a url")).unwrap_err();
        assert!(matches!(err, DashboardError::Configuration(_)));
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }

    #[test]
    fn test_new_joins_endpoint() {
        let source = HttpDashboardSource::new(&api_config("http://localhost:8080/api/")).unwrap();
        assert_eq!(source.endpoint, "http://localhost:8080/api/admin/dashboard");
    }
}
