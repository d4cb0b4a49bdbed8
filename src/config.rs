//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the dashboard is mounted.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use validator::Validate;

use crate::client::SessionToken;
use crate::constants::{
    DEFAULT_CHART_WIDTH, DEFAULT_ENDPOINT_PATH, DEFAULT_LOG_FILTER, MAX_CHART_WIDTH,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub view: ViewConfig,
    pub logging: LoggingConfig,
}

/// Aggregation endpoint configuration
#[derive(Debug, Clone, Validate)]
pub struct ApiConfig {
    #[validate(url)]
    pub base_url: String,
    pub endpoint_path: String,
    /// Credential of the current session, sent as the `Authorization` header
    pub token: SessionToken,
    /// No timeout when unset
    pub request_timeout: Option<Duration>,
}

/// Presentation configuration
#[derive(Debug, Clone, Validate)]
pub struct ViewConfig {
    pub chart_format: ChartFormat,
    /// Width of the longest bar in the terminal chart
    #[validate(range(min = 1, max = MAX_CHART_WIDTH))]
    pub chart_width: usize,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub rust_log: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

/// How the chart section is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Text,
    Json,
}

impl FromStr for ChartFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue("DASHBOARD_CHART_FORMAT".to_string())),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Self {
            api: ApiConfig::from_env()?,
            view: ViewConfig::from_env()?,
            logging: LoggingConfig::from_env(),
        };
        config.validate()?;

        Ok(config)
    }

    /// Validate all sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        self.view
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(())
    }
}

impl ApiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let request_timeout = match env::var("DASHBOARD_REQUEST_TIMEOUT_SECS") {
            Ok(value) => Some(Duration::from_secs(value.trim().parse().map_err(|_| {
                ConfigError::InvalidValue("DASHBOARD_REQUEST_TIMEOUT_SECS".to_string())
            })?)),
            Err(_) => None,
        };

        Ok(Self {
            base_url: env::var("DASHBOARD_API_URL")
                .map_err(|_| ConfigError::Missing("DASHBOARD_API_URL".to_string()))?,
            endpoint_path: env::var("DASHBOARD_ENDPOINT_PATH")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT_PATH.to_string()),
            token: env::var("DASHBOARD_TOKEN")
                .map(SessionToken::new)
                .map_err(|_| ConfigError::Missing("DASHBOARD_TOKEN".to_string()))?,
            request_timeout,
        })
    }

    /// Full URL of the aggregation endpoint
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint_path.trim_start_matches('/')
        )
    }
}

impl ViewConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            chart_format: env::var("DASHBOARD_CHART_FORMAT")
                .unwrap_or_else(|_| "text".to_string())
                .parse()?,
            chart_width: env::var("DASHBOARD_CHART_WIDTH")
                .unwrap_or_else(|_| DEFAULT_CHART_WIDTH.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DASHBOARD_CHART_WIDTH".to_string()))?,
        })
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            chart_format: ChartFormat::Text,
            chart_width: DEFAULT_CHART_WIDTH,
        }
    }
}

impl LoggingConfig {
    fn from_env() -> Self {
        Self {
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            json: env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            token: SessionToken::new("token"),
            request_timeout: None,
        }
    }

    #[test]
    fn test_endpoint_url_joins_slashes() {
        assert_eq!(
            api_config("http://localhost:8080/api/v1/").endpoint_url(),
            "http://localhost:8080/api/v1/admin/dashboard"
        );
        assert_eq!(
            api_config("http://localhost:8080").endpoint_url(),
            "http://localhost:8080/admin/dashboard"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = Config {
            api: api_config("not a url"),
            view: ViewConfig::default(),
            logging: LoggingConfig {
                rust_log: "info".to_string(),
                json: false,
            },
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_chart_width_range() {
        let view = ViewConfig {
            chart_format: ChartFormat::Text,
            chart_width: 0,
        };
        assert!(view.validate().is_err());
        let view = ViewConfig {
            chart_format: ChartFormat::Text,
            chart_width: MAX_CHART_WIDTH + 1,
        };
        assert!(view.validate().is_err());
        assert!(ViewConfig::default().validate().is_ok());
    }

    #[test]
    fn test_chart_format_parse() {
        assert_eq!("JSON".parse::<ChartFormat>().unwrap(), ChartFormat::Json);
        assert_eq!(" text ".parse::<ChartFormat>().unwrap(), ChartFormat::Text);
        assert!("svg".parse::<ChartFormat>().is_err());
    }
}
