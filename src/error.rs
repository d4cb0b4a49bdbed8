//! Custom error types and handling
//!
//! This module defines the dashboard's error types and how each one is
//! classified and surfaced to the user.

use serde::Serialize;

use crate::constants::FALLBACK_ERROR_MESSAGE;

/// Dashboard-wide error type
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    // Transport errors
    #[error("Network error: {0}")]
    Network(String),

    #[error("Dashboard request failed with status {0}")]
    UnexpectedStatus(u16),

    // Payload errors
    #[error("Data length mismatch between contests ({contests}) and submissions ({counts})")]
    DataShapeMismatch { contests: usize, counts: usize },

    #[error("Malformed dashboard payload: {0}")]
    MalformedPayload(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

/// Error classes a fetch failure falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Transport failure or non-success status
    NetworkFailure,
    /// Contest labels and submission counts disagree in length
    DataShapeMismatch,
    /// Anything else raised while sanitizing or building
    Processing,
}

impl DashboardError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Network(_) => "NETWORK_ERROR",
            Self::UnexpectedStatus(_) => "UNEXPECTED_STATUS",
            Self::DataShapeMismatch { .. } => "DATA_SHAPE_MISMATCH",
            Self::MalformedPayload(_) => "MALFORMED_PAYLOAD",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) | Self::UnexpectedStatus(_) => ErrorKind::NetworkFailure,
            Self::DataShapeMismatch { .. } => ErrorKind::DataShapeMismatch,
            Self::MalformedPayload(_) | Self::Configuration(_) | Self::Internal(_) => {
                ErrorKind::Processing
            }
        }
    }

    /// Human-readable text for the notification collaborator
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DashboardError::MalformedPayload(err.to_string())
        } else {
            DashboardError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::MalformedPayload(err.to_string())
    }
}

impl From<validator::ValidationErrors> for DashboardError {
    fn from(err: validator::ValidationErrors) -> Self {
        DashboardError::Configuration(err.to_string())
    }
}

/// Result type alias using DashboardError
pub type DashboardResult<T> = Result<T, DashboardError>;
