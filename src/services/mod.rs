//! Business logic services

pub mod dashboard_service;
pub mod loader;
pub mod sanitizer;

pub use dashboard_service::DashboardService;
pub use loader::{DashboardLoader, LoadOutcome};
