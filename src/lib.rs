//! AlgoJudge Dashboard - Admin Summary View
//!
//! This library provides the admin dashboard of the AlgoJudge platform: it
//! fetches the aggregate counts once, sanitizes the untrusted payload into a
//! chart-ready model and renders it behind a guard that contains chart
//! failures.
//!
//! # Architecture
//!
//! - **Client**: the aggregation endpoint (`DashboardSource`)
//! - **Services**: sanitizer, model builder and the one-shot loader
//! - **State**: the view state container and the mount lifetime
//! - **Render**: the render guard, chart renderers and the view itself
//! - **Models**: raw payload, sanitized model and chart contract

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod notify;
pub mod render;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{DashboardError, DashboardResult};
pub use render::DashboardView;
pub use services::{DashboardLoader, LoadOutcome};
