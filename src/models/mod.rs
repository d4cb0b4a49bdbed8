//! Domain models
//!
//! Raw payload shapes, sanitized dashboard values and the chart contract.

pub mod chart;
pub mod dashboard;
pub mod payload;

pub use chart::*;
pub use dashboard::*;
pub use payload::*;
