//! Utility functions

pub mod format;
pub mod validation;

pub use format::format_number;
pub use validation::{non_blank, sanitize_string};
