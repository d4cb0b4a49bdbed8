//! Chart rendering
//!
//! The charting collaborator sits behind [`ChartRenderer`]; [`RenderGuard`]
//! keeps its failures from reaching the rest of the view.

pub mod guard;
pub mod json;
pub mod text;
pub mod view;

use std::any::Any;

use crate::models::ChartSpec;

pub use guard::{ChartSection, GuardState, RenderGuard};
pub use json::JsonChartRenderer;
pub use text::TextChartRenderer;
pub use view::{DashboardView, RenderedDashboard};

/// Turns a chart description into displayable output
pub trait ChartRenderer {
    fn render(&self, spec: &ChartSpec) -> Result<String, RenderError>;
}

impl<T: ChartRenderer + ?Sized> ChartRenderer for Box<T> {
    fn render(&self, spec: &ChartSpec) -> Result<String, RenderError> {
        (**self).render(spec)
    }
}

/// Failure raised while rendering the chart
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Chart render failed: {message}")]
pub struct RenderError {
    pub message: String,
    /// Where in the renderer the failure happened, innermost first
    pub trace: Vec<String>,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            trace: Vec::new(),
        }
    }

    /// Append a frame to the trace
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.trace.push(frame.into());
        self
    }

    /// Build from a panic payload caught during rendering
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "renderer panicked".to_string()
        };
        Self::new(message).with_frame("panic")
    }
}
