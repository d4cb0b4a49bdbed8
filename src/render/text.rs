//! Terminal bar chart renderer

use crate::constants::DEFAULT_CHART_WIDTH;
use crate::models::ChartSpec;
use crate::render::{ChartRenderer, RenderError};
use crate::utils::format_number;

/// Renders the first series as horizontal bars, one line per category
#[derive(Debug, Clone, Copy)]
pub struct TextChartRenderer {
    /// Width of the longest bar
    width: usize,
}

impl TextChartRenderer {
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
        }
    }
}

impl Default for TextChartRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_CHART_WIDTH)
    }
}

impl ChartRenderer for TextChartRenderer {
    fn render(&self, spec: &ChartSpec) -> Result<String, RenderError> {
        let series = spec
            .series
            .first()
            .ok_or_else(|| RenderError::new("no series to draw").with_frame("TextChartRenderer"))?;
        let categories = &spec.options.xaxis.categories;
        if categories.len() != series.data.len() {
            return Err(RenderError::new(format!(
                "{} categories for {} data points",
                categories.len(),
                series.data.len()
            ))
            .with_frame("series")
            .with_frame("TextChartRenderer"));
        }

        let label_width = categories
            .iter()
            .map(|c| c.as_str().chars().count())
            .max()
            .unwrap_or(0);
        let max = series
            .data
            .iter()
            .map(|count| count.value())
            .fold(0.0_f64, f64::max);

        let title = &spec.options.title.text;
        let total_width = label_width + 3 + self.width;
        let mut out = format!("{title:^total_width$}\n");

        for (label, count) in categories.iter().zip(&series.data) {
            let bar = if max > 0.0 {
                ((count.value() / max) * self.width as f64).round() as usize
            } else {
                0
            };
            out.push_str(&format!(
                "{:<label_width$} | {} {}\n",
                label.as_str(),
                "#".repeat(bar),
                format_number(count.value())
            ));
        }
        out.push_str(&format!("{:>label_width$}   {}\n", "", series.name));

        Ok(out)
    }
}
