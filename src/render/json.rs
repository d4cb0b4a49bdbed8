//! JSON renderer: emits the charting collaborator contract as-is

use crate::models::ChartSpec;
use crate::render::{ChartRenderer, RenderError};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonChartRenderer {
    pub pretty: bool,
}

impl ChartRenderer for JsonChartRenderer {
    fn render(&self, spec: &ChartSpec) -> Result<String, RenderError> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(spec)
        } else {
            serde_json::to_string(spec)
        };
        rendered.map_err(|e| RenderError::new(e.to_string()).with_frame("JsonChartRenderer"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChartModel, ContestLabel, SubmissionCount};

    #[test]
    fn test_renders_series_and_categories() {
        let spec = ChartModel::try_new(
            vec![ContestLabel::from_text("Finals").unwrap()],
            vec![SubmissionCount::new(3.0).unwrap()],
        )
        .unwrap()
        .to_spec();

        let output = JsonChartRenderer::default().render(&spec).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["options"]["xaxis"]["categories"][0], "Finals");
        assert_eq!(value["series"][0]["name"], "Submission Count");
        assert_eq!(value["series"][0]["data"][0], 3.0);
    }
}
