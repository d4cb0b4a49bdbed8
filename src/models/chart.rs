//! Charting collaborator contract
//!
//! `{ options: {...}, series: [{ name, data }] }`, serialized in the
//! camelCase shape the charting library reads.

use serde::Serialize;

use crate::constants::chart;
use crate::models::dashboard::{ChartModel, ContestLabel, SubmissionCount};

/// Full chart description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub options: ChartOptions,
    pub series: Vec<ChartSeries>,
}

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub chart: ChartConfig,
    pub xaxis: XAxis,
    pub yaxis: YAxis,
    pub title: ChartTitle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub height: u32,
    pub animations: Animations,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Animations {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XAxis {
    pub categories: Vec<ContestLabel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxis {
    pub decimals_in_float: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartTitle {
    pub text: String,
    pub align: String,
}

/// One named data series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub data: Vec<SubmissionCount>,
}

impl ChartSpec {
    /// Area chart of submissions per contest
    pub fn submissions(model: &ChartModel) -> Self {
        Self {
            options: ChartOptions {
                chart: ChartConfig {
                    kind: chart::TYPE.to_string(),
                    height: chart::HEIGHT,
                    animations: Animations { enabled: false },
                },
                xaxis: XAxis {
                    categories: model.categories().to_vec(),
                },
                yaxis: YAxis {
                    decimals_in_float: chart::Y_AXIS_DECIMALS,
                },
                title: ChartTitle {
                    text: chart::TITLE.to_string(),
                    align: chart::TITLE_ALIGN.to_string(),
                },
            },
            series: vec![ChartSeries {
                name: chart::SERIES_NAME.to_string(),
                data: model.series().to_vec(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_spec_serializes_collaborator_shape() {
        let model = ChartModel::try_new(
            vec![ContestLabel::from_text("Spring Cup").unwrap()],
            vec![SubmissionCount::new(5.0).unwrap()],
        )
        .unwrap();

        let value = serde_json::to_value(model.to_spec()).unwrap();
        assert_eq!(
            value,
            json!({
                "options": {
                    "chart": { "type": "area", "height": 350, "animations": { "enabled": false } },
                    "xaxis": { "categories": ["Spring Cup"] },
                    "yaxis": { "decimalsInFloat": 0 },
                    "title": { "text": "Total Contest Submissions", "align": "center" }
                },
                "series": [{ "name": "Submission Count", "data": [5.0] }]
            })
        );
    }
}
