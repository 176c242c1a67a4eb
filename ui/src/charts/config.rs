//! Chart.js 2.x line chart configuration.

use serde::Serialize;

use super::{ChartStyle, Series};

const TRANSPARENT: &str = "rgba(0,0,0,0.0)";
const TITLE_FONT_SIZE: u32 = 22;
const AXIS_FONT_SIZE: u32 = 18;
const TOOLTIP_FONT_SIZE: u32 = 14;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<Vec<String>>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub data: Vec<f64>,
    pub background_color: &'static str,
    pub border_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub legend: Legend,
    pub title: Title,
    pub tooltips: Tooltips,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub display: bool,
    pub text: &'static str,
    pub font_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltips {
    pub mode: &'static str,
    pub intersect: bool,
    pub body_font_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scales {
    pub x_axes: Vec<Axis>,
    pub y_axes: Vec<Axis>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub display: bool,
    pub scale_label: ScaleLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleLabel {
    pub display: bool,
    pub font_size: u32,
    pub label_string: &'static str,
}

impl LineChartConfig {
    pub fn new(style: &ChartStyle, series: &Series) -> Self {
        Self {
            kind: "line",
            data: ChartData {
                labels: series.labels.clone(),
                datasets: vec![Dataset {
                    data: series.data.clone(),
                    background_color: TRANSPARENT,
                    border_color: style.border_color,
                }],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                legend: Legend { display: false },
                title: Title {
                    display: true,
                    text: style.title,
                    font_size: TITLE_FONT_SIZE,
                },
                tooltips: Tooltips {
                    mode: "nearest",
                    intersect: false,
                    body_font_size: TOOLTIP_FONT_SIZE,
                },
                scales: Scales {
                    // The x axis only carries hover labels.
                    x_axes: vec![axis(false, style.x_label)],
                    y_axes: vec![axis(true, style.y_label)],
                },
            },
        }
    }

    /// Replace labels and the single dataset's values.
    pub fn set_series(&mut self, series: &Series) {
        self.data.labels = series.labels.clone();
        if let Some(dataset) = self.data.datasets.first_mut() {
            dataset.data = series.data.clone();
        }
    }
}

fn axis(display: bool, label: &'static str) -> Axis {
    Axis {
        display,
        scale_label: ScaleLabel {
            display: true,
            font_size: AXIS_FONT_SIZE,
            label_string: label,
        },
    }
}
