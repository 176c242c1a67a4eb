//! Line charts drawn by the page's charting library.
//!
//! A [`ChartHandle`] belongs to one view. The first successful render creates
//! the chart on the view's canvas; later renders replace labels and data in
//! place and ask the library to redraw.

pub mod config;
pub use config::LineChartConfig;

#[cfg(target_arch = "wasm32")]
mod chartjs;
#[cfg(target_arch = "wasm32")]
pub use chartjs::ChartJs;

mod headless;
pub use headless::{Headless, HeadlessChart};

use thiserror::Error;

/// Backend used by the views on the current target.
#[cfg(target_arch = "wasm32")]
pub type PlatformBackend = ChartJs;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformBackend = Headless;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart library is not loaded")]
    LibraryMissing,
    #[error("canvas `{0}` not found")]
    CanvasMissing(String),
    #[error("chart call failed: {0}")]
    Js(String),
    #[error("chart configuration could not be encoded: {0}")]
    Config(String),
}

/// Labels and values of a single-dataset line chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    /// One multi-line hover label per point.
    pub labels: Vec<Vec<String>>,
    pub data: Vec<f64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Fixed presentation of one view's chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub border_color: &'static str,
}

pub trait ChartBackend {
    type Chart;

    fn create(&self, canvas_id: &str, config: &LineChartConfig) -> Result<Self::Chart, ChartError>;

    /// Replace labels and data of an existing chart and redraw it.
    fn update(&self, chart: &mut Self::Chart, series: &Series) -> Result<(), ChartError>;
}

pub struct ChartHandle<B: ChartBackend> {
    backend: B,
    canvas_id: &'static str,
    style: ChartStyle,
    chart: Option<B::Chart>,
    series: Series,
}

impl<B: ChartBackend> ChartHandle<B> {
    pub fn new(backend: B, canvas_id: &'static str, style: ChartStyle) -> Self {
        Self {
            backend,
            canvas_id,
            style,
            chart: None,
            series: Series::default(),
        }
    }

    /// Create the chart if absent, otherwise update it in place.
    ///
    /// On error the previously rendered series stays current.
    pub fn render(&mut self, series: Series) -> Result<(), ChartError> {
        match self.chart.as_mut() {
            Some(chart) => self.backend.update(chart, &series)?,
            None => {
                let config = LineChartConfig::new(&self.style, &series);
                self.chart = Some(self.backend.create(self.canvas_id, &config)?);
            }
        }
        self.series = series;
        Ok(())
    }

    pub fn is_drawn(&self) -> bool {
        self.chart.is_some()
    }

    pub fn chart(&self) -> Option<&B::Chart> {
        self.chart.as_ref()
    }

    pub fn data(&self) -> &[f64] {
        &self.series.data
    }
}
