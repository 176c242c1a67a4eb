//! In-memory backend used where no charting library is available.

use dioxus::logger::tracing::debug;

use super::{ChartBackend, ChartError, LineChartConfig, Series};

#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

/// Chart state kept by [`Headless`]: the live configuration and how many
/// times it was redrawn after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessChart {
    pub canvas_id: String,
    pub config: LineChartConfig,
    pub redraws: usize,
}

impl ChartBackend for Headless {
    type Chart = HeadlessChart;

    fn create(&self, canvas_id: &str, config: &LineChartConfig) -> Result<HeadlessChart, ChartError> {
        debug!(canvas_id, points = config.data.labels.len(), "headless chart created");
        Ok(HeadlessChart {
            canvas_id: canvas_id.to_string(),
            config: config.clone(),
            redraws: 0,
        })
    }

    fn update(&self, chart: &mut HeadlessChart, series: &Series) -> Result<(), ChartError> {
        chart.config.set_series(series);
        chart.redraws += 1;
        debug!(canvas_id = %chart.canvas_id, points = series.len(), "headless chart redrawn");
        Ok(())
    }
}
