use crate::charts::{ChartStyle, Series};
use crate::core::format::performance_label;
use crate::core::records::PerformanceRecord;

pub const PERFORMANCE_CANVAS_ID: &str = "performanceChart";

pub const PERFORMANCE_STYLE: ChartStyle = ChartStyle {
    title: "Running index",
    x_label: "Date",
    y_label: "Index",
    border_color: "green",
};

/// One point per (year, week), valued by the week's average running index.
pub fn performance_series(records: &[PerformanceRecord]) -> Series {
    Series {
        labels: records.iter().map(performance_label).collect(),
        data: records.iter().map(|record| record.avg_running_index).collect(),
    }
}
