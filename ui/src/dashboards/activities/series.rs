use crate::charts::{ChartStyle, Series};
use crate::core::format::activity_label;
use crate::core::records::ActivityRecord;

pub const ACTIVITIES_CANVAS_ID: &str = "activitiesChart";

pub const ACTIVITIES_STYLE: ChartStyle = ChartStyle {
    title: "Running index",
    x_label: "Date",
    y_label: "Index",
    border_color: "red",
};

/// One point per activity, valued by its running index.
pub fn activity_series(records: &[ActivityRecord]) -> Series {
    Series {
        labels: records.iter().map(activity_label).collect(),
        data: records.iter().map(|record| record.running_index).collect(),
    }
}
