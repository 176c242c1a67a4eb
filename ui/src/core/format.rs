//! Formatting helpers for hover labels.

use super::records::{ActivityRecord, PerformanceRecord};

/// Multi-line hover label for one activity point.
pub fn activity_label(record: &ActivityRecord) -> Vec<String> {
    vec![
        format!("Date: {}", record.event_date),
        format!("Distance: {}", record.distance),
        format!("Duration: {}", record.duration),
        format!("Avg pace: {}", record.avg_pace),
        format!("Avg HR: {}", record.avg_hr),
        format!("Elevation gain: {}", record.elevation_gain),
    ]
}

/// Multi-line hover label for one weekly aggregate point.
pub fn performance_label(record: &PerformanceRecord) -> Vec<String> {
    vec![
        format!("Year: {}", record.year),
        format!("Week: {}", record.week),
        format!("Running index per week: {}", record.avg_running_index),
    ]
}
