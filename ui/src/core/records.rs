//! Records returned by the statistics endpoints.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One logged activity as served by `/rest/request/{guid}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    #[serde(default)]
    pub event_date: Reading,
    #[serde(default)]
    pub distance: Reading,
    #[serde(default)]
    pub duration: Reading,
    #[serde(default)]
    pub avg_pace: Reading,
    #[serde(default)]
    pub avg_hr: Reading,
    #[serde(default)]
    pub elevation_gain: Reading,
    pub running_index: f64,
}

/// Weekly aggregate as served by `/rest/request/{guid}/statistic`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    pub year: i32,
    pub week: u32,
    pub avg_running_index: f64,
}

/// A descriptive field shown verbatim in hover labels.
///
/// The server is free to send either numbers or preformatted strings
/// (`"00:42:10"`, `"5:12"`), so both are accepted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Number(value) => write!(f, "{value}"),
            Reading::Text(text) => f.write_str(text),
            Reading::Missing => f.write_str("—"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn activity_accepts_numbers_and_strings() {
        let record: ActivityRecord = serde_json::from_value(json!({
            "eventDate": "2020-05-01",
            "distance": 10.5,
            "duration": "00:52:13",
            "avgPace": "4:58",
            "avgHr": 151,
            "elevationGain": 84,
            "runningIndex": 52.0
        }))
        .unwrap();

        assert_eq!(record.event_date, Reading::Text("2020-05-01".into()));
        assert_eq!(record.distance, Reading::Number(10.5));
        assert_eq!(record.avg_hr.to_string(), "151");
        assert_eq!(record.running_index, 52.0);
    }

    #[test]
    fn missing_and_null_fields_read_as_missing() {
        let record: ActivityRecord = serde_json::from_value(json!({
            "eventDate": "2021-01-02",
            "avgHr": null,
            "runningIndex": 48.5
        }))
        .unwrap();

        assert_eq!(record.distance, Reading::Missing);
        assert_eq!(record.avg_hr, Reading::Missing);
        assert_eq!(record.avg_hr.to_string(), "—");
    }

    #[test]
    fn activity_without_running_index_is_rejected() {
        let result: Result<ActivityRecord, _> =
            serde_json::from_value(json!({ "eventDate": "2021-01-02" }));
        assert!(result.is_err());
    }

    #[test]
    fn performance_uses_camel_case() {
        let record: PerformanceRecord = serde_json::from_value(json!({
            "year": 2019,
            "week": 7,
            "avgRunningIndex": 50.25
        }))
        .unwrap();

        assert_eq!(
            record,
            PerformanceRecord {
                year: 2019,
                week: 7,
                avg_running_index: 50.25,
            }
        );
    }
}
