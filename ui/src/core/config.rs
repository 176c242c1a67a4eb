//! Page configuration supplied by the hosting document.
//!
//! The server renders a JSON script element into the page:
//!
//! ```html
//! <script id="runindex-config" type="application/json">
//!   { "requestGuid": "…", "years": [2019, 2020, 2021] }
//! </script>
//! ```
//!
//! Every field is optional; a missing element means defaults all round.

use serde::Deserialize;
use thiserror::Error;
use time::OffsetDateTime;

use super::years::YearRange;

/// Id of the script element carrying the configuration JSON.
pub const CONFIG_ELEMENT_ID: &str = "runindex-config";

const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_YEAR_SPAN: i32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed page configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    /// Prefix for the statistics endpoints. Empty means same origin.
    pub api_base: String,
    pub request_guid: String,
    /// Years offered by both selectors, in display order.
    pub years: Vec<i32>,
    pub year_start: Option<i32>,
    pub year_finish: Option<i32>,
    pub request_timeout_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            request_guid: String::new(),
            years: Vec::new(),
            year_start: None,
            year_finish: None,
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load the configuration embedded in the page, falling back to defaults.
    pub fn load() -> Self {
        match read_embedded() {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(err) => {
                dioxus::logger::tracing::warn!("{err}; continuing with defaults");
                Self::default()
            }
        }
    }

    /// Years offered by the selectors: the configured list, or the most
    /// recent calendar years ending with the current one.
    pub fn offered_years(&self) -> Vec<i32> {
        if !self.years.is_empty() {
            return self.years.clone();
        }
        let current = OffsetDateTime::now_utc().year();
        (current - DEFAULT_YEAR_SPAN + 1..=current).collect()
    }

    /// Year selectors initialized from this configuration.
    pub fn year_range(&self) -> YearRange {
        let years = self.offered_years();
        YearRange::new(years.clone(), years, self.year_start, self.year_finish)
    }
}

#[cfg(target_arch = "wasm32")]
fn read_embedded() -> Result<Option<PageConfig>, ConfigError> {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => PageConfig::from_json(&raw).map(Some),
        _ => Ok(None),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_embedded() -> Result<Option<PageConfig>, ConfigError> {
    // Native builds have no hosting document.
    Ok(None)
}
