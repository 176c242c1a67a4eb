//! Platform-agnostic building blocks shared by the dashboards.

pub mod config;
pub mod fetch;
pub mod format;
pub mod records;
pub mod request;
pub mod years;
