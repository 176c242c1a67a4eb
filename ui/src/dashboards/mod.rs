//! Chart dashboards: one controller per page.
//!
//! Each controller owns a [`ChartHandle`](crate::charts::ChartHandle) and a
//! [`RequestSlot`](crate::core::request::RequestSlot). A load cycle is
//! fetch → build series → render; issuing a new load aborts the previous one so
//! only the latest response ever reaches the chart.

pub mod activities;
pub mod performance;

pub use activities::ActivitiesDashboard;
pub use performance::PerformanceDashboard;

use std::future::Future;

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use futures::future::Abortable;
use thiserror::Error;

use crate::charts::{ChartError, Series};
use crate::core::fetch::FetchError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Chart(#[from] ChartError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The chart now shows this many points.
    Rendered(usize),
    /// The server answered `null`; the chart was left as it was.
    Empty,
    /// A newer request took over before this one finished.
    Superseded,
}

/// Await a superseding request and hand its series to `render`.
pub async fn load_series<T, F, R>(
    request: Abortable<F>,
    build: fn(&[T]) -> Series,
    render: R,
) -> Result<LoadOutcome, LoadError>
where
    F: Future<Output = Result<Option<Vec<T>>, FetchError>>,
    R: FnOnce(Series) -> Result<(), ChartError>,
{
    let records = match request.await {
        Ok(response) => response?,
        Err(_aborted) => return Ok(LoadOutcome::Superseded),
    };
    let Some(records) = records else {
        return Ok(LoadOutcome::Empty);
    };

    let series = build(&records);
    let points = series.len();
    render(series)?;
    Ok(LoadOutcome::Rendered(points))
}

/// Log a finished load cycle and surface failures in `last_error`.
pub(crate) fn report(
    what: &str,
    outcome: Result<LoadOutcome, LoadError>,
    mut last_error: Signal<Option<String>>,
) {
    match outcome {
        Ok(LoadOutcome::Rendered(points)) => {
            debug!(points, "{what} chart rendered");
            last_error.set(None);
        }
        Ok(LoadOutcome::Empty) => {
            debug!("{what} response was empty; chart left unchanged");
            last_error.set(None);
        }
        Ok(LoadOutcome::Superseded) => debug!("{what} request superseded"),
        Err(err) => {
            warn!("loading {what} failed: {err}");
            last_error.set(Some(format!("Couldn't load {what}: {err}")));
        }
    }
}
