//! Per-controller request slot: issuing a request aborts the one in flight.

use std::future::Future;

use futures::future::{AbortHandle, Abortable};

#[derive(Debug, Default)]
pub struct RequestSlot {
    in_flight: Option<AbortHandle>,
}

impl RequestSlot {
    /// Wrap `request` so that it resolves to `Err(Aborted)` once a newer
    /// request is issued through this slot.
    pub fn supersede<F: Future>(&mut self, request: F) -> Abortable<F> {
        self.cancel();
        let (handle, registration) = AbortHandle::new_pair();
        self.in_flight = Some(handle);
        Abortable::new(request, registration)
    }

    /// Abort the in-flight request, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
