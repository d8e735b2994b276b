//! Request lifecycle wiring mock replies through the reducer.
//!
//! This module provides `RequestLifecycle` which owns the view state for
//! one issued request. Issuing resolves the request against a responder,
//! settling awaits the deferred reply and feeds it to the reducer, and
//! the projection stays observable at every point in between.

use crate::display::{project, DisplayModel};
use crate::state::{reduce, Event, ViewState};
use standin_core::defer::Deferred;
use standin_core::mocks::responder::{MockResponder, UnmockedRequestError};
use standin_core::types::entry::Reply;
use standin_core::types::request::Request;

/// View state and pending reply for a single issued request.
///
/// `RequestLifecycle` provides:
/// - Synchronous issue via `issue()`, starting in `Loading`
/// - Reply delivery via `settle()`, crossing the mandatory scheduling yield
/// - State observation via `state()` and `display()` at any point
///
/// A request that resolves to no entry fails in `issue()` and no lifecycle
/// is created, so an unmocked request never shows a loading phase.
#[derive(Debug)]
pub struct RequestLifecycle {
    /// Current view state
    state: ViewState,
    /// Deferred reply, consumed by the first completed `settle()`
    pending: Option<Deferred<Reply>>,
}

impl RequestLifecycle {
    /// Issue a request against a responder.
    ///
    /// Resolution happens synchronously: a matched request starts a
    /// lifecycle in `Loading` with its reply pending, and an unmocked
    /// request returns [`UnmockedRequestError`] before any state exists.
    /// The reply itself is never observable before [`settle`](Self::settle)
    /// has crossed the scheduling yield.
    pub fn issue(
        responder: &MockResponder,
        request: &Request,
    ) -> Result<Self, UnmockedRequestError> {
        let pending = responder.resolve(request)?;
        let state = reduce(ViewState::Loading, Event::Started);

        Ok(Self {
            state,
            pending: Some(pending),
        })
    }

    /// Current view state
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Projection of the current view state
    pub fn display(&self) -> DisplayModel {
        project(&self.state)
    }

    /// Feed an event through the reducer.
    ///
    /// Settled states swallow every event, so feeding a late reply into a
    /// finished lifecycle changes nothing.
    pub fn apply(&mut self, event: Event) {
        self.state = reduce(std::mem::take(&mut self.state), event);
    }

    /// Await the pending reply and reduce it into the view state.
    ///
    /// The first completed call consumes the reply: `Ok(payload)` becomes
    /// `Succeeded` and `Err(NetworkError)` becomes `Failed`, so every
    /// rejection lands in the reducer instead of escaping to the caller.
    /// Later calls find nothing pending and return the settled state
    /// unchanged.
    pub async fn settle(&mut self) -> &ViewState {
        if let Some(pending) = self.pending.as_mut() {
            let reply = pending.await;
            self.pending = None;

            let event = match reply {
                Ok(payload) => Event::Succeeded(payload),
                Err(error) => Event::Failed(error.message),
            };
            self.apply(event);
        }

        &self.state
    }
}
