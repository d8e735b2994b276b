//! View state and the reducer advancing it.
//!
//! This module provides the three-way `ViewState` for a single issued
//! request and the pure `reduce` function moving it forward. The state
//! starts at `Loading` and settles exactly once into `Loaded` or
//! `Errored`; settled states ignore every further event.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix applied to every errored state's display message
pub const NETWORK_ERROR_PREFIX: &str = "Network error: ";

/// Display status of a single issued request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    /// Request issued, reply not delivered yet
    Loading,
    /// Reply delivered with this payload
    Loaded(Value),
    /// Reply rejected; the message is already formatted for display
    Errored(String),
}

impl ViewState {
    /// Whether the request is still in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Whether the state accepts no further transitions
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::Loading
    }
}

/// Lifecycle event for a single issued request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Event {
    /// Request was issued
    Started,
    /// Reply arrived with this payload
    Succeeded(Value),
    /// Reply was rejected with this raw failure message
    Failed(String),
}

/// Advance the view state by one event.
///
/// The next state is a function of the current state and the event alone.
/// `Started` confirms the `Loading` a request begins in, a reply settles
/// the state exactly once, and settled states swallow every later event.
/// A `Failed` message picks up [`NETWORK_ERROR_PREFIX`] here and nowhere
/// else, so the prefix is applied exactly once.
pub fn reduce(state: ViewState, event: Event) -> ViewState {
    match (state, event) {
        (ViewState::Loading, Event::Succeeded(payload)) => ViewState::Loaded(payload),
        (ViewState::Loading, Event::Failed(message)) => {
            ViewState::Errored(format!("{}{}", NETWORK_ERROR_PREFIX, message))
        }
        (state, _) => state,
    }
}
