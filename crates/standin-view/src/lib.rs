//! View state layer for the Standin mock harness.
//!
//! Drives a single request's `Loading -> Loaded | Errored` lifecycle: a
//! pure reducer owns the transitions, a projection turns each state into
//! display text, and `RequestLifecycle` wires a responder's deferred
//! replies through both.

mod display;
mod lifecycle;
mod state;

pub use display::*;
pub use lifecycle::*;
pub use state::*;
