//! Core library for the Standin request mocking harness.
//!
//! Standin answers requests from a registered table of mock entries instead
//! of a live backend. Matching is structural - an entry answers exactly the
//! request it was registered for - and every matched reply is delivered
//! through a deferred completion, so callers observe the in-flight phase
//! before the result the same way they would against real network I/O.
//!
//! Entries can be registered in code via [`mocks::registry::MockRegistry`]
//! or loaded from YAML/JSON fixture files via [`config::parser`].

pub mod config;
pub mod defer;
pub mod mocks;
pub mod types;
