//! Mocks resolution module.
//!
//! This module provides functionality for registering and resolving mock entries:
//! - [`MockRegistry`]: Stores entries with at most one per structurally distinct request
//! - [`MockResponder`]: Resolves issued requests to deferred replies

pub mod registry;
pub mod responder;
