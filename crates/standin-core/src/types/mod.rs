//! Core domain types for requests, outcomes, and mock entries.

pub mod entry;
pub mod request;
