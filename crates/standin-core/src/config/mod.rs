//! Fixture parsing and loading for the mock table.

pub mod error;
pub mod parser;
