//! Mock entry types pairing a request with its registered outcome.

use crate::types::request::Request;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Registered outcome of a mocked request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Deliver this JSON payload
    Success(Value),
    /// Reject with this error message
    Failure(String),
}

/// Network-level failure carried by a rejected reply.
///
/// The message is raw. Any user-facing formatting happens in the layer
/// that displays it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NetworkError {
    /// Raw failure message as registered
    pub message: String,
}

/// Result a resolved request eventually delivers
pub type Reply = Result<Value, NetworkError>;

impl Outcome {
    /// Convert the registered outcome into the reply a caller awaits
    pub fn into_reply(self) -> Reply {
        match self {
            Outcome::Success(payload) => Ok(payload),
            Outcome::Failure(message) => Err(NetworkError { message }),
        }
    }
}

/// A registered (request, outcome) pair.
///
/// The outcome is flattened in the serialized form, so an entry reads
/// `{request: {...}, success: {...}}` or `{request: {...}, failure: "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MockEntry {
    /// Request this entry answers
    pub request: Request,
    /// Outcome delivered when the request matches
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl MockEntry {
    /// Whether this entry answers the given request.
    ///
    /// Matching is structural equality of the whole request, never a
    /// partial or subset comparison.
    pub fn matches(&self, request: &Request) -> bool {
        self.request == *request
    }
}
