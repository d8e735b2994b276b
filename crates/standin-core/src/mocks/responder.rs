//! Responder for resolving requests against the registered mock table.
//!
//! This module provides `MockResponder` which answers issued requests from
//! a `MockRegistry` and delivers every matched outcome through a deferred
//! completion.

use crate::defer::Deferred;
use crate::mocks::registry::MockRegistry;
use crate::types::entry::{MockEntry, Reply};
use crate::types::request::Request;
use thiserror::Error;

/// No registered entry matches the issued request.
///
/// This is a setup error, not a mocked network failure: resolution fails
/// synchronously and nothing is deferred.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No mock entry registered for request: {request}")]
pub struct UnmockedRequestError {
    /// The request nothing was registered for
    pub request: Request,
}

/// Resolver answering requests from a registered mock table.
///
/// `MockResponder` provides:
/// - Entry lookup via `find_entry()`
/// - Request resolution via `resolve()`, deferring every matched outcome
/// - Read-only resolution: the same request keeps resolving to the same
///   entry no matter how often it is issued
#[derive(Debug, Clone)]
pub struct MockResponder {
    /// Registry holding the registered entries
    registry: MockRegistry,
}

impl MockResponder {
    /// Create a new MockResponder with a MockRegistry.
    ///
    /// The responder consumes the registry and uses it as the source for
    /// request resolution. The registered table is read-only from here on -
    /// entries should be added to MockRegistry before passing it in.
    pub fn new(registry: MockRegistry) -> Self {
        Self { registry }
    }

    /// The registered mock table
    pub fn registry(&self) -> &MockRegistry {
        &self.registry
    }

    /// Find the entry matching the given request without resolving it.
    ///
    /// Returns `None` if no entry with a structurally equal request is
    /// registered.
    pub fn find_entry(&self, request: &Request) -> Option<&MockEntry> {
        self.registry.find(request)
    }

    /// Resolve a request to its deferred reply.
    ///
    /// A matched `Success` entry completes with `Ok(payload)` and a matched
    /// `Failure` entry with `Err(NetworkError)`, in both cases only after
    /// the task has yielded to the scheduler once. The caller can never
    /// observe a reply synchronously.
    ///
    /// A request with no matching entry fails immediately with
    /// [`UnmockedRequestError`] and nothing is deferred.
    pub fn resolve(&self, request: &Request) -> Result<Deferred<Reply>, UnmockedRequestError> {
        let entry = self
            .find_entry(request)
            .ok_or_else(|| UnmockedRequestError {
                request: request.clone(),
            })?;

        Ok(Deferred::new(entry.outcome.clone().into_reply()))
    }
}
