//! Mock registry for storing registered entries.
//!
//! This module provides `MockRegistry` which stores mock entries and looks
//! up the entry answering a request. It is used by `MockResponder` to
//! resolve issued requests against the registered table.

use crate::types::entry::MockEntry;
use crate::types::request::Request;

/// Registry of mock entries keyed by structural request identity.
///
/// `MockRegistry` is responsible for:
/// - Storing entries registered before requests are issued
/// - Keeping at most one entry per structurally distinct request
/// - Looking up the entry matching a request by linear scan
///
/// Registering an entry whose request equals an existing entry's request
/// replaces that entry, so lookups never face an ambiguous match.
#[derive(Debug, Clone)]
pub struct MockRegistry {
    /// Registered entries in registration order
    entries: Vec<MockEntry>,
}

impl MockRegistry {
    /// Create a new empty MockRegistry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an entry to the registry.
    ///
    /// An existing entry for a structurally equal request is replaced.
    pub fn add_entry(&mut self, entry: MockEntry) {
        match self
            .entries
            .iter()
            .position(|existing| existing.request == entry.request)
        {
            Some(index) => self.entries[index] = entry,
            None => self.entries.push(entry),
        }
    }

    /// Add multiple entries to the registry
    pub fn add_entries(&mut self, entries: Vec<MockEntry>) {
        for entry in entries {
            self.add_entry(entry);
        }
    }

    /// Find the entry answering the given request, if one is registered
    pub fn find(&self, request: &Request) -> Option<&MockEntry> {
        self.entries.iter().find(|entry| entry.matches(request))
    }

    /// All registered entries, in registration order
    pub fn entries(&self) -> &[MockEntry] {
        &self.entries
    }

    /// Number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MockRegistry {
    fn default() -> Self {
        Self::new()
    }
}
