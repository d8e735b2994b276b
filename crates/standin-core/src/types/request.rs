//! Core request identity type.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A request issued against the mock table.
///
/// Identity is structural: two requests are the same exactly when the
/// query id and the whole variables map are equal. A request carrying an
/// extra variable, or missing one, is a different request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Request {
    /// Identifier of the operation being issued
    pub query_id: String,
    /// Operation variables, compared key for key and value for value
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub variables: HashMap<String, String>,
}

impl Request {
    /// Create a request with no variables
    pub fn new(query_id: &str) -> Self {
        Self {
            query_id: query_id.to_string(),
            variables: HashMap::new(),
        }
    }

    /// Add a variable to the request
    pub fn with_variable(mut self, key: &str, value: &str) -> Self {
        self.variables.insert(key.to_string(), value.to_string());
        self
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query_id)?;
        if self.variables.is_empty() {
            return Ok(());
        }

        // Variables are sorted so the rendering is stable across map orders
        let mut pairs: Vec<_> = self.variables.iter().collect();
        pairs.sort_by_key(|(key, _)| key.as_str());

        write!(f, " {{")?;
        for (i, (key, value)) in pairs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {:?}", key, value)?;
        }
        write!(f, "}}")
    }
}
