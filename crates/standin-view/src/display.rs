//! Rendering-agnostic projection of view state.
//!
//! This module turns a `ViewState` into a `DisplayModel`, a plain
//! description of what a rendering host should show. The projection owns
//! every display string so hosts stay free of formatting decisions.

use crate::state::ViewState;
use serde_json::Value;

/// Class name of the container a projected profile is mounted in
pub const CONTAINER_CLASS: &str = "user-profile";

/// Text shown while a request is in flight
pub const LOADING_TEXT: &str = "Loading...";

/// A labeled line of display text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Label a rendering host can target, doubling as the line's class name
    pub label: String,
    /// Visible text of the line
    pub text: String,
}

/// What a rendering host materializes for a view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayModel {
    /// A single piece of text
    Text(String),
    /// Labeled fields in display order
    Fields(Vec<Field>),
}

impl DisplayModel {
    /// All visible text, concatenated in display order
    pub fn text(&self) -> String {
        match self {
            DisplayModel::Text(text) => text.clone(),
            DisplayModel::Fields(fields) => fields.iter().map(|f| f.text.as_str()).collect(),
        }
    }

    /// The field with the given label, if the model has one
    pub fn field(&self, label: &str) -> Option<&Field> {
        match self {
            DisplayModel::Text(_) => None,
            DisplayModel::Fields(fields) => fields.iter().find(|f| f.label == label),
        }
    }
}

/// String field of a payload object, or empty when absent or not a string
fn string_field<'a>(payload: &'a Value, key: &str) -> &'a str {
    payload.get(key).and_then(Value::as_str).unwrap_or_default()
}

/// Project a view state into its display model.
///
/// `Loading` shows the loading placeholder, `Loaded` shows a name line and
/// an email line read from the payload, and `Errored` shows the prepared
/// error message unchanged.
pub fn project(state: &ViewState) -> DisplayModel {
    match state {
        ViewState::Loading => DisplayModel::Text(LOADING_TEXT.to_string()),
        ViewState::Loaded(payload) => DisplayModel::Fields(vec![
            Field {
                label: "name".to_string(),
                text: format!(
                    "Name: {} {}",
                    string_field(payload, "first_name"),
                    string_field(payload, "last_name")
                ),
            },
            Field {
                label: "email".to_string(),
                text: format!("Email: {}", string_field(payload, "email")),
            },
        ]),
        ViewState::Errored(message) => DisplayModel::Text(message.clone()),
    }
}
