//! Field values
//!
//! CSV cells become one of four loosely-typed values. The query engine never
//! compares values directly: every comparison goes through the string form.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// A single field value inferred from a CSV cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Empty cell
    Null,
    /// `true` / `false` cell in a boolean column
    Bool(bool),
    /// Integer or finite float cell in a numeric column
    Number(serde_json::Number),
    /// Anything else, verbatim
    String(String),
}

impl Value {
    /// Returns the string form used by filter, search and sort.
    ///
    /// - `Null` → `""`
    /// - `Bool` → `"true"` / `"false"`
    /// - `Number` → JSON number text
    /// - `String` → itself
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Value::Null => Cow::Borrowed(""),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::String(s) => Cow::Borrowed(s.as_str()),
        }
    }

    /// Lower-cased string form, for case-insensitive matching
    pub fn folded_text(&self) -> String {
        self.as_text().to_lowercase()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
