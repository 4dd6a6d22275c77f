//! Profile snapshot built up from answers during a session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single answer value. Serialized untagged so records read naturally as
/// JSON (`"regular"`, `4`, `["instagram","fairs"]`, `true`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Flag(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl AnswerValue {
    /// Numeric view, coercing numeric-looking text. Used by the
    /// greater-than/less-than visibility operators.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Flag(_) | Self::List(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Present means non-null and non-empty-string; empty lists also count
    /// as absent for the exists/not-exists operators.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Self::Text(s) => !s.trim().is_empty(),
            Self::List(items) => !items.is_empty(),
            Self::Number(_) | Self::Flag(_) => true,
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Mapping from profile field name to answer value.
///
/// Owned exclusively by the session controller; the reconciliation engine
/// only seeds it once at load. Grows monotonically during a session and
/// never shrinks except on explicit reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileSnapshot {
    fields: BTreeMap<String, AnswerValue>,
}

impl ProfileSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&AnswerValue> {
        self.fields.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: AnswerValue) {
        self.fields.insert(field.into(), value);
    }

    #[must_use]
    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(AnswerValue::as_text)
    }

    #[must_use]
    pub fn list_len(&self, field: &str) -> usize {
        self.get(field).and_then(AnswerValue::as_list).map_or(0, <[String]>::len)
    }
}
