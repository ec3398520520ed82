//! Free-form metadata attached to tasks and heartbeats.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata mapping from string keys to values.
pub type Metadata = HashMap<String, MetaValue>;

/// A metadata value.
///
/// The typed variants cover every shape the adapter reads back out of
/// metadata. Anything else is carried as raw JSON so foreign metadata
/// passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    /// A string.
    Text(String),
    /// An integral number.
    Integer(i64),
    /// A non-integral number.
    Float(f64),
    /// A boolean.
    Flag(bool),
    /// A list of strings.
    List(Vec<String>),
    /// Any other JSON value.
    Json(serde_json::Value),
}

impl MetaValue {
    /// Returns the string if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is an integral value.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Float(f)
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 =>
            {
                Some(*f as i64)
            }
            _ => None,
        }
    }

    /// Returns the strings if this is a list of strings.
    pub fn as_string_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<String> for MetaValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<i64> for MetaValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<u32> for MetaValue {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<bool> for MetaValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<Vec<String>> for MetaValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}
