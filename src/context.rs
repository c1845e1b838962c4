//! Dynamically-typed guard bindings.
//!
//! A [`Context`] maps directive names to [`ContextValue`]s. The value set is
//! closed: booleans, integers, floats and strings are the only kinds a guard
//! expression can observe.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Name-to-value bindings consulted during guard evaluation.
///
/// Supplied once per preprocessing call and never mutated by it.
pub type Context = HashMap<String, ContextValue>;

/// A single guard binding value.
///
/// Deserializes untagged, so a JSON object file maps directly onto a
/// [`Context`]: `true` becomes `Bool`, integral numbers become `Int`, other
/// numbers become `Float`, and anything quoted becomes `Str`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ContextValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ContextValue {
    /// Truthiness under direct `#ifdef NAME` lookup.
    ///
    /// Booleans are taken as-is, numbers are true when nonzero, strings when
    /// non-empty. Absent names never reach this point; a lookup miss is false.
    pub fn is_truthy(&self) -> bool {
        match self {
            ContextValue::Bool(b) => *b,
            ContextValue::Int(n) => *n != 0,
            ContextValue::Float(f) => *f != 0.0,
            ContextValue::Str(s) => !s.is_empty(),
        }
    }

    /// The string form used by comparison operands.
    ///
    /// Integers render in base 10 and floats with their shortest round-trip
    /// representation, so an integral float has no trailing `.0` (`2.0`
    /// compares equal to `"2"`).
    pub fn coerce_string(&self) -> String {
        match self {
            ContextValue::Bool(b) => b.to_string(),
            ContextValue::Int(n) => n.to_string(),
            ContextValue::Float(f) => f.to_string(),
            ContextValue::Str(s) => s.clone(),
        }
    }
}

impl From<bool> for ContextValue {
    fn from(value: bool) -> Self {
        ContextValue::Bool(value)
    }
}

impl From<i64> for ContextValue {
    fn from(value: i64) -> Self {
        ContextValue::Int(value)
    }
}

impl From<f64> for ContextValue {
    fn from(value: f64) -> Self {
        ContextValue::Float(value)
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        ContextValue::Str(value.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        ContextValue::Str(value)
    }
}
