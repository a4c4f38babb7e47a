// crates/ports/src/context.rs
use std::fmt;

use length_rules_shared_kernel::{LengthBound, TextLength};
use serde::{Deserialize, Serialize};

pub const MIN_LENGTH: &str = "MinLength";
pub const MAX_LENGTH: &str = "MaxLength";
pub const TOTAL_LENGTH: &str = "TotalLength";

/// Value attached to a named message argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgumentValue {
    Integer(i64),
    Text(String),
}

impl ArgumentValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl From<i64> for ArgumentValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<LengthBound> for ArgumentValue {
    fn from(value: LengthBound) -> Self {
        Self::Integer(value.value())
    }
}

impl From<TextLength> for ArgumentValue {
    fn from(value: TextLength) -> Self {
        Self::Integer(value.as_i64())
    }
}

impl From<&str> for ArgumentValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ArgumentValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Ordered sink of named arguments consumed by message rendering.
///
/// Appending a name that is already present replaces its value and keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageFormatter {
    arguments: Vec<(String, ArgumentValue)>,
}

impl MessageFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_argument(&mut self, name: impl Into<String>, value: impl Into<ArgumentValue>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.arguments.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.arguments.push((name, value)),
        }
        self
    }

    pub fn argument(&self, name: &str) -> Option<&ArgumentValue> {
        self.arguments.iter().find(|(existing, _)| existing == name).map(|(_, value)| value)
    }

    pub fn arguments(&self) -> impl Iterator<Item = (&str, &ArgumentValue)> {
        self.arguments.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    pub fn clear(&mut self) {
        self.arguments.clear();
    }
}

/// State of one validation pass, owned by the calling framework.
///
/// A rule reads the parent object through [`instance_to_validate`](Self::instance_to_validate)
/// and only ever appends to the formatter; it never keeps the context past the call.
pub trait ValidationContext<T: ?Sized> {
    fn instance_to_validate(&self) -> &T;
    fn message_formatter(&mut self) -> &mut MessageFormatter;
}
