//! The typed values a load pass produces.

use std::collections::BTreeSet;

use serde::{Serialize, Serializer};
use tracing::level_filters::LevelFilter;

/// A single resolved configuration value.
///
/// Raw environment input always enters the filter pipeline as
/// [`ConfigValue::Str`] — or [`ConfigValue::Null`] when the variable is
/// absent and its definition carries no default. Filters coerce it into the
/// other variants. A definition with no filters therefore resolves to the
/// raw string (or null) unchanged.
///
/// Serializes as the plain inner value (`null`, `"text"`, `8080`, `true`,
/// `["a","b"]`), so a resolved store can be dumped as ordinary JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// No value. Distinct from an empty string, which is a present value.
    Null,
    /// An unparsed or deliberately string-typed value.
    Str(String),
    /// A boolean, e.g. from [`ConfigValue::Str`] via a boolean filter.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A list of strings, e.g. from splitting a comma-separated value.
    List(Vec<String>),
    /// An ordered set of strings.
    Set(BTreeSet<String>),
    /// A resolved logging verbosity.
    Level(#[serde(serialize_with = "level_as_str")] LevelFilter),
}

impl ConfigValue {
    /// Returns `true` for [`ConfigValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for null, the empty string, and empty collections.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Str(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Set(items) => items.is_empty(),
            Self::Bool(_) | Self::Int(_) | Self::Level(_) => false,
        }
    }

    /// The string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer value, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The list value, if this is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// The set value, if this is a set.
    pub fn as_set(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::Set(items) => Some(items),
            _ => None,
        }
    }

    /// The logging verbosity, if this is a level.
    pub fn as_level(&self) -> Option<LevelFilter> {
        match self {
            Self::Level(level) => Some(*level),
            _ => None,
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<BTreeSet<String>> for ConfigValue {
    fn from(value: BTreeSet<String>) -> Self {
        Self::Set(value)
    }
}

impl From<LevelFilter> for ConfigValue {
    fn from(value: LevelFilter) -> Self {
        Self::Level(value)
    }
}

fn level_as_str<S>(level: &LevelFilter, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(level)
}
