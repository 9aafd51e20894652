//! Error types for configuration loading.

use std::fmt;

/// Errors that can occur while loading configuration from environment
/// variables, or while reading resolved values back out of the store.
///
/// Every message embeds the offending variable or key name so it can be
/// printed verbatim in process startup logs. The store itself never logs
/// these; surfacing them is the caller's responsibility.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not present in the environment.
    ///
    /// "Present" includes being set to the empty string; this error means
    /// the variable was not defined at all. Carries the definition's help
    /// text, when there is one, to tell the operator what to set.
    #[error("Environment variable '{}' is required but not set{}", .name, help_suffix(.help))]
    Missing {
        /// Name of the missing environment variable
        name: String,
        /// Help text from the variable's definition
        help: Option<String>,
    },

    /// A filter in a definition's chain rejected or failed to coerce a value.
    ///
    /// The message is whatever detail the failing filter supplied, e.g.
    /// "unrecognized log level 'info-YAY'" or "value can't be empty".
    #[error("Invalid value for environment variable '{name}': {message}")]
    Filter {
        /// Name of the environment variable being filtered
        name: String,
        /// Detail supplied by the failing filter
        message: String,
    },

    /// The post-load hook rejected the resolved configuration as a whole,
    /// typically because two related variables are mutually inconsistent.
    #[error("Conflicting configuration values: {message}")]
    Conflict {
        /// Detail supplied by the hook
        message: String,
    },

    /// A logical configuration key that was never declared (or never loaded)
    /// was requested. Distinct from a declared key that resolved to null.
    #[error("Unknown configuration key '{key}'")]
    UnknownKey {
        /// The requested logical key
        key: String,
    },
}

impl ConfigError {
    /// Create a missing-variable error from a definition's name and help text.
    pub fn missing(name: impl Into<String>, help: Option<&str>) -> Self {
        Self::Missing {
            name: name.into(),
            help: help.map(str::to_owned),
        }
    }

    /// Create a filter-failure error. Filters are expected to pass the
    /// environment variable name of the definition they are filtering.
    pub fn filter(name: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Filter {
            name: name.into(),
            message: message.to_string(),
        }
    }

    /// Create an aggregate-validation error for related variables.
    pub fn conflict(message: impl fmt::Display) -> Self {
        Self::Conflict {
            message: message.to_string(),
        }
    }

    /// Create an unknown-key error.
    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownKey { key: key.into() }
    }
}

fn help_suffix(help: &Option<String>) -> String {
    match help {
        Some(text) => format!("\n{text}"),
        None => String::new(),
    }
}
