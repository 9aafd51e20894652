//! Environment variable source abstraction.
//!
//! A [`ConfigStore`](crate::ConfigStore) load pass resolves against an
//! [`Env`] rather than reading hidden global state. Production code uses
//! [`Env::real()`], which reads the process environment at call time; tests
//! use [`Env::from_vars()`] backed by a fixed map, so they never have to
//! mutate the real environment.

use std::collections::HashMap;

/// A key/value lookup over environment variables.
///
/// Lookups are case-sensitive. A variable set to the empty string is
/// present; [`Env::is_set`] and [`Env::var`] agree on that. A real process
/// variable whose value is not valid UTF-8 is treated as unset.
#[derive(Clone, Debug)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// An `Env` that reads from the real process environment on every lookup.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// An `Env` backed by explicit key/value pairs, for deterministic tests
    /// or for resolving against a captured environment.
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up a variable by exact name.
    pub fn var(&self, name: &str) -> Option<String> {
        match &self.overrides {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        }
    }

    /// Returns `true` if the variable is defined, even as the empty string.
    pub fn is_set(&self, name: &str) -> bool {
        match &self.overrides {
            Some(map) => map.contains_key(name),
            None => std::env::var(name).is_ok(),
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_env_reads_cargo_manifest_dir() {
        let env = Env::real();
        assert!(env.var("CARGO_MANIFEST_DIR").is_some());
        assert!(env.is_set("CARGO_MANIFEST_DIR"));
    }

    #[test]
    fn fixed_env_returns_set_values() {
        let env = Env::from_vars([("FOO", "bar"), ("BAZ", "qux")]);
        assert_eq!(env.var("FOO").as_deref(), Some("bar"));
        assert_eq!(env.var("BAZ").as_deref(), Some("qux"));
    }

    #[test]
    fn fixed_env_misses_unset_names() {
        let env = Env::from_vars(Vec::<(&str, &str)>::new());
        assert_eq!(env.var("NOWHERE"), None);
        assert!(!env.is_set("NOWHERE"));
    }

    #[test]
    fn empty_string_counts_as_set() {
        let env = Env::from_vars([("EMPTY", "")]);
        assert!(env.is_set("EMPTY"));
        assert_eq!(env.var("EMPTY").as_deref(), Some(""));
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let env = Env::from_vars([("LOGLEVEL", "info")]);
        assert!(env.is_set("LOGLEVEL"));
        assert!(!env.is_set("loglevel"));
    }
}
