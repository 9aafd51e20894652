//! The configuration store and its resolution algorithm.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, trace};

use crate::env::Env;
use crate::error::ConfigError;
use crate::value::ConfigValue;
use crate::var::EnvVar;

/// The resolved values of a load pass, keyed by logical name.
///
/// A thin mapping with explicit accessors; reads of undeclared keys fail
/// with [`ConfigError::UnknownKey`] rather than panicking or returning an
/// ambiguous `None` (a key that resolved to [`ConfigValue::Null`] reads back
/// as `Ok(&ConfigValue::Null)`). Serializes as a plain JSON object, so a
/// service can dump its resolved configuration at startup.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ConfigValues {
    inner: IndexMap<String, ConfigValue>,
}

impl ConfigValues {
    /// Look up a resolved value by logical name.
    pub fn get(&self, key: &str) -> Result<&ConfigValue, ConfigError> {
        self.inner.get(key).ok_or_else(|| ConfigError::unknown_key(key))
    }

    /// Insert or overwrite a value. Available to the aggregate hook so it
    /// can rewrite resolved values or derive new ones.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.inner.insert(key.into(), value.into());
    }

    /// Returns `true` if `key` has a resolved value.
    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Iterate over `(logical name, value)` pairs in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of resolved values.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` before the first load pass.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

type FilterAll = Arc<dyn Fn(&mut ConfigValues) -> Result<(), ConfigError> + Send + Sync>;

/// The container for [`EnvVar`] definitions and their loaded values.
///
/// A store is constructed with its full definition set up front — a mapping
/// from caller-chosen logical names to definitions. Logical names need not
/// match variable names, and distinct logical names may look up the same
/// variable. [`ConfigStore::load`] (or [`ConfigStore::load_from`]) resolves
/// every definition; afterwards the store is, by convention, a read-only
/// key/value view of the configuration for the rest of the process.
///
/// Loading again is allowed and fully re-resolves from the environment,
/// overwriting previous values. A failed load leaves the values partially
/// written; treat any load failure as fatal rather than reading on.
///
/// The store is not synchronized: concurrent loads on one instance are a
/// race. Load once, then share read-only.
#[derive(Clone)]
pub struct ConfigStore {
    definitions: IndexMap<String, EnvVar>,
    values: ConfigValues,
    filter_all: Option<FilterAll>,
}

impl ConfigStore {
    /// Create a store from `(logical name, definition)` pairs.
    ///
    /// Definitions resolve in the order given here; later entries for the
    /// same logical name replace earlier ones.
    pub fn new<K>(definitions: impl IntoIterator<Item = (K, EnvVar)>) -> Self
    where
        K: Into<String>,
    {
        Self {
            definitions: definitions
                .into_iter()
                .map(|(key, var)| (key.into(), var))
                .collect(),
            values: ConfigValues::default(),
            filter_all: None,
        }
    }

    /// Install the aggregate validation hook.
    ///
    /// The hook runs once per load pass, after every definition has
    /// resolved, and sees the fully populated values. It can check
    /// relationships between variables that no per-variable filter can
    /// express, rewrite values, or derive new ones; returning an error —
    /// typically [`ConfigError::conflict`] — fails the load. The default is
    /// a no-op.
    pub fn with_filter_all<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut ConfigValues) -> Result<(), ConfigError> + Send + Sync + 'static,
    {
        self.filter_all = Some(Arc::new(hook));
        self
    }

    /// Resolve every definition against the real process environment.
    pub fn load(&mut self) -> Result<(), ConfigError> {
        self.load_from(&Env::real())
    }

    /// Resolve every definition against `env`.
    ///
    /// For each definition, in order: fail if the variable is required but
    /// not set (even the empty string counts as set); pick the raw value —
    /// the environment string when set, the definition's default otherwise;
    /// run the filter chain over it; store the result under the logical
    /// name. The first failure of any kind aborts the pass. After all
    /// definitions resolve, the aggregate hook runs once.
    pub fn load_from(&mut self, env: &Env) -> Result<(), ConfigError> {
        for (key, var) in &self.definitions {
            if var.is_required() && !env.is_set(var.name()) {
                return Err(ConfigError::missing(var.name(), var.help_text()));
            }
            let mut value = match env.var(var.name()) {
                Some(raw) => {
                    trace!(config = key.as_str(), var = var.name(), "read from environment");
                    ConfigValue::Str(raw)
                }
                None => {
                    trace!(config = key.as_str(), var = var.name(), "variable unset, using default");
                    var.default_value().clone()
                }
            };
            for filter in var.filters() {
                value = filter.apply(value, var)?;
            }
            self.values.set(key.clone(), value);
        }
        if let Some(filter_all) = &self.filter_all {
            filter_all(&mut self.values)?;
        }
        debug!(count = self.values.len(), "configuration loaded");
        Ok(())
    }

    /// Look up a resolved value by logical name.
    pub fn get(&self, key: &str) -> Result<&ConfigValue, ConfigError> {
        self.values.get(key)
    }

    /// Returns `true` if `key` has a resolved value.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains(key)
    }

    /// The resolved values of the last load pass.
    pub fn values(&self) -> &ConfigValues {
        &self.values
    }

    /// Iterate over `(logical name, value)` pairs in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.values.iter()
    }
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("definitions", &self.definitions)
            .field("values", &self.values)
            .field("filter_all", &self.filter_all.is_some())
            .finish()
    }
}
