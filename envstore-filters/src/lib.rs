//! Reference filters for the `envstore` configuration loader
//!
//! Every function here satisfies the [`envstore::Filter`] contract —
//! `(value, definition) -> value | error` — and can be chained onto an
//! [`envstore::EnvVar`] in any order. The loader itself has no knowledge of
//! these filters; they are ordinary collaborators, and anything else with
//! the same signature composes with them.
//!
//! # Example
//!
//! ```rust
//! use envstore::{ConfigStore, Env, EnvVar};
//! use envstore_filters::{value_to_bool, value_to_int};
//!
//! let mut store = ConfigStore::new([
//!     (
//!         "DEBUG",
//!         EnvVar::new("APP_DEBUG").optional().filter(value_to_bool),
//!     ),
//!     (
//!         "MAX_CONNECTIONS",
//!         EnvVar::new("APP_MAX_CONNECTIONS")
//!             .optional()
//!             .default("10")
//!             .filter(value_to_int),
//!     ),
//! ]);
//!
//! let env = Env::from_vars([("APP_DEBUG", "true")]);
//! store.load_from(&env)?;
//!
//! assert_eq!(store.get("DEBUG")?.as_bool(), Some(true));
//! assert_eq!(store.get("MAX_CONNECTIONS")?.as_int(), Some(10));
//! # Ok::<(), envstore::ConfigError>(())
//! ```

mod basics;

pub use basics::{
    comma_separated_to_list, comma_separated_to_set, empty_to_null, json_to_list, require_value,
    value_to_bool, value_to_int, value_to_log_level,
};
