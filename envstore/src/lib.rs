//! Environment variable validation and coercion
//!
//! `envstore` loads process configuration from environment variables into a
//! typed, queryable store. Each expected variable is described once, up
//! front, with an [`EnvVar`] definition; a single load pass then resolves
//! every definition against the environment and fails fast when something
//! required is missing or malformed, instead of failing obscurely later at
//! first use.
//!
//! # Features
//!
//! - **Declarative**: describe each variable once with [`EnvVar`] — name,
//!   requiredness, default, help text, and an ordered filter chain
//! - **Fail-fast**: a missing required variable or a rejected value aborts
//!   the load pass with an error fit for startup logs
//! - **Composable filters**: any `Fn(ConfigValue, &EnvVar)` participates in
//!   a definition's coercion chain (see [`Filter`])
//! - **Aggregate validation**: a post-load hook checks relationships between
//!   variables that cannot be expressed per-variable
//! - **Injectable environment**: [`Env`] abstracts the variable source so
//!   tests never have to mutate the real process environment
//!
//! # Example
//!
//! ```rust
//! use envstore::{ConfigStore, Env, EnvVar};
//!
//! let mut store = ConfigStore::new([
//!     (
//!         "DATABASE_URL",
//!         EnvVar::new("DATABASE_URL").help("Postgres connection string."),
//!     ),
//!     (
//!         "WORKER_COUNT",
//!         EnvVar::new("WORKER_COUNT").optional().default("4"),
//!     ),
//! ]);
//!
//! let env = Env::from_vars([("DATABASE_URL", "postgres://localhost/app")]);
//! store.load_from(&env)?;
//!
//! assert_eq!(
//!     store.get("DATABASE_URL")?.as_str(),
//!     Some("postgres://localhost/app")
//! );
//! assert_eq!(store.get("WORKER_COUNT")?.as_str(), Some("4"));
//! # Ok::<(), envstore::ConfigError>(())
//! ```
//!
//! # Filters
//!
//! Raw environment values are strings. A definition's filter chain turns
//! them into the typed [`ConfigValue`] the rest of the process wants, or
//! rejects them:
//!
//! ```rust
//! use envstore::{ConfigError, ConfigStore, ConfigValue, Env, EnvVar};
//!
//! let parse_port = |value: ConfigValue, var: &EnvVar| match value.as_str() {
//!     Some(raw) => raw
//!         .parse::<i64>()
//!         .map(ConfigValue::Int)
//!         .map_err(|_| ConfigError::filter(var.name(), "not a valid port number")),
//!     None => Err(ConfigError::filter(var.name(), "no port given")),
//! };
//!
//! let mut store = ConfigStore::new([(
//!     "PORT",
//!     EnvVar::new("PORT").optional().default("8080").filter(parse_port),
//! )]);
//!
//! store.load_from(&Env::from_vars([("PORT", "9090")]))?;
//! assert_eq!(store.get("PORT")?.as_int(), Some(9090));
//! # Ok::<(), envstore::ConfigError>(())
//! ```
//!
//! # Related variables
//!
//! Checks that span several variables run once, after every definition has
//! resolved, through the hook installed with
//! [`ConfigStore::with_filter_all`]:
//!
//! ```rust
//! use envstore::{ConfigError, ConfigStore, Env, EnvVar};
//!
//! let mut store = ConfigStore::new([
//!     ("TLS_CERT", EnvVar::new("TLS_CERT").optional()),
//!     ("TLS_KEY", EnvVar::new("TLS_KEY").optional()),
//! ])
//! .with_filter_all(|values| {
//!     if values.get("TLS_CERT")?.is_null() != values.get("TLS_KEY")?.is_null() {
//!         return Err(ConfigError::conflict(
//!             "TLS_CERT and TLS_KEY must be set together",
//!         ));
//!     }
//!     Ok(())
//! });
//!
//! let env = Env::from_vars([("TLS_CERT", "/etc/tls/cert.pem")]);
//! assert!(store.load_from(&env).is_err());
//! ```
//!
//! The store performs no I/O beyond reading the environment, never logs its
//! own errors, and holds no locks: after a successful load it is a plain
//! in-memory map, safe to share read-only across threads.

mod env;
mod error;
mod filter;
mod store;
mod value;
mod var;

pub use env::Env;
pub use error::ConfigError;
pub use filter::Filter;
pub use store::{ConfigStore, ConfigValues};
pub use value::ConfigValue;
pub use var::EnvVar;
