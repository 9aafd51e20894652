//! The filter contract applied to raw environment values.

use crate::error::ConfigError;
use crate::value::ConfigValue;
use crate::var::EnvVar;

/// A single transformation or validation step in a definition's chain.
///
/// A load pass threads each definition's raw value through its filters
/// strictly in declaration order: the first filter receives the raw
/// environment string (or the default, or [`ConfigValue::Null`] when there
/// is neither), and every later filter receives its predecessor's output.
/// Filters must therefore tolerate null input. The definition itself is
/// passed alongside the value so a filter can consult its name, default, or
/// help text.
///
/// Returning an error — normally built with
/// [`ConfigError::filter`] — aborts the entire load pass immediately.
///
/// The trait is implemented for every matching `Fn`, so plain functions and
/// closures are filters as-is, including closures that capture handles to
/// external resources; the store depends only on this signature. Filters
/// must not mutate global state: the store guarantees repeated loads against
/// an unchanged environment behave identically only if its filters do.
///
/// ```rust
/// use envstore::{ConfigError, ConfigValue, EnvVar, Filter};
///
/// fn shout(value: ConfigValue, _var: &EnvVar) -> Result<ConfigValue, ConfigError> {
///     Ok(match value {
///         ConfigValue::Str(s) => ConfigValue::Str(s.to_uppercase()),
///         other => other,
///     })
/// }
///
/// let var = EnvVar::new("GREETING");
/// let value = shout.apply(ConfigValue::Str("hello".into()), &var)?;
/// assert_eq!(value.as_str(), Some("HELLO"));
/// # Ok::<(), ConfigError>(())
/// ```
pub trait Filter: Send + Sync {
    /// Transform or validate `value`, or fail the load pass.
    fn apply(&self, value: ConfigValue, var: &EnvVar) -> Result<ConfigValue, ConfigError>;
}

impl<F> Filter for F
where
    F: Fn(ConfigValue, &EnvVar) -> Result<ConfigValue, ConfigError> + Send + Sync,
{
    fn apply(&self, value: ConfigValue, var: &EnvVar) -> Result<ConfigValue, ConfigError> {
        self(value, var)
    }
}
