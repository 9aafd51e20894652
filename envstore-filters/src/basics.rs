//! General-purpose coercion and validation filters.

use envstore::{ConfigError, ConfigValue, EnvVar};
use tracing::level_filters::LevelFilter;

fn split_tokens(raw: &str) -> Vec<String> {
    raw.split(',').map(|token| token.trim().to_owned()).collect()
}

/// Split a comma-separated value into a list of trimmed strings.
///
/// Null and the empty string yield an empty list.
pub fn comma_separated_to_list(
    value: ConfigValue,
    var: &EnvVar,
) -> Result<ConfigValue, ConfigError> {
    match value {
        ConfigValue::Null => Ok(ConfigValue::List(Vec::new())),
        ConfigValue::Str(raw) if raw.is_empty() => Ok(ConfigValue::List(Vec::new())),
        ConfigValue::Str(raw) => Ok(ConfigValue::List(split_tokens(&raw))),
        _ => Err(ConfigError::filter(
            var.name(),
            "expected a comma-separated string",
        )),
    }
}

/// Split a comma-separated value into a set of trimmed strings.
///
/// Null and the empty string yield an empty set. Duplicate tokens collapse.
pub fn comma_separated_to_set(
    value: ConfigValue,
    var: &EnvVar,
) -> Result<ConfigValue, ConfigError> {
    match value {
        ConfigValue::Null => Ok(ConfigValue::Set(Default::default())),
        ConfigValue::Str(raw) if raw.is_empty() => Ok(ConfigValue::Set(Default::default())),
        ConfigValue::Str(raw) => Ok(ConfigValue::Set(split_tokens(&raw).into_iter().collect())),
        _ => Err(ConfigError::filter(
            var.name(),
            "expected a comma-separated string",
        )),
    }
}

/// Replace an empty value (empty string, empty collection) with null.
///
/// Useful ahead of filters that distinguish "not configured" from
/// "configured as nothing".
pub fn empty_to_null(value: ConfigValue, _var: &EnvVar) -> Result<ConfigValue, ConfigError> {
    Ok(if value.is_empty() {
        ConfigValue::Null
    } else {
        value
    })
}

/// Parse the value as a signed integer.
///
/// Null fails — chain a default or [`empty_to_null`]-style handling ahead of
/// this filter if absence is acceptable.
pub fn value_to_int(value: ConfigValue, var: &EnvVar) -> Result<ConfigValue, ConfigError> {
    match value {
        ConfigValue::Int(_) => Ok(value),
        ConfigValue::Str(raw) => raw
            .trim()
            .parse::<i64>()
            .map(ConfigValue::Int)
            .map_err(|_| ConfigError::filter(var.name(), format!("'{raw}' is not a valid integer"))),
        ConfigValue::Null => Err(ConfigError::filter(
            var.name(),
            "cannot convert an empty value to an integer",
        )),
        _ => Err(ConfigError::filter(var.name(), "expected an integer string")),
    }
}

/// Coerce the value to a boolean.
///
/// The string `"true"`, in any case and with surrounding whitespace, becomes
/// `true`; everything else — including null — becomes `false`. A value that
/// is already a boolean passes through.
pub fn value_to_bool(value: ConfigValue, _var: &EnvVar) -> Result<ConfigValue, ConfigError> {
    Ok(match value {
        ConfigValue::Bool(b) => ConfigValue::Bool(b),
        ConfigValue::Str(raw) => ConfigValue::Bool(raw.trim().eq_ignore_ascii_case("true")),
        _ => ConfigValue::Bool(false),
    })
}

/// Fail if the value is null.
pub fn require_value(value: ConfigValue, var: &EnvVar) -> Result<ConfigValue, ConfigError> {
    if value.is_null() {
        Err(ConfigError::filter(var.name(), "value can't be empty"))
    } else {
        Ok(value)
    }
}

/// Resolve a symbolic logging level name into a verbosity.
///
/// A null or empty value falls back to the definition's default before
/// resolution, so `EnvVar::new("LOGLEVEL").optional().default("INFO")` takes
/// effect even when the variable is set to the empty string. Names are
/// matched case-insensitively against `off`, `error`, `warn`, `info`,
/// `debug`, and `trace`; anything else fails.
pub fn value_to_log_level(value: ConfigValue, var: &EnvVar) -> Result<ConfigValue, ConfigError> {
    let value = if value.is_empty() {
        var.default_value().clone()
    } else {
        value
    };
    match value {
        ConfigValue::Level(_) => Ok(value),
        ConfigValue::Str(raw) => raw
            .trim()
            .parse::<LevelFilter>()
            .map(ConfigValue::Level)
            .map_err(|_| {
                ConfigError::filter(var.name(), format!("unrecognized log level '{raw}'"))
            }),
        _ => Err(ConfigError::filter(
            var.name(),
            "no log level given and no default to fall back on",
        )),
    }
}

/// Parse a JSON string array into a list.
///
/// Null and blank values yield an empty list; malformed JSON fails.
pub fn json_to_list(value: ConfigValue, var: &EnvVar) -> Result<ConfigValue, ConfigError> {
    match value {
        ConfigValue::Null => Ok(ConfigValue::List(Vec::new())),
        ConfigValue::Str(raw) if raw.trim().is_empty() => Ok(ConfigValue::List(Vec::new())),
        ConfigValue::Str(raw) => serde_json::from_str::<Vec<String>>(&raw)
            .map(ConfigValue::List)
            .map_err(|e| ConfigError::filter(var.name(), format!("invalid JSON string list: {e}"))),
        _ => Err(ConfigError::filter(var.name(), "expected a JSON array of strings")),
    }
}
