//! Declarative environment variable definitions.

use std::fmt;
use std::sync::Arc;

use crate::filter::Filter;
use crate::value::ConfigValue;

/// The declarative description of one expected environment variable.
///
/// An `EnvVar` is pure data: the exact variable name to look up, whether the
/// variable must be present, the default used when it is absent, an ordered
/// chain of [`Filter`]s, and optional help text for error messages. It holds
/// no resolved state — that lives in the
/// [`ConfigStore`](crate::ConfigStore) that owns the definition.
///
/// Definitions start out required with no default, no filters, and no help
/// text; builder methods adjust from there:
///
/// ```rust
/// use envstore::EnvVar;
///
/// let var = EnvVar::new("LOGLEVEL")
///     .optional()
///     .default("INFO")
///     .help("The desired logging level (ERROR|WARN|INFO|DEBUG|TRACE).");
///
/// assert_eq!(var.name(), "LOGLEVEL");
/// assert!(!var.is_required());
/// ```
///
/// Nothing is validated at construction time. A definition that is required
/// *and* carries a default is legal — the default simply never applies,
/// because "required" means the variable must be defined in the environment
/// (even as the empty string) for the load pass to proceed.
#[derive(Clone)]
pub struct EnvVar {
    name: String,
    required: bool,
    default: ConfigValue,
    filters: Vec<Arc<dyn Filter>>,
    help: Option<String>,
}

impl EnvVar {
    /// Create a definition for the variable `name`.
    ///
    /// The name is matched against the environment exactly; lookups are
    /// case-sensitive. The definition starts out required.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            default: ConfigValue::Null,
            filters: Vec::new(),
            help: None,
        }
    }

    /// Allow the variable to be absent from the environment. An absent
    /// optional variable resolves to its default.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// The raw value to feed the filter chain when the variable is absent.
    ///
    /// Defaults are semantically raw input, just like a real environment
    /// string, so a string default goes through the same coercions a set
    /// variable would.
    pub fn default(mut self, value: impl Into<ConfigValue>) -> Self {
        self.default = value.into();
        self
    }

    /// Append a filter to the chain. Order is significant: filters run in
    /// the order they were added.
    pub fn filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Arc::new(filter));
        self
    }

    /// Human-readable description, surfaced when the variable is missing.
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = Some(text.into());
        self
    }

    /// The environment variable name this definition looks up.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the variable must be present in the environment at load time.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The default fed to the filter chain when the variable is absent.
    pub fn default_value(&self) -> &ConfigValue {
        &self.default
    }

    /// The ordered filter chain.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// The help text, if any.
    pub fn help_text(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl fmt::Debug for EnvVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVar")
            .field("name", &self.name)
            .field("required", &self.required)
            .field("default", &self.default)
            .field("filters", &self.filters.len())
            .field("help", &self.help)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn new_definitions_are_required_with_null_default() {
        let var = EnvVar::new("DATABASE_URL");
        assert_eq!(var.name(), "DATABASE_URL");
        assert!(var.is_required());
        assert!(var.default_value().is_null());
        assert!(var.filters().is_empty());
        assert_eq!(var.help_text(), None);
    }

    #[test]
    fn builder_methods_accumulate() {
        let var = EnvVar::new("PEERS")
            .optional()
            .default("a,b")
            .filter(|value: ConfigValue, _: &EnvVar| Ok(value))
            .filter(|value: ConfigValue, _: &EnvVar| Ok(value))
            .help("Comma-separated peer hostnames.");

        assert!(!var.is_required());
        assert_eq!(var.default_value().as_str(), Some("a,b"));
        assert_eq!(var.filters().len(), 2);
        assert_eq!(var.help_text(), Some("Comma-separated peer hostnames."));
    }

    #[test]
    fn clones_share_the_filter_chain() {
        let var = EnvVar::new("X").filter(|value: ConfigValue, _: &EnvVar| Ok(value));
        let copy = var.clone();
        assert_eq!(copy.filters().len(), 1);
    }

    #[test]
    fn debug_output_summarizes_filters_by_count() {
        let var = EnvVar::new("X")
            .filter(|_: ConfigValue, v: &EnvVar| Err(ConfigError::filter(v.name(), "nope")));
        let printed = format!("{var:?}");
        assert!(printed.contains("\"X\""));
        assert!(printed.contains("filters: 1"));
    }
}
