//! End-to-end tests running the reference filters through a full load pass

use envstore::{ConfigError, ConfigStore, ConfigValue, Env, EnvVar};
use envstore_filters::{
    comma_separated_to_list, comma_separated_to_set, empty_to_null, json_to_list, require_value,
    value_to_bool, value_to_int, value_to_log_level,
};
use serial_test::serial;
use std::env;
use tracing::level_filters::LevelFilter;

fn loglevel_store() -> ConfigStore {
    ConfigStore::new([(
        "LOGLEVEL",
        EnvVar::new("LOGLEVEL")
            .optional()
            .default("INFO")
            .filter(value_to_log_level)
            .help("The desired logging level (ERROR|WARN|INFO|DEBUG|TRACE)."),
    )])
}

#[test]
#[serial]
fn test_simple_load_and_filter() {
    // The filter resolves the name case-insensitively.
    env::set_var("LOGLEVEL", "info");

    let mut store = loglevel_store();
    store.load().unwrap();
    assert_eq!(
        store.get("LOGLEVEL").unwrap().as_level(),
        Some(LevelFilter::INFO)
    );

    env::remove_var("LOGLEVEL");
}

#[test]
#[serial]
fn test_simple_load_and_filter_failure() {
    // This is not a valid logging level.
    env::set_var("LOGLEVEL", "info-YAY");

    let mut store = loglevel_store();
    let err = store.load().unwrap_err();
    assert!(matches!(err, ConfigError::Filter { .. }));
    assert!(err.to_string().contains("info-YAY"));

    env::remove_var("LOGLEVEL");
}

#[test]
#[serial]
fn test_unrequired_with_default_value() {
    env::remove_var("BOOL_EVAR");

    let mut store = ConfigStore::new([(
        "A_BOOL_SETTING",
        EnvVar::new("BOOL_EVAR")
            .optional()
            .default("true")
            .filter(value_to_bool),
    )]);
    store.load().unwrap();
    // The default runs through the same filter chain as a real value.
    assert_eq!(store.get("A_BOOL_SETTING").unwrap().as_bool(), Some(true));
}

#[test]
#[serial]
fn test_unrequired_without_default_value() {
    env::remove_var("BOOL_EVAR");

    let mut store = ConfigStore::new([(
        "A_BOOL_SETTING",
        EnvVar::new("BOOL_EVAR").optional().filter(value_to_bool),
    )]);
    store.load().unwrap();
    // No value and no default: null filtered to false.
    assert_eq!(store.get("A_BOOL_SETTING").unwrap().as_bool(), Some(false));
}

#[test]
#[serial]
fn test_required_fails_when_undefined() {
    env::remove_var("BOOL_EVAR");

    // "Required" means the variable must be defined, so a default does not
    // rescue the load.
    let mut store = ConfigStore::new([(
        "A_BOOL_SETTING",
        EnvVar::new("BOOL_EVAR").default("true").filter(value_to_bool),
    )]);
    let err = store.load().unwrap_err();
    assert!(matches!(err, ConfigError::Missing { ref name, .. } if name == "BOOL_EVAR"));
}

#[test]
fn test_comma_separated_collections() {
    let mut store = ConfigStore::new([
        (
            "PEERS",
            EnvVar::new("PEERS").optional().filter(comma_separated_to_list),
        ),
        (
            "REGIONS",
            EnvVar::new("REGIONS").optional().filter(comma_separated_to_set),
        ),
    ]);
    let env = Env::from_vars([
        ("PEERS", "alpha, beta ,gamma"),
        ("REGIONS", "eu,us,eu"),
    ]);
    store.load_from(&env).unwrap();

    assert_eq!(
        store.get("PEERS").unwrap().as_list(),
        Some(&["alpha".to_owned(), "beta".to_owned(), "gamma".to_owned()][..])
    );
    let regions = store.get("REGIONS").unwrap().as_set().unwrap();
    assert_eq!(regions.len(), 2);
    assert!(regions.contains("eu") && regions.contains("us"));
}

#[test]
fn test_empty_to_null_then_require_value_rejects_blank() {
    // Chain order matters: the first filter nulls the blank string, the
    // second then rejects the null.
    let mut store = ConfigStore::new([(
        "API_KEY",
        EnvVar::new("API_KEY")
            .filter(empty_to_null)
            .filter(require_value),
    )]);
    let err = store
        .load_from(&Env::from_vars([("API_KEY", "")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Filter { ref name, .. } if name == "API_KEY"));

    // Without empty_to_null ahead of it, require_value accepts the blank.
    let mut lenient = ConfigStore::new([(
        "API_KEY",
        EnvVar::new("API_KEY").filter(require_value),
    )]);
    lenient
        .load_from(&Env::from_vars([("API_KEY", "")]))
        .unwrap();
    assert_eq!(lenient.get("API_KEY").unwrap().as_str(), Some(""));
}

#[test]
fn test_integer_parsing_through_the_store() {
    let mut store = ConfigStore::new([(
        "WORKERS",
        EnvVar::new("WORKERS").optional().default("4").filter(value_to_int),
    )]);

    store
        .load_from(&Env::from_vars([("WORKERS", "16")]))
        .unwrap();
    assert_eq!(store.get("WORKERS").unwrap().as_int(), Some(16));

    store
        .load_from(&Env::from_vars(Vec::<(&str, &str)>::new()))
        .unwrap();
    assert_eq!(store.get("WORKERS").unwrap().as_int(), Some(4));

    let err = store
        .load_from(&Env::from_vars([("WORKERS", "many")]))
        .unwrap_err();
    assert!(err.to_string().contains("many"));
}

#[test]
fn test_json_tags_like_a_kubernetes_annotation() {
    let mut store = ConfigStore::new([(
        "TAGS",
        EnvVar::new("APP_TAGS").optional().filter(json_to_list),
    )]);
    store
        .load_from(&Env::from_vars([("APP_TAGS", r#"["production","api"]"#)]))
        .unwrap();
    assert_eq!(
        store.get("TAGS").unwrap().as_list(),
        Some(&["production".to_owned(), "api".to_owned()][..])
    );
}

#[test]
fn test_log_level_feeds_aggregate_verbosity_floor() {
    // A quiet service: the hook caps verbosity at WARN.
    let mut store = ConfigStore::new([(
        "LOGLEVEL",
        EnvVar::new("LOGLEVEL")
            .optional()
            .default("INFO")
            .filter(value_to_log_level),
    )])
    .with_filter_all(|values| {
        let level = values
            .get("LOGLEVEL")?
            .as_level()
            .unwrap_or(LevelFilter::WARN);
        if level > LevelFilter::WARN {
            values.set("LOGLEVEL", ConfigValue::Level(LevelFilter::WARN));
        }
        Ok(())
    });

    store
        .load_from(&Env::from_vars([("LOGLEVEL", "trace")]))
        .unwrap();
    assert_eq!(
        store.get("LOGLEVEL").unwrap().as_level(),
        Some(LevelFilter::WARN)
    );
}
