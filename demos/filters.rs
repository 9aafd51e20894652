//! Coercing raw environment strings with filter chains

use envstore::{ConfigStore, EnvVar};
use envstore_filters::{
    comma_separated_to_set, empty_to_null, require_value, value_to_bool, value_to_int,
};

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("APP_DEBUG", "TRUE");
    std::env::set_var("APP_MAX_CONNECTIONS", "25");
    std::env::set_var("APP_REGIONS", "eu-west, us-east ,eu-west");
    std::env::set_var("APP_API_KEY", "super-secret");

    let mut store = ConfigStore::new([
        (
            "DEBUG",
            EnvVar::new("APP_DEBUG").optional().filter(value_to_bool),
        ),
        (
            "MAX_CONNECTIONS",
            EnvVar::new("APP_MAX_CONNECTIONS")
                .optional()
                .default("10")
                .filter(value_to_int),
        ),
        (
            "REGIONS",
            EnvVar::new("APP_REGIONS")
                .optional()
                .filter(comma_separated_to_set),
        ),
        (
            "API_KEY",
            EnvVar::new("APP_API_KEY")
                .filter(empty_to_null)
                .filter(require_value)
                .help("API key for the upstream service. Must not be blank."),
        ),
    ]);
    store.load()?;

    println!("Debug: {:?}", store.get("DEBUG")?.as_bool());
    println!("Max connections: {:?}", store.get("MAX_CONNECTIONS")?.as_int());
    println!("Regions: {:?}", store.get("REGIONS")?.as_set());
    println!("API key present: {}", !store.get("API_KEY")?.is_null());

    Ok(())
}
