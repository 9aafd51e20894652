//! Resolving LOGLEVEL and booting the tracing subscriber with it

use envstore::{ConfigStore, EnvVar};
use envstore_filters::value_to_log_level;
use tracing::level_filters::LevelFilter;

fn main() -> anyhow::Result<()> {
    // Try LOGLEVEL=trace to see the store's own resolution events.
    let mut store = ConfigStore::new([(
        "LOGLEVEL",
        EnvVar::new("LOGLEVEL")
            .optional()
            .default("INFO")
            .filter(value_to_log_level)
            .help("The desired logging level (ERROR|WARN|INFO|DEBUG|TRACE)."),
    )]);
    store.load()?;

    let level = store
        .get("LOGLEVEL")?
        .as_level()
        .unwrap_or(LevelFilter::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    tracing::info!(%level, "logging initialized from LOGLEVEL");
    tracing::debug!("visible only at DEBUG and below");

    Ok(())
}
