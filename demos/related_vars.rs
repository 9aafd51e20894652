//! Cross-variable validation with the aggregate hook

use envstore::{ConfigError, ConfigStore, EnvVar};

fn main() -> anyhow::Result<()> {
    // Set one half of a pair that must travel together
    std::env::set_var("TLS_CERT", "/etc/tls/cert.pem");
    std::env::remove_var("TLS_KEY");

    let mut store = ConfigStore::new([
        ("TLS_CERT", EnvVar::new("TLS_CERT").optional()),
        ("TLS_KEY", EnvVar::new("TLS_KEY").optional()),
    ])
    .with_filter_all(|values| {
        if values.get("TLS_CERT")?.is_null() != values.get("TLS_KEY")?.is_null() {
            return Err(ConfigError::conflict(
                "TLS_CERT and TLS_KEY must be set together",
            ));
        }
        Ok(())
    });

    match store.load() {
        Ok(()) => println!("TLS configuration accepted"),
        Err(err) => println!("refusing to start: {err}"),
    }

    // Complete the pair and reload
    std::env::set_var("TLS_KEY", "/etc/tls/key.pem");
    store.load()?;
    println!(
        "TLS configured with {:?} / {:?}",
        store.get("TLS_CERT")?.as_str(),
        store.get("TLS_KEY")?.as_str()
    );

    Ok(())
}
