//! Basic usage example

use envstore::{ConfigStore, EnvVar};

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("SERVER_ADDR", "0.0.0.0:3000");

    let mut store = ConfigStore::new([
        (
            "DATABASE_URL",
            EnvVar::new("DATABASE_URL").help("Postgres connection string."),
        ),
        (
            "SERVER_ADDR",
            EnvVar::new("SERVER_ADDR").optional().default("127.0.0.1:8080"),
        ),
        (
            "GREETING",
            EnvVar::new("GREETING").optional().default("hello"),
        ),
    ]);
    store.load()?;

    println!("Configuration loaded:");
    for (name, value) in store.iter() {
        println!("  {name}: {value:?}");
    }

    Ok(())
}
