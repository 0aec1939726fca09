//! Grouping configuration into nested structs
//!
//! Run with `RUST_LOG=envtag=debug` to see where each value came from.

use envtag::EnvConfig;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, EnvConfig)]
struct Database {
    #[envconfig("env=DB_HOST,default=localhost")]
    pub host: String,

    #[envconfig("env=DB_PORT,default=5432")]
    pub port: u16,
}

#[derive(Debug, Default, EnvConfig)]
struct Http {
    #[envconfig("env=HTTP_PORT,default=8080")]
    pub port: u16,
}

#[derive(Debug, Default, EnvConfig)]
struct Config {
    #[envconfig("env=APP_NAME,default=demo")]
    pub name: String,

    // Untagged struct fields are loaded as their own scope; no prefix is added
    pub database: Database,
    pub http: Http,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    std::env::set_var("DB_HOST", "db.internal");
    std::env::set_var("HTTP_PORT", "9090");

    let config: Config = envtag::from_env()?;

    println!("Nested configuration:");
    println!("  Name: {}", config.name);
    println!("  Database: {}:{}", config.database.host, config.database.port);
    println!("  HTTP Port: {}", config.http.port);

    Ok(())
}
