//! Durations and timestamps

use chrono::{DateTime, FixedOffset, Utc};
use envtag::EnvConfig;
use std::time::Duration;

#[derive(Debug, Default, EnvConfig)]
struct Config {
    // Compact unit grammar: 5s, 300ms, 2h30m
    #[envconfig("env=REQUEST_TIMEOUT,default=30s")]
    pub request_timeout: Duration,

    #[envconfig("env=CACHE_TTL,default=2h30m")]
    pub cache_ttl: Duration,

    // RFC 3339 timestamps
    #[envconfig("env=MAINTENANCE_START,default=2030-01-01T00:00:00Z")]
    pub maintenance_start: DateTime<Utc>,

    #[envconfig("env=RELEASE_AT")]
    pub release_at: DateTime<FixedOffset>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("REQUEST_TIMEOUT", "1500ms");
    std::env::set_var("RELEASE_AT", "2030-06-01T09:00:00+02:00");

    let config: Config = envtag::from_env()?;

    println!("Time configuration:");
    println!("  Request timeout: {:?}", config.request_timeout);
    println!("  Cache TTL: {:?}", config.cache_ttl);
    println!("  Maintenance start: {}", config.maintenance_start);
    println!("  Release at: {}", config.release_at);

    Ok(())
}
