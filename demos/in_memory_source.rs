//! Loading from a fixed table instead of the process environment

use envtag::EnvConfig;
use std::collections::HashMap;

#[derive(Debug, Default, EnvConfig)]
struct Config {
    #[envconfig("env=WORKER_COUNT,default=4")]
    pub workers: usize,

    #[envconfig("env=QUEUE_NAME,required=true")]
    pub queue: String,
}

fn main() -> anyhow::Result<()> {
    let vars = HashMap::from([("QUEUE_NAME", "jobs"), ("WORKER_COUNT", "16")]);

    let mut config = Config::default();
    envtag::load_from(&mut config, &vars)?;

    println!("Configuration from an in-memory table:");
    println!("  Workers: {}", config.workers);
    println!("  Queue: {}", config.queue);

    Ok(())
}
