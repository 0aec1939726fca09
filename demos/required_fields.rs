//! Reporting a missing required variable

use envtag::{EnvConfig, LoadError};

#[derive(Debug, Default, EnvConfig)]
struct Config {
    #[envconfig("env=API_TOKEN,required=true")]
    pub api_token: String,

    #[envconfig("env=API_RETRIES,default=3")]
    pub retries: u8,
}

fn main() -> anyhow::Result<()> {
    std::env::remove_var("API_TOKEN");

    match envtag::from_env::<Config>() {
        Err(LoadError::RequiredField {
            field_name,
            env_name,
        }) => {
            println!("Set {env_name} to configure `{field_name}`");
        }
        Err(e) => return Err(e.into()),
        Ok(config) => println!("Loaded: {config:?}"),
    }

    std::env::set_var("API_TOKEN", "secret-token");
    let config: Config = envtag::from_env()?;
    println!("Retries: {}", config.retries);

    Ok(())
}
