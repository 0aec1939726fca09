use envtag::EnvConfig;

#[derive(EnvConfig)]
struct Config {
    #[envconfig(env = "PORT")]
    pub port: u16,
}

fn main() {
    let config = Config { port: 0 };
    let _ = config.port;
}
