use envtag::EnvConfig;

#[derive(EnvConfig)]
enum Config {
    Production,
}

fn main() {
    let _ = Config::Production;
}
