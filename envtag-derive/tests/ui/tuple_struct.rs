use envtag::EnvConfig;

#[derive(EnvConfig)]
struct Config(pub String);

fn main() {
    let config = Config(String::new());
    let _ = config.0;
}
