use repostat::Config;
use std::io;

fn main() {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = repostat::run(&config, &mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
