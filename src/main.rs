// src/main.rs
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    if let Err(e) = lunch_scrape::cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
