use std::process::exit;

use contact_book::prelude::run_app;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

fn main() {
    dotenv().ok();

    // Logs go to stderr, stdout is the menu
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run_app() {
        eprintln!("Error: {e}");
        exit(1);
    }
}
