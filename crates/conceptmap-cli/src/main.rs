//! Conceptmap CLI - Turn numbered concept descriptions into Mermaid ER diagrams

mod cli;

use clap::Parser;
use conceptmap::core::logging::init_logging;

fn main() {
    let cli_args = cli::Cli::parse();

    let log_level = std::env::var("CONCEPTMAP_LOG_LEVEL")
        .ok()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| cli_args.log_level.as_str().to_string());
    let log_format = std::env::var("CONCEPTMAP_LOG_FORMAT")
        .ok()
        .unwrap_or_else(|| cli_args.log_format.as_str().to_string());

    if let Err(e) = init_logging(Some(&log_level), Some(&log_format)) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let app = cli::ConceptMapApp::new();

    if cli_args.input.is_none() {
        eprintln!("{}", cli::ConceptMapApp::usage());
        std::process::exit(1);
    }

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
