//! auto-repo CLI - Bootstrap new projects with git, GitHub, and a virtual environment
//!
//! This is the main entry point for the auto-repo command-line interface.

mod bootstrap;
mod cli;
mod output;

use autorepo_projects::Settings;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;

#[tokio::main]
async fn main() {
    // Initialize rustls crypto provider (required for rustls 0.23+)
    // This must be done before any TLS operations
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    // Settings are read once here and passed down by parameter
    let settings = Settings::load();

    if let Err(e) = bootstrap::run(&cli, &settings).await {
        output::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
