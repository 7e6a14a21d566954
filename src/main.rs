//! CodeDoctor - Beginner-friendly checks for Python repositories
//!
//! This is the main entry point for the CLI application.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use codedoctor::cli::{self, Cli, Commands};
use codedoctor::exit_codes;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config_path = cli.config.as_deref();
    let result: anyhow::Result<i32> = match cli.command {
        Commands::Scan(args) => cli::commands::scan::execute(args, config_path)
            .await
            .map_err(Into::into),
        Commands::Init(args) => cli::commands::init::execute(args, config_path)
            .await
            .map_err(Into::into),
        Commands::GenerateMan(args) => cli::commands::generate_man::execute(args)
            .await
            .map_err(Into::into),
    };

    // Exit codes 0/1/2 carry the scan verdict; 3 is reserved for runtime errors
    match result {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
