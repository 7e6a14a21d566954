//! Init command - Write a configuration file

use colored::Colorize;
use std::path::Path;

use super::InitArgs;
use crate::cli::exit_codes;
use crate::config::{resolve_config_path, Config};
use crate::error::{CodeDoctorError, ConfigError};

/// Write the defaults, adjusted by the given flags, to the config file.
///
/// An existing file is kept unless `--force` is given.
pub async fn execute(args: InitArgs, config_path: Option<&Path>) -> Result<i32, CodeDoctorError> {
    let config_path = resolve_config_path(config_path)?;
    let config = Config::merge(Config::default(), args.flags.overrides());

    match config.save_to_file(&config_path, args.force) {
        Ok(()) => {}
        Err(e @ ConfigError::AlreadyExists { .. }) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return Ok(exit_codes::ERROR);
        }
        Err(e) => return Err(e.into()),
    }

    println!(
        "{} Created {}",
        "Success:".green().bold(),
        config_path.display().to_string().cyan()
    );

    println!("\nNext steps:");
    println!("  1. Review and customize {}", config_path.display());
    println!("  2. Run {} to check a repository", "codedoctor scan".cyan());

    Ok(exit_codes::SUCCESS)
}
