//! # CLI Module
//!
//! This module defines the command-line interface for CodeDoctor using `clap`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `scan` | Run the checks against a repository and write the report |
//! | `init` | Write a configuration file with the given defaults |
//!
//! ## Global Options
//!
//! - `-v, --verbose` - Increase verbosity level (use multiple times: -v, -vv, -vvv)
//! - `-c, --config <FILE>` - Path to configuration file (also `CODEDOCTOR_CONFIG`)
//!
//! ## Examples
//!
//! ```bash
//! # Scan the current directory
//! codedoctor scan
//!
//! # Apply safe auto-fixes, skip the test suite
//! codedoctor scan ./project --fix --skip-tests
//!
//! # Persist defaults
//! codedoctor init --skip-tests --report-dir .health
//! ```

pub mod commands;
pub mod exit_codes;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::CONFIG_ENV;
use commands::{GenerateManArgs, InitArgs, ScanArgs};

/// CodeDoctor - Beginner-friendly checks for Python repositories
#[derive(Parser, Debug)]
#[command(name = "codedoctor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE", env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a repository
    Scan(ScanArgs),

    /// Write a configuration file
    Init(InitArgs),

    /// Generate man page (hidden, for packaging)
    #[command(hide = true)]
    GenerateMan(GenerateManArgs),
}
