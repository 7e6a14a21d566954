//! Error types for CodeDoctor
//!
//! Only conditions that abort a scan are errors. A missing tool, a failing
//! tool or a failed ignored-path query are ordinary scan data and are
//! recorded in the report instead.

use thiserror::Error;

/// Main error type for CodeDoctor
#[derive(Error, Debug)]
pub enum CodeDoctorError {
    /// Scan-related errors
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Report persistence or rendering errors
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

/// Errors that prevent a scan from starting
#[derive(Error, Debug)]
pub enum ScanError {
    /// The repository path could not be resolved
    #[error("Cannot resolve repository path '{path}': {source}")]
    RepoNotFound {
        /// Path as given by the user
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The repository path exists but is not a directory
    #[error("Repository path '{path}' is not a directory")]
    NotADirectory {
        /// Resolved path
        path: String,
    },
}

/// Errors raised while loading or saving the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::Config`]
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    /// Failed to serialize the configuration
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Failed to write the configuration file
    #[error("Failed to write config file '{path}': {source}")]
    FileWrite {
        path: String,
        source: std::io::Error,
    },

    /// Refusing to overwrite an existing file
    #[error("Config file '{path}' already exists. Use --force to overwrite.")]
    AlreadyExists { path: String },

    /// No platform config directory and no explicit path
    #[error("Could not determine a config directory; pass --config <FILE>")]
    NoConfigDir,
}

/// Errors raised while persisting or rendering a report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Failed to create the report directory
    #[error("Failed to create report directory '{path}': {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    /// Failed to move the latest report into the previous slot
    #[error("Failed to rotate '{from}' to '{to}': {source}")]
    Rotate {
        from: String,
        to: String,
        source: std::io::Error,
    },

    /// Failed to write a report file
    #[error("Failed to write report '{path}': {source}")]
    FileWrite {
        path: String,
        source: std::io::Error,
    },

    /// Failed to render the report as JSON
    #[error("Failed to render report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
