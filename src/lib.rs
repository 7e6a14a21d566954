//! CodeDoctor Library
//!
//! Runs a fixed set of Python linters, formatters, type and security checkers
//! and the test suite against a repository, classifies each outcome as PASS,
//! WARN or FAIL, and keeps a rotating history of plain-text reports.

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod storage;
pub mod utils;

pub use cli::exit_codes;
pub use error::CodeDoctorError;
pub use report::{CheckResult, CheckStatus, ScanReport};
pub use runner::{scan_repo, ScanOptions};
