//! Exit codes for the CLI
//!
//! The scan contract is fixed: CI jobs rely on these values.
//!
//! | Code | Constant | Meaning |
//! |------|----------|---------|
//! | 0 | `SUCCESS` | Every check passed |
//! | 1 | `WARNINGS` | No failures, at least one warning |
//! | 2 | `FAILURES` | At least one check failed or a tool is missing |
//! | 3 | `ERROR` | Runtime error (report not written, bad config, bad path) |

/// Every check passed.
pub const SUCCESS: i32 = 0;

/// No check failed but at least one warned.
pub const WARNINGS: i32 = 1;

/// At least one check failed.
pub const FAILURES: i32 = 2;

/// The command itself could not complete.
pub const ERROR: i32 = 3;
