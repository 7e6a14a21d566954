//! Utility modules for CodeDoctor

pub mod timing;

pub use timing::{format_duration, Timer};
