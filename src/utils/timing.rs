//! Timing utilities for scan logging
//!
//! Measures how long a scan takes so the CLI footer and the logs can report it.

use std::time::{Duration, Instant};

/// Wall-clock stopwatch started on creation
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time rendered with [`format_duration`]
    pub fn elapsed_formatted(&self) -> String {
        format_duration(self.elapsed())
    }
}

/// Render a duration as `"< 1ms"`, `"456ms"` or `"1.23s"`
pub fn format_duration(duration: Duration) -> String {
    match duration.as_millis() {
        0 => "< 1ms".to_string(),
        ms if ms < 1000 => format!("{}ms", ms),
        _ => format!("{:.2}s", duration.as_secs_f64()),
    }
}
