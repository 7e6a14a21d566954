//! Tool availability lookup

/// Answers whether an external tool can be invoked.
///
/// Absence is a normal outcome, never an error.
pub trait ToolProbe {
    fn tool_exists(&self, tool: &str) -> bool;
}

/// Looks tools up on the process `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathProbe;

impl ToolProbe for PathProbe {
    fn tool_exists(&self, tool: &str) -> bool {
        tool_exists(tool)
    }
}

/// Check if an executable named `tool` is on the search path
pub fn tool_exists(tool: &str) -> bool {
    which::which(tool).is_ok()
}
