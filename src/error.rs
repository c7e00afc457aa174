//! # Error — Tool Error Kinds
//!
//! The failure modes both binaries can report. Application plumbing wraps
//! these in `anyhow::Error`; every failure ends the process with status 1.

/// Errors from the prime search and the hex emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// Wrong argument count, non-integer argument, or out-of-range value.
    Usage(String),
    /// The entropy source needed to seed the random state could not be read.
    DependencyUnavailable(String),
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolError::Usage(msg) => write!(f, "{}", msg),
            ToolError::DependencyUnavailable(what) => {
                write!(f, "required dependency unavailable: {}", what)
            }
        }
    }
}

impl std::error::Error for ToolError {}
