//! Error types for platform resolution
//!
//! Every failure here is recoverable: the resolver skips the failing
//! source and continues with the next one.

use thiserror::Error;

/// Errors from individual platform lookups
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("failed to determine home directory")]
    NoHomeDirectory,

    #[error("registry value {value} unavailable (status {status})")]
    Registry { value: String, status: i32 },

    #[error("system lookup failed: {0}")]
    Lookup(String),
}
