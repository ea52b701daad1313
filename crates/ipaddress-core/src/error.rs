//! Error types for address record operations
//!
//! Validation failures and allocation failures are reported to the caller;
//! nothing in this crate aborts the process.

use std::collections::TryReserveError;

use thiserror::Error;

/// Result type alias for address record operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for address record operations
#[derive(Error, Debug)]
pub enum Error {
    /// Absent record on a mutating setter, malformed IPv6 address,
    /// malformed netmask, or an invalid configuration value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An owned string copy could not obtain memory
    #[error("Allocation failure: {0}")]
    AllocationFailure(#[from] TryReserveError),

    /// JSON-encoded configuration could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Negative errno equivalent, for callers using integer return codes
    pub fn errno(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) | Error::Json(_) => -libc::EINVAL,
            Error::AllocationFailure(_) => -libc::ENOMEM,
        }
    }
}
