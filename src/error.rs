//! Error type shared by the safe API and the C ABI.

use thiserror::Error;

use crate::ffi::{NR_ERR_ALLOCATION, NR_ERR_CONFIG, NR_ERR_INVALID_HANDLE};

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ResourceError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// The allocator could not provide backing storage for a new record.
    #[error("failed to allocate a resource record of {size} bytes")]
    AllocationFailure { size: usize },

    /// The handle is null, already destroyed, or was never created by this manager.
    #[error("handle {handle} does not refer to a live resource")]
    InvalidHandle { handle: u64 },

    #[error("invalid {key}: {reason}")]
    Config { key: &'static str, reason: String },
}

impl ResourceError {
    /// Status code reported across the C ABI for this error.
    pub fn status_code(&self) -> i32 {
        match self {
            Self::AllocationFailure { .. } => NR_ERR_ALLOCATION,
            Self::InvalidHandle { .. } => NR_ERR_INVALID_HANDLE,
            Self::Config { .. } => NR_ERR_CONFIG,
        }
    }
}
