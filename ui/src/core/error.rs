//! Error types shared by the storage and device-capability layers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("device storage is unavailable")]
    Unavailable,

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage backend rejected the operation: {0}")]
    Backend(String),
}

/// Failure of an optional native feature (haptics, share sheet, clipboard).
/// These are absorbed by callers and never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("capability is not supported on this platform")]
    Unsupported,

    #[error("capability call failed: {0}")]
    Failed(String),
}
