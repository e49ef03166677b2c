//! Error types reported by the resource manager boundary

use thiserror::Error;

/// Native code used when a transport reports a failure without one
/// (`SCARD_F_UNKNOWN_ERROR`)
pub const UNKNOWN_ERROR_CODE: u32 = 0x8010_0014;

/// Transport error type
///
/// Carries the resource manager's native result code unchanged, so it can be
/// handed back to callers exactly as the primitive produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Failure with the primitive's native result code
    #[error("Resource manager error code {0:#010X}")]
    Native(u32),

    /// Failure described only by a message
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Create a new native error
    pub const fn native(code: u32) -> Self {
        Self::Native(code)
    }

    /// Create a general other error
    pub fn other<S: Into<String>>(message: S) -> Self {
        Self::Other(message.into())
    }

    /// The native result code, [`UNKNOWN_ERROR_CODE`] for message-only errors
    pub const fn code(&self) -> u32 {
        match self {
            Self::Native(code) => *code,
            Self::Other(_) => UNKNOWN_ERROR_CODE,
        }
    }
}
