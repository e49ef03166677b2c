//! Core error type for all smart card query operations
//!
//! Every failure of this crate is reported through [`Error`]. Each variant maps
//! to a stable 32-bit result code via [`Error::result_code`], so callers that
//! speak the resource manager's numeric codes can keep doing so.

use crate::response::status::StatusWord;
use crate::transport::TransportError;

/// Result code reported when a buffer cannot be allocated (`ERROR_OUTOFMEMORY`)
pub const ERROR_OUTOFMEMORY: u32 = 14;

/// Result code reported for an invalid argument (`SCARD_E_INVALID_PARAMETER`)
pub const SCARD_E_INVALID_PARAMETER: u32 = 0x8010_0004;

/// Result type used throughout the crate
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Core error type that encompasses all possible errors in the crate
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The resource manager or the transmit primitive failed
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// A required buffer could not be allocated
    #[error("Insufficient memory: cannot allocate {requested} bytes")]
    OutOfMemory {
        /// Number of bytes that were requested
        requested: usize,
    },

    /// An argument was rejected before anything was sent
    #[error("Invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// The card answered with an error status word
    #[error("Card status {0}: {desc}", desc = .0.description())]
    Status(StatusWord),

    /// The card reply did not have the expected length
    #[error("Short reply: expected {expected} bytes, received {received} (status {status})")]
    ShortReply {
        /// Status word read from the start of the reply
        status: StatusWord,
        /// Number of bytes expected
        expected: usize,
        /// Number of bytes received
        received: usize,
    },
}

impl Error {
    /// The status word carried by a card-level error, if any
    pub const fn status(&self) -> Option<StatusWord> {
        match self {
            Self::Status(status) | Self::ShortReply { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the card rejected the command class byte (6E 00)
    pub fn is_class_not_supported(&self) -> bool {
        self.status()
            .is_some_and(|status| status.is_class_not_supported())
    }

    /// The 32-bit result code for this error
    ///
    /// Transport errors keep their native code, card-level errors use the
    /// packing described in [`StatusWord::result_code`].
    ///
    /// An empty reply is a [`Error::ShortReply`] with status `00 00`, whose
    /// code is 0. Callers that only look at codes cannot tell it apart from
    /// success; match on the error instead.
    pub const fn result_code(&self) -> u32 {
        match self {
            Self::Transport(error) => error.code(),
            Self::OutOfMemory { .. } => ERROR_OUTOFMEMORY,
            Self::InvalidParameter(_) => SCARD_E_INVALID_PARAMETER,
            Self::Status(status) | Self::ShortReply { status, .. } => status.result_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_codes() {
        assert_eq!(
            Error::Status(StatusWord::new(0x6A, 0x82)).result_code(),
            (0x82 << 8) | 0x6A
        );
        assert_eq!(
            Error::ShortReply {
                status: StatusWord::new(0x67, 0x00),
                expected: 12,
                received: 2,
            }
            .result_code(),
            0x0067
        );
        assert_eq!(
            Error::OutOfMemory { requested: 8 }.result_code(),
            ERROR_OUTOFMEMORY
        );
        assert_eq!(
            Error::InvalidParameter("length").result_code(),
            SCARD_E_INVALID_PARAMETER
        );
        assert_eq!(
            Error::Transport(TransportError::Native(0x8010_0069)).result_code(),
            0x8010_0069
        );
    }

    #[test]
    fn test_status_accessor() {
        let error = Error::Status(StatusWord::new(0x6E, 0x00));
        assert_eq!(error.status(), Some(StatusWord::new(0x6E, 0x00)));
        assert!(error.is_class_not_supported());

        let error = Error::Transport(TransportError::Native(0x8010_000C));
        assert_eq!(error.status(), None);
        assert!(!error.is_class_not_supported());
    }

    #[test]
    fn test_transport_error_converts_with_question_mark() {
        fn fails() -> Result<()> {
            Err(TransportError::Native(0x8010_000C))?;
            Ok(())
        }

        assert_eq!(
            fails(),
            Err(Error::Transport(TransportError::Native(0x8010_000C)))
        );
    }

    #[test]
    fn test_empty_reply_code_is_zero() {
        let error = Error::ShortReply {
            status: StatusWord::new(0x00, 0x00),
            expected: 3,
            received: 0,
        };
        assert_eq!(error.result_code(), 0);
        assert!(error.status().is_some());
    }

    #[test]
    fn test_display() {
        let error = Error::Status(StatusWord::new(0x6A, 0x82));
        assert_eq!(error.to_string(), "Card status 6A 82: File not found");
    }
}
