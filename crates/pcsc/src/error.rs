//! Error types for the PC/SC bindings

use scquery_core::TransportError;

/// Errors raised while establishing a context or connecting to a card
#[derive(Debug, thiserror::Error)]
pub enum PcscError {
    /// PC/SC error
    #[error("PC/SC error: {0}")]
    Pcsc(#[from] pcsc::Error),

    /// Reader name cannot be passed to PC/SC
    #[error("Invalid reader name: {0}")]
    InvalidReaderName(String),

    /// No card present in reader
    #[error("No card present in reader: {0}")]
    NoCard(String),
}

/// Convert a PC/SC error into the core's transport error, keeping its code
pub(crate) fn native(error: pcsc::Error) -> TransportError {
    tracing::debug!(%error, "PC/SC call failed");
    TransportError::Native(error as u32)
}
