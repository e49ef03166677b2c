//! Smart card discovery and card transactions over an ISO 7816 APDU transport
//!
//! This crate is a thin layer between an application and a smart card
//! resource manager. It provides:
//!
//! - Discovery of readers, cards and reader groups ([`list_readers`],
//!   [`list_cards`], [`list_groups`])
//! - Reader attribute retrieval ([`get_attribute`])
//! - The GET RESPONSE and SELECT FILE card exchanges ([`get_response`],
//!   [`select_file`]), including status word interpretation and the
//!   class byte fallback for SELECT FILE
//!
//! The resource manager and the connected card are supplied by the caller
//! through the [`ResourceManager`] and [`CardChannel`] traits. The
//! `scquery-pcsc` crate implements both on top of the system PC/SC service.
//!
//! ## Result codes
//!
//! Every [`Error`] maps to a 32-bit result code through
//! [`Error::result_code`]. Card status errors pack the status word as
//! `(SW2 << 8) | SW1` with the high 16 bits clear, see
//! [`StatusWord::result_code`].
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

// Re-export bytes for convenience
pub use bytes::Bytes;

// Main modules
pub mod attribute;
pub mod card;
pub mod command;
pub mod constants;
pub mod discovery;
pub mod names;
pub mod response;
pub mod transport;

mod buffer;

// Core error types
mod error;
pub use error::{ERROR_OUTOFMEMORY, Error, Result, SCARD_E_INVALID_PARAMETER};

// Re-exports for common types
pub use attribute::AttributeId;
pub use card::{
    MAX_RESPONSE_LENGTH, SelectedFile, get_attribute, get_response, select_file,
    select_file_and_fetch,
};
pub use command::Command;
pub use discovery::{list_cards, list_groups, list_readers};
pub use names::NameList;
pub use response::ResponseBuffer;
pub use response::status::StatusWord;
pub use transport::{CardChannel, ResourceManager, TransportError};

/// Prelude module containing commonly used traits and types
pub mod prelude {
    pub use crate::{
        AttributeId, Bytes, CardChannel, Error, NameList, ResourceManager, ResponseBuffer, Result,
        StatusWord, TransportError,
    };
}
