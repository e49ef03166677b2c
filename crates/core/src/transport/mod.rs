//! Boundary traits for the resource manager and a connected card
//!
//! Both traits follow the resource manager's two-call convention: calling a
//! query with no buffer reports the number of bytes required, calling it
//! with a buffer fills the buffer and reports the number of bytes written.

pub mod error;

use std::fmt;

pub use error::TransportError;
use tracing::{debug, trace};

use crate::attribute::AttributeId;

/// Enumeration primitives of a resource manager context
///
/// Name lists cross this boundary in the packed multi-string format: each
/// name is NUL terminated and the list ends with an empty name.
pub trait ResourceManager: fmt::Debug {
    /// List readers, optionally restricted to the packed reader `groups`
    fn list_readers(
        &self,
        groups: Option<&[u8]>,
        buffer: Option<&mut [u8]>,
    ) -> Result<usize, TransportError>;

    /// List card names, optionally restricted to cards matching `atr`
    fn list_cards(
        &self,
        atr: Option<&[u8]>,
        buffer: Option<&mut [u8]>,
    ) -> Result<usize, TransportError>;

    /// List reader groups
    fn list_reader_groups(&self, buffer: Option<&mut [u8]>) -> Result<usize, TransportError>;
}

/// A connection to a card in a reader
///
/// The connection is established by the caller; operations here never
/// connect, reconnect or disconnect.
pub trait CardChannel: fmt::Debug {
    /// Read a reader or card attribute
    fn get_attribute(
        &self,
        id: AttributeId,
        buffer: Option<&mut [u8]>,
    ) -> Result<usize, TransportError>;

    /// Send an APDU over the card's active protocol
    ///
    /// The reply is written to the start of `reply`; the number of bytes
    /// written is returned.
    fn transmit(&mut self, command: &[u8], reply: &mut [u8]) -> Result<usize, TransportError> {
        trace!(command = %hex::encode_upper(command), "Transmitting command");
        let result = self.do_transmit(command, reply);
        match &result {
            Ok(len) => {
                let received = &reply[..(*len).min(reply.len())];
                trace!(reply = %hex::encode_upper(received), "Received reply");
            }
            Err(e) => {
                debug!(error = ?e, "Transport error during transmission");
            }
        }
        result
    }

    /// Internal implementation of transmit
    /// This is the method that concrete implementations should override
    fn do_transmit(&mut self, command: &[u8], reply: &mut [u8]) -> Result<usize, TransportError>;
}

#[cfg(test)]
pub(crate) use mock::{MockCard, MockResourceManager};
