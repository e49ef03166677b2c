//! Card channel backed by a PC/SC card connection

use std::fmt;

use pcsc::{Card, Disposition};
use scquery_core::{AttributeId, Bytes, CardChannel, TransportError, get_attribute};

use crate::attribute::to_pcsc;
use crate::error::{PcscError, native};

/// A connected PC/SC card
///
/// Dropping the value disconnects and leaves the card as it is.
pub struct PcscCard {
    /// Card connection
    card: Card,
    /// Reader name
    reader_name: String,
}

impl fmt::Debug for PcscCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PcscCard")
            .field("reader_name", &self.reader_name)
            .finish_non_exhaustive()
    }
}

impl PcscCard {
    pub(crate) const fn new(card: Card, reader_name: String) -> Self {
        Self { card, reader_name }
    }

    /// Get the reader name
    pub fn reader_name(&self) -> &str {
        &self.reader_name
    }

    /// Get the ATR of the card
    pub fn atr(&self) -> scquery_core::Result<Bytes> {
        get_attribute(self, AttributeId::ATR_STRING)
    }

    /// Disconnect from the card, applying `disposition`
    pub fn disconnect(self, disposition: Disposition) -> Result<(), PcscError> {
        self.card
            .disconnect(disposition)
            .map_err(|(_card, error)| PcscError::from(error))
    }
}

impl CardChannel for PcscCard {
    fn get_attribute(
        &self,
        id: AttributeId,
        buffer: Option<&mut [u8]>,
    ) -> Result<usize, TransportError> {
        let attribute = to_pcsc(id).ok_or_else(|| native(pcsc::Error::UnsupportedFeature))?;

        match buffer {
            None => self.card.get_attribute_len(attribute).map_err(native),
            Some(buffer) => self
                .card
                .get_attribute(attribute, buffer)
                .map(<[u8]>::len)
                .map_err(native),
        }
    }

    fn do_transmit(&mut self, command: &[u8], reply: &mut [u8]) -> Result<usize, TransportError> {
        self.card
            .transmit(command, reply)
            .map(<[u8]>::len)
            .map_err(native)
    }
}
