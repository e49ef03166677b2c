//! Card response buffers
//!
//! A [`ResponseBuffer`] owns the full reply of a GET RESPONSE exchange: the
//! requested data bytes followed by the two status word bytes. The status
//! word is kept in the buffer but is not part of [`ResponseBuffer::payload`].

pub mod status;

use bytes::Bytes;

use status::StatusWord;

/// Data returned by the card for a GET RESPONSE command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseBuffer {
    /// Payload followed by SW1 SW2, always at least 2 bytes
    raw: Bytes,
}

impl ResponseBuffer {
    /// Wrap a complete reply; `raw` must end with the status word
    pub(crate) fn new(raw: Bytes) -> Self {
        debug_assert!(raw.len() >= 2, "reply must carry a status word");
        Self { raw }
    }

    /// The data bytes, without the trailing status word
    pub fn payload(&self) -> &[u8] {
        &self.raw[..self.payload_len()]
    }

    /// Consume the buffer and return only the data bytes
    pub fn into_payload(self) -> Bytes {
        let len = self.payload_len();
        self.raw.slice(..len)
    }

    /// The status word that terminated the reply
    pub fn status(&self) -> StatusWord {
        let len = self.payload_len();
        StatusWord::new(self.raw[len], self.raw[len + 1])
    }

    /// The complete reply, status word included
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Length of the complete reply, status word included
    pub fn raw_len(&self) -> usize {
        self.raw.len()
    }

    /// Number of data bytes
    pub fn len(&self) -> usize {
        self.payload_len()
    }

    /// Whether the card returned no data bytes
    pub fn is_empty(&self) -> bool {
        self.payload_len() == 0
    }

    fn payload_len(&self) -> usize {
        self.raw.len().saturating_sub(2)
    }
}

impl AsRef<[u8]> for ResponseBuffer {
    fn as_ref(&self) -> &[u8] {
        self.payload()
    }
}
