//! APDU command construction
//!
//! Short (single byte Lc/Le) command APDUs according to ISO/IEC 7816-4.

use bytes::{BufMut, Bytes, BytesMut};

/// Generic APDU command structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Command class byte
    pub cla: u8,
    /// Instruction byte
    pub ins: u8,
    /// Parameter 1
    pub p1: u8,
    /// Parameter 2
    pub p2: u8,
    /// Command data (optional)
    pub data: Option<Bytes>,
    /// Expected length (optional), `0x00` meaning 256
    pub le: Option<u8>,
}

impl Command {
    /// Create a new command with expected response length (Le)
    pub const fn new_with_le(cla: u8, ins: u8, p1: u8, p2: u8, le: u8) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data: None,
            le: Some(le),
        }
    }

    /// Create a new command with data
    pub fn new_with_data(cla: u8, ins: u8, p1: u8, p2: u8, data: impl Into<Bytes>) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data: Some(data.into()),
            le: None,
        }
    }

    /// Replace the class byte
    pub const fn with_class(mut self, cla: u8) -> Self {
        self.cla = cla;
        self
    }

    /// Calculate length of serialized command
    pub fn command_length(&self) -> usize {
        // Header (CLA, INS, P1, P2) is always 4 bytes
        let mut length = 4;

        if let Some(data) = &self.data {
            length += 1 + data.len();
        }

        if self.le.is_some() {
            length += 1;
        }

        length
    }

    /// Convert to raw APDU bytes
    ///
    /// Data longer than 255 bytes cannot be expressed in a short APDU; the Lc
    /// byte is truncated, callers in this crate never build such commands.
    pub fn to_bytes(&self) -> Bytes {
        let mut buffer = BytesMut::with_capacity(self.command_length());

        // Header: CLA, INS, P1, P2
        buffer.put_u8(self.cla);
        buffer.put_u8(self.ins);
        buffer.put_u8(self.p1);
        buffer.put_u8(self.p2);

        // Add Lc and data if present
        if let Some(data) = &self.data {
            debug_assert!(data.len() <= 255, "short APDU data too long");
            buffer.put_u8(data.len() as u8);
            buffer.put_slice(data);
        }

        if let Some(le) = self.le {
            buffer.put_u8(le);
        }

        buffer.freeze()
    }
}
