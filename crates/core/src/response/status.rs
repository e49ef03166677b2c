//! Status word definitions for APDU responses

use std::fmt;

use tracing::{Level, debug, info, warn};

/// Status Word (SW1-SW2) from an APDU response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusWord {
    /// First status byte (SW1)
    pub sw1: u8,
    /// Second status byte (SW2)
    pub sw2: u8,
}

impl StatusWord {
    /// Create a new status word
    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self { sw1, sw2 }
    }

    /// Pack this status word into a 32-bit result code
    ///
    /// Layout, least significant first:
    ///
    /// | bits   | value |
    /// |--------|-------|
    /// | 0..8   | SW1   |
    /// | 8..16  | SW2   |
    /// | 16..32 | 0     |
    ///
    /// So `6A 82` becomes `0x0000_826A`.
    pub const fn result_code(&self) -> u32 {
        ((self.sw2 as u32) << 8) | (self.sw1 as u32)
    }

    /// Unpack a result code produced by [`Self::result_code`]
    ///
    /// Returns `None` when the high 16 bits are set, which means the code
    /// did not come from a card status word.
    pub const fn from_result_code(code: u32) -> Option<Self> {
        if code >> 16 != 0 {
            return None;
        }
        Some(Self {
            sw1: code as u8,
            sw2: (code >> 8) as u8,
        })
    }

    /// Check if this status word indicates success (90 00)
    pub const fn is_success(&self) -> bool {
        self.sw1 == 0x90 && self.sw2 == 0x00
    }

    /// Check if this status word indicates more data is available (61 XX)
    pub const fn is_more_data_available(&self) -> bool {
        self.sw1 == 0x61
    }

    /// Get the number of remaining bytes when SW1 = 61
    pub const fn remaining_bytes(&self) -> Option<u8> {
        if self.sw1 == 0x61 {
            Some(self.sw2)
        } else {
            None
        }
    }

    /// Check if this status word indicates a warning (62 XX or 63 XX)
    pub const fn is_warning(&self) -> bool {
        self.sw1 == 0x62 || self.sw1 == 0x63
    }

    /// Check if this status word indicates the class byte is not supported (6E 00)
    pub const fn is_class_not_supported(&self) -> bool {
        self.sw1 == 0x6E && self.sw2 == 0x00
    }

    /// Get the appropriate tracing level for this status word
    pub const fn tracing_level(&self) -> Level {
        if self.is_success() || self.is_more_data_available() {
            Level::DEBUG
        } else if self.is_warning() {
            Level::INFO
        } else {
            Level::WARN
        }
    }

    /// Log this status word for `operation` at [`Self::tracing_level`]
    pub(crate) fn log(&self, operation: &'static str) {
        let level = self.tracing_level();
        let description = self.description();
        if level == Level::DEBUG {
            debug!(operation, status = %self, description, "Card status");
        } else if level == Level::INFO {
            info!(operation, status = %self, description, "Card status");
        } else {
            warn!(operation, status = %self, description, "Card status");
        }
    }

    /// Get a description of this status word
    pub const fn description(&self) -> &'static str {
        match (self.sw1, self.sw2) {
            (0x90, 0x00) => "Success",
            (0x61, _) => "More data available",
            (0x62, 0x00) => "No information given",
            (0x62, 0x81) => "Part of returned data may be corrupted",
            (0x62, 0x82) => "End of file/record reached before reading Le bytes",
            (0x62, 0x83) => "Selected file invalidated",
            (0x62, 0x84) => "FCI not formatted according to specification",
            (0x63, 0x00) => "No information given",
            (0x63, 0x81) => "File filled up by the last write",
            (0x63, n) if (n & 0xF0) == 0xC0 => "Counter value",
            (0x64, 0x00) => "State of non-volatile memory unchanged",
            (0x65, 0x81) => "Memory failure",
            (0x67, 0x00) => "Wrong length",
            (0x68, 0x81) => "Logical channel not supported",
            (0x68, 0x82) => "Secure messaging not supported",
            (0x69, 0x81) => "Command incompatible with file structure",
            (0x69, 0x82) => "Security status not satisfied",
            (0x69, 0x83) => "Authentication method blocked",
            (0x69, 0x85) => "Conditions of use not satisfied",
            (0x69, 0x86) => "Command not allowed",
            (0x6A, 0x80) => "Incorrect parameters in the data field",
            (0x6A, 0x81) => "Function not supported",
            (0x6A, 0x82) => "File not found",
            (0x6A, 0x83) => "Record not found",
            (0x6A, 0x84) => "Not enough memory space in the file",
            (0x6A, 0x86) => "Incorrect parameters P1-P2",
            (0x6A, 0x88) => "Referenced data not found",
            (0x6B, 0x00) => "Wrong parameters P1-P2",
            (0x6C, _) => "Wrong Le field",
            (0x6D, 0x00) => "Instruction code not supported or invalid",
            (0x6E, 0x00) => "Class not supported",
            (0x6F, 0x00) => "No precise diagnosis",
            _ => "Unknown status word",
        }
    }
}

impl fmt::Display for StatusWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X} {:02X}", self.sw1, self.sw2)
    }
}
