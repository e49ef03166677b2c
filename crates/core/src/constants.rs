//! Constants used in card transactions
//!
//! CLA bytes, instruction codes and the parameter values used by the
//! GET RESPONSE and SELECT FILE exchanges.

/// Command classes
pub mod cla {
    /// ISO 7816 interindustry class
    pub const ISO7816: u8 = 0x00;
    /// Proprietary class expected by older cards for GET RESPONSE and SELECT FILE
    pub const PROPRIETARY: u8 = 0xC0;
}

/// Instruction codes
pub mod ins {
    /// SELECT FILE command
    pub const SELECT_FILE: u8 = 0xA4;
    /// GET RESPONSE command
    pub const GET_RESPONSE: u8 = 0xC0;
}

/// Parameter values for SELECT FILE (P1)
pub mod select_p1 {
    /// Select MF, DF or EF by file identifier
    pub const BY_FILE_ID: u8 = 0x00;
}

/// SELECT FILE classes, in the order they are tried
pub const SELECT_FILE_CLASSES: [u8; 2] = [cla::PROPRIETARY, cla::ISO7816];
