//! Reader and card attribute identifiers

use std::fmt;

/// Numeric identifier of a reader or card attribute
///
/// The value is `(class << 16) | tag`, the layout used by PC/SC
/// `SCARD_ATTR_*` identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeId(pub u32);

/// Attribute classes
pub mod class {
    /// Vendor information
    pub const VENDOR_INFO: u32 = 1;
    /// Communication definitions
    pub const COMMUNICATIONS: u32 = 2;
    /// Protocol definitions
    pub const PROTOCOL: u32 = 3;
    /// Vendor defined information
    pub const VENDOR_DEFINED: u32 = 7;
    /// Interface device protocol
    pub const IFD_PROTOCOL: u32 = 8;
    /// ICC state
    pub const ICC_STATE: u32 = 9;
    /// System
    pub const SYSTEM: u32 = 0x7FFF;
}

impl AttributeId {
    /// Vendor name
    pub const VENDOR_NAME: Self = Self::new(class::VENDOR_INFO, 0x0100);
    /// Vendor-supplied interface device type
    pub const VENDOR_IFD_TYPE: Self = Self::new(class::VENDOR_INFO, 0x0101);
    /// Vendor-supplied interface device version
    pub const VENDOR_IFD_VERSION: Self = Self::new(class::VENDOR_INFO, 0x0102);
    /// Vendor-supplied interface device serial number
    pub const VENDOR_IFD_SERIAL_NO: Self = Self::new(class::VENDOR_INFO, 0x0103);
    /// Channel identifier
    pub const CHANNEL_ID: Self = Self::new(class::COMMUNICATIONS, 0x0110);
    /// Supported asynchronous protocol types
    pub const ASYNC_PROTOCOL_TYPES: Self = Self::new(class::PROTOCOL, 0x0120);
    /// Maximum input size
    pub const MAX_INPUT: Self = Self::new(class::VENDOR_DEFINED, 0xA007);
    /// Protocol currently in use
    pub const CURRENT_PROTOCOL_TYPE: Self = Self::new(class::IFD_PROTOCOL, 0x0201);
    /// Card presence
    pub const ICC_PRESENCE: Self = Self::new(class::ICC_STATE, 0x0300);
    /// Card contacts active
    pub const ICC_INTERFACE_STATUS: Self = Self::new(class::ICC_STATE, 0x0301);
    /// Answer To Reset of the card
    pub const ATR_STRING: Self = Self::new(class::ICC_STATE, 0x0303);
    /// Card type as derived from the ATR
    pub const ICC_TYPE_PER_ATR: Self = Self::new(class::ICC_STATE, 0x0304);
    /// Reader friendly name
    pub const DEVICE_FRIENDLY_NAME: Self = Self::new(class::SYSTEM, 0x0003);
    /// Reader system name
    pub const DEVICE_SYSTEM_NAME: Self = Self::new(class::SYSTEM, 0x0004);

    /// Build an identifier from its class and tag
    pub const fn new(class: u32, tag: u32) -> Self {
        Self((class << 16) | (tag & 0xFFFF))
    }

    /// The raw numeric identifier
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Attribute class (upper 16 bits)
    pub const fn class(self) -> u32 {
        self.0 >> 16
    }

    /// Attribute tag (lower 16 bits)
    pub const fn tag(self) -> u32 {
        self.0 & 0xFFFF
    }

    /// Name of a well-known attribute
    pub const fn name(self) -> Option<&'static str> {
        let name = match self {
            Self::VENDOR_NAME => "vendor name",
            Self::VENDOR_IFD_TYPE => "vendor IFD type",
            Self::VENDOR_IFD_VERSION => "vendor IFD version",
            Self::VENDOR_IFD_SERIAL_NO => "vendor IFD serial number",
            Self::CHANNEL_ID => "channel id",
            Self::ASYNC_PROTOCOL_TYPES => "asynchronous protocol types",
            Self::MAX_INPUT => "maximum input",
            Self::CURRENT_PROTOCOL_TYPE => "current protocol type",
            Self::ICC_PRESENCE => "ICC presence",
            Self::ICC_INTERFACE_STATUS => "ICC interface status",
            Self::ATR_STRING => "ATR string",
            Self::ICC_TYPE_PER_ATR => "ICC type per ATR",
            Self::DEVICE_FRIENDLY_NAME => "device friendly name",
            Self::DEVICE_SYSTEM_NAME => "device system name",
            _ => return None,
        };
        Some(name)
    }
}

impl From<u32> for AttributeId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<AttributeId> for u32 {
    fn from(id: AttributeId) -> Self {
        id.0
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} ({:#010X})", self.0),
            None => write!(f, "{:#010X}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing() {
        assert_eq!(AttributeId::VENDOR_NAME.raw(), 0x0001_0100);
        assert_eq!(AttributeId::ATR_STRING.raw(), 0x0009_0303);
        assert_eq!(AttributeId::CURRENT_PROTOCOL_TYPE.raw(), 0x0008_0201);
        assert_eq!(AttributeId::DEVICE_FRIENDLY_NAME.raw(), 0x7FFF_0003);

        let id = AttributeId::from(0x0009_0303);
        assert_eq!(id, AttributeId::ATR_STRING);
        assert_eq!(id.class(), class::ICC_STATE);
        assert_eq!(id.tag(), 0x0303);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            AttributeId::ATR_STRING.to_string(),
            "ATR string (0x00090303)"
        );
        assert_eq!(AttributeId(0x0001_0200).to_string(), "0x00010200");
    }
}
