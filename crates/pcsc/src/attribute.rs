//! Mapping of attribute identifiers onto PC/SC attributes

use pcsc::Attribute;
use scquery_core::AttributeId;

/// The PC/SC attribute for `id`, if the binding knows it
pub(crate) const fn to_pcsc(id: AttributeId) -> Option<Attribute> {
    let attribute = match id {
        AttributeId::VENDOR_NAME => Attribute::VendorName,
        AttributeId::VENDOR_IFD_TYPE => Attribute::VendorIfdType,
        AttributeId::VENDOR_IFD_VERSION => Attribute::VendorIfdVersion,
        AttributeId::VENDOR_IFD_SERIAL_NO => Attribute::VendorIfdSerialNo,
        AttributeId::CHANNEL_ID => Attribute::ChannelId,
        AttributeId::ASYNC_PROTOCOL_TYPES => Attribute::AsyncProtocolTypes,
        AttributeId::MAX_INPUT => Attribute::Maxinput,
        AttributeId::CURRENT_PROTOCOL_TYPE => Attribute::CurrentProtocolType,
        AttributeId::ICC_PRESENCE => Attribute::IccPresence,
        AttributeId::ICC_INTERFACE_STATUS => Attribute::IccInterfaceStatus,
        AttributeId::ATR_STRING => Attribute::AtrString,
        AttributeId::ICC_TYPE_PER_ATR => Attribute::IccTypePerAtr,
        AttributeId::DEVICE_FRIENDLY_NAME => Attribute::DeviceFriendlyName,
        AttributeId::DEVICE_SYSTEM_NAME => Attribute::DeviceSystemName,
        _ => return None,
    };
    Some(attribute)
}
