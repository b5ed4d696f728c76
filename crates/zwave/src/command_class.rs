use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use strum::Display;

/// Command classes known by name, used to label frames in log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum CommandClass {
    NoOperation = 0x00,
    Basic = 0x20,
    ControllerReplication = 0x21,
    ApplicationStatus = 0x22,
    SwitchBinary = 0x25,
    SwitchMultilevel = 0x26,
    SwitchAll = 0x27,
    SceneActivation = 0x2B,
    SensorBinary = 0x30,
    SensorMultilevel = 0x31,
    Meter = 0x32,
    NetworkManagementInclusion = 0x34,
    ThermostatMode = 0x40,
    ThermostatSetpoint = 0x43,
    NetworkManagementBasic = 0x4D,
    NetworkManagementProxy = 0x52,
    Crc16Encap = 0x56,
    ZwavePlusInfo = 0x5E,
    MultiChannel = 0x60,
    DoorLock = 0x62,
    UserCode = 0x63,
    Configuration = 0x70,
    Notification = 0x71,
    ManufacturerSpecific = 0x72,
    Powerlevel = 0x73,
    Protection = 0x75,
    NodeNaming = 0x77,
    FirmwareUpdateMd = 0x7A,
    Battery = 0x80,
    Clock = 0x81,
    Hail = 0x82,
    WakeUp = 0x84,
    Association = 0x85,
    Version = 0x86,
    Indicator = 0x87,
    MultiChannelAssociation = 0x8E,
    MultiCmd = 0x8F,
    Security = 0x98,
    Security2 = 0x9F,
    Mark = 0xEF,
}

impl CommandClass {
    pub fn from_id(id: u8) -> Option<Self> {
        Self::from_u8(id)
    }

    pub fn id(self) -> u8 {
        self as u8
    }
}

/// Label for a command class id; unnamed ids render as hex.
pub fn command_class_name(id: u8) -> String {
    match CommandClass::from_id(id) {
        Some(command_class) => command_class.to_string(),
        None => format!("0x{id:02X}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_class_lookup() {
        assert_eq!(CommandClass::from_id(0x85), Some(CommandClass::Association));
        assert_eq!(CommandClass::from_id(0x34), Some(CommandClass::NetworkManagementInclusion));
        assert_eq!(CommandClass::from_id(0xEE), None);
        assert_eq!(CommandClass::Version.id(), 0x86);
    }

    #[test]
    fn test_command_class_name() {
        assert_eq!(command_class_name(0x4D), "NETWORK_MANAGEMENT_BASIC");
        assert_eq!(command_class_name(0x72), "MANUFACTURER_SPECIFIC");
        assert_eq!(command_class_name(0xEE), "0xEE");
    }
}
