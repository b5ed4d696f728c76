use crate::bits::count_byte;
use crate::frame::{Encode, Frame, Reader};
use crate::{CommandClass, Error, Result};
use bytes::BufMut;

const VERSION: u8 = CommandClass::Version as u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareVersion {
    pub version: u8,
    pub sub_version: u8,
}

impl From<(u8, u8)> for FirmwareVersion {
    fn from((version, sub_version): (u8, u8)) -> Self {
        Self {
            version,
            sub_version,
        }
    }
}

/// Firmware targets of a device. Target 0 always exists and travels in the
/// report header; the others follow the trailing count byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirmwareVersionList {
    first: FirmwareVersion,
    additional: Vec<FirmwareVersion>,
}

impl FirmwareVersionList {
    pub fn new(first: FirmwareVersion) -> Self {
        Self {
            first,
            additional: Vec::new(),
        }
    }

    pub fn first(&self) -> FirmwareVersion {
        self.first
    }

    pub fn additional(&self) -> &[FirmwareVersion] {
        &self.additional
    }

    pub fn len(&self) -> usize {
        1 + self.additional.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<FirmwareVersion> {
        match index {
            0 => Some(self.first),
            index => self.additional.get(index - 1).copied(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = FirmwareVersion> + '_ {
        std::iter::once(self.first).chain(self.additional.iter().copied())
    }
}

impl TryFrom<Vec<FirmwareVersion>> for FirmwareVersionList {
    type Error = Error;

    fn try_from(versions: Vec<FirmwareVersion>) -> Result<Self> {
        let mut versions = versions.into_iter();
        let Some(first) = versions.next() else {
            return Err(Error::invalid("firmware_count", 0));
        };
        let additional: Vec<_> = versions.collect();
        count_byte("firmware_count", additional.len())?;
        Ok(Self { first, additional })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionGet;

impl Encode for VersionGet {
    fn wire_length(&self) -> usize {
        Self::MIN_LENGTH
    }

    fn encode_to<B: BufMut>(
        &self,
        buffer: &mut B,
    ) {
        buffer.put_u8(Self::COMMAND_CLASS);
        buffer.put_u8(Self::COMMAND);
    }
}

impl Frame for VersionGet {
    const COMMAND_CLASS: u8 = VERSION;
    const COMMAND: u8 = 0x11;
    const MIN_LENGTH: usize = 2;

    fn decode_payload(_reader: &mut Reader<'_>) -> Result<Self> {
        Ok(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionReport {
    pub library_type: u8,
    pub protocol_version: u8,
    pub protocol_sub_version: u8,
    pub firmware_versions: FirmwareVersionList,
    pub hardware_version: u8,
}

impl VersionReport {
    pub fn firmware_count(&self) -> u8 {
        self.firmware_versions.additional.len() as u8
    }
}

impl Encode for VersionReport {
    fn wire_length(&self) -> usize {
        Self::MIN_LENGTH + 2 * self.firmware_versions.additional.len()
    }

    fn encode_to<B: BufMut>(
        &self,
        buffer: &mut B,
    ) {
        buffer.put_u8(Self::COMMAND_CLASS);
        buffer.put_u8(Self::COMMAND);
        buffer.put_u8(self.library_type);
        buffer.put_u8(self.protocol_version);
        buffer.put_u8(self.protocol_sub_version);
        buffer.put_u8(self.firmware_versions.first.version);
        buffer.put_u8(self.firmware_versions.first.sub_version);
        buffer.put_u8(self.hardware_version);
        buffer.put_u8(self.firmware_count());
        for firmware in &self.firmware_versions.additional {
            buffer.put_u8(firmware.version);
            buffer.put_u8(firmware.sub_version);
        }
    }
}

impl Frame for VersionReport {
    const COMMAND_CLASS: u8 = VERSION;
    const COMMAND: u8 = 0x12;
    const MIN_LENGTH: usize = 9;

    fn decode_payload(reader: &mut Reader<'_>) -> Result<Self> {
        let library_type = reader.get_u8()?;
        let protocol_version = reader.get_u8()?;
        let protocol_sub_version = reader.get_u8()?;
        let first = FirmwareVersion {
            version: reader.get_u8()?,
            sub_version: reader.get_u8()?,
        };
        let hardware_version = reader.get_u8()?;
        let firmware_count = reader.get_u8()? as usize;
        reader.require(2 * firmware_count)?;
        let mut additional = Vec::with_capacity(firmware_count);
        for _ in 0..firmware_count {
            additional.push(FirmwareVersion {
                version: reader.get_u8()?,
                sub_version: reader.get_u8()?,
            });
        }
        Ok(Self {
            library_type,
            protocol_version,
            protocol_sub_version,
            firmware_versions: FirmwareVersionList { first, additional },
            hardware_version,
        })
    }
}
