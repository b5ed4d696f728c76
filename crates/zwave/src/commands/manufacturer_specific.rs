use crate::frame::{Encode, Frame, Reader};
use crate::{CommandClass, Result};
use bytes::BufMut;

const MANUFACTURER_SPECIFIC: u8 = CommandClass::ManufacturerSpecific as u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManufacturerSpecificGet;

impl Encode for ManufacturerSpecificGet {
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

impl Frame for ManufacturerSpecificGet {
    const COMMAND_CLASS: u8 = MANUFACTURER_SPECIFIC;
    const COMMAND: u8 = 0x04;
    const MIN_LENGTH: usize = 2;

    fn decode_payload(_reader: &mut Reader<'_>) -> Result<Self> {
        Ok(Self)
    }
}

/// Identifies a device by manufacturer, product type and product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManufacturerSpecificReport {
    pub manufacturer_id: u16,
    pub product_type_id: u16,
    pub product_id: u16,
}

impl Encode for ManufacturerSpecificReport {
    fn wire_length(&self) -> usize {
        Self::MIN_LENGTH
    }

    fn encode_to<B: BufMut>(
        &self,
        buffer: &mut B,
    ) {
        buffer.put_u8(Self::COMMAND_CLASS);
        buffer.put_u8(Self::COMMAND);
        buffer.put_u16(self.manufacturer_id);
        buffer.put_u16(self.product_type_id);
        buffer.put_u16(self.product_id);
    }
}

impl Frame for ManufacturerSpecificReport {
    const COMMAND_CLASS: u8 = MANUFACTURER_SPECIFIC;
    const COMMAND: u8 = 0x05;
    const MIN_LENGTH: usize = 8;

    fn decode_payload(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            manufacturer_id: reader.get_u16()?,
            product_type_id: reader.get_u16()?,
            product_id: reader.get_u16()?,
        })
    }
}
