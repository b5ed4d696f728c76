use crate::frame::{Encode, Frame, Reader};
use crate::{CommandClass, Result};
use bytes::BufMut;

const BASIC: u8 = CommandClass::Basic as u8;

pub const BASIC_OFF: u8 = 0x00;
pub const BASIC_ON: u8 = 0xFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicSet {
    pub value: u8,
}

impl Encode for BasicSet {
    fn wire_length(&self) -> usize {
        Self::MIN_LENGTH
    }

    fn encode_to<B: BufMut>(
        &self,
        buffer: &mut B,
    ) {
        buffer.put_u8(Self::COMMAND_CLASS);
        buffer.put_u8(Self::COMMAND);
        buffer.put_u8(self.value);
    }
}

impl Frame for BasicSet {
    const COMMAND_CLASS: u8 = BASIC;
    const COMMAND: u8 = 0x01;
    const MIN_LENGTH: usize = 3;

    fn decode_payload(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            value: reader.get_u8()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicGet;

impl Encode for BasicGet {
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

impl Frame for BasicGet {
    const COMMAND_CLASS: u8 = BASIC;
    const COMMAND: u8 = 0x02;
    const MIN_LENGTH: usize = 2;

    fn decode_payload(_reader: &mut Reader<'_>) -> Result<Self> {
        Ok(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicReport {
    pub value: u8,
}

impl Encode for BasicReport {
    fn wire_length(&self) -> usize {
        Self::MIN_LENGTH
    }

    fn encode_to<B: BufMut>(
        &self,
        buffer: &mut B,
    ) {
        buffer.put_u8(Self::COMMAND_CLASS);
        buffer.put_u8(Self::COMMAND);
        buffer.put_u8(self.value);
    }
}

impl Frame for BasicReport {
    const COMMAND_CLASS: u8 = BASIC;
    const COMMAND: u8 = 0x03;
    const MIN_LENGTH: usize = 3;

    fn decode_payload(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            value: reader.get_u8()?,
        })
    }
}
