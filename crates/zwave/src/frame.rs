use crate::{Command, Error, Result};
use bytes::{Buf, BufMut, BytesMut};

/// Every frame starts with a command class byte followed by a command byte.
pub const HEADER_LENGTH: usize = 2;

pub trait Encode {
    fn wire_length(&self) -> usize;

    fn encode_to<B: BufMut>(
        &self,
        buffer: &mut B,
    );

    fn encode(&self) -> Vec<u8> {
        let mut buffer = BytesMut::with_capacity(self.wire_length());
        self.encode_to(&mut buffer);
        buffer.to_vec()
    }
}

/// How a decoder finds the end of its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// The frame length follows from fixed sizes and length fields inside it.
    SelfDelimiting,
    /// The frame runs to the end of the message handed over by the transport.
    ConsumesRemainder,
}

pub trait Frame: Encode + Sized {
    const COMMAND_CLASS: u8;
    const COMMAND: u8;
    /// Smallest valid frame, header included.
    const MIN_LENGTH: usize;
    const FRAMING: Framing = Framing::SelfDelimiting;

    /// Reads everything after the two header bytes.
    fn decode_payload(reader: &mut Reader<'_>) -> Result<Self>;

    /// Decodes one frame starting at `offset` and reports how many bytes it used.
    fn decode(
        bytes: &[u8],
        offset: usize,
    ) -> Result<(Self, usize)> {
        let mut reader = Reader::new(bytes, offset);
        let (command_class, command) = reader.get_header()?;
        if (command_class, command) != (Self::COMMAND_CLASS, Self::COMMAND) {
            return Err(Error::UnexpectedCommand {
                command_class,
                command,
            });
        }
        reader.require(Self::MIN_LENGTH - HEADER_LENGTH)?;
        let frame = Self::decode_payload(&mut reader)?;
        Ok((frame, reader.consumed()))
    }
}

/// Outcome of decoding a single frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub command_class: u8,
    pub command_id: u8,
    pub consumed_length: usize,
    pub command: Command,
}

impl Decoded {
    pub(crate) fn new(
        command: Command,
        consumed_length: usize,
    ) -> Self {
        debug_assert_eq!(consumed_length, command.wire_length());
        Self {
            command_class: command.command_class(),
            command_id: command.command_id(),
            consumed_length,
            command,
        }
    }
}

pub(crate) fn decode_into<T>(
    bytes: &[u8],
    offset: usize,
) -> Result<Decoded>
where
    T: Frame + Into<Command>,
{
    let (frame, consumed_length) = T::decode(bytes, offset)?;
    Ok(Decoded::new(frame.into(), consumed_length))
}

/// Bounds checked cursor over a caller owned buffer.
///
/// Positions reported in errors are absolute offsets into the whole buffer.
pub struct Reader<'a> {
    buffer: &'a [u8],
    start: usize,
    position: usize,
}

impl<'a> Reader<'a> {
    pub fn new(
        bytes: &'a [u8],
        offset: usize,
    ) -> Self {
        Self {
            buffer: bytes.get(offset..).unwrap_or_default(),
            start: offset,
            position: offset,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn consumed(&self) -> usize {
        self.position - self.start
    }

    pub fn remaining(&self) -> usize {
        self.buffer.remaining()
    }

    pub fn require(
        &self,
        needed: usize,
    ) -> Result<()> {
        if self.buffer.remaining() < needed {
            return Err(Error::truncated(self.position, needed, self.remaining()));
        }
        Ok(())
    }

    pub fn get_header(&mut self) -> Result<(u8, u8)> {
        self.require(HEADER_LENGTH)?;
        Ok((self.get_u8()?, self.get_u8()?))
    }

    pub fn get_u8(&mut self) -> Result<u8> {
        self.require(1)?;
        self.position += 1;
        Ok(self.buffer.get_u8())
    }

    pub fn get_u16(&mut self) -> Result<u16> {
        self.require(2)?;
        self.position += 2;
        Ok(self.buffer.get_u16())
    }

    /// Reserved bytes are read and dropped; they are written back as zero.
    pub fn skip_reserved(&mut self) -> Result<()> {
        self.get_u8().map(drop)
    }

    pub fn get_bytes(
        &mut self,
        len: usize,
    ) -> Result<Vec<u8>> {
        self.require(len)?;
        self.position += len;
        Ok(self.buffer.copy_to_bytes(len).to_vec())
    }

    pub fn get_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.require(N)?;
        let mut array = [0; N];
        self.buffer.copy_to_slice(&mut array);
        self.position += N;
        Ok(array)
    }

    pub fn get_remaining(&mut self) -> Vec<u8> {
        let len = self.remaining();
        self.position += len;
        self.buffer.copy_to_bytes(len).to_vec()
    }
}
