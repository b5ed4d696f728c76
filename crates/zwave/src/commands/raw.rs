use crate::command_class::command_class_name;
use crate::frame::{Encode, Reader, HEADER_LENGTH};
use crate::Result;
use bytes::BufMut;

/// A command without a registered decoder, kept as opaque bytes.
///
/// The payload is everything between the header and the end of the message
/// handed over by the transport, so a raw command can only be the last frame
/// of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommand {
    pub command_class: u8,
    pub command: u8,
    pub payload: Vec<u8>,
}

impl RawCommand {
    pub fn new(
        command_class: u8,
        command: u8,
        payload: Vec<u8>,
    ) -> Self {
        Self {
            command_class,
            command,
            payload,
        }
    }

    pub fn decode(
        bytes: &[u8],
        offset: usize,
    ) -> Result<(Self, usize)> {
        let mut reader = Reader::new(bytes, offset);
        let (command_class, command) = reader.get_header()?;
        let payload = reader.get_remaining();
        tracing::debug!(
            command_class = %command_class_name(command_class),
            command,
            payload_length = payload.len(),
            "no decoder registered, keeping raw command"
        );
        Ok((
            Self {
                command_class,
                command,
                payload,
            },
            reader.consumed(),
        ))
    }
}

impl Encode for RawCommand {
    fn wire_length(&self) -> usize {
        HEADER_LENGTH + self.payload.len()
    }

    fn encode_to<B: BufMut>(
        &self,
        buffer: &mut B,
    ) {
        buffer.put_u8(self.command_class);
        buffer.put_u8(self.command);
        buffer.put_slice(&self.payload);
    }
}
