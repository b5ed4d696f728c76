use super::TransmitOptions;
use crate::frame::{Encode, Frame, Reader};
use crate::{CommandClass, Result};
use bytes::BufMut;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

const NETWORK_MANAGEMENT_BASIC: u8 = CommandClass::NetworkManagementBasic as u8;

pub const BROADCAST_NODE_ID: u8 = 0xFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum LearnMode {
    Disable = 0x00,
    Classic = 0x01,
    NetworkWideInclusion = 0x02,
    NetworkWideExclusion = 0x03,
}

/// Puts the controller into (or out of) learn mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearnModeSet {
    pub sequence_number: u8,
    pub mode: u8,
}

impl LearnModeSet {
    pub fn new(
        sequence_number: u8,
        mode: LearnMode,
    ) -> Self {
        Self {
            sequence_number,
            mode: mode as u8,
        }
    }

    pub fn learn_mode(&self) -> Option<LearnMode> {
        LearnMode::from_u8(self.mode)
    }
}

impl Encode for LearnModeSet {
    fn wire_length(&self) -> usize {
        Self::MIN_LENGTH
    }

    fn encode_to<B: BufMut>(
        &self,
        buffer: &mut B,
    ) {
        buffer.put_u8(Self::COMMAND_CLASS);
        buffer.put_u8(Self::COMMAND);
        buffer.put_u8(self.sequence_number);
        buffer.put_u8(0x00);
        buffer.put_u8(self.mode);
    }
}

impl Frame for LearnModeSet {
    const COMMAND_CLASS: u8 = NETWORK_MANAGEMENT_BASIC;
    const COMMAND: u8 = 0x01;
    const MIN_LENGTH: usize = 5;

    fn decode_payload(reader: &mut Reader<'_>) -> Result<Self> {
        let sequence_number = reader.get_u8()?;
        reader.skip_reserved()?;
        Ok(Self {
            sequence_number,
            mode: reader.get_u8()?,
        })
    }
}

/// Makes the controller transmit its node information frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeInfoSend {
    pub sequence_number: u8,
    pub destination_node_id: u8,
    pub tx_options: TransmitOptions,
}

impl NodeInfoSend {
    pub fn broadcast(sequence_number: u8) -> Self {
        Self {
            sequence_number,
            destination_node_id: BROADCAST_NODE_ID,
            tx_options: TransmitOptions::default(),
        }
    }
}

impl Encode for NodeInfoSend {
    fn wire_length(&self) -> usize {
        Self::MIN_LENGTH
    }

    fn encode_to<B: BufMut>(
        &self,
        buffer: &mut B,
    ) {
        buffer.put_u8(Self::COMMAND_CLASS);
        buffer.put_u8(Self::COMMAND);
        buffer.put_u8(self.sequence_number);
        buffer.put_u8(0x00);
        buffer.put_u8(self.destination_node_id);
        buffer.put_u8(self.tx_options.bits());
    }
}

impl Frame for NodeInfoSend {
    const COMMAND_CLASS: u8 = NETWORK_MANAGEMENT_BASIC;
    const COMMAND: u8 = 0x05;
    const MIN_LENGTH: usize = 6;

    fn decode_payload(reader: &mut Reader<'_>) -> Result<Self> {
        let sequence_number = reader.get_u8()?;
        reader.skip_reserved()?;
        Ok(Self {
            sequence_number,
            destination_node_id: reader.get_u8()?,
            tx_options: TransmitOptions::from_bits_retain(reader.get_u8()?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learn_mode_set() {
        let command = LearnModeSet::new(7, LearnMode::Classic);
        assert_eq!(command.encode(), [0x4D, 0x01, 0x07, 0x00, 0x01]);
        let (decoded, consumed) = LearnModeSet::decode(&[0x4D, 0x01, 0x07, 0x00, 0x00], 0).unwrap();
        assert_eq!(decoded.learn_mode(), Some(LearnMode::Disable));
        assert_eq!(consumed, 5);
    }

    #[test]
    fn test_node_info_send() {
        let command = NodeInfoSend::broadcast(2);
        assert_eq!(command.encode(), [0x4D, 0x05, 0x02, 0x00, 0xFF, 0x25]);
        assert_eq!(NodeInfoSend::decode(&command.encode(), 0), Ok((command, 6)));
    }
}
