use crate::frame::{Encode, Frame, Reader};
use crate::node_set::{NodeSet, NODE_BITMAP_LENGTH};
use crate::{CommandClass, Result};
use bytes::BufMut;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

const NETWORK_MANAGEMENT_PROXY: u8 = CommandClass::NetworkManagementProxy as u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum NodeListStatus {
    Latest = 0x00,
    MayNotBeLatest = 0x01,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeListGet {
    pub sequence_number: u8,
}

impl NodeListGet {
    pub fn new(sequence_number: u8) -> Self {
        Self { sequence_number }
    }
}

impl Encode for NodeListGet {
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
    }
}

impl Frame for NodeListGet {
    const COMMAND_CLASS: u8 = NETWORK_MANAGEMENT_PROXY;
    const COMMAND: u8 = 0x01;
    const MIN_LENGTH: usize = 3;

    fn decode_payload(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            sequence_number: reader.get_u8()?,
        })
    }
}

/// Nodes currently included in the network, as known by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeListReport {
    pub sequence_number: u8,
    pub status: u8,
    pub controller_id: u8,
    pub nodes: NodeSet,
}

impl NodeListReport {
    pub fn list_status(&self) -> Option<NodeListStatus> {
        NodeListStatus::from_u8(self.status)
    }
}

impl Encode for NodeListReport {
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
        buffer.put_u8(self.status);
        buffer.put_u8(self.controller_id);
        buffer.put_slice(&self.nodes.to_bitmap());
    }
}

impl Frame for NodeListReport {
    const COMMAND_CLASS: u8 = NETWORK_MANAGEMENT_PROXY;
    const COMMAND: u8 = 0x02;
    const MIN_LENGTH: usize = 5 + NODE_BITMAP_LENGTH;

    fn decode_payload(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            sequence_number: reader.get_u8()?,
            status: reader.get_u8()?,
            controller_id: reader.get_u8()?,
            nodes: NodeSet::from_bitmap(&reader.get_array::<NODE_BITMAP_LENGTH>()?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_node_list_get() {
        assert_eq!(NodeListGet::new(1).encode(), [0x52, 0x01, 0x01]);
    }

    #[test]
    fn test_node_list_report_bitmap() {
        let command = NodeListReport {
            sequence_number: 1,
            status: 0,
            controller_id: 1,
            nodes: NodeSet::try_from([1, 8, 9, 232].as_slice()).unwrap(),
        };
        let bytes = command.encode();
        assert_eq!(bytes.len(), 34);
        assert_eq!(command.wire_length(), 34);
        assert_eq!(&bytes[..5], &[0x52, 0x02, 0x01, 0x00, 0x01]);
        assert_eq!(bytes[5], 0b1000_0001);
        assert_eq!(bytes[6], 0b0000_0001);
        assert_eq!(bytes[33], 0b1000_0000);
        assert!(bytes[7..33].iter().all(|byte| *byte == 0));

        let (decoded, consumed) = NodeListReport::decode(&bytes, 0).unwrap();
        assert_eq!(consumed, 34);
        assert_eq!(decoded.nodes.iter().copied().collect::<Vec<_>>(), vec![1, 8, 9, 232]);
        assert_eq!(decoded.list_status(), Some(NodeListStatus::Latest));
        assert_eq!(decoded, command);
    }

    #[test]
    fn test_node_list_report_truncated_bitmap() {
        let mut bytes = vec![0x52, 0x02, 0x01, 0x00, 0x01];
        bytes.extend_from_slice(&[0; 28]);
        assert_eq!(
            NodeListReport::decode(&bytes, 0),
            Err(Error::TruncatedFrame {
                offset: 2,
                needed: 32,
                available: 31,
            })
        );
    }
}
