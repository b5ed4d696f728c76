use crate::bits::count_byte;
use crate::frame::{Encode, Frame, Framing, Reader};
use crate::node_set::CONTROLLER_NODE_ID;
use crate::{CommandClass, Result};
use bytes::BufMut;

const ASSOCIATION: u8 = CommandClass::Association as u8;

/// Adds nodes to an association group. The node list runs to the end of the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationSet {
    pub grouping_identifier: u8,
    pub node_ids: Vec<u8>,
}

impl AssociationSet {
    /// Points a group of the target node back at the controller, so that it
    /// reports unsolicited state changes to the hub.
    pub fn to_controller(grouping_identifier: u8) -> Self {
        Self {
            grouping_identifier,
            node_ids: vec![CONTROLLER_NODE_ID],
        }
    }
}

impl Encode for AssociationSet {
    fn wire_length(&self) -> usize {
        3 + self.node_ids.len()
    }

    fn encode_to<B: BufMut>(
        &self,
        buffer: &mut B,
    ) {
        buffer.put_u8(Self::COMMAND_CLASS);
        buffer.put_u8(Self::COMMAND);
        buffer.put_u8(self.grouping_identifier);
        buffer.put_slice(&self.node_ids);
    }
}

impl Frame for AssociationSet {
    const COMMAND_CLASS: u8 = ASSOCIATION;
    const COMMAND: u8 = 0x01;
    const MIN_LENGTH: usize = 3;
    const FRAMING: Framing = Framing::ConsumesRemainder;

    fn decode_payload(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            grouping_identifier: reader.get_u8()?,
            node_ids: reader.get_remaining(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssociationGet {
    pub grouping_identifier: u8,
}

impl Encode for AssociationGet {
    fn wire_length(&self) -> usize {
        Self::MIN_LENGTH
    }

    fn encode_to<B: BufMut>(
        &self,
        buffer: &mut B,
    ) {
        buffer.put_u8(Self::COMMAND_CLASS);
        buffer.put_u8(Self::COMMAND);
        buffer.put_u8(self.grouping_identifier);
    }
}

impl Frame for AssociationGet {
    const COMMAND_CLASS: u8 = ASSOCIATION;
    const COMMAND: u8 = 0x02;
    const MIN_LENGTH: usize = 3;

    fn decode_payload(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            grouping_identifier: reader.get_u8()?,
        })
    }
}

/// Members of an association group. The `reports_to_follow` byte carries the
/// number of node ids in this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationReport {
    grouping_identifier: u8,
    max_nodes_supported: u8,
    node_ids: Vec<u8>,
}

impl AssociationReport {
    pub fn new(
        grouping_identifier: u8,
        max_nodes_supported: u8,
        node_ids: Vec<u8>,
    ) -> Result<Self> {
        count_byte("reports_to_follow", node_ids.len())?;
        Ok(Self {
            grouping_identifier,
            max_nodes_supported,
            node_ids,
        })
    }

    pub fn grouping_identifier(&self) -> u8 {
        self.grouping_identifier
    }

    pub fn max_nodes_supported(&self) -> u8 {
        self.max_nodes_supported
    }

    pub fn reports_to_follow(&self) -> u8 {
        self.node_ids.len() as u8
    }

    pub fn node_ids(&self) -> &[u8] {
        &self.node_ids
    }
}

impl Encode for AssociationReport {
    fn wire_length(&self) -> usize {
        5 + self.node_ids.len()
    }

    fn encode_to<B: BufMut>(
        &self,
        buffer: &mut B,
    ) {
        buffer.put_u8(Self::COMMAND_CLASS);
        buffer.put_u8(Self::COMMAND);
        buffer.put_u8(self.grouping_identifier);
        buffer.put_u8(self.max_nodes_supported);
        buffer.put_u8(self.reports_to_follow());
        buffer.put_slice(&self.node_ids);
    }
}

impl Frame for AssociationReport {
    const COMMAND_CLASS: u8 = ASSOCIATION;
    const COMMAND: u8 = 0x03;
    const MIN_LENGTH: usize = 5;

    fn decode_payload(reader: &mut Reader<'_>) -> Result<Self> {
        let grouping_identifier = reader.get_u8()?;
        let max_nodes_supported = reader.get_u8()?;
        let reports_to_follow = reader.get_u8()?;
        let node_ids = reader.get_bytes(reports_to_follow as usize)?;
        Ok(Self {
            grouping_identifier,
            max_nodes_supported,
            node_ids,
        })
    }
}

/// Removes nodes from an association group. The node list runs to the end of the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationRemove {
    pub grouping_identifier: u8,
    pub node_ids: Vec<u8>,
}

impl Encode for AssociationRemove {
    fn wire_length(&self) -> usize {
        3 + self.node_ids.len()
    }

    fn encode_to<B: BufMut>(
        &self,
        buffer: &mut B,
    ) {
        buffer.put_u8(Self::COMMAND_CLASS);
        buffer.put_u8(Self::COMMAND);
        buffer.put_u8(self.grouping_identifier);
        buffer.put_slice(&self.node_ids);
    }
}

impl Frame for AssociationRemove {
    const COMMAND_CLASS: u8 = ASSOCIATION;
    const COMMAND: u8 = 0x04;
    const MIN_LENGTH: usize = 3;
    const FRAMING: Framing = Framing::ConsumesRemainder;

    fn decode_payload(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            grouping_identifier: reader.get_u8()?,
            node_ids: reader.get_remaining(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssociationGroupingsReport {
    pub supported_groupings: u8,
}

impl AssociationGroupingsReport {
    /// Group ids start at 1 and are contiguous.
    pub fn groupings(&self) -> impl Iterator<Item = u8> {
        1..=self.supported_groupings
    }
}

impl Encode for AssociationGroupingsReport {
    fn wire_length(&self) -> usize {
        Self::MIN_LENGTH
    }

    fn encode_to<B: BufMut>(
        &self,
        buffer: &mut B,
    ) {
        buffer.put_u8(Self::COMMAND_CLASS);
        buffer.put_u8(Self::COMMAND);
        buffer.put_u8(self.supported_groupings);
    }
}

impl Frame for AssociationGroupingsReport {
    const COMMAND_CLASS: u8 = ASSOCIATION;
    const COMMAND: u8 = 0x05;
    const MIN_LENGTH: usize = 3;

    fn decode_payload(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            supported_groupings: reader.get_u8()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_encode_association_get() {
        let command = AssociationGet {
            grouping_identifier: 5,
        };
        assert_eq!(command.encode(), [0x85, 0x02, 0x05]);
        assert_eq!(command.wire_length(), 3);
    }

    #[test]
    fn test_decode_association_get_truncated() {
        assert_eq!(
            AssociationGet::decode(&[0x85, 0x02], 0),
            Err(Error::TruncatedFrame {
                offset: 2,
                needed: 1,
                available: 0,
            })
        );
    }

    #[test]
    fn test_association_set_to_controller() {
        let command = AssociationSet::to_controller(3);
        assert_eq!(command.encode(), [0x85, 0x01, 0x03, 0x01]);
        assert_eq!(command.wire_length(), 4);
    }

    #[test]
    fn test_decode_association_set_consumes_message() {
        let bytes = [0x85, 0x01, 0x02, 0x04, 0x07, 0x0B];
        let (command, consumed) = AssociationSet::decode(&bytes, 0).unwrap();
        assert_eq!(
            command,
            AssociationSet {
                grouping_identifier: 2,
                node_ids: vec![0x04, 0x07, 0x0B],
            }
        );
        assert_eq!(consumed, 6);
    }

    #[test]
    fn test_decode_association_remove() {
        let bytes = [0x85, 0x04, 0x01, 0x09];
        let (command, consumed) = AssociationRemove::decode(&bytes, 0).unwrap();
        assert_eq!(command.grouping_identifier, 1);
        assert_eq!(command.node_ids, vec![0x09]);
        assert_eq!(consumed, 4);
        assert_eq!(command.encode(), bytes);
    }

    #[test]
    fn test_association_report_counts_node_ids() {
        let command = AssociationReport::new(1, 5, vec![0x01, 0x0A]).unwrap();
        assert_eq!(command.wire_length(), 7);
        assert_eq!(command.encode(), [0x85, 0x03, 0x01, 0x05, 0x02, 0x01, 0x0A]);
    }

    #[test]
    fn test_decode_association_report_ignores_trailing_bytes() {
        let bytes = [0x85, 0x03, 0x01, 0x05, 0x01, 0x0A, 0x20, 0x03, 0xFF];
        let (command, consumed) = AssociationReport::decode(&bytes, 0).unwrap();
        assert_eq!(command.node_ids(), &[0x0A]);
        assert_eq!(command.reports_to_follow(), 1);
        assert_eq!(consumed, 6);
    }

    #[test]
    fn test_decode_association_report_short_node_list() {
        let bytes = [0x85, 0x03, 0x01, 0x05, 0x03, 0x0A];
        assert_eq!(
            AssociationReport::decode(&bytes, 0),
            Err(Error::TruncatedFrame {
                offset: 5,
                needed: 3,
                available: 1,
            })
        );
    }

    #[test]
    fn test_association_report_too_many_nodes() {
        assert_eq!(
            AssociationReport::new(1, 0, vec![1; 256]),
            Err(Error::InvalidField {
                field: "reports_to_follow",
                value: 256,
            })
        );
    }

    #[test]
    fn test_groupings_report() {
        let (command, consumed) = AssociationGroupingsReport::decode(&[0x85, 0x05, 0x03], 0).unwrap();
        assert_eq!(consumed, 3);
        assert_eq!(command.groupings().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_wrong_command() {
        assert_eq!(
            AssociationGet::decode(&[0x85, 0x03, 0x01], 0),
            Err(Error::UnexpectedCommand {
                command_class: 0x85,
                command: 0x03,
            })
        );
    }
}
