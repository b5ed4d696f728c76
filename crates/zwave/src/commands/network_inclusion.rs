use super::TransmitOptions;
use crate::bits::{HIGH_3_BITS, LOW_5_BITS};
use crate::frame::{Encode, Frame, Reader};
use crate::{CommandClass, Error, Result};
use bitflags::bitflags;
use bytes::BufMut;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

const NETWORK_MANAGEMENT_INCLUSION: u8 = CommandClass::NetworkManagementInclusion as u8;

/// Node info length, protocol capability, protocol security and the three
/// device class bytes.
pub const NODE_INFO_FIXED_LENGTH: usize = 6;
pub const MAX_DSK_LENGTH: usize = LOW_5_BITS as usize;
const TRUNCATED_STATUS_LENGTH: usize = 7;
/// Granted keys, KEX failure and the DSK length byte.
const SECURITY_TRAILER_LENGTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum AddNodeMode {
    Any = 0x01,
    Stop = 0x05,
    AnyS2 = 0x07,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum AddNodeStatus {
    Done = 0x06,
    Failed = 0x07,
    SecurityFailed = 0x09,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum RemoveNodeMode {
    Any = 0x01,
    Stop = 0x05,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum RemoveNodeStatus {
    Done = 0x06,
    Failed = 0x07,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum FailedNodeRemoveStatus {
    NotFound = 0x00,
    Done = 0x01,
    RemoveFailed = 0x02,
}

/// Why an S2 key exchange did not complete during inclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum KexFailure {
    None = 0x00,
    Key = 0x01,
    Scheme = 0x02,
    Curves = 0x03,
    Decrypt = 0x05,
    Cancel = 0x06,
    Auth = 0x07,
    KeyGet = 0x08,
    KeyVerify = 0x09,
    KeyReport = 0x0A,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GrantedKeys: u8 {
        const S2_UNAUTHENTICATED = 0x01;
        const S2_AUTHENTICATED   = 0x02;
        const S2_ACCESS_CONTROL  = 0x04;
        const S0                 = 0x80;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeAdd {
    pub sequence_number: u8,
    pub mode: u8,
    pub tx_options: TransmitOptions,
}

impl NodeAdd {
    pub fn start(sequence_number: u8) -> Self {
        Self {
            sequence_number,
            mode: AddNodeMode::Any as u8,
            tx_options: TransmitOptions::default(),
        }
    }

    pub fn stop(sequence_number: u8) -> Self {
        Self {
            sequence_number,
            mode: AddNodeMode::Stop as u8,
            tx_options: TransmitOptions::default(),
        }
    }

    pub fn add_mode(&self) -> Option<AddNodeMode> {
        AddNodeMode::from_u8(self.mode)
    }
}

impl Encode for NodeAdd {
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
        buffer.put_u8(self.tx_options.bits());
    }
}

impl Frame for NodeAdd {
    const COMMAND_CLASS: u8 = NETWORK_MANAGEMENT_INCLUSION;
    const COMMAND: u8 = 0x01;
    const MIN_LENGTH: usize = 6;

    fn decode_payload(reader: &mut Reader<'_>) -> Result<Self> {
        let sequence_number = reader.get_u8()?;
        reader.skip_reserved()?;
        Ok(Self {
            sequence_number,
            mode: reader.get_u8()?,
            tx_options: TransmitOptions::from_bits_retain(reader.get_u8()?),
        })
    }
}

/// Node information block of a successful inclusion, together with the
/// outcome of the S2 bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeAddInfo {
    pub protocol_capability: u8,
    pub protocol_security: u8,
    pub basic_device_class: u8,
    pub generic_device_class: u8,
    pub specific_device_class: u8,
    pub command_classes: Vec<u8>,
    pub granted_keys: GrantedKeys,
    pub kex_fail_type: u8,
    /// Upper three bits of the DSK length byte, passed through untouched.
    pub dsk_flags: u8,
    pub dsk: Vec<u8>,
}

impl NodeAddInfo {
    fn node_info_length(&self) -> usize {
        NODE_INFO_FIXED_LENGTH + self.command_classes.len()
    }

    fn wire_length(&self) -> usize {
        self.node_info_length() - 1 + SECURITY_TRAILER_LENGTH + self.dsk.len()
    }

    pub fn kex_failure(&self) -> Option<KexFailure> {
        KexFailure::from_u8(self.kex_fail_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeAddShape {
    /// Only the node info length byte is present, holding 0 or 1.
    Truncated { node_info_length: u8 },
    Full(NodeAddInfo),
}

/// Progress report of an inclusion (node add) request.
///
/// Two shapes exist on the wire. When the node info length byte at offset 6
/// is 0 or 1 the frame stops right there (7 bytes); otherwise the node
/// information block and the S2 trailer follow. The shape is always chosen by
/// the node info length, so `wire_length()` matches what was read.
///
/// Devices are expected to send the full shape exactly when the status is
/// [`AddNodeStatus::Done`]. [`Self::status_implied_wire_length`] computes the
/// length that rule predicts, and [`Self::has_length_divergence`] reports frames
/// where the two disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeAddStatus {
    sequence_number: u8,
    status: u8,
    new_node_id: u8,
    shape: NodeAddShape,
}

impl NodeAddStatus {
    /// Status without node information, as sent for failed inclusions.
    pub fn truncated(
        sequence_number: u8,
        status: u8,
        new_node_id: u8,
    ) -> Self {
        Self {
            sequence_number,
            status,
            new_node_id,
            shape: NodeAddShape::Truncated {
                node_info_length: 0,
            },
        }
    }

    pub fn with_node_info(
        sequence_number: u8,
        status: u8,
        new_node_id: u8,
        mut node_info: NodeAddInfo,
    ) -> Result<Self> {
        if node_info.node_info_length() > u8::MAX as usize {
            return Err(Error::invalid(
                "node_info_length",
                node_info.node_info_length(),
            ));
        }
        if node_info.dsk.len() > MAX_DSK_LENGTH {
            return Err(Error::invalid("dsk_length", node_info.dsk.len()));
        }
        node_info.dsk_flags &= HIGH_3_BITS;
        Ok(Self {
            sequence_number,
            status,
            new_node_id,
            shape: NodeAddShape::Full(node_info),
        })
    }

    pub fn sequence_number(&self) -> u8 {
        self.sequence_number
    }

    pub fn status(&self) -> u8 {
        self.status
    }

    pub fn add_status(&self) -> Option<AddNodeStatus> {
        AddNodeStatus::from_u8(self.status)
    }

    pub fn is_done(&self) -> bool {
        self.add_status() == Some(AddNodeStatus::Done)
    }

    pub fn new_node_id(&self) -> u8 {
        self.new_node_id
    }

    pub fn node_info_length(&self) -> u8 {
        match &self.shape {
            NodeAddShape::Truncated { node_info_length } => *node_info_length,
            NodeAddShape::Full(node_info) => node_info.node_info_length() as u8,
        }
    }

    pub fn node_info(&self) -> Option<&NodeAddInfo> {
        match &self.shape {
            NodeAddShape::Truncated { .. } => None,
            NodeAddShape::Full(node_info) => Some(node_info),
        }
    }

    pub fn basic_device_class(&self) -> u8 {
        self.node_info().map_or(0, |info| info.basic_device_class)
    }

    pub fn generic_device_class(&self) -> u8 {
        self.node_info().map_or(0, |info| info.generic_device_class)
    }

    pub fn specific_device_class(&self) -> u8 {
        self.node_info().map_or(0, |info| info.specific_device_class)
    }

    pub fn command_classes(&self) -> &[u8] {
        self.node_info()
            .map(|info| info.command_classes.as_slice())
            .unwrap_or_default()
    }

    pub fn granted_keys(&self) -> GrantedKeys {
        self.node_info()
            .map_or(GrantedKeys::empty(), |info| info.granted_keys)
    }

    pub fn kex_fail_type(&self) -> u8 {
        self.node_info().map_or(0, |info| info.kex_fail_type)
    }

    pub fn dsk(&self) -> &[u8] {
        self.node_info()
            .map(|info| info.dsk.as_slice())
            .unwrap_or_default()
    }

    /// Length predicted from the status byte alone: full shape when the
    /// inclusion is done, truncated otherwise.
    pub fn status_implied_wire_length(&self) -> usize {
        if self.is_done() {
            TRUNCATED_STATUS_LENGTH
                + (NODE_INFO_FIXED_LENGTH - 1)
                + self.command_classes().len()
                + SECURITY_TRAILER_LENGTH
                + self.dsk().len()
        } else {
            TRUNCATED_STATUS_LENGTH
        }
    }

    pub fn has_length_divergence(&self) -> bool {
        self.status_implied_wire_length() != self.wire_length()
    }
}

impl Encode for NodeAddStatus {
    fn wire_length(&self) -> usize {
        match &self.shape {
            NodeAddShape::Truncated { .. } => TRUNCATED_STATUS_LENGTH,
            NodeAddShape::Full(node_info) => TRUNCATED_STATUS_LENGTH + node_info.wire_length(),
        }
    }

    fn encode_to<B: BufMut>(
        &self,
        buffer: &mut B,
    ) {
        buffer.put_u8(Self::COMMAND_CLASS);
        buffer.put_u8(Self::COMMAND);
        buffer.put_u8(self.sequence_number);
        buffer.put_u8(self.status);
        buffer.put_u8(0x00);
        buffer.put_u8(self.new_node_id);
        buffer.put_u8(self.node_info_length());
        if let NodeAddShape::Full(node_info) = &self.shape {
            buffer.put_u8(node_info.protocol_capability);
            buffer.put_u8(node_info.protocol_security);
            buffer.put_u8(node_info.basic_device_class);
            buffer.put_u8(node_info.generic_device_class);
            buffer.put_u8(node_info.specific_device_class);
            buffer.put_slice(&node_info.command_classes);
            buffer.put_u8(node_info.granted_keys.bits());
            buffer.put_u8(node_info.kex_fail_type);
            buffer.put_u8(
                (node_info.dsk_flags & HIGH_3_BITS) | (node_info.dsk.len() as u8 & LOW_5_BITS),
            );
            buffer.put_slice(&node_info.dsk);
        }
    }
}

impl Frame for NodeAddStatus {
    const COMMAND_CLASS: u8 = NETWORK_MANAGEMENT_INCLUSION;
    const COMMAND: u8 = 0x02;
    const MIN_LENGTH: usize = TRUNCATED_STATUS_LENGTH;

    fn decode_payload(reader: &mut Reader<'_>) -> Result<Self> {
        let sequence_number = reader.get_u8()?;
        let status = reader.get_u8()?;
        reader.skip_reserved()?;
        let new_node_id = reader.get_u8()?;
        let node_info_length = reader.get_u8()?;
        let shape = match node_info_length as usize {
            0 | 1 => NodeAddShape::Truncated { node_info_length },
            length if length < NODE_INFO_FIXED_LENGTH => {
                return Err(Error::invalid("node_info_length", length));
            }
            length => {
                let protocol_capability = reader.get_u8()?;
                let protocol_security = reader.get_u8()?;
                let basic_device_class = reader.get_u8()?;
                let generic_device_class = reader.get_u8()?;
                let specific_device_class = reader.get_u8()?;
                let command_classes = reader.get_bytes(length - NODE_INFO_FIXED_LENGTH)?;
                let granted_keys = GrantedKeys::from_bits_retain(reader.get_u8()?);
                let kex_fail_type = reader.get_u8()?;
                let dsk_length = reader.get_u8()?;
                let dsk = reader.get_bytes((dsk_length & LOW_5_BITS) as usize)?;
                NodeAddShape::Full(NodeAddInfo {
                    protocol_capability,
                    protocol_security,
                    basic_device_class,
                    generic_device_class,
                    specific_device_class,
                    command_classes,
                    granted_keys,
                    kex_fail_type,
                    dsk_flags: dsk_length & HIGH_3_BITS,
                    dsk,
                })
            }
        };
        let node_add_status = Self {
            sequence_number,
            status,
            new_node_id,
            shape,
        };
        if node_add_status.has_length_divergence() {
            tracing::warn!(
                status,
                node_info_length,
                read_length = node_add_status.wire_length(),
                status_implied_length = node_add_status.status_implied_wire_length(),
                "node add status shape disagrees with its status"
            );
        }
        Ok(node_add_status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRemove {
    pub sequence_number: u8,
    pub mode: u8,
}

impl NodeRemove {
    pub fn start(sequence_number: u8) -> Self {
        Self {
            sequence_number,
            mode: RemoveNodeMode::Any as u8,
        }
    }

    pub fn stop(sequence_number: u8) -> Self {
        Self {
            sequence_number,
            mode: RemoveNodeMode::Stop as u8,
        }
    }

    pub fn remove_mode(&self) -> Option<RemoveNodeMode> {
        RemoveNodeMode::from_u8(self.mode)
    }
}

impl Encode for NodeRemove {
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

impl Frame for NodeRemove {
    const COMMAND_CLASS: u8 = NETWORK_MANAGEMENT_INCLUSION;
    const COMMAND: u8 = 0x03;
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRemoveStatus {
    pub sequence_number: u8,
    pub status: u8,
    pub node_id: u8,
}

impl NodeRemoveStatus {
    pub fn remove_status(&self) -> Option<RemoveNodeStatus> {
        RemoveNodeStatus::from_u8(self.status)
    }

    pub fn is_done(&self) -> bool {
        self.remove_status() == Some(RemoveNodeStatus::Done)
    }
}

impl Encode for NodeRemoveStatus {
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
        buffer.put_u8(self.node_id);
    }
}

impl Frame for NodeRemoveStatus {
    const COMMAND_CLASS: u8 = NETWORK_MANAGEMENT_INCLUSION;
    const COMMAND: u8 = 0x04;
    const MIN_LENGTH: usize = 5;

    fn decode_payload(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            sequence_number: reader.get_u8()?,
            status: reader.get_u8()?,
            node_id: reader.get_u8()?,
        })
    }
}

/// Asks the controller to drop a node that no longer answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailedNodeRemove {
    pub sequence_number: u8,
    pub node_id: u8,
}

impl Encode for FailedNodeRemove {
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
        buffer.put_u8(self.node_id);
    }
}

impl Frame for FailedNodeRemove {
    const COMMAND_CLASS: u8 = NETWORK_MANAGEMENT_INCLUSION;
    const COMMAND: u8 = 0x07;
    const MIN_LENGTH: usize = 4;

    fn decode_payload(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            sequence_number: reader.get_u8()?,
            node_id: reader.get_u8()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailedNodeRemoveReport {
    pub sequence_number: u8,
    pub status: u8,
    pub node_id: u8,
}

impl FailedNodeRemoveReport {
    pub fn remove_status(&self) -> Option<FailedNodeRemoveStatus> {
        FailedNodeRemoveStatus::from_u8(self.status)
    }
}

impl Encode for FailedNodeRemoveReport {
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
        buffer.put_u8(self.node_id);
    }
}

impl Frame for FailedNodeRemoveReport {
    const COMMAND_CLASS: u8 = NETWORK_MANAGEMENT_INCLUSION;
    const COMMAND: u8 = 0x08;
    const MIN_LENGTH: usize = 5;

    fn decode_payload(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            sequence_number: reader.get_u8()?,
            status: reader.get_u8()?,
            node_id: reader.get_u8()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_info() -> NodeAddInfo {
        NodeAddInfo {
            protocol_capability: 0xD3,
            protocol_security: 0x9C,
            basic_device_class: 0x04,
            generic_device_class: 0x10,
            specific_device_class: 0x01,
            command_classes: vec![0x5E, 0x25, 0x86],
            granted_keys: GrantedKeys::S2_UNAUTHENTICATED | GrantedKeys::S2_AUTHENTICATED,
            kex_fail_type: 0x00,
            dsk_flags: 0x00,
            dsk: vec![0xAB, 0xCD, 0xEF, 0x01],
        }
    }

    #[test]
    fn test_node_add_start_stop() {
        assert_eq!(NodeAdd::start(1).encode(), [0x34, 0x01, 0x01, 0x00, 0x01, 0x25]);
        assert_eq!(NodeAdd::stop(2).encode(), [0x34, 0x01, 0x02, 0x00, 0x05, 0x25]);
        assert_eq!(NodeAdd::stop(2).add_mode(), Some(AddNodeMode::Stop));
    }

    #[test]
    fn test_decode_node_add() {
        let bytes = [0x34, 0x01, 0x09, 0x00, 0x07, 0x20];
        let (command, consumed) = NodeAdd::decode(&bytes, 0).unwrap();
        assert_eq!(command.sequence_number, 9);
        assert_eq!(command.add_mode(), Some(AddNodeMode::AnyS2));
        assert_eq!(command.tx_options, TransmitOptions::EXPLORE);
        assert_eq!(consumed, 6);
    }

    #[test]
    fn test_decode_node_add_status_truncated_despite_done() {
        let bytes = [0x34, 0x02, 0x01, 0x06, 0x00, 0x05, 0x00];
        let (command, consumed) = NodeAddStatus::decode(&bytes, 0).unwrap();
        assert_eq!(consumed, 7);
        assert_eq!(command.wire_length(), 7);
        assert!(command.is_done());
        assert_eq!(command.new_node_id(), 5);
        assert_eq!(command.node_info(), None);
        assert_eq!(command.basic_device_class(), 0);
        assert_eq!(command.generic_device_class(), 0);
        assert_eq!(command.specific_device_class(), 0);
        assert!(command.command_classes().is_empty());
        assert!(command.dsk().is_empty());
        assert_eq!(command.granted_keys(), GrantedKeys::empty());
        assert_eq!(command.status_implied_wire_length(), 15);
        assert!(command.has_length_divergence());
        assert_eq!(command.encode(), bytes);
    }

    #[test]
    fn test_decode_node_add_status_truncated_length_one() {
        let bytes = [0x34, 0x02, 0x02, 0x07, 0x00, 0x00, 0x01];
        let (command, consumed) = NodeAddStatus::decode(&bytes, 0).unwrap();
        assert_eq!(consumed, 7);
        assert_eq!(command.node_info_length(), 1);
        assert_eq!(command.add_status(), Some(AddNodeStatus::Failed));
        assert!(!command.has_length_divergence());
        assert_eq!(command.encode(), bytes);
    }

    #[test]
    fn test_decode_node_add_status_full() {
        let bytes = [
            0x34, 0x02, 0x03, 0x06, 0x00, 0x0C, // header, seq, status, reserved, node
            0x09, 0xD3, 0x9C, 0x04, 0x10, 0x01, // node info length, capability, security, classes
            0x5E, 0x25, 0x86, // command classes
            0x03, 0x00, 0xA4, // granted keys, kex fail, flags + dsk length
            0xAB, 0xCD, 0xEF, 0x01, // dsk
            0x20, 0x03, 0x00, // next frame
        ];
        let (command, consumed) = NodeAddStatus::decode(&bytes, 0).unwrap();
        assert_eq!(consumed, 22);
        assert_eq!(command.wire_length(), 22);
        assert_eq!(command.node_info_length(), 9);
        assert_eq!(command.generic_device_class(), 0x10);
        assert_eq!(command.command_classes(), &[0x5E, 0x25, 0x86]);
        assert_eq!(
            command.granted_keys(),
            GrantedKeys::S2_UNAUTHENTICATED | GrantedKeys::S2_AUTHENTICATED
        );
        assert_eq!(command.dsk(), &[0xAB, 0xCD, 0xEF, 0x01]);
        assert_eq!(command.node_info().map(|info| info.dsk_flags), Some(0xA0));
        assert_eq!(command.node_info().and_then(NodeAddInfo::kex_failure), Some(KexFailure::None));
        assert!(!command.has_length_divergence());
        assert_eq!(command.encode(), &bytes[..22]);
    }

    #[test]
    fn test_node_add_status_full_round_trip() {
        let command = NodeAddStatus::with_node_info(4, AddNodeStatus::Done as u8, 0x0C, node_info()).unwrap();
        assert_eq!(command.wire_length(), 15 + 3 + 4);
        let bytes = command.encode();
        assert_eq!(bytes.len(), command.wire_length());
        assert_eq!(bytes[6], 9);
        assert_eq!(bytes[17], 0x04);
        assert_eq!(NodeAddStatus::decode(&bytes, 0), Ok((command.clone(), 22)));
    }

    #[test]
    fn test_node_add_status_full_with_failed_status() {
        let command = NodeAddStatus::with_node_info(4, AddNodeStatus::SecurityFailed as u8, 0x0C, node_info()).unwrap();
        assert_eq!(command.status_implied_wire_length(), 7);
        assert!(command.has_length_divergence());
        let (decoded, consumed) = NodeAddStatus::decode(&command.encode(), 0).unwrap();
        assert_eq!(consumed, command.wire_length());
        assert_eq!(decoded, command);
    }

    #[test]
    fn test_decode_node_add_status_invalid_node_info_length() {
        let bytes = [0x34, 0x02, 0x01, 0x06, 0x00, 0x05, 0x04, 0x00, 0x00, 0x00];
        assert_eq!(
            NodeAddStatus::decode(&bytes, 0),
            Err(Error::InvalidField {
                field: "node_info_length",
                value: 4,
            })
        );
    }

    #[test]
    fn test_decode_node_add_status_short_dsk() {
        let bytes = [
            0x34, 0x02, 0x01, 0x06, 0x00, 0x05, 0x06, 0xD3, 0x9C, 0x04, 0x10, 0x01, 0x01, 0x00, 0x10,
            0xAA, 0xBB,
        ];
        assert_eq!(
            NodeAddStatus::decode(&bytes, 0),
            Err(Error::TruncatedFrame {
                offset: 15,
                needed: 16,
                available: 2,
            })
        );
    }

    #[test]
    fn test_decode_node_add_status_short_header() {
        let bytes = [0x34, 0x02, 0x01, 0x06, 0x00, 0x05];
        assert_eq!(
            NodeAddStatus::decode(&bytes, 0),
            Err(Error::TruncatedFrame {
                offset: 2,
                needed: 5,
                available: 4,
            })
        );
    }

    #[test]
    fn test_node_add_status_rejects_long_dsk() {
        let mut info = node_info();
        info.dsk = vec![0; 32];
        assert_eq!(
            NodeAddStatus::with_node_info(1, 6, 2, info),
            Err(Error::InvalidField {
                field: "dsk_length",
                value: 32,
            })
        );
    }

    #[test]
    fn test_node_remove() {
        assert_eq!(NodeRemove::start(3).encode(), [0x34, 0x03, 0x03, 0x00, 0x01]);
        let (command, consumed) = NodeRemove::decode(&[0x34, 0x03, 0x04, 0x00, 0x05], 0).unwrap();
        assert_eq!(command, NodeRemove::stop(4));
        assert_eq!(command.remove_mode(), Some(RemoveNodeMode::Stop));
        assert_eq!(consumed, 5);
    }

    #[test]
    fn test_node_remove_status() {
        let (command, consumed) = NodeRemoveStatus::decode(&[0x34, 0x04, 0x01, 0x06, 0x0C], 0).unwrap();
        assert!(command.is_done());
        assert_eq!(command.node_id, 0x0C);
        assert_eq!(consumed, 5);
    }

    #[test]
    fn test_failed_node_remove() {
        let command = FailedNodeRemove {
            sequence_number: 1,
            node_id: 7,
        };
        assert_eq!(command.encode(), [0x34, 0x07, 0x01, 0x07]);
        let (report, _) = FailedNodeRemoveReport::decode(&[0x34, 0x08, 0x01, 0x01, 0x07], 0).unwrap();
        assert_eq!(report.remove_status(), Some(FailedNodeRemoveStatus::Done));
    }
}
