use crate::bits::{bit_is_set, set_bit};
use crate::{Error, Result};
use derive_more::{Deref, Into};
use std::collections::BTreeSet;

pub const MIN_NODE_ID: u8 = 1;
pub const MAX_NODE_ID: u8 = 232;
pub const NODE_BITMAP_LENGTH: usize = 29;
/// The hub's own controller always holds node id 1.
pub const CONTROLLER_NODE_ID: u8 = 1;

/// Members of a mesh network, node ids 1 through 232.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deref, Into)]
pub struct NodeSet(BTreeSet<u8>);

impl NodeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the node was newly added.
    pub fn insert(
        &mut self,
        node_id: u8,
    ) -> Result<bool> {
        if !(MIN_NODE_ID..=MAX_NODE_ID).contains(&node_id) {
            return Err(Error::invalid("node_id", node_id as usize));
        }
        Ok(self.0.insert(node_id))
    }

    pub fn remove(
        &mut self,
        node_id: u8,
    ) -> bool {
        self.0.remove(&node_id)
    }

    pub fn from_bitmap(bitmap: &[u8; NODE_BITMAP_LENGTH]) -> Self {
        let mut nodes = BTreeSet::new();
        for (index, byte) in bitmap.iter().enumerate() {
            for bit in 0..8 {
                if bit_is_set(*byte, bit) {
                    nodes.insert((index * 8) as u8 + bit + 1);
                }
            }
        }
        Self(nodes)
    }

    pub fn to_bitmap(&self) -> [u8; NODE_BITMAP_LENGTH] {
        let mut bitmap = [0; NODE_BITMAP_LENGTH];
        for node_id in &self.0 {
            let index = (node_id - 1) as usize;
            bitmap[index / 8] = set_bit(bitmap[index / 8], (index % 8) as u8);
        }
        bitmap
    }
}

impl TryFrom<&[u8]> for NodeSet {
    type Error = Error;

    fn try_from(node_ids: &[u8]) -> Result<Self> {
        let mut nodes = Self::new();
        for node_id in node_ids {
            nodes.insert(*node_id)?;
        }
        Ok(nodes)
    }
}
