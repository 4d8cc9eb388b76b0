//! A Module with some utilities for working with NodeIDs

use super::NodeID;
use std::hash::{BuildHasherDefault, Hasher};

/// A specialized [`HashMap`](hashbrown::HashMap) for NodeIDs with a faster Hasher
pub type NodeIDMap<V> = hashbrown::HashMap<NodeID, V, BuildHasherDefault<NodeIDHasher>>;
/// A specialized [`HashSet`](hashbrown::HashSet) for NodeIDs with a faster Hasher
pub type NodeIDSet = hashbrown::HashSet<NodeID, BuildHasherDefault<NodeIDHasher>>;

/// A [`Hasher`] specialized on NodeIDs
///
/// NodeIDs are slab keys and therefore already well distributed, so the id itself is the hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NodeIDHasher(u64);

impl Hasher for NodeIDHasher {
    /// panics, since only NodeIDs are supposed to be used
    fn write(&mut self, _: &[u8]) {
        unreachable!("This Hasher only works with NodeIDs")
    }
    /// Writes a single NodeID into this hasher.
    fn write_usize(&mut self, id: NodeID) {
        self.0 = id as u64
    }
    fn finish(&self) -> u64 {
        self.0
    }
}
