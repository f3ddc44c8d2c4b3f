//! A node of the ring: its Did, its key store and its finger table.
use crate::dht::Did;
use crate::dht::FingerTable;
use crate::dht::IdSpace;
use crate::storage::KvStorageInterface;
use crate::storage::MemStorage;

/// A Chord node.
///
/// A node is created on its own and becomes visible on the ring once it is
/// handed to [Chord::join](super::Chord::join). It owns its store and its
/// finger table for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<V> {
    /// The did of current node.
    pub did: Did,
    /// Keys this node is responsible for, with their values.
    pub storage: MemStorage<Did, V>,
    /// [FingerTable] help node to find successor quickly.
    pub finger: FingerTable,
}

impl<V> Node<V>
where V: Clone
{
    /// Create a detached node for the given space.
    pub fn new(did: Did, space: IdSpace) -> Self {
        Self {
            did,
            storage: MemStorage::new(),
            finger: FingerTable::new(did, space.bits() as usize),
        }
    }

    /// The next node on the ring, entry 0 of the finger table.
    pub fn successor(&self) -> Option<Did> {
        self.finger.successor()
    }

    /// The farthest finger lying strictly between this node and `key`,
    /// or this node itself when none does.
    pub fn closest_preceding_finger(&self, key: Did) -> Did {
        self.finger.closest_preceding_finger(key)
    }

    /// Key store entries in ascending key order.
    pub fn keys(&self) -> Vec<(Did, V)> {
        self.storage.get_all()
    }
}
