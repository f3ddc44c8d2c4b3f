//! DHT types about `Chord` and `ChordStorage`.
#![warn(missing_docs)]
use serde::Deserialize;
use serde::Serialize;

use super::did::Did;
use super::node::Node;
use crate::error::Result;

/// Chord is a distributed hash table (DHT) algorithm that is designed to efficiently
/// distribute data across peer-to-peer network nodes. You may want to browse its
/// [wiki](https://en.wikipedia.org/wiki/Chord_(peer-to-peer)) before you read this.
///
/// Nodes and keys share one identifier space. Every node owns the arc of the ring
/// that ends at its own [Did], starting right after its predecessor. A lookup walks
/// the finger tables and reaches the owner of a key in O(log n) hops.
///
/// Every method names the node the operation starts from, or acts on, by its Did.
pub trait Chord<V> {
    /// Join `node` to the ring through `contact`.
    /// With no contact the node bootstraps the ring and nothing is migrated.
    /// Otherwise the keys the new node is now responsible for are moved from its
    /// successor and reported as a [Migration].
    fn join(&mut self, node: Node<V>, contact: Option<Did>) -> Result<Option<Migration>>;

    /// Remove the node `did` from the ring, handing every key it holds to its
    /// successor. Returns the detached node.
    fn leave(&mut self, did: Did) -> Result<Node<V>>;

    /// Starting at node `start`, find the node responsible for `key` and
    /// record every node visited on the way.
    fn find_key(&self, start: Did, key: Did) -> Result<Route>;
}

/// ChordStorage is a key value protocol based on Chord algorithm.
///
/// Every operation first routes to the node responsible for the key, then acts on
/// that node's store only.
pub trait ChordStorage<V>: Chord<V> {
    /// Store `value` under `key` on the responsible node, overwriting any previous value.
    fn insert_key(&mut self, start: Did, key: Did, value: V) -> Result<Route>;

    /// Remove `key` from the responsible node. Returns the removed value, if any.
    fn remove_key(&mut self, start: Did, key: Did) -> Result<Option<V>>;

    /// Read `key` from the responsible node. A key missing there is reported
    /// as `None`, never as another node's value.
    fn lookup_value(&self, start: Did, key: Did) -> Result<Lookup<'_, V>>;
}

/// Result of a lookup walk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// The node found responsible for the key.
    pub owner: Did,
    /// Dids of the visited nodes, starting node first, owner last.
    pub path: Vec<Did>,
}

/// A routed read of a key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lookup<'a, V> {
    /// How the owner was reached.
    pub route: Route,
    /// The value stored at the owner.
    pub value: Option<&'a V>,
}

/// Keys handed over between two nodes on a join.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Migration {
    /// Node the keys were taken from.
    pub from: Did,
    /// Node the keys now live on.
    pub to: Did,
    /// Moved keys in ascending order.
    pub keys: Vec<Did>,
}

impl Migration {
    /// Returns `true` if no key was moved.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
