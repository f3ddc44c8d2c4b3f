//! Chord algorithm implement.
#![warn(missing_docs)]
use std::collections::BTreeMap;

use super::types::Chord;
use super::types::ChordStorage;
use super::types::Lookup;
use super::types::Migration;
use super::types::Route;
use crate::dht::Did;
use crate::dht::IdSpace;
use crate::dht::Node;
use crate::dht::Registry;
use crate::error::Error;
use crate::error::Result;
use crate::storage::KvStorageInterface;

/// Ring is the arena of every joined node.
/// All nodes form a clockwise ring in the order of Did.
///
/// Nodes reference each other only by Did: the [Registry] records who is
/// joined and each finger table stores Dids. Resolving a Did goes through
/// [Ring::node], so a departed node is reported as not registered instead
/// of being reached.
///
/// Ring implemented [Chord] algorithm.
/// Ring implemented [ChordStorage] protocol.
#[derive(Debug, Clone)]
pub struct Ring<V> {
    /// Identifier space shared by every node of this ring.
    space: IdSpace,
    /// Dids of the joined nodes.
    registry: Registry,
    /// Joined nodes, owned by the ring until they leave.
    nodes: BTreeMap<Did, Node<V>>,
}

impl<V> Default for Ring<V> {
    fn default() -> Self {
        Self {
            space: IdSpace::default(),
            registry: Registry::new(),
            nodes: BTreeMap::new(),
        }
    }
}

impl<V> Ring<V>
where V: Clone
{
    /// Create an empty ring over `space`.
    pub fn new(space: IdSpace) -> Self {
        Self {
            space,
            registry: Registry::new(),
            nodes: BTreeMap::new(),
        }
    }

    /// Create a detached node sized for this ring's identifier space.
    pub fn new_node(&self, did: Did) -> Node<V> {
        Node::new(did, self.space)
    }

    /// Identifier space of this ring.
    pub fn space(&self) -> IdSpace {
        self.space
    }

    /// Membership registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// is empty
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// number of joined nodes
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Resolve a joined node.
    pub fn node(&self, did: Did) -> Result<&Node<V>> {
        self.nodes.get(&did).ok_or(Error::NodeNotRegistered(did))
    }

    pub(super) fn node_mut(&mut self, did: Did) -> Result<&mut Node<V>> {
        self.nodes.get_mut(&did).ok_or(Error::NodeNotRegistered(did))
    }

    pub(super) fn insert_node(&mut self, node: Node<V>) {
        self.registry.add(node.did);
        self.nodes.insert(node.did, node);
    }

    pub(super) fn remove_node(&mut self, did: Did) -> Result<Node<V>> {
        self.registry.remove(did);
        self.nodes.remove(&did).ok_or(Error::NodeNotRegistered(did))
    }

    /// Joined nodes in ascending Did order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<V>> {
        self.nodes.values()
    }

    /// Rebuild the finger table of every joined node from the registry.
    pub fn update_all_finger_tables(&mut self) -> Result<()> {
        let space = self.space;
        let registry = &self.registry;
        for node in self.nodes.values_mut() {
            node.finger.update(space, registry)?;
        }
        Ok(())
    }
}

impl<V> Chord<V> for Ring<V>
where V: Clone
{
    fn join(&mut self, node: Node<V>, contact: Option<Did>) -> Result<Option<Migration>> {
        self.join_node(node, contact)
    }

    fn leave(&mut self, did: Did) -> Result<Node<V>> {
        self.leave_node(did)
    }

    /// Walk from `start` towards `key` through finger tables.
    ///
    /// Each round either finds `key` between the current node and its
    /// successor, or hops to the closest preceding finger. When no finger is
    /// closer, the successor is taken as the answer without walking further.
    fn find_key(&self, start: Did, key: Did) -> Result<Route> {
        let key = self.space.check(key)?;
        let mut current = self.node(start)?;
        let mut path = vec![current.did];

        // Every hop lands strictly closer to the key, so no node is visited twice.
        let max_hops = self.registry.len() + 1;
        for _ in 0..max_hops {
            let succ = current
                .successor()
                .ok_or(Error::FingerTableNotReady(current.did))?;

            if key.in_interval(current.did, succ, true) {
                path.push(succ);
                tracing::debug!("find_key: key: {}, owner: {}, path: {:?}", key, succ, path);
                return Ok(Route { owner: succ, path });
            }

            let next = current.closest_preceding_finger(key);
            if next == current.did {
                path.push(succ);
                tracing::debug!(
                    "find_key: key: {}, no closer finger on {}, settle on successor {}",
                    key,
                    current.did,
                    succ
                );
                return Ok(Route { owner: succ, path });
            }

            current = self.node(next)?;
            path.push(next);
        }

        Err(Error::RoutingExceededHops(key, max_hops))
    }
}

impl<V> ChordStorage<V> for Ring<V>
where V: Clone
{
    fn insert_key(&mut self, start: Did, key: Did, value: V) -> Result<Route> {
        let route = self.find_key(start, key)?;
        self.node_mut(route.owner)?.storage.put(key, value);
        tracing::debug!("insert key {} on node {}", key, route.owner);
        Ok(route)
    }

    fn remove_key(&mut self, start: Did, key: Did) -> Result<Option<V>> {
        let route = self.find_key(start, key)?;
        let removed = self.node_mut(route.owner)?.storage.remove(&key);
        tracing::debug!(
            "remove key {} on node {}, found: {}",
            key,
            route.owner,
            removed.is_some()
        );
        Ok(removed)
    }

    fn lookup_value(&self, start: Did, key: Did) -> Result<Lookup<'_, V>> {
        let route = self.find_key(start, key)?;
        let value = self.node(route.owner)?.storage.get(&key);
        Ok(Lookup { route, value })
    }
}
