//! Chord Ring: the Chord distributed hash table, in process.
//! --------------
//! - [Did](crate::dht::Did) places nodes and keys on a ring of 2^M positions ([IdSpace](crate::dht::IdSpace)).
//! - [Registry](crate::dht::Registry) records which nodes are joined, in Did order.
//! - [FingerTable](crate::dht::FingerTable) holds, for entry i, the successor of did + 2^i.
//! - [Ring](crate::dht::Ring) owns every joined [Node](crate::dht::Node) and implements
//!   [Chord](crate::dht::Chord) and [ChordStorage](crate::dht::ChordStorage).
//!
//! # Ownership of keys
//!
//! A node owns the keys in (predecessor, node]. When a node joins, it takes over
//! from its successor the keys that now fall in its arc. When a node leaves, all of
//! its keys go to its successor. Every finger table is rebuilt after each join or
//! leave, so routing always sees the current membership.
//!
//! # Lookup
//!
//! A lookup starting at node S for key K records its path:
//!
//! ```txt
//! path: [S, F1, F2, ..., owner]
//! ```
//!
//! At each node it either finds K between the node and its successor, or jumps to
//! the farthest finger preceding K.
//!
//! ```
//! use chord_ring_core::dht::Chord;
//! use chord_ring_core::dht::ChordStorage;
//! use chord_ring_core::dht::Did;
//! use chord_ring_core::dht::IdSpace;
//! use chord_ring_core::dht::Ring;
//!
//! let mut ring = Ring::new(IdSpace::default());
//! let n0 = ring.new_node(Did::from(0u64));
//! ring.join(n0, None).unwrap();
//! let n30 = ring.new_node(Did::from(30u64));
//! ring.join(n30, Some(Did::from(0u64))).unwrap();
//!
//! ring.insert_key(Did::from(0u64), Did::from(3u64), "three").unwrap();
//! let lookup = ring.lookup_value(Did::from(30u64), Did::from(3u64)).unwrap();
//! assert_eq!(lookup.value, Some(&"three"));
//! assert_eq!(lookup.route.owner, Did::from(30u64));
//! ```

pub mod consts;
pub mod dht;
pub mod error;
pub mod inspect;
pub mod storage;
#[cfg(test)]
mod tests;
