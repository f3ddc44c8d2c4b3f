//! A prelude is provided which imports all the important data types and traits of the ring.
pub use chord_ring_core;

pub use self::chord_ring_core::dht::Chord;
pub use self::chord_ring_core::dht::ChordStorage;
pub use self::chord_ring_core::dht::Did;
pub use self::chord_ring_core::dht::IdSpace;
pub use self::chord_ring_core::dht::Migration;
pub use self::chord_ring_core::dht::Ring;
pub use self::chord_ring_core::dht::Route;
pub use self::chord_ring_core::inspect::NodeInspect;
pub use self::chord_ring_core::inspect::RingInspect;
