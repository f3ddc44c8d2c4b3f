//! Error of chord_ring_core

use crate::dht::Did;

/// A wrap `Result` contains custom errors.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors collections in chord-ring-core.
///
/// A key that cannot be found is not an error, it is reported as `None`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("Registry is empty, no node can answer a successor query")]
    EmptyRegistry,

    #[error("Node {0} is not registered on the ring")]
    NodeNotRegistered(Did),

    #[error("Node {0} has already joined the ring")]
    DidAlreadyJoined(Did),

    #[error("Identifier {0} is out of the identifier space of {1} bits")]
    DidOutOfSpace(u64, u8),

    #[error("Identifier space width must be within 1..=63 bits, got {0}")]
    InvalidIdBits(u8),

    #[error("Finger table of node {0} has not been built")]
    FingerTableNotReady(Did),

    #[error("Lookup for key {0} did not settle within {1} hops")]
    RoutingExceededHops(Did, usize),
}
