#![warn(missing_docs)]
//! Implementation of the Chord DHT
//! ref: <https://pdos.csail.mit.edu/papers/ton:chord/paper-ton.pdf>
//! With high probability, the number of nodes that must be contacted to find a successor in an N-node network is O(log N).

mod chord;
pub mod did;
/// Finger table of a node
pub mod finger;
mod membership;
pub mod node;
pub mod registry;
pub mod types;

pub use chord::Ring;
pub use did::Did;
pub use did::IdSpace;
pub use finger::FingerTable;
pub use node::Node;
pub use registry::Registry;
pub use types::Chord;
pub use types::ChordStorage;
pub use types::Lookup;
pub use types::Migration;
pub use types::Route;
