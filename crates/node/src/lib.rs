//! Driver of the Chord ring.
//!
//! Loads a scenario from a YAML [config](crate::config::Config), replays its steps
//! against a [Ring](chord_ring_core::dht::Ring) and renders the
//! [reports](crate::report) of finger tables, key placement and lookup paths.
pub mod config;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod report;
pub mod scenario;
pub mod util;
