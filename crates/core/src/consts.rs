//! Constants of the identifier space.

/// Width in bits of the identifier space when nothing else is configured.
/// The ring then holds 2^8 = 256 positions.
pub const DEFAULT_ID_BITS: u8 = 8;

/// Widest identifier space that still fits a `u64` position.
pub const MAX_ID_BITS: u8 = 63;
