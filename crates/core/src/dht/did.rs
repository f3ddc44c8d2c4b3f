//! Identifiers on the ring and the arithmetic of the identifier space.
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::consts::DEFAULT_ID_BITS;
use crate::consts::MAX_ID_BITS;
use crate::error::Error;
use crate::error::Result;

/// Did is a position on the finite ring R(P) where P = 2^M.
/// Both nodes and keys are placed on the ring with a Did.
#[derive(Copy, Clone, Eq, Ord, PartialEq, PartialOrd, Debug, Serialize, Deserialize, Hash)]
#[serde(transparent)]
pub struct Did(u64);

impl std::fmt::Display for Did {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Did {
    fn from(id: u64) -> Did {
        Self(id)
    }
}

impl From<Did> for u64 {
    fn from(did: Did) -> u64 {
        did.0
    }
}

impl FromStr for Did {
    type Err = std::num::ParseIntError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl Did {
    /// Raw position on the ring.
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Test x <- (a, b), or x <- (a, b] when `inclusive` is set.
    ///
    /// The interval is read clockwise, so `a > b` wraps past zero.
    /// When `a == b` the interval is the whole circle: the only node of a
    /// ring owns every key.
    pub fn in_interval(&self, a: Self, b: Self, inclusive: bool) -> bool {
        let x = *self;
        if a < b {
            if inclusive {
                a < x && x <= b
            } else {
                a < x && x < b
            }
        } else if a > b {
            if inclusive {
                x > a || x <= b
            } else {
                x > a || x < b
            }
        } else {
            true
        }
    }
}

/// Identifier space of 2^bits positions shared by every node of a ring.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSpace {
    bits: u8,
}

impl Default for IdSpace {
    fn default() -> Self {
        Self {
            bits: DEFAULT_ID_BITS,
        }
    }
}

impl IdSpace {
    /// builder
    pub fn new(bits: u8) -> Result<Self> {
        if bits == 0 || bits > MAX_ID_BITS {
            return Err(Error::InvalidIdBits(bits));
        }
        Ok(Self { bits })
    }

    /// Width M of the space, which is also the size of every finger table.
    pub fn bits(&self) -> u8 {
        self.bits
    }

    /// Number of positions on the ring, 2^M.
    pub fn size(&self) -> u64 {
        1u64 << self.bits
    }

    /// Reduce a raw value modulo 2^M.
    pub fn wrap(&self, raw: u64) -> Did {
        Did(raw & (self.size() - 1))
    }

    /// Check that a Did lies in [0, 2^M).
    pub fn check(&self, did: Did) -> Result<Did> {
        if did.0 >= self.size() {
            return Err(Error::DidOutOfSpace(did.0, self.bits));
        }
        Ok(did)
    }

    /// Start of the i-th finger of `did`: (did + 2^i) mod 2^M.
    pub fn finger_start(&self, did: Did, index: usize) -> Did {
        self.wrap(did.0 + (1u64 << index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walk the ring clockwise from `a` and collect every position met
    /// before reaching `b` (and `b` itself when inclusive).
    fn walk(space: IdSpace, a: u64, b: u64, inclusive: bool) -> Vec<u64> {
        if a == b {
            return (0..space.size()).collect();
        }
        let mut seen = vec![];
        let mut x = (a + 1) % space.size();
        while x != b {
            seen.push(x);
            x = (x + 1) % space.size();
        }
        if inclusive {
            seen.push(b);
        }
        seen
    }

    #[test]
    fn test_in_interval_matches_ring_walk() {
        let space = IdSpace::new(5).unwrap();
        for a in 0..space.size() {
            for b in 0..space.size() {
                for inclusive in [false, true] {
                    let arc = walk(space, a, b, inclusive);
                    for x in 0..space.size() {
                        assert_eq!(
                            Did(x).in_interval(Did(a), Did(b), inclusive),
                            arc.contains(&x),
                            "x: {}, a: {}, b: {}, inclusive: {}",
                            x,
                            a,
                            b,
                            inclusive
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_in_interval_wraps_past_zero() {
        let (a, b) = (Did(230), Did(0));
        assert!(Did(240).in_interval(a, b, false));
        assert!(!Did(0).in_interval(a, b, false));
        assert!(Did(0).in_interval(a, b, true));
        assert!(!Did(3).in_interval(a, b, true));
        assert!(!Did(230).in_interval(a, b, true));
    }

    #[test]
    fn test_degenerate_interval_is_full_circle() {
        for x in [0u64, 7, 255] {
            assert!(Did(x).in_interval(Did(7), Did(7), false));
            assert!(Did(x).in_interval(Did(7), Did(7), true));
        }
    }

    #[test]
    fn test_finger_start() {
        let space = IdSpace::default();
        assert_eq!(space.size(), 256);
        assert_eq!(space.finger_start(Did(0), 0), Did(1));
        assert_eq!(space.finger_start(Did(230), 5), Did(6));
        assert_eq!(space.finger_start(Did(230), 7), Did(102));
        assert_eq!(space.finger_start(Did(255), 0), Did(0));
    }

    #[test]
    fn test_space_bounds() {
        assert_eq!(IdSpace::new(0), Err(Error::InvalidIdBits(0)));
        assert_eq!(IdSpace::new(64), Err(Error::InvalidIdBits(64)));
        let space = IdSpace::new(63).unwrap();
        assert_eq!(space.finger_start(Did(u64::MAX >> 1), 0), Did(0));

        let space = IdSpace::default();
        assert_eq!(space.check(Did(255)), Ok(Did(255)));
        assert_eq!(space.check(Did(256)), Err(Error::DidOutOfSpace(256, 8)));
    }

    #[test]
    fn test_parse_did() {
        assert_eq!(Did::from_str(" 110 ").unwrap(), Did(110));
        assert!(Did::from_str("node").is_err());
        assert_eq!(Did(65).to_string(), "65");
    }
}
