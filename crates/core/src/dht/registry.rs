//! Membership registry of the ring.
use std::collections::BTreeSet;

use crate::dht::Did;
use crate::error::Error;
use crate::error::Result;

/// The set of Dids currently joined to the ring.
///
/// The registry only records membership, the nodes themselves live in the
/// ring's arena. Dids are kept in ascending order, so every query walks an
/// already sorted view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    members: BTreeSet<Did>,
}

impl Registry {
    /// builder
    pub fn new() -> Self {
        Self::default()
    }

    /// is empty
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// number of joined nodes
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check membership.
    pub fn contains(&self, did: Did) -> bool {
        self.members.contains(&did)
    }

    /// Joined Dids in ascending order.
    pub fn list(&self) -> Vec<Did> {
        self.members.iter().copied().collect()
    }

    /// Register a Did. Returns false if it was already present.
    pub fn add(&mut self, did: Did) -> bool {
        self.members.insert(did)
    }

    /// Unregister a Did. Returns false if there was nothing to remove.
    pub fn remove(&mut self, did: Did) -> bool {
        self.members.remove(&did)
    }

    /// The joined node with the smallest Did >= `key`, wrapping to the
    /// smallest Did when `key` is beyond the largest one.
    pub fn successor_for_key(&self, key: Did) -> Result<Did> {
        self.members
            .range(key..)
            .next()
            .or_else(|| self.members.iter().next())
            .copied()
            .ok_or(Error::EmptyRegistry)
    }

    /// The node right after `did` in ascending order, wrapping to the smallest.
    /// Returns None if `did` is not registered.
    pub fn next(&self, did: Did) -> Option<Did> {
        if !self.contains(did) {
            return None;
        }
        self.members
            .range((std::ops::Bound::Excluded(did), std::ops::Bound::Unbounded))
            .next()
            .or_else(|| self.members.iter().next())
            .copied()
    }

    /// The node right before `did` in ascending order, wrapping to the largest.
    /// Returns None if `did` is not registered.
    pub fn previous(&self, did: Did) -> Option<Did> {
        if !self.contains(did) {
            return None;
        }
        self.members
            .range(..did)
            .next_back()
            .or_else(|| self.members.iter().next_back())
            .copied()
    }
}
