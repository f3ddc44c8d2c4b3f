#![warn(missing_docs)]
use std::ops::Index;

use serde::Deserialize;
use serde::Serialize;

use crate::dht::Did;
use crate::dht::IdSpace;
use crate::dht::Registry;
use crate::error::Result;

/// Finger table of Chord DHT.
/// Entry i holds the successor of (did + 2^i) mod 2^M, so the table
/// always has M slots. Slots stay `None` until the owner has joined.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerTable {
    did: Did,
    size: usize,
    finger: Vec<Option<Did>>,
}

impl FingerTable {
    /// builder
    pub fn new(did: Did, size: usize) -> Self {
        Self {
            did,
            size,
            finger: vec![None; size],
        }
    }

    /// is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// get length of finger
    pub fn len(&self) -> usize {
        self.finger.iter().flatten().count()
    }

    /// getter
    pub fn get(&self, index: usize) -> Option<Did> {
        if index >= self.finger.len() {
            return None;
        }
        self.finger[index]
    }

    /// ref getter
    pub fn get_ref(&self, index: usize) -> &Option<Did> {
        if index >= self.finger.len() {
            return &None;
        }
        &self.finger[index]
    }

    /// The immediate successor of the owner, entry 0.
    pub fn successor(&self) -> Option<Did> {
        self.get(0)
    }

    /// Check finger is contains some node
    pub fn contains(&self, v: Option<Did>) -> bool {
        self.finger.contains(&v)
    }

    /// get finger list
    pub fn list(&self) -> &Vec<Option<Did>> {
        &self.finger
    }

    /// Rebuild every entry from the registry.
    /// Has to run for every joined node after any join or leave.
    pub fn update(&mut self, space: IdSpace, registry: &Registry) -> Result<()> {
        for i in 0..self.size {
            let start = space.finger_start(self.did, i);
            let succ = registry.successor_for_key(start)?;
            self.finger[i] = Some(succ);
        }
        tracing::debug!("finger table of {} updated: {:?}", self.did, self.finger);
        Ok(())
    }

    /// Drop every entry, used when the owner leaves the ring.
    pub fn reset(&mut self) {
        self.finger = vec![None; self.size]
    }

    /// get closest preceding finger
    ///
    /// Scan from the farthest finger down and return the first one lying
    /// strictly inside (did, key). Falls back to the owner itself when no
    /// finger gets closer to the key.
    pub fn closest_preceding_finger(&self, key: Did) -> Did {
        for i in (0..self.size).rev() {
            if let Some(v) = self.finger[i] {
                if v != self.did && v.in_interval(self.did, key, false) {
                    return v;
                }
            }
        }

        self.did
    }

    /// Pairs of (interval start, successor) in index order.
    pub fn entries(&self, space: IdSpace) -> Vec<(Did, Option<Did>)> {
        self.finger
            .iter()
            .enumerate()
            .map(|(i, succ)| (space.finger_start(self.did, i), *succ))
            .collect()
    }
}

impl Index<usize> for FingerTable {
    type Output = Option<Did>;
    fn index(&self, index: usize) -> &Self::Output {
        self.get_ref(index)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ring(ids: &[u64]) -> Registry {
        let mut registry = Registry::new();
        for id in ids {
            registry.add(Did::from(*id));
        }
        registry
    }

    fn dids(ids: &[u64]) -> Vec<Option<Did>> {
        ids.iter().map(|x| Some(Did::from(*x))).collect()
    }

    #[test]
    fn test_finger_table_update() {
        let space = IdSpace::default();
        let registry = ring(&[0, 30, 65, 110, 160, 230]);

        let mut table = FingerTable::new(Did::from(0u64), 8);
        assert!(table.is_empty());
        assert_eq!(table.successor(), None);

        table.update(space, &registry).unwrap();
        assert_eq!(table.len(), 8);
        assert_eq!(table.list(), &dids(&[30, 30, 30, 30, 30, 65, 65, 160]));
        assert_eq!(table.successor(), Some(Did::from(30u64)));
        assert_eq!(table[7], Some(Did::from(160u64)));
        assert_eq!(table[8], None);

        let mut table = FingerTable::new(Did::from(230u64), 8);
        table.update(space, &registry).unwrap();
        assert_eq!(table.list(), &dids(&[0, 0, 0, 0, 0, 30, 65, 110]));
    }

    #[test]
    fn test_entries_pair_start_and_successor() {
        let space = IdSpace::default();
        let registry = ring(&[0, 30, 65, 110, 160, 230]);
        let mut table = FingerTable::new(Did::from(65u64), 8);
        table.update(space, &registry).unwrap();

        let starts: Vec<u64> = table
            .entries(space)
            .iter()
            .map(|(start, _)| start.as_u64())
            .collect();
        assert_eq!(starts, vec![66, 67, 69, 73, 81, 97, 129, 193]);
        assert_eq!(table.entries(space)[6], (Did::from(129u64), Some(Did::from(160u64))));
    }

    #[test]
    fn test_closest_preceding_finger() {
        let space = IdSpace::default();
        let registry = ring(&[0, 30, 65, 110, 160, 230]);
        let mut table = FingerTable::new(Did::from(65u64), 8);
        table.update(space, &registry).unwrap();

        // Wraps past zero: 230 is the farthest finger before key 3.
        assert_eq!(table.closest_preceding_finger(Did::from(3u64)), Did::from(230u64));
        assert_eq!(table.closest_preceding_finger(Did::from(200u64)), Did::from(160u64));
        // No finger strictly inside (65, 100).
        assert_eq!(table.closest_preceding_finger(Did::from(100u64)), Did::from(65u64));
    }

    #[test]
    fn test_lonely_node_points_to_itself() {
        let space = IdSpace::default();
        let registry = ring(&[42]);
        let mut table = FingerTable::new(Did::from(42u64), 8);
        table.update(space, &registry).unwrap();
        assert!(table.list().iter().all(|x| *x == Some(Did::from(42u64))));
        assert_eq!(table.closest_preceding_finger(Did::from(7u64)), Did::from(42u64));

        table.reset();
        assert!(table.is_empty());
        assert_eq!(table.list().len(), 8);
    }
}
