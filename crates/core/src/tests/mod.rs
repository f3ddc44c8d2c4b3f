
use crate::dht::Chord;
use crate::dht::Did;
use crate::dht::IdSpace;
use crate::dht::Ring;

pub fn did(id: u64) -> Did {
    Did::from(id)
}

pub fn dids(ids: &[u64]) -> Vec<Did> {
    ids.iter().map(|x| did(*x)).collect()
}

/// Join `ids` one after another, each through the previously joined node.
pub fn gen_chained_ring(space: IdSpace, ids: &[u64]) -> Ring<i64> {
    let mut ring = Ring::new(space);
    let mut contact = None;
    for id in ids {
        let node = ring.new_node(did(*id));
        ring.join(node, contact).unwrap();
        contact = Some(did(*id));
    }
    ring
}

/// Successor of `key` found by scanning the sorted members one by one.
pub fn scan_successor(members: &[Did], key: Did) -> Did {
    members
        .iter()
        .find(|m| **m >= key)
        .or_else(|| members.first())
        .copied()
        .unwrap()
}

/// Keys of a node as plain (key, value) pairs.
pub fn keys_of(ring: &Ring<i64>, id: u64) -> Vec<(u64, i64)> {
    ring.node(did(id))
        .unwrap()
        .keys()
        .into_iter()
        .map(|(k, v)| (k.as_u64(), v))
        .collect()
}
