use serde::Deserialize;
use serde::Serialize;

use crate::dht::Did;
use crate::dht::Node;
use crate::dht::Ring;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingInspect<V> {
    pub id_bits: u8,
    pub nodes: Vec<NodeInspect<V>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInspect<V> {
    pub did: Did,
    /// (interval start, successor) in finger index order.
    pub finger_table: Vec<(Did, Option<Did>)>,
    /// (key, value) in ascending key order.
    pub keys: Vec<(Did, V)>,
}

impl<V> RingInspect<V>
where V: Clone
{
    pub fn inspect(ring: &Ring<V>) -> Self {
        Self {
            id_bits: ring.space().bits(),
            nodes: ring
                .nodes()
                .map(|node| NodeInspect::inspect(ring, node))
                .collect(),
        }
    }

    pub fn node(&self, did: Did) -> Option<&NodeInspect<V>> {
        self.nodes.iter().find(|n| n.did == did)
    }
}

impl<V> NodeInspect<V>
where V: Clone
{
    pub fn inspect(ring: &Ring<V>, node: &Node<V>) -> Self {
        Self {
            did: node.did,
            finger_table: node.finger.entries(ring.space()),
            keys: node.keys(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dht::Chord;
    use crate::dht::ChordStorage;
    use crate::dht::IdSpace;

    #[test]
    fn test_inspect_ring() {
        let mut ring = Ring::<i64>::new(IdSpace::new(4).unwrap());
        let node = ring.new_node(Did::from(9u64));
        ring.join(node, None).unwrap();
        let node = ring.new_node(Did::from(2u64));
        ring.join(node, Some(Did::from(9u64))).unwrap();
        ring.insert_key(Did::from(9u64), Did::from(5u64), 50).unwrap();

        let inspect = RingInspect::inspect(&ring);
        assert_eq!(inspect.id_bits, 4);
        let dids: Vec<Did> = inspect.nodes.iter().map(|n| n.did).collect();
        assert_eq!(dids, vec![Did::from(2u64), Did::from(9u64)]);

        let n2 = inspect.node(Did::from(2u64)).unwrap();
        assert_eq!(n2.finger_table, vec![
            (Did::from(3u64), Some(Did::from(9u64))),
            (Did::from(4u64), Some(Did::from(9u64))),
            (Did::from(6u64), Some(Did::from(9u64))),
            (Did::from(10u64), Some(Did::from(2u64))),
        ]);
        assert_eq!(inspect.node(Did::from(9u64)).unwrap().keys, vec![(
            Did::from(5u64),
            50
        )]);

        let json = serde_json::to_value(&inspect).unwrap();
        assert_eq!(json["nodes"][0]["did"], 2);
        assert_eq!(json["nodes"][1]["keys"][0][1], 50);
    }
}
