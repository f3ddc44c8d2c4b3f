//! Join and leave, with the key hand-over they trigger.
use super::chord::Ring;
use super::types::Migration;
use crate::dht::Did;
use crate::dht::FingerTable;
use crate::dht::Node;
use crate::error::Error;
use crate::error::Result;
use crate::storage::KvStorageInterface;

impl<V> Ring<V>
where V: Clone
{
    /// Register `node`, rebuild every finger table, then pull from the
    /// successor the keys in (predecessor, node].
    pub(super) fn join_node(
        &mut self,
        mut node: Node<V>,
        contact: Option<Did>,
    ) -> Result<Option<Migration>> {
        let did = self.space().check(node.did)?;
        if self.registry().contains(did) {
            return Err(Error::DidAlreadyJoined(did));
        }
        if let Some(contact) = contact {
            if !self.registry().contains(contact) {
                return Err(Error::NodeNotRegistered(contact));
            }
        }

        node.finger = FingerTable::new(did, self.space().bits() as usize);
        self.insert_node(node);
        self.update_all_finger_tables()?;

        let Some(contact) = contact else {
            if self.len() > 1 {
                tracing::warn!(
                    "node {} joined a ring of {} nodes without contact, no key is migrated",
                    did,
                    self.len()
                );
            } else {
                tracing::info!("node {} bootstraps the ring", did);
            }
            return Ok(None);
        };

        let pred = self.registry().previous(did).ok_or(Error::NodeNotRegistered(did))?;
        let succ = self.registry().next(did).ok_or(Error::NodeNotRegistered(did))?;
        tracing::info!(
            "node {} joined via {}, predecessor: {}, successor: {}",
            did,
            contact,
            pred,
            succ
        );

        let migration = self.migrate(succ, did, |k| k.in_interval(pred, did, true))?;
        if !migration.is_empty() {
            tracing::info!(
                "migrated keys from node {} to node {}: {:?}",
                migration.from,
                migration.to,
                migration.keys
            );
        }
        Ok(Some(migration))
    }

    /// Hand every key of `did` to its successor, unregister it and rebuild
    /// the remaining finger tables. The last node of a ring has nobody to
    /// hand its keys to and leaves with them.
    pub(super) fn leave_node(&mut self, did: Did) -> Result<Node<V>> {
        let succ = self.registry().next(did).ok_or(Error::NodeNotRegistered(did))?;

        if succ == did {
            tracing::info!("node {} is the last node of the ring, nothing to migrate", did);
        } else {
            let migration = self.migrate(did, succ, |_| true)?;
            tracing::info!(
                "node {} leaves, {} keys handed to {}",
                did,
                migration.keys.len(),
                succ
            );
        }

        let mut node = self.remove_node(did)?;
        node.finger.reset();
        self.update_all_finger_tables()?;
        Ok(node)
    }

    /// Move the keys of `from` accepted by `filter` into `to`.
    /// Each key is taken out of `from` before it is written to `to`, and an
    /// existing entry on `to` is overwritten.
    fn migrate<F>(&mut self, from: Did, to: Did, filter: F) -> Result<Migration>
    where F: Fn(Did) -> bool {
        self.node(to)?;
        let source = self.node_mut(from)?;
        let moved: Vec<(Did, V)> = source
            .storage
            .keys()
            .into_iter()
            .filter(|k| filter(*k))
            .filter_map(|k| source.storage.remove(&k).map(|v| (k, v)))
            .collect();

        let target = self.node_mut(to)?;
        let keys = moved.iter().map(|(k, _)| *k).collect();
        for (k, v) in moved {
            target.storage.put(k, v);
        }

        Ok(Migration { from, to, keys })
    }
}
