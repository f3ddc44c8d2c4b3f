use std::collections::BTreeMap;

use crate::storage::KvStorageInterface;

/// In-memory ordered key store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemStorage<K, V>
where K: Ord
{
    table: BTreeMap<K, V>,
}

impl<K, V> Default for MemStorage<K, V>
where K: Ord
{
    fn default() -> Self {
        Self {
            table: BTreeMap::default(),
        }
    }
}

impl<K, V> MemStorage<K, V>
where K: Ord
{
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K, V> KvStorageInterface<K, V> for MemStorage<K, V>
where
    K: Ord + Copy,
    V: Clone,
{
    fn get(&self, key: &K) -> Option<&V> {
        self.table.get(key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.table.insert(key, value)
    }

    fn get_all(&self) -> Vec<(K, V)> {
        self.table.iter().map(|(k, v)| (*k, v.clone())).collect()
    }

    fn keys(&self) -> Vec<K> {
        self.table.keys().copied().collect()
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.table.remove(key)
    }
}
