//! Module of MemStorage, the key store owned by every node.

pub mod memory;

pub use crate::storage::memory::MemStorage;

/// Key value storage interface
pub trait KvStorageInterface<K, V> {
    /// Get an entry by `key`.
    fn get(&self, key: &K) -> Option<&V>;

    /// Put `value` under `key`, returning the value it replaced.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// All entries in ascending key order.
    fn get_all(&self) -> Vec<(K, V)>;

    /// All keys in ascending order.
    fn keys(&self) -> Vec<K>;

    /// Remove an entry by `key`, returning it if present.
    fn remove(&mut self, key: &K) -> Option<V>;
}
