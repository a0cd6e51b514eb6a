//! Port for the ordered key/value collections backing each record type.

/// Ordered mapping from a unique key to a record.
///
/// Implementations own their synchronisation; every method takes `&self` so
/// a store can be shared behind an `Arc` for the lifetime of the process.
/// `values` returns a point-in-time snapshot in ascending key order.
#[cfg_attr(test, mockall::automock)]
pub trait EntityStore<K, V>: Send + Sync
where
    K: Ord + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Insert or replace the record stored under `key`.
    fn insert(&self, key: K, value: V);

    /// Fetch the record stored under `key`.
    fn get(&self, key: &K) -> Option<V>;

    /// Delete the record stored under `key`, returning it if it existed.
    fn remove(&self, key: &K) -> Option<V>;

    /// Snapshot of every record in key order.
    fn values(&self) -> Vec<V>;

    /// Number of stored records.
    fn len(&self) -> usize;

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
