//! Ordered in-memory collection guarded by a read/write lock.
//!
//! Durability is layered on top by the registry, which writes every
//! collection to a snapshot repository after each update.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::ports::EntityStore;

/// Thread-safe ordered map implementing [`EntityStore`].
///
/// # Examples
/// ```
/// use course_registry::domain::ports::EntityStore;
/// use course_registry::outbound::store::InMemoryEntityStore;
///
/// let store: InMemoryEntityStore<String, u32> = InMemoryEntityStore::new();
/// store.insert("b".to_owned(), 2);
/// store.insert("a".to_owned(), 1);
/// assert_eq!(store.values(), vec![1, 2]);
/// ```
#[derive(Debug)]
pub struct InMemoryEntityStore<K, V> {
    records: RwLock<BTreeMap<K, V>>,
}

impl<K, V> InMemoryEntityStore<K, V> {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }

    // A panic while holding the lock cannot leave the map half-updated: every
    // mutation is a single BTreeMap call. Recover the guard instead of
    // propagating the poison.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<K, V>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<K, V>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K, V> Default for InMemoryEntityStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for InMemoryEntityStore<K, V>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            records: RwLock::new(iter.into_iter().collect()),
        }
    }
}

impl<K, V> EntityStore<K, V> for InMemoryEntityStore<K, V>
where
    K: Ord + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn insert(&self, key: K, value: V) {
        self.write().insert(key, value);
    }

    fn get(&self, key: &K) -> Option<V> {
        self.read().get(key).cloned()
    }

    fn remove(&self, key: &K) -> Option<V> {
        self.write().remove(key)
    }

    fn values(&self) -> Vec<V> {
        self.read().values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn store() -> InMemoryEntityStore<String, String> {
        InMemoryEntityStore::from_iter([
            ("k2".to_owned(), "second".to_owned()),
            ("k1".to_owned(), "first".to_owned()),
        ])
    }

    #[rstest]
    fn insert_replaces_existing_value(store: InMemoryEntityStore<String, String>) {
        store.insert("k1".to_owned(), "replaced".to_owned());
        assert_eq!(store.get(&"k1".to_owned()).as_deref(), Some("replaced"));
        assert_eq!(store.len(), 2);
    }

    #[rstest]
    fn remove_returns_prior_value_once(store: InMemoryEntityStore<String, String>) {
        let key = "k2".to_owned();
        assert_eq!(store.remove(&key).as_deref(), Some("second"));
        assert!(store.remove(&key).is_none());
        assert!(store.get(&key).is_none());
    }

    #[rstest]
    fn values_are_listed_in_key_order(store: InMemoryEntityStore<String, String>) {
        assert_eq!(store.values(), vec!["first".to_owned(), "second".to_owned()]);
    }

    #[rstest]
    fn values_are_a_detached_snapshot(store: InMemoryEntityStore<String, String>) {
        let listed = store.values();
        store.insert("k0".to_owned(), "zeroth".to_owned());
        assert_eq!(listed.len(), 2);
        assert_eq!(store.len(), 3);
    }

    #[rstest]
    fn empty_store_reports_empty() {
        let store: InMemoryEntityStore<u8, u8> = InMemoryEntityStore::default();
        assert!(store.is_empty());
        assert!(store.values().is_empty());
    }

    #[rstest]
    fn concurrent_inserts_are_all_kept() {
        let store: Arc<InMemoryEntityStore<u32, u32>> = Arc::new(InMemoryEntityStore::new());
        let handles: Vec<_> = (0..8_u32)
            .map(|worker| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for offset in 0..50_u32 {
                        let key = worker * 100 + offset;
                        store.insert(key, key);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("worker thread completes");
        }
        assert_eq!(store.len(), 400);
    }
}
