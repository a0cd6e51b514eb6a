//! Store adapters backing the [`EntityStore`](crate::domain::ports::EntityStore) port.

mod in_memory;

pub use in_memory::InMemoryEntityStore;
