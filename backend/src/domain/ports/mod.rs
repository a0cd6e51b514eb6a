//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`EntityStore`, `SnapshotRepository`) are implemented by
//! outbound adapters; the driving port (`RegistryService`) is implemented by
//! the domain and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod entity_store;
mod registry_service;
mod snapshot_repository;

pub use entity_store::EntityStore;
#[cfg(test)]
pub use entity_store::MockEntityStore;
pub use registry_service::RegistryService;
#[cfg(test)]
pub use registry_service::MockRegistryService;
#[cfg(test)]
pub use snapshot_repository::MockSnapshotRepository;
pub use snapshot_repository::{
    FixtureSnapshotRepository, RegistrySnapshot, SnapshotRepository, SnapshotRepositoryError,
};
