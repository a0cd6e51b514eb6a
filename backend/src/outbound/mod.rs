//! Outbound adapters implementing the domain's driven ports.
//!
//! - [`store`]: in-memory ordered collections behind `EntityStore`.
//! - [`persistence`]: JSON snapshot file behind `SnapshotRepository`.

pub mod persistence;
pub mod store;
