//! File-backed persistence adapters.
//!
//! The registry keeps its collections in memory and hands a full snapshot to
//! these adapters after every update. Files are written atomically through
//! `cap-std` directory handles so a crash mid-write never leaves a truncated
//! document behind.

mod atomic_io;
mod json_snapshot_repository;

pub use json_snapshot_repository::{JsonSnapshotRepository, SNAPSHOT_VERSION};
