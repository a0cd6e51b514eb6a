//! Port for durable snapshots of every record collection.

use serde::{Deserialize, Serialize};

use crate::domain::{Course, Lesson, Student};

use super::define_port_error;

define_port_error! {
    /// Errors raised by snapshot repository adapters.
    pub enum SnapshotRepositoryError {
        /// Reading or writing the backing medium failed.
        Io { message: String } => "snapshot storage failed: {message}",
        /// The stored document could not be decoded or encoded.
        Format { message: String } => "snapshot document is malformed: {message}",
        /// The stored document uses a layout this build cannot read.
        UnsupportedVersion { found: u32 } => "unsupported snapshot version {found}",
    }
}

/// Every record held by the registry at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub courses: Vec<Course>,
    pub students: Vec<Student>,
    pub lessons: Vec<Lesson>,
}

impl RegistrySnapshot {
    /// Total number of records across all collections.
    pub fn record_count(&self) -> usize {
        self.courses.len() + self.students.len() + self.lessons.len()
    }
}

/// Port for loading the registry at startup and saving it after updates.
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotRepository: Send + Sync {
    /// Load the last saved snapshot, or `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<RegistrySnapshot>, SnapshotRepositoryError>;

    /// Replace the saved snapshot.
    fn save(&self, snapshot: &RegistrySnapshot) -> Result<(), SnapshotRepositoryError>;
}

/// In-memory-only deployments: nothing is loaded and saves are discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSnapshotRepository;

impl SnapshotRepository for FixtureSnapshotRepository {
    fn load(&self) -> Result<Option<RegistrySnapshot>, SnapshotRepositoryError> {
        Ok(None)
    }

    fn save(&self, _snapshot: &RegistrySnapshot) -> Result<(), SnapshotRepositoryError> {
        Ok(())
    }
}
