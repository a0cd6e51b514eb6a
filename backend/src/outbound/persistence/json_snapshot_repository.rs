//! JSON file adapter for the snapshot repository port.
//!
//! The whole registry is one versioned document:
//!
//! ```text
//! { "version": 1, "courses": [...], "students": [...], "lessons": [...] }
//! ```

use std::io;
use std::path::Path;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use serde::{Deserialize, Serialize};

use super::atomic_io::{bare_file_name, write_atomic};
use crate::domain::ports::{RegistrySnapshot, SnapshotRepository, SnapshotRepositoryError};

/// Layout version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

#[derive(Serialize, Deserialize)]
struct SnapshotDocument {
    version: u32,
    #[serde(flatten)]
    snapshot: RegistrySnapshot,
}

/// Snapshot repository storing the registry in a single JSON file.
#[derive(Debug)]
pub struct JsonSnapshotRepository {
    dir: Dir,
    file_name: Utf8PathBuf,
}

impl JsonSnapshotRepository {
    /// Open (creating if needed) `data_dir` and store snapshots in `file_name`.
    ///
    /// # Examples
    /// ```no_run
    /// use std::path::Path;
    ///
    /// use course_registry::outbound::persistence::JsonSnapshotRepository;
    ///
    /// let repo = JsonSnapshotRepository::open(Path::new("/var/lib/course-registry"), "registry.json")?;
    /// # Ok::<(), course_registry::domain::ports::SnapshotRepositoryError>(())
    /// ```
    ///
    /// # Errors
    /// Fails when `file_name` is not a bare file name or when the directory
    /// cannot be created or opened.
    pub fn open(data_dir: &Path, file_name: &str) -> Result<Self, SnapshotRepositoryError> {
        let file_name = bare_file_name(Utf8Path::new(file_name))?;
        let display = data_dir.display();
        Dir::create_ambient_dir_all(data_dir, ambient_authority()).map_err(|err| {
            SnapshotRepositoryError::io(format!("creating data directory {display}: {err}"))
        })?;
        let dir = Dir::open_ambient_dir(data_dir, ambient_authority()).map_err(|err| {
            SnapshotRepositoryError::io(format!("opening data directory {display}: {err}"))
        })?;
        Ok(Self::new(dir, Utf8Path::new(file_name)))
    }

    /// Wrap an already opened directory.
    pub fn new(dir: Dir, file_name: &Utf8Path) -> Self {
        Self {
            dir,
            file_name: file_name.to_path_buf(),
        }
    }

    fn decode(&self, contents: &str) -> Result<RegistrySnapshot, SnapshotRepositoryError> {
        let probe: VersionProbe = serde_json::from_str(contents).map_err(|err| {
            SnapshotRepositoryError::format(format!("{}: {err}", self.file_name))
        })?;
        if probe.version != SNAPSHOT_VERSION {
            return Err(SnapshotRepositoryError::unsupported_version(probe.version));
        }
        let document: SnapshotDocument = serde_json::from_str(contents).map_err(|err| {
            SnapshotRepositoryError::format(format!("{}: {err}", self.file_name))
        })?;
        Ok(document.snapshot)
    }
}

impl SnapshotRepository for JsonSnapshotRepository {
    fn load(&self) -> Result<Option<RegistrySnapshot>, SnapshotRepositoryError> {
        match self.dir.read_to_string(&self.file_name) {
            Ok(contents) => self.decode(&contents).map(Some),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SnapshotRepositoryError::io(format!(
                "reading {}: {err}",
                self.file_name
            ))),
        }
    }

    fn save(&self, snapshot: &RegistrySnapshot) -> Result<(), SnapshotRepositoryError> {
        let document = SnapshotDocument {
            version: SNAPSHOT_VERSION,
            snapshot: snapshot.clone(),
        };
        let contents = serde_json::to_string_pretty(&document)
            .map_err(|err| SnapshotRepositoryError::format(err.to_string()))?;
        write_atomic(&self.dir, &self.file_name, &contents)
    }
}
