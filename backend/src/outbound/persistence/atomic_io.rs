//! Atomic replacement of a file inside a capability-scoped directory.
//!
//! The new contents go to a hidden temporary sibling which is synced and then
//! renamed over the target, so readers only ever see the old or the new
//! document.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

use crate::domain::ports::SnapshotRepositoryError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Return `path` as a single file name, rejecting nested or relative paths.
pub(crate) fn bare_file_name(path: &Utf8Path) -> Result<&str, SnapshotRepositoryError> {
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Utf8Component::Normal(file_name)), None) => Ok(file_name),
        _ => Err(SnapshotRepositoryError::io(format!(
            "snapshot path {path} must be a bare file name"
        ))),
    }
}

/// Write `contents` to `path` within `dir` atomically.
///
/// `path` must be a bare file name; nested paths are rejected.
pub(crate) fn write_atomic(
    dir: &Dir,
    path: &Utf8Path,
    contents: &str,
) -> Result<(), SnapshotRepositoryError> {
    let file_name = bare_file_name(path)?;
    let tmp_name = format!(
        ".{file_name}.tmp.{}.{}",
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    );

    write_temp_file(dir, &tmp_name, contents).map_err(|err| {
        discard_temp_file(dir, &tmp_name);
        SnapshotRepositoryError::io(format!("writing {tmp_name}: {err}"))
    })?;
    dir.rename(&tmp_name, dir, file_name).map_err(|err| {
        discard_temp_file(dir, &tmp_name);
        SnapshotRepositoryError::io(format!("replacing {file_name}: {err}"))
    })?;
    sync_directory(dir);
    Ok(())
}

fn write_temp_file(dir: &Dir, tmp_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

fn discard_temp_file(dir: &Dir, tmp_name: &str) {
    if let Err(err) = dir.remove_file(tmp_name) {
        if err.kind() != io::ErrorKind::NotFound {
            tracing::debug!(error = %err, file = tmp_name, "temporary snapshot not removed");
        }
    }
}

fn sync_directory(dir: &Dir) {
    // Directory fsync is unsupported on some platforms; the rename itself has
    // already succeeded.
    if let Err(err) = dir.open(".").and_then(|handle| handle.sync_all()) {
        tracing::debug!(error = %err, "snapshot directory sync skipped");
    }
}
