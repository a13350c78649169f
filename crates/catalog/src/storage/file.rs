//! File-backed storage bridge.

use std::fs;
use std::path::{Path, PathBuf};

use super::StorageBridge;

/// A durable bridge that keeps one file per key under a data directory.
///
/// Construction never fails: if the directory cannot be created the bridge
/// comes up inert (reads absent, writes dropped) and logs a warning, so
/// callers can hydrate safely before a durable store is available.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
    available: bool,
}

impl FileStorage {
    /// Open (or create) a storage directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let available = match fs::create_dir_all(&dir) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "storage directory unavailable, bridge is inert");
                false
            }
        };
        Self { dir, available }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBridge for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        if !self.available {
            return None;
        }
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read storage slot");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if !self.available {
            return;
        }
        let path = self.path_for(key);
        if let Err(e) = write_atomic(&path, value) {
            tracing::warn!(key, error = %e, "failed to write storage slot");
        }
    }

    fn remove(&self, key: &str) {
        if !self.available {
            return;
        }
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(key, error = %e, "failed to remove storage slot"),
        }
    }
}

/// Write via a sibling temp file and rename, so a crash mid-write never
/// leaves a torn slot behind.
fn write_atomic(path: &Path, value: &str) -> std::io::Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, value)?;
    fs::rename(&tmp, path)
}
