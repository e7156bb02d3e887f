use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::{KeyValueStorage, StorageError};

const LOCK_FILE: &str = ".lock";

/// One file per key under a data directory.
///
/// Writes go to a temp file that is renamed over the target while holding an
/// exclusive lock on the directory's lock file, so a reader in another
/// process never sees a half-written value.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn io_error(&self, key: &str, source: std::io::Error) -> StorageError {
        StorageError::Io {
            key: key.to_string(),
            path: self.path_for(key),
            source,
        }
    }

    /// Opens and exclusively locks the lock file. Released when dropped.
    fn lock(&self) -> Result<File, StorageError> {
        let path = self.dir.join(LOCK_FILE);
        let lock_err = |source| StorageError::Lock {
            path: path.clone(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(lock_err)?;
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(lock_err)?;
        file.lock_exclusive().map_err(lock_err)?;
        Ok(file)
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _lock = self.lock()?;
        let target = self.path_for(key);
        let tmp = self.dir.join(format!("{}.tmp", key));

        let mut file = File::create(&tmp).map_err(|e| self.io_error(key, e))?;
        file.write_all(value.as_bytes())
            .and_then(|_| file.sync_all())
            .map_err(|e| self.io_error(key, e))?;
        drop(file);

        fs::rename(&tmp, &target).map_err(|e| self.io_error(key, e))?;
        tracing::debug!(key, path = %target.display(), bytes = value.len(), "Storage write");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if !self.dir.exists() {
            return Ok(());
        }
        let _lock = self.lock()?;
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => {
                tracing::debug!(key, "Storage remove");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(key, e)),
        }
    }
}
