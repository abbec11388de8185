//! Filesystem storage for session entries.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, instrument, trace};

use blogadmin_core::Result;
use blogadmin_core::error::{InvalidInputError, StorageError};
use blogadmin_core::traits::Storage;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Lock file serializing writers across processes.
const LOCK_FILE: &str = ".lock";

/// [`Storage`] keeping one file per key under a root directory.
///
/// Writes land in a temporary file that is renamed over the old value, so a
/// reader never sees a partially written entry. Entries are readable by the
/// owner only on Unix.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at `root`. The directory is created on first write.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(InvalidInputError::StorageKey {
                key: key.to_string(),
            }
            .into());
        }
        Ok(self.root.join(key))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.root.join(format!(".{}.tmp", key))
    }

    /// Take the exclusive writer lock, creating the root if needed.
    fn lock(&self) -> io::Result<File> {
        fs::create_dir_all(&self.root)?;
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.root.join(LOCK_FILE))?;
        lock_file.lock_exclusive()?;
        Ok(lock_file)
    }

    fn write_entry(&self, key: &str, path: &Path, value: &str) -> io::Result<()> {
        let lock_file = self.lock()?;
        let temp = self.temp_path(key);

        let written = replace_with(&temp, path, value);
        if written.is_err()
            && let Err(e) = fs::remove_file(&temp)
            && e.kind() != io::ErrorKind::NotFound
        {
            debug!(temp = %temp.display(), error = %e, "Failed to remove temp file");
        }

        lock_file.unlock()?;
        written
    }

    fn remove_entry(&self, path: &Path) -> io::Result<()> {
        let lock_file = self.lock()?;
        match fs::remove_file(path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        lock_file.unlock()?;
        Ok(())
    }
}

/// Write `value` to `temp`, then move it over `path`.
fn replace_with(temp: &Path, path: &Path, value: &str) -> io::Result<()> {
    let mut file = File::create(temp)?;
    file.write_all(value.as_bytes())?;
    file.sync_data()?;

    #[cfg(unix)]
    {
        let mut perms = file.metadata()?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(temp, perms)?;
    }

    fs::rename(temp, path)
}

impl Storage for FileStorage {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => {
                trace!("Read entry");
                Ok(Some(value))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                key: key.to_string(),
                message: e.to_string(),
            }
            .into()),
        }
    }

    #[instrument(skip(self, value), fields(root = %self.root.display()))]
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        self.write_entry(key, &path, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        debug!("Wrote entry");
        Ok(())
    }

    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        self.remove_entry(&path).map_err(|e| StorageError::Remove {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        debug!("Removed entry");
        Ok(())
    }
}
