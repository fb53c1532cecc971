//! File-backed [`KeyValueStorage`]: one `<key>.json` file per key.
//!
//! SYSTEM CONTEXT
//! ==============
//! The stored session record carries a bearer token, so every file is
//! written owner-only (0o600 on unix) through a uniquely named temp file that
//! is synced and then renamed over the target.
//!
//! TRADE-OFFS
//! ==========
//! Reads that fail for reasons other than "missing" are logged and treated
//! as absent, matching how the token store treats malformed records.

#[cfg(test)]
#[path = "file_storage_test.rs"]
mod file_storage_test;

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use session::{KeyValueStorage, SessionError};

fn storage_error(e: std::io::Error) -> SessionError {
    SessionError::Storage(e.to_string())
}

#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "state file unreadable");
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        fs::create_dir_all(&self.dir).map_err(storage_error)?;

        let path = self.path_for(key);
        let temp = tempfile::NamedTempFile::new_in(&self.dir).map_err(storage_error)?;

        // Owner-only before any content lands in the file.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(temp.path(), fs::Permissions::from_mode(0o600)).map_err(storage_error)?;
        }

        let mut file = temp.as_file();
        file.write_all(value.as_bytes()).map_err(storage_error)?;
        file.sync_all().map_err(storage_error)?;

        temp.persist(&path).map_err(|e| storage_error(e.error))?;
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "state file not removed"),
        }
    }
}
