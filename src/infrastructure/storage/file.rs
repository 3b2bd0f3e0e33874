use crate::domain::error::DomainError;
use crate::domain::ports::key_value_storage::KeyValueStorage;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// One `<key>.json` file per slot inside a directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, DomainError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(DomainError::InvalidInput(format!("Invalid storage key: {key}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::Storage(format!(
                "Failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| {
            DomainError::Storage(format!("Failed to create {}: {e}", self.dir.display()))
        })?;
        // Replace atomically: sibling temp file, then rename.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .map_err(|e| DomainError::Storage(format!("Failed to write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &path)
            .map_err(|e| DomainError::Storage(format!("Failed to replace {}: {e}", path.display())))?;
        Ok(())
    }
}
