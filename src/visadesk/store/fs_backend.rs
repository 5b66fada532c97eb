use super::backend::{CollectionFile, StorageBackend};
use crate::error::{Result, VisadeskError};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Production backend: one JSON file per collection inside a single data
/// directory.
pub struct FsBackend {
    data_dir: PathBuf,
}

impl FsBackend {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(VisadeskError::Io)?;
        }
        Ok(())
    }

    fn file_path(&self, file: CollectionFile) -> PathBuf {
        self.data_dir.join(file.file_name())
    }
}

impl StorageBackend for FsBackend {
    fn read_file(&self, file: CollectionFile) -> Result<Option<String>> {
        let path = self.file_path(file);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path).map_err(VisadeskError::Io)?;
        Ok(Some(contents))
    }

    fn write_file(&self, file: CollectionFile, contents: &str) -> Result<()> {
        self.ensure_dir()?;

        let target = self.file_path(file);

        // Atomic write
        let tmp = self.data_dir.join(format!(".{}-{}.tmp", file.file_name(), Uuid::new_v4()));
        fs::write(&tmp, contents).map_err(VisadeskError::Io)?;
        fs::rename(&tmp, &target).map_err(VisadeskError::Io)?;

        Ok(())
    }
}
