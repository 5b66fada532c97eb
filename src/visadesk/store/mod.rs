//! # Storage Layer
//!
//! Storage is abstracted behind the [`StorageBackend`] trait so that the
//! command layer can be tested against [`mem_backend::MemBackend`] without
//! touching the filesystem, while production runs on
//! [`fs_backend::FsBackend`] — one JSON file per collection in a single
//! data directory:
//!
//! ```text
//! data/
//! ├── services.json
//! ├── testimonials.json
//! ├── hero-images.json
//! ├── about-content.json
//! ├── clients.json
//! ├── manifest.json
//! ├── client-balances.json
//! ├── emails.json
//! ├── site-settings.json
//! └── logs.json
//! ```
//!
//! ## Fail-soft reads
//!
//! A collection that has never been written reads as empty, not as an
//! error. A collection whose file no longer parses is reported on stderr
//! and also reads as empty — the console must stay usable even when one
//! file is damaged. Writes always serialize the full collection and
//! replace the file (atomically at the backend level); there is no
//! partial-update path and no cross-file transaction.
//!
//! ## Concurrency
//!
//! Single-writer by assumption: the deployment is one administrator at a
//! time, so read-modify-write races are accepted (last writer wins).

use crate::error::Result;
use crate::model::HasId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::{CollectionFile, StorageBackend};

/// Typed access to the collections over a raw backend.
pub struct AdminStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> AdminStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load a record collection. Missing file: empty. Corrupt file: a
    /// stderr warning and empty, so the caller never sees a parse error.
    pub fn load_records<T: DeserializeOwned>(&self, file: CollectionFile) -> Result<Vec<T>> {
        let Some(text) = self.backend.read_file(file)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&text) {
            Ok(records) => Ok(records),
            Err(e) => {
                eprintln!(
                    "Warning: {} is not valid JSON ({}); treating the collection as empty",
                    file.file_name(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    /// Serialize the full sequence, replacing all prior content.
    pub fn save_records<T: Serialize>(&self, file: CollectionFile, records: &[T]) -> Result<()> {
        let text = serde_json::to_string_pretty(records)?;
        self.backend.write_file(file, &text)
    }

    /// Load a singleton collection, defaulting when missing or corrupt.
    pub fn load_singleton<T: DeserializeOwned + Default>(&self, file: CollectionFile) -> Result<T> {
        let Some(text) = self.backend.read_file(file)? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(e) => {
                eprintln!(
                    "Warning: {} is not valid JSON ({}); falling back to defaults",
                    file.file_name(),
                    e
                );
                Ok(T::default())
            }
        }
    }

    pub fn save_singleton<T: Serialize>(&self, file: CollectionFile, value: &T) -> Result<()> {
        let text = serde_json::to_string_pretty(value)?;
        self.backend.write_file(file, &text)
    }

    pub fn find_by_id<T: DeserializeOwned + HasId>(
        &self,
        file: CollectionFile,
        id: Uuid,
    ) -> Result<Option<T>> {
        let records: Vec<T> = self.load_records(file)?;
        Ok(records.into_iter().find(|r| r.id() == id))
    }

    /// Raw passthroughs used by backup/restore, which moves whole files.
    pub fn read_raw(&self, file: CollectionFile) -> Result<Option<String>> {
        self.backend.read_file(file)
    }

    pub fn write_raw(&self, file: CollectionFile, contents: &str) -> Result<()> {
        self.backend.write_file(file, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::mem_backend::MemBackend;
    use super::*;
    use crate::model::{Client, SiteSettings};

    #[test]
    fn missing_collection_reads_as_empty() {
        let store = AdminStore::new(MemBackend::new());
        let clients: Vec<Client> = store.load_records(CollectionFile::Clients).unwrap();
        assert!(clients.is_empty());
    }

    #[test]
    fn corrupt_collection_reads_as_empty() {
        let store = AdminStore::new(MemBackend::new());
        store
            .backend()
            .seed(CollectionFile::Clients, "{ not json ]");
        let clients: Vec<Client> = store.load_records(CollectionFile::Clients).unwrap();
        assert!(clients.is_empty());
    }

    #[test]
    fn records_round_trip() {
        let store = AdminStore::new(MemBackend::new());
        let clients = vec![Client::new("Thiri".into()), Client::new("Ko Min".into())];
        store
            .save_records(CollectionFile::Clients, &clients)
            .unwrap();

        let loaded: Vec<Client> = store.load_records(CollectionFile::Clients).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "Thiri");

        let found: Option<Client> = store
            .find_by_id(CollectionFile::Clients, clients[1].id)
            .unwrap();
        assert_eq!(found.unwrap().name, "Ko Min");
    }

    #[test]
    fn find_by_id_absent_is_none() {
        let store = AdminStore::new(MemBackend::new());
        let found: Option<Client> = store
            .find_by_id(CollectionFile::Clients, uuid::Uuid::new_v4())
            .unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn missing_singleton_defaults() {
        let store = AdminStore::new(MemBackend::new());
        let settings: SiteSettings = store.load_singleton(CollectionFile::SiteSettings).unwrap();
        assert_eq!(settings, SiteSettings::default());
    }

    #[test]
    fn singleton_round_trip() {
        let store = AdminStore::new(MemBackend::new());
        let mut settings = SiteSettings::default();
        settings.username = "operator".into();
        store
            .save_singleton(CollectionFile::SiteSettings, &settings)
            .unwrap();

        let loaded: SiteSettings = store.load_singleton(CollectionFile::SiteSettings).unwrap();
        assert_eq!(loaded.username, "operator");
    }
}
