//! Generic soft-delete engine.
//!
//! Services, hero images, clients and inbound emails all share the same
//! lifecycle: `active ⇄ trash → removed`. The entity command modules wire
//! these helpers to their own collection and add the activity-log entry;
//! the helpers themselves only move records between states.
//!
//! Trashing an id that does not exist is a no-op (`Ok(None)`), matching the
//! console's tolerance for stale views: a second click on an already-purged
//! row must not error.

use crate::error::Result;
use crate::model::{Lifecycle, RecordStatus};
use crate::store::{AdminStore, CollectionFile, StorageBackend};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Active,
    Trash,
}

impl StatusFilter {
    pub fn matches(&self, status: RecordStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == RecordStatus::Active,
            StatusFilter::Trash => status == RecordStatus::Trash,
        }
    }
}

pub fn list<B, T>(
    store: &AdminStore<B>,
    file: CollectionFile,
    filter: StatusFilter,
) -> Result<Vec<T>>
where
    B: StorageBackend,
    T: Lifecycle + DeserializeOwned,
{
    let records: Vec<T> = store.load_records(file)?;
    Ok(records
        .into_iter()
        .filter(|r| filter.matches(r.status()))
        .collect())
}

/// Move a record to the trash. Returns the record, or `None` if the id is
/// not in the collection.
pub fn soft_delete<B, T>(store: &AdminStore<B>, file: CollectionFile, id: Uuid) -> Result<Option<T>>
where
    B: StorageBackend,
    T: Lifecycle + Serialize + DeserializeOwned + Clone,
{
    set_status(store, file, id, RecordStatus::Trash)
}

/// Return a trashed record to the active list. Only `status` changes.
pub fn restore<B, T>(store: &AdminStore<B>, file: CollectionFile, id: Uuid) -> Result<Option<T>>
where
    B: StorageBackend,
    T: Lifecycle + Serialize + DeserializeOwned + Clone,
{
    set_status(store, file, id, RecordStatus::Active)
}

/// Remove a record from the collection entirely. Irreversible.
pub fn purge<B, T>(store: &AdminStore<B>, file: CollectionFile, id: Uuid) -> Result<Option<T>>
where
    B: StorageBackend,
    T: Lifecycle + Serialize + DeserializeOwned,
{
    let mut records: Vec<T> = store.load_records(file)?;
    let Some(pos) = records.iter().position(|r| r.id() == id) else {
        return Ok(None);
    };
    let removed = records.remove(pos);
    store.save_records(file, &records)?;
    Ok(Some(removed))
}

/// Bulk-return every trashed record to the active list. Returns the count.
pub fn restore_all<B, T>(store: &AdminStore<B>, file: CollectionFile) -> Result<usize>
where
    B: StorageBackend,
    T: Lifecycle + Serialize + DeserializeOwned,
{
    let mut records: Vec<T> = store.load_records(file)?;
    let mut restored = 0;
    for record in records.iter_mut() {
        if record.status() == RecordStatus::Trash {
            record.set_status(RecordStatus::Active);
            restored += 1;
        }
    }
    if restored > 0 {
        store.save_records(file, &records)?;
    }
    Ok(restored)
}

fn set_status<B, T>(
    store: &AdminStore<B>,
    file: CollectionFile,
    id: Uuid,
    status: RecordStatus,
) -> Result<Option<T>>
where
    B: StorageBackend,
    T: Lifecycle + Serialize + DeserializeOwned + Clone,
{
    let mut records: Vec<T> = store.load_records(file)?;
    let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
        return Ok(None);
    };
    record.set_status(status);
    let changed = record.clone();
    store.save_records(file, &records)?;
    Ok(Some(changed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Client;
    use crate::store::mem_backend::MemBackend;

    fn store_with_clients(names: &[&str]) -> (AdminStore<MemBackend>, Vec<Uuid>) {
        let store = AdminStore::new(MemBackend::new());
        let clients: Vec<Client> = names.iter().map(|n| Client::new(n.to_string())).collect();
        let ids = clients.iter().map(|c| c.id).collect();
        store
            .save_records(CollectionFile::Clients, &clients)
            .unwrap();
        (store, ids)
    }

    #[test]
    fn soft_delete_moves_record_between_filters() {
        let (store, ids) = store_with_clients(&["Thiri", "Ko Min"]);

        let trashed: Option<Client> =
            soft_delete(&store, CollectionFile::Clients, ids[0]).unwrap();
        assert_eq!(trashed.unwrap().name, "Thiri");

        let active: Vec<Client> =
            list(&store, CollectionFile::Clients, StatusFilter::Active).unwrap();
        assert_eq!(active.len(), 1);
        assert!(active.iter().all(|c| c.id != ids[0]));

        let trash: Vec<Client> =
            list(&store, CollectionFile::Clients, StatusFilter::Trash).unwrap();
        assert_eq!(trash.len(), 1);
        assert_eq!(trash[0].id, ids[0]);
    }

    #[test]
    fn soft_delete_unknown_id_is_noop() {
        let (store, _) = store_with_clients(&["Thiri"]);
        let result: Option<Client> =
            soft_delete(&store, CollectionFile::Clients, Uuid::new_v4()).unwrap();
        assert!(result.is_none());

        let all: Vec<Client> = list(&store, CollectionFile::Clients, StatusFilter::All).unwrap();
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn restore_preserves_other_fields() {
        let (store, ids) = store_with_clients(&["Thiri"]);
        let before: Option<Client> = store.find_by_id(CollectionFile::Clients, ids[0]).unwrap();
        let before = before.unwrap();

        let _: Option<Client> = soft_delete(&store, CollectionFile::Clients, ids[0]).unwrap();
        let restored: Option<Client> = restore(&store, CollectionFile::Clients, ids[0]).unwrap();
        let restored = restored.unwrap();

        assert_eq!(restored.status, RecordStatus::Active);
        assert_eq!(restored.name, before.name);
        assert_eq!(restored.created_at, before.created_at);
    }

    #[test]
    fn purge_removes_from_both_lists() {
        let (store, ids) = store_with_clients(&["Thiri", "Ko Min"]);
        let _: Option<Client> = soft_delete(&store, CollectionFile::Clients, ids[0]).unwrap();
        let purged: Option<Client> = purge(&store, CollectionFile::Clients, ids[0]).unwrap();
        assert!(purged.is_some());

        let active: Vec<Client> =
            list(&store, CollectionFile::Clients, StatusFilter::Active).unwrap();
        let trash: Vec<Client> =
            list(&store, CollectionFile::Clients, StatusFilter::Trash).unwrap();
        assert!(active.iter().all(|c| c.id != ids[0]));
        assert!(trash.is_empty());
    }

    #[test]
    fn restore_all_counts_only_trashed() {
        let (store, ids) = store_with_clients(&["A", "B", "C"]);
        let _: Option<Client> = soft_delete(&store, CollectionFile::Clients, ids[0]).unwrap();
        let _: Option<Client> = soft_delete(&store, CollectionFile::Clients, ids[2]).unwrap();

        let count = restore_all::<_, Client>(&store, CollectionFile::Clients).unwrap();
        assert_eq!(count, 2);

        let trash: Vec<Client> =
            list(&store, CollectionFile::Clients, StatusFilter::Trash).unwrap();
        assert!(trash.is_empty());

        // Nothing left to restore
        let count = restore_all::<_, Client>(&store, CollectionFile::Clients).unwrap();
        assert_eq!(count, 0);
    }
}
