//! Client records. The id is the canonical reference everywhere; the name
//! is display-only and is cached on ledger entries and opening balances,
//! so a rename rewrites those caches in the same pass.

use crate::audit;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VisadeskError};
use crate::lifecycle::{self, StatusFilter};
use crate::model::{Client, LedgerEntry, OpeningBalance};
use crate::store::{AdminStore, CollectionFile, StorageBackend};
use uuid::Uuid;

pub fn create<B: StorageBackend>(store: &AdminStore<B>, name: String) -> Result<CmdResult> {
    if name.trim().is_empty() {
        return Err(VisadeskError::Api("Client name cannot be empty".into()));
    }

    let client = Client::new(name);
    let mut records: Vec<Client> = store.load_records(CollectionFile::Clients)?;
    records.push(client.clone());
    store.save_records(CollectionFile::Clients, &records)?;
    audit::record(store, "Client added", &client.name);

    let mut result =
        CmdResult::with_message(CmdMessage::success(format!("Client added: {}", client.name)));
    result.affected_ids.push(client.id);
    Ok(result)
}

/// Rename a client and refresh the cached name on every ledger entry and
/// opening balance that references it.
pub fn rename<B: StorageBackend>(
    store: &AdminStore<B>,
    id: Uuid,
    new_name: String,
) -> Result<CmdResult> {
    if new_name.trim().is_empty() {
        return Err(VisadeskError::Api("Client name cannot be empty".into()));
    }

    let mut clients: Vec<Client> = store.load_records(CollectionFile::Clients)?;
    let client = clients
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or(VisadeskError::NotFound(id))?;
    let old_name = std::mem::replace(&mut client.name, new_name.clone());
    store.save_records(CollectionFile::Clients, &clients)?;

    let mut entries: Vec<LedgerEntry> = store.load_records(CollectionFile::Manifest)?;
    let mut touched = false;
    for entry in entries.iter_mut().filter(|e| e.client_id == id) {
        entry.client_name = new_name.clone();
        touched = true;
    }
    if touched {
        store.save_records(CollectionFile::Manifest, &entries)?;
    }

    let mut balances: Vec<OpeningBalance> = store.load_records(CollectionFile::ClientBalances)?;
    let mut touched = false;
    for balance in balances.iter_mut().filter(|b| b.client_id == id) {
        balance.client_name = new_name.clone();
        touched = true;
    }
    if touched {
        store.save_records(CollectionFile::ClientBalances, &balances)?;
    }

    audit::record(
        store,
        "Client renamed",
        &format!("{} -> {}", old_name, new_name),
    );

    let mut result = CmdResult::with_message(CmdMessage::success(format!(
        "Client renamed: {} -> {}",
        old_name, new_name
    )));
    result.affected_ids.push(id);
    Ok(result)
}

pub fn list<B: StorageBackend>(
    store: &AdminStore<B>,
    filter: StatusFilter,
    search: Option<&str>,
) -> Result<Vec<Client>> {
    let clients: Vec<Client> = lifecycle::list(store, CollectionFile::Clients, filter)?;
    let Some(term) = search else {
        return Ok(clients);
    };
    let term = term.to_lowercase();
    Ok(clients
        .into_iter()
        .filter(|c| c.name.to_lowercase().contains(&term))
        .collect())
}

pub fn trash<B: StorageBackend>(store: &AdminStore<B>, id: Uuid) -> Result<CmdResult> {
    match lifecycle::soft_delete::<_, Client>(store, CollectionFile::Clients, id)? {
        Some(client) => {
            audit::record(store, "Client moved to trash", &client.name);
            let mut result = CmdResult::with_message(CmdMessage::success(format!(
                "Client moved to trash: {}",
                client.name
            )));
            result.affected_ids.push(id);
            Ok(result)
        }
        None => Ok(CmdResult::with_message(CmdMessage::info(format!(
            "No client with id {}; nothing to do",
            id
        )))),
    }
}

pub fn restore<B: StorageBackend>(store: &AdminStore<B>, id: Uuid) -> Result<CmdResult> {
    match lifecycle::restore::<_, Client>(store, CollectionFile::Clients, id)? {
        Some(client) => {
            audit::record(store, "Client restored", &client.name);
            let mut result = CmdResult::with_message(CmdMessage::success(format!(
                "Client restored: {}",
                client.name
            )));
            result.affected_ids.push(id);
            Ok(result)
        }
        None => Ok(CmdResult::with_message(CmdMessage::info(format!(
            "No client with id {}; nothing to do",
            id
        )))),
    }
}

pub fn purge<B: StorageBackend>(store: &AdminStore<B>, id: Uuid) -> Result<CmdResult> {
    match lifecycle::purge::<_, Client>(store, CollectionFile::Clients, id)? {
        Some(client) => {
            audit::record(store, "Client permanently deleted", &client.name);
            let mut result = CmdResult::with_message(CmdMessage::success(format!(
                "Client permanently deleted: {}",
                client.name
            )));
            result.affected_ids.push(id);
            Ok(result)
        }
        None => Ok(CmdResult::with_message(CmdMessage::info(format!(
            "No client with id {}; nothing to do",
            id
        )))),
    }
}

pub fn restore_all<B: StorageBackend>(store: &AdminStore<B>) -> Result<CmdResult> {
    let count = lifecycle::restore_all::<_, Client>(store, CollectionFile::Clients)?;
    if count > 0 {
        audit::record(store, "Clients restored from trash", &count.to_string());
    }
    Ok(CmdResult::with_message(CmdMessage::success(format!(
        "Restored {} client(s) from trash",
        count
    ))))
}
