//! Opening balances: one row per client, upserted in place. These are
//! starting figures, not transactions — they never feed the running
//! series.

use crate::audit;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VisadeskError};
use crate::model::{Client, EntryKind, OpeningBalance};
use crate::store::{AdminStore, CollectionFile, StorageBackend};
use uuid::Uuid;

use super::ledger::format_amount;

pub fn set<B: StorageBackend>(
    store: &AdminStore<B>,
    client_id: Uuid,
    kind: EntryKind,
    amount: i64,
) -> Result<CmdResult> {
    if amount < 0 {
        return Err(VisadeskError::Api("Amount must not be negative".into()));
    }
    let client: Client = store
        .find_by_id(CollectionFile::Clients, client_id)?
        .ok_or(VisadeskError::NotFound(client_id))?;

    let mut balances: Vec<OpeningBalance> = store.load_records(CollectionFile::ClientBalances)?;
    match balances.iter_mut().find(|b| b.client_id == client_id) {
        Some(existing) => {
            existing.client_name = client.name.clone();
            existing.kind = kind;
            existing.amount = amount;
        }
        None => balances.push(OpeningBalance {
            client_id,
            client_name: client.name.clone(),
            amount,
            kind,
        }),
    }
    store.save_records(CollectionFile::ClientBalances, &balances)?;
    audit::record(
        store,
        "Opening balance set",
        &format!("{} {} for {}", kind, format_amount(amount), client.name),
    );

    Ok(CmdResult::with_message(CmdMessage::success(format!(
        "Opening balance for {}: {} {}",
        client.name,
        kind,
        format_amount(amount)
    ))))
}

pub fn list<B: StorageBackend>(store: &AdminStore<B>) -> Result<Vec<OpeningBalance>> {
    store.load_records(CollectionFile::ClientBalances)
}

pub fn get<B: StorageBackend>(
    store: &AdminStore<B>,
    client_id: Uuid,
) -> Result<Option<OpeningBalance>> {
    let balances: Vec<OpeningBalance> = store.load_records(CollectionFile::ClientBalances)?;
    Ok(balances.into_iter().find(|b| b.client_id == client_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::clients;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn set_twice_keeps_one_row() {
        let store = AdminStore::new(MemBackend::new());
        let client = clients::create(&store, "Thiri".into()).unwrap().affected_ids[0];

        set(&store, client, EntryKind::Credit, 100_00).unwrap();
        set(&store, client, EntryKind::Debit, 25_00).unwrap();

        let balances = list(&store).unwrap();
        assert_eq!(balances.len(), 1);
        assert_eq!(balances[0].kind, EntryKind::Debit);
        assert_eq!(balances[0].amount, 25_00);
    }

    #[test]
    fn unknown_client_is_rejected() {
        let store = AdminStore::new(MemBackend::new());
        let result = set(&store, Uuid::new_v4(), EntryKind::Credit, 10);
        assert!(matches!(result, Err(VisadeskError::NotFound(_))));
    }

    #[test]
    fn get_finds_the_client_row() {
        let store = AdminStore::new(MemBackend::new());
        let a = clients::create(&store, "A".into()).unwrap().affected_ids[0];
        let b = clients::create(&store, "B".into()).unwrap().affected_ids[0];
        set(&store, a, EntryKind::Credit, 1).unwrap();
        set(&store, b, EntryKind::Debit, 2).unwrap();

        let found = get(&store, b).unwrap().unwrap();
        assert_eq!(found.amount, 2);
        assert!(get(&store, Uuid::new_v4()).unwrap().is_none());
    }
}
