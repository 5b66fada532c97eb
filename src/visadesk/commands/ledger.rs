//! The client ledger ("manifest"): credit/debit entries per client, with
//! totals and a date-ordered running balance.
//!
//! Only entries with `EntryStatus::Active` count toward totals and the
//! running series. `Inactive` marks an entry as closed out of the current
//! period — it stays in storage and in listings, permanently readable but
//! excluded from every displayed figure.
//!
//! Listings are newest-first by date; the running series re-sorts ascending
//! before folding, since accumulating out of chronological order produces a
//! silently wrong balance.

use crate::audit;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VisadeskError};
use crate::model::{Client, EntryKind, EntryStatus, LedgerEntry};
use crate::store::{AdminStore, CollectionFile, StorageBackend};
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub client_id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub kind: EntryKind,
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerTotals {
    pub credit: i64,
    pub debit: i64,
}

impl LedgerTotals {
    pub fn balance(&self) -> i64 {
        self.credit - self.debit
    }
}

/// One point of the running balance series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningPoint {
    pub date: NaiveDate,
    pub credit: i64,
    pub debit: i64,
    pub balance: i64,
}

pub fn add_entry<B: StorageBackend>(
    store: &AdminStore<B>,
    draft: EntryDraft,
) -> Result<CmdResult> {
    if draft.amount <= 0 {
        return Err(VisadeskError::Api("Amount must be positive".into()));
    }
    let client: Client = store
        .find_by_id(CollectionFile::Clients, draft.client_id)?
        .ok_or(VisadeskError::NotFound(draft.client_id))?;

    let entry = LedgerEntry::new(
        client.id,
        client.name,
        draft.date,
        draft.description,
        draft.kind,
        draft.amount,
    );

    let mut entries: Vec<LedgerEntry> = store.load_records(CollectionFile::Manifest)?;
    entries.push(entry.clone());
    store.save_records(CollectionFile::Manifest, &entries)?;
    audit::record(
        store,
        "Ledger entry added",
        &format!(
            "{} {} for {}",
            entry.kind,
            format_amount(entry.amount),
            entry.client_name
        ),
    );

    let mut result = CmdResult::with_message(CmdMessage::success(format!(
        "Recorded {} of {} for {}",
        entry.kind,
        format_amount(entry.amount),
        entry.client_name
    )));
    result.affected_ids.push(entry.id);
    Ok(result)
}

/// List entries, newest first. `client` scopes to one client; `status`
/// of `None` lists everything.
pub fn list<B: StorageBackend>(
    store: &AdminStore<B>,
    client: Option<Uuid>,
    status: Option<EntryStatus>,
) -> Result<Vec<LedgerEntry>> {
    let mut entries: Vec<LedgerEntry> = store.load_records(CollectionFile::Manifest)?;
    entries.retain(|e| {
        client.map_or(true, |id| e.client_id == id)
            && status.map_or(true, |s| e.status == s)
    });
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(entries)
}

/// Sum amounts by kind. Callers pass entries already filtered to the
/// population they care about (normally the active ones).
pub fn totals(entries: &[LedgerEntry]) -> LedgerTotals {
    let mut result = LedgerTotals::default();
    for entry in entries {
        match entry.kind {
            EntryKind::Credit => result.credit += entry.amount,
            EntryKind::Debit => result.debit += entry.amount,
        }
    }
    result
}

/// Totals over active entries, optionally scoped to one client.
pub fn active_totals<B: StorageBackend>(
    store: &AdminStore<B>,
    client: Option<Uuid>,
) -> Result<LedgerTotals> {
    let entries = list(store, client, Some(EntryStatus::Active))?;
    Ok(totals(&entries))
}

/// Fold entries into a running balance, oldest first. The input may arrive
/// in any order (the store lists newest-first); it is re-sorted ascending
/// by date before accumulating. Credits add, debits subtract.
pub fn running_series(entries: &[LedgerEntry]) -> Vec<RunningPoint> {
    let mut ordered: Vec<&LedgerEntry> = entries.iter().collect();
    ordered.sort_by_key(|e| e.date);

    let mut balance = 0;
    ordered
        .into_iter()
        .map(|entry| {
            let (credit, debit) = match entry.kind {
                EntryKind::Credit => (entry.amount, 0),
                EntryKind::Debit => (0, entry.amount),
            };
            balance += credit - debit;
            RunningPoint {
                date: entry.date,
                credit,
                debit,
                balance,
            }
        })
        .collect()
}

/// Running series over active entries, optionally scoped to one client.
pub fn active_series<B: StorageBackend>(
    store: &AdminStore<B>,
    client: Option<Uuid>,
) -> Result<Vec<RunningPoint>> {
    let entries = list(store, client, Some(EntryStatus::Active))?;
    Ok(running_series(&entries))
}

/// Toggle whether a single entry counts toward the current balance.
pub fn set_entry_status<B: StorageBackend>(
    store: &AdminStore<B>,
    id: Uuid,
    status: EntryStatus,
) -> Result<CmdResult> {
    let mut entries: Vec<LedgerEntry> = store.load_records(CollectionFile::Manifest)?;
    let entry = entries
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or(VisadeskError::NotFound(id))?;
    entry.status = status;
    let summary = format!("{} {}", entry.kind, format_amount(entry.amount));
    store.save_records(CollectionFile::Manifest, &entries)?;

    let verb = match status {
        EntryStatus::Active => "reactivated",
        EntryStatus::Inactive => "deactivated",
    };
    audit::record(store, "Ledger entry status changed", &summary);

    let mut result =
        CmdResult::with_message(CmdMessage::success(format!("Entry {}: {}", verb, summary)));
    result.affected_ids.push(id);
    Ok(result)
}

/// Period close: every active entry becomes inactive. Entries stay
/// readable but drop out of all subsequent totals.
pub fn close_out<B: StorageBackend>(store: &AdminStore<B>) -> Result<CmdResult> {
    let mut entries: Vec<LedgerEntry> = store.load_records(CollectionFile::Manifest)?;
    let mut closed = 0;
    for entry in entries.iter_mut() {
        if entry.status == EntryStatus::Active {
            entry.status = EntryStatus::Inactive;
            closed += 1;
        }
    }
    if closed > 0 {
        store.save_records(CollectionFile::Manifest, &entries)?;
        audit::record(store, "Ledger closed out", &format!("{} entries", closed));
    }
    Ok(CmdResult::with_message(CmdMessage::success(format!(
        "Closed out {} entries",
        closed
    ))))
}

/// Hard-delete every manifest entry, active or not. Irreversible; the CLI
/// prompts before calling this.
pub fn flush<B: StorageBackend>(store: &AdminStore<B>) -> Result<CmdResult> {
    let entries: Vec<LedgerEntry> = store.load_records(CollectionFile::Manifest)?;
    let removed = entries.len();
    store.save_records::<LedgerEntry>(CollectionFile::Manifest, &[])?;
    audit::record(store, "Ledger flushed", &format!("{} entries removed", removed));

    Ok(CmdResult::with_message(CmdMessage::success(format!(
        "Flushed the ledger ({} entries removed)",
        removed
    ))))
}

/// Parse a decimal money string ("150" or "150.25") into minor units.
pub fn parse_amount(input: &str) -> Result<i64> {
    let input = input.trim();
    let (whole, frac) = match input.split_once('.') {
        Some((w, f)) => (w, f),
        None => (input, ""),
    };
    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return Err(VisadeskError::Api(format!("Invalid amount '{}'", input)));
    }
    if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(VisadeskError::Api(format!("Invalid amount '{}'", input)));
    }
    let whole: i64 = whole
        .parse()
        .map_err(|_| VisadeskError::Api(format!("Invalid amount '{}'", input)))?;
    let cents: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().unwrap_or(0) * 10,
        _ => frac.parse::<i64>().unwrap_or(0),
    };
    Ok(whole * 100 + cents)
}

pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::clients;
    use crate::store::mem_backend::MemBackend;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn store_with_client() -> (AdminStore<MemBackend>, Uuid) {
        let store = AdminStore::new(MemBackend::new());
        let created = clients::create(&store, "Thiri".into()).unwrap();
        let id = created.affected_ids[0];
        (store, id)
    }

    fn add(
        store: &AdminStore<MemBackend>,
        client: Uuid,
        day: u32,
        kind: EntryKind,
        amount: i64,
    ) -> Uuid {
        let result = add_entry(
            store,
            EntryDraft {
                client_id: client,
                date: date(day),
                description: "entry".into(),
                kind,
                amount,
            },
        )
        .unwrap();
        result.affected_ids[0]
    }

    #[test]
    fn totals_sum_by_kind() {
        let (store, client) = store_with_client();
        add(&store, client, 1, EntryKind::Credit, 100);
        add(&store, client, 2, EntryKind::Debit, 40);
        add(&store, client, 3, EntryKind::Credit, 10);

        let totals = active_totals(&store, None).unwrap();
        assert_eq!(totals.credit, 110);
        assert_eq!(totals.debit, 40);
        assert_eq!(totals.balance(), 70);
    }

    #[test]
    fn deactivated_entries_drop_out_of_totals() {
        let (store, client) = store_with_client();
        add(&store, client, 1, EntryKind::Credit, 100);
        add(&store, client, 2, EntryKind::Debit, 40);
        let small_credit = add(&store, client, 3, EntryKind::Credit, 10);

        set_entry_status(&store, small_credit, EntryStatus::Inactive).unwrap();

        let totals = active_totals(&store, None).unwrap();
        assert_eq!(totals.credit, 100);
        assert_eq!(totals.debit, 40);
        assert_eq!(totals.balance(), 60);

        // Still present in the full listing
        let all = list(&store, None, None).unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn running_series_accumulates_chronologically() {
        let (store, client) = store_with_client();
        // Inserted out of order on purpose
        add(&store, client, 2, EntryKind::Debit, 20);
        add(&store, client, 1, EntryKind::Credit, 50);
        add(&store, client, 3, EntryKind::Credit, 30);

        let series = active_series(&store, None).unwrap();
        let balances: Vec<i64> = series.iter().map(|p| p.balance).collect();
        assert_eq!(balances, vec![50, 30, 60]);
        assert_eq!(series[0].date, date(1));
        assert_eq!(series[0].credit, 50);
        assert_eq!(series[1].debit, 20);
    }

    #[test]
    fn list_is_newest_first() {
        let (store, client) = store_with_client();
        add(&store, client, 1, EntryKind::Credit, 10);
        add(&store, client, 5, EntryKind::Credit, 20);
        add(&store, client, 3, EntryKind::Credit, 30);

        let entries = list(&store, None, None).unwrap();
        let days: Vec<u32> = entries
            .iter()
            .map(|e| chrono::Datelike::day(&e.date))
            .collect();
        assert_eq!(days, vec![5, 3, 1]);
    }

    #[test]
    fn client_scope_excludes_other_clients() {
        let (store, thiri) = store_with_client();
        let other = clients::create(&store, "Ko Min".into()).unwrap().affected_ids[0];
        add(&store, thiri, 1, EntryKind::Credit, 100);
        add(&store, other, 1, EntryKind::Credit, 999);

        let totals = active_totals(&store, Some(thiri)).unwrap();
        assert_eq!(totals.credit, 100);
    }

    #[test]
    fn unknown_client_is_rejected() {
        let store = AdminStore::new(MemBackend::new());
        let result = add_entry(
            &store,
            EntryDraft {
                client_id: Uuid::new_v4(),
                date: date(1),
                description: "entry".into(),
                kind: EntryKind::Credit,
                amount: 10,
            },
        );
        assert!(matches!(result, Err(VisadeskError::NotFound(_))));
    }

    #[test]
    fn close_out_empties_the_current_period() {
        let (store, client) = store_with_client();
        add(&store, client, 1, EntryKind::Credit, 100);
        add(&store, client, 2, EntryKind::Debit, 40);

        close_out(&store).unwrap();

        let totals = active_totals(&store, None).unwrap();
        assert_eq!(totals, LedgerTotals::default());
        // Entries remain readable
        assert_eq!(list(&store, None, None).unwrap().len(), 2);
    }

    #[test]
    fn flush_removes_everything() {
        let (store, client) = store_with_client();
        add(&store, client, 1, EntryKind::Credit, 100);
        close_out(&store).unwrap();
        add(&store, client, 2, EntryKind::Credit, 50);

        flush(&store).unwrap();

        assert!(list(&store, None, None).unwrap().is_empty());
    }

    #[test]
    fn amounts_parse_and_format() {
        assert_eq!(parse_amount("150").unwrap(), 150_00);
        assert_eq!(parse_amount("150.25").unwrap(), 150_25);
        assert_eq!(parse_amount("0.5").unwrap(), 50);
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("1.234").is_err());
        assert!(parse_amount("-5").is_err());

        assert_eq!(format_amount(150_25), "150.25");
        assert_eq!(format_amount(50), "0.50");
        assert_eq!(format_amount(-70), "-0.70");
    }
}
