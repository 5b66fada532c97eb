//! Activity log sink.
//!
//! Every mutating command appends one timestamped entry, newest first,
//! capped at [`LOG_CAP`] with the oldest entries silently dropped. A failed
//! log write must never fail the operation that triggered it — [`record`]
//! swallows the error and reports it on stderr.

use crate::error::Result;
use crate::model::LogEntry;
use crate::store::{AdminStore, CollectionFile, StorageBackend};

pub const LOG_CAP: usize = 1000;

/// Append an entry, swallowing failures.
pub fn record<B: StorageBackend>(store: &AdminStore<B>, action: &str, details: &str) {
    if let Err(e) = append(store, action, details) {
        eprintln!("Warning: failed to record activity log entry: {}", e);
    }
}

/// Append an entry, propagating failures. Prefer [`record`] from command
/// code.
pub fn append<B: StorageBackend>(store: &AdminStore<B>, action: &str, details: &str) -> Result<()> {
    let mut entries: Vec<LogEntry> = store.load_records(CollectionFile::Logs)?;
    entries.insert(0, LogEntry::new(action, details));
    entries.truncate(LOG_CAP);
    store.save_records(CollectionFile::Logs, &entries)
}

pub fn list_all<B: StorageBackend>(store: &AdminStore<B>) -> Result<Vec<LogEntry>> {
    store.load_records(CollectionFile::Logs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn entries_are_newest_first() {
        let store = AdminStore::new(MemBackend::new());
        append(&store, "First", "a").unwrap();
        append(&store, "Second", "b").unwrap();

        let entries = list_all(&store).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].action, "Second");
        assert_eq!(entries[1].action, "First");
    }

    #[test]
    fn cap_drops_the_oldest() {
        let store = AdminStore::new(MemBackend::new());
        for i in 0..LOG_CAP {
            append(&store, "Entry", &i.to_string()).unwrap();
        }
        append(&store, "Entry", "one too many").unwrap();

        let entries = list_all(&store).unwrap();
        assert_eq!(entries.len(), LOG_CAP);
        assert_eq!(entries[0].details, "one too many");
        // "0" was the oldest and must be gone
        assert!(entries.iter().all(|e| e.details != "0"));
    }

    #[test]
    fn record_swallows_write_failures() {
        let store = AdminStore::new(MemBackend::new());
        store.backend().set_simulate_write_error(true);
        // Must not panic or propagate
        record(&store, "Doomed", "write will fail");
        store.backend().set_simulate_write_error(false);
        assert!(list_all(&store).unwrap().is_empty());
    }
}
