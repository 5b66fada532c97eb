use crate::audit;
use crate::error::Result;
use crate::model::LogEntry;
use crate::store::{AdminStore, StorageBackend};

/// Newest first, as stored. Text search over the log is a view concern.
pub fn list<B: StorageBackend>(
    store: &AdminStore<B>,
    limit: Option<usize>,
) -> Result<Vec<LogEntry>> {
    let mut entries = audit::list_all(store)?;
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    Ok(entries)
}
