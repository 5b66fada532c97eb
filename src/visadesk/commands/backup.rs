//! Whole-store backup: one JSON object keyed by collection file name.
//!
//! Restore overwrites only the collections present in the envelope and
//! stops at the first write failure — there is no rollback, so a partial
//! restore is possible and the error names the collection that failed.

use crate::audit;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VisadeskError};
use crate::store::{AdminStore, CollectionFile, StorageBackend};
use serde_json::{Map, Value};

/// Serialize every collection into one envelope. A collection that is
/// missing or unreadable contributes its empty value rather than failing
/// the export.
pub fn export_all<B: StorageBackend>(store: &AdminStore<B>) -> Result<String> {
    let mut envelope = Map::new();
    for file in CollectionFile::ALL {
        let value = store
            .read_raw(file)
            .ok()
            .flatten()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_else(|| empty_value(file));
        envelope.insert(file.file_name().to_string(), value);
    }

    audit::record(store, "Backup exported", "all collections");
    Ok(serde_json::to_string_pretty(&Value::Object(envelope))?)
}

pub fn import_all<B: StorageBackend>(store: &AdminStore<B>, text: &str) -> Result<CmdResult> {
    let envelope: Value =
        serde_json::from_str(text).map_err(|e| VisadeskError::InvalidBackup(e.to_string()))?;
    let Some(envelope) = envelope.as_object() else {
        return Err(VisadeskError::InvalidBackup(
            "expected a top-level object".to_string(),
        ));
    };

    let required = CollectionFile::SiteSettings.file_name();
    if !envelope.contains_key(required) {
        return Err(VisadeskError::MissingRequiredData(required));
    }

    let mut restored = 0;
    for file in CollectionFile::ALL {
        let Some(value) = envelope.get(file.file_name()) else {
            continue;
        };
        let contents = serde_json::to_string_pretty(value)?;
        store
            .write_raw(file, &contents)
            .map_err(|e| VisadeskError::RestoreWrite {
                file: file.file_name(),
                source: Box::new(e),
            })?;
        restored += 1;
    }

    audit::record(
        store,
        "Backup restored",
        &format!("{} collections", restored),
    );
    Ok(CmdResult::with_message(CmdMessage::success(format!(
        "Restored {} collection(s) from backup",
        restored
    ))))
}

fn empty_value(file: CollectionFile) -> Value {
    if file.is_singleton() {
        Value::Object(Map::new())
    } else {
        Value::Array(Vec::new())
    }
}
