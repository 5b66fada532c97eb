use crate::audit;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{AboutContent, SiteSettings};
use crate::store::{AdminStore, CollectionFile, StorageBackend};

/// Seed any collection that has never been written. Existing files are
/// left alone, so init is safe to re-run.
pub fn run<B: StorageBackend>(store: &AdminStore<B>) -> Result<CmdResult> {
    let mut seeded = 0;
    for file in CollectionFile::ALL {
        if store.read_raw(file)?.is_some() {
            continue;
        }
        match file {
            CollectionFile::AboutContent => {
                store.save_singleton(file, &AboutContent::default())?
            }
            CollectionFile::SiteSettings => {
                store.save_singleton(file, &SiteSettings::default())?
            }
            _ => store.write_raw(file, "[]")?,
        }
        seeded += 1;
    }

    if seeded > 0 {
        audit::record(store, "Data directory initialized", &format!("{} files", seeded));
    }
    Ok(CmdResult::with_message(CmdMessage::success(format!(
        "Initialized data directory ({} file(s) created)",
        seeded
    ))))
}
