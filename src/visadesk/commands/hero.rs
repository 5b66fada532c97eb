use crate::audit;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VisadeskError};
use crate::external::{resolve_image, ImageHost};
use crate::lifecycle::{self, StatusFilter};
use crate::model::HeroImage;
use crate::store::{AdminStore, CollectionFile, StorageBackend};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct HeroUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

pub fn create<B: StorageBackend>(
    store: &AdminStore<B>,
    images: &dyn ImageHost,
    title: String,
    description: String,
    image: String,
) -> Result<CmdResult> {
    if title.trim().is_empty() {
        return Err(VisadeskError::Api("Hero title cannot be empty".into()));
    }

    let image = resolve_image(images, &image, &title);
    let hero = HeroImage::new(title, description, image);

    let mut records: Vec<HeroImage> = store.load_records(CollectionFile::HeroImages)?;
    records.push(hero.clone());
    store.save_records(CollectionFile::HeroImages, &records)?;
    audit::record(store, "Hero image added", &hero.title);

    let mut result = CmdResult::with_message(CmdMessage::success(format!(
        "Hero image added: {}",
        hero.title
    )));
    result.affected_ids.push(hero.id);
    Ok(result)
}

pub fn update<B: StorageBackend>(
    store: &AdminStore<B>,
    images: &dyn ImageHost,
    id: Uuid,
    update: HeroUpdate,
) -> Result<CmdResult> {
    let mut records: Vec<HeroImage> = store.load_records(CollectionFile::HeroImages)?;
    let hero = records
        .iter_mut()
        .find(|h| h.id == id)
        .ok_or(VisadeskError::NotFound(id))?;

    if let Some(title) = update.title {
        hero.title = title;
    }
    if let Some(description) = update.description {
        hero.description = description;
    }
    if let Some(image) = update.image {
        hero.image = resolve_image(images, &image, &hero.title);
    }

    let title = hero.title.clone();
    store.save_records(CollectionFile::HeroImages, &records)?;
    audit::record(store, "Hero image updated", &title);

    let mut result =
        CmdResult::with_message(CmdMessage::success(format!("Hero image updated: {}", title)));
    result.affected_ids.push(id);
    Ok(result)
}

pub fn list<B: StorageBackend>(
    store: &AdminStore<B>,
    filter: StatusFilter,
) -> Result<Vec<HeroImage>> {
    lifecycle::list(store, CollectionFile::HeroImages, filter)
}

pub fn trash<B: StorageBackend>(store: &AdminStore<B>, id: Uuid) -> Result<CmdResult> {
    match lifecycle::soft_delete::<_, HeroImage>(store, CollectionFile::HeroImages, id)? {
        Some(hero) => {
            audit::record(store, "Hero image moved to trash", &hero.title);
            let mut result = CmdResult::with_message(CmdMessage::success(format!(
                "Hero image moved to trash: {}",
                hero.title
            )));
            result.affected_ids.push(id);
            Ok(result)
        }
        None => Ok(CmdResult::with_message(CmdMessage::info(format!(
            "No hero image with id {}; nothing to do",
            id
        )))),
    }
}

pub fn restore<B: StorageBackend>(store: &AdminStore<B>, id: Uuid) -> Result<CmdResult> {
    match lifecycle::restore::<_, HeroImage>(store, CollectionFile::HeroImages, id)? {
        Some(hero) => {
            audit::record(store, "Hero image restored", &hero.title);
            let mut result = CmdResult::with_message(CmdMessage::success(format!(
                "Hero image restored: {}",
                hero.title
            )));
            result.affected_ids.push(id);
            Ok(result)
        }
        None => Ok(CmdResult::with_message(CmdMessage::info(format!(
            "No hero image with id {}; nothing to do",
            id
        )))),
    }
}

pub fn purge<B: StorageBackend>(store: &AdminStore<B>, id: Uuid) -> Result<CmdResult> {
    match lifecycle::purge::<_, HeroImage>(store, CollectionFile::HeroImages, id)? {
        Some(hero) => {
            audit::record(store, "Hero image permanently deleted", &hero.title);
            let mut result = CmdResult::with_message(CmdMessage::success(format!(
                "Hero image permanently deleted: {}",
                hero.title
            )));
            result.affected_ids.push(id);
            Ok(result)
        }
        None => Ok(CmdResult::with_message(CmdMessage::info(format!(
            "No hero image with id {}; nothing to do",
            id
        )))),
    }
}

pub fn restore_all<B: StorageBackend>(store: &AdminStore<B>) -> Result<CmdResult> {
    let count = lifecycle::restore_all::<_, HeroImage>(store, CollectionFile::HeroImages)?;
    if count > 0 {
        audit::record(store, "Hero images restored from trash", &count.to_string());
    }
    Ok(CmdResult::with_message(CmdMessage::success(format!(
        "Restored {} hero image(s) from trash",
        count
    ))))
}
