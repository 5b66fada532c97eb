//! Testimonials have no trash state; delete is permanent.

use crate::audit;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VisadeskError};
use crate::external::{resolve_image, ImageHost};
use crate::model::Testimonial;
use crate::store::{AdminStore, CollectionFile, StorageBackend};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct TestimonialDraft {
    pub name: String,
    pub destination: String,
    pub quote: String,
    pub image: String,
    pub role: String,
    pub country: String,
}

#[derive(Debug, Clone, Default)]
pub struct TestimonialUpdate {
    pub name: Option<String>,
    pub destination: Option<String>,
    pub quote: Option<String>,
    pub image: Option<String>,
    pub role: Option<String>,
    pub country: Option<String>,
}

pub fn create<B: StorageBackend>(
    store: &AdminStore<B>,
    images: &dyn ImageHost,
    draft: TestimonialDraft,
) -> Result<CmdResult> {
    if draft.name.trim().is_empty() {
        return Err(VisadeskError::Api(
            "Testimonial name cannot be empty".into(),
        ));
    }

    let image = resolve_image(images, &draft.image, &draft.name);
    let testimonial = Testimonial::new(
        draft.name,
        draft.destination,
        draft.quote,
        image,
        draft.role,
        draft.country,
    );

    let mut records: Vec<Testimonial> = store.load_records(CollectionFile::Testimonials)?;
    records.push(testimonial.clone());
    store.save_records(CollectionFile::Testimonials, &records)?;
    audit::record(store, "Testimonial added", &testimonial.name);

    let mut result = CmdResult::with_message(CmdMessage::success(format!(
        "Testimonial added: {}",
        testimonial.name
    )));
    result.affected_ids.push(testimonial.id);
    Ok(result)
}

pub fn update<B: StorageBackend>(
    store: &AdminStore<B>,
    images: &dyn ImageHost,
    id: Uuid,
    update: TestimonialUpdate,
) -> Result<CmdResult> {
    let mut records: Vec<Testimonial> = store.load_records(CollectionFile::Testimonials)?;
    let testimonial = records
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(VisadeskError::NotFound(id))?;

    if let Some(name) = update.name {
        testimonial.name = name;
    }
    if let Some(destination) = update.destination {
        testimonial.destination = destination;
    }
    if let Some(quote) = update.quote {
        testimonial.quote = quote;
    }
    if let Some(image) = update.image {
        testimonial.image = resolve_image(images, &image, &testimonial.name);
    }
    if let Some(role) = update.role {
        testimonial.role = role;
    }
    if let Some(country) = update.country {
        testimonial.country = country;
    }

    let name = testimonial.name.clone();
    store.save_records(CollectionFile::Testimonials, &records)?;
    audit::record(store, "Testimonial updated", &name);

    let mut result =
        CmdResult::with_message(CmdMessage::success(format!("Testimonial updated: {}", name)));
    result.affected_ids.push(id);
    Ok(result)
}

pub fn delete<B: StorageBackend>(store: &AdminStore<B>, id: Uuid) -> Result<CmdResult> {
    let mut records: Vec<Testimonial> = store.load_records(CollectionFile::Testimonials)?;
    let Some(pos) = records.iter().position(|t| t.id == id) else {
        return Ok(CmdResult::with_message(CmdMessage::info(format!(
            "No testimonial with id {}; nothing to do",
            id
        ))));
    };
    let removed = records.remove(pos);
    store.save_records(CollectionFile::Testimonials, &records)?;
    audit::record(store, "Testimonial deleted", &removed.name);

    let mut result = CmdResult::with_message(CmdMessage::success(format!(
        "Testimonial deleted: {}",
        removed.name
    )));
    result.affected_ids.push(id);
    Ok(result)
}

pub fn list<B: StorageBackend>(
    store: &AdminStore<B>,
    search: Option<&str>,
) -> Result<Vec<Testimonial>> {
    let records: Vec<Testimonial> = store.load_records(CollectionFile::Testimonials)?;
    let Some(term) = search else {
        return Ok(records);
    };
    let term = term.to_lowercase();
    Ok(records
        .into_iter()
        .filter(|t| {
            t.name.to_lowercase().contains(&term)
                || t.destination.to_lowercase().contains(&term)
                || t.country.to_lowercase().contains(&term)
        })
        .collect())
}
