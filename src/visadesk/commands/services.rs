use crate::audit;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VisadeskError};
use crate::external::{resolve_image, ImageHost};
use crate::lifecycle::{self, StatusFilter};
use crate::model::{Service, ServiceIcon};
use crate::store::{AdminStore, CollectionFile, StorageBackend};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ServiceDraft {
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub requirements: Vec<String>,
    pub image: String,
    pub icon: ServiceIcon,
}

/// Partial update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct ServiceUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub image: Option<String>,
    pub icon: Option<ServiceIcon>,
}

pub fn create<B: StorageBackend>(
    store: &AdminStore<B>,
    images: &dyn ImageHost,
    draft: ServiceDraft,
) -> Result<CmdResult> {
    if draft.title.trim().is_empty() {
        return Err(VisadeskError::Api("Service title cannot be empty".into()));
    }

    let image = resolve_image(images, &draft.image, &draft.title);
    let service = Service::new(
        draft.title,
        draft.description,
        draft.long_description,
        draft.requirements,
        image,
        draft.icon,
    );

    let mut records: Vec<Service> = store.load_records(CollectionFile::Services)?;
    records.push(service.clone());
    store.save_records(CollectionFile::Services, &records)?;
    audit::record(store, "Service created", &service.title);

    let mut result = CmdResult::with_message(CmdMessage::success(format!(
        "Service created: {}",
        service.title
    )));
    result.affected_ids.push(service.id);
    Ok(result)
}

pub fn update<B: StorageBackend>(
    store: &AdminStore<B>,
    images: &dyn ImageHost,
    id: Uuid,
    update: ServiceUpdate,
) -> Result<CmdResult> {
    let mut records: Vec<Service> = store.load_records(CollectionFile::Services)?;
    let service = records
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or(VisadeskError::NotFound(id))?;

    if let Some(title) = update.title {
        service.title = title;
    }
    if let Some(description) = update.description {
        service.description = description;
    }
    if let Some(long_description) = update.long_description {
        service.long_description = long_description;
    }
    if let Some(requirements) = update.requirements {
        service.requirements = requirements;
    }
    if let Some(image) = update.image {
        service.image = resolve_image(images, &image, &service.title);
    }
    if let Some(icon) = update.icon {
        service.icon = icon;
    }

    let title = service.title.clone();
    store.save_records(CollectionFile::Services, &records)?;
    audit::record(store, "Service updated", &title);

    let mut result =
        CmdResult::with_message(CmdMessage::success(format!("Service updated: {}", title)));
    result.affected_ids.push(id);
    Ok(result)
}

pub fn list<B: StorageBackend>(
    store: &AdminStore<B>,
    filter: StatusFilter,
    search: Option<&str>,
) -> Result<Vec<Service>> {
    let services: Vec<Service> = lifecycle::list(store, CollectionFile::Services, filter)?;

    let Some(term) = search else {
        return Ok(services);
    };
    let term_lower = term.to_lowercase();

    // Title matches rank above description matches
    let mut matches: Vec<(Service, u8)> = services
        .into_iter()
        .filter_map(|s| {
            let title_lower = s.title.to_lowercase();
            let score = if title_lower == term_lower {
                1
            } else if title_lower.contains(&term_lower) {
                2
            } else if s.description.to_lowercase().contains(&term_lower)
                || s.long_description.to_lowercase().contains(&term_lower)
            {
                3
            } else {
                return None;
            };
            Some((s, score))
        })
        .collect();

    matches.sort_by(|(a, score_a), (b, score_b)| {
        score_a.cmp(score_b).then_with(|| a.title.cmp(&b.title))
    });

    Ok(matches.into_iter().map(|(s, _)| s).collect())
}

pub fn trash<B: StorageBackend>(store: &AdminStore<B>, id: Uuid) -> Result<CmdResult> {
    match lifecycle::soft_delete::<_, Service>(store, CollectionFile::Services, id)? {
        Some(service) => {
            audit::record(store, "Service moved to trash", &service.title);
            let mut result = CmdResult::with_message(CmdMessage::success(format!(
                "Service moved to trash: {}",
                service.title
            )));
            result.affected_ids.push(id);
            Ok(result)
        }
        None => Ok(CmdResult::with_message(CmdMessage::info(format!(
            "No service with id {}; nothing to do",
            id
        )))),
    }
}

pub fn restore<B: StorageBackend>(store: &AdminStore<B>, id: Uuid) -> Result<CmdResult> {
    match lifecycle::restore::<_, Service>(store, CollectionFile::Services, id)? {
        Some(service) => {
            audit::record(store, "Service restored", &service.title);
            let mut result = CmdResult::with_message(CmdMessage::success(format!(
                "Service restored: {}",
                service.title
            )));
            result.affected_ids.push(id);
            Ok(result)
        }
        None => Ok(CmdResult::with_message(CmdMessage::info(format!(
            "No service with id {}; nothing to do",
            id
        )))),
    }
}

pub fn purge<B: StorageBackend>(store: &AdminStore<B>, id: Uuid) -> Result<CmdResult> {
    match lifecycle::purge::<_, Service>(store, CollectionFile::Services, id)? {
        Some(service) => {
            audit::record(store, "Service permanently deleted", &service.title);
            let mut result = CmdResult::with_message(CmdMessage::success(format!(
                "Service permanently deleted: {}",
                service.title
            )));
            result.affected_ids.push(id);
            Ok(result)
        }
        None => Ok(CmdResult::with_message(CmdMessage::info(format!(
            "No service with id {}; nothing to do",
            id
        )))),
    }
}

pub fn restore_all<B: StorageBackend>(store: &AdminStore<B>) -> Result<CmdResult> {
    let count = lifecycle::restore_all::<_, Service>(store, CollectionFile::Services)?;
    if count > 0 {
        audit::record(store, "Services restored from trash", &count.to_string());
    }
    Ok(CmdResult::with_message(CmdMessage::success(format!(
        "Restored {} service(s) from trash",
        count
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::InlineImageHost;
    use crate::store::mem_backend::MemBackend;

    fn draft(title: &str, description: &str) -> ServiceDraft {
        ServiceDraft {
            title: title.to_string(),
            description: description.to_string(),
            long_description: String::new(),
            requirements: vec!["Valid passport".to_string()],
            image: String::new(),
            icon: ServiceIcon::Passport,
        }
    }

    #[test]
    fn create_then_list_active() {
        let store = AdminStore::new(MemBackend::new());
        create(&store, &InlineImageHost, draft("Tourist Visa", "")).unwrap();

        let services = list(&store, StatusFilter::Active, None).unwrap();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].title, "Tourist Visa");
    }

    #[test]
    fn create_rejects_empty_title() {
        let store = AdminStore::new(MemBackend::new());
        let result = create(&store, &InlineImageHost, draft("  ", ""));
        assert!(matches!(result, Err(VisadeskError::Api(_))));
    }

    #[test]
    fn trash_hides_from_active_and_shows_in_trash() {
        let store = AdminStore::new(MemBackend::new());
        let created = create(&store, &InlineImageHost, draft("Work Visa", "")).unwrap();
        let id = created.affected_ids[0];

        trash(&store, id).unwrap();

        let active = list(&store, StatusFilter::Active, None).unwrap();
        assert!(active.iter().all(|s| s.id != id));
        let trashed = list(&store, StatusFilter::Trash, None).unwrap();
        assert!(trashed.iter().any(|s| s.id == id));
    }

    #[test]
    fn restore_returns_record_with_fields_intact() {
        let store = AdminStore::new(MemBackend::new());
        let created = create(&store, &InlineImageHost, draft("Student Visa", "Study abroad")).unwrap();
        let id = created.affected_ids[0];

        trash(&store, id).unwrap();
        restore(&store, id).unwrap();

        let active = list(&store, StatusFilter::Active, None).unwrap();
        let service = active.iter().find(|s| s.id == id).unwrap();
        assert_eq!(service.description, "Study abroad");
        assert_eq!(service.requirements, vec!["Valid passport".to_string()]);
    }

    #[test]
    fn purge_removes_entirely() {
        let store = AdminStore::new(MemBackend::new());
        let created = create(&store, &InlineImageHost, draft("Work Visa", "")).unwrap();
        let id = created.affected_ids[0];

        purge(&store, id).unwrap();

        assert!(list(&store, StatusFilter::All, None).unwrap().is_empty());
    }

    #[test]
    fn trash_unknown_id_reports_noop() {
        let store = AdminStore::new(MemBackend::new());
        let result = trash(&store, Uuid::new_v4()).unwrap();
        assert_eq!(result.affected_ids.len(), 0);
    }

    #[test]
    fn search_ranks_title_matches_first() {
        let store = AdminStore::new(MemBackend::new());
        create(&store, &InlineImageHost, draft("Visa Renewal", "")).unwrap();
        create(
            &store,
            &InlineImageHost,
            draft("Document Check", "includes visa advice"),
        )
        .unwrap();

        let found = list(&store, StatusFilter::Active, Some("visa")).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].title, "Visa Renewal");
    }

    #[test]
    fn update_patches_only_given_fields() {
        let store = AdminStore::new(MemBackend::new());
        let created = create(&store, &InlineImageHost, draft("Work Visa", "Original")).unwrap();
        let id = created.affected_ids[0];

        update(
            &store,
            &InlineImageHost,
            id,
            ServiceUpdate {
                description: Some("Updated".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        let services = list(&store, StatusFilter::Active, None).unwrap();
        assert_eq!(services[0].title, "Work Visa");
        assert_eq!(services[0].description, "Updated");
    }
}
