use crate::audit;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VisadeskError};
use crate::lifecycle::{self, StatusFilter};
use crate::model::EmailMessage;
use crate::store::{AdminStore, CollectionFile, StorageBackend};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct EmailFilter {
    pub status: Option<StatusFilter>,
    pub unread_only: bool,
    pub favorites_only: bool,
    pub search: Option<String>,
}

/// List inbound messages, newest first.
pub fn list<B: StorageBackend>(
    store: &AdminStore<B>,
    filter: &EmailFilter,
) -> Result<Vec<EmailMessage>> {
    let status = filter.status.unwrap_or(StatusFilter::Active);
    let mut emails: Vec<EmailMessage> = lifecycle::list(store, CollectionFile::Emails, status)?;

    if filter.unread_only {
        emails.retain(|e| !e.read);
    }
    if filter.favorites_only {
        emails.retain(|e| e.favorited);
    }
    if let Some(term) = &filter.search {
        let term = term.to_lowercase();
        emails.retain(|e| {
            e.name.to_lowercase().contains(&term)
                || e.email.to_lowercase().contains(&term)
                || e.subject.to_lowercase().contains(&term)
                || e.message.to_lowercase().contains(&term)
        });
    }

    emails.sort_by(|a, b| b.received_at.cmp(&a.received_at));
    Ok(emails)
}

pub fn get<B: StorageBackend>(store: &AdminStore<B>, id: Uuid) -> Result<EmailMessage> {
    store
        .find_by_id(CollectionFile::Emails, id)?
        .ok_or(VisadeskError::NotFound(id))
}

pub fn mark_read<B: StorageBackend>(store: &AdminStore<B>, id: Uuid) -> Result<CmdResult> {
    let mut emails: Vec<EmailMessage> = store.load_records(CollectionFile::Emails)?;
    let email = emails
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or(VisadeskError::NotFound(id))?;
    email.read = true;
    let subject = email.subject.clone();
    store.save_records(CollectionFile::Emails, &emails)?;
    audit::record(store, "Email marked read", &subject);

    let mut result =
        CmdResult::with_message(CmdMessage::success(format!("Marked read: {}", subject)));
    result.affected_ids.push(id);
    Ok(result)
}

pub fn toggle_favorite<B: StorageBackend>(store: &AdminStore<B>, id: Uuid) -> Result<CmdResult> {
    let mut emails: Vec<EmailMessage> = store.load_records(CollectionFile::Emails)?;
    let email = emails
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or(VisadeskError::NotFound(id))?;
    email.favorited = !email.favorited;
    let favorited = email.favorited;
    let subject = email.subject.clone();
    store.save_records(CollectionFile::Emails, &emails)?;
    audit::record(store, "Email favorite toggled", &subject);

    let verb = if favorited { "Favorited" } else { "Unfavorited" };
    let mut result =
        CmdResult::with_message(CmdMessage::success(format!("{}: {}", verb, subject)));
    result.affected_ids.push(id);
    Ok(result)
}

pub fn trash<B: StorageBackend>(store: &AdminStore<B>, id: Uuid) -> Result<CmdResult> {
    match lifecycle::soft_delete::<_, EmailMessage>(store, CollectionFile::Emails, id)? {
        Some(email) => {
            audit::record(store, "Email moved to trash", &email.subject);
            let mut result = CmdResult::with_message(CmdMessage::success(format!(
                "Email moved to trash: {}",
                email.subject
            )));
            result.affected_ids.push(id);
            Ok(result)
        }
        None => Ok(CmdResult::with_message(CmdMessage::info(format!(
            "No email with id {}; nothing to do",
            id
        )))),
    }
}

pub fn restore<B: StorageBackend>(store: &AdminStore<B>, id: Uuid) -> Result<CmdResult> {
    match lifecycle::restore::<_, EmailMessage>(store, CollectionFile::Emails, id)? {
        Some(email) => {
            audit::record(store, "Email restored", &email.subject);
            let mut result = CmdResult::with_message(CmdMessage::success(format!(
                "Email restored: {}",
                email.subject
            )));
            result.affected_ids.push(id);
            Ok(result)
        }
        None => Ok(CmdResult::with_message(CmdMessage::info(format!(
            "No email with id {}; nothing to do",
            id
        )))),
    }
}

pub fn purge<B: StorageBackend>(store: &AdminStore<B>, id: Uuid) -> Result<CmdResult> {
    match lifecycle::purge::<_, EmailMessage>(store, CollectionFile::Emails, id)? {
        Some(email) => {
            audit::record(store, "Email permanently deleted", &email.subject);
            let mut result = CmdResult::with_message(CmdMessage::success(format!(
                "Email permanently deleted: {}",
                email.subject
            )));
            result.affected_ids.push(id);
            Ok(result)
        }
        None => Ok(CmdResult::with_message(CmdMessage::info(format!(
            "No email with id {}; nothing to do",
            id
        )))),
    }
}

pub fn restore_all<B: StorageBackend>(store: &AdminStore<B>) -> Result<CmdResult> {
    let count = lifecycle::restore_all::<_, EmailMessage>(store, CollectionFile::Emails)?;
    if count > 0 {
        audit::record(store, "Emails restored from trash", &count.to_string());
    }
    Ok(CmdResult::with_message(CmdMessage::success(format!(
        "Restored {} email(s) from trash",
        count
    ))))
}
