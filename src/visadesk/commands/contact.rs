//! Contact-form intake. Validation failures come back as an error-level
//! message rather than an `Err` — the form re-renders, nothing throws. The
//! operator notification is best-effort: the stored message is the source
//! of truth, and a delivery failure only downgrades to a warning.

use crate::audit;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::external::{ContactNotice, Mailer};
use crate::model::EmailMessage;
use crate::store::{AdminStore, CollectionFile, StorageBackend};

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub fn submit<B: StorageBackend>(
    store: &AdminStore<B>,
    mailer: &dyn Mailer,
    form: ContactForm,
) -> Result<CmdResult> {
    for (field, value) in [
        ("name", &form.name),
        ("email", &form.email),
        ("message", &form.message),
    ] {
        if value.trim().is_empty() {
            return Ok(CmdResult::with_message(CmdMessage::error(format!(
                "Missing required field: {}",
                field
            ))));
        }
    }

    let email = EmailMessage::new(
        form.name.clone(),
        form.email.clone(),
        form.subject.clone(),
        form.message.clone(),
    );
    let mut emails: Vec<EmailMessage> = store.load_records(CollectionFile::Emails)?;
    emails.push(email.clone());
    store.save_records(CollectionFile::Emails, &emails)?;
    audit::record(store, "Contact message received", &form.name);

    let mut result = CmdResult::with_message(CmdMessage::success(
        "Message received. We will get back to you soon.",
    ));
    result.affected_ids.push(email.id);

    let notice = ContactNotice {
        name: form.name,
        email: form.email,
        subject: form.subject,
        message: form.message,
    };
    if let Err(e) = mailer.send(&notice) {
        result.add_message(CmdMessage::warning(format!(
            "Operator notification failed: {}",
            e
        )));
    }

    Ok(result)
}
