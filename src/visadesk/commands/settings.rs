use crate::audit;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::external::{resolve_image, ImageHost};
use crate::model::SiteSettings;
use crate::store::{AdminStore, CollectionFile, StorageBackend};

#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub logo: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<String>,
}

pub fn get<B: StorageBackend>(store: &AdminStore<B>) -> Result<SiteSettings> {
    store.load_singleton(CollectionFile::SiteSettings)
}

pub fn update<B: StorageBackend>(
    store: &AdminStore<B>,
    images: &dyn ImageHost,
    update: SettingsUpdate,
) -> Result<CmdResult> {
    let mut settings: SiteSettings = store.load_singleton(CollectionFile::SiteSettings)?;

    if let Some(logo) = update.logo {
        settings.logo = resolve_image(images, &logo, "logo");
    }
    if let Some(username) = update.username {
        settings.username = username;
    }
    if let Some(password) = update.password {
        settings.password = password;
    }
    if let Some(avatar) = update.avatar {
        settings.avatar = resolve_image(images, &avatar, "avatar");
    }

    store.save_singleton(CollectionFile::SiteSettings, &settings)?;
    audit::record(store, "Site settings updated", &settings.username);

    Ok(CmdResult::with_message(CmdMessage::success(
        "Site settings updated",
    )))
}

/// Plaintext credential compare against the settings singleton. Session
/// handling belongs to the hosting framework; this only answers yes or no,
/// and logs the attempt either way.
pub fn authenticate<B: StorageBackend>(
    store: &AdminStore<B>,
    username: &str,
    password: &str,
) -> Result<bool> {
    let settings: SiteSettings = store.load_singleton(CollectionFile::SiteSettings)?;
    let ok = settings.username == username && settings.password == password;
    if ok {
        audit::record(store, "Admin login", username);
    } else {
        audit::record(store, "Failed login attempt", username);
    }
    Ok(ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::InlineImageHost;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn update_patches_only_given_fields() {
        let store = AdminStore::new(MemBackend::new());
        update(
            &store,
            &InlineImageHost,
            SettingsUpdate {
                username: Some("operator".into()),
                ..Default::default()
            },
        )
        .unwrap();

        let settings = get(&store).unwrap();
        assert_eq!(settings.username, "operator");
        // Untouched field keeps its default
        assert_eq!(settings.password, "admin");
    }

    #[test]
    fn authenticate_compares_both_fields() {
        let store = AdminStore::new(MemBackend::new());
        update(
            &store,
            &InlineImageHost,
            SettingsUpdate {
                username: Some("operator".into()),
                password: Some("hunter2".into()),
                ..Default::default()
            },
        )
        .unwrap();

        assert!(authenticate(&store, "operator", "hunter2").unwrap());
        assert!(!authenticate(&store, "operator", "wrong").unwrap());
        assert!(!authenticate(&store, "someone", "hunter2").unwrap());
    }

    #[test]
    fn login_attempts_are_logged() {
        let store = AdminStore::new(MemBackend::new());
        authenticate(&store, "admin", "admin").unwrap();
        authenticate(&store, "admin", "nope").unwrap();

        let logs = crate::audit::list_all(&store).unwrap();
        assert_eq!(logs[0].action, "Failed login attempt");
        assert_eq!(logs[1].action, "Admin login");
    }
}
