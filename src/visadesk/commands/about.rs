use crate::audit;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::external::{resolve_image, ImageHost};
use crate::model::AboutContent;
use crate::store::{AdminStore, CollectionFile, StorageBackend};

#[derive(Debug, Clone, Default)]
pub struct AboutUpdate {
    pub title: Option<String>,
    pub paragraph1: Option<String>,
    pub paragraph2: Option<String>,
    pub image: Option<String>,
}

pub fn get<B: StorageBackend>(store: &AdminStore<B>) -> Result<AboutContent> {
    store.load_singleton(CollectionFile::AboutContent)
}

pub fn set<B: StorageBackend>(
    store: &AdminStore<B>,
    images: &dyn ImageHost,
    update: AboutUpdate,
) -> Result<CmdResult> {
    let mut about: AboutContent = store.load_singleton(CollectionFile::AboutContent)?;

    if let Some(title) = update.title {
        about.title = title;
    }
    if let Some(paragraph1) = update.paragraph1 {
        about.paragraph1 = paragraph1;
    }
    if let Some(paragraph2) = update.paragraph2 {
        about.paragraph2 = paragraph2;
    }
    if let Some(image) = update.image {
        about.image = resolve_image(images, &image, "about");
    }

    store.save_singleton(CollectionFile::AboutContent, &about)?;
    audit::record(store, "About content updated", &about.title);

    Ok(CmdResult::with_message(CmdMessage::success(
        "About content updated",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::InlineImageHost;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn defaults_before_first_write() {
        let store = AdminStore::new(MemBackend::new());
        let about = get(&store).unwrap();
        assert_eq!(about, AboutContent::default());
    }

    #[test]
    fn set_patches_only_given_fields() {
        let store = AdminStore::new(MemBackend::new());
        set(
            &store,
            &InlineImageHost,
            AboutUpdate {
                title: Some("Who we are".into()),
                paragraph1: Some("Fifteen years of visa guidance.".into()),
                ..Default::default()
            },
        )
        .unwrap();
        set(
            &store,
            &InlineImageHost,
            AboutUpdate {
                paragraph2: Some("From Yangon to the world.".into()),
                ..Default::default()
            },
        )
        .unwrap();

        let about = get(&store).unwrap();
        assert_eq!(about.title, "Who we are");
        assert_eq!(about.paragraph1, "Fifteen years of visa guidance.");
        assert_eq!(about.paragraph2, "From Yangon to the world.");
    }
}
