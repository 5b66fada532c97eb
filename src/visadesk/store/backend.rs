use crate::error::Result;

/// The ten persisted collections, each backed by one JSON file. The file
/// names double as the keys of the backup envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionFile {
    Services,
    Testimonials,
    HeroImages,
    AboutContent,
    Clients,
    Manifest,
    ClientBalances,
    Emails,
    SiteSettings,
    Logs,
}

impl CollectionFile {
    pub const ALL: [CollectionFile; 10] = [
        CollectionFile::Services,
        CollectionFile::Testimonials,
        CollectionFile::HeroImages,
        CollectionFile::AboutContent,
        CollectionFile::Clients,
        CollectionFile::Manifest,
        CollectionFile::ClientBalances,
        CollectionFile::Emails,
        CollectionFile::SiteSettings,
        CollectionFile::Logs,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            CollectionFile::Services => "services.json",
            CollectionFile::Testimonials => "testimonials.json",
            CollectionFile::HeroImages => "hero-images.json",
            CollectionFile::AboutContent => "about-content.json",
            CollectionFile::Clients => "clients.json",
            CollectionFile::Manifest => "manifest.json",
            CollectionFile::ClientBalances => "client-balances.json",
            CollectionFile::Emails => "emails.json",
            CollectionFile::SiteSettings => "site-settings.json",
            CollectionFile::Logs => "logs.json",
        }
    }

    /// Singletons hold one object rather than an array of records.
    pub fn is_singleton(&self) -> bool {
        matches!(
            self,
            CollectionFile::AboutContent | CollectionFile::SiteSettings
        )
    }
}

/// Abstract interface for raw collection I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `AdminStore` handles the "what" (typing, fail-soft reads).
pub trait StorageBackend {
    /// Read a collection's raw JSON text.
    /// Returns Ok(None) if the collection has never been written.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_file(&self, file: CollectionFile) -> Result<Option<String>>;

    /// Write a collection's raw JSON text, replacing prior content.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_file(&self, file: CollectionFile, contents: &str) -> Result<()>;
}
