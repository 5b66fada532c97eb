use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum VisadeskError {
    #[error("Record not found: {0}")]
    NotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),

    #[error("Backup is not valid JSON: {0}")]
    InvalidBackup(String),

    #[error("Backup is missing required data: no {0} section")]
    MissingRequiredData(&'static str),

    #[error("Restore failed while writing {file}: {source} (collections written before it were kept)")]
    RestoreWrite {
        file: &'static str,
        source: Box<VisadeskError>,
    },
}

pub type Result<T> = std::result::Result<T, VisadeskError>;
