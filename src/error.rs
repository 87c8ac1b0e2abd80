use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocstashError {
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Duplicate document: {0}")]
    DuplicateDocument(String),

    #[error("Record mismatch: {0}")]
    RecordMismatch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, DocstashError>;
