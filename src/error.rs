pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Applicant not found: {0}")]
    RecordNotFound(i64),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Applicant {0} has unsaved changes")]
    EditInProgress(i64),

    #[error("No applicant is open for editing")]
    NotEditing,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
