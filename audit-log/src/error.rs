use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Audit entry validation failed: {0}")]
    Validation(String),

    #[error("Audit serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type AuditResult<T> = Result<T, AuditError>;
