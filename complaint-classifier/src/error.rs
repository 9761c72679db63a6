use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Reference data error: {0}")]
    ReferenceData(String),

    #[error("Reference data parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Reference data read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Primary classifier unavailable: {0}")]
    Unavailable(String),

    #[error("Unknown taxonomy code: {0}")]
    UnknownCode(String),

    #[error("Effective category already overridden")]
    AlreadyOverridden,
}

pub type ClassifierResult<T> = Result<T, ClassifierError>;
