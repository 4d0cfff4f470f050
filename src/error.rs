use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("SOP date is required")]
    MissingSop,

    #[error("Invalid SOP date '{0}' (expected YYYY-MM-DD)")]
    InvalidSop(String),

    #[error("Milestone '{0}' falls outside the supported calendar range")]
    DateOutOfRange(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
