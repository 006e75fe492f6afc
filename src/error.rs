use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid difficulty: {0}")]
    InvalidDifficulty(String),
    #[error("invalid difficulty tier index: {0}")]
    InvalidTierIndex(usize),
    #[error("console io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON encode failed: {0}")]
    Json(#[from] serde_json::Error),
}
