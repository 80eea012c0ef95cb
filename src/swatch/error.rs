use crate::model::RecordId;
use crate::validate::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwatchError {
    #[error("Color not found: {0}")]
    NotFound(RecordId),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl SwatchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SwatchError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, SwatchError>;
