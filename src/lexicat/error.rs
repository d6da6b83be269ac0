use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexicatError {
    #[error("Index {index} is out of range (length {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("The list is empty")]
    EmptyList,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LexicatError>;
