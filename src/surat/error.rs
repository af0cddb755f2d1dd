use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuratError {
    #[error("Invalid document name: {0}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Letter number already registered: {0}")]
    DuplicateNumber(String),

    #[error("Row {row} is out of range (register holds {len} letters)")]
    OutOfRange { row: usize, len: usize },

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, SuratError>;
