use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherBreakError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Table Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Malformed model data: {0}")]
    MalformedModel(String),

    #[error("Empty input: {0}")]
    EmptyInput(&'static str),

    #[error("Invalid key: {0}")]
    InvalidKey(&'static str),

    #[error("Insufficient ciphertext: need at least {min} letters, got {got}")]
    InsufficientCiphertext { min: usize, got: usize },
}

pub type CbResult<T> = Result<T, CipherBreakError>;
