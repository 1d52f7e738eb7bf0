use thiserror::Error;

/// Application-wide error type - single point of truth
///
/// Only the transaction loaders and the CLI surface this type. Decoding of
/// on-chain data never fails with it; malformed artifacts are dropped or
/// reported as cenotaphs instead.
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transaction JSON decoding
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Hex input decoding
    #[error("Hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Consensus-encoded transaction decoding
    #[error("Transaction decode error: {0}")]
    Consensus(#[from] bitcoin::consensus::encode::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input that decodes but is not a usable transaction
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
