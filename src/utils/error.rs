// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("I/O error reading document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode PDF: {0}")]
    Decode(String),

    #[error("Failed to parse page JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document yielded no extractable text: {0}")]
    NoText(String),

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid pattern for '{name}': {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("Role policy NAME_MATCH requires a non-blank company_name")]
    MissingCompanyName,

    #[error("window_radius must be positive")]
    InvalidWindowRadius,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Unknown bank '{name}' (known banks: {known})")]
    UnknownBank { name: String, known: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Document could not be read: {0}")]
    Document(#[from] DocumentError),

    #[error("Extraction setup failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Policy evaluation failed: {0}")]
    Policy(#[from] PolicyError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
