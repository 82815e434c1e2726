use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    // Conversion errors
    #[error("No resolver matches document root: {0}")]
    NoMatchingDialect(String),

    #[error("Malformed XML document: {0}")]
    MalformedDocument(#[from] roxmltree::Error),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),

    // Output errors
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type FeedResult<T> = Result<T, FeedError>;
