use thiserror::Error;

/// Errors raised inside the quote builder.
///
/// None of these reach the visitor: the persistence adapter converts storage
/// and decode failures into log events and falls back to an empty or
/// unchanged collection.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("storage error for key {key:?}: {message}")]
    Storage { key: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported persisted layout version {found} (newest known: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QuoteError>;
