use thiserror::Error;

pub type Result<T> = std::result::Result<T, JournalError>;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid trade data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("journal API returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("trade {0} not found")]
    NotFound(String),

    #[error("configuration: {0}")]
    Config(String),

    #[error("invalid filter: {0}")]
    Filter(String),
}
