use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown report format: {0} (expected table, list or json)")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
