use thiserror::Error;

#[derive(Error, Debug)]
pub enum StringTableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("XML parse error: {0}")]
    Xml(String),
    #[error("Malformed stringtable: {0}")]
    Malformed(String),
    #[error("Couldn't find \"{0}\" in the stringtable!")]
    MissingKey(String),
}

pub type Result<T> = std::result::Result<T, StringTableError>;
