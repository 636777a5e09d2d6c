use std::fmt;
use stringtable::StringTableError;
use thiserror::Error;

/// Which end of the `class Params` block could not be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockAnchor {
    Declaration,
    Close,
}

impl fmt::Display for BlockAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockAnchor::Declaration => write!(f, "`class Params` declaration"),
            BlockAnchor::Close => write!(f, "closing `}};`"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ParamsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    StringTable(#[from] StringTableError),
    #[error("Params block not found: missing {0}")]
    BlockNotFound(BlockAnchor),
    #[error("Some \"{field}\" for \"{parameter}\" could not be parsed as a number: {token:?}")]
    NumericParse {
        field: &'static str,
        parameter: String,
        token: String,
    },
    #[error("Parameter #{index} has no \"{field}\"")]
    IncompleteParameter { index: usize, field: &'static str },
}

pub type Result<T> = std::result::Result<T, ParamsError>;
