pub mod error;
pub mod process;
pub mod reader;
pub mod types;

pub use error::{Result, StringTableError};
pub use reader::parse_string_table;
pub use types::{DEFAULT_LANGUAGE, LoadOptions, StringTable};
