pub mod error;
pub mod process;
pub mod render;

pub use error::{ReportError, Result};
pub use render::{ReportFormat, render, render_list, render_table};
