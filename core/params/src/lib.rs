pub mod assembler;
pub mod error;
pub mod extractor;
pub mod filter;
pub mod layout;
pub mod process;
pub mod scanner;
pub mod types;

pub use error::{BlockAnchor, ParamsError, Result};
pub use types::{
    DEFAULT_PLATFORM_TAG, ParamValue, Parameter, ParseOptions, UNKNOWN_VALUE_LABEL,
};

use log::info;
use stringtable::StringTable;

use crate::extractor::Extractor;
use crate::filter::DirectiveFilter;

/// Parses the `class Params` block of a mission config source.
///
/// Runs layout -> scan -> directive filter -> field extraction -> assembly.
/// Any error aborts the whole parse; there is no partial result.
pub fn parse_params(
    source: &str,
    table: &StringTable,
    options: &ParseOptions,
) -> Result<Vec<Parameter>> {
    let lines = layout::normalize(source);
    let range = scanner::locate(&lines)?;

    let mut filter = DirectiveFilter::new(&options.platform_tag);
    let mut extractor = Extractor::new(table);
    for line in range.slice(&lines) {
        if filter.accept(line) {
            extractor.feed(line)?;
        }
    }

    let params = assembler::assemble(extractor.finish())?;
    info!("Parsed {} parameters", params.len());
    Ok(params)
}
