use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::reader::parse_string_table;
use crate::types::{LoadOptions, StringTable};

pub fn load_string_table(input: &Path, options: &LoadOptions) -> Result<StringTable> {
    let content = fs::read_to_string(input)?;
    let table = parse_string_table(&content, options)?;
    info!("Loaded {} stringtable entries from {:?}", table.len(), input);
    Ok(table)
}

pub fn stringtable_decode(
    input: &Path,
    output: &Option<PathBuf>,
    options: &LoadOptions,
) -> Result<()> {
    // Decode stringtable XML -> JSON
    let table = load_string_table(input, options)?;

    let out_path = match output {
        Some(p) => p.clone(),
        None => input.with_extension("json"),
    };

    let json = serde_json::to_string_pretty(&table)?;
    fs::write(&out_path, json)?;
    info!("Decoded stringtable to {:?}", out_path);
    Ok(())
}
