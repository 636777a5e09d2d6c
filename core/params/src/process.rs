use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use stringtable::LoadOptions;
use stringtable::process::load_string_table;

use crate::error::Result;
use crate::parse_params;
use crate::types::{Parameter, ParseOptions};

/// Reads a stringtable and a mission config from disk and parses the params.
pub fn parse_params_files(
    config: &Path,
    stringtable: &Path,
    options: &ParseOptions,
    load_options: &LoadOptions,
) -> Result<Vec<Parameter>> {
    let table = load_string_table(stringtable, load_options)?;
    let source = fs::read_to_string(config)?;
    parse_params(&source, &table, options)
}

pub fn params_decode(
    config: &Path,
    stringtable: &Path,
    output: &Option<PathBuf>,
    options: &ParseOptions,
    load_options: &LoadOptions,
) -> Result<()> {
    // Decode description.ext Params -> JSON
    let params = parse_params_files(config, stringtable, options, load_options)?;

    let out_path = match output {
        Some(p) => p.clone(),
        None => config.with_extension("json"),
    };

    let json = serde_json::to_string_pretty(&params)?;
    fs::write(&out_path, json)?;
    info!("Decoded {} params to {:?}", params.len(), out_path);
    Ok(())
}
