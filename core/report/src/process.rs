use log::info;
use params::Parameter;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::render::{ReportFormat, render};

/// Renders `params` and writes the document, returning the path written.
pub fn write_report(
    params: &[Parameter],
    format: ReportFormat,
    default_path: &Path,
    output: &Option<PathBuf>,
) -> Result<PathBuf> {
    let document = render(params, format)?;

    let out_path = match output {
        Some(p) => p.clone(),
        None => default_path.with_extension(format.extension()),
    };

    fs::write(&out_path, document)?;
    info!("Rendered {} params to {:?}", params.len(), out_path);
    Ok(out_path)
}

pub fn report_render(input: &Path, output: &Option<PathBuf>, format: ReportFormat) -> Result<()> {
    // Render params JSON -> report document
    let content = fs::read_to_string(input)?;
    let params: Vec<Parameter> = serde_json::from_str(&content)?;
    write_report(&params, format, input, output)?;
    Ok(())
}
