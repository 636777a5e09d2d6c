use anyhow::Result;
use clap::Subcommand;
use report::ReportFormat;
use report::process::report_render;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Render a params JSON file as a report
    Render {
        /// Input params JSON file (generated by `params decode`)
        input: PathBuf,
        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Report format: table, list or json
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

pub fn handle(cmd: ReportCommands) -> Result<()> {
    match cmd {
        ReportCommands::Render {
            input,
            output,
            format,
        } => {
            let format: ReportFormat = format.parse()?;
            report_render(&input, &output, format)?;
        }
    }
    Ok(())
}
