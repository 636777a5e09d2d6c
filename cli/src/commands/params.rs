use anyhow::Result;
use clap::{Args, Subcommand};
use params::ParseOptions;
use params::process::{params_decode, parse_params_files};
use report::ReportFormat;
use report::process::write_report;
use std::path::PathBuf;
use stringtable::LoadOptions;

#[derive(Args)]
pub struct SourceArgs {
    /// Mission config file containing `class Params` (description.ext)
    config: PathBuf,
    /// Stringtable XML used to resolve `$STR_` references
    #[arg(short, long)]
    stringtable: PathBuf,
    /// Platform tag whose `#ifdef` regions are processed
    #[arg(long, default_value = params::DEFAULT_PLATFORM_TAG)]
    platform: String,
    /// Language element to read the stringtable texts from
    #[arg(short, long, default_value = stringtable::DEFAULT_LANGUAGE)]
    language: String,
}

impl SourceArgs {
    fn options(&self) -> (ParseOptions, LoadOptions) {
        (
            ParseOptions {
                platform_tag: self.platform.clone(),
            },
            LoadOptions {
                language: self.language.clone(),
            },
        )
    }
}

#[derive(Subcommand)]
pub enum ParamsCommands {
    /// Decode mission params to JSON
    Decode {
        #[command(flatten)]
        source: SourceArgs,
        /// Output JSON file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decode mission params and render them as a report
    Report {
        #[command(flatten)]
        source: SourceArgs,
        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Report format: table, list or json
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

pub fn handle(cmd: ParamsCommands) -> Result<()> {
    match cmd {
        ParamsCommands::Decode { source, output } => {
            let (options, load_options) = source.options();
            params_decode(
                &source.config,
                &source.stringtable,
                &output,
                &options,
                &load_options,
            )?;
        }
        ParamsCommands::Report {
            source,
            output,
            format,
        } => {
            let format: ReportFormat = format.parse()?;
            let (options, load_options) = source.options();
            let params =
                parse_params_files(&source.config, &source.stringtable, &options, &load_options)?;
            write_report(&params, format, &source.config, &output)?;
        }
    }
    Ok(())
}
