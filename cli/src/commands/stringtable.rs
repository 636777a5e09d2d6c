use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;
use stringtable::LoadOptions;
use stringtable::process::stringtable_decode;

#[derive(Subcommand)]
pub enum StringTableCommands {
    /// Decode a stringtable XML to JSON
    Decode {
        /// Input stringtable.xml file
        input: PathBuf,
        /// Output JSON file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Language element to read the texts from
        #[arg(short, long, default_value = stringtable::DEFAULT_LANGUAGE)]
        language: String,
    },
}

pub fn handle(cmd: StringTableCommands) -> Result<()> {
    match cmd {
        StringTableCommands::Decode {
            input,
            output,
            language,
        } => stringtable_decode(&input, &output, &LoadOptions { language })?,
    }
    Ok(())
}
