use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

mod commands;

use commands::params::ParamsCommands;
use commands::report::ReportCommands;
use commands::stringtable::StringTableCommands;

#[derive(Parser)]
#[command(name = "mission-params")]
#[command(about = "CLI for mission description.ext params and stringtables", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info is the default, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Params Operations (Decode/Report)
    #[command(subcommand)]
    Params(ParamsCommands),
    /// Stringtable Operations (Decode)
    #[command(subcommand)]
    Stringtable(StringTableCommands),
    /// Report Operations (Render)
    #[command(subcommand)]
    Report(ReportCommands),
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Warn;
    }
    match verbose {
        0 | 1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose, cli.quiet))
        .format_timestamp(None)
        .init();

    match cli.command {
        Commands::Params(cmd) => commands::params::handle(cmd)?,
        Commands::Stringtable(cmd) => commands::stringtable::handle(cmd)?,
        Commands::Report(cmd) => commands::report::handle(cmd)?,
    }

    Ok(())
}
