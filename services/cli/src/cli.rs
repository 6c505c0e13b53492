use crate::commands::{
    self, DedupArgs, ExportArgs, ListArgs, RecalcArgs, ShowArgs, StatsArgs,
};
use clap::{Parser, Subcommand};
use ideaboard::config::AppConfig;
use ideaboard::error::AppError;
use ideaboard::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "ideaboard",
    about = "Browse, score, and maintain the startup idea catalog from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print catalog summary statistics (default command)
    Stats(StatsArgs),
    /// List ideas with filtering, sorting, and pagination
    List(ListArgs),
    /// Show one idea with its full score breakdown
    Show(ShowArgs),
    /// Recompute every score and rationale, then rewrite the dataset
    Recalc(RecalcArgs),
    /// Remove duplicate records and renumber ids
    Dedup(DedupArgs),
    /// Export the filtered, sorted result set as CSV
    Export(ExportArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli
        .command
        .unwrap_or_else(|| Command::Stats(StatsArgs::default()))
    {
        Command::Stats(args) => commands::run_stats(args, &config),
        Command::List(args) => commands::run_list(args, &config),
        Command::Show(args) => commands::run_show(args, &config),
        Command::Recalc(args) => commands::run_recalc(args, &config),
        Command::Dedup(args) => commands::run_dedup(args, &config),
        Command::Export(args) => commands::run_export(args, &config),
    }
}
