//! wbcorpus CLI - Command-line interface for corpus preparation.
//!
//! This is the main entry point for the `wbcorpus` command-line tool.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use commands::{ExportCommand, StatsCommand, VocabCommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "wbcorpus")]
#[command(about = "Stream annotated Wikipedia corpora into labeled training records", long_about = None)]
#[command(version)]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a vocabulary from a dictionary file
    Vocab(VocabCommand),
    /// Stream a corpus into a prepared training file
    Export(ExportCommand),
    /// Count tokens, tags and mentions over corpus shards
    Stats(StatsCommand),
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Vocab(cmd) => commands::vocab::run(cmd)?,
        Commands::Export(cmd) => commands::export::run(cmd)?,
        Commands::Stats(cmd) => commands::stats::run(cmd)?,
    }

    Ok(())
}
