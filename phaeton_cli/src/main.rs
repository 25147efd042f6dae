use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::generate::GenerateSubcommands;

mod file_utils;
mod generate;
mod parsers;
mod solve;
mod solve_dataset;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one instance file and write the submission plan
    Solve {
        #[command(flatten)]
        args: solve::SolveArgs,
    },
    /// Solve every instance of a directory and write a score report
    SolveDataset {
        #[command(flatten)]
        args: solve_dataset::SolveDatasetArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Solve { args } => solve::run(args),
        Commands::SolveDataset { args } => solve_dataset::run(args),
        Commands::Generate { commands } => generate::run(commands),
    }
}
