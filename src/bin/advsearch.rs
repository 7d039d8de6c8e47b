//! Adversarial search CLI - minimax game playing toolkit
//!
//! This CLI provides:
//! - Matches between search-backed agents and a random baseline
//! - Single-position analysis with either bundled evaluator

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "advsearch")]
#[command(version, about = "Depth-bounded minimax game playing toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a match between two agents
    Play(advsearch::cli::commands::play::PlayArgs),

    /// Search a position for the best move
    BestMove(advsearch::cli::commands::best_move::BestMoveArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => advsearch::cli::commands::play::execute(args),
        Commands::BestMove(args) => advsearch::cli::commands::best_move::execute(args),
    }
}
