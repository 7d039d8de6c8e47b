//! Play command - Pit two agents against each other

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    agents::{Agent, DEFAULT_DEPTH, MinimaxAgent, RandomAgent},
    arena::{MatchConfig, run_match},
    cli::output,
    othello::{Board, evaluate_count, evaluate_mask},
};

#[derive(Parser, Debug)]
#[command(about = "Play a match between two agents")]
pub struct PlayArgs {
    /// First agent, holding Black in game one: random, count or mask
    #[arg(default_value = "count")]
    pub first: String,

    /// Second agent: random, count or mask
    #[arg(default_value = "random")]
    pub second: String,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 10)]
    pub games: usize,

    /// Search depth for minimax agents (-1 searches to the end)
    #[arg(long, short = 'd', default_value_t = DEFAULT_DEPTH)]
    pub depth: i32,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep the first agent on Black instead of swapping colours each game
    #[arg(long)]
    pub fixed_colors: bool,

    /// Export match statistics to a JSON file
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut first = create_agent(&args.first, args.depth, 1)?;
    let mut second = create_agent(&args.second, args.depth, 2)?;

    let config = MatchConfig {
        num_games: args.games,
        seed: args.seed,
        alternate_colors: !args.fixed_colors,
    };

    output::print_section("Match Configuration");
    output::print_kv("First agent", first.name());
    output::print_kv("Second agent", second.name());
    output::print_kv("Games", &args.games.to_string());
    output::print_kv("Depth", &args.depth.to_string());
    if let Some(seed) = args.seed {
        output::print_kv("Seed", &seed.to_string());
    }

    let progress = output::create_match_progress(args.games as u64);
    let stats = run_match(&config, first.as_mut(), second.as_mut(), |_, record| {
        progress.set_message(format!("last game {}-{}", record.score.0, record.score.1));
        progress.inc(1);
    })?;
    progress.finish_and_clear();

    output::print_section("Match Results");
    output::print_kv("Total games", &stats.total_games.to_string());
    output::print_kv(
        "Wins",
        &format!("{} ({:.1}%)", stats.wins, stats.win_rate * 100.0),
    );
    output::print_kv(
        "Draws",
        &format!("{} ({:.1}%)", stats.draws, stats.draw_rate * 100.0),
    );
    output::print_kv(
        "Losses",
        &format!("{} ({:.1}%)", stats.losses, stats.loss_rate * 100.0),
    );
    output::print_kv(
        "Average margin",
        &format!("{:+.1} discs", stats.average_margin),
    );

    if let Some(path) = &args.output {
        stats.save(path)?;
        println!("\n✓ Match statistics exported to: {}", path.display());
    }

    Ok(())
}

/// Build an agent from a command-line spec.
///
/// `index` distinguishes the two sides in names and transcripts.
pub fn create_agent(spec: &str, depth: i32, index: usize) -> Result<Box<dyn Agent<Board>>> {
    match spec.to_lowercase().as_str() {
        "random" => Ok(Box::new(RandomAgent::new(format!("Random-{index}")))),
        "count" => Ok(Box::new(MinimaxAgent::new(
            format!("Count-{index}"),
            evaluate_count,
            depth,
        ))),
        "mask" => Ok(Box::new(MinimaxAgent::new(
            format!("Mask-{index}"),
            evaluate_mask,
            depth,
        ))),
        other => Err(anyhow::anyhow!(
            "Unknown agent type: '{other}'. Supported: random, count, mask"
        )),
    }
}
