//! Best-move command - Search a single position and report the choice

use anyhow::Result;
use clap::Parser;

use crate::{
    agents::DEFAULT_DEPTH,
    cli::output,
    game::GameState,
    othello::{Board, Coord, Disc, evaluate_count, evaluate_mask},
    search::{SearchOutcome, UNBOUNDED_DEPTH, minimax_search},
};

#[derive(Parser, Debug)]
#[command(about = "Search a position for the best move")]
pub struct BestMoveArgs {
    /// Board as 64 cell characters ('B', 'W', '.') read row by row,
    /// optionally ending with a _B/_W suffix naming the player to move
    pub board: String,

    /// Evaluation function: count or mask
    #[arg(long, short = 'e', default_value = "count")]
    pub evaluator: String,

    /// Search depth (-1 searches to the end of the game)
    #[arg(long, short = 'd', default_value_t = DEFAULT_DEPTH)]
    pub depth: i32,

    /// Print the board before searching
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;

    if args.verbose {
        output::print_board(&board);
        println!();
    }

    if board.is_terminal() {
        let black = board.count(Disc::Black);
        let white = board.count(Disc::White);
        println!("Game over: Black {black}, White {white}");
        return Ok(());
    }

    let depth_label = if args.depth == UNBOUNDED_DEPTH {
        "to the end of the game".to_string()
    } else {
        format!("{} plies deep", args.depth)
    };
    let spinner = output::create_spinner(&format!("Searching {depth_label}"));
    let outcome = search_with(&board, &args.evaluator, args.depth)?;
    spinner.finish_and_clear();

    match outcome.best_move {
        Some(mv) => {
            println!("Best move for {:?}: {}", board.player_to_move(), mv);
            println!("Search value: {:.3}", outcome.value);
        }
        None => println!("No move available at this depth"),
    }

    Ok(())
}

fn search_with(board: &Board, evaluator: &str, depth: i32) -> Result<SearchOutcome<Coord>> {
    match evaluator.to_lowercase().as_str() {
        "count" => Ok(minimax_search(board, depth, &evaluate_count)),
        "mask" => Ok(minimax_search(board, depth, &evaluate_mask)),
        other => Err(anyhow::anyhow!(
            "Unknown evaluator: '{other}'. Supported: count, mask"
        )),
    }
}
