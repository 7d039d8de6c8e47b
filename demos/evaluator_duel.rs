//! Demonstration of the two bundled Othello evaluators
//!
//! This example shows:
//! - A single position that the heuristics read in opposite ways
//! - How the chosen move and its value shift with search depth
//! - A head-to-head match between a count agent and a mask agent

use advsearch::arena::{MatchConfig, run_match};
use advsearch::othello::{Board, Disc, evaluate_count, evaluate_mask};
use advsearch::{MinimaxAgent, minimax_search};

/// Black holds the top-left corner but trails six discs.
const CORNER_POSITION: &str = concat!(
    "BWWW....",
    ".WW.....",
    ".WW.....",
    "........",
    "........",
    "........",
    "........",
    "........",
    "_B",
);

fn main() {
    println!("Othello evaluator duel");
    println!("======================");
    println!();

    println!("PART 1: ONE POSITION, TWO OPINIONS");
    println!("──────────────────────────────────");
    demonstrate_scoring();
    println!();

    println!("PART 2: THE SAME POSITION AT DIFFERENT DEPTHS");
    println!("─────────────────────────────────────────────");
    demonstrate_depths();
    println!();

    println!("PART 3: HEAD TO HEAD");
    println!("────────────────────");
    demonstrate_match();
}

fn demonstrate_scoring() {
    let board = Board::from_string(CORNER_POSITION).unwrap();
    println!("{board}");
    println!();

    println!("Scores for Black:");
    println!("  disc count:  {:>8.1}", evaluate_count(&board, Disc::Black));
    println!("  weight mask: {:>8.1}", evaluate_mask(&board, Disc::Black));
    println!();
    println!("The count sees Black six discs behind; the mask sees the");
    println!("corner and the poisoned squares around it and calls the");
    println!("position clearly good for Black.");
}

fn demonstrate_depths() {
    let board = Board::from_string(CORNER_POSITION).unwrap();

    for depth in [1, 3, 5] {
        let count = minimax_search(&board, depth, &evaluate_count);
        let mask = minimax_search(&board, depth, &evaluate_mask);
        println!("Depth {depth}:");
        report("count", &count);
        report("mask", &mask);
    }
}

fn report(label: &str, outcome: &advsearch::SearchOutcome<advsearch::othello::Coord>) {
    match outcome.best_move {
        Some(mv) => println!("  {label:6} plays {mv}, value {:+.1}", outcome.value),
        None => println!("  {label:6} has no move"),
    }
}

fn demonstrate_match() {
    let config = MatchConfig {
        num_games: 4,
        seed: Some(7),
        alternate_colors: true,
    };
    let mut count_agent = MinimaxAgent::new("count".to_string(), evaluate_count, 3);
    let mut mask_agent = MinimaxAgent::new("mask".to_string(), evaluate_mask, 3);

    println!("Four games at depth 3, colours alternating:");
    let stats = run_match(&config, &mut count_agent, &mut mask_agent, |index, record| {
        println!(
            "  game {}: {} (B) vs {} (W), final score {} - {}",
            index + 1,
            record.black,
            record.white,
            record.score.0,
            record.score.1
        );
    })
    .expect("match should run to completion");

    println!();
    println!(
        "{}: {} wins, {} draws, {} losses against {}",
        stats.first_agent, stats.wins, stats.draws, stats.losses, stats.second_agent
    );
    println!("Average margin: {:+.1} discs", stats.average_margin);
}
