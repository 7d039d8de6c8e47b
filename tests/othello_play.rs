//! End-to-end Othello behaviour: the evaluators, the search, and match
//! play exercised against the real game rather than synthetic trees.

use advsearch::arena::{MatchConfig, run_match};
use advsearch::othello::{Board, Coord, Disc, evaluate_count, evaluate_mask};
use advsearch::{
    Agent, GameState, MinimaxAgent, RandomAgent, UNBOUNDED_DEPTH, minimax_move, minimax_search,
};

#[test]
fn evaluators_rank_terminal_outcomes() {
    let win_for_white =
        Board::from_string(&format!("{}{}", "W".repeat(33), "B".repeat(31))).unwrap();
    let level_board = Board::from_string(&format!("{}{}", "W".repeat(32), "B".repeat(32))).unwrap();
    assert!(win_for_white.is_terminal());
    assert!(level_board.is_terminal());

    let evaluators: [fn(&Board, Disc) -> f64; 2] = [evaluate_count, evaluate_mask];
    for evaluate in evaluators {
        let win = evaluate(&win_for_white, Disc::White);
        let draw = evaluate(&level_board, Disc::White);
        let loss = evaluate(&win_for_white, Disc::Black);

        // Finished games score exactly +/-1, not the raw material margin.
        assert_eq!(win, 1.0);
        assert_eq!(draw, 0.0);
        assert_eq!(loss, -1.0);
    }
}

#[test]
fn opening_move_is_the_first_of_the_equal_captures() {
    let board = Board::new();

    // All four openings are mirror images, so both heuristics score them
    // equally and the row-major tie-break decides.
    assert_eq!(
        minimax_move(&board, 1, &evaluate_count),
        Some(Coord::new(3, 2))
    );
    assert_eq!(
        minimax_move(&board, 1, &evaluate_mask),
        Some(Coord::new(3, 2))
    );
}

#[test]
fn endgame_search_sees_the_forced_win() {
    let board = Board::from_string(concat!(
        "WB.....W",
        ".......W",
        ".......W",
        ".......W",
        ".......W",
        ".......W",
        ".......B",
        "........",
        "_W",
    ))
    .unwrap();

    let outcome = minimax_search(&board, UNBOUNDED_DEPTH, &evaluate_count);

    assert_eq!(outcome.best_move, Some(Coord::new(2, 0)));
    assert_eq!(outcome.value, 1.0);
}

#[test]
fn random_playouts_terminate_with_consistent_state() {
    let mut agent = RandomAgent::with_seed("walker".to_string(), 404);
    let mut board = Board::new();
    let mut plies = 0;

    while !board.is_terminal() {
        let moves = board.legal_moves();
        assert!(!moves.is_empty(), "non-terminal position offered no moves");

        let before = board.count(Disc::Black) + board.count(Disc::White);
        let mv = agent.select_move(&board).unwrap();
        board = board.make_move(mv).unwrap();
        let after = board.count(Disc::Black) + board.count(Disc::White);

        assert_eq!(after, before + 1, "a move must place exactly one disc");
        plies += 1;
        assert!(plies <= 60, "game ran past the number of empty squares");
    }

    assert!(board.legal_moves().is_empty());
    let (black, white) = (board.count(Disc::Black), board.count(Disc::White));
    match board.winner() {
        Some(Disc::Black) => assert!(black > white),
        Some(Disc::White) => assert!(white > black),
        None => assert_eq!(black, white),
    }
}

#[test]
fn shallow_search_beats_the_random_baseline() {
    let config = MatchConfig {
        num_games: 10,
        seed: Some(5),
        alternate_colors: true,
    };
    let mut searcher = MinimaxAgent::new("minimax".to_string(), evaluate_count, 3);
    let mut baseline = RandomAgent::with_seed("random".to_string(), 0);

    let stats = run_match(&config, &mut searcher, &mut baseline, |_, _| {}).unwrap();

    assert_eq!(stats.total_games, 10);
    assert_eq!(stats.wins + stats.draws + stats.losses, 10);
    assert!(
        stats.wins > stats.losses,
        "depth-3 search lost a 10 game match to uniform random play ({} wins, {} losses)",
        stats.wins,
        stats.losses
    );
}
