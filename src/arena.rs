//! Match runner for pitting agents against each other
//!
//! Plays complete Othello games between two [`Agent`]s, keeps per-game
//! transcripts, and aggregates results over a whole match. Statistics are
//! always counted from the first agent's side, whatever colour it holds
//! in a particular game.

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    agents::Agent,
    game::GameState,
    othello::{Board, Coord, Disc},
};

/// Match configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: usize,

    /// Random seed handed to the agents before the match starts
    pub seed: Option<u64>,

    /// Whether the agents swap colours after every game
    pub alternate_colors: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            seed: None,
            alternate_colors: true,
        }
    }
}

/// Transcript of a single finished game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Name of the agent that held Black
    pub black: String,

    /// Name of the agent that held White
    pub white: String,

    /// Moves in play order; forced passes do not appear
    pub moves: Vec<Coord>,

    /// Winning colour, `None` for a draw
    pub winner: Option<Disc>,

    /// Final disc counts as (black, white)
    pub score: (usize, usize),
}

/// Aggregate result of a match, counted from the first agent's side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchStats {
    /// Name of the first agent
    pub first_agent: String,

    /// Name of the second agent
    pub second_agent: String,

    /// Total games played
    pub total_games: usize,

    /// Games the first agent won
    pub wins: usize,

    /// Drawn games
    pub draws: usize,

    /// Games the first agent lost
    pub losses: usize,

    /// Win rate for the first agent
    pub win_rate: f64,

    /// Draw rate
    pub draw_rate: f64,

    /// Loss rate for the first agent
    pub loss_rate: f64,

    /// Average disc margin per game from the first agent's side
    pub average_margin: f64,

    /// Per-game transcripts in play order
    pub games: Vec<GameRecord>,
}

impl MatchStats {
    /// Create match statistics from raw counts and transcripts
    ///
    /// Transcripts are attributed to the first agent by name, so
    /// `first_agent` and `second_agent` must differ.
    pub fn new(
        first_agent: String,
        second_agent: String,
        wins: usize,
        draws: usize,
        losses: usize,
        games: Vec<GameRecord>,
    ) -> Self {
        let total_games = wins + draws + losses;
        let rate = |part: usize| {
            if total_games > 0 {
                part as f64 / total_games as f64
            } else {
                0.0
            }
        };

        let average_margin = if games.is_empty() {
            0.0
        } else {
            let total: i64 = games
                .iter()
                .map(|record| {
                    let (own, other) = if record.black == first_agent {
                        (record.score.0, record.score.1)
                    } else {
                        (record.score.1, record.score.0)
                    };
                    own as i64 - other as i64
                })
                .sum();
            total as f64 / games.len() as f64
        };

        Self {
            first_agent,
            second_agent,
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
            average_margin,
            games,
        }
    }

    /// Save statistics to a JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load statistics from a JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let stats = serde_json::from_reader(file)?;
        Ok(stats)
    }
}

/// Play a single game from the standard starting position.
pub fn play_game(
    black: &mut dyn Agent<Board>,
    white: &mut dyn Agent<Board>,
) -> Result<GameRecord> {
    play_game_from(&Board::new(), black, white)
}

/// Play a single game from `start` until the board reports the game over.
///
/// The board passes the turn itself when one side is stuck, so agents are
/// dispatched by the colour on turn rather than by strict alternation.
/// Every chosen move is validated; an agent returning an illegal move
/// aborts the game with its error.
pub fn play_game_from(
    start: &Board,
    black: &mut dyn Agent<Board>,
    white: &mut dyn Agent<Board>,
) -> Result<GameRecord> {
    let mut state = *start;
    let mut moves = Vec::new();

    while !state.is_terminal() {
        let mv = match state.player_to_move() {
            Disc::Black => black.select_move(&state)?,
            Disc::White => white.select_move(&state)?,
        };
        state = state.make_move(mv)?;
        moves.push(mv);
    }

    Ok(GameRecord {
        black: black.name().to_string(),
        white: white.name().to_string(),
        moves,
        winner: state.winner(),
        score: (state.count(Disc::Black), state.count(Disc::White)),
    })
}

/// Play a full match between two agents and gather statistics.
///
/// The first agent opens as Black; when `config.alternate_colors` is set
/// the colours swap after every game. A configured seed is re-derived per
/// game: before game `i` the first agent is seeded with `seed + 2i` and
/// the second with `seed + 2i + 1`, so the agents never mirror each other
/// and any single game can be replayed in isolation. `on_game` runs after
/// every game with the zero-based game index and its record, which is
/// where a progress display hooks in.
///
/// Statistics attribute games to the agents by name, so the two agents
/// need distinct names.
pub fn run_match(
    config: &MatchConfig,
    first: &mut dyn Agent<Board>,
    second: &mut dyn Agent<Board>,
    mut on_game: impl FnMut(usize, &GameRecord),
) -> Result<MatchStats> {
    let mut games = Vec::with_capacity(config.num_games);
    let mut wins = 0;
    let mut draws = 0;
    let mut losses = 0;

    for game_index in 0..config.num_games {
        if let Some(seed) = config.seed {
            let game_seed = seed.wrapping_add(2 * game_index as u64);
            first.set_rng_seed(game_seed)?;
            second.set_rng_seed(game_seed.wrapping_add(1))?;
        }

        let first_is_black = !config.alternate_colors || game_index.is_multiple_of(2);
        let record = if first_is_black {
            play_game(first, second)?
        } else {
            play_game(second, first)?
        };

        let first_colour = if first_is_black {
            Disc::Black
        } else {
            Disc::White
        };
        match record.winner {
            Some(winner) if winner == first_colour => wins += 1,
            Some(_) => losses += 1,
            None => draws += 1,
        }

        on_game(game_index, &record);
        games.push(record);
    }

    Ok(MatchStats::new(
        first.name().to_string(),
        second.name().to_string(),
        wins,
        draws,
        losses,
        games,
    ))
}
