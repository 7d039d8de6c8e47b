//! Board state representation and move generation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::GameState;

/// Side length of the board.
pub const BOARD_SIZE: usize = 8;

/// The eight compass directions a capture line can run in, as (dx, dy).
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A disc colour; Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disc {
    Black,
    White,
}

impl Disc {
    /// Get the opposing colour
    pub fn opponent(self) -> Disc {
        match self {
            Disc::Black => Disc::White,
            Disc::White => Disc::Black,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Disc::Black => 'B',
            Disc::White => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Disc> {
        match c {
            'B' | 'b' => Some(Disc::Black),
            'W' | 'w' => Some(Disc::White),
            _ => None,
        }
    }
}

/// A board square addressed by column `x` and row `y`, both zero-based
/// from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Complete board state including cell contents and whose turn it is.
///
/// A state is 65 bytes (64 cells plus the player to move), so it implements
/// `Copy` and move application returns fresh successors.
///
/// Every `Board` this module hands out is normalized: the player to move
/// has at least one legal move unless the game is over. When a move leaves
/// the opponent without a reply, the turn passes straight back, so callers
/// never see an explicit pass move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Disc>; BOARD_SIZE]; BOARD_SIZE],
    to_move: Disc,
}

impl Board {
    /// Create the standard starting position with Black to move.
    pub fn new() -> Self {
        let mut cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        cells[3][3] = Some(Disc::White);
        cells[3][4] = Some(Disc::Black);
        cells[4][3] = Some(Disc::Black);
        cells[4][4] = Some(Disc::White);
        Board {
            cells,
            to_move: Disc::Black,
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 64 cell characters read row by row from
    /// the top-left ('B', 'W' or '.'; whitespace is filtered out) and may
    /// optionally end with a `_B` or `_W` suffix naming the player to move.
    /// Without a suffix, Black is assumed. The parsed position is then
    /// normalized, so the stated player only keeps the turn if they have a
    /// legal move.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The board part has fewer than 64 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - A `_` suffix names anything other than `B` or `W`
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (board_part, specified_turn) = Self::split_board_and_turn(&cleaned)?;
        let cells = Self::parse_cells(board_part, s)?;
        let to_move = specified_turn.unwrap_or(Disc::Black);
        Ok(Board { cells, to_move }.normalized())
    }

    fn split_board_and_turn(cleaned: &str) -> Result<(&str, Option<Disc>), crate::Error> {
        if let Some(idx) = cleaned.find('_') {
            let board = &cleaned[..idx];
            let suffix = &cleaned[idx + 1..];
            let player = Self::parse_player(suffix, cleaned)?;
            Ok((board, Some(player)))
        } else {
            Ok((cleaned, None))
        }
    }

    /// Helper: Parse 64 cells from the board part of an encoded string.
    fn parse_cells(
        board_part: &str,
        context: &str,
    ) -> Result<[[Option<Disc>; BOARD_SIZE]; BOARD_SIZE], crate::Error> {
        let chars: Vec<char> = board_part.chars().collect();
        let expected = BOARD_SIZE * BOARD_SIZE;
        if chars.len() < expected {
            return Err(crate::Error::InvalidBoardLength {
                expected,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (i, &c) in chars.iter().take(expected).enumerate() {
            cells[i / BOARD_SIZE][i % BOARD_SIZE] = match c {
                '.' => None,
                _ => Some(Disc::from_char(c).ok_or_else(|| {
                    crate::Error::InvalidCellCharacter {
                        character: c,
                        position: i,
                        context: context.to_string(),
                    }
                })?),
            };
        }

        Ok(cells)
    }

    /// Helper: Parse a player string ("B" or "W").
    fn parse_player(player_str: &str, context: &str) -> Result<Disc, crate::Error> {
        match player_str {
            "B" => Ok(Disc::Black),
            "W" => Ok(Disc::White),
            _ => Err(crate::Error::InvalidPlayerString {
                player: player_str.to_string(),
                context: context.to_string(),
            }),
        }
    }

    /// Get the disc at a square, or `None` for an empty square.
    pub fn get(&self, coord: Coord) -> Option<Disc> {
        self.cells[coord.y][coord.x]
    }

    /// Count the discs of one colour on the board.
    pub fn count(&self, disc: Disc) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(disc))
            .count()
    }

    /// Play a move for the player to move and return the resulting board.
    ///
    /// All bracketed opposing discs are flipped and the turn passes to the
    /// opponent, skipping them if they have no reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the square is off the board, occupied, or flips
    /// no discs.
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, coord: Coord) -> Result<Board, crate::Error> {
        if coord.x >= BOARD_SIZE || coord.y >= BOARD_SIZE {
            return Err(crate::Error::OffBoard {
                x: coord.x,
                y: coord.y,
            });
        }
        let flips = self.flips_for(coord, self.to_move);
        if flips.is_empty() {
            return Err(crate::Error::IllegalMove {
                x: coord.x,
                y: coord.y,
            });
        }
        Ok(self.with_move_applied(coord, &flips))
    }

    /// Canonical string representation, usable as a key and accepted back
    /// by [`from_string`].
    ///
    /// [`from_string`]: Board::from_string
    pub fn encode(&self) -> String {
        let mut s = String::with_capacity(BOARD_SIZE * BOARD_SIZE + 2);
        for row in &self.cells {
            for cell in row {
                s.push(match cell {
                    Some(disc) => disc.to_char(),
                    None => '.',
                });
            }
        }
        s.push('_');
        s.push(self.to_move.to_char());
        s
    }

    /// Legal squares for one colour regardless of whose turn it is, in
    /// row-major order from the top-left.
    fn moves_for(&self, player: Disc) -> Vec<Coord> {
        let mut moves = Vec::new();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let coord = Coord { x, y };
                if self.can_play(coord, player) {
                    moves.push(coord);
                }
            }
        }
        moves
    }

    fn can_play(&self, coord: Coord, player: Disc) -> bool {
        self.cells[coord.y][coord.x].is_none()
            && DIRECTIONS
                .iter()
                .any(|&(dx, dy)| !self.captured_run(coord, dx, dy, player).is_empty())
    }

    /// All discs `player` would flip by playing `coord`, across every
    /// direction. Empty when the square is occupied or captures nothing.
    fn flips_for(&self, coord: Coord, player: Disc) -> Vec<Coord> {
        if coord.x >= BOARD_SIZE || coord.y >= BOARD_SIZE || self.cells[coord.y][coord.x].is_some()
        {
            return Vec::new();
        }
        DIRECTIONS
            .iter()
            .flat_map(|&(dx, dy)| self.captured_run(coord, dx, dy, player))
            .collect()
    }

    /// The run of opposing discs starting next to `origin` in one direction,
    /// but only if it ends at one of `player`'s own discs. An empty square
    /// or the board edge breaks the run.
    fn captured_run(&self, origin: Coord, dx: isize, dy: isize, player: Disc) -> Vec<Coord> {
        let size = BOARD_SIZE as isize;
        let mut run = Vec::new();
        let mut x = origin.x as isize + dx;
        let mut y = origin.y as isize + dy;
        while (0..size).contains(&x) && (0..size).contains(&y) {
            match self.cells[y as usize][x as usize] {
                Some(disc) if disc == player => return run,
                Some(_) => run.push(Coord {
                    x: x as usize,
                    y: y as usize,
                }),
                None => return Vec::new(),
            }
            x += dx;
            y += dy;
        }
        Vec::new()
    }

    fn with_move_applied(&self, coord: Coord, flips: &[Coord]) -> Board {
        let mut next = *self;
        next.cells[coord.y][coord.x] = Some(self.to_move);
        for &c in flips {
            next.cells[c.y][c.x] = Some(self.to_move);
        }
        next.to_move = self.to_move.opponent();
        next.normalized()
    }

    /// Pass the turn back when the player to move is stuck but the
    /// opponent is not. Leaves finished games untouched.
    fn normalized(mut self) -> Self {
        if self.moves_for(self.to_move).is_empty()
            && !self.moves_for(self.to_move.opponent()).is_empty()
        {
            self.to_move = self.to_move.opponent();
        }
        self
    }
}

impl GameState for Board {
    type Move = Coord;
    type Player = Disc;

    fn player_to_move(&self) -> Disc {
        self.to_move
    }

    fn is_terminal(&self) -> bool {
        self.moves_for(self.to_move).is_empty()
            && self.moves_for(self.to_move.opponent()).is_empty()
    }

    /// The holder of the disc majority; equal counts are a draw.
    fn winner(&self) -> Option<Disc> {
        let black = self.count(Disc::Black);
        let white = self.count(Disc::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Disc::Black),
            std::cmp::Ordering::Less => Some(Disc::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn legal_moves(&self) -> Vec<Coord> {
        self.moves_for(self.to_move)
    }

    fn apply_move(&self, mv: &Coord) -> Self {
        let flips = self.flips_for(*mv, self.to_move);
        debug_assert!(
            !flips.is_empty(),
            "apply_move called with illegal move ({}, {})",
            mv.x,
            mv.y
        );
        self.with_move_applied(*mv, &flips)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            for cell in row {
                let c = match cell {
                    Some(disc) => disc.to_char(),
                    None => '.',
                };
                write!(f, "{c}")?;
            }
            if y < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
