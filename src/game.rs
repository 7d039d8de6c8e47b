//! Game-state port - the capability contract between games and the engine
//!
//! The search engine knows nothing about any particular game. It is written
//! against this trait, which captures exactly what adversarial search needs
//! from a two-player, zero-sum, perfect-information game: whose turn it is,
//! whether the game is over, who won, which moves are available, and what
//! state a move leads to.

/// Capability contract for two-player, zero-sum, perfect-information games.
///
/// Concrete games (Othello in this crate, or anything a caller supplies)
/// implement this trait and the engine searches them without knowing their
/// rules. States are immutable from the engine's point of view: applying a
/// move produces a fresh successor and never changes the parent, so sibling
/// subtrees can be explored without any undo machinery.
///
/// # Contract obligations
///
/// - `Player` has exactly two meaningful values; the engine treats them as
///   opaque identities and only the game and its evaluators compare them.
/// - A state with no legal moves must report itself terminal. The engine
///   does not guard against an empty move list on a non-terminal state; a
///   node like that silently keeps its initial sentinel value, which is a
///   bug in the game, not in the search.
/// - [`legal_moves`] must enumerate in a deterministic order. The order
///   never changes the minimax value, but it decides which of several
///   equal-valued moves is returned and how much pruning occurs.
///
/// [`legal_moves`]: GameState::legal_moves
pub trait GameState: Sized {
    /// Opaque move token produced by [`legal_moves`] and consumed by
    /// [`apply_move`].
    ///
    /// [`legal_moves`]: GameState::legal_moves
    /// [`apply_move`]: GameState::apply_move
    type Move;

    /// Player identity, also used as the evaluation perspective.
    type Player: Copy + Eq;

    /// The player whose turn it is in this state.
    fn player_to_move(&self) -> Self::Player;

    /// Whether the game is over in this state.
    fn is_terminal(&self) -> bool;

    /// The winner of a finished game, or `None` for a draw.
    ///
    /// Only meaningful when [`is_terminal`] returns true.
    ///
    /// [`is_terminal`]: GameState::is_terminal
    fn winner(&self) -> Option<Self::Player>;

    /// All moves available to the player to move, in a deterministic order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// The successor state reached by playing `mv`.
    ///
    /// `mv` must come from [`legal_moves`] on this same state. The receiver
    /// is never mutated; the successor is an independent value.
    ///
    /// [`legal_moves`]: GameState::legal_moves
    #[must_use = "apply_move returns the successor state; the original is unchanged"]
    fn apply_move(&self, mv: &Self::Move) -> Self;
}
