pub mod bitboard;
pub mod board;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod perft;
pub mod time_control;
pub mod types;

// Re-export core game logic (not agent-specific)
pub use bitboard::*;
pub use board::*;
pub use error::BoardError;
pub use eval::Evaluator;
pub use movegen::*;
pub use perft::perft;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Game-state contract consumed by the search
// =============================================================================

/// A two-player, perfect-information game state.
///
/// Implementations are values: `apply` returns the successor and never
/// mutates `self`. The order of `legal_moves` is significant because the
/// search breaks ties in favour of the earliest move.
pub trait GameState: Clone {
    /// Moves available to the player to move, in a stable order. Empty when
    /// that player cannot move.
    fn legal_moves(&self) -> Vec<Square>;

    /// The state after the player to move plays `mv`.
    fn apply(&self, mv: Square) -> Self;

    fn active_player(&self) -> Player;

    fn player_location(&self, player: Player) -> Option<Square>;
}

impl GameState for Board {
    fn legal_moves(&self) -> Vec<Square> {
        movegen::legal_moves(self)
    }

    fn apply(&self, mv: Square) -> Self {
        self.forecast(mv)
    }

    fn active_player(&self) -> Player {
        Board::active_player(self)
    }

    fn player_location(&self, player: Player) -> Option<Square> {
        Board::player_location(self, player)
    }
}

// =============================================================================
// Agent trait: implemented by every Isolation player (search, random, greedy)
// =============================================================================

/// Result of a search: a score and the move that achieves it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Score from the searching player's perspective
    pub score: f64,
    /// The best move found (None if no legal moves)
    pub best_move: Option<Square>,
}

impl SearchResult {
    pub const fn new(score: f64, best_move: Option<Square>) -> Self {
        Self { score, best_move }
    }

    /// A result carrying no move.
    pub const fn none(score: f64) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Trait that all Isolation agents must implement.
///
/// This allows swapping between search agents, random baselines and
/// one-ply greedy players in the tournament runner.
pub trait Agent {
    /// Choose a move before the turn's time runs out.
    ///
    /// # Arguments
    /// * `board` - The current position
    /// * `legal_moves` - Moves available to the agent
    /// * `time_left` - Remaining time for this turn
    ///
    /// # Returns
    /// A move from `legal_moves`, or `None` when the agent has no move
    fn get_move(
        &mut self,
        board: &Board,
        legal_moves: &[Square],
        time_left: &dyn TimeLeft,
    ) -> Option<Square>;

    /// Returns the agent's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
