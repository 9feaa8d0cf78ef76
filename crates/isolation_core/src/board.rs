use std::fmt;

use crate::bitboard::{Bitboard, MAX_CELLS};
use crate::error::BoardError;
use crate::movegen;
use crate::types::*;

/// Longest supported board side. Keeps knight offsets inside `i8`.
pub const MAX_SIDE: u8 = 64;

/// An Isolation position.
///
/// Both players move like chess knights and every visited cell is blocked
/// for the rest of the game. A player that has not been placed yet may jump
/// to any blank cell. The player to move with no legal moves loses.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
    blocked: Bitboard,
    locations: [Option<Square>; 2],
    active: Player,
    move_count: u32,
}

impl Board {
    pub const DEFAULT_SIZE: u8 = 7;

    pub fn new(width: u8, height: u8) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyBoard { width, height });
        }
        if width > MAX_SIDE || height > MAX_SIDE || width as usize * height as usize > MAX_CELLS {
            return Err(BoardError::TooLarge {
                width,
                height,
                max_side: MAX_SIDE,
                max_cells: MAX_CELLS,
            });
        }
        Ok(Board {
            width,
            height,
            blocked: Bitboard::EMPTY,
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        })
    }

    /// The 7x7 board used by default.
    pub fn standard() -> Self {
        Board {
            width: Self::DEFAULT_SIZE,
            height: Self::DEFAULT_SIZE,
            blocked: Bitboard::EMPTY,
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn cells(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn inactive_player(&self) -> Player {
        self.active.opponent()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Current location of `player`, `None` until the player has moved.
    pub fn player_location(&self, player: Player) -> Option<Square> {
        self.locations[player.idx()]
    }

    /// True if `sq` lies inside the board.
    pub fn contains(&self, sq: Square) -> bool {
        (0..self.height as i8).contains(&sq.row) && (0..self.width as i8).contains(&sq.col)
    }

    /// True if `sq` is inside the board and has never been occupied.
    pub fn is_open(&self, sq: Square) -> bool {
        self.contains(sq) && !self.blocked.contains(self.index(sq))
    }

    /// Blank cells in column-major order.
    pub fn blank_spaces(&self) -> Vec<Square> {
        let mut out = Vec::with_capacity(self.blank_count());
        for col in 0..self.width as i8 {
            for row in 0..self.height as i8 {
                let sq = Square::new(row, col);
                if !self.blocked.contains(self.index(sq)) {
                    out.push(sq);
                }
            }
        }
        out
    }

    pub fn blank_count(&self) -> usize {
        (!self.blocked & Bitboard::full(self.cells())).popcount() as usize
    }

    pub fn legal_moves(&self) -> Vec<Square> {
        movegen::legal_moves(self)
    }

    pub fn legal_moves_for(&self, player: Player) -> Vec<Square> {
        movegen::legal_moves_for(self, player)
    }

    /// Plays `mv` for the active player in place.
    ///
    /// The move is not validated; callers pass moves taken from
    /// [`Board::legal_moves`].
    pub fn apply_move(&mut self, mv: Square) {
        debug_assert!(self.contains(mv), "move {mv} is off the board");
        let idx = self.index(mv);
        self.blocked.set(idx);
        self.locations[self.active.idx()] = Some(mv);
        self.active = self.active.opponent();
        self.move_count += 1;
    }

    /// Returns the board after `mv`, leaving `self` untouched.
    pub fn forecast(&self, mv: Square) -> Board {
        let mut next = self.clone();
        next.apply_move(mv);
        next
    }

    /// `player` is to move and cannot.
    pub fn is_loser(&self, player: Player) -> bool {
        player == self.active && !movegen::has_legal_moves(self, player)
    }

    /// `player` just moved and the opponent cannot answer.
    pub fn is_winner(&self, player: Player) -> bool {
        player == self.inactive_player() && !movegen::has_legal_moves(self, self.active)
    }

    /// `-inf` for a lost position, `+inf` for a won one, `0` otherwise.
    pub fn utility(&self, player: Player) -> f64 {
        if self.is_loser(player) {
            f64::NEG_INFINITY
        } else if self.is_winner(player) {
            f64::INFINITY
        } else {
            0.0
        }
    }

    fn index(&self, sq: Square) -> usize {
        sq.row as usize * self.width as usize + sq.col as usize
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height as i8 {
            write!(f, "|")?;
            for col in 0..self.width as i8 {
                let sq = Square::new(row, col);
                let cell = if self.player_location(Player::One) == Some(sq) {
                    '1'
                } else if self.player_location(Player::Two) == Some(sq) {
                    '2'
                } else if self.is_open(sq) {
                    ' '
                } else {
                    '-'
                };
                write!(f, "{cell}|")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
