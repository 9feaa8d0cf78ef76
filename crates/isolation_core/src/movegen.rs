use crate::{board::Board, types::*};

/// Legal moves of the player to move, returning a freshly allocated vector.
pub fn legal_moves(board: &Board) -> Vec<Square> {
    legal_moves_for(board, board.active_player())
}

/// Legal moves of `player`, whether or not it is their turn.
pub fn legal_moves_for(board: &Board, player: Player) -> Vec<Square> {
    let mut out = Vec::with_capacity(KNIGHT_OFFSETS.len());
    legal_moves_into(board, player, &mut out);
    out
}

/// Generate the legal moves of `player` into the provided buffer, reusing it across calls.
///
/// An unplaced player may move to any blank cell (column-major order);
/// a placed player moves like a knight, in [`KNIGHT_OFFSETS`] order.
pub fn legal_moves_into(board: &Board, player: Player, out: &mut Vec<Square>) {
    out.clear();
    match board.player_location(player) {
        None => out.extend(board.blank_spaces()),
        Some(from) => out.extend(knight_targets(board, from)),
    }
}

/// Number of legal moves of `player`.
pub fn mobility(board: &Board, player: Player) -> usize {
    match board.player_location(player) {
        None => board.blank_count(),
        Some(from) => knight_targets(board, from).count(),
    }
}

pub fn has_legal_moves(board: &Board, player: Player) -> bool {
    match board.player_location(player) {
        None => board.blank_count() > 0,
        Some(from) => knight_targets(board, from).next().is_some(),
    }
}

fn knight_targets(board: &Board, from: Square) -> impl Iterator<Item = Square> + '_ {
    KNIGHT_OFFSETS
        .iter()
        .map(move |&(dr, dc)| from.offset(dr, dc))
        .filter(move |&sq| board.is_open(sq))
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
