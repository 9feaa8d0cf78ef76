use crate::{board::Board, movegen::legal_moves_into, types::Square};

/// Pure perft node count.
/// Counts all positions reachable from the current one at exactly `depth` plies,
/// plus the positions where the game ended earlier.
pub fn perft(board: &Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &Board, depth: u8, layers: &mut [Vec<Square>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        legal_moves_into(board, board.active_player(), buf);
        if buf.is_empty() {
            return 1;
        }

        let mut nodes = 0u64;
        for &mv in buf.iter() {
            nodes += inner(&board.forecast(mv), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(8); depth as usize];
    inner(board, depth, &mut layers[..])
}
