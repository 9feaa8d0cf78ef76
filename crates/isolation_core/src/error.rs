use thiserror::Error;

/// Errors raised while constructing a board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    EmptyBoard { width: u8, height: u8 },

    #[error("board of {width}x{height} exceeds the supported size ({max_side} per side, {max_cells} cells)")]
    TooLarge {
        width: u8,
        height: u8,
        max_side: u8,
        max_cells: usize,
    },
}
