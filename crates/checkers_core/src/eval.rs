use crate::{board::Board, types::*};

/// Weight of a king on top of its value as a piece.
pub const KING_BONUS: f32 = 0.5;

pub fn evaluate(board: &Board) -> f32 {
    // Material from White's perspective: every piece counts one, kings count extra.
    let material = board.remaining(Color::White) as f32 - board.remaining(Color::Red) as f32;
    let kings = board.kings(Color::White) as f32 - board.kings(Color::Red) as f32;
    material + KING_BONUS * kings
}
