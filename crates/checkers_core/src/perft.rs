use crate::{board::Board, types::Color};

/// Pure perft node count.
/// Counts all boards reachable from the current one in exactly `depth` moves,
/// alternating sides starting with `side`.
pub fn perft(board: &Board, side: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let children = board.successors(side);
    if depth == 1 {
        return children.len() as u64;
    }
    children
        .iter()
        .map(|child| perft(child, side.other(), depth - 1))
        .sum()
}
