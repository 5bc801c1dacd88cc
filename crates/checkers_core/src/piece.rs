use crate::types::*;

const WHITE_MAN_STEPS: [Offset; 2] = [(-1, -1), (-1, 1)];
const RED_MAN_STEPS: [Offset; 2] = [(1, -1), (1, 1)];
const KING_STEPS: [Offset; 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
    pub row: u8,
    pub col: u8,
}

impl Piece {
    pub fn man(color: Color, row: u8, col: u8) -> Self {
        Self {
            color,
            rank: Rank::Man,
            row,
            col,
        }
    }

    pub fn king(color: Color, row: u8, col: u8) -> Self {
        Self {
            color,
            rank: Rank::King,
            row,
            col,
        }
    }

    pub fn square(&self) -> Square {
        sq(self.row, self.col)
    }

    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    /// Single-step diagonal offsets available to this rank.
    pub fn move_offsets(&self) -> &'static [Offset] {
        match (self.rank, self.color) {
            (Rank::King, _) => &KING_STEPS,
            (Rank::Man, Color::White) => &WHITE_MAN_STEPS,
            (Rank::Man, Color::Red) => &RED_MAN_STEPS,
        }
    }

    /// (landing offset, captured-cell offset) for each jump direction.
    pub fn jump_offsets(&self) -> impl Iterator<Item = (Offset, Offset)> + use<> {
        self.move_offsets()
            .iter()
            .map(|&(dr, dc)| ((2 * dr, 2 * dc), (dr, dc)))
    }

    pub fn relocate(&mut self, row: u8, col: u8) {
        self.row = row;
        self.col = col;
    }

    pub fn symbol(&self) -> char {
        match (self.color, self.rank) {
            (Color::White, Rank::Man) => 'w',
            (Color::White, Rank::King) => 'W',
            (Color::Red, Rank::Man) => 'r',
            (Color::Red, Rank::King) => 'R',
        }
    }

    pub fn from_symbol(ch: char, row: u8, col: u8) -> Option<Self> {
        match ch {
            'w' => Some(Piece::man(Color::White, row, col)),
            'W' => Some(Piece::king(Color::White, row, col)),
            'r' => Some(Piece::man(Color::Red, row, col)),
            'R' => Some(Piece::king(Color::Red, row, col)),
            _ => None,
        }
    }
}
