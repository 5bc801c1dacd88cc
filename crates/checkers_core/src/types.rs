use std::collections::BTreeMap;
use std::fmt;

pub const ROWS: u8 = 8;
pub const COLS: u8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Red,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Red,
            Color::Red => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Red => 1,
        }
    }
    /// Row delta of a forward step. White starts at the bottom rows and moves up.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Red => 1,
        }
    }
    /// Row on which a man of this color is crowned.
    pub fn crowning_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Red => ROWS - 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Red => write!(f, "Red"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

/// Row/column delta on the grid.
pub type Offset = (i8, i8);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Option<Square> {
        if row < ROWS && col < COLS {
            Some(Square { row, col })
        } else {
            None
        }
    }

    pub fn offset(self, (dr, dc): Offset) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..ROWS as i8).contains(&row) && (0..COLS as i8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Playable squares are the dark ones.
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Landing square mapped to the squares captured on the way there.
/// An empty list is a plain step.
pub type MoveMap = BTreeMap<Square, Vec<Square>>;

// Helpers
pub fn sq(row: u8, col: u8) -> Square {
    Square { row, col }
}
