use std::fmt;

use thiserror::Error;

use crate::{eval, piece::Piece, types::*};

/// Errors produced while parsing a text board diagram.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DiagramError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {found} cells, expected 8")]
    RowLength { row: usize, found: usize },

    #[error("unknown piece symbol '{symbol}' at ({row},{col})")]
    UnknownSymbol { symbol: char, row: usize, col: usize },

    #[error("piece on light square ({row},{col})")]
    LightSquare { row: usize, col: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; COLS as usize]; ROWS as usize],
    white_left: u8,
    red_left: u8,
    white_kings: u8,
    red_kings: u8,
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            grid: [[None; COLS as usize]; ROWS as usize],
            white_left: 0,
            red_left: 0,
            white_kings: 0,
            red_kings: 0,
        }
    }

    /// Standard 12-versus-12 setup: Red on rows 0..3, White on rows 5..8.
    pub fn startpos() -> Self {
        let mut b = Board::empty();
        for row in 0..ROWS {
            for col in 0..COLS {
                let square = sq(row, col);
                if !square.is_dark() {
                    continue;
                }
                if row < 3 {
                    b.place(Piece::man(Color::Red, row, col));
                } else if row > 4 {
                    b.place(Piece::man(Color::White, row, col));
                }
            }
        }
        b
    }

    /// Parse a diagram of eight lines, row 0 first.
    ///
    /// `.` is an empty cell, `r`/`R` a red man/king and `w`/`W` a white man/king.
    /// Whitespace inside a line is ignored.
    pub fn from_diagram(diagram: &str) -> Result<Self, DiagramError> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.len() != ROWS as usize {
            return Err(DiagramError::RowCount(rows.len()));
        }

        let mut b = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != COLS as usize {
                return Err(DiagramError::RowLength {
                    row,
                    found: cells.len(),
                });
            }
            for (col, &ch) in cells.iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let piece = Piece::from_symbol(ch, row as u8, col as u8).ok_or(
                    DiagramError::UnknownSymbol {
                        symbol: ch,
                        row,
                        col,
                    },
                )?;
                if !piece.square().is_dark() {
                    return Err(DiagramError::LightSquare { row, col });
                }
                b.place(piece);
            }
        }
        Ok(b)
    }

    /// Put a piece on its own square, replacing whatever was there.
    pub fn place(&mut self, piece: Piece) {
        let at = piece.square();
        if self.piece_at(at).is_some() {
            self.remove_piece(at);
        }
        self.grid[at.row as usize][at.col as usize] = Some(piece);
        *self.left_mut(piece.color) += 1;
        if piece.is_king() {
            *self.kings_mut(piece.color) += 1;
        }
    }

    pub fn piece_at(&self, at: Square) -> Option<Piece> {
        self.grid[at.row as usize][at.col as usize]
    }

    /// Pieces of one color in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.grid
            .iter()
            .flatten()
            .filter_map(|cell| *cell)
            .filter(move |p| p.color == color)
    }

    pub fn remaining(&self, color: Color) -> u8 {
        match color {
            Color::White => self.white_left,
            Color::Red => self.red_left,
        }
    }

    pub fn kings(&self, color: Color) -> u8 {
        match color {
            Color::White => self.white_kings,
            Color::Red => self.red_kings,
        }
    }

    /// Pieces physically on the grid; always equals the sum of both remaining counters.
    pub fn piece_count(&self) -> usize {
        self.grid.iter().flatten().filter(|c| c.is_some()).count()
    }

    fn left_mut(&mut self, color: Color) -> &mut u8 {
        match color {
            Color::White => &mut self.white_left,
            Color::Red => &mut self.red_left,
        }
    }

    fn kings_mut(&mut self, color: Color) -> &mut u8 {
        match color {
            Color::White => &mut self.white_kings,
            Color::Red => &mut self.red_kings,
        }
    }

    /// Move the piece on `from` to the empty square `to`.
    ///
    /// A man landing on its crowning row is replaced by a king of the same
    /// color. Returns true when that happened. Captured pieces are left on the
    /// board; callers remove them with [`Board::remove_piece`].
    pub fn apply_move(&mut self, from: Square, to: Square) -> bool {
        let Some(mut piece) = self.piece_at(from) else {
            return false;
        };
        self.grid[from.row as usize][from.col as usize] = None;
        piece.relocate(to.row, to.col);

        let promoted = piece.rank == Rank::Man && to.row == piece.color.crowning_row();
        if promoted {
            piece = Piece::king(piece.color, to.row, to.col);
            *self.kings_mut(piece.color) += 1;
        }
        self.grid[to.row as usize][to.col as usize] = Some(piece);
        promoted
    }

    pub fn remove_piece(&mut self, at: Square) -> Option<Piece> {
        let piece = self.grid[at.row as usize][at.col as usize].take()?;
        *self.left_mut(piece.color) -= 1;
        if piece.is_king() {
            *self.kings_mut(piece.color) -= 1;
        }
        Some(piece)
    }

    pub fn evaluate(&self) -> f32 {
        eval::evaluate(self)
    }

    pub fn winner(&self) -> Option<Color> {
        if self.red_left == 0 {
            Some(Color::White)
        } else if self.white_left == 0 {
            Some(Color::Red)
        } else {
            None
        }
    }

    /// Same position with colors swapped and rows mirrored.
    pub fn color_flipped(&self) -> Board {
        let mut b = Board::empty();
        for color in [Color::White, Color::Red] {
            for p in self.pieces(color) {
                let row = ROWS - 1 - p.row;
                let col = COLS - 1 - p.col;
                b.place(Piece {
                    color: p.color.other(),
                    rank: p.rank,
                    row,
                    col,
                });
            }
        }
        b
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            let line: String = row
                .iter()
                .map(|cell| cell.map(|p| p.symbol()).unwrap_or('.'))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
