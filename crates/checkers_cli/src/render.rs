//! Text presentation of the live game.

use checkers_core::{Game, Square, COLS, ROWS};

/// Board with row/column labels. `*` marks a legal target of the selection,
/// `x` a target reached by capturing; the selected piece is shown in brackets.
pub fn board_view(game: &Game) -> String {
    let mut out = String::from("   ");
    for col in 0..COLS {
        out.push_str(&format!(" {col} "));
    }
    out.push('\n');

    for row in 0..ROWS {
        out.push_str(&format!(" {row} "));
        for col in 0..COLS {
            let at = Square { row, col };
            let cell = match game.board().piece_at(at) {
                Some(p) if game.selected() == Some(at) => format!("[{}]", p.symbol()),
                Some(p) => format!(" {} ", p.symbol()),
                None => match game.targets().get(&at) {
                    Some(captured) if !captured.is_empty() => " x ".to_string(),
                    Some(_) => " * ".to_string(),
                    None if at.is_dark() => " . ".to_string(),
                    None => "   ".to_string(),
                },
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}

/// Parse a `row col` line; commas are accepted as separators.
pub fn parse_cell(line: &str) -> Option<(u8, u8)> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Square::new(row, col).map(|s| (s.row, s.col))
}
