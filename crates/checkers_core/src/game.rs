//! Turn engine: selection, forced captures and multi-jump continuation.

use std::collections::BTreeSet;

use tracing::trace;

use crate::{board::Board, types::*};

/// Where the side to move is within its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingSelection,
    PieceSelected,
    /// A capturing piece must keep jumping before the turn passes.
    ChainCapture,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won(Color),
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    selected: Option<Square>,
    /// Targets of the selected piece (landing -> captured squares)
    targets: MoveMap,
    /// Pieces of the side to move that must capture this turn
    forced_to_take: BTreeSet<Square>,
    chain_capture: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// New game from the standard setup, Red to move.
    pub fn new() -> Self {
        Self::with_board(Board::startpos(), Color::Red)
    }

    pub fn with_board(board: Board, turn: Color) -> Self {
        let forced_to_take = board.forced_pieces(turn);
        Game {
            board,
            turn,
            selected: None,
            targets: MoveMap::new(),
            forced_to_take,
            chain_capture: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Legal targets of the current selection, for highlighting.
    pub fn targets(&self) -> &MoveMap {
        &self.targets
    }

    pub fn forced_to_take(&self) -> &BTreeSet<Square> {
        &self.forced_to_take
    }

    pub fn phase(&self) -> TurnPhase {
        if self.chain_capture {
            TurnPhase::ChainCapture
        } else if self.selected.is_some() {
            TurnPhase::PieceSelected
        } else {
            TurnPhase::AwaitingSelection
        }
    }

    pub fn winner(&self) -> Option<Color> {
        self.board.winner()
    }

    /// Like [`Game::winner`], but a side left without any legal move also loses.
    pub fn outcome(&self) -> Outcome {
        if let Some(color) = self.winner() {
            return Outcome::Won(color);
        }
        let can_move = self
            .board
            .pieces(self.turn)
            .any(|p| !self.moves_for(p.square()).is_empty());
        if can_move {
            Outcome::InProgress
        } else {
            Outcome::Won(self.turn.other())
        }
    }

    /// Turn-level legal moves of the piece on `at`.
    ///
    /// Empty for opponent pieces, and for pieces outside the forced set while
    /// any capture is pending.
    pub fn moves_for(&self, at: Square) -> MoveMap {
        match self.board.piece_at(at) {
            Some(p) if p.color == self.turn => {}
            _ => return MoveMap::new(),
        }
        if !self.forced_to_take.is_empty() && !self.forced_to_take.contains(&at) {
            return MoveMap::new();
        }
        self.board.legal_moves(at)
    }

    /// Handle a click on `(row, col)`.
    ///
    /// With a piece selected this first tries to move it there. If that fails
    /// the selection is dropped and the same cell is tried as a new selection.
    /// During a chain capture the capturing piece stays selected instead.
    /// Returns true when a move was made or a selection established.
    pub fn select_cell(&mut self, row: u8, col: u8) -> bool {
        let Some(at) = Square::new(row, col) else {
            return false;
        };

        if self.chain_capture {
            return self.try_move(at) || self.selected == Some(at);
        }
        if self.selected.is_some() {
            if self.try_move(at) {
                return true;
            }
            self.selected = None;
            self.targets.clear();
        }

        match self.board.piece_at(at) {
            Some(p) if p.color == self.turn => {}
            _ => return false,
        }
        if !self.forced_to_take.is_empty() && !self.forced_to_take.contains(&at) {
            return false;
        }
        self.selected = Some(at);
        self.targets = self.board.legal_moves(at);
        true
    }

    fn try_move(&mut self, to: Square) -> bool {
        let Some(from) = self.selected else {
            return false;
        };
        if self.board.piece_at(to).is_some() {
            return false;
        }
        let Some(captured) = self.targets.get(&to).cloned() else {
            return false;
        };

        let promoted = self.board.apply_move(from, to);
        if captured.is_empty() {
            self.advance_turn();
            return true;
        }

        for victim in captured {
            self.board.remove_piece(victim);
        }
        if !promoted && !self.board.legal_jumps(to).is_empty() {
            self.forced_to_take.clear();
            self.forced_to_take.insert(to);
            self.selected = Some(to);
            self.targets = self.board.legal_moves(to);
            self.chain_capture = true;
            trace!(piece = %to, "chain capture continues");
        } else {
            self.advance_turn();
        }
        true
    }

    /// Pass the turn and rebuild the forced-capture set for the new side.
    pub fn advance_turn(&mut self) {
        self.selected = None;
        self.targets.clear();
        self.forced_to_take.clear();
        self.chain_capture = false;
        self.turn = self.turn.other();
        self.forced_to_take = self.board.forced_pieces(self.turn);
        trace!(turn = %self.turn, forced = self.forced_to_take.len(), "turn advanced");
    }

    /// Install a board chosen by the computer and pass the turn.
    pub fn install_board(&mut self, board: Board) {
        self.board = board;
        self.advance_turn();
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
