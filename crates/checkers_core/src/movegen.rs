//! Legal move generation: single steps, single jumps and full capture chains.

use std::collections::{BTreeMap, BTreeSet};

use crate::{board::Board, piece::Piece, types::*};

impl Board {
    /// Single jumps for the piece on `from`: landing square -> captured square.
    pub fn legal_jumps(&self, from: Square) -> BTreeMap<Square, Square> {
        let mut jumps = BTreeMap::new();
        let Some(piece) = self.piece_at(from) else {
            return jumps;
        };
        for (landing_off, over_off) in piece.jump_offsets() {
            let (Some(landing), Some(over)) = (from.offset(landing_off), from.offset(over_off))
            else {
                continue;
            };
            if self.piece_at(landing).is_some() {
                continue;
            }
            if let Some(victim) = self.piece_at(over)
                && victim.color != piece.color
            {
                jumps.insert(landing, over);
            }
        }
        jumps
    }

    /// Non-capturing steps for the piece on `from`.
    pub fn legal_steps(&self, from: Square) -> MoveMap {
        let mut steps = MoveMap::new();
        let Some(piece) = self.piece_at(from) else {
            return steps;
        };
        for &off in piece.move_offsets() {
            if let Some(to) = from.offset(off)
                && self.piece_at(to).is_none()
            {
                steps.insert(to, Vec::new());
            }
        }
        steps
    }

    /// Jumps if the piece has any, otherwise its plain steps.
    ///
    /// This is the per-piece capture preference only. Whether the piece may
    /// move at all while another piece of its side can capture is decided by
    /// the caller (see [`Board::forced_pieces`]).
    pub fn legal_moves(&self, from: Square) -> MoveMap {
        let jumps = self.legal_jumps(from);
        if jumps.is_empty() {
            return self.legal_steps(from);
        }
        jumps
            .into_iter()
            .map(|(landing, captured)| (landing, vec![captured]))
            .collect()
    }

    /// Every landing square reachable by a capture sequence starting at `from`,
    /// mapped to the squares captured along the way, in capture order.
    ///
    /// Intermediate landings are included. A man that reaches its crowning row
    /// stops there.
    pub fn jump_chains(&self, from: Square) -> MoveMap {
        match self.piece_at(from) {
            Some(jumper) => self.extend_chain(jumper, from, &[]),
            None => MoveMap::new(),
        }
    }

    fn extend_chain(&self, jumper: Piece, at: Square, skipped: &[Square]) -> MoveMap {
        let mut chains = MoveMap::new();
        for &dir in jumper.move_offsets() {
            for (landing, captured) in self.traverse(jumper, at, dir, skipped) {
                merge_chain(&mut chains, landing, captured);
            }
        }
        chains
    }

    fn traverse(&self, jumper: Piece, at: Square, dir: Offset, skipped: &[Square]) -> MoveMap {
        let mut chains = MoveMap::new();
        let Some((over, landing)) = self.chain_jump(jumper, at, dir, skipped) else {
            return chains;
        };

        let mut captured = skipped.to_vec();
        captured.push(over);

        if !crowns(jumper, landing) {
            chains = self.extend_chain(jumper, landing, &captured);
        }
        merge_chain(&mut chains, landing, captured);
        chains
    }

    /// One jump of a chain in direction `dir`: the captured square and the landing.
    fn chain_jump(
        &self,
        jumper: Piece,
        at: Square,
        dir: Offset,
        skipped: &[Square],
    ) -> Option<(Square, Square)> {
        let over = at.offset(dir)?;
        let landing = over.offset(dir)?;
        match self.chain_cell(jumper, over, skipped) {
            Some(victim) if victim.color != jumper.color => {}
            _ => return None,
        }
        if self.chain_cell(jumper, landing, skipped).is_some() {
            return None;
        }
        Some((over, landing))
    }

    /// Every finished capture sequence from `from`, one entry per path.
    ///
    /// Unlike [`Board::jump_chains`] two paths ending on the same square are
    /// both kept.
    fn complete_chains(&self, from: Square) -> Vec<(Square, Vec<Square>)> {
        let mut paths = Vec::new();
        if let Some(jumper) = self.piece_at(from) {
            self.collect_paths(jumper, from, &mut Vec::new(), &mut paths);
        }
        paths
    }

    fn collect_paths(
        &self,
        jumper: Piece,
        at: Square,
        captured: &mut Vec<Square>,
        paths: &mut Vec<(Square, Vec<Square>)>,
    ) {
        let mut extended = false;
        for &dir in jumper.move_offsets() {
            let Some((over, landing)) = self.chain_jump(jumper, at, dir, captured) else {
                continue;
            };
            extended = true;
            captured.push(over);
            if crowns(jumper, landing) {
                paths.push((landing, captured.clone()));
            } else {
                self.collect_paths(jumper, landing, captured, paths);
            }
            captured.pop();
        }
        if !extended && !captured.is_empty() {
            paths.push((at, captured.clone()));
        }
    }

    /// Cell contents as seen mid-chain: the jumper has left its origin and
    /// captured pieces are already gone.
    fn chain_cell(&self, jumper: Piece, at: Square, skipped: &[Square]) -> Option<Piece> {
        if at == jumper.square() || skipped.contains(&at) {
            return None;
        }
        self.piece_at(at)
    }

    pub fn side_has_jump(&self, color: Color) -> bool {
        self.pieces(color)
            .any(|p| !self.legal_jumps(p.square()).is_empty())
    }

    /// Squares of `color` pieces that can capture right now.
    pub fn forced_pieces(&self, color: Color) -> BTreeSet<Square> {
        self.pieces(color)
            .map(|p| p.square())
            .filter(|&s| !self.legal_jumps(s).is_empty())
            .collect()
    }

    /// Every board reachable by one complete move of `color`.
    ///
    /// Captures are mandatory for the whole side, and a capture only counts
    /// once its chain cannot be extended (or the jumper was crowned).
    pub fn successors(&self, color: Color) -> Vec<Board> {
        let mut out = Vec::new();
        let forced = self.side_has_jump(color);
        let origins: Vec<Square> = self.pieces(color).map(|p| p.square()).collect();

        for from in origins {
            if forced {
                for (landing, captured) in self.complete_chains(from) {
                    let mut next = self.clone();
                    next.apply_move(from, landing);
                    for victim in &captured {
                        next.remove_piece(*victim);
                    }
                    // Paths over the same men in another order end identically
                    if !out.contains(&next) {
                        out.push(next);
                    }
                }
            } else {
                for landing in self.legal_steps(from).into_keys() {
                    let mut next = self.clone();
                    next.apply_move(from, landing);
                    out.push(next);
                }
            }
        }
        out
    }
}

fn crowns(jumper: Piece, landing: Square) -> bool {
    jumper.rank == Rank::Man && landing.row == jumper.color.crowning_row()
}

// Longer capture sequences win when two paths share a landing square.
fn merge_chain(chains: &mut MoveMap, landing: Square, captured: Vec<Square>) {
    match chains.get(&landing) {
        Some(existing) if existing.len() >= captured.len() => {}
        _ => {
            chains.insert(landing, captured);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
