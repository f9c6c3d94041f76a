//! AI-visible board projection.
//!
//! The enemy brains never read the real board; they get this restricted
//! view instead. The projection is the information firewall of the whole
//! subsystem: marks are public, a revealed cell exposes its kind, and a
//! revealed Clue exposes the undiscriminated item total — never the
//! attack/gold breakdown, regardless of which upgrades the player holds.
//! Absent fields serialize as absent, not null, so "no data" stays
//! distinguishable from "zero items" on the wire.

use serde::{Deserialize, Serialize};

use crate::engine::board::{neighbors8, Board, CellKind, Mark};
use crate::engine::models::Coord;

/// One cell as the AI is allowed to see it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SanitizedCell {
    pub is_revealed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mark: Option<Mark>,
    /// Present iff the cell is revealed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revealed_kind: Option<CellKind>,
    /// Present iff the cell is a revealed Clue carrying a summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_adjacent_items: Option<u8>,
}

/// Same dimensions as the board it was projected from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SanitizedBoard {
    cells: Vec<Vec<SanitizedCell>>,
}

impl SanitizedBoard {
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells[0].len()
    }

    pub fn get(&self, c: Coord) -> &SanitizedCell {
        &self.cells[c.row][c.col]
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols();
        (0..self.rows()).flat_map(move |r| (0..cols).map(move |c| Coord::new(r, c)))
    }

    /// In-bounds 8-neighborhood of `c`.
    pub fn neighbors(&self, c: Coord) -> Vec<Coord> {
        neighbors8(self.rows(), self.cols(), c)
    }

    /// All unrevealed coordinates in row-major order.
    pub fn hidden_cells(&self) -> Vec<Coord> {
        self.coords().filter(|&c| !self.get(c).is_revealed).collect()
    }

    /// JSON form of the view for logging or out-of-process consumers.
    /// The field-absence behavior is part of the contract.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Project the real board into its AI-visible form. Pure and total; the
/// caller guarantees the board is a stable snapshot for the duration.
pub fn sanitize(board: &Board) -> SanitizedBoard {
    let mut cells = Vec::with_capacity(board.rows());
    for r in 0..board.rows() {
        let mut row = Vec::with_capacity(board.cols());
        for c in 0..board.cols() {
            let cell = board.get(Coord::new(r, c));
            let total_adjacent_items = if cell.revealed && cell.kind == CellKind::Clue {
                cell.adjacent.map(|a| a.total)
            } else {
                None
            };
            row.push(SanitizedCell {
                is_revealed: cell.revealed,
                mark: cell.mark,
                revealed_kind: cell.revealed.then_some(cell.kind),
                total_adjacent_items,
            });
        }
        cells.push(row);
    }
    SanitizedBoard { cells }
}
