//! Shared clue arithmetic used by every decision policy.
//!
//! All local reasoning happens around revealed Clue cells: partition a
//! clue's neighborhood into revealed and hidden, discount items already on
//! the table, and see what the remainder forces. A cell adjacent to several
//! clues accumulates their contributions by plain summation — no cross-clue
//! joint inference.

use std::collections::{BTreeSet, HashSet};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::engine::board::{adjacent, CellKind};
use crate::engine::models::{Coord, Decision};
use crate::engine::sanitizer::SanitizedBoard;

/// One revealed clue with its neighborhood partitioned.
#[derive(Debug, Clone)]
pub struct ClueReading {
    pub pos: Coord,
    pub total: u8,
    pub hidden_neighbors: Vec<Coord>,
    pub revealed_items: u8,
}

impl ClueReading {
    /// Items this clue still has unaccounted for among its hidden neighbors.
    pub fn remaining_items(&self) -> i32 {
        (self.total as i32 - self.revealed_items as i32).max(0)
    }

    /// Certainty rule: every hidden neighbor is an item (type unknown).
    pub fn is_certain(&self) -> bool {
        let remaining = self.remaining_items();
        remaining > 0 && remaining as usize == self.hidden_neighbors.len()
    }

    /// Safety rule: all of this clue's items are already revealed, so its
    /// hidden neighbors are Empty or Clue.
    pub fn is_satisfied(&self) -> bool {
        self.remaining_items() == 0
    }

    /// Still has hidden neighbors and unaccounted items.
    pub fn is_unresolved(&self) -> bool {
        !self.hidden_neighbors.is_empty() && self.remaining_items() > 0
    }

    /// Estimated item-presence probability for each hidden neighbor.
    /// Callers must not invoke this on a clue with no hidden neighbors.
    pub fn item_probability(&self) -> f64 {
        self.remaining_items() as f64 / self.hidden_neighbors.len() as f64
    }

    pub fn touches(&self, cell: Coord) -> bool {
        adjacent(self.pos, cell)
    }
}

/// Scan the view for revealed clues carrying totals and read each one.
pub fn read_clues(view: &SanitizedBoard) -> Vec<ClueReading> {
    let mut out = Vec::new();
    for pos in view.coords() {
        let cell = view.get(pos);
        let total = match cell.total_adjacent_items {
            Some(t) if cell.is_revealed => t,
            _ => continue,
        };

        let mut hidden_neighbors = Vec::new();
        let mut revealed_items = 0u8;
        for n in view.neighbors(pos) {
            let nc = view.get(n);
            if !nc.is_revealed {
                hidden_neighbors.push(n);
            } else if nc.revealed_kind.map_or(false, CellKind::is_item) {
                revealed_items += 1;
            }
        }

        out.push(ClueReading {
            pos,
            total,
            hidden_neighbors,
            revealed_items,
        });
    }
    out
}

/// Union of hidden neighbors of all certain clues, de-duplicated and in
/// stable row-major order.
pub fn certain_item_cells(clues: &[ClueReading]) -> Vec<Coord> {
    let set: BTreeSet<Coord> = clues
        .iter()
        .filter(|c| c.is_certain())
        .flat_map(|c| c.hidden_neighbors.iter().copied())
        .collect();
    set.into_iter().collect()
}

/// Hidden cells guaranteed safe (Empty or Clue) by at least one satisfied
/// clue.
pub fn safe_cells(clues: &[ClueReading]) -> HashSet<Coord> {
    clues
        .iter()
        .filter(|c| c.is_satisfied())
        .flat_map(|c| c.hidden_neighbors.iter().copied())
        .collect()
}

/// Uniform-random hidden cell. This is the deepest fallback the policies
/// share, and the same pick callers should substitute when an async
/// decision fails to resolve in time.
pub fn random_hidden_cell(view: &SanitizedBoard, rng: &mut StdRng) -> Option<Coord> {
    view.hidden_cells().choose(rng).copied()
}

/// Sentinel for the caller-contract violation of asking for a move on a
/// fully-resolved board. Never a panic; the rationale makes the anomaly
/// visible in diagnostics.
pub fn no_hidden_sentinel() -> Decision {
    Decision {
        target: Coord::new(0, 0),
        reasoning: "no hidden cells remain; decision requested on a resolved board".into(),
    }
}
