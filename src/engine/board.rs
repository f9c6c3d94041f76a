//! Real board state: cell kinds, marks, the reveal lifecycle, and seeded
//! encounter generation.
//!
//! Cells never change kind after generation. `revealed` flips false→true
//! through [`Board::reveal`]; re-hide effects belong to the turn-resolution
//! layer and go through [`Board::hide`]. The AI side never touches this
//! module directly — it sees the board only through the sanitizer.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::engine::models::Coord;

/// What a cell holds once revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Attack,
    Gold,
    Clue,
    Trap,
    Empty,
}

impl CellKind {
    /// Attack, Gold and Trap count as items; Clue and Empty do not.
    pub fn is_item(self) -> bool {
        matches!(self, CellKind::Attack | CellKind::Gold | CellKind::Trap)
    }
}

/// Player-placed cell annotation. Marks are public information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Flag,
    BombSuspect,
    SwordSuspect,
    GoldSuspect,
    Question,
}

/// Itemized 8-neighborhood summary carried by Clue cells.
///
/// The per-type breakdown is player-exclusive detail (unlocked by player
/// upgrades); only `total` ever crosses the sanitization boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AdjacentItems {
    pub attacks: u8,
    pub gold: u8,
    pub total: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellKind,
    pub revealed: bool,
    #[serde(default)]
    pub mark: Option<Mark>,
    /// Present only for Clue cells.
    #[serde(default)]
    pub adjacent: Option<AdjacentItems>,
}

impl Cell {
    pub fn hidden(kind: CellKind) -> Self {
        Self {
            kind,
            revealed: false,
            mark: None,
            adjacent: None,
        }
    }
}

/// Return the in-bounds 8-neighborhood of `c` on a rows×cols grid.
pub fn neighbors8(rows: usize, cols: usize, c: Coord) -> Vec<Coord> {
    let mut out = Vec::with_capacity(8);
    for dr in -1i64..=1 {
        for dc in -1i64..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = c.row as i64 + dr;
            let col = c.col as i64 + dc;
            if r >= 0 && col >= 0 && (r as usize) < rows && (col as usize) < cols {
                out.push(Coord::new(r as usize, col as usize));
            }
        }
    }
    out
}

/// True when `a` and `b` touch in the 8-neighborhood sense.
pub fn adjacent(a: Coord, b: Coord) -> bool {
    a != b && a.row.abs_diff(b.row) <= 1 && a.col.abs_diff(b.col) <= 1
}

/// Item counts for generated encounter boards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoardLayout {
    pub attacks: usize,
    pub gold: usize,
    pub traps: usize,
}

/// Rectangular grid of cells, row-major. At least one row and one column;
/// all rows the same length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Build a board from explicit cells. Ragged or empty input is a
    /// programming error and panics rather than silently coercing.
    pub fn from_cells(cells: Vec<Vec<Cell>>) -> Self {
        assert!(!cells.is_empty(), "board must have at least one row");
        let cols = cells[0].len();
        assert!(cols > 0, "board must have at least one column");
        for (i, row) in cells.iter().enumerate() {
            assert_eq!(row.len(), cols, "board row {i} has ragged length");
        }
        Self { cells }
    }

    /// Generate a fully-hidden encounter board: items placed uniformly at
    /// random, every non-item cell next to an item becomes a Clue with its
    /// neighborhood summary, the rest stay Empty.
    pub fn generate(rows: usize, cols: usize, layout: &BoardLayout, rng: &mut StdRng) -> Self {
        assert!(rows > 0 && cols > 0, "board must be at least 1x1");
        let item_count = layout.attacks + layout.gold + layout.traps;
        assert!(
            item_count <= rows * cols,
            "layout places more items than cells"
        );

        let mut coords: Vec<Coord> = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| Coord::new(r, c)))
            .collect();
        coords.shuffle(rng);

        let mut kinds = vec![vec![CellKind::Empty; cols]; rows];
        for (i, c) in coords.iter().take(item_count).enumerate() {
            kinds[c.row][c.col] = if i < layout.attacks {
                CellKind::Attack
            } else if i < layout.attacks + layout.gold {
                CellKind::Gold
            } else {
                CellKind::Trap
            };
        }

        let mut cells = Vec::with_capacity(rows);
        for r in 0..rows {
            let mut row = Vec::with_capacity(cols);
            for c in 0..cols {
                let kind = kinds[r][c];
                let mut cell = Cell::hidden(kind);
                if kind == CellKind::Empty {
                    let mut attacks = 0u8;
                    let mut gold = 0u8;
                    let mut any_item = false;
                    for n in neighbors8(rows, cols, Coord::new(r, c)) {
                        match kinds[n.row][n.col] {
                            CellKind::Attack => {
                                attacks += 1;
                                any_item = true;
                            }
                            CellKind::Gold => {
                                gold += 1;
                                any_item = true;
                            }
                            CellKind::Trap => any_item = true,
                            _ => {}
                        }
                    }
                    if any_item {
                        cell.kind = CellKind::Clue;
                        // Clue totals report attacks + gold; traps stay
                        // uncounted even though they are items.
                        cell.adjacent = Some(AdjacentItems {
                            attacks,
                            gold,
                            total: attacks + gold,
                        });
                    }
                }
                row.push(cell);
            }
            cells.push(row);
        }
        Self { cells }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells[0].len()
    }

    pub fn get(&self, c: Coord) -> &Cell {
        &self.cells[c.row][c.col]
    }

    pub fn get_mut(&mut self, c: Coord) -> &mut Cell {
        &mut self.cells[c.row][c.col]
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols();
        (0..self.rows()).flat_map(move |r| (0..cols).map(move |c| Coord::new(r, c)))
    }

    pub fn reveal(&mut self, c: Coord) {
        self.cells[c.row][c.col].revealed = true;
    }

    /// Re-hide a cell. Owned by turn-resolution effects; the AI always
    /// recomputes from a fresh sanitized view, so this is safe between
    /// its invocations.
    pub fn hide(&mut self, c: Coord) {
        self.cells[c.row][c.col].revealed = false;
    }

    pub fn set_mark(&mut self, c: Coord, mark: Option<Mark>) {
        self.cells[c.row][c.col].mark = mark;
    }

    pub fn hidden_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.revealed)
            .count()
    }
}
