//! Core value types shared by the board model and the AI subsystem.

use serde::{Deserialize, Serialize};

/// Board coordinate, 0-based, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The move an enemy brain settled on. `reasoning` is diagnostics-only
/// and carries no behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub target: Coord,
    pub reasoning: String,
}

/// Which decision policy an archetype uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiKind {
    Brute,
    Calculator,
    Hoarder,
    Illusionist,
}

impl AiKind {
    /// Parse an archetype ai tag. Returns None for the "default" sentinel
    /// and for unknown tags; the brain maps both to Brute.
    pub fn from_tag(tag: &str) -> Option<AiKind> {
        match tag {
            "brute" => Some(AiKind::Brute),
            "calculator" => Some(AiKind::Calculator),
            "hoarder" => Some(AiKind::Hoarder),
            "illusionist" => Some(AiKind::Illusionist),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            AiKind::Brute => "brute",
            AiKind::Calculator => "calculator",
            AiKind::Hoarder => "hoarder",
            AiKind::Illusionist => "illusionist",
        }
    }
}

/// Public enemy state. Read-only input to policies; the AI never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyState {
    pub archetype: String,
    pub hp: i32,
    pub max_hp: i32,
    pub armor: i32,
    pub fury: u32,
    pub fury_threshold: u32,
}

/// Public player state. Marks are already folded into the board cells.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerState {
    pub gold: i64,
}
