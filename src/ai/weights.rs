//! Tunable scoring parameters for the frontier-scoring policies.
//!
//! The constants are balance values carried over from play-testing; they
//! are not derived from board data. The AI never knows the true
//! attack/gold split behind a clue total, so each policy assumes its own
//! fixed split.

use crate::ai::clues::ClueReading;
use crate::engine::models::Coord;
use crate::engine::sanitizer::SanitizedBoard;

#[derive(Debug, Clone)]
pub struct ScoreWeights {
    pub attack_weight: f64,
    pub gold_weight: f64,
    /// Share of a clue's probability mass read as attack potential.
    pub attack_split: f64,
    /// Share read as gold potential. The two shares need not sum to 1;
    /// the remainder implicitly covers traps.
    pub gold_split: f64,
    /// Applied once per adjacent clue with nothing left to find.
    pub satisfied_clue_penalty: f64,
    /// Score for cells with no adjacent clue data at all.
    pub frontier_baseline: f64,
    /// Flat bonus for adjacency to a clue with total >= the threshold.
    pub rich_clue_bonus: f64,
    pub rich_clue_threshold: u8,
}

pub static CALCULATOR_WEIGHTS: ScoreWeights = ScoreWeights {
    attack_weight: 3.0,
    gold_weight: 1.5,
    attack_split: 0.6,
    gold_split: 0.3,
    satisfied_clue_penalty: -0.5,
    frontier_baseline: 0.1,
    rich_clue_bonus: 0.0,
    rich_clue_threshold: 3,
};

pub static HOARDER_WEIGHTS: ScoreWeights = ScoreWeights {
    attack_weight: 1.0,
    gold_weight: 4.0,
    attack_split: 0.5,
    gold_split: 0.4,
    satisfied_clue_penalty: -0.2,
    frontier_baseline: 0.05,
    rich_clue_bonus: 1.5,
    rich_clue_threshold: 3,
};

/// Score one hidden cell against the clues that touch it. Contributions
/// from multiple clues add up; there is no joint inference across clues.
pub fn score_cell(clues: &[ClueReading], cell: Coord, w: &ScoreWeights) -> f64 {
    let mut attack_potential = 0.0;
    let mut gold_potential = 0.0;
    let mut penalty = 0.0;
    let mut any_clue = false;
    let mut rich_clue = false;

    for clue in clues.iter().filter(|c| c.touches(cell)) {
        any_clue = true;
        if clue.is_satisfied() {
            penalty += w.satisfied_clue_penalty;
        } else if !clue.hidden_neighbors.is_empty() {
            let p = clue.item_probability();
            attack_potential += p * w.attack_split;
            gold_potential += p * w.gold_split;
        }
        if clue.total >= w.rich_clue_threshold {
            rich_clue = true;
        }
    }

    if !any_clue {
        return w.frontier_baseline;
    }

    let mut score =
        attack_potential * w.attack_weight + gold_potential * w.gold_weight + penalty;
    if rich_clue {
        score += w.rich_clue_bonus;
    }
    score
}

/// Highest-scoring hidden cell, first-max in row-major scan order. The
/// deterministic tie-break is load-bearing: repeated calls on the same
/// view must return the same cell.
pub fn best_scoring_cell(
    view: &SanitizedBoard,
    clues: &[ClueReading],
    w: &ScoreWeights,
) -> Option<(Coord, f64)> {
    let mut best: Option<(Coord, f64)> = None;
    for cell in view.hidden_cells() {
        let score = score_cell(clues, cell, w);
        match best {
            Some((_, b)) if score <= b => {}
            _ => best = Some((cell, score)),
        }
    }
    best
}
