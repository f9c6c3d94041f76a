//! Expected-value sweeper: scores every hidden cell from adjacent clue
//! probability mass, weighted toward attacks. Fully deterministic — ties
//! go to the first cell in row-major scan order.

use rand::rngs::StdRng;

use crate::ai::clues::{no_hidden_sentinel, read_clues};
use crate::ai::weights::{best_scoring_cell, CALCULATOR_WEIGHTS};
use crate::ai::DecisionPolicy;
use crate::engine::models::{AiKind, Decision, EnemyState, PlayerState};
use crate::engine::sanitizer::SanitizedBoard;

pub struct CalculatorPolicy;

impl DecisionPolicy for CalculatorPolicy {
    fn kind(&self) -> AiKind {
        AiKind::Calculator
    }

    fn choose_target(
        &mut self,
        view: &SanitizedBoard,
        _enemy: &EnemyState,
        _player: &PlayerState,
        _rng: &mut StdRng,
    ) -> Decision {
        let clues = read_clues(view);
        match best_scoring_cell(view, &clues, &CALCULATOR_WEIGHTS) {
            Some((target, score)) => Decision {
                target,
                reasoning: format!(
                    "best expected strike value {:.2} at ({}, {})",
                    score, target.row, target.col
                ),
            },
            None => no_hidden_sentinel(),
        }
    }
}
