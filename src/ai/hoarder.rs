//! Gold-frenzied variant of the expected-value sweep: same scoring core as
//! the calculator, re-weighted toward gold, with a flat bonus for cells
//! beside rich clues (total >= 3). Tie-break is identical — first max in
//! row-major scan order.

use rand::rngs::StdRng;

use crate::ai::clues::{no_hidden_sentinel, read_clues};
use crate::ai::weights::{best_scoring_cell, HOARDER_WEIGHTS};
use crate::ai::DecisionPolicy;
use crate::engine::models::{AiKind, Decision, EnemyState, PlayerState};
use crate::engine::sanitizer::SanitizedBoard;

pub struct HoarderPolicy;

impl DecisionPolicy for HoarderPolicy {
    fn kind(&self) -> AiKind {
        AiKind::Hoarder
    }

    fn choose_target(
        &mut self,
        view: &SanitizedBoard,
        _enemy: &EnemyState,
        _player: &PlayerState,
        _rng: &mut StdRng,
    ) -> Decision {
        let clues = read_clues(view);
        match best_scoring_cell(view, &clues, &HOARDER_WEIGHTS) {
            Some((target, score)) => Decision {
                target,
                reasoning: format!(
                    "gold-weighted sweep favors ({}, {}) at {:.2}",
                    target.row, target.col, score
                ),
            },
            None => no_hidden_sentinel(),
        }
    }
}
