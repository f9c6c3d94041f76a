//! The patient hunter: no scoring, no memory, just clue arithmetic worked
//! down a strict priority ladder. Randomness only breaks ties inside a
//! rung, so forced reads are always taken.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::ai::clues::{certain_item_cells, no_hidden_sentinel, read_clues, safe_cells};
use crate::ai::DecisionPolicy;
use crate::engine::models::{AiKind, Coord, Decision, EnemyState, PlayerState};
use crate::engine::sanitizer::SanitizedBoard;

pub struct BrutePolicy;

impl DecisionPolicy for BrutePolicy {
    fn kind(&self) -> AiKind {
        AiKind::Brute
    }

    fn choose_target(
        &mut self,
        view: &SanitizedBoard,
        _enemy: &EnemyState,
        _player: &PlayerState,
        rng: &mut StdRng,
    ) -> Decision {
        let hidden = view.hidden_cells();
        if hidden.is_empty() {
            return no_hidden_sentinel();
        }
        let clues = read_clues(view);

        // Forced reads first: any cell a clue proves is an item.
        let certain = certain_item_cells(&clues);
        if let Some(&target) = certain.choose(rng) {
            return Decision {
                target,
                reasoning: format!(
                    "clue arithmetic pins an item at ({}, {})",
                    target.row, target.col
                ),
            };
        }

        // Drop cells a satisfied clue proves safe; if that empties the
        // pool, strike among all hidden cells anyway.
        let safe = safe_cells(&clues);
        let mut candidates: Vec<Coord> = hidden
            .iter()
            .copied()
            .filter(|c| !safe.contains(c))
            .collect();
        if candidates.is_empty() {
            candidates = hidden;
        }

        // Prefer cells that no unresolved clue is watching.
        let quiet: Vec<Coord> = candidates
            .iter()
            .copied()
            .filter(|&c| !clues.iter().any(|cl| cl.is_unresolved() && cl.touches(c)))
            .collect();
        if let Some(&target) = quiet.choose(rng) {
            return Decision {
                target,
                reasoning: format!(
                    "probing quiet ground at ({}, {}), away from open clues",
                    target.row, target.col
                ),
            };
        }

        let target = candidates
            .choose(rng)
            .copied()
            .unwrap_or(Coord::new(0, 0));
        Decision {
            target,
            reasoning: format!(
                "no forced read; striking ({}, {}) among remaining candidates",
                target.row, target.col
            ),
        }
    }
}
