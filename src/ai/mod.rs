//! Enemy decision policies and the per-encounter brain that dispatches to
//! them.
//!
//! The brain owns one policy instance and one RNG for the life of an
//! encounter. Every decision goes sanitize-then-dispatch: the raw board
//! never reaches a policy, and the sanitizer runs exactly once per call.

pub mod brute;
pub mod calculator;
pub mod clues;
pub mod hoarder;
pub mod illusionist;
pub mod weights;

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::ai::brute::BrutePolicy;
use crate::ai::calculator::CalculatorPolicy;
use crate::ai::hoarder::HoarderPolicy;
use crate::ai::illusionist::IllusionistPolicy;
use crate::engine::board::Board;
use crate::engine::models::{AiKind, Decision, EnemyState, PlayerState};
use crate::engine::sanitizer::{sanitize, SanitizedBoard};

/// A decision policy picks one hidden cell per enemy turn from the
/// sanitized view. Implementations take `&mut self` because the
/// illusionist carries cross-turn memory; the rest are stateless.
pub trait DecisionPolicy {
    fn kind(&self) -> AiKind;

    fn choose_target(
        &mut self,
        view: &SanitizedBoard,
        enemy: &EnemyState,
        player: &PlayerState,
        rng: &mut StdRng,
    ) -> Decision;
}

/// One variant per shipped policy. Unknown archetype tags can only ever
/// construct the Brute variant, so there is no runtime
/// "missing implementation" state to recover from.
pub enum EnemyPolicy {
    Brute(BrutePolicy),
    Calculator(CalculatorPolicy),
    Hoarder(HoarderPolicy),
    Illusionist(IllusionistPolicy),
}

impl EnemyPolicy {
    pub fn for_kind(kind: AiKind) -> Self {
        match kind {
            AiKind::Brute => EnemyPolicy::Brute(BrutePolicy),
            AiKind::Calculator => EnemyPolicy::Calculator(CalculatorPolicy),
            AiKind::Hoarder => EnemyPolicy::Hoarder(HoarderPolicy),
            AiKind::Illusionist => EnemyPolicy::Illusionist(IllusionistPolicy::new()),
        }
    }
}

impl DecisionPolicy for EnemyPolicy {
    fn kind(&self) -> AiKind {
        match self {
            EnemyPolicy::Brute(p) => p.kind(),
            EnemyPolicy::Calculator(p) => p.kind(),
            EnemyPolicy::Hoarder(p) => p.kind(),
            EnemyPolicy::Illusionist(p) => p.kind(),
        }
    }

    fn choose_target(
        &mut self,
        view: &SanitizedBoard,
        enemy: &EnemyState,
        player: &PlayerState,
        rng: &mut StdRng,
    ) -> Decision {
        match self {
            EnemyPolicy::Brute(p) => p.choose_target(view, enemy, player, rng),
            EnemyPolicy::Calculator(p) => p.choose_target(view, enemy, player, rng),
            EnemyPolicy::Hoarder(p) => p.choose_target(view, enemy, player, rng),
            EnemyPolicy::Illusionist(p) => p.choose_target(view, enemy, player, rng),
        }
    }
}

/// Resolve an archetype ai tag to a policy kind, falling back to Brute for
/// the "default" sentinel and for anything unregistered.
pub fn resolve_ai_tag(tag: &str) -> AiKind {
    match AiKind::from_tag(tag) {
        Some(kind) => kind,
        None => {
            if tag == "default" {
                tracing::debug!("archetype uses the default policy, dispatching brute");
            } else {
                tracing::warn!(tag, "no policy registered for ai tag, falling back to brute");
            }
            AiKind::Brute
        }
    }
}

/// Per-encounter decision maker: one policy, one RNG. Construct a fresh
/// brain when an encounter starts and drop it when the encounter ends —
/// the illusionist's pattern memory must not leak across encounters.
pub struct EnemyBrain {
    policy: EnemyPolicy,
    rng: StdRng,
}

impl EnemyBrain {
    pub fn new(kind: AiKind) -> Self {
        Self {
            policy: EnemyPolicy::for_kind(kind),
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic brain for tests and replayable encounters.
    pub fn with_seed(kind: AiKind, seed: u64) -> Self {
        Self {
            policy: EnemyPolicy::for_kind(kind),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Brain for an archetype's declared ai tag, with the Brute fallback
    /// applied for the "default" sentinel and unknown tags.
    pub fn for_ai_tag(tag: &str) -> Self {
        Self::new(resolve_ai_tag(tag))
    }

    pub fn kind(&self) -> AiKind {
        self.policy.kind()
    }

    /// Decide the enemy's next reveal. Asynchronous so callers can
    /// time-slice or await it alongside a "thinking" delay; the shipped
    /// policies all complete without suspending. If the caller abandons
    /// the future (encounter over, board mutated), it must discard the
    /// result rather than apply it.
    pub async fn decide_move(
        &mut self,
        board: &Board,
        enemy: &EnemyState,
        player: &PlayerState,
    ) -> Decision {
        self.decide_move_sync(board, enemy, player)
    }

    /// Synchronous path for the arena and benches. Sanitizes once, then
    /// dispatches on the sanitized view only.
    pub fn decide_move_sync(
        &mut self,
        board: &Board,
        enemy: &EnemyState,
        player: &PlayerState,
    ) -> Decision {
        let view = sanitize(board);
        self.policy.choose_target(&view, enemy, player, &mut self.rng)
    }

    /// Decide after a visible "thinking" pause, for callers pacing the
    /// enemy turn in the UI.
    pub async fn decide_move_paced(
        &mut self,
        board: &Board,
        enemy: &EnemyState,
        player: &PlayerState,
        delay: Duration,
    ) -> Decision {
        tokio::time::sleep(delay).await;
        self.decide_move(board, enemy, player).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::board::BoardLayout;

    fn enemy(tag: &str) -> EnemyState {
        EnemyState {
            archetype: tag.into(),
            hp: 20,
            max_hp: 20,
            armor: 0,
            fury: 0,
            fury_threshold: 5,
        }
    }

    #[test]
    fn test_resolve_known_tags() {
        assert_eq!(resolve_ai_tag("hoarder"), AiKind::Hoarder);
        assert_eq!(resolve_ai_tag("illusionist"), AiKind::Illusionist);
    }

    #[test]
    fn test_resolve_default_and_unknown_fall_back_to_brute() {
        assert_eq!(resolve_ai_tag("default"), AiKind::Brute);
        assert_eq!(resolve_ai_tag("void_singer"), AiKind::Brute);
    }

    #[test]
    fn test_for_ai_tag_constructs_matching_policy() {
        assert_eq!(EnemyBrain::for_ai_tag("illusionist").kind(), AiKind::Illusionist);
        assert_eq!(EnemyBrain::for_ai_tag("calculator").kind(), AiKind::Calculator);
        assert_eq!(EnemyBrain::for_ai_tag("default").kind(), AiKind::Brute);
    }

    #[test]
    fn test_fallback_brain_matches_brute_exactly() {
        let layout = BoardLayout {
            attacks: 5,
            gold: 4,
            traps: 1,
        };
        let mut board_rng = StdRng::seed_from_u64(21);
        let board = Board::generate(6, 6, &layout, &mut board_rng);

        let mut fallback = EnemyBrain::with_seed(resolve_ai_tag("???"), 77);
        let mut brute = EnemyBrain::with_seed(AiKind::Brute, 77);
        assert_eq!(fallback.kind(), AiKind::Brute);

        let e = enemy("grunt");
        let p = PlayerState::default();
        for _ in 0..5 {
            let a = fallback.decide_move_sync(&board, &e, &p);
            let b = brute.decide_move_sync(&board, &e, &p);
            assert_eq!(a.target, b.target);
        }
    }

    #[tokio::test]
    async fn test_async_decision_resolves() {
        let layout = BoardLayout {
            attacks: 3,
            gold: 3,
            traps: 0,
        };
        let mut board_rng = StdRng::seed_from_u64(5);
        let board = Board::generate(5, 5, &layout, &mut board_rng);

        let mut brain = EnemyBrain::with_seed(AiKind::Calculator, 1);
        let d = brain
            .decide_move(&board, &enemy("appraiser"), &PlayerState::default())
            .await;
        assert!(!board.get(d.target).revealed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_paced_decision_waits_out_the_delay() {
        let layout = BoardLayout {
            attacks: 2,
            gold: 2,
            traps: 0,
        };
        let mut board_rng = StdRng::seed_from_u64(9);
        let board = Board::generate(4, 4, &layout, &mut board_rng);

        let mut brain = EnemyBrain::with_seed(AiKind::Brute, 2);
        let started = tokio::time::Instant::now();
        let _ = brain
            .decide_move_paced(
                &board,
                &enemy("patient_hunter"),
                &PlayerState::default(),
                Duration::from_millis(350),
            )
            .await;
        assert!(started.elapsed() >= Duration::from_millis(350));
    }
}
