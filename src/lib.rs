//! Adversarial board-inference core for a minesweeper-style roguelike.
//!
//! The enemy takes turns revealing cells on the same grid as the player.
//! This crate owns the enemy "brains": four decision policies that reason
//! over a sanitized projection of the board, and the sanitizer that
//! enforces what the AI is allowed to see. Turn resolution (damage, gold,
//! fury) lives in the orchestration layer that consumes [`ai::EnemyBrain`].

pub mod ai;
pub mod engine;
