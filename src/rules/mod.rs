//! Match-level rules: move enumeration, scoring, termination.
//!
//! Per-move rules live with each action in `actions`. This module holds the
//! rules that look at the whole table at once.

pub mod legal;
pub mod scoring;

pub use legal::legal_actions;
pub use scoring::{finish_reason, team_score, FinishReason, GameResult};
