//! Player agents: where actions come from.
//!
//! The engine never decides for a player. At every step it hands the
//! acting player's agent a `GameState` and takes back at most one action.
//!
//! - `RandomAgent`: uniform over the legal moves, seeded.
//! - `GreedyAgent`: highest immediate reward, cheapest discard.
//! - `QueuedAgent`: plays moves pushed from outside (a human, an API).

pub mod greedy;
pub mod queued;
pub mod random;

pub use greedy::GreedyAgent;
pub use queued::QueuedAgent;
pub use random::RandomAgent;

use crate::actions::Action;
use crate::game::GameState;

/// Decision policy for one seat.
pub trait PlayerAgent: Send {
    /// Short label for logs.
    fn name(&self) -> &'static str;

    /// Pick the next action, or `None` if no decision is available yet.
    ///
    /// Returning an illegal action is allowed; the match rejects it and
    /// asks again on the next step.
    fn decide(&mut self, state: &GameState) -> Option<Action>;
}
