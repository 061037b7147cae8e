use super::PlayerAgent;
use crate::actions::{Action, Move};
use crate::game::GameState;

/// Takes the move with the highest immediate reward. Among discards it
/// throws away the cheapest card.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyAgent;

impl GreedyAgent {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn preference(action: &Action) -> (i32, i32) {
        let discard_cost = match action {
            Action::Discard(discard) => discard.card.value(),
            _ => 0,
        };
        (action.reward(), -discard_cost)
    }
}

impl PlayerAgent for GreedyAgent {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn decide(&mut self, state: &GameState) -> Option<Action> {
        state
            .legal_actions()
            .into_iter()
            .max_by_key(Self::preference)
    }
}
