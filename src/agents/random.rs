use super::PlayerAgent;
use crate::actions::Action;
use crate::core::GameRng;
use crate::game::GameState;

/// Picks uniformly among the legal moves.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl PlayerAgent for RandomAgent {
    fn name(&self) -> &'static str {
        "random"
    }

    fn decide(&mut self, state: &GameState) -> Option<Action> {
        let actions = state.legal_actions();
        self.rng.choose(&actions).cloned()
    }
}
