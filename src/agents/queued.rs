use std::collections::VecDeque;

use super::PlayerAgent;
use crate::actions::Action;
use crate::game::GameState;

/// Replays moves supplied from outside the engine, oldest first.
///
/// An empty queue means the player has not decided yet, so the match
/// waits instead of stepping.
#[derive(Clone, Debug, Default)]
pub struct QueuedAgent {
    queue: VecDeque<Action>,
}

impl QueuedAgent {
    #[must_use]
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            queue: actions.into_iter().collect(),
        }
    }

    pub fn push(&mut self, action: Action) {
        self.queue.push_back(action);
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl PlayerAgent for QueuedAgent {
    fn name(&self) -> &'static str {
        "queued"
    }

    fn decide(&mut self, _state: &GameState) -> Option<Action> {
        self.queue.pop_front()
    }
}
