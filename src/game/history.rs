//! Per-match action log.
//!
//! Each entry pairs the snapshot the acting player saw with the action
//! that was executed from it. The opening entry of a match carries no
//! action. With a capacity set, the oldest entries are evicted first.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::actions::ActionRecord;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub state: GameState,
    pub action: Option<ActionRecord>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GameHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: Option<usize>,
}

impl GameHistory {
    /// An empty log. `None` never evicts.
    #[must_use]
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    pub fn add(&mut self, state: GameState, action: Option<ActionRecord>) {
        if self.capacity == Some(0) {
            return;
        }
        if let Some(capacity) = self.capacity {
            while self.entries.len() >= capacity {
                self.entries.pop_front();
            }
        }
        self.entries.push_back(HistoryEntry { state, action });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Oldest entry first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Executed actions in order, skipping the opening entry.
    pub fn actions(&self) -> impl Iterator<Item = &ActionRecord> {
        self.entries.iter().filter_map(|entry| entry.action.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use crate::board::Board;
    use crate::cards::{Deck, Hand};
    use crate::core::{GamePhase, PlayerId, TeamId, TeamMap};

    fn snapshot(turn: u32) -> GameState {
        GameState {
            board: Board::new(Deck::default(), []).view().clone(),
            players: Vec::new(),
            current_player: PlayerId::new(0),
            current_team: TeamId::RED,
            hand: Hand::default(),
            scores: TeamMap::with_default(),
            turn,
        }
    }

    fn record() -> ActionRecord {
        ActionRecord {
            player: PlayerId::new(0),
            action: Action::draw(),
            target_phase: GamePhase::Action,
            reward: 0,
        }
    }

    #[test]
    fn test_unbounded_history() {
        let mut history = GameHistory::new(None);
        history.add(snapshot(0), None);
        history.add(snapshot(0), Some(record()));

        assert_eq!(history.len(), 2);
        assert_eq!(history.actions().count(), 1);
        assert_eq!(history.last().and_then(|e| e.action.clone()), Some(record()));

        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = GameHistory::new(Some(2));
        for turn in 0..5 {
            history.add(snapshot(turn), None);
        }

        let turns: Vec<u32> = history.iter().map(|e| e.state.turn).collect();
        assert_eq!(turns, vec![3, 4]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut history = GameHistory::new(Some(0));
        history.add(snapshot(0), None);
        assert!(history.is_empty());
    }
}
