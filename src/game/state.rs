//! Snapshot handed to agents.
//!
//! ## GameState
//!
//! What the acting player can see:
//! - The face-up board: deck size, pile sizes, discard stack, series, phase
//! - Every seat's hand size
//! - Their own hand
//! - Whose turn it is and the provisional team scores
//!
//! The deck order and the contents of the side piles are never part of it.
//! A `GameState` is an owned copy. Changing it has no effect on the match;
//! moves go back through `Game::apply`.

use serde::{Deserialize, Serialize};

use crate::actions::Action;
use crate::board::BoardView;
use crate::cards::Hand;
use crate::core::{GamePhase, Player, PlayerId, TeamId, TeamMap};
use crate::rules::legal_actions;

/// Public facts about one seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub team: TeamId,
    pub hand_size: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // === Table ===
    pub board: BoardView,

    /// One entry per seat, in seat order.
    pub players: Vec<PlayerView>,

    // === Acting player ===
    pub current_player: PlayerId,
    pub current_team: TeamId,

    /// The acting player's own cards.
    pub hand: Hand,

    // === Progress ===
    /// Scores counting only laid-down series and the pile bonus.
    pub scores: TeamMap<i32>,

    /// Completed turns so far.
    pub turn: u32,
}

impl GameState {
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.board.phase()
    }

    /// The acting player as the rules see them.
    #[must_use]
    pub fn me(&self) -> Player {
        Player::new(self.current_player, self.hand.clone())
    }

    /// Moves the acting player could make from this position.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        legal_actions(&self.me(), &self.board)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Turn {}: {} ({})", self.turn, self.current_player, self.current_team)?;
        write!(f, "{}", self.board)?;
        writeln!(f, "Hand: {}", self.hand)?;
        for (team, score) in self.scores.iter() {
            writeln!(f, "{}: {}", team, score)?;
        }
        Ok(())
    }
}
