//! Discard a card, ending the turn.

use serde::{Deserialize, Serialize};

use super::{require_phase, Move};
use crate::board::{Board, BoardView};
use crate::cards::Card;
use crate::core::config::DISCARD_REWARD;
use crate::core::{GamePhase, Player};
use crate::error::Rejection;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscardAction {
    pub card: Card,
}

impl DiscardAction {
    #[must_use]
    pub fn new(card: Card) -> Self {
        Self { card }
    }
}

impl Move for DiscardAction {
    fn check(&self, player: &Player, board: &BoardView) -> Result<(), Rejection> {
        require_phase(board, &[GamePhase::Action])?;
        if !player.hand.contains(self.card) {
            return Err(Rejection::CardNotInHand(self.card));
        }
        Ok(())
    }

    fn apply(&self, player: &mut Player, board: &mut Board) {
        if let Some(card) = player.hand.pop(self.card) {
            board.discard(card);
        }
    }

    /// Running out by discarding is told apart from other ways of ending a turn.
    fn target_phase(&self, player: &Player, _board: &BoardView) -> GamePhase {
        if player.hand.is_empty() {
            GamePhase::NoCardsEndTurn
        } else {
            GamePhase::EndTurn
        }
    }

    fn reward(&self) -> i32 {
        DISCARD_REWARD
    }
}
