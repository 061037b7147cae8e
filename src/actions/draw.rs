//! Draw from the deck.

use serde::{Deserialize, Serialize};

use super::{require_phase, Move};
use crate::board::{Board, BoardView};
use crate::core::{GamePhase, Player};
use crate::error::Rejection;

/// Take the top card of the deck. When the deck is empty the next side pile
/// takes its place first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawAction;

impl Move for DrawAction {
    fn check(&self, _player: &Player, board: &BoardView) -> Result<(), Rejection> {
        require_phase(board, &[GamePhase::Draw])?;
        if !board.can_draw() {
            return Err(Rejection::NothingToDraw);
        }
        Ok(())
    }

    fn apply(&self, player: &mut Player, board: &mut Board) {
        if let Some(card) = board.draw_card() {
            player.hand.add(card);
        }
    }

    fn target_phase(&self, _player: &Player, _board: &BoardView) -> GamePhase {
        GamePhase::Action
    }

    fn reward(&self) -> i32 {
        0
    }
}
