//! Pick up the discard stack by melding its top card.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{continue_phase, require_in_hand, require_may_clear, require_phase, Move};
use crate::board::{Board, BoardView};
use crate::cards::{Card, CardSeries};
use crate::core::{GamePhase, Player};
use crate::error::Rejection;

/// Instead of drawing, lay the top discard down together with cards from
/// hand as a new series, then take the rest of the stack into hand.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PickupStackAction {
    /// The discard the player expects on top of the stack.
    pub top: Card,
    /// Cards from hand that join it.
    pub cards: SmallVec<[Card; 4]>,
}

impl PickupStackAction {
    #[must_use]
    pub fn new(top: Card, cards: &[Card]) -> Self {
        let mut cards = SmallVec::from_slice(cards);
        cards.sort();
        Self { top, cards }
    }

    /// The series this pickup lays down.
    #[must_use]
    pub fn series(&self) -> CardSeries {
        CardSeries::new(self.cards.iter().copied().chain(std::iter::once(self.top)))
    }
}

impl Move for PickupStackAction {
    fn check(&self, player: &Player, board: &BoardView) -> Result<(), Rejection> {
        require_phase(board, &[GamePhase::Draw])?;
        match board.stack().top() {
            None => return Err(Rejection::EmptyStack),
            Some(top) if top != self.top => return Err(Rejection::StackTopMismatch(self.top)),
            Some(_) => {}
        }
        // Everything under the top discard lands in hand.
        let remaining = player.num_cards().saturating_sub(self.cards.len()) + board.stack().len() - 1;
        require_may_clear(remaining, player, board, self)?;
        require_in_hand(&player.hand, &self.cards)?;
        let series = self.series();
        if !series.is_valid() {
            return Err(Rejection::InvalidSeries(series));
        }
        Ok(())
    }

    fn apply(&self, player: &mut Player, board: &mut Board) {
        if !player.hand.remove_all(&self.cards) {
            return;
        }
        if let Some(top) = board.pop_stack() {
            debug_assert_eq!(top, self.top);
            board.append_series(player.team(), self.series());
        }
        player.hand.extend(board.take_stack());
    }

    fn target_phase(&self, player: &Player, _board: &BoardView) -> GamePhase {
        continue_phase(player)
    }

    fn reward(&self) -> i32 {
        self.series().total_value()
    }

    fn will_create_pure(&self, _player: &Player, _board: &BoardView) -> bool {
        self.series().is_pure()
    }
}
