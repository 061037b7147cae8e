//! Lay down a new series.

use serde::{Deserialize, Serialize};

use super::{continue_phase, require_in_hand, require_may_clear, require_phase, Move};
use crate::board::{Board, BoardView};
use crate::cards::CardSeries;
use crate::core::{GamePhase, Player};
use crate::error::Rejection;

/// Put a series from hand onto the team's side of the table.
///
/// Legal in the action phase, and in the play-joker phase when the series
/// carries a joker. Laying down does not end the turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PutAction {
    pub series: CardSeries,
}

impl PutAction {
    #[must_use]
    pub fn new(series: CardSeries) -> Self {
        Self { series }
    }
}

impl Move for PutAction {
    fn check(&self, player: &Player, board: &BoardView) -> Result<(), Rejection> {
        require_phase(board, &[GamePhase::Action, GamePhase::PlayJoker])?;
        if board.phase() == GamePhase::PlayJoker && !self.series.contains_joker() {
            return Err(Rejection::JokerRequired);
        }
        let remaining = player.num_cards().saturating_sub(self.series.len());
        require_may_clear(remaining, player, board, self)?;
        require_in_hand(&player.hand, self.series.cards())?;
        if !self.series.is_valid() {
            return Err(Rejection::InvalidSeries(self.series.clone()));
        }
        Ok(())
    }

    fn apply(&self, player: &mut Player, board: &mut Board) {
        if player.hand.remove_all(self.series.cards()) {
            board.append_series(player.team(), self.series.clone());
        }
    }

    fn target_phase(&self, player: &Player, _board: &BoardView) -> GamePhase {
        continue_phase(player)
    }

    /// Exactly the value of the series laid down.
    fn reward(&self) -> i32 {
        self.series.total_value()
    }

    fn will_create_pure(&self, _player: &Player, _board: &BoardView) -> bool {
        self.series.is_pure()
    }
}
