//! Scoring and termination.
//!
//! ## Score
//!
//! A team scores the value of every series it laid down, plus
//! `PILE_BONUS` once it has grabbed a pile. The final score also counts the
//! cards the opponents are still holding; provisional scores shown to agents
//! leave them out so no hidden hand leaks.
//!
//! ## Termination
//!
//! Two independent ways out, both checked before every step:
//!
//! - the deck is empty and no pile is left to replace it
//! - a player holds no cards, their team grabbed a pile, and the team has a
//!   pure series on the table

use serde::{Deserialize, Serialize};

use crate::board::BoardView;
use crate::cards::Card;
use crate::core::config::PILE_BONUS;
use crate::core::{Player, PlayerId, TeamId};

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    /// No cards left to draw.
    DeckExhausted,
    /// This player went out.
    WentOut(PlayerId),
}

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Winner(TeamId),
    Draw,
}

impl GameResult {
    /// Check if a team won.
    #[must_use]
    pub fn is_winner(&self, team: TeamId) -> bool {
        matches!(self, GameResult::Winner(t) if *t == team)
    }
}

/// Score of `team`, counting `opponent_cards` in its favor.
///
/// Finishing by exhausting the deck earns nothing extra.
// TODO: award a bonus to the team that drew the last card of the deck.
pub fn team_score(board: &BoardView, team: TeamId, opponent_cards: impl IntoIterator<Item = Card>) -> i32 {
    let mut total = board.team(team).series_value();
    total += opponent_cards.into_iter().map(|c| c.value()).sum::<i32>();
    if board.team_has_grabbed_pile(team) {
        total += PILE_BONUS;
    }
    total
}

/// Why the match is over, or `None` while it goes on.
pub fn finish_reason<'a>(
    board: &BoardView,
    players: impl IntoIterator<Item = &'a Player>,
) -> Option<FinishReason> {
    if !board.can_draw() {
        return Some(FinishReason::DeckExhausted);
    }
    players
        .into_iter()
        .find(|p| {
            p.hand.is_empty() && board.team_has_grabbed_pile(p.team()) && board.team_has_pure(p.team())
        })
        .map(|p| FinishReason::WentOut(p.id))
}
