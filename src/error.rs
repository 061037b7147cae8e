//! Error types.
//!
//! - `Rejection`: why an action failed validation. A rejected action leaves
//!   the match untouched; it is reported, never propagated as a failure.
//! - `Rejected`: the refused action together with its `Rejection`.
//! - `EngineError`: misuse of the orchestration layer.

use thiserror::Error;

use crate::actions::Action;
use crate::cards::{Card, CardSeries};
use crate::core::{GamePhase, TeamId};
use crate::game::MatchId;

/// Reason an action is not legal in the current position.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("wrong phase - {0}")]
    WrongPhase(GamePhase),
    #[error("{0} is not in hand")]
    CardNotInHand(Card),
    #[error("no cards given")]
    NoCards,
    #[error("{0} is not a valid series")]
    InvalidSeries(CardSeries),
    #[error("a joker must be played")]
    JokerRequired,
    #[error("team may not clear its hand yet")]
    HandClearNotAllowed,
    #[error("the discard stack is empty")]
    EmptyStack,
    #[error("top of the discard stack is not {0}")]
    StackTopMismatch(Card),
    #[error("nothing left to draw")]
    NothingToDraw,
    #[error("no pile left to grab")]
    NoPileAvailable,
    #[error("{0} already grabbed a pile")]
    PileAlreadyGrabbed(TeamId),
    #[error("hand is not empty")]
    HandNotEmpty,
    #[error("team has no series {0}")]
    UnknownSeries(usize),
}

/// An action handed back unexecuted, with the reason it was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Invalid action {action}. Reason: {reason}")]
pub struct Rejected {
    pub action: Action,
    pub reason: Rejection,
}

/// Orchestration failure.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no match with id {0}")]
    UnknownMatch(MatchId),
    #[error("match {0} is not initialized")]
    NotInitialized(MatchId),
    #[error("deck ran out while dealing: needed {needed}, had {available}")]
    DeckExhausted { needed: usize, available: usize },
    #[error("the match is finished")]
    GameFinished,
}
