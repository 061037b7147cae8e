//! Turn phases.

use serde::{Deserialize, Serialize};

/// The sub-state of a turn. Exactly one is active, owned by the board.
///
/// ```text
///  Draw ──draw/pickup──▶ Action ──put/extend──▶ Action
///   ▲                     │  │
///   │                     │  └──put emptying hand──▶ NoCards ──grab──▶ Action | PlayJoker
///   │                     └──discard──▶ EndTurn | NoCardsEndTurn
///   └──────────── turn rotates ◀──────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start of turn: draw from the deck or pick up the discard stack.
    Draw,
    /// Normal play: lay down series, extend them, discard.
    Action,
    /// A joker came in with a grabbed pile and must be played first.
    PlayJoker,
    /// Turn ended with cards left in hand.
    EndTurn,
    /// Hand emptied mid-turn; the player must grab a pile.
    NoCards,
    /// Hand emptied by the discard that ended the turn.
    NoCardsEndTurn,
    /// Match over.
    Finished,
}

impl GamePhase {
    /// Phases after which the turn passes to the next player.
    #[must_use]
    pub const fn is_end_turn(self) -> bool {
        matches!(self, GamePhase::EndTurn | GamePhase::NoCardsEndTurn)
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::Draw => "draw",
            GamePhase::Action => "action",
            GamePhase::PlayJoker => "play-joker",
            GamePhase::EndTurn => "end-turn",
            GamePhase::NoCards => "no-cards",
            GamePhase::NoCardsEndTurn => "no-cards-end-turn",
            GamePhase::Finished => "finished",
        };
        f.write_str(name)
    }
}
