//! Actions: one legal move each.
//!
//! ## Contract
//!
//! Every move kind implements `Move`:
//!
//! - `check`: pure precondition test, phase first. Never mutates, and only
//!   sees the face-up `BoardView`.
//! - `apply`: the effect. Only called after `check` passed.
//! - `target_phase`: computed after `apply`, while the board still shows
//!   the phase the move was made in.
//! - `reward`: scalar signal for automated agents, no bearing on the rules.
//! - `will_create_pure` and `leaves_pure`: feed the board's hand-clear
//!   authorization.
//!
//! `Action` is the closed set of move kinds. Dispatch is an exhaustive
//! match, so a new kind must be handled everywhere actions are consumed.
//!
//! ## Lifecycle
//!
//! `Action::execute` takes the action by value, validates, applies, and
//! returns an `ActionRecord`. An executed action no longer exists, so it
//! cannot be applied twice.
//!
//! ## Equality
//!
//! Actions compare and hash by what they act on (the card, the series, the
//! target series index), so agents can deduplicate candidates.

pub mod discard;
pub mod draw;
pub mod extend;
pub mod grab;
pub mod pickup;
pub mod put;

pub use discard::DiscardAction;
pub use draw::DrawAction;
pub use extend::ExtendSeriesAction;
pub use grab::GrabPileAction;
pub use pickup::PickupStackAction;
pub use put::PutAction;

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardView};
use crate::cards::{Card, CardSeries, Hand};
use crate::core::{GamePhase, Player, PlayerId};
use crate::error::{Rejected, Rejection};

/// The operations every move kind provides.
pub trait Move {
    /// Check every precondition against the current position.
    fn check(&self, player: &Player, board: &BoardView) -> Result<(), Rejection>;

    /// Move the cards. Callers must have run `check` first.
    fn apply(&self, player: &mut Player, board: &mut Board);

    /// The phase that follows this move, evaluated after `apply`.
    fn target_phase(&self, player: &Player, board: &BoardView) -> GamePhase;

    /// Reward for automated agents.
    fn reward(&self) -> i32;

    /// Executing this move lays down a new wildcard-free series, or makes one.
    fn will_create_pure(&self, _player: &Player, _board: &BoardView) -> bool {
        false
    }

    /// The player's team still holds a wildcard-free series once this move is done.
    fn leaves_pure(&self, player: &Player, board: &BoardView) -> bool {
        board.team_has_pure(player.team()) || self.will_create_pure(player, board)
    }
}

/// A move proposed by a player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Draw(DrawAction),
    PickupStack(PickupStackAction),
    Put(PutAction),
    ExtendSeries(ExtendSeriesAction),
    Discard(DiscardAction),
    GrabPile(GrabPileAction),
}

impl Action {
    #[must_use]
    pub fn draw() -> Self {
        Action::Draw(DrawAction)
    }

    #[must_use]
    pub fn pickup_stack(top: Card, cards: &[Card]) -> Self {
        Action::PickupStack(PickupStackAction::new(top, cards))
    }

    #[must_use]
    pub fn put(cards: impl IntoIterator<Item = Card>) -> Self {
        Action::Put(PutAction::new(CardSeries::new(cards)))
    }

    #[must_use]
    pub fn extend_series(index: usize, cards: &[Card]) -> Self {
        Action::ExtendSeries(ExtendSeriesAction::new(index, cards))
    }

    #[must_use]
    pub fn discard(card: Card) -> Self {
        Action::Discard(DiscardAction::new(card))
    }

    #[must_use]
    pub fn grab_pile() -> Self {
        Action::GrabPile(GrabPileAction)
    }

    fn as_move(&self) -> &dyn Move {
        match self {
            Action::Draw(a) => a,
            Action::PickupStack(a) => a,
            Action::Put(a) => a,
            Action::ExtendSeries(a) => a,
            Action::Discard(a) => a,
            Action::GrabPile(a) => a,
        }
    }

    /// `check` as a predicate. The reason for a rejection is logged at debug level.
    #[must_use]
    pub fn validate(&self, player: &Player, board: &BoardView) -> bool {
        match self.check(player, board) {
            Ok(()) => true,
            Err(reason) => {
                log::debug!("Invalid action {}. Reason: {}", self, reason);
                false
            }
        }
    }

    /// Validate and apply, consuming the action.
    ///
    /// A refused action comes back inside `Rejected` and nothing has been mutated.
    pub fn execute(self, player: &mut Player, board: &mut Board) -> Result<ActionRecord, Rejected> {
        if let Err(reason) = self.check(player, board.view()) {
            log::debug!("Invalid action {}. Reason: {}", self, reason);
            return Err(Rejected { action: self, reason });
        }
        self.apply(player, board);
        let target_phase = self.target_phase(player, board.view());
        let reward = self.reward();
        log::trace!("{} executed {} -> {}", player.id, self, target_phase);
        Ok(ActionRecord {
            player: player.id,
            action: self,
            target_phase,
            reward,
        })
    }
}

impl Move for Action {
    fn check(&self, player: &Player, board: &BoardView) -> Result<(), Rejection> {
        self.as_move().check(player, board)
    }

    fn apply(&self, player: &mut Player, board: &mut Board) {
        self.as_move().apply(player, board);
    }

    fn target_phase(&self, player: &Player, board: &BoardView) -> GamePhase {
        self.as_move().target_phase(player, board)
    }

    fn reward(&self) -> i32 {
        self.as_move().reward()
    }

    fn will_create_pure(&self, player: &Player, board: &BoardView) -> bool {
        self.as_move().will_create_pure(player, board)
    }

    fn leaves_pure(&self, player: &Player, board: &BoardView) -> bool {
        self.as_move().leaves_pure(player, board)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Draw(_) => write!(f, "Draw"),
            Action::PickupStack(a) => write!(f, "Pick up {} with {}", a.top, a.series()),
            Action::Put(a) => write!(f, "Put {}", a.series),
            Action::ExtendSeries(a) => write!(f, "Extend series {} with {:?}", a.index, a.cards.as_slice()),
            Action::Discard(a) => write!(f, "Discard {}", a.card),
            Action::GrabPile(_) => write!(f, "Grab pile"),
        }
    }
}

/// An executed action: who played it, the phase it led to, and its reward.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,
    pub action: Action,
    pub target_phase: GamePhase,
    pub reward: i32,
}

impl std::fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(E) {}: {} -> {}", self.player, self.action, self.target_phase)
    }
}

// =============================================================================
// Shared precondition helpers
// =============================================================================

/// Fail with `WrongPhase` unless the board is in one of `legal`.
pub(crate) fn require_phase(board: &BoardView, legal: &[GamePhase]) -> Result<(), Rejection> {
    if legal.contains(&board.phase()) {
        Ok(())
    } else {
        Err(Rejection::WrongPhase(board.phase()))
    }
}

/// Fail with the first card the hand cannot supply (copies counted).
pub(crate) fn require_in_hand(hand: &Hand, cards: &[Card]) -> Result<(), Rejection> {
    let mut remaining = hand.cards().to_vec();
    for card in cards {
        match remaining.iter().position(|c| c == card) {
            Some(pos) => {
                remaining.swap_remove(pos);
            }
            None => return Err(Rejection::CardNotInHand(*card)),
        }
    }
    Ok(())
}

/// Leaving one card or none needs the team's authorization.
pub(crate) fn require_may_clear<M: Move + ?Sized>(
    remaining: usize,
    player: &Player,
    board: &BoardView,
    action: &M,
) -> Result<(), Rejection> {
    if remaining <= 1 && !board.player_may_clear_hand(player, action) {
        return Err(Rejection::HandClearNotAllowed);
    }
    Ok(())
}

/// Phase after a move that keeps the turn going.
pub(crate) fn continue_phase(player: &Player) -> GamePhase {
    if player.hand.is_empty() {
        GamePhase::NoCards
    } else {
        GamePhase::Action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Deck, Rank, Stack, Suit};
    use std::collections::HashSet;

    #[test]
    fn test_actions_dedupe_by_key() {
        let nine = Card::new(Rank::Nine, Suit::Hearts);
        let mut seen = HashSet::new();

        seen.insert(Action::discard(nine));
        seen.insert(Action::discard(nine));
        seen.insert(Action::put([nine, nine, Card::joker()]));
        seen.insert(Action::put([Card::joker(), nine, nine]));
        seen.insert(Action::draw());

        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_execute_consumes_and_records() {
        let nine = Card::new(Rank::Nine, Suit::Hearts);
        let mut player = Player::new(PlayerId::new(0), Hand::new([nine, Card::joker()]));
        let mut board = Board::new(Deck::default(), [Stack::default()]);
        board.set_phase(GamePhase::Action);

        let record = Action::discard(nine).execute(&mut player, &mut board).unwrap();

        assert_eq!(record.player, PlayerId::new(0));
        assert_eq!(record.target_phase, GamePhase::EndTurn);
        assert_eq!(record.reward, 1);
        assert_eq!(board.stack().top(), Some(nine));
        assert_eq!(record.to_string(), "(E) Player 0: Discard 9♥ -> end-turn");
    }

    #[test]
    fn test_rejected_execute_mutates_nothing() {
        let nine = Card::new(Rank::Nine, Suit::Hearts);
        let mut player = Player::new(PlayerId::new(0), Hand::new([nine]));
        let mut board = Board::new(Deck::default(), [Stack::default()]);
        let before = (player.clone(), board.clone());

        let rejected = Action::discard(nine).execute(&mut player, &mut board).unwrap_err();

        assert_eq!(rejected.action, Action::discard(nine));
        assert_eq!(rejected.reason, Rejection::WrongPhase(GamePhase::Draw));
        assert_eq!((player, board), before);
    }

    const ALL_PHASES: [GamePhase; 7] = [
        GamePhase::Draw,
        GamePhase::Action,
        GamePhase::PlayJoker,
        GamePhase::EndTurn,
        GamePhase::NoCards,
        GamePhase::NoCardsEndTurn,
        GamePhase::Finished,
    ];

    #[test]
    fn test_each_kind_is_refused_outside_its_phases() {
        let nine = Card::new(Rank::Nine, Suit::Hearts);
        let player = Player::new(PlayerId::new(0), Hand::new([nine, nine, nine, Card::joker()]));
        let kinds = [
            (Action::draw(), vec![GamePhase::Draw]),
            (Action::pickup_stack(nine, &[nine, nine]), vec![GamePhase::Draw]),
            (Action::put([nine, nine, nine]), vec![GamePhase::Action, GamePhase::PlayJoker]),
            (Action::extend_series(0, &[nine]), vec![GamePhase::Action, GamePhase::PlayJoker]),
            (Action::discard(nine), vec![GamePhase::Action]),
            (Action::grab_pile(), vec![GamePhase::NoCards, GamePhase::Draw]),
        ];

        for (action, legal) in &kinds {
            for phase in ALL_PHASES {
                let mut board = Board::new(Deck::default(), [Stack::default()]);
                board.set_phase(phase);
                let result = action.check(&player, &board);
                if legal.contains(&phase) {
                    assert_ne!(result, Err(Rejection::WrongPhase(phase)), "{} in {}", action, phase);
                } else {
                    assert_eq!(result, Err(Rejection::WrongPhase(phase)), "{} in {}", action, phase);
                    assert!(!action.validate(&player, &board));
                }
            }
        }
    }

    #[test]
    fn test_require_in_hand_counts_copies() {
        let nine = Card::new(Rank::Nine, Suit::Hearts);
        let hand = Hand::new([nine, Card::joker()]);

        assert_eq!(require_in_hand(&hand, &[nine]), Ok(()));
        assert_eq!(require_in_hand(&hand, &[nine, nine]), Err(Rejection::CardNotInHand(nine)));
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::pickup_stack(Card::joker(), &[Card::new(Rank::Ace, Suit::Clubs)]);
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
