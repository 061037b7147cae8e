//! Grab a side pile after running out of cards.

use serde::{Deserialize, Serialize};

use super::{require_phase, Move};
use crate::board::{Board, BoardView};
use crate::core::{GamePhase, Player};
use crate::error::Rejection;
use crate::rules::legal_actions;

/// Take the next side pile into an empty hand.
///
/// Legal mid-turn right after emptying the hand, or at the start of the
/// player's next turn when the hand was emptied by a discard. Each team
/// grabs at most one pile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GrabPileAction;

impl Move for GrabPileAction {
    fn check(&self, player: &Player, board: &BoardView) -> Result<(), Rejection> {
        require_phase(board, &[GamePhase::NoCards, GamePhase::Draw])?;
        if !player.hand.is_empty() {
            return Err(Rejection::HandNotEmpty);
        }
        if board.team_has_grabbed_pile(player.team()) {
            return Err(Rejection::PileAlreadyGrabbed(player.team()));
        }
        if board.num_piles_remaining() == 0 {
            return Err(Rejection::NoPileAvailable);
        }
        Ok(())
    }

    fn apply(&self, player: &mut Player, board: &mut Board) {
        if let Some(mut pile) = board.take_pile() {
            player.hand.extend(pile.take_all());
            board.mark_pile_grabbed(player.team());
        }
    }

    /// A joker that arrives mid-turn must be played first when the team has
    /// a series that can take it and some joker play is actually allowed.
    /// A grab at the start of a turn still leaves the draw to make.
    fn target_phase(&self, player: &Player, board: &BoardView) -> GamePhase {
        if board.phase() == GamePhase::Draw {
            return GamePhase::Draw;
        }
        let holds_joker = player.hand.cards().iter().any(|c| c.is_joker());
        let joker_playable = holds_joker
            && board.team_accepts_joker(player.team())
            && !legal_actions(player, &board.with_phase(GamePhase::PlayJoker)).is_empty();
        if joker_playable {
            GamePhase::PlayJoker
        } else {
            GamePhase::Action
        }
    }

    fn reward(&self) -> i32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use crate::cards::{Card, CardSeries, Deck, Hand, Rank, Stack, Suit};
    use crate::core::{PlayerId, TeamId};

    fn pile(cards: &[Card]) -> Stack {
        Stack::new(cards.iter().copied())
    }

    #[test]
    fn test_grab_fills_hand_and_marks_team() {
        let cards = [Card::new(Rank::Ace, Suit::Clubs), Card::new(Rank::Six, Suit::Hearts)];
        let mut board = Board::new(Deck::default(), [pile(&cards), pile(&[Card::joker()])]);
        board.set_phase(GamePhase::NoCards);
        let mut player = Player::new(PlayerId::new(2), Hand::default());

        assert_eq!(GrabPileAction.check(&player, &board), Ok(()));
        GrabPileAction.apply(&mut player, &mut board);

        assert_eq!(player.num_cards(), 2);
        assert!(board.team_has_grabbed_pile(TeamId::RED));
        assert_eq!(board.num_piles_remaining(), 1);
        assert_eq!(GrabPileAction.target_phase(&player, &board), GamePhase::Action);

        let mut partner = Player::new(PlayerId::new(0), Hand::default());
        assert_eq!(
            GrabPileAction.check(&partner, &board),
            Err(Rejection::PileAlreadyGrabbed(TeamId::RED))
        );
        partner.hand.add(Card::joker());
        assert_eq!(GrabPileAction.check(&partner, &board), Err(Rejection::HandNotEmpty));
    }

    #[test]
    fn test_joker_in_pile_forces_play_joker() {
        let sixes = CardSeries::new([
            Card::new(Rank::Six, Suit::Hearts),
            Card::new(Rank::Six, Suit::Clubs),
            Card::new(Rank::Six, Suit::Spades),
        ]);
        let aces = [Card::new(Rank::Ace, Suit::Clubs), Card::new(Rank::Ace, Suit::Hearts)];
        let mut board = Board::new(Deck::default(), [pile(&[Card::joker(), aces[0], aces[1]])]);
        board.append_series(TeamId::BLUE, sixes);
        board.set_phase(GamePhase::NoCards);
        let mut player = Player::new(PlayerId::new(1), Hand::default());

        GrabPileAction.apply(&mut player, &mut board);
        assert_eq!(GrabPileAction.target_phase(&player, &board), GamePhase::PlayJoker);
    }

    #[test]
    fn test_joker_blocked_by_hand_clear_continues() {
        let mixed = CardSeries::new([
            Card::new(Rank::Six, Suit::Hearts),
            Card::new(Rank::Six, Suit::Clubs),
            Card::joker(),
        ]);
        let five = Card::new(Rank::Five, Suit::Clubs);
        let mut board = Board::new(Deck::default(), [pile(&[Card::joker(), five])]);
        board.append_series(TeamId::BLUE, mixed);
        board.set_phase(GamePhase::NoCards);
        let mut player = Player::new(PlayerId::new(1), Hand::default());

        GrabPileAction.apply(&mut player, &mut board);

        // The joker fits the sixes, but playing it would leave one card
        // and the team has no pure series.
        assert!(board.team_accepts_joker(TeamId::BLUE));
        assert_eq!(GrabPileAction.target_phase(&player, &board), GamePhase::Action);
        board.set_phase(GamePhase::Action);
        assert!(Action::discard(five).validate(&player, &board));
    }

    #[test]
    fn test_joker_without_home_continues() {
        let mut board = Board::new(Deck::default(), [pile(&[Card::joker()])]);
        board.set_phase(GamePhase::NoCards);
        let mut player = Player::new(PlayerId::new(1), Hand::default());

        GrabPileAction.apply(&mut player, &mut board);
        assert_eq!(GrabPileAction.target_phase(&player, &board), GamePhase::Action);
    }

    #[test]
    fn test_grab_at_turn_start_keeps_draw_phase() {
        let mut board = Board::new(Deck::default(), [pile(&[Card::joker()])]);
        let mut player = Player::new(PlayerId::new(3), Hand::default());

        assert_eq!(GrabPileAction.check(&player, &board), Ok(()));
        GrabPileAction.apply(&mut player, &mut board);
        assert_eq!(GrabPileAction.target_phase(&player, &board), GamePhase::Draw);
    }

    #[test]
    fn test_no_pile_left() {
        let mut board = Board::new(Deck::default(), []);
        board.set_phase(GamePhase::NoCards);
        let player = Player::new(PlayerId::new(0), Hand::default());
        assert_eq!(GrabPileAction.check(&player, &board), Err(Rejection::NoPileAvailable));
    }

    #[test]
    fn test_grab_illegal_in_action_phase() {
        let mut board = Board::new(Deck::default(), [pile(&[Card::joker()])]);
        board.set_phase(GamePhase::Action);
        let player = Player::new(PlayerId::new(0), Hand::default());
        assert_eq!(
            GrabPileAction.check(&player, &board),
            Err(Rejection::WrongPhase(GamePhase::Action))
        );
    }
}
