//! Add cards from hand to a series already on the table.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{continue_phase, require_in_hand, require_may_clear, require_phase, Move};
use crate::board::{Board, BoardView};
use crate::cards::{Card, CardSeries};
use crate::core::{GamePhase, Player};
use crate::error::Rejection;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtendSeriesAction {
    /// Position of the series among the team's series.
    pub index: usize,
    pub cards: SmallVec<[Card; 4]>,
}

impl ExtendSeriesAction {
    #[must_use]
    pub fn new(index: usize, cards: &[Card]) -> Self {
        let mut cards = SmallVec::from_slice(cards);
        cards.sort();
        Self { index, cards }
    }

    /// The series as it would look after this move.
    fn extended(&self, player: &Player, board: &BoardView) -> Option<CardSeries> {
        board
            .series(player.team())
            .get(self.index)
            .map(|series| series.with_cards(&self.cards))
    }
}

impl Move for ExtendSeriesAction {
    fn check(&self, player: &Player, board: &BoardView) -> Result<(), Rejection> {
        require_phase(board, &[GamePhase::Action, GamePhase::PlayJoker])?;
        if self.cards.is_empty() {
            return Err(Rejection::NoCards);
        }
        if board.phase() == GamePhase::PlayJoker && !self.cards.iter().any(|c| c.is_joker()) {
            return Err(Rejection::JokerRequired);
        }
        let extended = self
            .extended(player, board)
            .ok_or(Rejection::UnknownSeries(self.index))?;
        let remaining = player.num_cards().saturating_sub(self.cards.len());
        require_may_clear(remaining, player, board, self)?;
        require_in_hand(&player.hand, &self.cards)?;
        if !extended.is_valid() {
            return Err(Rejection::InvalidSeries(extended));
        }
        Ok(())
    }

    fn apply(&self, player: &mut Player, board: &mut Board) {
        let Some(extended) = self.extended(player, board.view()) else {
            return;
        };
        if player.hand.remove_all(&self.cards) {
            board.replace_series(player.team(), self.index, extended);
        }
    }

    fn target_phase(&self, player: &Player, _board: &BoardView) -> GamePhase {
        continue_phase(player)
    }

    /// Value of the cards added.
    fn reward(&self) -> i32 {
        self.cards.iter().map(|c| c.value()).sum()
    }

    fn will_create_pure(&self, player: &Player, board: &BoardView) -> bool {
        self.extended(player, board).is_some_and(|s| s.is_pure())
    }

    /// The extended series replaces the original, so a joker added to the
    /// team's only pure series leaves none behind.
    fn leaves_pure(&self, player: &Player, board: &BoardView) -> bool {
        let others_pure = board
            .series(player.team())
            .iter()
            .enumerate()
            .any(|(index, series)| index != self.index && series.is_pure());
        others_pure || self.will_create_pure(player, board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Deck, Hand, Rank, Stack, Suit};
    use crate::core::{PlayerId, TeamId};

    fn tens() -> CardSeries {
        CardSeries::new([
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::Ten, Suit::Clubs),
            Card::new(Rank::Ten, Suit::Spades),
        ])
    }

    fn board_with_tens(phase: GamePhase) -> Board {
        let mut board = Board::new(Deck::default(), [Stack::default()]);
        board.append_series(TeamId::RED, tens());
        board.set_phase(phase);
        board
    }

    #[test]
    fn test_extend_series() {
        let ten = Card::new(Rank::Ten, Suit::Diamonds);
        let mut player = Player::new(
            PlayerId::new(2),
            Hand::new([ten, Card::joker(), Card::new(Rank::Ace, Suit::Clubs)]),
        );
        let mut board = board_with_tens(GamePhase::Action);
        let extend = ExtendSeriesAction::new(0, &[ten]);

        assert_eq!(extend.check(&player, &board), Ok(()));
        assert!(extend.will_create_pure(&player, &board));
        extend.apply(&mut player, &mut board);

        assert_eq!(board.series(TeamId::RED)[0].len(), 4);
        assert_eq!(player.num_cards(), 2);
        assert_eq!(extend.target_phase(&player, &board), GamePhase::Action);
        assert_eq!(extend.reward(), 10);
    }

    #[test]
    fn test_unknown_series() {
        let player = Player::new(PlayerId::new(1), Hand::new([Card::joker(), Card::joker()]));
        let board = board_with_tens(GamePhase::Action);

        // Player 1 is on Blue, which has no series.
        assert_eq!(
            ExtendSeriesAction::new(0, &[Card::joker()]).check(&player, &board),
            Err(Rejection::UnknownSeries(0))
        );
    }

    #[test]
    fn test_play_joker_phase_requires_joker() {
        let ten = Card::new(Rank::Ten, Suit::Diamonds);
        let player = Player::new(PlayerId::new(0), Hand::new([ten, Card::joker(), ten, ten]));
        let board = board_with_tens(GamePhase::PlayJoker);

        assert_eq!(
            ExtendSeriesAction::new(0, &[ten]).check(&player, &board),
            Err(Rejection::JokerRequired)
        );
        assert_eq!(ExtendSeriesAction::new(0, &[Card::joker()]).check(&player, &board), Ok(()));
    }

    #[test]
    fn test_extension_must_stay_valid() {
        let king = Card::new(Rank::King, Suit::Diamonds);
        let player = Player::new(PlayerId::new(0), Hand::new([king, king, king]));
        let board = board_with_tens(GamePhase::Action);

        assert!(matches!(
            ExtendSeriesAction::new(0, &[king]).check(&player, &board),
            Err(Rejection::InvalidSeries(_))
        ));
    }

    #[test]
    fn test_cannot_go_out_by_spoiling_last_pure() {
        let mut player = Player::new(PlayerId::new(0), Hand::new([Card::joker()]));
        let mut board = board_with_tens(GamePhase::Action);
        board.mark_pile_grabbed(TeamId::RED);
        let spoil = ExtendSeriesAction::new(0, &[Card::joker()]);

        assert!(!spoil.leaves_pure(&player, &board));
        assert_eq!(spoil.check(&player, &board), Err(Rejection::HandClearNotAllowed));

        // With a second pure series the team can still go out.
        board.append_series(TeamId::RED, tens());
        assert!(spoil.leaves_pure(&player, &board));
        assert_eq!(spoil.check(&player, &board), Ok(()));
        spoil.apply(&mut player, &mut board);
        assert_eq!(spoil.target_phase(&player, &board), GamePhase::NoCards);
        assert!(board.team_has_pure(TeamId::RED));
    }

    #[test]
    fn test_pure_extension_leaves_pure() {
        let ten = Card::new(Rank::Ten, Suit::Diamonds);
        let player = Player::new(PlayerId::new(2), Hand::new([ten]));
        let mut board = board_with_tens(GamePhase::Action);
        board.mark_pile_grabbed(TeamId::RED);

        assert_eq!(ExtendSeriesAction::new(0, &[ten]).check(&player, &board), Ok(()));
    }

    #[test]
    fn test_empty_extension_rejected() {
        let player = Player::new(PlayerId::new(0), Hand::new([Card::joker()]));
        let board = board_with_tens(GamePhase::Action);
        assert_eq!(ExtendSeriesAction::new(0, &[]).check(&player, &board), Err(Rejection::NoCards));
    }
}
