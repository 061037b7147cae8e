//! The shared table: deck, side piles, and the face-up `BoardView`.
//!
//! The board is the single source of truth for `GamePhase`. Actions read it
//! through the view it derefs to and mutate it only from their `apply`
//! step; the orchestrator sets the phase each executed action computes.
//!
//! Cards never appear or vanish here: every mutator moves cards between the
//! board's containers or hands them to the caller to place in a hand.

use std::ops::Deref;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::view::BoardView;
use crate::cards::{Card, CardSeries, Deck, Stack};
use crate::core::{GamePhase, TeamId, TeamMap};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    deck: Deck,
    piles: Vector<Stack>,
    public: BoardView,
}

impl Board {
    /// A board with the given deck and side piles, an empty discard stack,
    /// and the phase set to `Draw`.
    #[must_use]
    pub fn new(deck: Deck, piles: impl IntoIterator<Item = Stack>) -> Self {
        let piles: Vector<Stack> = piles.into_iter().collect();
        let public = BoardView {
            phase: GamePhase::Draw,
            deck_size: deck.len(),
            pile_sizes: piles.iter().map(Stack::len).collect(),
            stack: Stack::default(),
            teams: TeamMap::with_default(),
        };
        Self { deck, piles, public }
    }

    /// What every seat can see.
    #[must_use]
    pub fn view(&self) -> &BoardView {
        &self.public
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        self.public.phase = phase;
    }

    // === Deck and piles ===

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Take the next side pile, left before right.
    pub fn take_pile(&mut self) -> Option<Stack> {
        let pile = self.piles.pop_front()?;
        self.public.pile_sizes.pop_front();
        Some(pile)
    }

    /// Draw the top card. An empty deck is first replaced by the next pile.
    pub fn draw_card(&mut self) -> Option<Card> {
        if self.deck.is_empty() {
            let pile = self.take_pile()?;
            log::debug!("deck exhausted, {} cards from a side pile become the deck", pile.len());
            self.deck = Deck::from(pile);
        }
        let card = self.deck.deal();
        self.public.deck_size = self.deck.len();
        card
    }

    // === Discard stack ===

    pub fn discard(&mut self, card: Card) {
        self.public.stack.put(card);
    }

    /// Pop the top discard.
    pub fn pop_stack(&mut self) -> Option<Card> {
        self.public.stack.pop()
    }

    /// Empty the discard stack, bottom card first.
    pub fn take_stack(&mut self) -> Vec<Card> {
        self.public.stack.take_all()
    }

    // === Teams ===

    pub fn append_series(&mut self, team: TeamId, series: CardSeries) {
        self.public.teams[team].series.push_back(series);
    }

    /// Swap series `index` for an extended version. Returns false if there is
    /// no such series.
    pub fn replace_series(&mut self, team: TeamId, index: usize, series: CardSeries) -> bool {
        match self.public.teams[team].series.get_mut(index) {
            Some(slot) => {
                *slot = series;
                true
            }
            None => false,
        }
    }

    pub fn mark_pile_grabbed(&mut self, team: TeamId) {
        self.public.teams[team].grabbed_pile = true;
    }

    // === Accounting ===

    /// Every card on the board: deck, discard stack, piles, and all series.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.deck
            .iter()
            .chain(self.public.stack.iter())
            .chain(self.piles.iter().flat_map(Stack::iter))
            .chain(
                self.public
                    .teams
                    .values()
                    .flat_map(|area| area.series.iter().flat_map(CardSeries::iter)),
            )
            .copied()
    }
}

impl Deref for Board {
    type Target = BoardView;

    fn deref(&self) -> &BoardView {
        &self.public
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.public)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, ExtendSeriesAction, PutAction};
    use crate::cards::{Hand, Rank, Suit};
    use crate::core::{Player, PlayerId};

    fn nines() -> CardSeries {
        CardSeries::new([
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::Nine, Suit::Spades),
            Card::new(Rank::Nine, Suit::Clubs),
        ])
    }

    #[test]
    fn test_new_board_starts_in_draw() {
        let board = Board::new(Deck::double(true), [Stack::default(), Stack::default()]);
        assert_eq!(board.phase(), GamePhase::Draw);
        assert_eq!(board.num_piles_remaining(), 2);
        assert_eq!(board.cards().count(), 108);
    }

    #[test]
    fn test_draw_replenishes_from_pile() {
        let pile_card = Card::new(Rank::Six, Suit::Clubs);
        let mut board = Board::new(Deck::default(), [Stack::new([pile_card])]);

        assert!(board.can_draw());
        assert_eq!(board.draw_card(), Some(pile_card));
        assert_eq!(board.num_piles_remaining(), 0);
        assert!(!board.can_draw());
        assert_eq!(board.draw_card(), None);
    }

    #[test]
    fn test_view_tracks_hidden_counts() {
        let six = Card::new(Rank::Six, Suit::Clubs);
        let mut board = Board::new(
            Deck::from_cards([six, six]),
            [Stack::new([six, six, six]), Stack::new([six])],
        );
        assert_eq!(board.deck_size(), 2);
        assert_eq!(board.pile_sizes().iter().copied().collect::<Vec<_>>(), vec![3, 1]);

        board.draw_card();
        board.draw_card();
        assert_eq!(board.deck_size(), 0);

        // The left pile becomes the deck and one of its cards is dealt.
        board.draw_card();
        assert_eq!(board.deck_size(), 2);
        assert_eq!(board.pile_sizes().iter().copied().collect::<Vec<_>>(), vec![1]);
        assert_eq!(board.view().deck_size(), board.deck().len());
    }

    #[test]
    fn test_team_queries() {
        let mut board = Board::new(Deck::default(), []);
        assert!(!board.team_has_pure(TeamId::RED));

        board.append_series(TeamId::RED, nines());
        assert!(board.team_has_pure(TeamId::RED));
        assert!(!board.team_has_pure(TeamId::BLUE));
        assert!(board.team_accepts_joker(TeamId::RED));
        assert_eq!(board.get_series_for_player(PlayerId::new(2)).len(), 1);
        assert!(board.get_series_for_player(PlayerId::new(1)).is_empty());

        board.mark_pile_grabbed(TeamId::BLUE);
        assert!(board.team_has_grabbed_pile(TeamId::BLUE));
        assert!(!board.team_has_grabbed_pile(TeamId::RED));
    }

    #[test]
    fn test_replace_series() {
        let mut board = Board::new(Deck::default(), []);
        board.append_series(TeamId::BLUE, nines());

        let extended = nines().with_cards(&[Card::joker()]);
        assert!(board.replace_series(TeamId::BLUE, 0, extended.clone()));
        assert_eq!(board.series(TeamId::BLUE)[0], extended);
        assert!(!board.replace_series(TeamId::BLUE, 3, nines()));
    }

    #[test]
    fn test_may_clear_hand_before_grab_needs_a_pile() {
        let player = Player::new(PlayerId::new(0), Hand::default());
        let action = Action::Put(PutAction::new(nines()));

        let with_pile = Board::new(Deck::default(), [Stack::default()]);
        assert!(with_pile.player_may_clear_hand(&player, &action));

        let without_pile = Board::new(Deck::default(), []);
        assert!(!without_pile.player_may_clear_hand(&player, &action));
    }

    #[test]
    fn test_may_clear_hand_after_grab_needs_a_pure() {
        let player = Player::new(PlayerId::new(1), Hand::default());
        let mut board = Board::new(Deck::default(), [Stack::default()]);
        board.mark_pile_grabbed(TeamId::BLUE);

        let dirty = Action::Put(PutAction::new(nines().with_cards(&[Card::joker()])));
        assert!(!board.player_may_clear_hand(&player, &dirty));

        let pure = Action::Put(PutAction::new(nines()));
        assert!(board.player_may_clear_hand(&player, &pure));

        board.append_series(TeamId::BLUE, nines());
        assert!(board.player_may_clear_hand(&player, &dirty));
    }

    #[test]
    fn test_may_clear_hand_needs_a_pure_afterwards() {
        let player = Player::new(PlayerId::new(0), Hand::new([Card::joker()]));
        let mut board = Board::new(Deck::default(), [Stack::default()]);
        board.mark_pile_grabbed(TeamId::RED);
        board.append_series(TeamId::RED, nines());
        let spoil = Action::ExtendSeries(ExtendSeriesAction::new(0, &[Card::joker()]));

        // The only pure series would stop being pure.
        assert!(!board.player_may_clear_hand(&player, &spoil));

        board.append_series(TeamId::RED, nines());
        assert!(board.player_may_clear_hand(&player, &spoil));
    }
}
