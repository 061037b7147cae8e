//! Candidate move enumeration for automated agents.
//!
//! Generates a practical set of moves (not every possible subset of the
//! hand) and keeps the ones that pass validation. Candidates that describe
//! the same move are collapsed by action equality.

use rustc_hash::FxHashSet;

use crate::actions::{Action, Move};
use crate::board::BoardView;
use crate::cards::Card;
use crate::core::Player;

/// Every generated move that `player` may legally make right now.
///
/// ```
/// use canasta_engine::board::Board;
/// use canasta_engine::cards::{Deck, Hand};
/// use canasta_engine::core::{Player, PlayerId};
/// use canasta_engine::actions::Action;
/// use canasta_engine::rules::legal_actions;
///
/// let board = Board::new(Deck::double(true), []);
/// let player = Player::new(PlayerId::new(0), Hand::default());
/// assert_eq!(legal_actions(&player, &board), vec![Action::draw()]);
/// ```
#[must_use]
pub fn legal_actions(player: &Player, board: &BoardView) -> Vec<Action> {
    let mut seen = FxHashSet::default();
    candidates(player, board)
        .into_iter()
        .filter(|action| action.check(player, board).is_ok())
        .filter(|action| seen.insert(action.clone()))
        .collect()
}

fn candidates(player: &Player, board: &BoardView) -> Vec<Action> {
    let hand = player.hand.cards();
    let wilds = distinct(hand.iter().filter(|c| c.is_wild()));
    let groups: Vec<&[Card]> = hand
        .chunk_by(|a, b| a.rank == b.rank)
        .filter(|group| !group[0].is_wild())
        .collect();

    let mut out = vec![Action::draw(), Action::grab_pile()];

    // Discard stack pickups around the top card.
    if let Some(top) = board.stack().top() {
        for group in &groups {
            if top.is_wild() || group[0].rank == top.rank {
                out.push(Action::pickup_stack(top, group));
                out.push(Action::pickup_stack(top, &group[..group.len().min(2)]));
                for wild in &wilds {
                    out.push(Action::pickup_stack(top, &[group[0], *wild]));
                }
            }
        }
    }

    // New series from one rank, optionally padded with a wild card.
    for group in &groups {
        out.push(Action::put(group.iter().copied()));
        for wild in &wilds {
            out.push(Action::put(group.iter().copied().chain([*wild])));
            out.push(Action::put(group.iter().take(2).copied().chain([*wild])));
        }
    }

    // Extensions of the team's series.
    for (index, series) in board.series(player.team()).iter().enumerate() {
        if let Some(group) = groups.iter().find(|g| Some(g[0].rank) == series.rank()) {
            out.push(Action::extend_series(index, group));
            out.push(Action::extend_series(index, &group[..1]));
        }
        for wild in &wilds {
            out.push(Action::extend_series(index, &[*wild]));
        }
    }

    for card in distinct(hand.iter()) {
        out.push(Action::discard(card));
    }

    out
}

fn distinct<'a>(cards: impl Iterator<Item = &'a Card>) -> Vec<Card> {
    let mut out: Vec<Card> = Vec::new();
    for card in cards {
        if !out.contains(card) {
            out.push(*card);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::cards::{CardSeries, Deck, Hand, Rank, Stack, Suit};
    use crate::core::{GamePhase, PlayerId, TeamId};

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_draw_phase_options() {
        let five = c(Rank::Five, Suit::Hearts);
        let mut board = Board::new(Deck::double(true), [Stack::default()]);
        board.discard(five);
        let player = Player::new(
            PlayerId::new(0),
            Hand::new([five, c(Rank::Five, Suit::Clubs), c(Rank::King, Suit::Clubs)]),
        );

        let actions = legal_actions(&player, &board);

        assert!(actions.contains(&Action::draw()));
        assert!(actions.contains(&Action::pickup_stack(five, &[five, c(Rank::Five, Suit::Clubs)])));
        assert!(actions.iter().all(|a| matches!(a, Action::Draw(_) | Action::PickupStack(_))));
    }

    #[test]
    fn test_action_phase_options() {
        let queens = [
            c(Rank::Queen, Suit::Hearts),
            c(Rank::Queen, Suit::Clubs),
            c(Rank::Queen, Suit::Spades),
        ];
        let mut board = Board::new(Deck::double(true), [Stack::default()]);
        board.set_phase(GamePhase::Action);
        board.append_series(
            TeamId::RED,
            CardSeries::new([c(Rank::Six, Suit::Hearts), c(Rank::Six, Suit::Clubs), c(Rank::Six, Suit::Spades)]),
        );
        let mut cards = queens.to_vec();
        cards.extend([c(Rank::Six, Suit::Diamonds), Card::joker()]);
        let player = Player::new(PlayerId::new(0), Hand::new(cards));

        let actions = legal_actions(&player, &board);

        assert!(actions.contains(&Action::put(queens)));
        assert!(actions.contains(&Action::extend_series(0, &[c(Rank::Six, Suit::Diamonds)])));
        assert!(actions.contains(&Action::extend_series(0, &[Card::joker()])));
        assert!(actions.contains(&Action::discard(Card::joker())));
        assert!(!actions.contains(&Action::draw()));

        let unique: FxHashSet<_> = actions.iter().cloned().collect();
        assert_eq!(unique.len(), actions.len());
    }

    #[test]
    fn test_no_cards_phase_offers_grab() {
        let mut board = Board::new(Deck::double(true), [Stack::new([Card::joker()])]);
        board.set_phase(GamePhase::NoCards);
        let player = Player::new(PlayerId::new(1), Hand::default());

        assert_eq!(legal_actions(&player, &board), vec![Action::grab_pile()]);
    }
}
