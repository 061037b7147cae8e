//! Card series (melds).
//!
//! A series is a group of same-rank cards laid down by a team, optionally
//! padded with wild cards. Cards are kept in canonical order so two series
//! built from the same cards in different order are equal and hash alike.
//!
//! ## Validity
//!
//! - at least `MIN_SERIES_LEN` cards
//! - at least `MIN_NATURALS` natural (non-wild) cards, all of one rank
//! - at most `MAX_WILDS` jokers and twos

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank};
use crate::core::config::{CANASTA_LEN, MAX_WILDS, MIN_NATURALS, MIN_SERIES_LEN};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSeries {
    cards: Vec<Card>,
}

impl CardSeries {
    /// Build a series from cards in any order. Validity is not checked here.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.sort();
        Self { cards }
    }

    /// This series with `extra` added.
    #[must_use]
    pub fn with_cards(&self, extra: &[Card]) -> Self {
        Self::new(self.cards.iter().chain(extra).copied())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Rank of the natural cards, if there is one.
    #[must_use]
    pub fn rank(&self) -> Option<Rank> {
        self.cards.iter().find(|c| !c.is_wild()).map(|c| c.rank)
    }

    #[must_use]
    pub fn wild_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_wild()).count()
    }

    #[must_use]
    pub fn contains_joker(&self) -> bool {
        self.cards.iter().any(|c| c.is_joker())
    }

    /// Sum of the card values.
    #[must_use]
    pub fn total_value(&self) -> i32 {
        self.cards.iter().map(|c| c.value()).sum()
    }

    /// No jokers and no wildcards.
    #[must_use]
    pub fn is_pure(&self) -> bool {
        self.wild_count() == 0
    }

    /// Complete series.
    #[must_use]
    pub fn is_canasta(&self) -> bool {
        self.cards.len() >= CANASTA_LEN
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        if self.cards.len() < MIN_SERIES_LEN {
            return false;
        }
        let wilds = self.wild_count();
        if wilds > MAX_WILDS || self.cards.len() - wilds < MIN_NATURALS {
            return false;
        }
        let rank = self.rank();
        self.cards.iter().filter(|c| !c.is_wild()).all(|c| Some(c.rank) == rank)
    }
}

impl<'a> IntoIterator for &'a CardSeries {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl std::fmt::Display for CardSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", card)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_valid_pure_series() {
        let series = CardSeries::new([
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Nine, Suit::Spades),
            c(Rank::Nine, Suit::Clubs),
        ]);

        assert!(series.is_valid());
        assert!(series.is_pure());
        assert!(!series.is_canasta());
        assert_eq!(series.rank(), Some(Rank::Nine));
        assert_eq!(series.total_value(), 30);
    }

    #[test]
    fn test_mixed_series() {
        let series = CardSeries::new([
            c(Rank::Five, Suit::Hearts),
            Card::joker(),
            c(Rank::Five, Suit::Clubs),
            c(Rank::Two, Suit::Clubs),
        ]);

        assert!(series.is_valid());
        assert!(!series.is_pure());
        assert!(series.contains_joker());
        assert_eq!(series.wild_count(), 2);
        assert_eq!(series.total_value(), 5 + 50 + 5 + 20);
    }

    #[test]
    fn test_too_short() {
        let series = CardSeries::new([c(Rank::Nine, Suit::Hearts), c(Rank::Nine, Suit::Spades)]);
        assert!(!series.is_valid());
    }

    #[test]
    fn test_mixed_ranks_invalid() {
        let series = CardSeries::new([
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Nine, Suit::Spades),
            c(Rank::Ten, Suit::Clubs),
        ]);
        assert!(!series.is_valid());
    }

    #[test]
    fn test_wild_limits() {
        let one_natural = CardSeries::new([c(Rank::Nine, Suit::Hearts), Card::joker(), Card::joker()]);
        assert!(!one_natural.is_valid());

        let four_wilds = CardSeries::new([
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Nine, Suit::Spades),
            Card::joker(),
            Card::joker(),
            c(Rank::Two, Suit::Clubs),
            c(Rank::Two, Suit::Hearts),
        ]);
        assert!(!four_wilds.is_valid());
    }

    #[test]
    fn test_order_independent_equality() {
        let a = CardSeries::new([c(Rank::Jack, Suit::Hearts), Card::joker(), c(Rank::Jack, Suit::Clubs)]);
        let b = CardSeries::new([Card::joker(), c(Rank::Jack, Suit::Clubs), c(Rank::Jack, Suit::Hearts)]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_canasta() {
        let series = CardSeries::new((0..7).map(|i| c(Rank::King, Suit::ALL[i % 4])));
        assert!(series.is_valid());
        assert!(series.is_canasta());

        let extended = series.with_cards(&[Card::joker()]);
        assert_eq!(extended.len(), 8);
        assert!(!extended.is_pure());
    }
}
