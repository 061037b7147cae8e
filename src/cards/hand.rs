//! A player's hand.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// Cards held by one player. Duplicate copies are allowed (double deck).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.sort();
        Self { cards }
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Multiset containment: a card listed twice must be held twice.
    #[must_use]
    pub fn contains_all(&self, cards: &[Card]) -> bool {
        let mut remaining = self.cards.clone();
        cards.iter().all(|card| match remaining.iter().position(|c| c == card) {
            Some(pos) => {
                remaining.swap_remove(pos);
                true
            }
            None => false,
        })
    }

    /// Remove one copy of `card`.
    pub fn pop(&mut self, card: Card) -> Option<Card> {
        let pos = self.cards.iter().position(|c| *c == card)?;
        Some(self.cards.remove(pos))
    }

    /// Remove one copy of each listed card, or nothing if any is missing.
    pub fn remove_all(&mut self, cards: &[Card]) -> bool {
        if !self.contains_all(cards) {
            return false;
        }
        for card in cards {
            self.pop(*card);
        }
        true
    }

    pub fn add(&mut self, card: Card) {
        let pos = self.cards.partition_point(|c| *c <= card);
        self.cards.insert(pos, card);
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
        self.cards.sort();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// The raw cards, sorted.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
