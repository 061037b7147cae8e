//! Deck and stacks.
//!
//! Both are backed by `im::Vector` so that cloning a board for a snapshot
//! shares structure instead of copying 108 cards.
//!
//! - `Deck`: dealing order, top is the front.
//! - `Stack`: discard stack and side piles, top is the back.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::GameRng;

/// The draw deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Two standard 52-card decks, plus four jokers when `with_jokers`.
    ///
    /// ```
    /// use canasta_engine::cards::Deck;
    ///
    /// assert_eq!(Deck::double(true).len(), 108);
    /// assert_eq!(Deck::double(false).len(), 104);
    /// ```
    #[must_use]
    pub fn double(with_jokers: bool) -> Self {
        let mut cards = Vector::new();
        for _ in 0..2 {
            for suit in Suit::ALL {
                for rank in Rank::SUITED {
                    cards.push_back(Card::new(rank, suit));
                }
            }
            if with_jokers {
                cards.push_back(Card::joker());
                cards.push_back(Card::joker());
            }
        }
        Self { cards }
    }

    /// A deck in exactly this order; the first card is dealt first.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Deal the top card.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Deal `count` cards from the top. Returns `None` and deals nothing
    /// if fewer than `count` remain.
    pub fn deal_n(&mut self, count: usize) -> Option<Vec<Card>> {
        if count > self.cards.len() {
            return None;
        }
        let rest = self.cards.split_off(count);
        let dealt = std::mem::replace(&mut self.cards, rest);
        Some(dealt.into_iter().collect())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

/// An ordered pile of cards with a top at the back.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    cards: Vector<Card>,
}

impl Stack {
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn put(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Empty the stack, bottom card first.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards).into_iter().collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

/// A side pile that takes over as the draw deck. The pile's top card is dealt first.
impl From<Stack> for Deck {
    fn from(stack: Stack) -> Self {
        Self {
            cards: stack.cards.into_iter().rev().collect(),
        }
    }
}
