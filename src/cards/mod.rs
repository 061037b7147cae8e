//! Card containers: cards, series, deck, stacks, hands.
//!
//! These are plain data holders. Rules about who may move which card where
//! live in `actions` and `board`.

pub mod card;
pub mod deck;
pub mod hand;
pub mod series;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, Stack};
pub use hand::Hand;
pub use series::CardSeries;
