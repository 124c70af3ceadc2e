//! Cards and decks.
//!
//! ## Key Types
//!
//! - `Card`: one face of a pair, with its flip/match state
//! - `CardFace`: what the presentation layer should draw for a card
//! - `Deck`: the ordered, shuffled collection of cards for one game

pub mod card;
pub mod deck;

pub use card::{Card, CardFace};
pub use deck::Deck;
