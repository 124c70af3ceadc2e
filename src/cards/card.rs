//! Card state.
//!
//! Per-card state machine:
//!
//! ```text
//! hidden -> flipped -> matched (terminal)
//!              |
//!              +-----> hidden
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{CardId, PairId};

/// What a card currently shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    /// Face-down.
    Hidden,
    /// Face-up, waiting for evaluation.
    Revealed,
    /// Face-up for good.
    Matched,
}

/// A single card in a deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique within the deck.
    pub id: CardId,

    /// Shared with exactly one other card.
    pub pair_id: PairId,

    /// Opaque payload shown when face-up.
    pub content: String,

    flipped: bool,
    matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, pair_id: PairId, content: impl Into<String>) -> Self {
        Self {
            id,
            pair_id,
            content: content.into(),
            flipped: false,
            matched: false,
        }
    }

    /// Is this card face-up?
    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Has this card's pair been confirmed?
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Can this card be picked right now?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.flipped && !self.matched
    }

    /// Current face for rendering.
    #[must_use]
    pub fn face(&self) -> CardFace {
        match (self.flipped, self.matched) {
            (_, true) => CardFace::Matched,
            (true, false) => CardFace::Revealed,
            (false, false) => CardFace::Hidden,
        }
    }

    /// Content if the card is showing it.
    #[must_use]
    pub fn visible_content(&self) -> Option<&str> {
        match self.face() {
            CardFace::Hidden => None,
            CardFace::Revealed | CardFace::Matched => Some(&self.content),
        }
    }

    pub(crate) fn reveal(&mut self) {
        self.flipped = true;
    }

    /// Turn face-down again. Matched cards stay up.
    pub(crate) fn hide(&mut self) {
        if !self.matched {
            self.flipped = false;
        }
    }

    pub(crate) fn confirm(&mut self) {
        self.flipped = true;
        self.matched = true;
    }
}
