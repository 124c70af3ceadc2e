//! Read model for the presentation layer.
//!
//! A `GameView` is everything a renderer needs for one frame. Content is
//! only included for cards that are face-up.

use serde::{Deserialize, Serialize};

use super::state::{Game, GamePhase};
use crate::cards::{Card, CardFace};
use crate::core::CardId;

/// One card as the renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub face: CardFace,
    /// `None` while face-down.
    pub content: Option<String>,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id,
            face: card.face(),
            content: card.visible_content().map(str::to_string),
        }
    }
}

/// Snapshot of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Cards in deck order.
    pub cards: Vec<CardView>,
    pub selection: Vec<CardId>,
    pub phase: GamePhase,
    pub is_evaluating: bool,
    pub is_won: bool,
    pub matched_pairs: usize,
    pub pair_count: usize,
}

impl GameView {
    pub(crate) fn from_game(game: &Game) -> Self {
        Self {
            cards: game.deck().iter().map(CardView::from).collect(),
            selection: game.selection().as_slice().to_vec(),
            phase: game.phase(),
            is_evaluating: game.is_evaluating(),
            is_won: game.is_won(),
            matched_pairs: game.matched_pairs(),
            pair_count: game.deck().pair_count(),
        }
    }
}
