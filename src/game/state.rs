//! Game aggregate: deck, selection, evaluation, win detection.
//!
//! ## Rules
//!
//! - At most two cards are face-up and unconfirmed at once.
//! - While an evaluation is pending, every pick is ignored.
//! - Invalid picks are ignored, never errors, and change nothing.
//! - `is_won` flips to true exactly once, in the resolution that confirms
//!   the last pair.
//!
//! ## Usage
//!
//! ```
//! use memory_match::core::{GameRng, PairSpec};
//! use memory_match::game::{Game, SelectOutcome};
//!
//! let pairs = vec![PairSpec::new("a", "🍎"), PairSpec::new("b", "🍌")];
//! let mut game = Game::new(&pairs, 2, &mut GameRng::new(1)).unwrap();
//!
//! let first = game.deck().at(0).unwrap().id;
//! assert_eq!(game.select_card(first), SelectOutcome::Flipped);
//! assert_eq!(game.selection().len(), 1);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use super::event::{EventRecord, GameEvent};
use super::view::GameView;
use crate::cards::Deck;
use crate::core::config::{ConfigError, PairSpec};
use crate::core::{CardId, GameRng, PairId};

/// Face-up, unresolved cards in pick order (at most two).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    cards: SmallVec<[CardId; 2]>,
}

impl Selection {
    /// Maximum number of cards in a selection.
    pub const CAPACITY: usize = 2;

    /// Number of selected cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Nothing selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Two cards selected.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= Self::CAPACITY
    }

    /// Is this card selected?
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains(&id)
    }

    /// Selected card IDs in pick order.
    #[must_use]
    pub fn as_slice(&self) -> &[CardId] {
        &self.cards
    }

    fn push(&mut self, id: CardId) {
        self.cards.push(id);
    }

    fn take_pair(&mut self) -> Option<[CardId; 2]> {
        let pair = match self.cards.as_slice() {
            [a, b] => Some([*a, *b]),
            _ => None,
        };
        self.cards.clear();
        pair
    }
}

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Accepting picks.
    InProgress,
    /// Two cards are up, waiting for `resolve`.
    Evaluating,
    /// Every pair confirmed. Terminal.
    Won,
}

/// Why a pick was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The game is already won.
    Won,
    /// An evaluation is pending.
    Evaluating,
    /// Two cards are already selected.
    SelectionFull,
    /// No card with that ID in the deck.
    UnknownCard,
    /// The card is already face-up.
    AlreadyFlipped,
    /// The card's pair is already confirmed.
    AlreadyMatched,
    /// The game was torn down or never existed (session only).
    UnknownGame,
}

/// Result of `Game::select_card`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// The card was turned up; one more pick is needed.
    Flipped,
    /// The card was turned up and completed the selection. The owner must
    /// call `Game::resolve` after the reveal delay.
    EvaluationPending,
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl SelectOutcome {
    /// Did the pick change the game?
    #[must_use]
    pub fn is_accepted(self) -> bool {
        !matches!(self, SelectOutcome::Ignored(_))
    }
}

/// Result of evaluating a two-card selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// Both cards belong to `pair`; `won` is true when it was the last one.
    Match { pair: PairId, won: bool },
    /// The cards were turned back down.
    Mismatch { cards: [CardId; 2] },
}

/// One play-through of the match game.
#[derive(Clone, Debug)]
pub struct Game {
    deck: Deck,
    selection: Selection,
    evaluating: bool,
    won: bool,
    history: Vector<EventRecord>,
}

impl Game {
    /// Build a game with a freshly shuffled deck of `pair_count` pairs taken
    /// from the front of `pairs`.
    ///
    /// Fails when `pair_count` is zero or exceeds `pairs.len()`, or when the
    /// used entries repeat a key or a content string.
    pub fn new(pairs: &[PairSpec], pair_count: usize, rng: &mut GameRng) -> Result<Self, ConfigError> {
        let deck = Deck::shuffled(pairs, pair_count, rng)?;
        info!(pairs = pair_count, seed = rng.seed(), "new game");
        Ok(Self::from_deck(deck))
    }

    /// Start a game on an already built deck.
    #[must_use]
    pub fn from_deck(deck: Deck) -> Self {
        Self {
            deck,
            selection: Selection::default(),
            evaluating: false,
            won: false,
            history: Vector::new(),
        }
    }

    // === Read model ===

    /// The deck in display order.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Is an evaluation pending?
    #[must_use]
    pub fn is_evaluating(&self) -> bool {
        self.evaluating
    }

    /// Is every pair confirmed?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.won {
            GamePhase::Won
        } else if self.evaluating {
            GamePhase::Evaluating
        } else {
            GamePhase::InProgress
        }
    }

    /// Confirmed pairs so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.deck.matched_pairs()
    }

    /// Everything that happened, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<EventRecord> {
        &self.history
    }

    /// Snapshot for the presentation layer.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView::from_game(self)
    }

    // === Operations ===

    /// Pick a card.
    ///
    /// Ignored (no state change) when the game is won, an evaluation is
    /// pending, two cards are already up, the ID is unknown, or the card is
    /// already face-up or matched.
    pub fn select_card(&mut self, id: CardId) -> SelectOutcome {
        if let Err(reason) = self.check_selectable(id) {
            trace!(card = %id, ?reason, "pick ignored");
            return SelectOutcome::Ignored(reason);
        }

        if let Some(card) = self.deck.get_mut(id) {
            card.reveal();
        }
        self.selection.push(id);
        self.record(GameEvent::Flipped { card: id });
        debug!(card = %id, selected = self.selection.len(), "card flipped");

        if self.selection.is_full() {
            self.evaluating = true;
            SelectOutcome::EvaluationPending
        } else {
            SelectOutcome::Flipped
        }
    }

    fn check_selectable(&self, id: CardId) -> Result<(), IgnoreReason> {
        if self.won {
            return Err(IgnoreReason::Won);
        }
        if self.evaluating {
            return Err(IgnoreReason::Evaluating);
        }
        if self.selection.is_full() {
            return Err(IgnoreReason::SelectionFull);
        }
        let card = self.deck.get(id).ok_or(IgnoreReason::UnknownCard)?;
        if card.is_matched() {
            return Err(IgnoreReason::AlreadyMatched);
        }
        if card.is_flipped() {
            return Err(IgnoreReason::AlreadyFlipped);
        }
        Ok(())
    }

    /// Evaluate the pending selection.
    ///
    /// Returns `None` when no evaluation is pending. Otherwise compares the two
    /// selected cards, confirms or hides them, clears the selection, and
    /// releases the evaluation lock.
    pub fn resolve(&mut self) -> Option<Resolution> {
        if !self.evaluating {
            return None;
        }
        self.evaluating = false;
        let [a, b] = self.selection.take_pair()?;

        let pair_a = self.deck.get(a).map(|c| c.pair_id);
        let pair_b = self.deck.get(b).map(|c| c.pair_id);

        match (pair_a, pair_b) {
            (Some(pair), Some(other)) if pair == other => {
                for id in [a, b] {
                    if let Some(card) = self.deck.get_mut(id) {
                        card.confirm();
                    }
                }
                self.record(GameEvent::Matched { pair, cards: [a, b] });
                debug!(%pair, matched = self.deck.matched_pairs(), "pair matched");

                let won = self.deck.all_matched();
                if won {
                    self.won = true;
                    self.record(GameEvent::Won);
                    info!(pairs = self.deck.pair_count(), "puzzle solved");
                }
                Some(Resolution::Match { pair, won })
            }
            _ => {
                for id in [a, b] {
                    if let Some(card) = self.deck.get_mut(id) {
                        card.hide();
                    }
                }
                self.record(GameEvent::Mismatched { cards: [a, b] });
                debug!(first = %a, second = %b, "mismatch");
                Some(Resolution::Mismatch { cards: [a, b] })
            }
        }
    }

    fn record(&mut self, event: GameEvent) {
        let sequence = self.history.len() as u32;
        self.history.push_back(EventRecord::new(sequence, event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardFace;

    fn pairs() -> Vec<PairSpec> {
        vec![PairSpec::new("a", "A"), PairSpec::new("b", "B")]
    }

    /// Layout A, B, B, A; card IDs follow position.
    fn game() -> Game {
        Game::from_deck(Deck::arranged(&pairs(), &[0, 1, 1, 0]).unwrap())
    }

    #[test]
    fn test_initial_state() {
        let g = game();
        assert!(g.selection().is_empty());
        assert!(!g.is_evaluating());
        assert!(!g.is_won());
        assert_eq!(g.phase(), GamePhase::InProgress);
        assert!(g.history().is_empty());
    }

    #[test]
    fn test_new_rejects_too_many_pairs() {
        let mut rng = GameRng::new(1);
        assert!(Game::new(&pairs(), 3, &mut rng).is_err());
        assert!(Game::new(&pairs(), 2, &mut rng).is_ok());
    }

    #[test]
    fn test_first_pick_flips() {
        let mut g = game();
        assert_eq!(g.select_card(CardId(0)), SelectOutcome::Flipped);
        assert_eq!(g.deck().get(CardId(0)).unwrap().face(), CardFace::Revealed);
        assert_eq!(g.selection().as_slice(), &[CardId(0)]);
    }

    #[test]
    fn test_second_pick_arms_evaluation() {
        let mut g = game();
        g.select_card(CardId(0));
        assert_eq!(g.select_card(CardId(3)), SelectOutcome::EvaluationPending);
        assert!(g.is_evaluating());
        assert_eq!(g.phase(), GamePhase::Evaluating);
    }

    #[test]
    fn test_ignore_reasons() {
        let mut g = game();
        assert_eq!(g.select_card(CardId(42)), SelectOutcome::Ignored(IgnoreReason::UnknownCard));

        g.select_card(CardId(0));
        assert_eq!(g.select_card(CardId(0)), SelectOutcome::Ignored(IgnoreReason::AlreadyFlipped));

        g.select_card(CardId(3));
        assert_eq!(g.select_card(CardId(1)), SelectOutcome::Ignored(IgnoreReason::Evaluating));

        g.resolve();
        assert_eq!(g.select_card(CardId(0)), SelectOutcome::Ignored(IgnoreReason::AlreadyMatched));
    }

    #[test]
    fn test_resolve_without_pending_is_noop() {
        let mut g = game();
        assert_eq!(g.resolve(), None);
        g.select_card(CardId(0));
        assert_eq!(g.resolve(), None);
        assert_eq!(g.selection().len(), 1);
    }

    #[test]
    fn test_mismatch_hides_cards() {
        let mut g = game();
        g.select_card(CardId(0));
        g.select_card(CardId(1));

        assert_eq!(
            g.resolve(),
            Some(Resolution::Mismatch {
                cards: [CardId(0), CardId(1)]
            })
        );
        assert!(g.selection().is_empty());
        assert!(!g.is_evaluating());
        assert!(g.deck().iter().all(|c| c.face() == CardFace::Hidden));
    }

    #[test]
    fn test_match_then_win() {
        let mut g = game();
        g.select_card(CardId(0));
        g.select_card(CardId(3));
        assert_eq!(
            g.resolve(),
            Some(Resolution::Match {
                pair: PairId(0),
                won: false
            })
        );
        assert!(!g.is_won());
        assert_eq!(g.matched_pairs(), 1);

        g.select_card(CardId(2));
        g.select_card(CardId(1));
        assert_eq!(
            g.resolve(),
            Some(Resolution::Match {
                pair: PairId(1),
                won: true
            })
        );
        assert!(g.is_won());
        assert_eq!(g.phase(), GamePhase::Won);
        assert_eq!(g.select_card(CardId(0)), SelectOutcome::Ignored(IgnoreReason::Won));
        assert_eq!(g.resolve(), None);
    }

    #[test]
    fn test_history_sequence() {
        let mut g = game();
        g.select_card(CardId(0));
        g.select_card(CardId(1));
        g.resolve();
        g.select_card(CardId(42));

        let events: Vec<_> = g.history().iter().map(|r| r.event.clone()).collect();
        assert_eq!(
            events,
            vec![
                GameEvent::Flipped { card: CardId(0) },
                GameEvent::Flipped { card: CardId(1) },
                GameEvent::Mismatched {
                    cards: [CardId(0), CardId(1)]
                },
            ]
        );
        let sequences: Vec<_> = g.history().iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![0, 1, 2]);
    }

    #[test]
    fn test_selection_outcome_accepted() {
        assert!(SelectOutcome::Flipped.is_accepted());
        assert!(SelectOutcome::EvaluationPending.is_accepted());
        assert!(!SelectOutcome::Ignored(IgnoreReason::Won).is_accepted());
    }
}
