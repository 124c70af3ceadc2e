//! Deck construction and lookup.
//!
//! A deck holds `2 × pair_count` cards. Card IDs are assigned before the
//! shuffle (pair `i` gets cards `2i` and `2i + 1`), so an ID says nothing
//! about where a card sits.
//!
//! ## Usage
//!
//! ```
//! use memory_match::cards::Deck;
//! use memory_match::core::{GameRng, PairSpec};
//!
//! let pairs = vec![PairSpec::new("a", "🍎"), PairSpec::new("b", "🍌")];
//! let mut rng = GameRng::new(7);
//! let deck = Deck::shuffled(&pairs, 2, &mut rng).unwrap();
//!
//! assert_eq!(deck.len(), 4);
//! assert!(deck.has_pair_integrity());
//! ```

use im::Vector;
use rustc_hash::FxHashMap;

use super::card::Card;
use crate::core::config::{check_pairs, ConfigError, PairSpec};
use crate::core::{CardId, GameRng, PairId};

/// The ordered cards of one game.
///
/// Order is fixed after construction; only card state changes.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vector<Card>,
    /// card id -> position
    index: FxHashMap<CardId, usize>,
    pair_count: usize,
}

impl Deck {
    /// Build the deck in pair order (no shuffle).
    pub fn unshuffled(pairs: &[PairSpec], pair_count: usize) -> Result<Self, ConfigError> {
        check_pairs(pairs, pair_count)?;

        let cards: Vec<Card> = pairs[..pair_count]
            .iter()
            .enumerate()
            .flat_map(|(i, spec)| {
                let pair_id = PairId::new(i as u16);
                let first = CardId::new(2 * i as u32);
                let second = CardId::new(2 * i as u32 + 1);
                [
                    Card::new(first, pair_id, spec.content.clone()),
                    Card::new(second, pair_id, spec.content.clone()),
                ]
            })
            .collect();

        Ok(Self::from_cards(cards, pair_count))
    }

    /// Build the deck and shuffle it uniformly.
    pub fn shuffled(pairs: &[PairSpec], pair_count: usize, rng: &mut GameRng) -> Result<Self, ConfigError> {
        let deck = Self::unshuffled(pairs, pair_count)?;
        let mut cards: Vec<Card> = deck.cards.into_iter().collect();
        rng.shuffle(&mut cards);
        Ok(Self::from_cards(cards, pair_count))
    }

    /// Build a deck with a fixed layout.
    ///
    /// `arrangement[k]` is the index into `pairs` of the card at position `k`.
    /// Each used index must appear exactly twice and the used indices must be
    /// `0..arrangement.len() / 2`. Card IDs follow position.
    pub fn arranged(pairs: &[PairSpec], arrangement: &[usize]) -> Result<Self, ConfigError> {
        let pair_count = arrangement.len() / 2;
        check_pairs(pairs, pair_count)?;

        let mut counts = vec![0usize; pair_count];
        for &p in arrangement {
            let Some(c) = counts.get_mut(p) else {
                return Err(ConfigError::InvalidArrangement(format!("pair index {p} out of range")));
            };
            if *c == 2 {
                return Err(ConfigError::InvalidArrangement(format!(
                    "pair index {p} appears more than twice"
                )));
            }
            *c += 1;
        }
        if arrangement.len() % 2 != 0 {
            return Err(ConfigError::InvalidArrangement("odd number of cards".to_string()));
        }
        if let Some(p) = counts.iter().position(|&c| c != 2) {
            return Err(ConfigError::InvalidArrangement(format!(
                "pair index {p} appears {} times",
                counts[p]
            )));
        }

        let cards = arrangement
            .iter()
            .enumerate()
            .map(|(k, &p)| Card::new(CardId::new(k as u32), PairId::new(p as u16), pairs[p].content.clone()))
            .collect();

        Ok(Self::from_cards(cards, pair_count))
    }

    fn from_cards(cards: Vec<Card>, pair_count: usize) -> Self {
        let index = cards.iter().enumerate().map(|(i, c)| (c.id, i)).collect();
        Self {
            cards: cards.into_iter().collect(),
            index,
            pair_count,
        }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a deck built through the constructors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Cards in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Card at a deck position.
    #[must_use]
    pub fn at(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Deck position of a card.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Look up a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.position(id).and_then(|i| self.cards.get(i))
    }

    pub(crate) fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        let i = self.position(id)?;
        self.cards.get_mut(i)
    }

    /// IDs in deck order.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }

    /// Number of confirmed pairs.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count() / 2
    }

    /// Every card is matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// Exactly two cards per pair, sharing content, and no content shared
    /// across pairs.
    #[must_use]
    pub fn has_pair_integrity(&self) -> bool {
        let mut by_pair: FxHashMap<PairId, (usize, &str)> = FxHashMap::default();
        for card in &self.cards {
            let entry = by_pair.entry(card.pair_id).or_insert((0, card.content.as_str()));
            if entry.1 != card.content {
                return false;
            }
            entry.0 += 1;
        }

        let mut contents: Vec<&str> = by_pair.values().map(|(_, c)| *c).collect();
        contents.sort_unstable();
        contents.dedup();

        by_pair.len() == self.pair_count
            && contents.len() == by_pair.len()
            && by_pair.values().all(|(n, _)| *n == 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(n: usize) -> Vec<PairSpec> {
        (0..n).map(|i| PairSpec::new(format!("p{i}"), format!("c{i}"))).collect()
    }

    #[test]
    fn test_unshuffled_layout() {
        let deck = Deck::unshuffled(&pairs(3), 3).unwrap();

        assert_eq!(deck.len(), 6);
        assert_eq!(deck.pair_count(), 3);
        let pair_ids: Vec<_> = deck.iter().map(|c| c.pair_id.raw()).collect();
        assert_eq!(pair_ids, vec![0, 0, 1, 1, 2, 2]);
        assert_eq!(deck.ids(), (0..6).map(CardId::new).collect::<Vec<_>>());
        assert!(deck.has_pair_integrity());
    }

    #[test]
    fn test_uses_only_first_pair_count_entries() {
        let deck = Deck::unshuffled(&pairs(6), 2).unwrap();
        assert_eq!(deck.len(), 4);
        assert!(deck.iter().all(|c| c.content == "c0" || c.content == "c1"));
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let source = pairs(6);
        let mut rng = GameRng::new(42);
        let deck = Deck::shuffled(&source, 6, &mut rng).unwrap();

        let mut ids = deck.ids();
        assert_ne!(ids, (0..12).map(CardId::new).collect::<Vec<_>>());
        ids.sort_unstable();
        assert_eq!(ids, (0..12).map(CardId::new).collect::<Vec<_>>());
        assert!(deck.has_pair_integrity());
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let source = pairs(6);
        let a = Deck::shuffled(&source, 6, &mut GameRng::new(3)).unwrap();
        let b = Deck::shuffled(&source, 6, &mut GameRng::new(3)).unwrap();
        assert_eq!(a.ids(), b.ids());
    }

    #[test]
    fn test_lookup() {
        let mut rng = GameRng::new(1);
        let deck = Deck::shuffled(&pairs(4), 4, &mut rng).unwrap();

        for (pos, card) in deck.iter().enumerate() {
            assert_eq!(deck.position(card.id), Some(pos));
            assert_eq!(deck.get(card.id), Some(card));
            assert_eq!(deck.at(pos), Some(card));
        }
        assert_eq!(deck.get(CardId(99)), None);
        assert_eq!(deck.at(8), None);
    }

    #[test]
    fn test_arranged() {
        let deck = Deck::arranged(&pairs(2), &[0, 1, 1, 0]).unwrap();
        let contents: Vec<_> = deck.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["c0", "c1", "c1", "c0"]);
        assert_eq!(deck.at(3).map(|c| c.id), Some(CardId(3)));
        assert!(deck.has_pair_integrity());
    }

    #[test]
    fn test_arranged_rejects_bad_layouts() {
        let source = pairs(3);
        assert!(matches!(Deck::arranged(&source, &[0, 0, 0, 1]), Err(ConfigError::InvalidArrangement(_))));
        assert!(matches!(Deck::arranged(&source, &[0, 2, 2, 0]), Err(ConfigError::InvalidArrangement(_))));
        assert!(matches!(Deck::arranged(&source, &[0, 0, 1]), Err(ConfigError::InvalidArrangement(_))));
        assert!(matches!(Deck::arranged(&source, &[]), Err(ConfigError::NoPairs)));
    }

    #[test]
    fn test_arranged_rejects_one_index_repeated_many_times() {
        let source = pairs(128);
        let result = Deck::arranged(&source, &[0usize; 256]);
        assert!(matches!(result, Err(ConfigError::InvalidArrangement(ref msg)) if msg.contains("pair index 0")));
    }

    #[test]
    fn test_rejects_too_many_pairs() {
        assert!(matches!(
            Deck::unshuffled(&pairs(2), 3),
            Err(ConfigError::NotEnoughPairs { requested: 3, available: 2 })
        ));
    }

    #[test]
    fn test_matched_pairs_counts() {
        let mut deck = Deck::unshuffled(&pairs(2), 2).unwrap();
        assert_eq!(deck.matched_pairs(), 0);
        assert!(!deck.all_matched());

        for id in [CardId(0), CardId(1)] {
            deck.get_mut(id).unwrap().confirm();
        }
        assert_eq!(deck.matched_pairs(), 1);
        assert!(!deck.all_matched());

        for id in [CardId(2), CardId(3)] {
            deck.get_mut(id).unwrap().confirm();
        }
        assert!(deck.all_matched());
    }
}
