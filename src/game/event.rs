//! Game history.
//!
//! Every accepted pick and every resolution is appended to the game's
//! history. Ignored picks are not recorded.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, PairId};

/// Something that changed the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card was turned face-up.
    Flipped { card: CardId },
    /// Two face-up cards were confirmed as a pair.
    Matched { pair: PairId, cards: [CardId; 2] },
    /// Two face-up cards did not match and were turned back.
    Mismatched { cards: [CardId; 2] },
    /// The last pair was confirmed.
    Won,
}

/// A recorded event with its position in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// 0-based, increasing by one per event.
    pub sequence: u32,

    /// The event.
    pub event: GameEvent,
}

impl EventRecord {
    /// Create a new event record.
    #[must_use]
    pub fn new(sequence: u32, event: GameEvent) -> Self {
        Self { sequence, event }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let record = EventRecord::new(
            3,
            GameEvent::Matched {
                pair: PairId(1),
                cards: [CardId(2), CardId(5)],
            },
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: EventRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
