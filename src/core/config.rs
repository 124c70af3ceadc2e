//! Game configuration types.
//!
//! The host configures the engine at startup by providing:
//! - `PairSpec`: one entry per available pair (a key and opaque content)
//! - `MatchConfig`: pair source, how many pairs to play, timing, seed
//!
//! Content strings are supplied by the asset provider (image paths, glyphs)
//! and are never interpreted by the engine.

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Construction-time failures.
///
/// Gameplay itself never fails; these only come out of building a deck or
/// loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("a game needs at least one pair")]
    NoPairs,

    #[error("requested {requested} pairs but only {available} are available")]
    NotEnoughPairs { requested: usize, available: usize },

    #[error("at most {max} pairs are supported, got {requested}")]
    TooManyPairs { requested: usize, max: usize },

    #[error("pair key {0:?} is used more than once")]
    DuplicateKey(String),

    #[error("content {0:?} is shared by more than one pair")]
    DuplicateContent(String),

    #[error("invalid deck arrangement: {0}")]
    InvalidArrangement(String),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One entry of the pair source.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairSpec {
    /// Stable key for the pair (e.g. "heart").
    pub key: String,

    /// Opaque payload shown when a card is face-up.
    pub content: String,
}

impl PairSpec {
    /// Create a new pair entry.
    pub fn new(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            content: content.into(),
        }
    }
}

/// Check that the first `pair_count` entries of `pairs` can build a deck.
///
/// Rejects rather than truncates when more pairs are requested than exist.
pub fn check_pairs(pairs: &[PairSpec], pair_count: usize) -> Result<(), ConfigError> {
    if pair_count == 0 {
        return Err(ConfigError::NoPairs);
    }
    if pair_count > usize::from(u16::MAX) {
        return Err(ConfigError::TooManyPairs {
            requested: pair_count,
            max: usize::from(u16::MAX),
        });
    }
    if pair_count > pairs.len() {
        return Err(ConfigError::NotEnoughPairs {
            requested: pair_count,
            available: pairs.len(),
        });
    }

    let mut keys = FxHashSet::default();
    let mut contents = FxHashSet::default();
    for spec in &pairs[..pair_count] {
        if !keys.insert(spec.key.as_str()) {
            return Err(ConfigError::DuplicateKey(spec.key.clone()));
        }
        if !contents.insert(spec.content.as_str()) {
            return Err(ConfigError::DuplicateContent(spec.content.clone()));
        }
    }
    Ok(())
}

/// Complete configuration for a match game.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Available pairs, in order. The first `pair_count` are used.
    pub pairs: Vec<PairSpec>,

    /// Number of pairs in a deck. `None` plays every entry of `pairs`.
    pub pair_count: Option<usize>,

    /// How long a two-card selection stays face-up before evaluation.
    pub reveal_delay_ms: u64,

    /// Pause between the last match and the navigation signal.
    pub win_delay_ms: u64,

    /// Session seed. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        let pairs = vec![
            PairSpec::new("heart", "❤️"),
            PairSpec::new("star", "⭐"),
            PairSpec::new("moon", "🌙"),
            PairSpec::new("flower", "🌸"),
            PairSpec::new("kiss", "💋"),
            PairSpec::new("sparkle", "✨"),
        ];
        Self {
            pairs,
            pair_count: None,
            reveal_delay_ms: 800,
            win_delay_ms: 800,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that this config can build a deck.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_pairs(&self.pairs, self.pair_count())
    }

    /// Number of pairs a deck uses.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count.unwrap_or(self.pairs.len())
    }

    /// Replace the pair source, playing all of it.
    #[must_use]
    pub fn with_pairs(mut self, pairs: Vec<PairSpec>) -> Self {
        self.pairs = pairs;
        self.pair_count = None;
        self
    }

    /// Play only the first `count` pairs.
    #[must_use]
    pub fn with_pair_count(mut self, count: usize) -> Self {
        self.pair_count = Some(count);
        self
    }

    /// Set the session seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the reveal delay.
    #[must_use]
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay_ms = duration_ms(delay);
        self
    }

    /// Set the win delay.
    #[must_use]
    pub fn with_win_delay(mut self, delay: Duration) -> Self {
        self.win_delay_ms = duration_ms(delay);
        self
    }

    /// Reveal delay as a `Duration`.
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Win delay as a `Duration`.
    #[must_use]
    pub fn win_delay(&self) -> Duration {
        Duration::from_millis(self.win_delay_ms)
    }
}

fn duration_ms(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}
