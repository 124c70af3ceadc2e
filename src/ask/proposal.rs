//! Dodge counter and acceptance state.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

/// State of the question page.
///
/// ## Usage
///
/// ```
/// use memory_match::ask::Proposal;
///
/// let messages = ["Nice try", "You can't escape love!"];
/// let mut ask = Proposal::new();
/// assert_eq!(ask.message(&messages), None);
///
/// ask.dodge();
/// assert_eq!(ask.message(&messages), Some(&"Nice try"));
/// assert!((ask.yes_scale() - 1.15).abs() < 1e-9);
///
/// ask.accept();
/// assert!(!ask.dodge());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    dodges: u32,
    accepted: bool,
}

impl Proposal {
    /// Growth of the "yes" button per dodge.
    pub const SCALE_STEP: f64 = 0.15;

    /// Largest "yes" button scale.
    pub const MAX_SCALE: f64 = 2.5;

    /// A fresh page: no dodges, not accepted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the "no" button got away.
    #[must_use]
    pub fn dodges(&self) -> u32 {
        self.dodges
    }

    /// Has the question been accepted?
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// The pointer reached the "no" button and it moved away.
    ///
    /// Returns false once accepted; the count is frozen then.
    pub fn dodge(&mut self) -> bool {
        if self.accepted {
            trace!("dodge after acceptance ignored");
            return false;
        }
        self.dodges = self.dodges.saturating_add(1);
        debug!(dodges = self.dodges, "no button dodged");
        true
    }

    /// Accept. Terminal; returns false if already accepted.
    pub fn accept(&mut self) -> bool {
        if self.accepted {
            return false;
        }
        self.accepted = true;
        info!(dodges = self.dodges, "proposal accepted");
        true
    }

    /// Scale of the "yes" button: `1 + 0.15 * dodges`, capped at 2.5.
    #[must_use]
    pub fn yes_scale(&self) -> f64 {
        (1.0 + f64::from(self.dodges) * Self::SCALE_STEP).min(Self::MAX_SCALE)
    }

    /// Index of the message to show for a list of `len` messages.
    ///
    /// `None` before the first dodge or for an empty list. Past the end of the
    /// list the last message repeats.
    #[must_use]
    pub fn message_index(&self, len: usize) -> Option<usize> {
        if self.dodges == 0 || len == 0 {
            return None;
        }
        let n = usize::try_from(self.dodges - 1).unwrap_or(usize::MAX);
        Some(n.min(len - 1))
    }

    /// The message to show from `messages`, if any.
    #[must_use]
    pub fn message<'a, S>(&self, messages: &'a [S]) -> Option<&'a S> {
        self.message_index(messages.len()).and_then(|i| messages.get(i))
    }
}
