//! Timer queue ordered by due time.
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//! use memory_match::core::GameId;
//! use memory_match::schedule::Scheduler;
//!
//! let mut timers = Scheduler::new();
//! let game = GameId::new(0);
//! timers.schedule(game, Duration::from_millis(800), "evaluate");
//!
//! assert!(timers.pop_due(Duration::from_millis(500)).is_none());
//! let task = timers.pop_due(Duration::from_millis(800)).unwrap();
//! assert_eq!(task.payload, "evaluate");
//! ```

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::trace;


use crate::core::GameId;

/// Unique identifier for a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl TaskId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// A task waiting for its due time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledTask<T, K = GameId> {
    pub id: TaskId,
    /// Owner the task belongs to; cancelled together with it.
    pub owner: K,
    /// Clock value at which the task fires.
    pub due: Duration,
    pub payload: T,
}

/// Timer queue driven by a logical clock.
///
/// Tasks fire in due-time order; tasks due at the same instant fire in the
/// order they were scheduled. `K` is the owner key: a `GameId` for match
/// timers, or any small copyable key a host uses for its own pages.
#[derive(Clone, Debug)]
pub struct Scheduler<T, K = GameId> {
    now: Duration,
    next_id: u64,
    /// (due, id) -> task
    tasks: BTreeMap<(Duration, TaskId), ScheduledTask<T, K>>,
}

impl<T, K: Copy + Eq + Debug> Default for Scheduler<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Copy + Eq + Debug> Scheduler<T, K> {
    /// Create an empty queue at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            tasks: BTreeMap::new(),
        }
    }

    /// Current clock value.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// No pending tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Schedule `payload` to fire `delay` after the current clock value.
    pub fn schedule(&mut self, owner: K, delay: Duration, payload: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let due = self.now.saturating_add(delay);
        trace!(task = %id, owner = ?owner, due = ?due, "task scheduled");
        self.tasks.insert((due, id), ScheduledTask { id, owner, due, payload });
        id
    }

    /// Cancel one task. Returns false if it already fired or never existed.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let key = self.tasks.iter().find(|(_, task)| task.id == id).map(|(key, _)| *key);
        match key {
            Some(key) => self.tasks.remove(&key).is_some(),
            None => false,
        }
    }

    /// Cancel every task of an owner. Returns how many were dropped.
    pub fn cancel_owner(&mut self, owner: K) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|_, task| task.owner != owner);
        before - self.tasks.len()
    }

    /// Number of pending tasks for an owner.
    #[must_use]
    pub fn pending_for(&self, owner: K) -> usize {
        self.tasks.values().filter(|task| task.owner == owner).count()
    }

    /// Due time of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.tasks.keys().next().map(|(due, _)| *due)
    }

    /// Remove the earliest task due at or before `until`.
    ///
    /// The clock moves to the task's due time, so anything scheduled while
    /// handling it is relative to when it fired.
    pub fn pop_due(&mut self, until: Duration) -> Option<ScheduledTask<T, K>> {
        let key = *self.tasks.keys().next()?;
        if key.0 > until {
            return None;
        }
        let task = self.tasks.remove(&key)?;
        self.now = self.now.max(task.due);
        Some(task)
    }

    /// Move the clock forward. Never moves backwards.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}
