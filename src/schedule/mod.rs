//! Logical-clock timer queue.
//!
//! Delayed phase transitions (evaluating a selection, announcing a win) are
//! explicit tasks keyed to the owner they belong to (a `GameId` by default,
//! or a host's own page key), so tearing an owner down can cancel them. Time
//! only moves when the host advances it.

pub mod queue;

pub use queue::{ScheduledTask, Scheduler, TaskId};
