//! The closing question page.
//!
//! The "no" button runs away from the pointer. Each dodge grows the "yes"
//! button and picks the next teasing message; accepting ends the page.
//!
//! ```text
//! Asking --dodge--> Asking (dodges + 1)
//!   |
//!   +--accept--> Accepted (terminal)
//! ```

pub mod proposal;

pub use proposal::Proposal;
