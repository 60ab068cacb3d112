//! # srs-core - spaced-repetition scheduling core
//!
//! Pure Rust implementation of the review scheduler:
//!
//! - **StateUpdater** - next memory state from one review outcome
//! - **DueSelector** - ranks items by review urgency
//!
//! ## Module layout
//!
//! - [`scheduler`] - state updates (ease, interval, due time)
//! - [`selector`] - urgency scoring and due-item selection
//! - [`sanitize`] - shared clamping and argument validation
//! - [`bridge`] - JSON string entry points for host bindings
//! - [`types`] - records and constants
//! - [`error`] - error type
//!
//! Nothing here performs I/O or holds state between calls; every function is
//! safe to call from any number of threads on independent inputs.
//!
//! ## Example
//!
//! ```rust
//! use srs_core::{pick_due, update, DueCandidate, MemoryState, DAY_MS};
//!
//! let state = MemoryState::new("kana-a");
//! let next = update(&state, true, 1_000, 900);
//! assert_eq!(next.interval_days, 1);
//! assert_eq!(next.due_at_ms, 1_000 + DAY_MS);
//!
//! let items = vec![
//!     DueCandidate::new("a", 0, 0),
//!     DueCandidate::new("b", 0, 3),
//! ];
//! assert_eq!(pick_due(&items, 1_000, 1), vec!["b".to_string()]);
//! ```

#![deny(clippy::all)]

pub mod bridge;
pub mod error;
pub mod sanitize;
pub mod scheduler;
pub mod selector;
pub mod types;

pub use bridge::{pick_due_items_json, update_state_json};
pub use error::{Result, SrsError};
pub use scheduler::{apply, replay, update, update_batch};
pub use selector::{pick_due, rank_due, urgency_score, ScoredCandidate};
pub use types::*;
