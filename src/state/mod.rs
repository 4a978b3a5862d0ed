//! State management module
//!
//! Plain data owned by the controller: the countdown, the slice/round
//! counters and the snapshot published to status readers.

pub mod phase;
pub mod progression;
pub mod snapshot;
pub mod timer_state;

// Re-export main types
pub use phase::Phase;
pub use progression::{ProgressionState, Transition};
pub use snapshot::TimerSnapshot;
pub use timer_state::{TickOutcome, TimerState};
