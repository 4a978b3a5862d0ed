//! Phase countdown state

use serde::Serialize;

use super::Phase;
use crate::config::TimerSettings;

/// Result of one main-cadence tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still counting; seconds elapsed in the phase so far
    Counting { elapsed: i64 },
    /// The countdown went past zero and the phase is over
    Expired,
}

/// Countdown for the current phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerState {
    pub phase: Phase,
    /// Seconds left; reaches -1 for the duration of an expiring tick
    pub remaining_seconds: i64,
    /// Length of the phase, never below 1
    pub phase_total_seconds: i64,
    /// Whether the `:` separator is currently shown
    pub colon_visible: bool,
}

impl TimerState {
    /// Start counting the given phase
    pub fn new(phase: Phase, settings: &TimerSettings) -> Self {
        let mut state = Self {
            phase,
            remaining_seconds: 0,
            phase_total_seconds: 1,
            colon_visible: true,
        };
        state.start_phase(phase, settings);
        state
    }

    /// Reset the countdown to the full length of `phase`
    ///
    /// The colon keeps its current blink state.
    pub fn start_phase(&mut self, phase: Phase, settings: &TimerSettings) {
        self.phase = phase;
        self.remaining_seconds = settings.seconds_for(phase);
        self.phase_total_seconds = self.remaining_seconds.max(1);
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) -> TickOutcome {
        self.colon_visible = !self.colon_visible;
        self.remaining_seconds -= 1;

        if self.remaining_seconds < 0 {
            TickOutcome::Expired
        } else {
            TickOutcome::Counting { elapsed: self.elapsed_seconds() }
        }
    }

    /// Seconds spent in the current phase
    pub fn elapsed_seconds(&self) -> i64 {
        self.phase_total_seconds - self.remaining_seconds
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_seconds < 0
    }
}
