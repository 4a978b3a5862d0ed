//! Read-only view of the timer for status consumers

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Phase, ProgressionState, TimerState};
use crate::render::projector::format_mm_ss;
use crate::surface::Color;

/// Everything the panel currently shows, as plain data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerSnapshot {
    pub name: String,
    pub phase: Phase,
    pub label: String,
    pub color: Color,
    pub remaining_seconds: i64,
    pub phase_total_seconds: i64,
    pub elapsed_seconds: i64,
    /// `mm:ss` as drawn, without the colon blink
    pub display: String,
    pub current_round: u32,
    pub rounds: u32,
    pub completed_slices_in_round: u32,
    pub slices_per_round: u32,
    pub flashing: bool,
    pub updated_at: DateTime<Utc>,
}

impl TimerSnapshot {
    pub fn capture(
        name: &str,
        timer: &TimerState,
        progression: &ProgressionState,
        flashing: bool,
    ) -> Self {
        let (mm, ss) = format_mm_ss(timer.remaining_seconds);
        Self {
            name: name.to_string(),
            phase: timer.phase,
            label: timer.phase.label().to_string(),
            color: timer.phase.color(),
            remaining_seconds: timer.remaining_seconds.max(0),
            phase_total_seconds: timer.phase_total_seconds,
            elapsed_seconds: timer.elapsed_seconds(),
            display: format!("{}:{}", mm, ss),
            current_round: progression.current_round,
            rounds: progression.rounds,
            completed_slices_in_round: progression.completed_slices_in_round,
            slices_per_round: progression.slices_per_round,
            flashing,
            updated_at: Utc::now(),
        }
    }
}
