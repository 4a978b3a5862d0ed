//! Timer settings consumed once at startup
//!
//! Values are read leniently: a number, or a string holding an integer, is
//! accepted; anything else silently falls back to the documented default.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::state::Phase;

pub const DEFAULT_NAME: &str = "Pomodoro";
pub const DEFAULT_WORK_MINUTES: u32 = 25;
pub const DEFAULT_SHORT_BREAK_MINUTES: u32 = 5;
pub const DEFAULT_LONG_BREAK_MINUTES: u32 = 15;
pub const DEFAULT_SLICES_PER_ROUND: u32 = 4;
pub const DEFAULT_ROUNDS: u32 = 1;

/// Durations and counts that shape the timer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerSettings {
    /// Title shown on the first line
    pub name: String,
    pub work_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
    /// Work phases in one round
    pub slices_per_round: u32,
    /// Rounds before the counter wraps back to 1
    pub rounds: u32,
}

impl TimerSettings {
    /// Build settings from raw key/value pairs
    pub fn from_values(values: &Map<String, Value>) -> Self {
        Self {
            name: lenient_string(values.get("name"), DEFAULT_NAME),
            work_minutes: lenient_count(values.get("work_minutes"), DEFAULT_WORK_MINUTES),
            short_break_minutes: lenient_count(
                values.get("short_break_minutes"),
                DEFAULT_SHORT_BREAK_MINUTES,
            ),
            long_break_minutes: lenient_count(
                values.get("long_break_minutes"),
                DEFAULT_LONG_BREAK_MINUTES,
            ),
            slices_per_round: lenient_count(
                values.get("slices_per_round"),
                DEFAULT_SLICES_PER_ROUND,
            ),
            rounds: lenient_count(values.get("rounds"), DEFAULT_ROUNDS),
        }
    }

    /// Configured minutes for a phase
    pub fn minutes_for(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work_minutes,
            Phase::ShortBreak => self.short_break_minutes,
            Phase::LongBreak => self.long_break_minutes,
        }
    }

    /// Configured seconds for a phase; may be zero
    pub fn seconds_for(&self, phase: Phase) -> i64 {
        i64::from(self.minutes_for(phase)) * 60
    }
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            work_minutes: DEFAULT_WORK_MINUTES,
            short_break_minutes: DEFAULT_SHORT_BREAK_MINUTES,
            long_break_minutes: DEFAULT_LONG_BREAK_MINUTES,
            slices_per_round: DEFAULT_SLICES_PER_ROUND,
            rounds: DEFAULT_ROUNDS,
        }
    }
}

/// Integer from a JSON number or a string like `" 25 "`, floored at zero
fn lenient_count(value: Option<&Value>, default: u32) -> u32 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) => u32::try_from(n.max(0)).unwrap_or(u32::MAX),
        None => default,
    }
}

fn lenient_string(value: Option<&Value>, default: &str) -> String {
    match value {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings(value: Value) -> TimerSettings {
        match value {
            Value::Object(map) => TimerSettings::from_values(&map),
            _ => panic!("test input must be an object"),
        }
    }

    #[test]
    fn empty_map_gives_defaults() {
        let s = settings(json!({}));
        assert_eq!(s, TimerSettings::default());
        assert_eq!(s.name, "Pomodoro");
        assert_eq!(
            (s.work_minutes, s.short_break_minutes, s.long_break_minutes, s.slices_per_round, s.rounds),
            (25, 5, 15, 4, 1)
        );
    }

    #[test]
    fn numbers_and_numeric_strings_are_accepted() {
        let s = settings(json!({
            "work_minutes": 50,
            "short_break_minutes": " 10 ",
            "long_break_minutes": "+20",
            "slices_per_round": 2,
            "rounds": "3",
        }));
        assert_eq!(s.work_minutes, 50);
        assert_eq!(s.short_break_minutes, 10);
        assert_eq!(s.long_break_minutes, 20);
        assert_eq!(s.slices_per_round, 2);
        assert_eq!(s.rounds, 3);
    }

    #[test]
    fn garbage_falls_back_silently() {
        let s = settings(json!({
            "work_minutes": "twenty",
            "short_break_minutes": 2.5,
            "long_break_minutes": true,
            "slices_per_round": null,
            "rounds": [1],
        }));
        assert_eq!(s.work_minutes, 25);
        assert_eq!(s.short_break_minutes, 5);
        assert_eq!(s.long_break_minutes, 15);
        assert_eq!(s.slices_per_round, 4);
        assert_eq!(s.rounds, 1);
    }

    #[test]
    fn negative_values_floor_at_zero() {
        let s = settings(json!({ "work_minutes": -5, "rounds": "-1" }));
        assert_eq!(s.work_minutes, 0);
        assert_eq!(s.rounds, 0);
    }

    #[test]
    fn name_accepts_scalars() {
        assert_eq!(settings(json!({ "name": "Focus" })).name, "Focus");
        assert_eq!(settings(json!({ "name": 42 })).name, "42");
        assert_eq!(settings(json!({ "name": null })).name, "Pomodoro");
    }

    #[test]
    fn seconds_follow_phase() {
        let s = TimerSettings::default();
        assert_eq!(s.seconds_for(Phase::Work), 1500);
        assert_eq!(s.seconds_for(Phase::ShortBreak), 300);
        assert_eq!(s.seconds_for(Phase::LongBreak), 900);
    }
}
