//! Timer phases

use serde::Serialize;

use crate::render::palette;
use crate::surface::Color;

/// The mode the timer is counting down in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Work,
    ShortBreak,
    LongBreak,
}

impl Phase {
    /// Color used for the label, ring and progress fill
    pub fn color(self) -> Color {
        match self {
            Phase::Work => palette::WORK,
            Phase::ShortBreak => palette::SHORT_BREAK,
            Phase::LongBreak => palette::LONG_BREAK,
        }
    }

    /// Text shown on the title line
    pub fn label(self) -> &'static str {
        match self {
            Phase::Work => "WORK",
            Phase::ShortBreak => "BREAK",
            Phase::LongBreak => "BREAK XL",
        }
    }

    pub fn is_break(self) -> bool {
        matches!(self, Phase::ShortBreak | Phase::LongBreak)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Phase::Work => "work",
            Phase::ShortBreak => "short break",
            Phase::LongBreak => "long break",
        })
    }
}
