//! Pomodoro Panel - a tick-driven Pomodoro timer for 64x64 pixel displays
//!
//! The core is a single [`PomodoroController`] that owns all timer state and
//! is polled from one loop. Drawing goes through the [`DisplaySurface`]
//! trait and time comes from a [`Clock`], so the whole timer can be driven
//! deterministically in tests.

pub mod animation;
pub mod api;
pub mod clock;
pub mod config;
pub mod controller;
pub mod render;
pub mod state;
pub mod surface;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Config, TimerSettings};
pub use controller::{PhaseChange, PollReport, PomodoroController};
pub use state::{Phase, TimerSnapshot};
pub use surface::{DisplaySurface, JsonLinesSurface, RecordingSurface};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
