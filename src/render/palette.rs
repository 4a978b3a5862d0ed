//! Fixed colors; none of these are configurable

use crate::surface::Color;

/// Soft amber for the title, tickers and filled dots
pub const ACCENT: Color = Color::from_hex(0xFFD36E);
/// Warning orange for work
pub const WORK: Color = Color::from_hex(0xFF5A3C);
/// Teal for short breaks
pub const SHORT_BREAK: Color = Color::from_hex(0x52E0B3);
/// Blue for long breaks
pub const LONG_BREAK: Color = Color::from_hex(0x6FA8FF);
/// Empty progress bar and unfilled dots
pub const PROGRESS_BACKGROUND: Color = Color::from_hex(0x1E1E1E);
pub const TEXT: Color = Color::from_hex(0xFFFFFF);
pub const BACKGROUND: Color = Color::from_hex(0x000000);
