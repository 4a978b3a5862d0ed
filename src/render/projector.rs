//! Pure projections from timer state to drawable values

use super::layout::{Rect, CANVAS_WIDTH, DOT_GAP, DOT_SIZE, LABEL_RIGHT_MARGIN};
use crate::surface::Font;

/// Zero-padded minutes and seconds; negative input renders as `00`, `00`
pub fn format_mm_ss(remaining_seconds: i64) -> (String, String) {
    let secs = remaining_seconds.max(0);
    (format!("{:02}", secs / 60), format!("{:02}", secs % 60))
}

pub fn colon_text(visible: bool) -> &'static str {
    if visible { ":" } else { "" }
}

/// Width of the filled part of the progress bar
pub fn bar_fill_width(elapsed: i64, total: i64, bar_width: i32) -> i32 {
    if total <= 0 {
        return bar_width;
    }
    let fraction = (elapsed as f64 / total as f64).clamp(0.0, 1.0);
    (f64::from(bar_width) * fraction).round_ties_even() as i32
}

/// Horizontal position of the sweep ticker for a second-of-minute bucket
pub fn sweep_x(second_of_minute: i64, bar: Rect) -> i32 {
    let fraction = second_of_minute as f64 / 60.0;
    bar.x + (fraction * f64::from(bar.w)).round_ties_even() as i32
}

/// Left edge that right-aligns `text` against the canvas edge
pub fn right_aligned_x(text: &str, font: Font) -> i32 {
    let width = text.chars().count() as i32 * font.char_width();
    CANVAS_WIDTH - width - LABEL_RIGHT_MARGIN
}

/// Left edge of a centered row of `count` dots
pub fn dot_row_start_x(count: u32) -> i32 {
    let count = i64::from(count);
    let row_width = count * i64::from(DOT_SIZE) + (count - 1) * i64::from(DOT_GAP);
    ((i64::from(CANVAS_WIDTH) - row_width).div_euclid(2)).max(0) as i32
}

pub fn dot_x(row_start: i32, index: u32) -> i32 {
    row_start + index as i32 * (DOT_SIZE + DOT_GAP)
}

/// A jump of the ticker followed by a tween to the next bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepMove {
    pub from_x: i32,
    pub to_x: i32,
}

/// Edge-triggered sweep state of the progress bar
///
/// Holds the last second-of-minute bucket it moved for; `None` forces a move
/// on the next update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepTicker {
    last_bucket: Option<i64>,
}

impl SweepTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the last bucket so the next update always moves
    pub fn reset(&mut self) {
        self.last_bucket = None;
    }

    /// Move only when `elapsed` lands in a new bucket
    pub fn update(&mut self, elapsed: i64, bar: Rect) -> Option<SweepMove> {
        let bucket = elapsed.rem_euclid(60);
        if self.last_bucket == Some(bucket) {
            return None;
        }
        self.last_bucket = Some(bucket);
        Some(SweepMove {
            from_x: sweep_x(bucket, bar),
            to_x: sweep_x((bucket + 1) % 60, bar),
        })
    }

    pub fn last_bucket(&self) -> Option<i64> {
        self.last_bucket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::layout::PROGRESS_BAR;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_mm_ss(125), ("02".to_string(), "05".to_string()));
        assert_eq!(format_mm_ss(1500), ("25".to_string(), "00".to_string()));
        assert_eq!(format_mm_ss(0), ("00".to_string(), "00".to_string()));
        assert_eq!(format_mm_ss(-1), ("00".to_string(), "00".to_string()));
        assert_eq!(format_mm_ss(6000), ("100".to_string(), "00".to_string()));
    }

    #[test]
    fn colon_blinks() {
        assert_eq!(colon_text(true), ":");
        assert_eq!(colon_text(false), "");
    }

    #[test]
    fn bar_width_boundaries() {
        assert_eq!(bar_fill_width(0, 1500, 56), 0);
        assert_eq!(bar_fill_width(750, 1500, 56), 28);
        assert_eq!(bar_fill_width(1500, 1500, 56), 56);
        assert_eq!(bar_fill_width(1501, 1500, 56), 56);
        assert_eq!(bar_fill_width(-5, 1500, 56), 0);
        assert_eq!(bar_fill_width(3, 0, 56), 56);
    }

    #[test]
    fn bar_width_rounds_half_to_even() {
        assert_eq!(bar_fill_width(1, 4, 2), 0);
        assert_eq!(bar_fill_width(3, 4, 2), 2);
    }

    #[test]
    fn sweep_positions_span_the_bar() {
        assert_eq!(sweep_x(0, PROGRESS_BAR), 4);
        assert_eq!(sweep_x(15, PROGRESS_BAR), 18);
        assert_eq!(sweep_x(30, PROGRESS_BAR), 32);
        assert_eq!(sweep_x(59, PROGRESS_BAR), 59);
    }

    #[test]
    fn sweep_is_edge_triggered() {
        let mut ticker = SweepTicker::new();
        assert_eq!(ticker.update(0, PROGRESS_BAR), Some(SweepMove { from_x: 4, to_x: 5 }));
        assert_eq!(ticker.update(0, PROGRESS_BAR), None);
        assert!(ticker.update(1, PROGRESS_BAR).is_some());
        assert_eq!(ticker.update(61, PROGRESS_BAR), None);
        assert_eq!(ticker.update(59, PROGRESS_BAR), Some(SweepMove { from_x: 59, to_x: 4 }));
    }

    #[test]
    fn reset_forces_next_move() {
        let mut ticker = SweepTicker::new();
        ticker.update(0, PROGRESS_BAR);
        ticker.reset();
        assert_eq!(ticker.last_bucket(), None);
        assert!(ticker.update(0, PROGRESS_BAR).is_some());
    }

    #[test]
    fn labels_right_align() {
        assert_eq!(right_aligned_x("WORK", Font::Small), 46);
        assert_eq!(right_aligned_x("BREAK XL", Font::Small), 30);
    }

    #[test]
    fn dot_rows_center() {
        assert_eq!(dot_row_start_x(4), 21);
        assert_eq!(dot_row_start_x(1), 30);
        assert_eq!(dot_row_start_x(0), 33);
        assert_eq!(dot_row_start_x(20), 0);
        assert_eq!(dot_x(21, 3), 39);
    }
}
