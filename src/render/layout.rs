//! Canvas geometry

use crate::surface::Font;

/// Axis-aligned rectangle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Width and height as surface sizes, negative values clamped to zero
    pub fn size(&self) -> (u32, u32) {
        (self.w.max(0) as u32, self.h.max(0) as u32)
    }
}

pub const CANVAS_WIDTH: i32 = 64;
pub const CANVAS_HEIGHT: i32 = 64;

pub const TITLE_FONT: Font = Font::Small;
pub const TITLE_POS: (i32, i32) = (4, 2);
pub const LABEL_Y: i32 = 2;
/// Gap between the right-aligned phase label and the canvas edge
pub const LABEL_RIGHT_MARGIN: i32 = 2;

pub const TIMER_FONT: Font = Font::Large;
pub const TIMER_MINUTES_POS: (i32, i32) = (8, 20);
pub const TIMER_COLON_POS: (i32, i32) = (27, 20);
pub const TIMER_SECONDS_POS: (i32, i32) = (36, 20);

/// Frame around the digits
pub const RING: Rect = Rect::new(4, 18, 56, 24);
pub const RING_THICKNESS: i32 = 2;
pub const SPINNER_SIZE: i32 = 2;

pub const SLICE_ROW_Y: i32 = 14;
pub const ROUND_ROW_Y: i32 = 43;
pub const DOT_SIZE: i32 = 3;
pub const DOT_GAP: i32 = 3;
/// No more dots than canvas columns are ever created
pub const MAX_DOTS: u32 = CANVAS_WIDTH as u32;

pub const PROGRESS_BAR: Rect = Rect::new(4, 55, 56, 6);
pub const SWEEP_TICKER_WIDTH: i32 = 1;
pub const SWEEP_DURATION_MS: u32 = 980;

pub const BORDER_THICKNESS: i32 = 2;

/// Top, bottom, left and right bars of the ring; the bottom sits 1px high
pub fn ring_edges(ring: Rect) -> [Rect; 4] {
    let t = RING_THICKNESS;
    [
        Rect::new(ring.x, ring.y, ring.w, t),
        Rect::new(ring.x, ring.y + ring.h - t - 1, ring.w, t),
        Rect::new(ring.x, ring.y, t, ring.h - 1),
        Rect::new(ring.x + ring.w - t, ring.y, t, ring.h - 1),
    ]
}

/// Top, bottom, left and right bars of the flash frame around the canvas
pub fn border_edges() -> [Rect; 4] {
    let t = BORDER_THICKNESS;
    [
        Rect::new(0, 0, CANVAS_WIDTH, t),
        Rect::new(0, CANVAS_HEIGHT - t, CANVAS_WIDTH, t),
        Rect::new(0, t, t, CANVAS_HEIGHT - 2 * t),
        Rect::new(CANVAS_WIDTH - t, t, t, CANVAS_HEIGHT - 2 * t),
    ]
}
