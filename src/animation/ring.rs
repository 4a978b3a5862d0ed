//! Spinner markers travelling around the ring outline

use crate::render::layout::Rect;

/// Clockwise top-left positions of a 2px marker along a rectangle outline
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RingPath {
    points: Vec<(i32, i32)>,
}

impl RingPath {
    /// Trace the outline of `ring`, keeping the marker inside a 2px border
    ///
    /// The bottom edge runs one pixel above the box, matching the lifted
    /// bottom bar of the ring. Degenerate sizes yield an empty path.
    pub fn around(ring: Rect) -> Self {
        let Rect { x, y, w, h } = ring;
        let right_x = x + w - 2;
        let bottom_y = y + h - 3;

        let top = (x..x + w - 1).map(|px| (px, y));
        let right = (y..y + h - 2).map(|py| (right_x, py));
        let bottom = (x + 1..=right_x).rev().map(|px| (px, bottom_y));
        let left = (y + 1..=bottom_y).rev().map(|py| (x, py));

        Self {
            points: top.chain(right).chain(bottom).chain(left).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<(i32, i32)> {
        self.points.get(index).copied()
    }

    pub fn points(&self) -> &[(i32, i32)] {
        &self.points
    }
}

/// Two markers chasing each other half a lap apart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingSpinner {
    path: RingPath,
    index1: usize,
    index2: usize,
}

impl RingSpinner {
    pub fn new(path: RingPath) -> Self {
        let index2 = path.len() / 2;
        Self { path, index1: 0, index2 }
    }

    /// Move both markers one step; no-op on an empty path
    pub fn advance(&mut self) {
        let len = self.path.len();
        if len == 0 {
            return;
        }
        self.index1 = (self.index1 + 1) % len;
        self.index2 = (self.index2 + 1) % len;
    }

    /// Current marker positions, `None` when there is no path to follow
    pub fn positions(&self) -> Option<((i32, i32), (i32, i32))> {
        Some((self.path.get(self.index1)?, self.path.get(self.index2)?))
    }

    pub fn indices(&self) -> (usize, usize) {
        (self.index1, self.index2)
    }

    pub fn path(&self) -> &RingPath {
        &self.path
    }
}
