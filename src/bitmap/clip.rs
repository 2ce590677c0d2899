use serde::{Deserialize, Serialize};

/// Inclusive clip rectangle in bitmap coordinates.
///
/// Always non-empty and inside the owning bitmap: `0 <= x1 <= x2 < width`,
/// `0 <= y1 <= y2 < height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClipRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl ClipRect {
    /// Whole-bitmap clip
    pub(crate) fn full(width: u32, height: u32) -> Self {
        Self {
            x1: 0,
            y1: 0,
            x2: width as i32 - 1,
            y2: height as i32 - 1,
        }
    }

    /// Clamp a requested `x, y, w, h` box into a `width x height` bitmap.
    /// Requests that are empty or fully outside collapse onto the nearest edge.
    pub(crate) fn clamped(x: i32, y: i32, w: i32, h: i32, width: u32, height: u32) -> Self {
        let max_x = width as i32 - 1;
        let max_y = height as i32 - 1;
        let x1 = x.clamp(0, max_x);
        let y1 = y.clamp(0, max_y);
        let x2 = x.saturating_add(w).saturating_sub(1).clamp(x1, max_x);
        let y2 = y.saturating_add(h).saturating_sub(1).clamp(y1, max_y);
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    pub fn w(&self) -> i32 {
        self.x2 - self.x1 + 1
    }

    #[inline]
    pub fn h(&self) -> i32 {
        self.y2 - self.y1 + 1
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    /// True when the inclusive box `[ax, bx] x [ay, by]` misses the clip.
    /// Corners may come in any order.
    #[inline]
    pub(crate) fn misses(&self, ax: i32, ay: i32, bx: i32, by: i32) -> bool {
        ax.max(bx) < self.x1 || ax.min(bx) > self.x2 || ay.max(by) < self.y1 || ay.min(by) > self.y2
    }

    /// Intersect the inclusive box `[ax, bx] x [ay, by]` (ordered corners)
    /// with the clip. Returns `None` when nothing remains.
    #[inline]
    pub(crate) fn intersect(&self, ax: i32, ay: i32, bx: i32, by: i32) -> Option<(i32, i32, i32, i32)> {
        let x1 = ax.max(self.x1);
        let y1 = ay.max(self.y1);
        let x2 = bx.min(self.x2);
        let y2 = by.min(self.y2);
        (x1 <= x2 && y1 <= y2).then_some((x1, y1, x2, y2))
    }
}
