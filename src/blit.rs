//! Bitmap-to-bitmap blitting
//!
//! Three levels of transform:
//! - [`Bitmap::copy`]: untransformed placement
//! - [`Bitmap::copy_ex`]: integer magnification, axis flips, quarter turns
//! - [`Bitmap::draw_bitmap`]: arbitrary rotation and scale around a pivot,
//!   sampled by inverse mapping with nearest-neighbour lookup
//!
//! Sources are read from their clip rectangle only; destinations are written
//! inside their clip rectangle only, through their blend mode.

use std::ops::Deref;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::bitmap::{Bitmap, Pixels};
use crate::color::Color;

bitflags! {
    /// Flip/rotate selection for [`Bitmap::copy_ex`].
    ///
    /// Flips are applied in destination space after the quarter turn, so
    /// `ROTATE_180` is both flips and `ROTATE_270` is a quarter turn plus both
    /// flips. The vertical flip mirrors across the vertical axis (columns
    /// swap sides), the horizontal flip across the horizontal axis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Transform: u8 {
        /// Mirror columns (left to right)
        const FLIP_VERTICAL = 0x01;
        /// Mirror rows (upside down)
        const FLIP_HORIZONTAL = 0x02;
        /// Quarter turn counter-clockwise
        const ROTATE_90 = 0x04;
        const ROTATE_180 = Self::FLIP_HORIZONTAL.bits() | Self::FLIP_VERTICAL.bits();
        const ROTATE_270 = Self::ROTATE_90.bits() | Self::ROTATE_180.bits();
    }
}

impl Transform {
    pub const NONE: Self = Self::empty();
    pub const ROTATE_360: Self = Self::empty();
}

/// Source pixels for one blit. A source that aliases the destination's
/// buffer is snapshotted so reads never observe the blit's own writes.
enum Source<'a> {
    Live(Pixels<'a>),
    Snapshot(Vec<Color>),
}

impl Deref for Source<'_> {
    type Target = [Color];

    fn deref(&self) -> &[Color] {
        match self {
            Self::Live(p) => p,
            Self::Snapshot(p) => p,
        }
    }
}

fn source_view<'a>(dest: &Bitmap, src: &'a Bitmap) -> Source<'a> {
    if dest.shares_buffer_with(src) {
        Source::Snapshot(src.pixels().to_vec())
    } else {
        Source::Live(src.pixels())
    }
}

#[inline]
fn to_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl Bitmap {
    /// Place `src`'s clip region with its top-left corner at `(x, y)`
    pub fn copy(&mut self, src: &Bitmap, x: i32, y: i32) {
        let sc = src.clip();
        let right = to_i32(i64::from(x) + i64::from(sc.w()) - 1);
        let bottom = to_i32(i64::from(y) + i64::from(sc.h()) - 1);
        let Some((x1, y1, x2, y2)) = self.clip().intersect(x, y, right, bottom) else {
            return;
        };

        let stride = src.width() as usize;
        let source = source_view(self, src);
        let mut painter = self.painter();
        for ty in y1..=y2 {
            let row = (ty - y + sc.y1) as usize * stride;
            for tx in x1..=x2 {
                let col = (tx - x + sc.x1) as usize;
                painter.blend_at(tx, ty, source[row + col]);
            }
        }
    }

    /// Integer-scaled copy with optional flips and quarter turns.
    ///
    /// The placement is `sw * scale_x` by `sh * scale_y` pixels, or
    /// `sh * scale_x` by `sw * scale_y` under `ROTATE_90`. Non-positive scale
    /// factors draw nothing.
    pub fn copy_ex(
        &mut self,
        src: &Bitmap,
        x: i32,
        y: i32,
        scale_x: i32,
        scale_y: i32,
        transform: Transform,
    ) {
        if scale_x <= 0 || scale_y <= 0 {
            return;
        }

        let sc = src.clip();
        let (sx, sy) = (i64::from(scale_x), i64::from(scale_y));
        let (sw, sh) = (i64::from(sc.w()), i64::from(sc.h()));
        let rotate = transform.contains(Transform::ROTATE_90);
        let flip_cols = transform.contains(Transform::FLIP_VERTICAL);
        let flip_rows = transform.contains(Transform::FLIP_HORIZONTAL);
        let (w, h) = if rotate { (sh * sx, sw * sy) } else { (sw * sx, sh * sy) };

        let right = to_i32(i64::from(x) + w - 1);
        let bottom = to_i32(i64::from(y) + h - 1);
        let Some((x1, y1, x2, y2)) = self.clip().intersect(x, y, right, bottom) else {
            return;
        };

        let stride = i64::from(src.width());
        let source = source_view(self, src);
        let mut painter = self.painter();
        for ty in y1..=y2 {
            let mut v = i64::from(ty) - i64::from(y);
            if flip_rows {
                v = h - 1 - v;
            }
            for tx in x1..=x2 {
                let mut u = i64::from(tx) - i64::from(x);
                if flip_cols {
                    u = w - 1 - u;
                }
                let (col, row) = if rotate {
                    ((h - 1 - v) / sy, u / sx)
                } else {
                    (u / sx, v / sy)
                };
                let idx = (i64::from(sc.x1) + col) + (i64::from(sc.y1) + row) * stride;
                painter.blend_at(tx, ty, source[idx as usize]);
            }
        }
    }

    /// Rotate `src` by `angle` radians (clockwise on screen) and scale it
    /// around the pivot `(origin_x, origin_y)` in source space; the pivot lands
    /// on `(x, y)`.
    ///
    /// Destination pixels whose inverse-mapped source coordinate falls outside
    /// `[0, w-1] x [0, h-1]` of the source clip are left untouched; the rest
    /// take the nearest texel.
    pub fn draw_bitmap(
        &mut self,
        src: &Bitmap,
        x: i32,
        y: i32,
        angle: f32,
        origin_x: i32,
        origin_y: i32,
        scale_x: f32,
        scale_y: f32,
    ) {
        if scale_x == 0.0 || scale_y == 0.0 || !(scale_x.is_finite() && scale_y.is_finite() && angle.is_finite()) {
            return;
        }

        let sc = src.clip();
        let (sin, cos) = angle.sin_cos();
        let (ox, oy) = (origin_x as f32, origin_y as f32);
        let (sw, sh) = (sc.w() as f32, sc.h() as f32);

        let forward = |px: f32, py: f32| {
            let (px, py) = (px * scale_x, py * scale_y);
            (px * cos - py * sin, px * sin + py * cos)
        };
        let corners = [
            forward(-ox, -oy),
            forward(sw - ox, -oy),
            forward(-ox, sh - oy),
            forward(sw - ox, sh - oy),
        ];
        let (mut min_x, mut min_y) = (f32::INFINITY, f32::INFINITY);
        let (mut max_x, mut max_y) = (f32::NEG_INFINITY, f32::NEG_INFINITY);
        for (cx, cy) in corners {
            min_x = min_x.min(cx);
            min_y = min_y.min(cy);
            max_x = max_x.max(cx);
            max_y = max_y.max(cy);
        }

        let left = x.saturating_add(min_x.floor() as i32);
        let top = y.saturating_add(min_y.floor() as i32);
        let right = x.saturating_add(max_x.ceil() as i32);
        let bottom = y.saturating_add(max_y.ceil() as i32);
        let Some((x1, y1, x2, y2)) = self.clip().intersect(left, top, right, bottom) else {
            return;
        };

        let (last_x, last_y) = ((sc.w() - 1) as f32, (sc.h() - 1) as f32);
        let stride = src.width() as usize;
        let source = source_view(self, src);
        let mut painter = self.painter();
        for ty in y1..=y2 {
            let dy = (i64::from(ty) - i64::from(y)) as f32;
            for tx in x1..=x2 {
                let dx = (i64::from(tx) - i64::from(x)) as f32;
                let nx = (dx * cos + dy * sin) / scale_x + ox;
                let ny = (dy * cos - dx * sin) / scale_y + oy;
                if nx < 0.0 || ny < 0.0 || nx > last_x || ny > last_y {
                    continue;
                }
                let col = (nx + 0.5) as i32 + sc.x1;
                let row = (ny + 0.5) as i32 + sc.y1;
                let idx = col as usize + row as usize * stride;
                painter.blend_at(tx, ty, source[idx]);
            }
        }
    }
}
