//! Primitive rasterizer
//!
//! Points, lines, rectangles, circles and triangles. Every primitive rejects
//! input whose bounding box misses the clip rectangle, and every pixel it
//! writes goes through the bitmap's blend mode and mask.

use crate::bitmap::{Bitmap, ClipRect, PixelsMut};
use crate::blend::{blend, BlendMode};
use crate::color::Color;

// ============================================================================
// Painter
// ============================================================================

/// A bitmap's pixels borrowed for one drawing call, together with the clip
/// and blend settings in effect for that call.
pub(crate) struct Painter<'a> {
    pixels: PixelsMut<'a>,
    stride: usize,
    clip: ClipRect,
    mode: BlendMode,
    mask: u32,
}

impl Bitmap {
    pub(crate) fn painter(&mut self) -> Painter<'_> {
        let stride = self.width() as usize;
        let clip = self.clip();
        let mode = self.blend_mode();
        let mask = self.mask();
        Painter {
            pixels: self.pixels_mut(),
            stride,
            clip,
            mode,
            mask,
        }
    }
}

impl Painter<'_> {
    /// Blend into `(x, y)`; caller guarantees it lies inside the clip
    #[inline]
    pub(crate) fn blend_at(&mut self, x: i32, y: i32, color: Color) {
        debug_assert!(self.clip.contains(x, y));
        let idx = x as usize + y as usize * self.stride;
        self.pixels[idx] = blend(self.pixels[idx], color, self.mode, self.mask);
    }

    /// Blend into `(x, y)` if it lies inside the clip
    #[inline]
    pub(crate) fn point(&mut self, x: i32, y: i32, color: Color) {
        if self.clip.contains(x, y) {
            self.blend_at(x, y, color);
        }
    }

    /// Blend into `(x, y)` if it lies inside the clip; coordinates may be
    /// outside the `i32` range
    #[inline]
    fn point_wide(&mut self, x: i64, y: i64, color: Color) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.point(x, y, color);
        }
    }

    /// Fractional-step line: `max(|dx|, |dy|) + 1` samples rounded to the
    /// nearest pixel.
    pub(crate) fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        if self.clip.misses(x1, y1, x2, y2) {
            return;
        }

        let dx = i64::from(x2) - i64::from(x1);
        let dy = i64::from(y2) - i64::from(y1);
        let steps = dx.abs().max(dy.abs());
        if steps == 0 {
            self.point(x1, y1, color);
            return;
        }

        // The major axis moves exactly one pixel per step, so only the steps
        // whose major coordinate lies inside the clip can plot anything
        let (start, dir, lo, hi) = if dx.abs() >= dy.abs() {
            (x1, dx.signum(), self.clip.x1, self.clip.x2)
        } else {
            (y1, dy.signum(), self.clip.y1, self.clip.y2)
        };
        let a = dir * (i64::from(lo) - i64::from(start));
        let b = dir * (i64::from(hi) - i64::from(start));
        let first = a.min(b).max(0);
        let last = a.max(b).min(steps);

        let x_inc = dx as f64 / steps as f64;
        let y_inc = dy as f64 / steps as f64;
        let (x0, y0) = (f64::from(x1), f64::from(y1));
        for i in first..=last {
            let x = (x0 + x_inc * i as f64).round() as i32;
            let y = (y0 + y_inc * i as f64).round() as i32;
            self.point(x, y, color);
        }
    }

    pub(crate) fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);
        let Some((x1, y1, x2, y2)) = self.clip.intersect(x, y, right, bottom) else {
            return;
        };
        for ty in y1..=y2 {
            for tx in x1..=x2 {
                self.blend_at(tx, ty, color);
            }
        }
    }

    /// One-pixel border made of four bars that never overlap
    pub(crate) fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);
        self.fill_rect(x, y, w, 1, color);
        if h > 1 {
            self.fill_rect(x, bottom, w, 1, color);
        }
        if h > 2 {
            let below = y.saturating_add(1);
            self.fill_rect(x, below, 1, h - 2, color);
            if w > 1 {
                self.fill_rect(right, below, 1, h - 2, color);
            }
        }
    }

    /// Integer midpoint circle, one point per quadrant per step
    pub(crate) fn circle(&mut self, xm: i32, ym: i32, r: i32, color: Color) {
        if r < 0
            || self.clip.misses(
                xm.saturating_sub(r),
                ym.saturating_sub(r),
                xm.saturating_add(r),
                ym.saturating_add(r),
            )
        {
            return;
        }
        if r == 0 {
            self.point(xm, ym, color);
            return;
        }

        // Clip entirely inside the ring: no point can land in it
        let reach = |lo: i32, hi: i32, m: i32| {
            let far = (i128::from(lo) - i128::from(m)).abs().max((i128::from(hi) - i128::from(m)).abs());
            far * far
        };
        let inner = i128::from(r) - 1;
        if reach(self.clip.x1, self.clip.x2, xm) + reach(self.clip.y1, self.clip.y2, ym) < inner * inner {
            return;
        }

        let (xm, ym) = (i64::from(xm), i64::from(ym));
        let mut x = -i64::from(r);
        let mut y = 0i64;
        let mut err = 2 + 2 * x;
        loop {
            self.point_wide(xm - x, ym + y, color);
            self.point_wide(xm - y, ym - x, color);
            self.point_wide(xm + x, ym - y, color);
            self.point_wide(xm + y, ym + x, color);

            let e = err;
            if e <= y {
                y += 1;
                err += y * 2 + 1;
            }
            if e > x || err > y {
                x += 1;
                err += x * 2 + 1;
            }
            if x >= 0 {
                break;
            }
        }
    }

    pub(crate) fn fill_circle(&mut self, xm: i32, ym: i32, r: i32, color: Color) {
        if r < 0 {
            return;
        }
        let Some((x1, y1, x2, y2)) = self.clip.intersect(
            xm.saturating_sub(r),
            ym.saturating_sub(r),
            xm.saturating_add(r),
            ym.saturating_add(r),
        ) else {
            return;
        };

        let r2 = i64::from(r) * i64::from(r);
        for y in y1..=y2 {
            let dy = i64::from(y) - i64::from(ym);
            for x in x1..=x2 {
                let dx = i64::from(x) - i64::from(xm);
                if dx * dx + dy * dy <= r2 {
                    self.blend_at(x, y, color);
                }
            }
        }
    }

    pub(crate) fn triangle(&mut self, v: [(i32, i32); 3], color: Color) {
        let [(x1, y1), (x2, y2), (x3, y3)] = v;
        self.line(x1, y1, x2, y2, color);
        self.line(x2, y2, x3, y3, color);
        self.line(x3, y3, x1, y1, color);
    }

    /// Outline, then scanline fill by shape: flat bottom, flat top, or a
    /// general triangle split at the middle vertex's row.
    pub(crate) fn fill_triangle(&mut self, v: [(i32, i32); 3], color: Color) {
        let min_x = v[0].0.min(v[1].0).min(v[2].0);
        let max_x = v[0].0.max(v[1].0).max(v[2].0);
        let min_y = v[0].1.min(v[1].1).min(v[2].1);
        let max_y = v[0].1.max(v[1].1).max(v[2].1);
        if self.clip.misses(min_x, min_y, max_x, max_y) {
            return;
        }

        // Same outline as `triangle`, so filled and stroked shapes line up
        self.triangle(v, color);

        let [mut a, mut b, mut c] = v;
        if a.1 > b.1 {
            std::mem::swap(&mut a, &mut b);
        }
        if a.1 > c.1 {
            std::mem::swap(&mut a, &mut c);
        }
        if b.1 > c.1 {
            std::mem::swap(&mut b, &mut c);
        }
        let ((x1, y1), (x2, y2), (x3, y3)) = (a, b, c);

        // All three on one row: the outline already covers it
        if y1 == y3 {
            return;
        }

        let slope = |xa: i32, ya: i32, xb: i32, yb: i32| {
            (i64::from(xb) - i64::from(xa)) as f64 / (i64::from(yb) - i64::from(ya)) as f64
        };

        if y2 == y3 {
            self.scan_down(y1, y2, f64::from(x1), slope(x1, y1, x2, y2), slope(x1, y1, x3, y3), color);
        } else if y1 == y2 {
            self.scan_up(y3, y1, f64::from(x3), slope(x1, y1, x3, y3), slope(x2, y2, x3, y3), color);
        } else {
            let t = (i64::from(y2) - i64::from(y1)) as f64 / (i64::from(y3) - i64::from(y1)) as f64;
            let x4 = (f64::from(x1) + t * (i64::from(x3) - i64::from(x1)) as f64) as i32;
            self.scan_down(y1, y2, f64::from(x1), slope(x1, y1, x2, y2), slope(x1, y1, x4, y2), color);
            self.scan_up(y3, y2 + 1, f64::from(x3), slope(x2, y2, x3, y3), slope(x4, y2, x3, y3), color);
        }
    }

    /// Spans for rows `top..=bottom`, both edges starting at `x` on `top`.
    /// Rows outside the clip are skipped.
    fn scan_down(&mut self, top: i32, bottom: i32, x: f64, inv1: f64, inv2: f64, color: Color) {
        let first = top.max(self.clip.y1);
        let last = bottom.min(self.clip.y2);
        let skipped = (i64::from(first) - i64::from(top)) as f64;
        let (mut cx1, mut cx2) = (x + inv1 * skipped, x + inv2 * skipped);
        for y in first..=last {
            self.line(cx1 as i32, y, cx2 as i32, y, color);
            cx1 += inv1;
            cx2 += inv2;
        }
    }

    /// Spans for rows `bottom` down to `top`, both edges starting at `x` on
    /// `bottom`. Rows outside the clip are skipped.
    fn scan_up(&mut self, bottom: i32, top: i32, x: f64, inv1: f64, inv2: f64, color: Color) {
        let first = bottom.min(self.clip.y2);
        let last = top.max(self.clip.y1);
        let skipped = (i64::from(bottom) - i64::from(first)) as f64;
        let (mut cx1, mut cx2) = (x - inv1 * skipped, x - inv2 * skipped);
        for y in (last..=first).rev() {
            self.line(cx1 as i32, y, cx2 as i32, y, color);
            cx1 -= inv1;
            cx2 -= inv2;
        }
    }
}

// ============================================================================
// Bitmap drawing API
// ============================================================================

impl Bitmap {
    /// Blend a single pixel if it lies inside the clip rectangle
    pub fn draw_point(&mut self, x: i32, y: i32, color: Color) {
        self.painter().point(x, y, color);
    }

    /// Line from `(x1, y1)` to `(x2, y2)`, both endpoints included
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.painter().line(x1, y1, x2, y2, color);
    }

    /// One-pixel outline of `[x, x+w-1] x [y, y+h-1]`
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.painter().rect(x, y, w, h, color);
    }

    /// Fill `[x, x+w-1] x [y, y+h-1]`
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.painter().fill_rect(x, y, w, h, color);
    }

    pub fn draw_circle(&mut self, xm: i32, ym: i32, r: i32, color: Color) {
        self.painter().circle(xm, ym, r, color);
    }

    /// Every pixel within distance `r` of `(xm, ym)`
    pub fn fill_circle(&mut self, xm: i32, ym: i32, r: i32, color: Color) {
        self.painter().fill_circle(xm, ym, r, color);
    }

    pub fn draw_triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32, color: Color) {
        self.painter().triangle([(x1, y1), (x2, y2), (x3, y3)], color);
    }

    pub fn fill_triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32, color: Color) {
        self.painter().fill_triangle([(x1, y1), (x2, y2), (x3, y3)], color);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const BG: Color = 0x1122_3344;
    const INK: Color = 0xAABB_CCDD;

    fn canvas(w: u32, h: u32) -> Bitmap {
        let mut bmp = Bitmap::new(w, h).unwrap();
        bmp.clear(BG);
        bmp
    }

    /// Coordinates of every pixel that is not background
    fn inked(bmp: &Bitmap) -> HashSet<(i32, i32)> {
        let mut set = HashSet::new();
        for y in 0..bmp.height() as i32 {
            for x in 0..bmp.width() as i32 {
                if bmp.get_pixel(x, y) != BG {
                    set.insert((x, y));
                }
            }
        }
        set
    }

    fn set_of(points: &[(i32, i32)]) -> HashSet<(i32, i32)> {
        points.iter().copied().collect()
    }

    #[test]
    fn test_point_inside_and_outside() {
        let mut bmp = canvas(4, 4);
        bmp.draw_point(2, 1, INK);
        bmp.draw_point(-1, 0, INK);
        bmp.draw_point(4, 4, INK);
        assert_eq!(inked(&bmp), set_of(&[(2, 1)]));
        assert_eq!(bmp.get_pixel(2, 1), INK);
    }

    #[test]
    fn test_horizontal_line_is_exact() {
        let mut bmp = canvas(8, 8);
        bmp.draw_line(0, 0, 3, 0, INK);
        assert_eq!(inked(&bmp), set_of(&[(0, 0), (1, 0), (2, 0), (3, 0)]));
    }

    #[test]
    fn test_degenerate_line_is_a_point() {
        let mut bmp = canvas(4, 4);
        bmp.draw_line(2, 2, 2, 2, INK);
        assert_eq!(inked(&bmp), set_of(&[(2, 2)]));
    }

    #[test]
    fn test_shallow_line_rounds_fractional_steps() {
        let mut bmp = canvas(8, 8);
        // dy/dx = 0.5: y runs 0, 0.5, 1, 1.5, 2 and rounds half away from zero
        bmp.draw_line(0, 0, 4, 2, INK);
        assert_eq!(inked(&bmp), set_of(&[(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]));
    }

    #[test]
    fn test_reversed_line_covers_same_endpoints() {
        let mut bmp = canvas(8, 8);
        bmp.draw_line(5, 7, 1, 0, INK);
        let pixels = inked(&bmp);
        assert!(pixels.contains(&(5, 7)));
        assert!(pixels.contains(&(1, 0)));
        assert_eq!(pixels.len(), 8);
    }

    #[test]
    fn test_line_fully_outside_clip_is_noop() {
        let mut bmp = canvas(8, 8);
        bmp.set_clip(2, 2, 4, 4);
        bmp.draw_line(0, 0, 7, 0, INK);
        bmp.reset_clip();
        assert!(inked(&bmp).is_empty());
    }

    #[test]
    fn test_line_is_clipped_per_pixel() {
        let mut bmp = canvas(8, 8);
        bmp.set_clip(2, 0, 3, 8);
        bmp.draw_line(0, 3, 7, 3, INK);
        bmp.reset_clip();
        assert_eq!(inked(&bmp), set_of(&[(2, 3), (3, 3), (4, 3)]));
    }

    #[test]
    fn test_fill_rect_single_pixel_clip() {
        let mut bmp = canvas(4, 4);
        bmp.set_clip(1, 1, 1, 1);
        bmp.fill_rect(0, 0, 4, 4, INK);
        bmp.reset_clip();
        assert_eq!(inked(&bmp), set_of(&[(1, 1)]));
        assert_eq!(bmp.get_pixel(1, 1), INK);
    }

    #[test]
    fn test_fill_rect_covers_box_inclusive() {
        let mut bmp = canvas(6, 6);
        bmp.fill_rect(1, 2, 3, 2, INK);
        let expected = set_of(&[(1, 2), (2, 2), (3, 2), (1, 3), (2, 3), (3, 3)]);
        assert_eq!(inked(&bmp), expected);
    }

    #[test]
    fn test_fill_rect_degenerate_sizes() {
        let mut bmp = canvas(4, 4);
        bmp.fill_rect(0, 0, 0, 4, INK);
        bmp.fill_rect(0, 0, 4, -1, INK);
        bmp.fill_rect(10, 10, 3, 3, INK);
        assert!(inked(&bmp).is_empty());
    }

    #[test]
    fn test_draw_rect_border() {
        let mut bmp = canvas(6, 6);
        bmp.draw_rect(1, 1, 4, 3, INK);
        let expected = set_of(&[
            (1, 1), (2, 1), (3, 1), (4, 1),
            (1, 3), (2, 3), (3, 3), (4, 3),
            (1, 2), (4, 2),
        ]);
        assert_eq!(inked(&bmp), expected);
    }

    #[test]
    fn test_draw_rect_blends_corners_once() {
        let mut bmp = Bitmap::new(4, 4).unwrap();
        bmp.clear(0x0000_00FF);
        bmp.set_blend_mode(BlendMode::Blend);
        bmp.draw_rect(0, 0, 4, 4, 0xFF00_0080);
        // Every border pixel received exactly one half-strength blend
        let corner = bmp.get_pixel(0, 0);
        assert_eq!(corner, bmp.get_pixel(2, 0));
        assert_eq!(corner, bmp.get_pixel(3, 3));
        assert_eq!(corner, bmp.get_pixel(0, 2));
    }

    #[test]
    fn test_circle_radius_two() {
        let mut bmp = canvas(9, 9);
        bmp.draw_circle(4, 4, 2, INK);
        let expected: HashSet<_> = [
            (2, 0), (-2, 0), (0, 2), (0, -2),
            (2, 1), (2, -1), (-2, 1), (-2, -1),
            (1, 2), (-1, 2), (1, -2), (-1, -2),
        ]
        .iter()
        .map(|&(dx, dy)| (4 + dx, 4 + dy))
        .collect();
        assert_eq!(inked(&bmp), expected);
    }

    #[test]
    fn test_circle_zero_radius_plots_center() {
        let mut bmp = canvas(3, 3);
        bmp.draw_circle(1, 1, 0, INK);
        assert_eq!(inked(&bmp), set_of(&[(1, 1)]));
        bmp.draw_circle(1, 1, -3, 0);
        assert_eq!(inked(&bmp), set_of(&[(1, 1)]));
    }

    #[test]
    fn test_circle_partially_clipped_still_draws() {
        let mut bmp = canvas(8, 8);
        bmp.draw_circle(0, 0, 3, INK);
        let pixels = inked(&bmp);
        assert!(pixels.contains(&(3, 0)));
        assert!(pixels.contains(&(0, 3)));
    }

    #[test]
    fn test_fill_circle_uses_true_radius() {
        let mut bmp = canvas(11, 11);
        bmp.fill_circle(5, 5, 2, INK);
        let mut expected = HashSet::new();
        for y in 0..11 {
            for x in 0..11 {
                if (x - 5) * (x - 5) + (y - 5) * (y - 5) <= 4 {
                    expected.insert((x, y));
                }
            }
        }
        assert_eq!(expected.len(), 13);
        assert_eq!(inked(&bmp), expected);
    }

    #[test]
    fn test_fill_circle_clipped() {
        let mut bmp = canvas(8, 8);
        bmp.set_clip(0, 0, 4, 8);
        bmp.fill_circle(4, 4, 3, INK);
        bmp.reset_clip();
        assert!(inked(&bmp).iter().all(|&(x, _)| x < 4));
        assert!(inked(&bmp).contains(&(1, 4)));
    }

    #[test]
    fn test_triangle_outline() {
        let mut bmp = canvas(6, 6);
        bmp.draw_triangle(0, 0, 4, 0, 0, 4, INK);
        let expected = set_of(&[
            (0, 0), (1, 0), (2, 0), (3, 0), (4, 0),
            (3, 1), (2, 2), (1, 3),
            (0, 4), (0, 3), (0, 2), (0, 1),
        ]);
        assert_eq!(inked(&bmp), expected);
    }

    #[test]
    fn test_fill_right_triangle_staircase() {
        let mut bmp = canvas(6, 6);
        bmp.fill_triangle(0, 0, 4, 0, 0, 4, INK);
        let mut expected = HashSet::new();
        for y in 0..=4 {
            for x in 0..=(4 - y) {
                expected.insert((x, y));
            }
        }
        assert_eq!(inked(&bmp), expected);
    }

    #[test]
    fn test_fill_flat_bottom_triangle() {
        let mut bmp = canvas(9, 9);
        bmp.fill_triangle(4, 0, 0, 4, 8, 4, INK);
        let mut expected = HashSet::new();
        for y in 0..=4 {
            for x in (4 - y)..=(4 + y) {
                expected.insert((x, y));
            }
        }
        assert_eq!(inked(&bmp), expected);
    }

    #[test]
    fn test_fill_general_triangle_has_no_holes() {
        let mut bmp = canvas(12, 12);
        bmp.fill_triangle(1, 1, 10, 4, 3, 10, INK);
        let pixels = inked(&bmp);
        // Each row between the extreme vertices is one contiguous span
        for y in 1..=10 {
            let xs: Vec<i32> = pixels.iter().filter(|p| p.1 == y).map(|p| p.0).collect();
            assert!(!xs.is_empty(), "row {} empty", y);
            let min = *xs.iter().min().unwrap();
            let max = *xs.iter().max().unwrap();
            assert_eq!(xs.len() as i32, max - min + 1, "row {} has a gap", y);
        }
        assert!(pixels.contains(&(4, 4)));
    }

    #[test]
    fn test_fill_triangle_single_row() {
        let mut bmp = canvas(6, 3);
        bmp.fill_triangle(0, 1, 5, 1, 2, 1, INK);
        let expected: HashSet<_> = (0..=5).map(|x| (x, 1)).collect();
        assert_eq!(inked(&bmp), expected);
    }

    #[test]
    fn test_nothing_escapes_clip() {
        let mut bmp = canvas(16, 16);
        bmp.set_clip(4, 4, 6, 6);
        bmp.draw_line(-5, -5, 20, 20, INK);
        bmp.draw_line(0, 15, 15, 0, INK);
        bmp.draw_rect(2, 2, 12, 12, INK);
        bmp.fill_rect(-3, 5, 40, 2, INK);
        bmp.draw_circle(7, 7, 5, INK);
        bmp.fill_circle(12, 12, 4, INK);
        bmp.draw_triangle(0, 0, 15, 3, 3, 15, INK);
        bmp.fill_triangle(0, 0, 15, 8, 8, 15, INK);
        let clip = bmp.clip();
        bmp.reset_clip();
        for (x, y) in inked(&bmp) {
            assert!(clip.contains(x, y), "({}, {}) written outside clip", x, y);
        }
    }

    #[test]
    fn test_huge_circle_around_canvas_draws_nothing() {
        let mut bmp = canvas(16, 16);
        bmp.draw_circle(4, 4, i32::MAX, INK);
        bmp.draw_circle(i32::MIN, 0, i32::MAX, INK);
        assert!(inked(&bmp).is_empty());
    }

    #[test]
    fn test_large_circle_arc_through_canvas() {
        let mut bmp = canvas(16, 16);
        bmp.draw_circle(-1000, 5, 1005, INK);
        let pixels = inked(&bmp);
        assert!(pixels.contains(&(5, 5)));
        assert!(pixels.iter().all(|&(x, _)| x <= 5));
    }

    #[test]
    fn test_fill_triangle_extreme_vertices() {
        let mut bmp = canvas(16, 16);
        bmp.fill_triangle(i32::MIN, 0, i32::MAX, 0, 0, 5, INK);
        let pixels = inked(&bmp);
        for y in 0..5 {
            for x in 0..16 {
                assert!(pixels.contains(&(x, y)), "({}, {}) not filled", x, y);
            }
        }
        assert!(pixels.contains(&(0, 5)));
        assert!(pixels.iter().all(|&(_, y)| y <= 5));
    }

    #[test]
    fn test_extreme_lines_and_rects() {
        let mut bmp = canvas(8, 8);
        bmp.draw_line(i32::MIN, 3, i32::MAX, 3, INK);
        let row: HashSet<_> = (0..8).map(|x| (x, 3)).collect();
        assert_eq!(inked(&bmp), row);

        let mut bmp = canvas(8, 8);
        bmp.draw_rect(0, i32::MAX - 1, 8, 8, INK);
        bmp.draw_rect(i32::MAX, i32::MAX, i32::MAX, i32::MAX, INK);
        bmp.draw_rect(-4, -4, i32::MAX, i32::MAX, INK);
        assert!(inked(&bmp).is_empty());

        bmp.draw_rect(2, 2, i32::MAX, i32::MAX, INK);
        assert!(inked(&bmp).contains(&(2, 7)));
        assert!(inked(&bmp).contains(&(7, 2)));
        assert!(!inked(&bmp).contains(&(3, 3)));
    }
}
