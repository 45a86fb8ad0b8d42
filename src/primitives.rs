//! Shape rasterization
//!
//! Lines, rectangles, rounded rectangles, triangles and circles, each in outline
//! and filled form. Everything is integer-only. Arguments are validated up front;
//! afterwards every pixel is known to be inside the logical frame, so the
//! rasterizers write through the unchecked span helpers of [`Display`].
//!
//! Filled shapes are sent as horizontal spans, one address window per span, which
//! keeps the bus traffic close to one window per row.

use crate::color::Color;
use crate::display::{Display, DisplayResult};
use crate::error::Error;
use crate::interface::DisplayInterface;

/// Midpoint circle walk over one octant
///
/// Yields `(x, y)` offsets with `x` growing from 1 while `x < y` held before the
/// step. The four cardinal points `(0, ±r)`, `(±r, 0)` are not included.
struct MidpointArc {
    f: i32,
    ddf_x: i32,
    ddf_y: i32,
    x: i32,
    y: i32,
}

impl MidpointArc {
    fn new(r: i32) -> Self {
        Self {
            f: 1 - r,
            ddf_x: 1,
            ddf_y: -2 * r,
            x: 0,
            y: r,
        }
    }
}

impl Iterator for MidpointArc {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x >= self.y {
            return None;
        }
        if self.f >= 0 {
            self.y -= 1;
            self.ddf_y += 2;
            self.f += self.ddf_y;
        }
        self.x += 1;
        self.ddf_x += 2;
        self.f += self.ddf_x;
        Some((self.x, self.y))
    }
}

// Corner masks for the quarter-circle helpers
const TOP_LEFT: u8 = 0x1;
const TOP_RIGHT: u8 = 0x2;
const BOTTOM_RIGHT: u8 = 0x4;
const BOTTOM_LEFT: u8 = 0x8;

// Half masks for the filled helper
const UPPER: u8 = 0x1;
const LOWER: u8 = 0x2;

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Draw a straight line between two points, endpoints included
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if either endpoint is outside the logical frame.
    pub fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    ) -> DisplayResult<I> {
        self.check_point(x0, y0)?;
        self.check_point(x1, y1)?;
        self.line(x0, y0, x1, y1, color)
    }

    /// Draw the outline of a rectangle
    ///
    /// Every boundary pixel is written once. A rectangle one pixel wide or tall
    /// is drawn as a fill.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidSize` if `w` or `h` is not positive
    /// * `Error::OutOfBounds` if the rectangle is not fully inside the frame
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) -> DisplayResult<I> {
        self.check_rect(x, y, w, h)?;
        self.rect_outline(x, y, w, h, color)
    }

    /// Fill a rectangle
    ///
    /// # Errors
    ///
    /// * `Error::InvalidSize` if `w` or `h` is not positive
    /// * `Error::OutOfBounds` if the rectangle is not fully inside the frame
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) -> DisplayResult<I> {
        let (x, y, w, h) = self.check_rect(x, y, w, h)?;
        self.fill_span(x, y, w, h, color)
    }

    /// Draw the outline of a rectangle with rounded corners
    ///
    /// # Errors
    ///
    /// Same as [`Display::draw_rect`], plus `Error::InvalidRadius` if `radius` is
    /// negative or larger than half the shorter side.
    pub fn draw_round_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        radius: i32,
        color: Color,
    ) -> DisplayResult<I> {
        let r = self.check_round_rect(x, y, w, h, radius)?;
        if r == 0 || w.min(h) <= 2 {
            return self.rect_outline(x, y, w, h, color);
        }

        self.span(x + r, y, w - 2 * r, 1, color)?;
        self.span(x + r, y + h - 1, w - 2 * r, 1, color)?;
        self.span(x, y + r, 1, h - 2 * r, color)?;
        self.span(x + w - 1, y + r, 1, h - 2 * r, color)?;

        self.corner_arcs(x + r, y + r, r, TOP_LEFT, color)?;
        self.corner_arcs(x + w - r - 1, y + r, r, TOP_RIGHT, color)?;
        self.corner_arcs(x + w - r - 1, y + h - r - 1, r, BOTTOM_RIGHT, color)?;
        self.corner_arcs(x + r, y + h - r - 1, r, BOTTOM_LEFT, color)
    }

    /// Fill a rectangle with rounded corners
    ///
    /// # Errors
    ///
    /// Same as [`Display::draw_round_rect`].
    pub fn fill_round_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        radius: i32,
        color: Color,
    ) -> DisplayResult<I> {
        let r = self.check_round_rect(x, y, w, h, radius)?;
        // A side of two pixels has no room for a curve
        if r == 0 || w.min(h) <= 2 {
            return self.span(x, y, w, h, color);
        }
        self.span(x, y + r, w, h - 2 * r, color)?;
        self.filled_arcs(x + r, y + r, r, UPPER, w - 2 * r - 1, color)?;
        self.filled_arcs(x + r, y + h - r - 1, r, LOWER, w - 2 * r - 1, color)
    }

    /// Draw the outline of a triangle
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if any vertex is outside the logical frame.
    pub fn draw_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    ) -> DisplayResult<I> {
        self.check_point(x0, y0)?;
        self.check_point(x1, y1)?;
        self.check_point(x2, y2)?;
        self.line(x0, y0, x1, y1, color)?;
        self.line(x1, y1, x2, y2, color)?;
        self.line(x2, y2, x0, y0, color)
    }

    /// Fill a triangle
    ///
    /// Scanline fill: each row between the top and bottom vertex gets one span
    /// from the leftmost to the rightmost edge crossing. Collinear vertices give a
    /// line, coincident ones a single pixel.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if any vertex is outside the logical frame.
    pub fn fill_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    ) -> DisplayResult<I> {
        self.check_point(x0, y0)?;
        self.check_point(x1, y1)?;
        self.check_point(x2, y2)?;

        let edges = [((x0, y0), (x1, y1)), ((x1, y1), (x2, y2)), ((x2, y2), (x0, y0))];
        let top = y0.min(y1).min(y2);
        let bottom = y0.max(y1).max(y2);

        for y in top..=bottom {
            let mut left = i32::MAX;
            let mut right = i32::MIN;
            for &((xa, ya), (xb, yb)) in &edges {
                if ya == yb {
                    if ya == y {
                        left = left.min(xa.min(xb));
                        right = right.max(xa.max(xb));
                    }
                } else if ya.min(yb) <= y && y <= ya.max(yb) {
                    let x = xa + div_round((y - ya) * (xb - xa), yb - ya);
                    left = left.min(x);
                    right = right.max(x);
                }
            }
            if left <= right {
                self.span(left, y, right - left + 1, 1, color)?;
            }
        }
        Ok(())
    }

    /// Draw the outline of a circle
    ///
    /// A radius of 0 draws a single pixel.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidRadius` if `r` is negative
    /// * `Error::OutOfBounds` if the bounding square is not fully inside the frame
    pub fn draw_circle(&mut self, cx: i32, cy: i32, r: i32, color: Color) -> DisplayResult<I> {
        self.check_circle(cx, cy, r)?;
        if r == 0 {
            return self.dot(cx, cy, color);
        }

        self.dot(cx, cy + r, color)?;
        self.dot(cx, cy - r, color)?;
        self.dot(cx + r, cy, color)?;
        self.dot(cx - r, cy, color)?;
        self.corner_arcs(cx, cy, r, TOP_LEFT | TOP_RIGHT | BOTTOM_RIGHT | BOTTOM_LEFT, color)
    }

    /// Fill a circle, outline included
    ///
    /// # Errors
    ///
    /// Same as [`Display::draw_circle`].
    pub fn fill_circle(&mut self, cx: i32, cy: i32, r: i32, color: Color) -> DisplayResult<I> {
        self.check_circle(cx, cy, r)?;
        self.span(cx - r, cy, 2 * r + 1, 1, color)?;
        self.filled_arcs(cx, cy, r, UPPER | LOWER, 0, color)
    }

    fn check_round_rect(
        &self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        radius: i32,
    ) -> Result<i32, Error<I>> {
        self.check_rect(x, y, w, h)?;
        let shorter = w.min(h);
        if radius < 0 || radius > shorter / 2 {
            log::warn!("rejected corner radius {radius} for {w}x{h}");
            return Err(Error::InvalidRadius { radius });
        }
        Ok(radius)
    }

    fn check_circle(&self, cx: i32, cy: i32, r: i32) -> DisplayResult<I> {
        if r < 0 {
            log::warn!("rejected circle radius {r}");
            return Err(Error::InvalidRadius { radius: r });
        }
        self.check_point(cx.saturating_sub(r), cy.saturating_sub(r))?;
        self.check_point(cx.saturating_add(r), cy.saturating_add(r))?;
        Ok(())
    }

    /// Rectangle outline of a validated rectangle
    fn rect_outline(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) -> DisplayResult<I> {
        if w <= 2 || h <= 2 {
            return self.span(x, y, w, h, color);
        }
        self.span(x, y, w, 1, color)?;
        self.span(x, y + h - 1, w, 1, color)?;
        self.span(x, y + 1, 1, h - 2, color)?;
        self.span(x + w - 1, y + 1, 1, h - 2, color)
    }

    /// Bresenham between two validated points
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) -> DisplayResult<I> {
        if y0 == y1 {
            return self.span(x0.min(x1), y0, (x1 - x0).abs() + 1, 1, color);
        }
        if x0 == x1 {
            return self.span(x0, y0.min(y1), 1, (y1 - y0).abs() + 1, color);
        }

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.dot(x, y, color)?;
            if x == x1 && y == y1 {
                return Ok(());
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Octant arcs of a circle around `(cx, cy)`, for the corners in `mask`
    fn corner_arcs(
        &mut self,
        cx: i32,
        cy: i32,
        r: i32,
        mask: u8,
        color: Color,
    ) -> DisplayResult<I> {
        for (x, y) in MidpointArc::new(r) {
            if mask & BOTTOM_RIGHT != 0 {
                self.dot(cx + x, cy + y, color)?;
                self.dot(cx + y, cy + x, color)?;
            }
            if mask & TOP_RIGHT != 0 {
                self.dot(cx + x, cy - y, color)?;
                self.dot(cx + y, cy - x, color)?;
            }
            if mask & BOTTOM_LEFT != 0 {
                self.dot(cx - y, cy + x, color)?;
                self.dot(cx - x, cy + y, color)?;
            }
            if mask & TOP_LEFT != 0 {
                self.dot(cx - y, cy - x, color)?;
                self.dot(cx - x, cy - y, color)?;
            }
        }
        Ok(())
    }

    /// Filled half-discs above and/or below row `cy`, stretched right by `stretch`
    ///
    /// Each row's half-width comes from the same midpoint walk as the outline, so
    /// the fill covers it.
    fn filled_arcs(
        &mut self,
        cx: i32,
        cy: i32,
        r: i32,
        mask: u8,
        stretch: i32,
        color: Color,
    ) -> DisplayResult<I> {
        let extra = stretch + 1;
        let (mut px, mut py) = (0, r);

        for (x, y) in MidpointArc::new(r) {
            if x < y + 1 {
                if mask & UPPER != 0 {
                    self.span(cx - y, cy - x, 2 * y + extra, 1, color)?;
                }
                if mask & LOWER != 0 {
                    self.span(cx - y, cy + x, 2 * y + extra, 1, color)?;
                }
            }
            if y != py {
                if mask & UPPER != 0 {
                    self.span(cx - px, cy - py, 2 * px + extra, 1, color)?;
                }
                if mask & LOWER != 0 {
                    self.span(cx - px, cy + py, 2 * px + extra, 1, color)?;
                }
                py = y;
            }
            px = x;
        }
        Ok(())
    }

    /// Validated pixel, signed coordinates
    fn dot(&mut self, x: i32, y: i32, color: Color) -> DisplayResult<I> {
        self.write_pixel(x as u16, y as u16, color)
    }

    /// Validated span, signed coordinates; empty spans are skipped
    fn span(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) -> DisplayResult<I> {
        if w <= 0 || h <= 0 {
            return Ok(());
        }
        self.fill_span(x as u16, y as u16, w as u16, h as u16, color)
    }
}

/// Integer division rounded to nearest, halves rounded up
fn div_round(n: i32, d: i32) -> i32 {
    let (n, d) = if d < 0 { (-n, -d) } else { (n, d) };
    (2 * n + d).div_euclid(2 * d)
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeSet;
    use alloc::vec::Vec;

    use super::*;
    use crate::config::Rotation;
    use crate::error::ErrorKind;
    use crate::mock::{MockInterface, small_display, test_display, test_display_rotated};
    use crate::rotation::to_physical;

    const C: Color = Color::RED;

    fn set(points: &[(u16, u16)]) -> BTreeSet<(u16, u16)> {
        points.iter().copied().collect()
    }

    /// Physical pixels of a shape drawn on an unrotated display, as signed pairs
    fn drawn(display: &Display<MockInterface>) -> BTreeSet<(i32, i32)> {
        display
            .interface
            .pixels()
            .into_iter()
            .map(|(x, y)| (i32::from(x), i32::from(y)))
            .collect()
    }

    fn rows_are_contiguous(pixels: &BTreeSet<(i32, i32)>) -> bool {
        let ys: BTreeSet<i32> = pixels.iter().map(|p| p.1).collect();
        ys.iter().all(|&y| {
            let xs: Vec<i32> = pixels.iter().filter(|p| p.1 == y).map(|p| p.0).collect();
            xs.len() as i32 == xs[xs.len() - 1] - xs[0] + 1
        })
    }

    #[test]
    fn test_midpoint_arc_octant() {
        let steps: Vec<_> = MidpointArc::new(5).collect();
        assert_eq!(steps, [(1, 5), (2, 5), (3, 4), (4, 3)]);
        assert_eq!(MidpointArc::new(0).count(), 0);
    }

    #[test]
    fn test_div_round() {
        assert_eq!(div_round(7, 2), 4);
        assert_eq!(div_round(-7, 2), -3);
        assert_eq!(div_round(5, -2), -2);
        assert_eq!(div_round(10, 5), 2);
    }

    #[test]
    fn test_horizontal_and_vertical_lines() {
        let mut display = test_display();
        display.draw_line(0, 0, 10, 0, C).unwrap();
        let pixels = display.interface.pixels();
        assert_eq!(pixels.len(), 11);
        assert!(pixels.iter().all(|&(x, y)| y == 0 && x <= 10));

        let mut display = test_display();
        display.draw_line(0, 10, 0, 0, C).unwrap();
        let pixels = display.interface.pixels();
        assert_eq!(pixels.len(), 11);
        assert!(pixels.iter().all(|&(x, y)| x == 0 && y <= 10));
    }

    #[test]
    fn test_diagonal_lines() {
        let mut display = test_display();
        display.draw_line(0, 0, 3, 3, C).unwrap();
        assert_eq!(
            display.interface.pixels(),
            set(&[(0, 0), (1, 1), (2, 2), (3, 3)])
        );

        let mut display = test_display();
        display.draw_line(0, 0, 4, 2, C).unwrap();
        assert_eq!(
            display.interface.pixels(),
            set(&[(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)])
        );
    }

    #[test]
    fn test_line_is_connected_for_any_slope() {
        for (x1, y1) in [(20, 3), (3, 20), (20, 19), (0, 7), (17, 0)] {
            for (x0, y0) in [(0, 0), (x1, 0), (0, y1)] {
                let mut display = test_display();
                display.draw_line(x0, y0, x1, y1, C).unwrap();
                let pixels = drawn(&display);
                assert!(pixels.contains(&(x0, y0)) && pixels.contains(&(x1, y1)));
                let steps = (x1 - x0).abs().max((y1 - y0).abs());
                assert_eq!(pixels.len() as i32, steps + 1);
                for &(x, y) in &pixels {
                    let touching = pixels.iter().any(|&(a, b)| {
                        (a, b) != (x, y) && (a - x).abs() <= 1 && (b - y).abs() <= 1
                    });
                    assert!(touching || steps == 0);
                }
            }
        }
    }

    #[test]
    fn test_line_single_point() {
        let mut display = test_display();
        display.draw_line(5, 5, 5, 5, C).unwrap();
        assert_eq!(display.interface.writes, [(5, 5, C)]);
    }

    #[test]
    fn test_fill_rect_writes_each_pixel_once() {
        let mut display = test_display();
        display.fill_rect(3, 4, 7, 5, C).unwrap();
        assert_eq!(display.interface.writes.len(), 35);
        let pixels = display.interface.pixels();
        assert_eq!(pixels.len(), 35);
        assert!(
            pixels
                .iter()
                .all(|&(x, y)| (3..10).contains(&x) && (4..9).contains(&y))
        );
    }

    #[test]
    fn test_draw_rect_boundary_count() {
        for (w, h) in [(2, 2), (2, 5), (7, 5), (10, 3)] {
            let mut display = test_display();
            display.draw_rect(3, 4, w, h, C).unwrap();
            let expected = (2 * w + 2 * h - 4) as usize;
            assert_eq!(display.interface.pixels().len(), expected, "{w}x{h}");
            assert_eq!(display.interface.writes.len(), expected, "{w}x{h}");
        }
    }

    #[test]
    fn test_draw_rect_thin_is_filled() {
        let mut display = test_display();
        display.draw_rect(0, 0, 1, 6, C).unwrap();
        assert_eq!(display.interface.pixels().len(), 6);
    }

    #[test]
    fn test_rect_rejects_bad_size_without_writing() {
        let mut display = test_display();
        for (w, h) in [(0, 5), (5, 0), (-1, 5), (5, -3)] {
            let err = display.fill_rect(1, 1, w, h, C).unwrap_err();
            assert!(matches!(err, Error::InvalidSize { .. }));
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert!(display.draw_rect(1, 1, w, h, C).is_err());
        }
        assert!(display.interface.is_silent());
    }

    #[test]
    fn test_rect_must_be_contained() {
        let mut display = test_display();
        assert!(display.fill_rect(230, 0, 10, 10, C).is_ok());
        display.interface.clear();

        for (x, y, w, h) in [(231, 0, 10, 10), (0, 311, 10, 10), (-1, 0, 5, 5), (0, 0, 241, 1)] {
            let err = display.fill_rect(x, y, w, h, C).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::OutOfBounds);
            assert!(display.draw_rect(x, y, w, h, C).is_err());
        }
        assert!(display.interface.is_silent());
    }

    #[test]
    fn test_fill_rect_rotated() {
        for rotation in [Rotation::Rotate90, Rotation::Rotate270] {
            let mut display = test_display_rotated(rotation);
            display.fill_rect(300, 200, 20, 10, C).unwrap();
            let panel = *display.dimensions();
            let expected: BTreeSet<_> = (200..210)
                .flat_map(|y| (300..320).map(move |x| to_physical(x, y, panel, rotation)))
                .collect();
            assert_eq!(display.interface.pixels(), expected);
        }

        // Same rectangle does not fit the portrait frame
        let mut display = test_display_rotated(Rotation::Rotate180);
        assert!(display.fill_rect(300, 200, 20, 10, C).is_err());
        assert!(display.interface.is_silent());
    }

    #[test]
    fn test_round_rect_radius_zero_is_rect() {
        let mut plain = test_display();
        plain.draw_rect(2, 3, 9, 6, C).unwrap();
        let mut round = test_display();
        round.draw_round_rect(2, 3, 9, 6, 0, C).unwrap();
        assert_eq!(plain.interface.pixels(), round.interface.pixels());

        let mut plain = test_display();
        plain.fill_rect(2, 3, 9, 6, C).unwrap();
        let mut round = test_display();
        round.fill_round_rect(2, 3, 9, 6, 0, C).unwrap();
        assert_eq!(plain.interface.pixels(), round.interface.pixels());
    }

    #[test]
    fn test_round_rect_corners() {
        let mut display = test_display();
        display.draw_round_rect(0, 0, 5, 5, 2, C).unwrap();
        assert_eq!(
            display.interface.pixels(),
            set(&[
                (0, 1),
                (0, 2),
                (0, 3),
                (1, 0),
                (1, 4),
                (2, 0),
                (2, 4),
                (3, 0),
                (3, 4),
                (4, 1),
                (4, 2),
                (4, 3)
            ])
        );
    }

    #[test]
    fn test_fill_round_rect_contains_outline() {
        let cases = [
            (10, 6, 2),
            (10, 6, 3),
            (7, 7, 3),
            (12, 20, 5),
            (10, 10, 5),
            (8, 20, 4),
            (2, 2, 1),
            (2, 5, 1),
        ];
        for (w, h, r) in cases {
            let mut outline = test_display();
            outline.draw_round_rect(20, 30, w, h, r, C).unwrap();
            let mut fill = test_display();
            fill.fill_round_rect(20, 30, w, h, r, C).unwrap();

            let outline = drawn(&outline);
            let fill = drawn(&fill);
            assert!(outline.is_subset(&fill), "{w}x{h} r={r}");
            assert!(rows_are_contiguous(&fill));
            assert!(
                fill.iter()
                    .all(|&(x, y)| (20..20 + w).contains(&x) && (30..30 + h).contains(&y))
            );
            if r > 1 {
                assert!(!fill.contains(&(20, 30)));
            }
        }
    }

    #[test]
    fn test_round_rect_half_side_radius_keeps_full_curve() {
        let mut display = test_display();
        display.draw_round_rect(0, 0, 10, 6, 3, C).unwrap();
        let mut expected = set(&[
            (1, 1),
            (8, 1),
            (0, 2),
            (9, 2),
            (0, 3),
            (9, 3),
            (1, 4),
            (8, 4),
        ]);
        expected.extend((2..8).flat_map(|x| [(x, 0), (x, 5)]));
        assert_eq!(display.interface.pixels(), expected);

        let mut smaller = test_display();
        smaller.draw_round_rect(0, 0, 10, 6, 2, C).unwrap();
        assert_ne!(smaller.interface.pixels(), expected);
    }

    #[test]
    fn test_fill_round_rect_half_side_radius_is_disc() {
        let mut display = test_display();
        display.fill_round_rect(0, 0, 10, 10, 5, C).unwrap();
        let pixels = display.interface.pixels();

        // Row widths of a 10-pixel disc
        let widths: [u16; 10] = [4, 6, 8, 10, 10, 10, 10, 8, 6, 4];
        for (y, &width) in widths.iter().enumerate() {
            let start = (10 - width) / 2;
            let row: BTreeSet<_> = pixels.iter().filter(|p| p.1 == y as u16).collect();
            assert_eq!(row.len(), width as usize, "row {y}");
            assert!(row.iter().all(|p| (start..start + width).contains(&p.0)));
        }
        assert_eq!(pixels.len(), 76);

        let mut smaller = test_display();
        smaller.fill_round_rect(0, 0, 10, 10, 4, C).unwrap();
        assert_eq!(smaller.interface.pixels().len(), 80);
    }

    #[test]
    fn test_round_rect_rejects_large_radius() {
        let mut display = test_display();
        for r in [-1, 4, 100] {
            let err = display.draw_round_rect(0, 0, 10, 6, r, C).unwrap_err();
            assert!(matches!(err, Error::InvalidRadius { .. }));
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert!(display.fill_round_rect(0, 0, 10, 6, r, C).is_err());
        }
        assert!(display.interface.is_silent());
        assert!(display.draw_round_rect(0, 0, 10, 6, 3, C).is_ok());
    }

    #[test]
    fn test_triangle_outline_hits_vertices() {
        let mut display = test_display();
        display.draw_triangle(10, 10, 30, 15, 12, 40, C).unwrap();
        let pixels = drawn(&display);
        for vertex in [(10, 10), (30, 15), (12, 40)] {
            assert!(pixels.contains(&vertex));
        }
    }

    #[test]
    fn test_fill_triangle_right_angle() {
        let mut display = test_display();
        display.fill_triangle(0, 0, 4, 0, 0, 4, C).unwrap();
        let pixels = drawn(&display);
        assert_eq!(pixels.len(), 15);
        assert!(pixels.iter().all(|&(x, y)| x + y <= 4));
    }

    #[test]
    fn test_fill_triangle_stays_in_bounding_box() {
        let mut display = test_display();
        display.fill_triangle(50, 20, 90, 60, 10, 80, C).unwrap();
        let pixels = drawn(&display);
        assert!(rows_are_contiguous(&pixels));
        assert!(
            pixels
                .iter()
                .all(|&(x, y)| (10..=90).contains(&x) && (20..=80).contains(&y))
        );
        let rows: BTreeSet<i32> = pixels.iter().map(|p| p.1).collect();
        assert_eq!(rows.len(), 61);
    }

    #[test]
    fn test_fill_triangle_contains_outline_vertices() {
        let mut display = test_display();
        display.fill_triangle(5, 5, 60, 25, 20, 50, C).unwrap();
        let pixels = drawn(&display);
        for vertex in [(5, 5), (60, 25), (20, 50)] {
            assert!(pixels.contains(&vertex));
        }
    }

    #[test]
    fn test_degenerate_triangles() {
        let mut display = test_display();
        display.fill_triangle(3, 3, 3, 3, 3, 3, C).unwrap();
        assert_eq!(display.interface.pixels(), set(&[(3, 3)]));

        let mut display = test_display();
        display.fill_triangle(2, 5, 9, 5, 4, 5, C).unwrap();
        assert_eq!(display.interface.pixels().len(), 8);

        let mut display = test_display();
        display.fill_triangle(0, 0, 5, 5, 10, 10, C).unwrap();
        assert_eq!(display.interface.pixels().len(), 11);

        let mut display = test_display();
        display.draw_triangle(0, 0, 5, 5, 10, 10, C).unwrap();
        assert_eq!(display.interface.pixels().len(), 11);
    }

    #[test]
    fn test_triangle_rejects_any_vertex_outside() {
        let mut display = test_display();
        assert!(display.fill_triangle(0, 0, 10, 10, 240, 5, C).is_err());
        assert!(display.draw_triangle(-1, 0, 10, 10, 20, 5, C).is_err());
        assert!(display.fill_triangle(0, 0, 10, 320, 20, 5, C).is_err());
        assert!(display.interface.is_silent());
    }

    #[test]
    fn test_circle_radius_zero_is_one_pixel() {
        let mut display = test_display();
        display.fill_circle(50, 50, 0, C).unwrap();
        assert_eq!(display.interface.writes, [(50, 50, C)]);

        let mut display = test_display();
        display.draw_circle(50, 50, 0, C).unwrap();
        assert_eq!(display.interface.writes, [(50, 50, C)]);
    }

    #[test]
    fn test_circle_outline_shape() {
        let mut display = test_display();
        display.draw_circle(10, 10, 2, C).unwrap();
        assert_eq!(
            display.interface.pixels(),
            set(&[
                (8, 9),
                (8, 10),
                (8, 11),
                (9, 8),
                (9, 12),
                (10, 8),
                (10, 12),
                (11, 8),
                (11, 12),
                (12, 9),
                (12, 10),
                (12, 11)
            ])
        );
    }

    #[test]
    fn test_circle_symmetric_under_quarter_turn() {
        let mut display = test_display();
        display.draw_circle(50, 50, 5, C).unwrap();
        let pixels = drawn(&display);
        assert_eq!(pixels.len(), 28);
        let turned: BTreeSet<_> = pixels
            .iter()
            .map(|&(x, y)| (50 - (y - 50), 50 + (x - 50)))
            .collect();
        assert_eq!(pixels, turned);
    }

    #[test]
    fn test_fill_circle_contains_outline() {
        for r in [1, 2, 5, 9, 17] {
            let mut outline = test_display();
            outline.draw_circle(60, 60, r, C).unwrap();
            let mut fill = test_display();
            fill.fill_circle(60, 60, r, C).unwrap();

            let outline = drawn(&outline);
            let fill = drawn(&fill);
            assert!(outline.is_subset(&fill), "r={r}");
            assert!(rows_are_contiguous(&fill));
            assert!(
                fill.iter()
                    .all(|&(x, y)| (x - 60).abs() <= r && (y - 60).abs() <= r)
            );
        }
        let mut display = test_display();
        display.fill_circle(50, 50, 5, C).unwrap();
        assert_eq!(display.interface.pixels().len(), 97);
    }

    #[test]
    fn test_circle_validation() {
        let mut display = test_display();
        let err = display.draw_circle(50, 50, -1, C).unwrap_err();
        assert!(matches!(err, Error::InvalidRadius { radius: -1 }));

        for (cx, cy, r) in [(2, 50, 3), (50, 2, 3), (237, 50, 3), (50, 317, 3), (0, 0, i32::MAX)] {
            let err = display.fill_circle(cx, cy, r, C).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::OutOfBounds);
            assert!(display.draw_circle(cx, cy, r, C).is_err());
        }
        assert!(display.interface.is_silent());
        assert!(display.fill_circle(3, 3, 3, C).is_ok());
    }

    #[test]
    fn test_every_primitive_rejects_out_of_frame() {
        let mut display = small_display(20, 10);
        let (x, y) = (25, 5);
        assert!(display.draw_pixel(x, y, C).is_err());
        assert!(display.draw_line(0, 0, x, y, C).is_err());
        assert!(display.draw_rect(x, y, 2, 2, C).is_err());
        assert!(display.fill_rect(x, y, 2, 2, C).is_err());
        assert!(display.draw_round_rect(x, y, 4, 4, 1, C).is_err());
        assert!(display.fill_round_rect(x, y, 4, 4, 1, C).is_err());
        assert!(display.draw_triangle(0, 0, 1, 1, x, y, C).is_err());
        assert!(display.fill_triangle(0, 0, 1, 1, x, y, C).is_err());
        assert!(display.draw_circle(x, y, 1, C).is_err());
        assert!(display.fill_circle(x, y, 1, C).is_err());
        assert!(display.interface.is_silent());
    }

    #[test]
    fn test_shapes_follow_rotation() {
        let mut reference = test_display();
        reference.fill_triangle(10, 10, 40, 20, 15, 35, C).unwrap();
        let logical = reference.interface.pixels();

        let mut display = test_display_rotated(Rotation::Rotate270);
        display.fill_triangle(10, 10, 40, 20, 15, 35, C).unwrap();
        let panel = *display.dimensions();
        let expected: BTreeSet<_> = logical
            .iter()
            .map(|&(x, y)| to_physical(x, y, panel, Rotation::Rotate270))
            .collect();
        assert_eq!(display.interface.pixels(), expected);
    }
}
