//! Geometry primitives
//!
//! Everything here reduces to address windows and pixel bursts.
//! Horizontal/vertical lines and filled rectangles cost one burst no
//! matter their size; the stepped shapes (sloped lines, circle and
//! ellipse outlines) pay one window per pixel.
//!
//! All math is integer-only. Shapes must lie on screen; coordinates
//! are not clipped.

use tessera_core::color::Rgb565;
use tessera_core::math::isqrt;
use tessera_hal::{DelayMs, OutputPin, SpiBus};

use crate::display::St7735;

impl<SPI, DC, RST, D> St7735<SPI, DC, RST, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    D: DelayMs,
{
    /// Set a single pixel.
    pub fn draw_pixel(&mut self, x: u8, y: u8, color: Rgb565) {
        self.set_address_window(x, y, x, y);
        self.write_pixels(color, 1);
    }

    /// Horizontal line from `x0` to `x1` inclusive, either order.
    pub fn draw_hline(&mut self, x0: u8, x1: u8, y: u8, color: Rgb565) {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        self.set_address_window(x0, y, x1, y);
        self.write_pixels(color, u32::from(x1 - x0) + 1);
    }

    /// Vertical line from `y0` to `y1` inclusive, either order.
    pub fn draw_vline(&mut self, x: u8, y0: u8, y1: u8, color: Rgb565) {
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        self.set_address_window(x, y0, x, y1);
        self.write_pixels(color, u32::from(y1 - y0) + 1);
    }

    /// Line between two points, Bresenham's algorithm.
    ///
    /// Visits `max(|dx|, |dy|) + 1` pixels, endpoints included, each
    /// step moving at most one pixel per axis.
    pub fn draw_line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, color: Rgb565) {
        let (mut x0, mut y0) = (i16::from(x0), i16::from(y0));
        let (x1, y1) = (i16::from(x1), i16::from(y1));

        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = (y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = if dx > dy { dx } else { -dy } / 2;

        loop {
            self.draw_pixel(x0 as u8, y0 as u8, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = err;
            if e2 > -dx {
                err -= dy;
                x0 += sx;
            }
            if e2 < dy {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Rectangle outline with corners (x0, y0) and (x1, y1), either
    /// order per axis.
    pub fn draw_rect(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, color: Rgb565) {
        self.draw_hline(x0, x1, y0, color);
        self.draw_hline(x0, x1, y1, color);
        self.draw_vline(x0, y0, y1, color);
        self.draw_vline(x1, y0, y1, color);
    }

    /// Filled rectangle with corners (x0, y0) and (x1, y1), either
    /// order per axis. One burst.
    pub fn fill_rect(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, color: Rgb565) {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        let width = u32::from(x1 - x0) + 1;
        let height = u32::from(y1 - y0) + 1;
        self.set_address_window(x0, y0, x1, y1);
        self.write_pixels(color, width * height);
    }

    /// Circle outline around (cx, cy).
    pub fn draw_circle(&mut self, cx: u8, cy: u8, r: u8, color: Rgb565) {
        self.draw_circle_quadrant(cx, cy, r, 0x0F, color);
    }

    /// One or more quarter-circle arcs around (cx, cy).
    ///
    /// `quads` is a bitmask; y grows downward, so "lower" means +y:
    /// bit 0 lower right, bit 1 upper right, bit 2 lower left, bit 3
    /// upper left. Each arc is traced from both ends to the diagonal,
    /// so every selected quadrant is fully covered.
    pub fn draw_circle_quadrant(&mut self, cx: u8, cy: u8, r: u8, quads: u8, color: Rgb565) {
        let r2 = u32::from(r) * u32::from(r);
        // 707/1000 approximates 1/sqrt(2): stop just past the diagonal.
        let x_end = (707 * u32::from(r)) / 1000 + 1;
        for x in 0..x_end {
            let y = isqrt(r2 - x * x) as u8;
            let x = x as u8;
            if quads & 0x01 != 0 {
                self.draw_pixel(cx + x, cy + y, color);
                self.draw_pixel(cx + y, cy + x, color);
            }
            if quads & 0x02 != 0 {
                self.draw_pixel(cx + x, cy - y, color);
                self.draw_pixel(cx + y, cy - x, color);
            }
            if quads & 0x04 != 0 {
                self.draw_pixel(cx - x, cy + y, color);
                self.draw_pixel(cx - y, cy + x, color);
            }
            if quads & 0x08 != 0 {
                self.draw_pixel(cx - x, cy - y, color);
                self.draw_pixel(cx - y, cy - x, color);
            }
        }
    }

    /// Rectangle outline with circular corners.
    ///
    /// `r` must fit within half the rectangle's extent on both axes.
    pub fn draw_round_rect(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, r: u8, color: Rgb565) {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };

        self.draw_hline(x0 + r, x1 - r, y0, color);
        self.draw_hline(x0 + r, x1 - r, y1, color);
        self.draw_vline(x0, y0 + r, y1 - r, color);
        self.draw_vline(x1, y0 + r, y1 - r, color);

        self.draw_circle_quadrant(x0 + r, y0 + r, r, 0x08, color);
        self.draw_circle_quadrant(x1 - r, y0 + r, r, 0x02, color);
        self.draw_circle_quadrant(x0 + r, y1 - r, r, 0x04, color);
        self.draw_circle_quadrant(x1 - r, y1 - r, r, 0x01, color);
    }

    /// Filled circle around (cx, cy), drawn as vertical slices.
    pub fn fill_circle(&mut self, cx: u8, cy: u8, r: u8, color: Rgb565) {
        let r2 = u32::from(r) * u32::from(r);
        for x in 0..=u32::from(r) {
            let y = isqrt(r2 - x * x) as u8;
            let x = x as u8;
            self.draw_vline(cx + x, cy - y, cy + y, color);
            self.draw_vline(cx - x, cy - y, cy + y, color);
        }
    }

    /// Ellipse outline around (cx, cy), `width` pixels wide and
    /// `height` tall. Extents must be at least 2.
    ///
    /// Drawn in two regions split at the 45-degree tangent, stepping
    /// the fast axis in each. The hand-off between the regions can
    /// leave a visible seam on very eccentric ellipses.
    pub fn draw_ellipse(&mut self, cx: u8, cy: u8, width: u8, height: u8, color: Rgb565) {
        debug_assert!(width >= 2 && height >= 2);
        let cx = i32::from(cx);
        let cy = i32::from(cy);
        let a = i32::from(width) / 2;
        let b = i32::from(height) / 2;
        let a2 = 2 * a * a;
        let b2 = 2 * b * b;

        // Region 1: shallow slope, step x until the tangent passes
        // 45 degrees.
        let mut x = 0;
        let mut y = b;
        let mut error = a * a * b;
        let mut stop_y = 0;
        let mut stop_x = a2 * b;
        while stop_y <= stop_x {
            self.plot_mirrored(cx, cy, x, y, color);
            x += 1;
            error -= b2 * (x - 1);
            stop_y += b2;
            if error < 0 {
                error += a2 * (y - 1);
                y -= 1;
                stop_x -= a2;
            }
        }

        // Region 2: steep slope, step y in from the ends of the major
        // axis until the two regions meet.
        let mut x = a;
        let mut y = 0;
        let mut error = b * b * a;
        let mut stop_y = a * b2;
        let mut stop_x = 0;
        while stop_y >= stop_x {
            self.plot_mirrored(cx, cy, x, y, color);
            y += 1;
            error -= a2 * (y - 1);
            stop_x += a2;
            if error < 0 {
                error += b2 * (x - 1);
                x -= 1;
                stop_y -= b2;
            }
        }
    }

    /// Filled ellipse around (cx, cy), `width` pixels wide and
    /// `height` tall. Extents must be at least 2.
    pub fn fill_ellipse(&mut self, cx: u8, cy: u8, width: u8, height: u8, color: Rgb565) {
        debug_assert!(width >= 2 && height >= 2);
        let a = i32::from(width) / 2;
        let b = i32::from(height) / 2;
        let a2 = a * a;
        let b2 = b * b;
        let a2b2 = a2 * b2;

        self.draw_hline(
            (i32::from(cx) - a) as u8,
            (i32::from(cx) + a) as u8,
            cy,
            color,
        );

        // Rows outward from the centerline. Each row's extent starts
        // from the previous row's, since the boundary only moves
        // inward as |y| grows.
        let mut x0 = a;
        let mut dx = 0;
        for y in 1..=b {
            let mut x1 = x0 - (dx - 1);
            while x1 > 0 {
                if b2 * x1 * x1 + a2 * y * y <= a2b2 {
                    break;
                }
                x1 -= 1;
            }
            dx = x0 - x1;
            x0 = x1;

            let left = (i32::from(cx) - x0) as u8;
            let right = (i32::from(cx) + x0) as u8;
            self.draw_hline(left, right, (i32::from(cy) + y) as u8, color);
            self.draw_hline(left, right, (i32::from(cy) - y) as u8, color);
        }
    }

    /// Plot a point and its three mirror images around (cx, cy).
    fn plot_mirrored(&mut self, cx: i32, cy: i32, x: i32, y: i32, color: Rgb565) {
        self.draw_pixel((cx + x) as u8, (cy + y) as u8, color);
        self.draw_pixel((cx - x) as u8, (cy + y) as u8, color);
        self.draw_pixel((cx - x) as u8, (cy - y) as u8, color);
        self.draw_pixel((cx + x) as u8, (cy - y) as u8, color);
    }
}
