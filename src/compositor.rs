// Symmetric compositing: mirror the quadrant classification into the full
// bounding box and blend it into the two pixel buffers (native 50x50 and
// 10x magnified).
//
// Colors are *added* per channel instead of set, so any unintended overlap
// between mirrored or adjacent cells shows up as an unexpectedly bright
// pixel instead of hiding silently.

use crate::quadrant::{ellipse_quadrant, rectangle_quadrant};
use crate::types::{O_SIZE, Point, PointClassification, S_SIZE, SCALE, ShapeKind, ShapeRequest};

/// Stroke cells are drawn in this color.
pub const STROKE_RGB: [u8; 3] = [0, 128, 255];
/// Fill cells are drawn in this color.
pub const FILL_RGB: [u8; 3] = [255, 127, 0];

/// A square grid of RGBA pixels, row-major, 4 bytes per pixel.
/// Cleared and fully rewritten on every draw pass; nothing persists between
/// shape changes.
pub struct RasterBuffer {
    size: usize,
    pub pixels: Vec<u8>,
}

impl RasterBuffer {
    /// Buffer at native grid resolution (one pixel per cell).
    pub fn native() -> Self {
        Self::with_size(O_SIZE as usize)
    }

    /// Buffer at magnified resolution (SCALE x SCALE pixels per cell).
    pub fn magnified() -> Self {
        Self::with_size(S_SIZE as usize)
    }

    fn with_size(size: usize) -> Self {
        Self { size, pixels: vec![0u8; size * size * 4] }
    }

    /// Side length in pixels.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Reset every pixel to transparent black.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// RGBA of one pixel. Callers pass in-bounds coordinates.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let idx = (y * self.size + x) * 4;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Add a color into one pixel. Channels saturate at 255 so overlaps get
    /// brighter, never wrap back to dark; alpha is forced to fully opaque.
    #[inline]
    fn blend_add(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let idx = (y * self.size + x) * 4;
        self.pixels[idx] = self.pixels[idx].saturating_add(rgb[0]);
        self.pixels[idx + 1] = self.pixels[idx + 1].saturating_add(rgb[1]);
        self.pixels[idx + 2] = self.pixels[idx + 2].saturating_add(rgb[2]);
        self.pixels[idx + 3] = 255;
    }
}

/// Color one native cell in both buffers: the cell itself in the native
/// buffer and the matching SCALE x SCALE block in the magnified one.
/// Coordinates outside the native grid are silently skipped; a shape hanging
/// off the grid just loses those cells.
fn color(native: &mut RasterBuffer, magnified: &mut RasterBuffer, x: i32, y: i32, rgb: [u8; 3]) {
    if x < 0 || x >= O_SIZE || y < 0 || y >= O_SIZE {
        return;
    }

    native.blend_add(x as usize, y as usize, rgb);

    let xs = x * SCALE;
    let ys = y * SCALE;
    for yi in ys..ys + SCALE {
        for xi in xs..xs + SCALE {
            magnified.blend_add(xi as usize, yi as usize, rgb);
        }
    }
}

/// Color a quadrant-local cell and its mirror images in the other quadrants.
/// p:          cell in top-left-quadrant coordinates
/// x, y, w, h: the shape's bounding box in the native grid
///
/// The mirrors are only written when they land on a distinct cell; on the
/// shared center line of an odd-sized box the cell would otherwise be
/// colored twice (and glow, thanks to the additive blend).
fn color_symmetric(
    native: &mut RasterBuffer,
    magnified: &mut RasterBuffer,
    rgb: [u8; 3],
    p: Point,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
) {
    let xi = w - p.x - 1 + x;
    let yi = h - p.y - 1 + y;
    let xo = p.x + x;
    let yo = p.y + y;

    color(native, magnified, xo, yo, rgb);

    if xi != xo {
        color(native, magnified, xi, yo, rgb);
        if yi != yo {
            color(native, magnified, xo, yi, rgb);
            color(native, magnified, xi, yi, rgb);
        }
    } else if yi != yo {
        color(native, magnified, xo, yi, rgb);
    }
}

/// One complete compositing pass: clear both buffers, then expand the
/// quadrant classification over the full bounding box.
pub fn composite(
    pc: &PointClassification,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    native: &mut RasterBuffer,
    magnified: &mut RasterBuffer,
) {
    native.clear();
    magnified.clear();

    for s in &pc.stroke {
        color_symmetric(native, magnified, STROKE_RGB, *s, x, y, w, h);
    }
    for f in &pc.fill {
        color_symmetric(native, magnified, FILL_RGB, *f, x, y, w, h);
    }
}

/// Draw one shape request into both buffers: pick the sampler for the shape
/// kind, then composite. A circle is an ellipse whose height is its width.
pub fn draw_shape(req: &ShapeRequest, native: &mut RasterBuffer, magnified: &mut RasterBuffer) {
    match req.kind {
        ShapeKind::Rectangle => {
            let pc = rectangle_quadrant(
                req.x,
                req.y,
                req.width,
                req.height,
                req.corner_radius,
                req.thickness,
            );
            composite(&pc, req.x, req.y, req.width, req.height, native, magnified);
        }
        ShapeKind::Ellipse => {
            let pc = ellipse_quadrant(req.x, req.y, req.width, req.height, req.thickness);
            composite(&pc, req.x, req.y, req.width, req.height, native, magnified);
        }
        ShapeKind::Circle => {
            let pc = ellipse_quadrant(req.x, req.y, req.width, req.width, req.thickness);
            composite(&pc, req.x, req.y, req.width, req.width, native, magnified);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffers() -> (RasterBuffer, RasterBuffer) {
        (RasterBuffer::native(), RasterBuffer::magnified())
    }

    const STROKE_PX: [u8; 4] = [0, 128, 255, 255];
    const FILL_PX: [u8; 4] = [255, 127, 0, 255];

    #[test]
    fn circle_round_trip_draws_a_symmetric_annulus() {
        let (mut native, mut magnified) = buffers();
        let req = ShapeRequest::new(ShapeKind::Circle, 10, 10, 20, 0, 0, 3);
        draw_shape(&req, &mut native, &mut magnified);

        // Box spans cells 10..=29; geometric center is (19.5, 19.5).
        let dist = |px: usize, py: usize| {
            let dx = px as f64 - 19.5;
            let dy = py as f64 - 19.5;
            (dx * dx + dy * dy).sqrt()
        };

        for py in 0..50 {
            for px in 0..50 {
                let p = native.pixel(px, py);
                if p[3] == 255 {
                    // Nothing opaque outside the outer support plus repairs.
                    assert!(dist(px, py) < 10.7, "opaque pixel off the circle at ({px},{py})");
                    // Stroke pixels sit on the annulus, fill inside it.
                    if p == STROKE_PX {
                        assert!(dist(px, py) >= 7.5, "stroke inside the interior at ({px},{py})");
                    } else {
                        assert_eq!(p, FILL_PX);
                        assert!(dist(px, py) < 7.5, "fill outside the interior at ({px},{py})");
                    }
                } else {
                    // The deep interior is always filled.
                    assert!(dist(px, py) > 7.0, "hole in the interior at ({px},{py})");
                }
            }
        }

        // Spot checks: a stroke cell on the mid row, fill at the center,
        // nothing at the box corner.
        assert_eq!(native.pixel(11, 19), STROKE_PX);
        assert_eq!(native.pixel(19, 19), FILL_PX);
        assert_eq!(native.pixel(10, 10)[3], 0);

        // Symmetric under reflection about both box axes.
        for py in 10..30 {
            for px in 10..30 {
                assert_eq!(native.pixel(px, py), native.pixel(39 - px, py));
                assert_eq!(native.pixel(px, py), native.pixel(px, 39 - py));
            }
        }
    }

    #[test]
    fn magnified_blocks_mirror_native_cells() {
        let (mut native, mut magnified) = buffers();
        let req = ShapeRequest::new(ShapeKind::Circle, 10, 10, 20, 0, 0, 3);
        draw_shape(&req, &mut native, &mut magnified);

        for &(cx, cy) in &[(11usize, 19usize), (19, 19), (10, 10)] {
            let expect = native.pixel(cx, cy);
            for py in cy * 10..cy * 10 + 10 {
                for px in cx * 10..cx * 10 + 10 {
                    assert_eq!(magnified.pixel(px, py), expect);
                }
            }
        }
    }

    #[test]
    fn coinciding_mirrors_write_only_once() {
        // A 1x1 box mirrors onto itself; the dedup must keep the additive
        // blend from doubling the color (128+128 in green would saturate).
        let (mut native, mut magnified) = buffers();
        let req = ShapeRequest::new(ShapeKind::Ellipse, 5, 5, 1, 1, 0, 1);
        draw_shape(&req, &mut native, &mut magnified);

        assert_eq!(native.pixel(5, 5), STROKE_PX);
        let opaque = (0..50)
            .flat_map(|y| (0..50).map(move |x| (x, y)))
            .filter(|&(x, y)| native.pixel(x, y)[3] == 255)
            .count();
        assert_eq!(opaque, 1);
    }

    #[test]
    fn rectangle_is_symmetric_about_its_center() {
        let (mut native, mut magnified) = buffers();
        let req = ShapeRequest::new(ShapeKind::Rectangle, 5, 7, 20, 14, 4, 2);
        draw_shape(&req, &mut native, &mut magnified);

        for py in 7..21 {
            for px in 5..25 {
                assert_eq!(native.pixel(px, py), native.pixel(29 - px, py));
                assert_eq!(native.pixel(px, py), native.pixel(px, 27 - py));
            }
        }
    }

    #[test]
    fn off_grid_cells_are_clipped_silently() {
        // Box hangs off the bottom-right of the grid; mirrored cells that
        // land outside are skipped without wrapping anywhere.
        let (mut native, mut magnified) = buffers();
        let req = ShapeRequest::new(ShapeKind::Ellipse, 45, 45, 20, 20, 0, 2);
        draw_shape(&req, &mut native, &mut magnified);

        for py in 0..50 {
            for px in 0..50 {
                if native.pixel(px, py)[3] == 255 {
                    assert!(px >= 45 && py >= 45, "clipped cell leaked to ({px},{py})");
                }
            }
        }
    }

    #[test]
    fn buffers_are_cleared_between_passes() {
        let (mut native, mut magnified) = buffers();
        let big = ShapeRequest::new(ShapeKind::Rectangle, 0, 0, 40, 40, 0, 2);
        draw_shape(&big, &mut native, &mut magnified);
        assert_eq!(native.pixel(0, 1)[3], 255);

        let small = ShapeRequest::new(ShapeKind::Rectangle, 20, 20, 4, 4, 0, 1);
        draw_shape(&small, &mut native, &mut magnified);
        assert_eq!(native.pixel(0, 1)[3], 0, "stale pixels from the previous pass");
        assert_eq!(magnified.pixel(5, 15)[3], 0);
    }

    #[test]
    fn sharp_rectangle_corners_stay_open() {
        // The shared corner cell is dropped at radius 0, so all four box
        // corners stay unlit.
        let (mut native, mut magnified) = buffers();
        let req = ShapeRequest::new(ShapeKind::Rectangle, 10, 10, 20, 20, 0, 2);
        draw_shape(&req, &mut native, &mut magnified);

        for &(px, py) in &[(10, 10), (29, 10), (10, 29), (29, 29)] {
            assert_eq!(native.pixel(px, py)[3], 0, "corner ({px},{py}) should stay open");
        }
        assert_eq!(native.pixel(11, 10), STROKE_PX);
        assert_eq!(native.pixel(10, 11), STROKE_PX);
    }
}
