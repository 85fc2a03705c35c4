//! Minimal raster primitives for procedural icons
//!
//! Shapes are described by inclusive pixel bounds. A pixel is covered when its
//! centre lies inside the shape. Every fill is composited with straight-alpha
//! source-over, so translucent fills tint what is underneath instead of
//! replacing it.

use image::{Pixel, Rgba, RgbaImage};

/// Inclusive pixel bounds of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Bounds { left, top, right, bottom }
    }

    /// Square bounds around a centre point
    pub fn around(cx: i32, cy: i32, radius: i32) -> Self {
        Bounds::new(cx - radius, cy - radius, cx + radius, cy + radius)
    }

    /// Grow by `by` pixels on every side
    pub fn expand(&self, by: i32) -> Self {
        Bounds::new(self.left - by, self.top - by, self.right + by, self.bottom + by)
    }

    /// Covered extent in pixels along x (bounds are inclusive)
    pub fn span_x(&self) -> i32 {
        self.right - self.left + 1
    }

    pub fn span_y(&self) -> i32 {
        self.bottom - self.top + 1
    }

    pub fn is_empty(&self) -> bool {
        self.span_x() <= 0 || self.span_y() <= 0
    }

    /// Midpoint in pixel-index space
    pub fn mid(&self) -> (f64, f64) {
        (
            (self.left + self.right) as f64 / 2.0,
            (self.top + self.bottom) as f64 / 2.0,
        )
    }
}

/// Visit every canvas pixel inside `bounds` whose centre passes `covers`
fn fill_where<F>(img: &mut RgbaImage, bounds: Bounds, color: Rgba<u8>, covers: F)
where
    F: Fn(f64, f64) -> bool,
{
    if bounds.is_empty() {
        return;
    }

    let x_start = bounds.left.max(0);
    let y_start = bounds.top.max(0);
    let x_end = bounds.right.min(img.width() as i32 - 1);
    let y_end = bounds.bottom.min(img.height() as i32 - 1);

    for y in y_start..=y_end {
        for x in x_start..=x_end {
            if covers(x as f64 + 0.5, y as f64 + 0.5) {
                img.get_pixel_mut(x as u32, y as u32).blend(&color);
            }
        }
    }
}

/// Fill a rounded rectangle; the radius is clamped to half the shorter side
///
/// Any radius of at least one pixel always drops the four extreme corner
/// pixels, even when the arc would still reach their centres.
pub fn fill_rounded_rect(img: &mut RgbaImage, bounds: Bounds, radius: i32, color: Rgba<u8>) {
    let x0 = bounds.left as f64;
    let y0 = bounds.top as f64;
    let x1 = (bounds.right + 1) as f64;
    let y1 = (bounds.bottom + 1) as f64;
    let max_radius = (bounds.span_x().min(bounds.span_y()) as f64 / 2.0).max(0.0);
    let r = (radius as f64).clamp(0.0, max_radius);

    fill_where(img, bounds, color, |px, py| {
        let edge_x = px < x0 + 1.0 || px > x1 - 1.0;
        let edge_y = py < y0 + 1.0 || py > y1 - 1.0;
        if r >= 1.0 && edge_x && edge_y {
            return false;
        }

        // Nearest point on the inner rectangle the corner arcs are centred on
        let cx = px.clamp(x0 + r, x1 - r);
        let cy = py.clamp(y0 + r, y1 - r);
        let dx = px - cx;
        let dy = py - cy;
        dx * dx + dy * dy <= r * r
    });
}

/// Fill the ellipse inscribed in `bounds`
pub fn fill_ellipse(img: &mut RgbaImage, bounds: Bounds, color: Rgba<u8>) {
    let a = bounds.span_x() as f64 / 2.0;
    let b = bounds.span_y() as f64 / 2.0;
    let cx = bounds.left as f64 + a;
    let cy = bounds.top as f64 + b;

    fill_where(img, bounds, color, |px, py| {
        let nx = (px - cx) / a;
        let ny = (py - cy) / b;
        nx * nx + ny * ny <= 1.0
    });
}
