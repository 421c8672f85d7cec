//! Shared coverage helpers used by all shape rasterizers.

use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::render::Surface;

/// Fill fraction for a pixel whose center lies `d` from the outline.
///
/// A pixel whose center is half a pixel or more inside is fully covered, so
/// edges on integer coordinates produce no partial pixels.
#[inline]
pub(crate) fn coverage(d: f64) -> f32 {
    (0.5 - d).clamp(0.0, 1.0) as f32
}

/// Integer pixel span `[x0, x1) × [y0, y1)` touched by `bounds`, clipped to the surface.
///
/// Returns `None` when nothing of `bounds` lands on the surface.
pub(crate) fn pixel_span(surface: &Surface, bounds: Rect) -> Option<(u32, u32, u32, u32)> {
    // One pixel of padding keeps anti-aliased edge pixels inside the scan.
    let clipped = surface.bounds().intersect(bounds.inflate(1.0))?;
    let (lo, hi) = (clipped.min, clipped.max);

    let x0 = lo.x.floor().max(0.0) as u32;
    let y0 = lo.y.floor().max(0.0) as u32;
    let x1 = (hi.x.ceil() as u32).min(surface.width());
    let y1 = (hi.y.ceil() as u32).min(surface.height());

    (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
}

/// Scans `bounds` and blends `color` wherever `sdf` reports coverage.
///
/// Returns the number of pixels written.
pub(crate) fn fill_sdf(
    surface: &mut Surface,
    bounds: Rect,
    color: Color,
    sdf: impl Fn(Vec2) -> f64,
) -> u64 {
    let Some((x0, y0, x1, y1)) = pixel_span(surface, bounds) else { return 0 };

    let mut written = 0;
    for y in y0..y1 {
        let py = f64::from(y) + 0.5;
        for x in x0..x1 {
            let cov = coverage(sdf(Vec2::new(f64::from(x) + 0.5, py)));
            if cov > 0.0 {
                surface.blend(x, y, color, cov);
                written += 1;
            }
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_thresholds() {
        assert_eq!(coverage(-0.5), 1.0);
        assert_eq!(coverage(-3.0), 1.0);
        assert_eq!(coverage(0.0), 0.5);
        assert_eq!(coverage(0.5), 0.0);
        assert_eq!(coverage(7.0), 0.0);
    }

    #[test]
    fn span_is_clipped_to_surface() {
        let s = Surface::new(10, 10).unwrap();
        assert_eq!(pixel_span(&s, Rect::new(-5.0, -5.0, 8.0, 8.0)), Some((0, 0, 4, 4)));
        assert_eq!(pixel_span(&s, Rect::new(8.0, 8.0, 50.0, 50.0)), Some((7, 7, 10, 10)));
    }

    #[test]
    fn span_of_huge_bounds_is_the_surface() {
        let s = Surface::new(10, 10).unwrap();
        let huge = Rect::from_min_max(Vec2::splat(-f64::MAX), Vec2::splat(10.0));
        assert_eq!(pixel_span(&s, huge), Some((0, 0, 10, 10)));
    }

    #[test]
    fn span_off_surface_is_none() {
        let s = Surface::new(10, 10).unwrap();
        assert_eq!(pixel_span(&s, Rect::new(20.0, 0.0, 5.0, 5.0)), None);
        assert_eq!(pixel_span(&s, Rect::new(-30.0, 0.0, 5.0, 5.0)), None);
    }
}
