use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled disc payload.
///
/// `bounds` is the square the disc is inscribed in. It is carried alongside
/// `center` so callers that know one edge exactly (an anchored layer whose far
/// edge lies beyond `f64` resolution of the surface) can hand it over unrounded.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f64,
    pub bounds: Rect,
    pub color: Color,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f64, color: Color) -> Self {
        let bounds = Rect::from_min_max(center - Vec2::splat(radius), center + Vec2::splat(radius));
        Self { center, radius, bounds, color }
    }

    /// Disc of `radius` inscribed in `bounds`, centered on `center`.
    #[inline]
    pub fn inscribed(bounds: Rect, center: Vec2, radius: f64, color: Color) -> Self {
        Self { center, radius, bounds, color }
    }
}

impl DrawList {
    /// Records a filled circle.
    #[inline]
    pub fn push_circle(&mut self, z: ZIndex, center: Vec2, radius: f64, color: Color) {
        self.push(z, DrawCmd::Circle(CircleCmd::new(center, radius, color)));
    }
}
