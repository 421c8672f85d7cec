use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Stored as its two corner edges, so an edge that is exact when the rect is
/// built stays exact however far the opposite edge lies.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    #[inline]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + w, y + h),
        }
    }

    #[inline]
    pub const fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::from_min_max(origin, origin + size)
    }

    /// Square with top-left corner at `origin` and the given side length.
    #[inline]
    pub fn square(origin: Vec2, side: f64) -> Self {
        Self::from_origin_size(origin, Vec2::splat(side))
    }

    /// Smallest rectangle containing every point in `points`.
    ///
    /// Returns an empty rect at the origin for an empty slice.
    pub fn bounding(points: &[Vec2]) -> Self {
        let Some((&first, rest)) = points.split_first() else {
            return Rect::default();
        };
        let (lo, hi) = rest.iter().fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p)));
        Rect::from_min_max(lo, hi)
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Grows the rectangle by `pad` on every side.
    #[inline]
    pub fn inflate(self, pad: f64) -> Self {
        Rect::from_min_max(self.min - Vec2::splat(pad), self.max + Vec2::splat(pad))
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.min.x && p.y >= self.min.y && p.x < self.max.x && p.y < self.max.y
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let clipped = Rect::from_min_max(self.min.max(other.min), self.max.min(other.max));
        (!clipped.is_empty()).then_some(clipped)
    }
}
