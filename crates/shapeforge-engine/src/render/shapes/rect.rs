use crate::coords::Vec2;
use crate::scene::shapes::rect::RectCmd;

/// Box distance measured against the rectangle's edges.
///
/// Working from the edges rather than a center and half extents keeps an exact
/// edge exact when the opposite one is far away.
#[inline]
pub fn signed_distance(cmd: &RectCmd, p: Vec2) -> f64 {
    let r = cmd.rect;
    let dx = (r.min.x - p.x).max(p.x - r.max.x);
    let dy = (r.min.y - p.y).max(p.y - r.max.y);

    let outside = Vec2::new(dx.max(0.0), dy.max(0.0)).length();
    let inside = dx.max(dy).min(0.0);
    outside + inside
}

#[inline]
pub fn is_drawable(cmd: &RectCmd) -> bool {
    cmd.rect.is_finite() && !cmd.rect.is_empty()
}
