use crate::coords::Vec2;
use crate::scene::shapes::circle::CircleCmd;

/// Offset of `p` from the nearest of an axis' three reference lines, with the
/// sign `s` such that `p - center = a + s * radius` on that axis.
#[inline]
fn axis_offset(p: f64, min: f64, mid: f64, max: f64) -> (f64, f64) {
    let (to_min, to_mid, to_max) = (p - min, p - mid, p - max);
    if to_mid.abs() <= to_min.abs() && to_mid.abs() <= to_max.abs() {
        (0.0, to_mid)
    } else if to_min.abs() <= to_max.abs() {
        (-1.0, to_min)
    } else {
        (1.0, to_max)
    }
}

/// Distance from `p` to the circle's rim.
///
/// Offsets are taken from whichever bounds edge or center line is nearest, and
/// `|q|² - r²` is expanded so its `r²` terms cancel symbolically. A pixel near
/// the rim of a disc far larger than the surface keeps sub-pixel precision.
pub fn signed_distance(cmd: &CircleCmd, p: Vec2) -> f64 {
    let r = cmd.radius;
    if r < 1.0 {
        return (p - cmd.center).length() - r;
    }

    let (sx, ax) = axis_offset(p.x, cmd.bounds.min.x, cmd.center.x, cmd.bounds.max.x);
    let (sy, ay) = axis_offset(p.y, cmd.bounds.min.y, cmd.center.y, cmd.bounds.max.y);

    // (|q|² - r²) / r and |q| / r, both finite for any finite radius.
    let k = sx * sx + sy * sy - 1.0;
    let num = k * r + 2.0 * (sx * ax + sy * ay) + (ax * ax + ay * ay) / r;
    let q_len = Vec2::new(sx + ax / r, sy + ay / r).length();
    num / (q_len + 1.0)
}

/// A circle is drawable when its geometry is finite and its radius is positive.
#[inline]
pub fn is_drawable(cmd: &CircleCmd) -> bool {
    cmd.center.is_finite() && cmd.bounds.is_finite() && cmd.radius.is_finite() && cmd.radius > 0.0
}
