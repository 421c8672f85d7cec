use crate::coords::Vec2;
use crate::scene::shapes::triangle::TriangleCmd;

/// Sine of the angle at the first vertex. Positive for clockwise winding in y-down space.
///
/// Edge vectors are normalized before the cross product, so the result stays
/// finite and scale-free for any finite vertices.
#[inline]
fn orientation(pts: &[Vec2; 3]) -> f64 {
    let ab = (pts[1] - pts[0]).normalized();
    let ac = (pts[2] - pts[0]).normalized();
    ab.cross(ac)
}

/// Maximum signed distance from `p` to the three edge lines.
///
/// Exact inside the triangle and along edges; slightly underestimates distance
/// beyond the vertices, which only affects pixels already outside coverage range.
pub fn signed_distance(cmd: &TriangleCmd, p: Vec2) -> f64 {
    let pts = &cmd.points;
    let winding = orientation(pts).signum();

    let mut d = f64::NEG_INFINITY;
    for i in 0..3 {
        let a = pts[i];
        let b = pts[(i + 1) % 3];
        let n = (b - a).normalized();
        // Both endpoints lie on the line; the nearer one loses least to rounding.
        let (wa, wb) = (p - a, p - b);
        let w = if wa.length() <= wb.length() { wa } else { wb };
        // Cross product sign flips to positive on the exterior side of each edge.
        d = d.max(-winding * n.cross(w));
    }
    d
}

/// Degenerate (collinear) or non-finite triangles are skipped.
#[inline]
pub fn is_drawable(cmd: &TriangleCmd) -> bool {
    let pts = &cmd.points;
    let finite = pts.iter().all(|p| p.is_finite())
        && (0..3).all(|i| (pts[(i + 1) % 3] - pts[i]).is_finite());
    finite && orientation(pts).abs() > 1e-12
}
