use crate::math::{Point, Real};
use crate::shape::{Line, Plane};

/// Intersection line between two planes.
///
/// With `n0`, `n1` the unit normals, `dir = n0 × n1` and `det = ‖dir‖²`,
/// returns `None` if `det ≤ eps` (parallel planes). The line origin is the
/// point of the intersection closest to the world origin.
pub fn intersection_plane_plane(p0: &Plane, p1: &Plane, eps: Real) -> Option<Line> {
    let n0 = p0.normalized_normal();
    let n1 = p1.normalized_normal();
    let dir = n0.cross(&n1);
    let det = dir.norm_squared();

    if !(det > eps) {
        return None;
    }

    let d0 = p0.offset();
    let d1 = p1.offset();
    let origin = (dir.cross(&n1) * d0 + n0.cross(&dir) * d1) / det;

    Some(Line::new(origin.into(), dir))
}

/// Intersection point of three planes.
///
/// Returns `None` if `|n0 · (n1 × n2)| ≤ eps`, i.e., if the planes do not meet
/// at a single point.
pub fn intersection_plane_plane_plane(
    p0: &Plane,
    p1: &Plane,
    p2: &Plane,
    eps: Real,
) -> Option<Point<Real>> {
    let n0 = p0.normalized_normal();
    let n1 = p1.normalized_normal();
    let n2 = p2.normalized_normal();
    let det = n0.dot(&n1.cross(&n2));

    if !(det.abs() > eps) {
        return None;
    }

    let pt = (n1.cross(&n2) * -p0.offset()
        + n2.cross(&n0) * -p1.offset()
        + n0.cross(&n1) * -p2.offset())
        / det;

    Some(pt.into())
}
