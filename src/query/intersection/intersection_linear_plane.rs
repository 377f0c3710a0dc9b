use crate::math::{Point, Real};
use crate::shape::{Line, Plane, Ray, Segment};

/// The parameter `t` at which the line `origin + t * dir` crosses `plane`.
///
/// Returns `None` if the line is parallel to the plane, i.e., if `|dir · n̂| ≤ eps`.
fn line_plane_param(line: &Line, plane: &Plane, eps: Real) -> Option<Real> {
    let n = plane.normalized_normal();
    let det = line.dir.dot(&n);

    if !(det.abs() > eps) {
        return None;
    }

    Some(-(line.origin - plane.origin).dot(&n) / det)
}

/// Intersection point between a line and a plane.
///
/// Returns `None` if the line is parallel to the plane. The line may cross the
/// plane from either side.
pub fn intersection_line_plane(line: &Line, plane: &Plane, eps: Real) -> Option<Point<Real>> {
    line_plane_param(line, plane, eps).map(|t| line.point_at(t))
}

/// Intersection point between a ray and a plane.
///
/// The hit must lie strictly ahead of the ray origin, i.e., at a parameter `t > eps`.
pub fn intersection_ray_plane(ray: &Ray, plane: &Plane, eps: Real) -> Option<Point<Real>> {
    let t = line_plane_param(&Line::new(ray.origin, ray.dir), plane, eps)?;
    (t > eps).then(|| ray.point_at(t))
}

/// Intersection point between a segment and a plane.
///
/// An endpoint lying on the plane (within `eps`) is returned as is. Otherwise,
/// the endpoints must lie on opposite sides of the plane.
pub fn intersection_segment_plane(
    segment: &Segment,
    plane: &Plane,
    eps: Real,
) -> Option<Point<Real>> {
    let d0 = plane.signed_distance(&segment.a);
    let d1 = plane.signed_distance(&segment.b);

    if d0.abs() <= eps {
        return Some(segment.a);
    }

    if d1.abs() <= eps {
        return Some(segment.b);
    }

    if !(d0 * d1 < 0.0) {
        return None;
    }

    Some(segment.point_at(d0 / (d0 - d1)))
}
