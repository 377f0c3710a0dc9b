use crate::math::{Point, Real, Vector};
use crate::shape::{Line, Ray, Segment, Triangle};

/// Möller–Trumbore: the parameter `t` at which `origin + t * dir` crosses `triangle`.
///
/// Returns `None` if the line is parallel to the triangle plane (`|det| < eps`)
/// or misses the triangle.
fn moller_trumbore(
    origin: &Point<Real>,
    dir: &Vector<Real>,
    triangle: &Triangle,
    eps: Real,
) -> Option<Real> {
    let e1 = triangle.b - triangle.a;
    let e2 = triangle.c - triangle.a;
    let h = dir.cross(&e2);
    let det = e1.dot(&h);

    if !(det.abs() >= eps) {
        return None;
    }

    let f = 1.0 / det;
    let s = origin - triangle.a;
    let u = f * s.dot(&h);

    if !(u >= 0.0 && u <= 1.0) {
        return None;
    }

    let q = s.cross(&e1);
    let v = f * dir.dot(&q);

    if !(v >= 0.0 && u + v <= 1.0) {
        return None;
    }

    Some(f * e2.dot(&q))
}

/// Intersection point between a line and a triangle it is not coplanar with.
pub fn intersection_line_triangle(
    line: &Line,
    triangle: &Triangle,
    eps: Real,
) -> Option<Point<Real>> {
    moller_trumbore(&line.origin, &line.dir, triangle, eps).map(|t| line.point_at(t))
}

/// Intersection point between a ray and a triangle it is not coplanar with.
pub fn intersection_ray_triangle(ray: &Ray, triangle: &Triangle, eps: Real) -> Option<Point<Real>> {
    let t = moller_trumbore(&ray.origin, &ray.dir, triangle, eps)?;
    (t >= 0.0).then(|| ray.point_at(t))
}

/// Intersection point between a segment and a triangle it is not coplanar with.
pub fn intersection_segment_triangle(
    segment: &Segment,
    triangle: &Triangle,
    eps: Real,
) -> Option<Point<Real>> {
    let t = moller_trumbore(&segment.a, &segment.scaled_direction(), triangle, eps)?;
    (t >= 0.0 && t <= 1.0).then(|| segment.point_at(t))
}
