//! Intersections involving a point: the point itself if the other entity contains it.

use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real};
use crate::shape::{Circle, Line, Plane, Ray, Segment, Sphere, Triangle};

#[inline]
fn keep_if(pt: &Point<Real>, inside: bool) -> Option<Point<Real>> {
    inside.then_some(*pt)
}

/// Intersection between two points: `p` if both are within `eps` of each other.
pub fn intersection_point_point(p: &Point<Real>, q: &Point<Real>, eps: Real) -> Option<Point<Real>> {
    keep_if(p, na::distance(p, q) <= eps)
}

/// Intersection between a point and a line.
pub fn intersection_point_line(p: &Point<Real>, line: &Line, eps: Real) -> Option<Point<Real>> {
    keep_if(p, line.is_inside(p, eps))
}

/// Intersection between a point and a ray.
pub fn intersection_point_ray(p: &Point<Real>, ray: &Ray, eps: Real) -> Option<Point<Real>> {
    keep_if(p, ray.is_inside(p, eps))
}

/// Intersection between a point and a plane.
pub fn intersection_point_plane(p: &Point<Real>, plane: &Plane, eps: Real) -> Option<Point<Real>> {
    keep_if(p, plane.is_inside(p, eps))
}

/// Intersection between a point and a segment.
pub fn intersection_point_segment(
    p: &Point<Real>,
    segment: &Segment,
    eps: Real,
) -> Option<Point<Real>> {
    keep_if(p, segment.is_inside(p, eps))
}

/// Intersection between a point and a triangle.
pub fn intersection_point_triangle(
    p: &Point<Real>,
    triangle: &Triangle,
    eps: Real,
) -> Option<Point<Real>> {
    keep_if(p, triangle.is_inside(p, eps))
}

/// Intersection between a point and a disk.
pub fn intersection_point_circle(
    p: &Point<Real>,
    circle: &Circle,
    eps: Real,
) -> Option<Point<Real>> {
    keep_if(p, circle.is_inside(p, eps))
}

/// Intersection between a point and a ball.
pub fn intersection_point_sphere(
    p: &Point<Real>,
    sphere: &Sphere,
    eps: Real,
) -> Option<Point<Real>> {
    keep_if(p, sphere.is_inside(p, eps))
}

/// Intersection between a point and an Aabb enlarged by `eps`.
pub fn intersection_point_aabb(p: &Point<Real>, aabb: &Aabb, eps: Real) -> Option<Point<Real>> {
    keep_if(p, aabb.loosened(eps.max(0.0)).contains_local_point(p))
}
