//! Intersections between non-coplanar planar entities, and between a plane and a ball.

use arrayvec::ArrayVec;

use crate::math::{Point, Real};
use crate::query::details::{
    collinear_intersection_segment_segment, coplanar_intersection_line_circle,
    coplanar_intersection_segment_circle, intersection_plane_plane, intersection_segment_plane,
};
use crate::query::QueryError;
use crate::shape::{Circle, Plane, Segment, Sphere, Triangle};
use crate::utils;

/// Intersection between a plane and a triangle crossing it.
///
/// Each edge of the triangle is intersected with the plane. Distinct hits
/// (farther than `eps` from each other) form the resulting segment. A single
/// hit, e.g., when only a vertex touches the plane, yields a degenerate
/// segment.
pub fn intersection_plane_triangle(
    plane: &Plane,
    triangle: &Triangle,
    eps: Real,
) -> Option<Segment> {
    let mut hits = ArrayVec::<Point<Real>, 3>::new();

    for edge in &triangle.edges() {
        if let Some(hit) = intersection_segment_plane(edge, plane, eps) {
            let _ = utils::push_distinct(&mut hits, hit, eps);
        }
    }

    match hits.as_slice() {
        [] => None,
        [a] => Some(Segment::new(*a, *a)),
        [a, b] => Some(Segment::new(*a, *b)),
        [a, b, c] => {
            // Only reachable with a triangle nearly lying on the plane: keep the longest chord.
            let chords = [
                Segment::new(*a, *b),
                Segment::new(*b, *c),
                Segment::new(*c, *a),
            ];
            chords
                .into_iter()
                .max_by(|s0, s1| s0.length().total_cmp(&s1.length()))
        }
        _ => None,
    }
}

/// Intersection between a plane and a disk crossing it: a chord of the disk.
pub fn intersection_plane_circle(plane: &Plane, circle: &Circle, eps: Real) -> Option<Segment> {
    let line = intersection_plane_plane(plane, &circle.plane, eps)?;
    coplanar_intersection_line_circle(&line, circle, eps)
}

/// Intersection between a plane and a ball: a disk lying on the plane.
///
/// A plane tangent to the ball yields a disk of zero radius.
pub fn intersection_plane_sphere(plane: &Plane, sphere: &Sphere, eps: Real) -> Option<Circle> {
    let dist = plane.signed_distance(&sphere.center);
    let r = sphere.radius;

    if !(dist.abs() <= r + eps) {
        return None;
    }

    let n = plane.normalized_normal();
    let radius = ((r + dist) * (r - dist)).max(0.0).sqrt();
    Some(Circle::from_center_normal(radius, sphere.center - n * dist, n))
}

/// Intersection between a triangle and a disk crossing each other.
///
/// The chord cut by the disk plane on the triangle is clipped by the disk.
pub fn intersection_triangle_circle(
    triangle: &Triangle,
    circle: &Circle,
    eps: Real,
) -> Result<Option<Segment>, QueryError> {
    match intersection_plane_triangle(&circle.plane, triangle, eps) {
        Some(chord) => coplanar_intersection_segment_circle(&chord, circle, eps),
        None => Ok(None),
    }
}

/// Intersection between two disks crossing each other.
///
/// Both disks cut a chord on the line common to their planes. The result is
/// the overlap of both chords.
pub fn intersection_circle_circle(
    c0: &Circle,
    c1: &Circle,
    eps: Real,
) -> Result<Option<Segment>, QueryError> {
    let Some(line) = intersection_plane_plane(&c0.plane, &c1.plane, eps) else {
        return Ok(None);
    };
    let (Some(chord0), Some(chord1)) = (
        coplanar_intersection_line_circle(&line, c0, eps),
        coplanar_intersection_line_circle(&line, c1, eps),
    ) else {
        return Ok(None);
    };

    collinear_intersection_segment_segment(&chord0, &chord1, eps)
}
