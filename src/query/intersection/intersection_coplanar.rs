//! Intersections between linear entities and triangles lying on the same plane.

use arrayvec::ArrayVec;

use crate::math::{Point, Real};
use crate::query::details::{
    collinear_intersection_ray_segment, collinear_intersection_segment_segment,
    intersection_line_line,
};
use crate::query::QueryError;
use crate::shape::{Line, Linear, Ray, Segment, Triangle};
use crate::utils;

/// Intersection between a line and a triangle lying on the same plane.
///
/// The line is clipped by the three edges of the triangle. The resulting chord
/// is oriented along the line direction, and is degenerate if the line only
/// touches a vertex.
pub fn coplanar_intersection_line_triangle(
    line: &Line,
    triangle: &Triangle,
    eps: Real,
) -> Option<Segment> {
    let mut hits = ArrayVec::<Point<Real>, 3>::new();

    for edge in &triangle.edges() {
        if let Some(hit) = intersection_line_line(line, &edge.to_line(), eps) {
            if edge.is_inside(&hit, eps) {
                let _ = utils::push_distinct(&mut hits, hit, eps);
            }
        }
    }

    let param = |pt: &Point<Real>| (pt - line.origin).dot(&line.dir);
    let first = hits
        .iter()
        .min_by(|a, b| param(a).total_cmp(&param(b)))?;
    let last = hits
        .iter()
        .max_by(|a, b| param(a).total_cmp(&param(b)))?;

    Some(Segment::new(*first, *last))
}

/// Intersection between a ray and a triangle lying on the same plane.
pub fn coplanar_intersection_ray_triangle(
    ray: &Ray,
    triangle: &Triangle,
    eps: Real,
) -> Option<Segment> {
    let chord = coplanar_intersection_line_triangle(&Line::new(ray.origin, ray.dir), triangle, eps)?;
    collinear_intersection_ray_segment(ray, &chord, eps)
}

/// Intersection between a segment and a triangle lying on the same plane.
pub fn coplanar_intersection_segment_triangle(
    segment: &Segment,
    triangle: &Triangle,
    eps: Real,
) -> Result<Option<Segment>, QueryError> {
    let line = Line::new(segment.a, segment.scaled_direction());
    match coplanar_intersection_line_triangle(&line, triangle, eps) {
        Some(chord) => collinear_intersection_segment_segment(segment, &chord, eps),
        None => Ok(None),
    }
}
