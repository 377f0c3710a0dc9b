//! Intersections between collinear lines, rays and segments.
//!
//! The inputs are assumed to lie on the same infinite line, so the result is
//! the overlap of two intervals of that line.

use crate::math::Real;
use crate::query::QueryError;
use crate::shape::{Line, Ray, Segment};
use either::Either;

/// Intersection between two collinear lines: the first one.
#[inline]
pub fn collinear_intersection_line_line(l0: &Line, _l1: &Line) -> Line {
    *l0
}

/// Intersection between a line and a collinear ray: the ray.
#[inline]
pub fn collinear_intersection_line_ray(_line: &Line, ray: &Ray) -> Ray {
    *ray
}

/// Intersection between a line and a collinear segment: the segment.
#[inline]
pub fn collinear_intersection_line_segment(_line: &Line, segment: &Segment) -> Segment {
    *segment
}

/// Intersection between two collinear rays.
///
/// If both rays point the same way, the result is the one starting inside the
/// other. If they point to opposite directions, the result is the segment
/// joining both origins when they face each other, and `None` otherwise.
pub fn collinear_intersection_ray_ray(
    r0: &Ray,
    r1: &Ray,
    eps: Real,
) -> Option<Either<Ray, Segment>> {
    if r0.dir.dot(&r1.dir) > 0.0 {
        if r1.is_inside(&r0.origin, eps) {
            Some(Either::Left(*r0))
        } else {
            Some(Either::Left(*r1))
        }
    } else if r0.is_inside(&r1.origin, eps) {
        Some(Either::Right(Segment::new(r0.origin, r1.origin)))
    } else {
        None
    }
}

/// Intersection between a ray and a collinear segment.
///
/// Returns the part of the segment lying ahead of the ray origin.
pub fn collinear_intersection_ray_segment(
    ray: &Ray,
    segment: &Segment,
    eps: Real,
) -> Option<Segment> {
    match (ray.is_inside(&segment.a, eps), ray.is_inside(&segment.b, eps)) {
        (true, true) => Some(*segment),
        (true, false) => Some(Segment::new(ray.origin, segment.a)),
        (false, true) => Some(Segment::new(ray.origin, segment.b)),
        (false, false) => None,
    }
}

/// Intersection between two collinear segments.
///
/// The overlap is classified from which endpoints of each segment lie inside
/// the other one. A single endpoint lying inside the other segment while no
/// endpoint of the other lies inside the first is impossible for collinear
/// segments, and is reported as [`QueryError::InvariantViolation`].
pub fn collinear_intersection_segment_segment(
    s0: &Segment,
    s1: &Segment,
    eps: Real,
) -> Result<Option<Segment>, QueryError> {
    let flags = (
        s1.is_inside(&s0.a, eps),
        s1.is_inside(&s0.b, eps),
        s0.is_inside(&s1.a, eps),
        s0.is_inside(&s1.b, eps),
    );
    log::trace!("segment overlap flags: {:?}", flags);

    let result = match flags {
        // s0 inside s1.
        (true, true, _, _) => Some(*s0),
        // s1 inside s0.
        (_, _, true, true) => Some(*s1),
        // Partial overlaps.
        (false, true, false, true) => Some(Segment::new(s0.b, s1.b)),
        (false, true, true, false) => Some(Segment::new(s0.b, s1.a)),
        (true, false, false, true) => Some(Segment::new(s0.a, s1.b)),
        (true, false, true, false) => Some(Segment::new(s0.a, s1.a)),
        (false, false, false, false) => None,
        _ => {
            return Err(QueryError::InvariantViolation(
                "a single endpoint of two collinear segments lies inside the other segment",
            ))
        }
    };

    Ok(result)
}
