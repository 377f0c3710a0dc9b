use crate::math::Real;
use crate::query::details::{
    collinear_intersection_ray_segment, collinear_intersection_segment_segment,
};
use crate::query::QueryError;
use crate::shape::{Line, Ray, Segment, Sphere};

/// Intersection between a line and a ball: the chord of the ball supported by the line.
///
/// The chord is oriented along the line direction. If the line is tangent to
/// the ball, both endpoints of the chord are the tangency point.
pub fn intersection_line_sphere(line: &Line, sphere: &Sphere, eps: Real) -> Option<Segment> {
    let dir = line.unit_direction()?;
    let to_origin = line.origin - sphere.center;
    let a1 = dir.dot(&to_origin);
    let a0 = to_origin.norm_squared() - sphere.radius * sphere.radius;
    let disc = a1 * a1 - a0;

    if !(disc >= -eps) {
        return None;
    }

    if disc <= eps {
        let tangent = line.origin - *dir * a1;
        return Some(Segment::new(tangent, tangent));
    }

    let sqrt_disc = disc.sqrt();
    Some(Segment::new(
        line.origin + *dir * (-a1 - sqrt_disc),
        line.origin + *dir * (-a1 + sqrt_disc),
    ))
}

/// Intersection between a ray and a ball: the part of the chord ahead of the ray origin.
pub fn intersection_ray_sphere(ray: &Ray, sphere: &Sphere, eps: Real) -> Option<Segment> {
    let chord = intersection_line_sphere(&Line::new(ray.origin, ray.dir), sphere, eps)?;
    collinear_intersection_ray_segment(ray, &chord, eps)
}

/// Intersection between a segment and a ball: the part of the segment inside the ball.
pub fn intersection_segment_sphere(
    segment: &Segment,
    sphere: &Sphere,
    eps: Real,
) -> Result<Option<Segment>, QueryError> {
    let line = Line::new(segment.a, segment.scaled_direction());
    match intersection_line_sphere(&line, sphere, eps) {
        Some(chord) => collinear_intersection_segment_segment(segment, &chord, eps),
        None => Ok(None),
    }
}
