use crate::math::{Point, Real};
use crate::query::details::{
    collinear_intersection_ray_segment, collinear_intersection_segment_segment,
    intersection_line_plane, intersection_ray_plane, intersection_segment_plane,
};
use crate::query::QueryError;
use crate::shape::{Circle, Line, Ray, Segment};

/// Intersection point between a line and a disk it is not coplanar with.
pub fn intersection_line_circle(line: &Line, circle: &Circle, eps: Real) -> Option<Point<Real>> {
    let hit = intersection_line_plane(line, &circle.plane, eps)?;
    (na::distance(&hit, &circle.center()) <= circle.radius + eps).then_some(hit)
}

/// Intersection point between a ray and a disk it is not coplanar with.
pub fn intersection_ray_circle(ray: &Ray, circle: &Circle, eps: Real) -> Option<Point<Real>> {
    let hit = intersection_ray_plane(ray, &circle.plane, eps)?;
    circle.is_inside(&hit, eps).then_some(hit)
}

/// Intersection point between a segment and a disk it is not coplanar with.
pub fn intersection_segment_circle(
    segment: &Segment,
    circle: &Circle,
    eps: Real,
) -> Option<Point<Real>> {
    let hit = intersection_segment_plane(segment, &circle.plane, eps)?;
    circle.is_inside(&hit, eps).then_some(hit)
}

/// Intersection between a line and a disk lying on the same plane.
///
/// The result is the chord of the disk supported by the line, oriented along
/// the line direction. If the line is tangent to the disk, both endpoints of
/// the chord are the tangency point.
pub fn coplanar_intersection_line_circle(
    line: &Line,
    circle: &Circle,
    eps: Real,
) -> Option<Segment> {
    let to_origin = line.origin - circle.center();
    let a2 = line.dir.dot(&line.dir);
    let a1 = to_origin.dot(&line.dir);
    let a0 = to_origin.norm_squared() - circle.radius * circle.radius;
    let disc = a1 * a1 - a2 * a0;

    if !(a2 > eps) || !(disc >= -eps) {
        return None;
    }

    if disc <= eps {
        let tangent = line.point_at(-a1 / a2);
        return Some(Segment::new(tangent, tangent));
    }

    let sqrt_disc = disc.sqrt();
    Some(Segment::new(
        line.point_at((-a1 - sqrt_disc) / a2),
        line.point_at((-a1 + sqrt_disc) / a2),
    ))
}

/// Intersection between a ray and a disk lying on the same plane.
pub fn coplanar_intersection_ray_circle(ray: &Ray, circle: &Circle, eps: Real) -> Option<Segment> {
    let chord = coplanar_intersection_line_circle(&Line::new(ray.origin, ray.dir), circle, eps)?;
    collinear_intersection_ray_segment(ray, &chord, eps)
}

/// Intersection between a segment and a disk lying on the same plane.
pub fn coplanar_intersection_segment_circle(
    segment: &Segment,
    circle: &Circle,
    eps: Real,
) -> Result<Option<Segment>, QueryError> {
    if !(segment.length() > eps) {
        return Ok(circle.is_inside(&segment.a, eps).then_some(*segment));
    }

    let line = Line::new(segment.a, segment.scaled_direction());
    match coplanar_intersection_line_circle(&line, circle, eps) {
        Some(chord) => collinear_intersection_segment_segment(segment, &chord, eps),
        None => Ok(None),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{Vector, DEFAULT_EPSILON};

    fn disk() -> Circle {
        Circle::from_center_normal(1.0, Point::new(0.0, 0.0, 1.0), Vector::z())
    }

    #[test]
    fn line_through_disk() {
        let line = Line::new(Point::new(0.5, 0.5, 3.0), -Vector::z());
        let outside = Line::new(Point::new(1.5, 0.0, 3.0), -Vector::z());
        assert_relative_eq!(
            intersection_line_circle(&line, &disk(), DEFAULT_EPSILON).unwrap(),
            Point::new(0.5, 0.5, 1.0)
        );
        assert_eq!(intersection_line_circle(&outside, &disk(), DEFAULT_EPSILON), None);
    }

    #[test]
    fn coplanar_chord_and_tangent() {
        let across = Line::new(Point::new(-3.0, 0.0, 1.0), Vector::x());
        let chord = coplanar_intersection_line_circle(&across, &disk(), DEFAULT_EPSILON).unwrap();
        assert_relative_eq!(chord.a, Point::new(-1.0, 0.0, 1.0), epsilon = 1.0e-12);
        assert_relative_eq!(chord.b, Point::new(1.0, 0.0, 1.0), epsilon = 1.0e-12);

        let tangent = Line::new(Point::new(-3.0, 1.0, 1.0), Vector::x());
        let touch = coplanar_intersection_line_circle(&tangent, &disk(), DEFAULT_EPSILON).unwrap();
        assert_eq!(touch.a, touch.b);
        assert_relative_eq!(touch.a, Point::new(0.0, 1.0, 1.0));

        let away = Line::new(Point::new(-3.0, 1.1, 1.0), Vector::x());
        assert_eq!(coplanar_intersection_line_circle(&away, &disk(), DEFAULT_EPSILON), None);
    }

    #[test]
    fn coplanar_ray_and_segment_are_clipped() {
        let ray = Ray::new(Point::new(0.0, 0.0, 1.0), Vector::x());
        let half = coplanar_intersection_ray_circle(&ray, &disk(), DEFAULT_EPSILON).unwrap();
        assert_relative_eq!(half.a, Point::new(0.0, 0.0, 1.0));
        assert_relative_eq!(half.b, Point::new(1.0, 0.0, 1.0), epsilon = 1.0e-12);

        let seg = Segment::new(Point::new(0.5, 0.0, 1.0), Point::new(3.0, 0.0, 1.0));
        let clipped = coplanar_intersection_segment_circle(&seg, &disk(), DEFAULT_EPSILON)
            .unwrap()
            .unwrap();
        assert_relative_eq!(clipped.a, Point::new(0.5, 0.0, 1.0));
        assert_relative_eq!(clipped.b, Point::new(1.0, 0.0, 1.0), epsilon = 1.0e-12);
    }
}
