use geoprim3d::math::{Point, Vector, DEFAULT_EPSILON};
use geoprim3d::query::details::{coplanar_intersection_line_circle, coplanar_intersection_ray_circle};
use geoprim3d::query::intersection;
use geoprim3d::shape::{Circle, Line, Ray};

fn disk() -> Circle {
    Circle::from_center_normal(1.0, Point::new(0.0, 0.0, 0.5), Vector::z())
}

#[test]
fn ray_tangent_to_disk_touches_it_once() {
    let ray = Ray::new(Point::new(1.0, 1.0, 0.5), -Vector::x());

    let chord = coplanar_intersection_ray_circle(&ray, &disk(), DEFAULT_EPSILON).unwrap();
    assert_relative_eq!(chord.a, Point::new(0.0, 1.0, 0.5), epsilon = 1.0e-12);
    assert_relative_eq!(chord.a, chord.b, epsilon = 1.0e-12);

    let res = intersection(&ray, &disk(), DEFAULT_EPSILON).unwrap();
    let seg = res.as_segment().unwrap();
    assert_relative_eq!(seg.a, seg.b, epsilon = 1.0e-12);
}

#[test]
fn tangency_boundary() {
    for dir in [Vector::x(), -Vector::x(), Vector::new(3.0, 0.0, 0.0)] {
        let tangent = Line::new(Point::new(0.25, 1.0, 0.5), dir);
        let chord = coplanar_intersection_line_circle(&tangent, &disk(), DEFAULT_EPSILON).unwrap();
        assert_relative_eq!(chord.a, chord.b, epsilon = 1.0e-12);
        assert_relative_eq!(chord.a, Point::new(0.0, 1.0, 0.5), epsilon = 1.0e-12);

        // Moving the line away from the center, past the radius.
        let outside = Line::new(Point::new(0.25, 1.0 + 1.0e-3, 0.5), dir);
        assert_eq!(
            coplanar_intersection_line_circle(&outside, &disk(), DEFAULT_EPSILON),
            None
        );

        // Moving it towards the center gives a proper chord.
        let inside = Line::new(Point::new(0.25, 1.0 - 1.0e-3, 0.5), dir);
        let chord = coplanar_intersection_line_circle(&inside, &disk(), DEFAULT_EPSILON).unwrap();
        assert!(chord.length() > 1.0e-2);
    }
}
