use geoprim3d::bounding_volume::Aabb;
use geoprim3d::math::{Point, Vector, DEFAULT_EPSILON};
use geoprim3d::shape::{
    nan_point, Circle, Entity, Line, Plane, Ray, Segment, Sphere, Triangle,
};

#[test]
fn nan_primitives_are_degenerate() {
    let nans: [&dyn Entity; 9] = [
        &nan_point(),
        &Line::nan(),
        &Ray::nan(),
        &Segment::nan(),
        &Plane::nan(),
        &Triangle::nan(),
        &Circle::nan(),
        &Sphere::nan(),
        &Aabb::nan(),
    ];

    for e in nans {
        assert!(e.is_degenerate(DEFAULT_EPSILON), "{:?}", e);
    }
}

#[test]
fn unit_primitives_are_not_degenerate() {
    let units: [&dyn Entity; 9] = [
        &Point::origin(),
        &Line::new(Point::origin(), Vector::x()),
        &Ray::new(Point::origin(), Vector::x()),
        &Segment::new(Point::origin(), Point::new(1.0, 0.0, 0.0)),
        &Plane::new(Point::origin(), Vector::z()),
        &Triangle::new(
            Point::origin(),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        ),
        &Circle::from_center_normal(1.0, Point::origin(), Vector::z()),
        &Sphere::new(Point::origin(), 1.0),
        &Aabb::new(Point::origin(), Point::new(1.0, 1.0, 1.0)),
    ];

    for e in units {
        assert!(!e.is_degenerate(DEFAULT_EPSILON), "{:?}", e);
    }
}
