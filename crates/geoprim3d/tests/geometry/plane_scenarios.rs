use geoprim3d::math::{Point, Vector, DEFAULT_EPSILON};
use geoprim3d::query::details::{
    intersection_plane_plane_plane, intersection_plane_sphere, intersection_ray_plane,
    intersection_segment_plane,
};
use geoprim3d::query::{intersection, intersects};
use geoprim3d::shape::{Plane, Ray, Segment, Sphere};

fn plane() -> Plane {
    Plane::new(Point::new(0.0, 0.0, 0.5), Vector::z())
}

#[test]
fn ray_parallel_to_plane_does_not_hit_it() {
    let ray = Ray::new(Point::new(0.0, 1.0, 1.6), Vector::x());
    assert_eq!(intersection_ray_plane(&ray, &plane(), DEFAULT_EPSILON), None);
    assert_eq!(intersects(&ray, &plane(), DEFAULT_EPSILON), Ok(false));
}

#[test]
fn segment_above_plane_does_not_hit_it() {
    let seg = Segment::new(Point::new(0.0, 1.0, 1.6), Point::new(1.0, 1.0, 1.6));
    assert_eq!(intersection_segment_plane(&seg, &plane(), DEFAULT_EPSILON), None);
    assert_eq!(intersects(&seg, &plane(), DEFAULT_EPSILON), Ok(false));
}

#[test]
fn ray_plane_hit_must_be_ahead_of_the_origin() {
    let down = Ray::new(Point::new(1.0, 2.0, 3.0), -Vector::z());
    let up = Ray::new(Point::new(1.0, 2.0, 3.0), Vector::z());
    assert_eq!(
        intersection_ray_plane(&down, &plane(), DEFAULT_EPSILON),
        Some(Point::new(1.0, 2.0, 0.5))
    );
    assert_eq!(intersection_ray_plane(&up, &plane(), DEFAULT_EPSILON), None);
}

#[test]
fn three_planes_meet_on_a_point() {
    let p0 = Plane::new(Point::new(1.0, 0.0, 0.0), Vector::new(2.0, 0.0, 0.0));
    let p1 = Plane::new(Point::new(0.0, -2.0, 0.0), Vector::new(1.0, 1.0, 0.0));
    let p2 = Plane::new(Point::new(0.0, 0.0, 3.0), Vector::z());

    let pt = intersection_plane_plane_plane(&p0, &p1, &p2, DEFAULT_EPSILON).unwrap();
    assert_relative_eq!(pt, Point::new(1.0, -3.0, 3.0), epsilon = 1.0e-9);
    for p in [&p0, &p1, &p2] {
        assert!(p.is_inside(&pt, 1.0e-9));
    }
}

#[test]
fn three_planes_with_two_parallel_normals_have_no_unique_point() {
    let p0 = Plane::new(Point::origin(), Vector::z());
    let p1 = Plane::new(Point::new(0.0, 0.0, 1.0), -Vector::z());
    let p2 = Plane::new(Point::origin(), Vector::x());
    assert_eq!(intersection_plane_plane_plane(&p0, &p1, &p2, DEFAULT_EPSILON), None);
}

#[test]
fn plane_cuts_a_sphere_on_a_circle() {
    let ball = Sphere::new(Point::new(0.0, 0.0, 0.5 + 0.6), 1.0);
    let circle = intersection_plane_sphere(&plane(), &ball, DEFAULT_EPSILON).unwrap();
    assert_relative_eq!(circle.radius, 0.8, epsilon = 1.0e-12);
    assert_relative_eq!(circle.center(), Point::new(0.0, 0.0, 0.5), epsilon = 1.0e-12);
    assert_relative_eq!(circle.plane.normal.normalize(), Vector::z());

    // Same result through the dispatcher, in both argument orders.
    let res = intersection(&ball, &plane(), DEFAULT_EPSILON).unwrap();
    assert_eq!(res, intersection(&plane(), &ball, DEFAULT_EPSILON).unwrap());
    assert!(res.as_circle().unwrap().is_approx(&circle, 1.0e-12));

    let far = Sphere::new(Point::new(0.0, 0.0, 3.0), 1.0);
    assert_eq!(intersection_plane_sphere(&plane(), &far, DEFAULT_EPSILON), None);
}
