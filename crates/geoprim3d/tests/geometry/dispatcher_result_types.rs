use geoprim3d::bounding_volume::Aabb;
use geoprim3d::math::{Point, Vector, DEFAULT_EPSILON};
use geoprim3d::query::{intersection, intersects, QueryError};
use geoprim3d::shape::{
    AnyEntity, Circle, Entity, EntityType, Line, Plane, Ray, Segment, Sphere, Triangle,
};

fn triangle(z: f64) -> Triangle {
    Triangle::new(
        Point::new(-1.0, -1.0, z),
        Point::new(2.0, -1.0, z),
        Point::new(-1.0, 2.0, z),
    )
}

#[test]
fn line_line_intersection_type_depends_on_configuration() {
    let l0 = Line::new(Point::origin(), Vector::new(1.0, 1.0, 0.0));
    let cases = [
        (
            Line::new(Point::new(2.0, 0.0, 0.0), Vector::y()),
            EntityType::Point,
        ),
        (
            Line::new(Point::new(-3.0, -3.0, 0.0), Vector::new(-2.0, -2.0, 0.0)),
            EntityType::Line,
        ),
        // Parallel.
        (
            Line::new(Point::new(1.0, 0.0, 0.0), Vector::new(1.0, 1.0, 0.0)),
            EntityType::None,
        ),
        // Skew.
        (
            Line::new(Point::new(2.0, 0.0, 1.0), Vector::y()),
            EntityType::None,
        ),
    ];

    for (l1, expected) in cases {
        let res = intersection(&l0, &l1, DEFAULT_EPSILON).unwrap();
        assert_eq!(res.entity_type(), expected, "{:?}", l1);
    }

    let res = intersection(&l0, &cases[0].0, DEFAULT_EPSILON).unwrap();
    assert_relative_eq!(*res.as_point().unwrap(), Point::new(2.0, 2.0, 0.0));
}

#[test]
fn result_types_of_the_general_family() {
    let eps = DEFAULT_EPSILON;
    let plane = Plane::new(Point::origin(), Vector::z());
    let tilted = Plane::new(Point::origin(), Vector::x());
    let vertical = Segment::new(Point::new(0.0, 0.0, -1.0), Point::new(0.0, 0.0, 1.0));
    let disk = Circle::from_center_normal(1.0, Point::new(0.0, 0.0, 0.0), Vector::x());
    let ball = Sphere::new(Point::new(0.0, 0.0, 0.5), 1.0);
    let tri = triangle(0.0);

    let cases: [(&dyn Entity, &dyn Entity, EntityType); 9] = [
        (&plane, &tilted, EntityType::Line),
        (&vertical, &plane, EntityType::Point),
        (&vertical, &tri, EntityType::Point),
        (&Line::new(Point::origin(), Vector::x()), &disk, EntityType::Point),
        (&vertical, &ball, EntityType::Segment),
        (&tilted, &tri, EntityType::Segment),
        (&plane, &disk, EntityType::Segment),
        (&plane, &ball, EntityType::Circle),
        (&tri, &disk, EntityType::Segment),
    ];

    for (a, b, expected) in cases {
        let res = intersection(a, b, eps).unwrap();
        assert_eq!(res.entity_type(), expected, "{:?} {:?}", a, b);
        assert_eq!(
            intersection(b, a, eps).map(|res| res.entity_type()),
            Ok(expected)
        );
    }
}

#[test]
fn result_types_of_the_coplanar_family() {
    let eps = DEFAULT_EPSILON;
    let plane = Plane::new(Point::origin(), Vector::z());
    let tri = triangle(0.0);
    let disk = Circle::from_center_normal(1.0, Point::origin(), Vector::z());
    let line = Line::new(Point::origin(), Vector::x());
    let ray = Ray::new(Point::origin(), Vector::x());
    let seg = Segment::new(Point::new(-5.0, 0.0, 0.0), Point::new(5.0, 0.0, 0.0));

    // A linear entity lying on a plane is its own intersection with it.
    assert_eq!(intersection(&line, &plane, eps), Ok(AnyEntity::Line(line)));
    assert_eq!(intersection(&plane, &tri, eps), Ok(AnyEntity::Triangle(tri)));
    assert_eq!(intersection(&disk, &plane, eps), Ok(AnyEntity::Circle(disk)));

    let chord = intersection(&line, &tri, eps).unwrap();
    let chord = chord.as_segment().unwrap();
    assert!(chord.is_approx_unordered(
        &Segment::new(Point::new(-1.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0)),
        1.0e-9
    ));

    let chord = intersection(&seg, &disk, eps).unwrap();
    assert!(chord.as_segment().unwrap().is_approx_unordered(
        &Segment::new(Point::new(-1.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0)),
        1.0e-9
    ));

    let half_chord = intersection(&ray, &disk, eps).unwrap();
    assert!(half_chord.as_segment().unwrap().is_approx_unordered(
        &Segment::new(Point::origin(), Point::new(1.0, 0.0, 0.0)),
        1.0e-9
    ));
}

#[test]
fn punctual_and_box_results() {
    let eps = DEFAULT_EPSILON;
    let aabb = Aabb::new(Point::origin(), Point::new(2.0, 2.0, 2.0));
    let other = Aabb::new(Point::new(1.0, 1.0, 1.0), Point::new(3.0, 3.0, 3.0));
    let far = Aabb::new(Point::new(5.0, 5.0, 5.0), Point::new(6.0, 6.0, 6.0));
    let pt = Point::new(1.0, 2.0, 0.5);

    assert_eq!(intersection(&pt, &aabb, eps), Ok(AnyEntity::Point(pt)));
    assert_eq!(intersection(&aabb, &pt, eps), Ok(AnyEntity::Point(pt)));
    assert_eq!(intersection(&pt, &far, eps), Ok(AnyEntity::None));

    let overlap = intersection(&aabb, &other, eps).unwrap();
    assert!(overlap
        .as_aabb()
        .unwrap()
        .is_approx(&Aabb::new(Point::new(1.0, 1.0, 1.0), Point::new(2.0, 2.0, 2.0)), eps));
    assert_eq!(intersection(&aabb, &far, eps), Ok(AnyEntity::None));
}

#[test]
fn short_crossing_segments_meet() {
    let eps = DEFAULT_EPSILON;
    let s0 = Segment::new(Point::new(-1.0e-3, 0.0, 0.0), Point::new(1.0e-3, 0.0, 0.0));
    let s1 = Segment::new(Point::new(0.0, -1.0e-3, 0.0), Point::new(0.0, 1.0e-3, 0.0));

    for res in [intersection(&s0, &s1, eps), intersection(&s1, &s0, eps)] {
        let pt = *res.unwrap().as_point().unwrap();
        assert_relative_eq!(pt, Point::origin(), epsilon = 1.0e-12);
    }
}

#[test]
fn triangle_vertex_on_disk_intersects() {
    let eps = DEFAULT_EPSILON;
    let disk = Circle::from_center_normal(1.0, Point::origin(), Vector::z());
    let tri = Triangle::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(2.0, 0.0, 1.0),
        Point::new(0.0, 2.0, 1.0),
    );

    assert_eq!(intersects(&tri.a, &disk, eps), Ok(true));
    assert_eq!(intersects(&tri, &disk, eps), Ok(true));
    assert_eq!(intersects(&disk, &tri, eps), Ok(true));
}

#[test]
fn unsupported_pairs_are_errors() {
    let eps = DEFAULT_EPSILON;
    let tri = triangle(0.0);
    let other_tri = triangle(0.0);
    let crossing_tri = Triangle::new(
        Point::new(0.0, 0.0, -1.0),
        Point::new(0.0, 1.0, 1.0),
        Point::new(0.0, -1.0, 1.0),
    );
    let disk = Circle::from_center_normal(0.5, Point::origin(), Vector::z());
    let other_disk = Circle::from_center_normal(0.5, Point::new(0.5, 0.0, 0.0), Vector::z());
    let ball = Sphere::new(Point::origin(), 1.0);
    let aabb = Aabb::new(Point::origin(), Point::new(1.0, 1.0, 1.0));
    let line = Line::new(Point::origin(), Vector::x());

    let pairs: [(&dyn Entity, &dyn Entity); 9] = [
        (&tri, &other_tri),
        (&tri, &crossing_tri),
        (&tri, &disk),
        (&disk, &other_disk),
        (&tri, &ball),
        (&disk, &ball),
        (&ball, &ball),
        (&aabb, &line),
        (&aabb, &ball),
    ];

    for (a, b) in pairs {
        for (e1, e2) in [(a, b), (b, a)] {
            match intersection(e1, e2, eps) {
                Err(QueryError::Unsupported { first, second }) => {
                    let mut found = [first, second];
                    let mut expected = [a.entity_type(), b.entity_type()];
                    found.sort_by_key(|t| t.as_str());
                    expected.sort_by_key(|t| t.as_str());
                    assert_eq!(found, expected);
                }
                res => panic!("Unexpected result for {:?} and {:?}: {:?}", e1, e2, res),
            }
        }
    }
}
