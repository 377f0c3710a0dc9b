use geoprim3d::bounding_volume::Aabb;
use geoprim3d::math::{Point, Real, Vector, DEFAULT_EPSILON};
use geoprim3d::query::{intersects, is_collinear, is_coplanar, is_orthogonal, is_parallel};
use geoprim3d::shape::{AnyEntity, Circle, Line, Plane, Ray, Segment, Sphere, Triangle};
use oorandom::Rand32;

// Small integer coordinates, so that many pairs are exactly parallel,
// orthogonal, collinear or coplanar.
fn random_point(rng: &mut Rand32) -> Point<Real> {
    Point::new(
        rng.rand_range(0..3) as Real - 1.0,
        rng.rand_range(0..3) as Real - 1.0,
        rng.rand_range(0..3) as Real - 1.0,
    )
}

fn random_vector(rng: &mut Rand32) -> Vector<Real> {
    loop {
        let v = random_point(rng).coords;
        if v != Vector::zeros() {
            return v;
        }
    }
}

fn random_entity(rng: &mut Rand32) -> AnyEntity {
    let origin = random_point(rng);

    match rng.rand_range(0..9) {
        0 => origin.into(),
        1 => Line::new(origin, random_vector(rng)).into(),
        2 => Ray::new(origin, random_vector(rng)).into(),
        3 => Segment::new(origin, origin + random_vector(rng)).into(),
        4 => Plane::new(origin, random_vector(rng)).into(),
        5 => {
            let (u, v) = (random_vector(rng), random_vector(rng));
            Triangle::new(origin, origin + u, origin + v).into()
        }
        6 => Circle::from_center_normal(1.0, origin, random_vector(rng)).into(),
        7 => Sphere::new(origin, 1.0).into(),
        _ => Aabb::new(origin, origin + random_vector(rng).abs()).into(),
    }
}

#[test]
fn relation_predicates_are_symmetric() {
    let mut rng = Rand32::new(42);
    let eps = DEFAULT_EPSILON;

    for _ in 0..5_000 {
        let a = random_entity(&mut rng);
        let b = random_entity(&mut rng);

        assert_eq!(is_parallel(&a, &b, eps), is_parallel(&b, &a, eps), "{:?} {:?}", a, b);
        assert_eq!(is_orthogonal(&a, &b, eps), is_orthogonal(&b, &a, eps), "{:?} {:?}", a, b);
        assert_eq!(is_collinear(&a, &b, eps), is_collinear(&b, &a, eps), "{:?} {:?}", a, b);
        assert_eq!(is_coplanar(&a, &b, eps), is_coplanar(&b, &a, eps), "{:?} {:?}", a, b);

        // Collinear entities are always parallel and coplanar.
        if is_collinear(&a, &b, eps) {
            assert!(is_parallel(&a, &b, eps) && is_coplanar(&a, &b, eps));
        }
    }
}

#[test]
fn intersects_does_not_depend_on_argument_order() {
    let mut rng = Rand32::new(1234);

    for _ in 0..5_000 {
        let a = random_entity(&mut rng);
        let b = random_entity(&mut rng);
        let ab = intersects(&a, &b, DEFAULT_EPSILON);
        let ba = intersects(&b, &a, DEFAULT_EPSILON);

        // Unsupported pairs fail in both orders.
        assert_eq!(ab.is_ok(), ba.is_ok(), "{:?} {:?}", a, b);
        if let (Ok(ab), Ok(ba)) = (ab, ba) {
            assert_eq!(ab, ba, "{:?} {:?}", a, b);
        }
    }
}
