use geoprim3d::math::{Point, Real, Vector, DEFAULT_EPSILON};
use geoprim3d::query::details::collinear_intersection_segment_segment;
use geoprim3d::query::intersection;
use geoprim3d::shape::Segment;
use oorandom::Rand32;

#[test]
fn overlapping_collinear_segments() {
    let s0 = Segment::new(Point::new(0.0, 2.0, 1.0), Point::new(0.0, -1.0, 1.0));
    let s1 = Segment::new(Point::new(0.0, 1.0, 1.0), Point::new(0.0, -2.0, 1.0));
    let expected = Segment::new(Point::new(0.0, 1.0, 1.0), Point::new(0.0, -1.0, 1.0));

    let overlap = collinear_intersection_segment_segment(&s0, &s1, DEFAULT_EPSILON)
        .unwrap()
        .unwrap();
    assert!(overlap.is_approx_unordered(&expected, DEFAULT_EPSILON));

    let res = intersection(&s0, &s1, DEFAULT_EPSILON).unwrap();
    assert!(res.as_segment().unwrap().is_approx_unordered(&expected, DEFAULT_EPSILON));
}

// Exactly one endpoint of two collinear segments can never lie inside the
// other segment, so the overlap classification never fails.
#[test]
fn single_endpoint_overlap_is_unreachable() {
    let mut rng = Rand32::new(42);

    for i in 0..10_000 {
        let origin = Point::new(
            rng.rand_float() as Real * 10.0 - 5.0,
            rng.rand_float() as Real * 10.0 - 5.0,
            rng.rand_float() as Real * 10.0 - 5.0,
        );
        let dir = Vector::new(
            rng.rand_float() as Real - 0.5,
            rng.rand_float() as Real - 0.5,
            rng.rand_float() as Real - 0.5,
        );

        // Half the configurations use integer parameters, to hit shared
        // endpoints and degenerate segments.
        let mut param = || {
            if i % 2 == 0 {
                rng.rand_range(0..6) as Real
            } else {
                rng.rand_float() as Real * 6.0
            }
        };
        let (t0, t1, t2, t3) = (param(), param(), param(), param());

        let s0 = Segment::new(origin + dir * t0, origin + dir * t1);
        let s1 = Segment::new(origin + dir * t2, origin + dir * t3);
        let res = collinear_intersection_segment_segment(&s0, &s1, DEFAULT_EPSILON);
        assert!(res.is_ok(), "{:?} {:?}", s0, s1);

        let (lo0, hi0) = (t0.min(t1), t0.max(t1));
        let (lo1, hi1) = (t2.min(t3), t2.max(t3));
        let overlaps = lo0 <= hi1 && lo1 <= hi0;
        assert_eq!(res.unwrap().is_some(), overlaps, "{:?} {:?}", s0, s1);
    }
}
