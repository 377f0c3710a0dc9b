use geoprim3d::bounding_volume::{Aabb, BoundingVolume};
use geoprim3d::math::{Point, Real, DEFAULT_EPSILON};

#[test]
fn aabb_merged_with_itself_is_unchanged() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..100 {
        let mut coord = || rng.rand_float() as Real * 20.0 - 10.0;
        let mut aabb = Aabb::new(
            Point::new(coord(), coord(), coord()),
            Point::new(coord(), coord(), coord()),
        );
        let _ = aabb.update();

        assert!(aabb.merged(&aabb).is_approx(&aabb, DEFAULT_EPSILON));
        assert!(aabb.contains(&aabb));
        assert_eq!(aabb.intersection(&aabb), Some(aabb));
    }
}

#[test]
fn invalid_aabb_is_the_merge_identity() {
    let aabb = Aabb::new(Point::new(-1.0, 0.0, 2.0), Point::new(3.0, 4.0, 5.0));
    assert_eq!(Aabb::new_invalid().merged(&aabb), aabb);
    assert_eq!(aabb.merged(&Aabb::new_invalid()), aabb);
}
