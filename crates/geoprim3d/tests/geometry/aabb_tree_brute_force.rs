use geoprim3d::bounding_volume::{Aabb, BoundingVolume};
use geoprim3d::math::{Point, Real, Vector};
use geoprim3d::partitioning::AabbTree;
use oorandom::Rand32;

fn random_boxes(rng: &mut Rand32, len: usize, max_half_extent: Real) -> Vec<Aabb> {
    (0..len)
        .map(|i| {
            let center = Point::new(
                rng.rand_float() as Real * 20.0,
                rng.rand_float() as Real * 20.0,
                rng.rand_float() as Real * 20.0,
            );
            let half_extents = Vector::new(
                rng.rand_float() as Real,
                rng.rand_float() as Real,
                rng.rand_float() as Real,
            ) * max_half_extent;
            Aabb::with_id(center - half_extents, center + half_extents, i, 0)
        })
        .collect()
}

#[test]
fn tree_collision_agrees_with_brute_force() {
    let mut rng = Rand32::new(42);

    // From sparse to dense sets of boxes.
    for (len, max_half_extent) in [(3, 0.5), (10, 1.0), (40, 0.2), (40, 3.0), (150, 1.5)] {
        for _ in 0..10 {
            let boxes1 = random_boxes(&mut rng, len, max_half_extent);
            let boxes2 = random_boxes(&mut rng, len, max_half_extent);
            let refs1: Vec<_> = boxes1.iter().collect();
            let refs2: Vec<_> = boxes2.iter().collect();
            let tree1 = AabbTree::from_boxes(&refs1);
            let tree2 = AabbTree::from_boxes(&refs2);
            tree1.assert_well_formed();
            tree2.assert_well_formed();

            let brute_force = boxes1
                .iter()
                .any(|a| boxes2.iter().any(|b| a.intersects(b)));
            assert_eq!(tree1.collision(&tree2, |_, _| true, false), brute_force);
            assert_eq!(tree2.collision(&tree1, |_, _| true, true), brute_force);

            // A filter rejecting every pair forces a full traversal.
            let mut tested = 0;
            assert!(!tree1.collision(
                &tree2,
                |a, b| {
                    assert!(a.intersects(b));
                    tested += 1;
                    false
                },
                false
            ));

            let num_pairs = boxes1
                .iter()
                .flat_map(|a| boxes2.iter().map(move |b| (a, b)))
                .filter(|(a, b)| a.intersects(b))
                .count();
            assert_eq!(tested, num_pairs);

            let mut pairs = Vec::new();
            tree1.intersect(&tree2, &mut pairs, false);
            assert_eq!(pairs.len(), num_pairs);
        }
    }
}

#[test]
fn every_leaf_is_inside_the_root() {
    let mut rng = Rand32::new(7);
    let boxes = random_boxes(&mut rng, 500, 2.0);
    let refs: Vec<_> = boxes.iter().collect();
    let tree = AabbTree::from_boxes(&refs);
    let root = tree.root_aabb().unwrap();

    tree.assert_well_formed();
    assert!(tree.leaves().all(|leaf| root.contains(leaf)));
    assert!(tree.depth() < 30);
}
