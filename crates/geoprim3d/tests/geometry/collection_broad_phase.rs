use geoprim3d::bounding_volume::{Aabb, BoundingVolume};
use geoprim3d::math::{Point, Real, DEFAULT_EPSILON};
use geoprim3d::query::intersects;
use geoprim3d::shape::{AnyEntity, Collection, Entity, Line, Segment, Sphere};
use oorandom::Rand32;

fn random_point(rng: &mut Rand32) -> Point<Real> {
    let mut coord = || rng.rand_float() as Real * 20.0 - 10.0;
    Point::new(coord(), coord(), coord())
}

fn random_collection(rng: &mut Rand32, len: usize) -> Collection {
    (0..len)
        .map(|i| match i % 3 {
            0 => AnyEntity::from(Segment::new(random_point(rng), random_point(rng))),
            1 => Sphere::new(random_point(rng), rng.rand_float() as Real * 2.0).into(),
            _ => Line::new(random_point(rng), random_point(rng).coords).into(),
        })
        .collect()
}

#[test]
fn collection_candidates_match_brute_force() {
    let mut rng = Rand32::new(42);

    for _ in 0..50 {
        let collection = random_collection(&mut rng, 60);
        let (a, b) = (random_point(&mut rng), random_point(&mut rng));
        let query = Aabb::new(a.inf(&b), a.sup(&b));

        let mut candidates = Vec::new();
        let found = collection.intersect_aabb(&query, &mut candidates);

        let expected: Vec<_> = collection
            .aabbs()
            .iter()
            .filter(|aabb| aabb.intersects(&query))
            .map(|aabb| aabb.id)
            .collect();
        assert_eq!(candidates, expected);
        assert_eq!(found, !expected.is_empty());
        assert!(candidates.iter().all(|i| !collection[*i].is_line()));
    }
}

#[test]
fn collection_pairs_match_brute_force() {
    let mut rng = Rand32::new(7);
    let c0 = random_collection(&mut rng, 40);
    let c1 = random_collection(&mut rng, 40);

    let mut pairs = Vec::new();
    let _ = c0.intersect_collection(&c1, &mut pairs);

    let mut expected = Vec::new();
    for a in c0.aabbs() {
        for b in c1.aabbs() {
            if a.intersects(b) {
                expected.push((a.id, b.id));
            }
        }
    }
    assert_eq!(pairs, expected);

    // The exact test never succeeds on a pair the broad phase dropped.
    for (i, e0) in c0.iter().enumerate() {
        for (j, e1) in c1.iter().enumerate() {
            if e0.is_line() || e1.is_line() || pairs.contains(&(i, j)) {
                continue;
            }
            assert_ne!(intersects(e0, e1, DEFAULT_EPSILON), Ok(true));
        }
    }
}
