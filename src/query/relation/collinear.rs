use crate::math::Real;
use crate::query::relation::{is_parallel_vectors, ordered_geometries, Geometry};
use crate::shape::{Entity, Linear};

/// Do both linear entities lie on the same infinite line?
///
/// Both directions must be parallel to each other and to the vector joining the two origins.
/// Directions are normalized first, so `eps` is a distance between the supporting lines.
pub fn is_collinear_linear_linear<A, B>(a: &A, b: &B, eps: Real) -> bool
where
    A: Linear + ?Sized,
    B: Linear + ?Sized,
{
    let da = a.direction().normalize();
    let db = b.direction().normalize();
    let diff = a.origin() - b.origin();

    is_parallel_vectors(&da, &db, eps)
        && is_parallel_vectors(&da, &diff, eps)
        && is_parallel_vectors(&db, &diff, eps)
}

/// Are the two entities collinear?
///
/// Only lines, rays and segments can be collinear: every other pair returns `false`.
pub fn is_collinear(e1: &dyn Entity, e2: &dyn Entity, eps: Real) -> bool {
    match ordered_geometries(e1, e2) {
        (Geometry::Linear(a), Geometry::Linear(b)) => is_collinear_linear_linear(a, b, eps),
        _ => false,
    }
}
