use crate::math::{Real, Vector};
use crate::query::relation::{is_parallel_vectors, ordered_geometries, Geometry};
use crate::shape::{Entity, Linear, Planar};

/// Are `v` and `u` orthogonal, i.e., is `|v · u| ≤ eps`?
#[inline]
pub fn is_orthogonal_vectors(v: &Vector<Real>, u: &Vector<Real>, eps: Real) -> bool {
    v.dot(u).abs() <= eps
}

/// Do both linear entities have orthogonal directions?
pub fn is_orthogonal_linear_linear<A, B>(a: &A, b: &B, eps: Real) -> bool
where
    A: Linear + ?Sized,
    B: Linear + ?Sized,
{
    is_orthogonal_vectors(&a.direction(), &b.direction(), eps)
}

/// Is the direction of `l` parallel to the normal of `p`?
pub fn is_orthogonal_linear_planar<L, P>(l: &L, p: &P, eps: Real) -> bool
where
    L: Linear + ?Sized,
    P: Planar + ?Sized,
{
    is_parallel_vectors(&l.direction(), &p.normal(), eps)
}

/// Do both planar entities have orthogonal normals?
pub fn is_orthogonal_planar_planar<A, B>(a: &A, b: &B, eps: Real) -> bool
where
    A: Planar + ?Sized,
    B: Planar + ?Sized,
{
    is_orthogonal_vectors(&a.normal(), &b.normal(), eps)
}

/// Are the two entities orthogonal?
///
/// Points are taken as vectors. Returns `false` if either entity is a sphere, a box, or `None`.
pub fn is_orthogonal(e1: &dyn Entity, e2: &dyn Entity, eps: Real) -> bool {
    match ordered_geometries(e1, e2) {
        (Geometry::Vector(v), Geometry::Vector(u)) => is_orthogonal_vectors(&v, &u, eps),
        (Geometry::Vector(v), Geometry::Linear(l)) => {
            is_orthogonal_vectors(&v, &l.direction(), eps)
        }
        (Geometry::Vector(v), Geometry::Planar(p)) => is_parallel_vectors(&v, &p.normal(), eps),
        (Geometry::Linear(a), Geometry::Linear(b)) => is_orthogonal_linear_linear(a, b, eps),
        (Geometry::Linear(l), Geometry::Planar(p)) | (Geometry::Planar(p), Geometry::Linear(l)) => {
            is_orthogonal_linear_planar(l, p, eps)
        }
        (Geometry::Planar(a), Geometry::Planar(b)) => is_orthogonal_planar_planar(a, b, eps),
        _ => false,
    }
}
