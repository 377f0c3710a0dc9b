use crate::math::{approx_zero, Real};
use crate::query::relation::{is_orthogonal_vectors, is_parallel_vectors, ordered_geometries, Geometry};
use crate::shape::{Entity, Linear, Planar};

/// Do both linear entities lie on a common plane?
///
/// This is the case iff `(oA − oB)` is orthogonal to `dA × dB`. Parallel entities are always
/// coplanar.
pub fn is_coplanar_linear_linear<A, B>(a: &A, b: &B, eps: Real) -> bool
where
    A: Linear + ?Sized,
    B: Linear + ?Sized,
{
    let normal = a.direction().cross(&b.direction());
    is_orthogonal_vectors(&(a.origin() - b.origin()), &normal, eps)
}

/// Does the linear entity `l` lie on the plane of `p`?
pub fn is_coplanar_linear_planar<L, P>(l: &L, p: &P, eps: Real) -> bool
where
    L: Linear + ?Sized,
    P: Planar + ?Sized,
{
    let plane = p.laying_plane();
    is_orthogonal_vectors(&l.direction(), &plane.normal, eps)
        && approx_zero(plane.signed_distance(&l.origin()), eps)
}

/// Do both planar entities lie on the same plane?
///
/// Normals must be parallel and each origin must lie on the other plane.
pub fn is_coplanar_planar_planar<A, B>(a: &A, b: &B, eps: Real) -> bool
where
    A: Planar + ?Sized,
    B: Planar + ?Sized,
{
    let pa = a.laying_plane();
    let pb = b.laying_plane();
    is_parallel_vectors(&pa.normal, &pb.normal, eps)
        && pa.is_inside(&pb.origin, eps)
        && pb.is_inside(&pa.origin, eps)
}

/// Are the two entities coplanar?
///
/// Handles every pair of lines, rays, segments, planes, triangles and circles. Every other pair
/// returns `false`.
pub fn is_coplanar(e1: &dyn Entity, e2: &dyn Entity, eps: Real) -> bool {
    match ordered_geometries(e1, e2) {
        (Geometry::Linear(a), Geometry::Linear(b)) => is_coplanar_linear_linear(a, b, eps),
        (Geometry::Linear(l), Geometry::Planar(p)) | (Geometry::Planar(p), Geometry::Linear(l)) => {
            is_coplanar_linear_planar(l, p, eps)
        }
        (Geometry::Planar(a), Geometry::Planar(b)) => is_coplanar_planar_planar(a, b, eps),
        _ => false,
    }
}
