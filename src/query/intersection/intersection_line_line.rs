use crate::math::{Point, Real};
use crate::shape::{Line, Linear};

/// Intersection point between two coplanar lines.
///
/// With `a = v × u` (`v` and `u` being the normalized line directions), returns
/// `None` if `a · a ≤ eps`, i.e., if the lines are parallel, or if one of the
/// lines has a zero direction. The lines are assumed coplanar: for skew lines,
/// the returned point is the point of `l0` closest to `l1`.
pub fn intersection_line_line(l0: &Line, l1: &Line, eps: Real) -> Option<Point<Real>> {
    let v = l0.dir.try_normalize(0.0)?;
    let u = l1.dir.try_normalize(0.0)?;
    let a = v.cross(&u);
    let aa = a.dot(&a);

    if !(aa > eps) {
        return None;
    }

    let t = (l1.origin - l0.origin).cross(&u).dot(&a) / aa;
    Some(l0.origin + v * t)
}

/// Intersection point between two coplanar, non-collinear, linear entities.
///
/// Intersects their supporting lines, then keeps the point only if it lies on
/// both entities.
pub fn coplanar_intersection_linear_linear<A, B>(a: &A, b: &B, eps: Real) -> Option<Point<Real>>
where
    A: Linear + ?Sized,
    B: Linear + ?Sized,
{
    let pt = intersection_line_line(&a.to_line(), &b.to_line(), eps)?;
    (a.contains_point(&pt, eps) && b.contains_point(&pt, eps)).then_some(pt)
}
