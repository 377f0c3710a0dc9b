use arrayvec::ArrayVec;

use crate::math::{Point, Real};

/// Pushes `pt` into `pts` unless a point within `eps` of it is already there.
///
/// Returns `false` if `pt` was a duplicate or if `pts` is full.
pub fn push_distinct<const N: usize>(
    pts: &mut ArrayVec<Point<Real>, N>,
    pt: Point<Real>,
    eps: Real,
) -> bool {
    if pts.iter().any(|p| na::distance(p, &pt) <= eps) {
        return false;
    }

    pts.try_push(pt).is_ok()
}
