use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};

/// Computes the flat Aabb of a single point.
#[inline]
pub fn point_aabb(pt: &Point<Real>) -> Aabb {
    Aabb::new(*pt, *pt)
}

/// Computes the Aabb of a set of points.
///
/// Returns an invalid (inverted) Aabb if `pts` is empty.
pub fn local_point_cloud_aabb<'a, I>(pts: I) -> Aabb
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    let mut it = pts.into_iter();
    let Some(first) = it.next() else {
        return Aabb::new_invalid();
    };

    let mut min: Point<Real> = *first;
    let mut max: Point<Real> = *first;

    for pt in it {
        min = min.inf(pt);
        max = max.sup(pt);
    }

    Aabb::new(min, max)
}
