use crate::bounding_volume::Aabb;

/// Intersection between two Aabbs.
///
/// Returns `None` unless both boxes overlap on every axis. Touching boxes
/// yield a flat box. Boxes with NaN corners overlap nothing.
#[inline]
pub fn intersection_aabb_aabb(a: &Aabb, b: &Aabb) -> Option<Aabb> {
    a.intersection(b)
}
