use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::Sphere;

/// Computes the Axis-Aligned Bounding Box of a ball of the given center and radius.
#[inline]
pub fn sphere_aabb(center: &Point<Real>, radius: Real) -> Aabb {
    Aabb::from_half_extents(*center, Vector::repeat(radius.abs()))
}

impl Sphere {
    /// Computes the local-space Aabb of this ball.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        sphere_aabb(&self.center, self.radius)
    }
}
