use crate::bounding_volume::Aabb;
use crate::math::Vector;
use crate::shape::Circle;

impl Circle {
    /// Computes the local-space Aabb of this disk.
    ///
    /// Along the axis `i`, the disk spreads over `radius * sqrt(1 - n_i²)` on both sides of
    /// its center, where `n` is its unit normal.
    pub fn local_aabb(&self) -> Aabb {
        let n = self.plane.normalized_normal();
        let r = self.radius.abs();
        let half_extents = Vector::from_fn(|i, _| r * (1.0 - n[i] * n[i]).max(0.0).sqrt());
        Aabb::from_half_extents(self.center(), half_extents)
    }
}
