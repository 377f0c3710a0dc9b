use crate::bounding_volume::details::local_point_cloud_aabb;
use crate::bounding_volume::Aabb;
use crate::shape::Triangle;

impl Triangle {
    /// Computes the local-space [`Aabb`] of this triangle.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        local_point_cloud_aabb(&self.vertices())
    }
}
