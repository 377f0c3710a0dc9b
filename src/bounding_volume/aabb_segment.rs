use crate::bounding_volume::details::local_point_cloud_aabb;
use crate::bounding_volume::Aabb;
use crate::shape::Segment;

impl Segment {
    /// Computes the local-space [`Aabb`] of this segment.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        local_point_cloud_aabb(&[self.a, self.b])
    }
}
