use crate::bounding_volume::details::point_aabb;
use crate::bounding_volume::Aabb;
use crate::shape::{AnyEntity, Entity, TypedEntity};

impl TypedEntity<'_> {
    /// Computes the local-space Aabb of the referenced entity.
    ///
    /// Returns `None` for lines, rays, planes and the `None` sentinel.
    pub fn local_aabb(&self) -> Option<Aabb> {
        match *self {
            TypedEntity::Point(p) => Some(point_aabb(p)),
            TypedEntity::Segment(s) => Some(s.local_aabb()),
            TypedEntity::Triangle(t) => Some(t.local_aabb()),
            TypedEntity::Circle(c) => Some(c.local_aabb()),
            TypedEntity::Sphere(s) => Some(s.local_aabb()),
            TypedEntity::Aabb(aabb) => Some(Aabb::new(aabb.mins, aabb.maxs)),
            TypedEntity::None | TypedEntity::Line(_) | TypedEntity::Ray(_) | TypedEntity::Plane(_) => {
                None
            }
        }
    }
}

impl AnyEntity {
    /// Computes the local-space Aabb of the wrapped entity, if it is bounded.
    #[inline]
    pub fn local_aabb(&self) -> Option<Aabb> {
        self.as_typed_entity().local_aabb()
    }
}
