//! Relative positions of two entities: parallelism, orthogonality, collinearity and coplanarity.
//!
//! Every predicate comes in three flavors:
//!
//! * a vector form, e.g., [`is_parallel_vectors`], acting on raw directions;
//! * per-pair forms, generic over the [`Linear`] and [`Planar`] traits, e.g.,
//!   [`is_parallel_linear_planar`];
//! * a polymorphic form, e.g., [`is_parallel`], taking two `&dyn Entity`. It returns `false` for
//!   every pair it does not handle.
//!
//! All the predicates are symmetric.

pub use self::collinear::{is_collinear, is_collinear_linear_linear};
pub use self::coplanar::{
    is_coplanar, is_coplanar_linear_linear, is_coplanar_linear_planar, is_coplanar_planar_planar,
};
pub use self::orthogonal::{
    is_orthogonal, is_orthogonal_linear_linear, is_orthogonal_linear_planar,
    is_orthogonal_planar_planar, is_orthogonal_vectors,
};
pub use self::parallel::{
    is_parallel, is_parallel_linear_linear, is_parallel_linear_planar, is_parallel_planar_planar,
    is_parallel_vectors,
};

mod collinear;
mod coplanar;
mod orthogonal;
mod parallel;

use crate::math::{Real, Vector};
use crate::shape::{Entity, Linear, Planar, TypedEntity};

/// The geometric structure of an entity, as seen by the relation predicates.
#[derive(Copy, Clone)]
enum Geometry<'a> {
    /// A point, taken as the vector from the origin.
    Vector(Vector<Real>),
    Linear(&'a dyn Linear),
    Planar(&'a dyn Planar),
    /// Spheres, boxes and the `None` sentinel.
    Other,
}

impl<'a> Geometry<'a> {
    fn of(entity: TypedEntity<'a>) -> Self {
        if let TypedEntity::Point(p) = entity {
            return Geometry::Vector(p.coords);
        }

        entity
            .as_linear()
            .map(Geometry::Linear)
            .or_else(|| entity.as_planar().map(Geometry::Planar))
            .unwrap_or(Geometry::Other)
    }
}

/// The two entities, lowest rank first.
pub(crate) fn ordered_pair<'a>(
    e1: &'a dyn Entity,
    e2: &'a dyn Entity,
) -> (TypedEntity<'a>, TypedEntity<'a>) {
    let (t1, t2) = (e1.as_typed_entity(), e2.as_typed_entity());
    if t1.entity_type().rank() > t2.entity_type().rank() {
        (t2, t1)
    } else {
        (t1, t2)
    }
}

fn ordered_geometries<'a>(e1: &'a dyn Entity, e2: &'a dyn Entity) -> (Geometry<'a>, Geometry<'a>) {
    let (t1, t2) = ordered_pair(e1, e2);
    (Geometry::of(t1), Geometry::of(t2))
}
