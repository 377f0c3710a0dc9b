//! Points as entities.

use crate::math::{Affine, Point, Real, Vector};
use crate::shape::entity::is_non_finite;
use crate::shape::{Entity, EntityType, TypedEntity};

impl Entity for Point<Real> {
    fn entity_type(&self) -> EntityType {
        EntityType::Point
    }

    fn as_typed_entity(&self) -> TypedEntity<'_> {
        TypedEntity::Point(self)
    }

    fn translate(&mut self, shift: &Vector<Real>) {
        *self += shift;
    }

    fn transform(&mut self, m: &Affine<Real>) {
        *self = m.transform_point(self);
    }

    /// A point is degenerate only when one of its coordinates is not finite.
    fn is_degenerate(&self, _eps: Real) -> bool {
        is_non_finite(&self.coords)
    }
}

/// A point with all its coordinates set to NaN.
pub fn nan_point() -> Point<Real> {
    Point::from(Vector::repeat(Real::NAN))
}
