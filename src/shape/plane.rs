//! Definition of the infinite plane.

use core::fmt;

use crate::math::{Affine, Point, Real, UnitVector, Vector};
use crate::shape::entity::is_non_finite;
use crate::shape::{Entity, EntityType, Planar, TypedEntity};
use crate::utils;
use na::Unit;

/// An infinite plane passing through `origin` with the normal `normal`.
///
/// The normal does not have to be normalized: every distance computed by this
/// type is measured along the unit normal.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Plane {
    /// A point of the plane.
    pub origin: Point<Real>,
    /// The normal of the plane.
    pub normal: Vector<Real>,
}

impl Plane {
    /// Builds a new plane from a point and a normal.
    #[inline]
    pub fn new(origin: Point<Real>, normal: Vector<Real>) -> Plane {
        Plane { origin, normal }
    }

    /// A plane with all its coordinates set to NaN.
    pub fn nan() -> Plane {
        Plane::new(
            Point::from(Vector::repeat(Real::NAN)),
            Vector::repeat(Real::NAN),
        )
    }

    /// The normalized normal of this plane, or `None` if it is degenerate.
    pub fn unit_normal(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.normal, crate::math::DEFAULT_EPSILON)
    }

    /// The unit normal, or the raw normal if it is too small to be normalized.
    #[inline]
    pub(crate) fn normalized_normal(&self) -> Vector<Real> {
        self.unit_normal()
            .map(|n| n.into_inner())
            .unwrap_or(self.normal)
    }

    /// The `d` coefficient of the plane equation `n·x + d = 0`, with `n` the unit normal.
    pub fn offset(&self) -> Real {
        -self.origin.coords.dot(&self.normalized_normal())
    }

    /// The signed distance from `pt` to this plane, positive on the side the normal points to.
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        (pt - self.origin).dot(&self.normalized_normal())
    }

    /// The unsigned distance from `pt` to this plane.
    pub fn distance(&self, pt: &Point<Real>) -> Real {
        self.signed_distance(pt).abs()
    }

    /// The orthogonal projection of `pt` on this plane.
    pub fn project_point(&self, pt: &Point<Real>) -> Point<Real> {
        pt - self.normalized_normal() * self.signed_distance(pt)
    }

    /// Does `pt` lie on this plane?
    pub fn is_inside(&self, pt: &Point<Real>, eps: Real) -> bool {
        self.distance(pt) <= eps
    }

    /// The same plane with its normal flipped.
    pub fn reversed(&self) -> Plane {
        Plane::new(self.origin, -self.normal)
    }

    /// Returns `true` if `self` and `other` have approximately the same origin and normal.
    pub fn is_approx(&self, other: &Plane, eps: Real) -> bool {
        relative_eq!(self.origin, other.origin, epsilon = eps)
            && relative_eq!(self.normal, other.normal, epsilon = eps)
    }

    /// Normalizes the normal of this plane in-place.
    pub fn normalize(&mut self) {
        let _ = self.normal.try_normalize_mut(crate::math::DEFAULT_EPSILON);
    }
}

impl Planar for Plane {
    fn contains_point(&self, pt: &Point<Real>, eps: Real) -> bool {
        self.is_inside(pt, eps)
    }

    fn laying_plane(&self) -> Plane {
        *self
    }

    fn normal(&self) -> Vector<Real> {
        self.normal
    }
}

impl Entity for Plane {
    fn entity_type(&self) -> EntityType {
        EntityType::Plane
    }

    fn as_typed_entity(&self) -> TypedEntity<'_> {
        TypedEntity::Plane(self)
    }

    fn translate(&mut self, shift: &Vector<Real>) {
        self.origin += shift;
    }

    /// Normals are mapped by the linear part of `m`, which is exact for
    /// rigid motions and uniform scalings.
    fn transform(&mut self, m: &Affine<Real>) {
        self.origin = m.transform_point(&self.origin);
        self.normal = m.transform_vector(&self.normal);
    }

    fn is_degenerate(&self, eps: Real) -> bool {
        is_non_finite(&self.origin.coords) || !(self.normal.norm() > eps)
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Origin = ")?;
        utils::fmt_vector(f, &self.origin.coords)?;
        f.write_str("\nNormal = ")?;
        utils::fmt_vector(f, &self.normal)?;
        f.write_str("\n")
    }
}
