//! Definition of the ray (half-line).

use core::fmt;

use crate::math::{Affine, Point, Real, UnitVector, Vector};
use crate::shape::entity::is_non_finite;
use crate::shape::{Entity, EntityType, Line, Linear, TypedEntity};
use crate::utils;
use na::Unit;

/// A half-line starting at `origin` and extending along `dir`.
///
/// The ray is the set of points `origin + dir * t` for `t >= 0`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction of the ray. Not necessarily normalized.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray starting from `origin` and with the direction `dir`.
    #[inline]
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// A ray with all its coordinates set to NaN.
    pub fn nan() -> Ray {
        Ray::new(
            Point::from(Vector::repeat(Real::NAN)),
            Vector::repeat(Real::NAN),
        )
    }

    /// Computes the point at the given parameter on this ray.
    ///
    /// This is computed with `self.origin + self.dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }

    /// The normalized direction of this ray, or `None` if it is degenerate.
    pub fn unit_direction(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.dir, crate::math::DEFAULT_EPSILON)
    }

    /// The parameter of the projection of `pt` on the line supporting this ray.
    ///
    /// This is scaled by the direction length: `point_at(param)` is the
    /// projection.
    pub fn project_param(&self, pt: &Point<Real>) -> Real {
        (pt - self.origin).dot(&self.dir) / self.dir.norm_squared()
    }

    /// Does `pt` lie on this ray?
    ///
    /// Points lying on the supporting line but behind the origin are not
    /// part of the ray.
    pub fn is_inside(&self, pt: &Point<Real>, eps: Real) -> bool {
        let Some(dir) = self.unit_direction() else {
            return false;
        };
        let diff = pt - self.origin;
        dir.cross(&diff).norm() <= eps && dir.dot(&diff) >= -eps
    }

    /// Returns `true` if `self` and `other` have approximately the same origin and direction.
    pub fn is_approx(&self, other: &Ray, eps: Real) -> bool {
        relative_eq!(self.origin, other.origin, epsilon = eps)
            && relative_eq!(self.dir, other.dir, epsilon = eps)
    }

    /// The same ray, pointing the other way.
    pub fn reversed(&self) -> Ray {
        Ray::new(self.origin, -self.dir)
    }

    /// Normalizes the direction of this ray in-place.
    pub fn normalize(&mut self) {
        let _ = self.dir.try_normalize_mut(crate::math::DEFAULT_EPSILON);
    }
}

impl Linear for Ray {
    fn contains_point(&self, pt: &Point<Real>, eps: Real) -> bool {
        self.is_inside(pt, eps)
    }

    fn origin(&self) -> Point<Real> {
        self.origin
    }

    fn direction(&self) -> Vector<Real> {
        self.dir
    }

    fn to_line(&self) -> Line {
        Line::new(self.origin, self.dir)
    }
}

impl Entity for Ray {
    fn entity_type(&self) -> EntityType {
        EntityType::Ray
    }

    fn as_typed_entity(&self) -> TypedEntity<'_> {
        TypedEntity::Ray(self)
    }

    fn translate(&mut self, shift: &Vector<Real>) {
        self.origin += shift;
    }

    fn transform(&mut self, m: &Affine<Real>) {
        self.origin = m.transform_point(&self.origin);
        self.dir = m.transform_vector(&self.dir);
    }

    fn is_degenerate(&self, eps: Real) -> bool {
        is_non_finite(&self.origin.coords) || !(self.dir.norm() > eps)
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Origin    = ")?;
        utils::fmt_vector(f, &self.origin.coords)?;
        f.write_str("\nDirection = ")?;
        utils::fmt_vector(f, &self.dir)?;
        f.write_str("\n")
    }
}

#[cfg(test)]
mod test {
    use super::Ray;
    use crate::math::{Point, Vector, DEFAULT_EPSILON};

    #[test]
    fn ray_excludes_points_behind_its_origin() {
        let ray = Ray::new(Point::new(0.0, 0.0, 1.0), Vector::new(0.0, 0.0, 3.0));
        assert!(ray.is_inside(&Point::new(0.0, 0.0, 1.0), DEFAULT_EPSILON));
        assert!(ray.is_inside(&Point::new(0.0, 0.0, 10.0), DEFAULT_EPSILON));
        assert!(!ray.is_inside(&Point::new(0.0, 0.0, 0.5), DEFAULT_EPSILON));
        assert!(ray.reversed().is_inside(&Point::new(0.0, 0.0, 0.5), DEFAULT_EPSILON));
    }
}
