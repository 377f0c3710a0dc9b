//! Definition of the sphere (ball) shape.

use core::fmt;

use crate::math::{Affine, Point, Real, Vector};
use crate::shape::entity::is_non_finite;
use crate::shape::{Entity, EntityType, TypedEntity};
use crate::utils;

/// A solid ball.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Sphere {
    /// The center of the ball.
    pub center: Point<Real>,
    /// The radius of the ball.
    pub radius: Real,
}

impl Sphere {
    /// Creates a new ball from its center and radius.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Sphere {
        Sphere { center, radius }
    }

    /// A ball with all its coordinates set to NaN.
    pub fn nan() -> Sphere {
        Sphere::new(Point::from(Vector::repeat(Real::NAN)), Real::NAN)
    }

    /// The area of the boundary of this ball.
    pub fn area(&self) -> Real {
        4.0 * core::f64::consts::PI * self.radius * self.radius
    }

    /// The volume of this ball.
    pub fn volume(&self) -> Real {
        4.0 / 3.0 * core::f64::consts::PI * self.radius * self.radius * self.radius
    }

    /// Does `pt` lie in this ball (boundary included)?
    pub fn is_inside(&self, pt: &Point<Real>, eps: Real) -> bool {
        na::distance(pt, &self.center) <= self.radius + eps
    }

    /// The point of this ball closest to `pt`; `pt` itself if it is inside.
    pub fn clamp_point(&self, pt: &Point<Real>) -> Point<Real> {
        let diff = pt - self.center;
        let dist = diff.norm();
        if dist <= self.radius {
            *pt
        } else {
            self.center + diff * (self.radius / dist)
        }
    }

    /// Returns `true` if `self` and `other` have approximately the same center and radius.
    pub fn is_approx(&self, other: &Sphere, eps: Real) -> bool {
        relative_eq!(self.center, other.center, epsilon = eps)
            && relative_eq!(self.radius, other.radius, epsilon = eps)
    }
}

impl Entity for Sphere {
    fn entity_type(&self) -> EntityType {
        EntityType::Sphere
    }

    fn as_typed_entity(&self) -> TypedEntity<'_> {
        TypedEntity::Sphere(self)
    }

    fn translate(&mut self, shift: &Vector<Real>) {
        self.center += shift;
    }

    /// The radius is scaled by the mean scaling factor of the linear part of `m`.
    fn transform(&mut self, m: &Affine<Real>) {
        let det = m.matrix().fixed_view::<3, 3>(0, 0).clone_owned().determinant();
        self.center = m.transform_point(&self.center);
        self.radius *= det.abs().cbrt();
    }

    fn is_degenerate(&self, eps: Real) -> bool {
        is_non_finite(&self.center.coords) || !(self.radius.abs() > eps)
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Radius = ")?;
        utils::fmt_real(f, self.radius)?;
        f.write_str("\nCenter = ")?;
        utils::fmt_vector(f, &self.center.coords)?;
        f.write_str("\n")
    }
}
