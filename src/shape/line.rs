//! Definition of the infinite line.

use core::fmt;

use crate::math::{Affine, Point, Real, UnitVector, Vector};
use crate::shape::entity::is_non_finite;
use crate::shape::{Entity, EntityType, Linear, TypedEntity};
use crate::utils;
use na::Unit;

/// An infinite line, passing through `origin` and extending along `dir`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Line {
    /// A point of the line.
    pub origin: Point<Real>,
    /// The direction of the line. Not necessarily normalized.
    pub dir: Vector<Real>,
}

impl Line {
    /// Creates a new line from a point and a direction.
    #[inline]
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Line {
        Line { origin, dir }
    }

    /// Creates the line passing through `a` and `b`.
    #[inline]
    pub fn through(a: Point<Real>, b: Point<Real>) -> Line {
        Line::new(a, b - a)
    }

    /// A line with all its coordinates set to NaN.
    pub fn nan() -> Line {
        Line::new(
            Point::from(Vector::repeat(Real::NAN)),
            Vector::repeat(Real::NAN),
        )
    }

    /// The point at parameter `t`, i.e., `origin + dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }

    /// The normalized direction of this line, or `None` if it is degenerate.
    pub fn unit_direction(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.dir, crate::math::DEFAULT_EPSILON)
    }

    /// Does `pt` lie on this line?
    pub fn is_inside(&self, pt: &Point<Real>, eps: Real) -> bool {
        let Some(dir) = self.unit_direction() else {
            return false;
        };
        dir.cross(&(pt - self.origin)).norm() <= eps
    }

    /// Returns `true` if `self` and `other` have approximately the same origin and direction.
    pub fn is_approx(&self, other: &Line, eps: Real) -> bool {
        relative_eq!(self.origin, other.origin, epsilon = eps)
            && relative_eq!(self.dir, other.dir, epsilon = eps)
    }

    /// Normalizes the direction of this line in-place.
    pub fn normalize(&mut self) {
        let _ = self.dir.try_normalize_mut(crate::math::DEFAULT_EPSILON);
    }
}

impl Linear for Line {
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
        *self
    }
}

impl Entity for Line {
    fn entity_type(&self) -> EntityType {
        EntityType::Line
    }

    fn as_typed_entity(&self) -> TypedEntity<'_> {
        TypedEntity::Line(self)
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

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Origin    = ")?;
        utils::fmt_vector(f, &self.origin.coords)?;
        f.write_str("\nDirection = ")?;
        utils::fmt_vector(f, &self.dir)?;
        f.write_str("\n")
    }
}
