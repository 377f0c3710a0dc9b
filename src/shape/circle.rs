//! Definition of the circle (disk) shape.

use core::fmt;

use crate::math::{Affine, Point, Real, Vector};
use crate::shape::{Entity, EntityType, Planar, Plane, TypedEntity};
use crate::utils;

/// A flat disk, defined by its radius and the plane it lies on.
///
/// The center of the disk is the origin of its laying plane.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Circle {
    /// The radius of the disk.
    pub radius: Real,
    /// The plane the disk lies on. Its origin is the disk center.
    pub plane: Plane,
}

impl Circle {
    /// Creates a new disk from its radius and laying plane.
    #[inline]
    pub fn new(radius: Real, plane: Plane) -> Circle {
        Circle { radius, plane }
    }

    /// Creates a new disk from its radius, center and normal.
    #[inline]
    pub fn from_center_normal(radius: Real, center: Point<Real>, normal: Vector<Real>) -> Circle {
        Circle::new(radius, Plane::new(center, normal))
    }

    /// A disk with all its coordinates set to NaN.
    pub fn nan() -> Circle {
        Circle::new(Real::NAN, Plane::nan())
    }

    /// The center of this disk.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.plane.origin
    }

    /// The area of this disk.
    pub fn area(&self) -> Real {
        core::f64::consts::PI * self.radius * self.radius
    }

    /// The perimeter of this disk.
    pub fn perimeter(&self) -> Real {
        2.0 * core::f64::consts::PI * self.radius
    }

    /// Does `pt` lie on this disk (interior included)?
    pub fn is_inside(&self, pt: &Point<Real>, eps: Real) -> bool {
        self.plane.is_inside(pt, eps) && na::distance(pt, &self.center()) <= self.radius + eps
    }

    /// Returns `true` if `self` and `other` have approximately the same radius and plane.
    pub fn is_approx(&self, other: &Circle, eps: Real) -> bool {
        relative_eq!(self.radius, other.radius, epsilon = eps)
            && self.plane.is_approx(&other.plane, eps)
    }
}

impl Planar for Circle {
    fn contains_point(&self, pt: &Point<Real>, eps: Real) -> bool {
        self.is_inside(pt, eps)
    }

    fn laying_plane(&self) -> Plane {
        self.plane
    }

    fn normal(&self) -> Vector<Real> {
        self.plane.normal
    }
}

impl Entity for Circle {
    fn entity_type(&self) -> EntityType {
        EntityType::Circle
    }

    fn as_typed_entity(&self) -> TypedEntity<'_> {
        TypedEntity::Circle(self)
    }

    fn translate(&mut self, shift: &Vector<Real>) {
        self.plane.translate(shift);
    }

    /// The radius is left untouched: only rigid motions keep a disk a disk.
    fn transform(&mut self, m: &Affine<Real>) {
        self.plane.transform(m);
    }

    fn is_degenerate(&self, eps: Real) -> bool {
        !(self.radius.abs() > eps) || self.plane.is_degenerate(eps)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Radius = ")?;
        utils::fmt_real(f, self.radius)?;
        f.write_str("\nCenter = ")?;
        utils::fmt_vector(f, &self.plane.origin.coords)?;
        f.write_str("\nNormal = ")?;
        utils::fmt_vector(f, &self.plane.normal)?;
        f.write_str("\n")
    }
}
