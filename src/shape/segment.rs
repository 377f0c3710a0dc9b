//! Definition of the segment shape.

use core::fmt;
use core::mem;

use crate::math::{Affine, Point, Real, UnitVector, Vector};
use crate::shape::{Entity, EntityType, Line, Linear, TypedEntity};
use crate::utils;
use na::{self, Unit};

/// A segment shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// A segment with all its coordinates set to NaN.
    pub fn nan() -> Segment {
        let nan = Point::from(Vector::repeat(Real::NAN));
        Segment::new(nan, nan)
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// Swaps the two vertices of this segment.
    pub fn swap(&mut self) {
        mem::swap(&mut self.a, &mut self.b)
    }

    /// The unit direction of this segment.
    ///
    /// Points from `self.a` toward `self.b`.
    /// Returns `None` is both points are equal.
    pub fn direction(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.scaled_direction(), crate::math::DEFAULT_EPSILON)
    }

    /// The middle point of this segment.
    pub fn centroid(&self) -> Point<Real> {
        na::center(&self.a, &self.b)
    }

    /// The point at parameter `t`, `a` for `t = 0` and `b` for `t = 1`.
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.a + self.scaled_direction() * t
    }

    /// Does `pt` lie on this segment?
    ///
    /// This compares the segment length with the sum of the distances from
    /// `pt` to both endpoints.
    pub fn is_inside(&self, pt: &Point<Real>, eps: Real) -> bool {
        let sum = na::distance(pt, &self.a) + na::distance(pt, &self.b);
        (self.length() - sum).abs() <= eps
    }

    /// Returns `true` if both endpoints of `self` and `other` approximately match, in order.
    pub fn is_approx(&self, other: &Segment, eps: Real) -> bool {
        relative_eq!(self.a, other.a, epsilon = eps) && relative_eq!(self.b, other.b, epsilon = eps)
    }

    /// Returns `true` if both endpoints approximately match, in any order.
    pub fn is_approx_unordered(&self, other: &Segment, eps: Real) -> bool {
        self.is_approx(other, eps) || self.is_approx(&Segment::new(other.b, other.a), eps)
    }
}

impl Linear for Segment {
    fn contains_point(&self, pt: &Point<Real>, eps: Real) -> bool {
        self.is_inside(pt, eps)
    }

    fn origin(&self) -> Point<Real> {
        self.a
    }

    fn direction(&self) -> Vector<Real> {
        self.scaled_direction().normalize()
    }

    fn to_line(&self) -> Line {
        Line::through(self.a, self.b)
    }
}

impl Entity for Segment {
    fn entity_type(&self) -> EntityType {
        EntityType::Segment
    }

    fn as_typed_entity(&self) -> TypedEntity<'_> {
        TypedEntity::Segment(self)
    }

    fn translate(&mut self, shift: &Vector<Real>) {
        self.a += shift;
        self.b += shift;
    }

    fn transform(&mut self, m: &Affine<Real>) {
        self.a = m.transform_point(&self.a);
        self.b = m.transform_point(&self.b);
    }

    fn is_degenerate(&self, eps: Real) -> bool {
        !(self.length() > eps)
    }
}

impl From<[Point<Real>; 2]> for Segment {
    fn from(arr: [Point<Real>; 2]) -> Self {
        Segment::new(arr[0], arr[1])
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Vertex 0 = ")?;
        utils::fmt_vector(f, &self.a.coords)?;
        f.write_str("\nVertex 1 = ")?;
        utils::fmt_vector(f, &self.b.coords)?;
        f.write_str("\n")
    }
}
