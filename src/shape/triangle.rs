//! Definition of the triangle shape.

use core::fmt;

use crate::math::{Affine, Point, Real, UnitVector, Vector};
use crate::shape::entity::is_non_finite;
use crate::shape::{Entity, EntityType, Planar, Plane, Segment, TypedEntity};
use crate::utils;
use na::Unit;

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// A triangle with all its coordinates set to NaN.
    pub fn nan() -> Triangle {
        let nan = Point::from(Vector::repeat(Real::NAN));
        Triangle::new(nan, nan, nan)
    }

    /// Reference to an array containing the three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The three edges of this triangle: `[AB, BC, CA]`.
    #[inline]
    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }

    /// A vector normal of this triangle.
    ///
    /// The vector points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product). Its norm is twice the area of the triangle.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The normal of this triangle assuming it is oriented ccw.
    ///
    /// Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.scaled_normal(), crate::math::DEFAULT_EPSILON)
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }

    /// The perimeter of this triangle.
    #[inline]
    pub fn perimeter(&self) -> Real {
        na::distance(&self.a, &self.b)
            + na::distance(&self.b, &self.c)
            + na::distance(&self.c, &self.a)
    }

    /// The geometric center of this triangle.
    #[inline]
    pub fn centroid(&self) -> Point<Real> {
        utils::center(&self.vertices()).unwrap_or(self.a)
    }

    /// The barycentric coordinates `[u, v, w]` of the projection of `pt` on the
    /// plane of this triangle, such that the projection is `u * a + v * b + w * c`.
    pub fn barycentric_coordinates(&self, pt: &Point<Real>) -> [Real; 3] {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let ap = pt - self.a;
        let d00 = ab.dot(&ab);
        let d01 = ab.dot(&ac);
        let d11 = ac.dot(&ac);
        let d20 = ap.dot(&ab);
        let d21 = ap.dot(&ac);
        let denom = d00 * d11 - d01 * d01;
        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        [1.0 - v - w, v, w]
    }

    /// Does `pt` lie on this triangle (boundary included)?
    pub fn is_inside(&self, pt: &Point<Real>, eps: Real) -> bool {
        if !self.laying_plane().is_inside(pt, eps) {
            return false;
        }

        self.barycentric_coordinates(pt)
            .iter()
            .all(|x| *x >= -eps && *x <= 1.0 + eps)
    }

    /// Returns `true` if the three vertices of `self` and `other` approximately match, in order.
    pub fn is_approx(&self, other: &Triangle, eps: Real) -> bool {
        relative_eq!(self.a, other.a, epsilon = eps)
            && relative_eq!(self.b, other.b, epsilon = eps)
            && relative_eq!(self.c, other.c, epsilon = eps)
    }
}

impl Planar for Triangle {
    fn contains_point(&self, pt: &Point<Real>, eps: Real) -> bool {
        self.is_inside(pt, eps)
    }

    fn laying_plane(&self) -> Plane {
        let normal = self
            .normal()
            .map(|n| n.into_inner())
            .unwrap_or_else(|| self.scaled_normal());
        Plane::new(self.a, normal)
    }
}

impl Entity for Triangle {
    fn entity_type(&self) -> EntityType {
        EntityType::Triangle
    }

    fn as_typed_entity(&self) -> TypedEntity<'_> {
        TypedEntity::Triangle(self)
    }

    fn translate(&mut self, shift: &Vector<Real>) {
        self.a += shift;
        self.b += shift;
        self.c += shift;
    }

    fn transform(&mut self, m: &Affine<Real>) {
        self.a = m.transform_point(&self.a);
        self.b = m.transform_point(&self.b);
        self.c = m.transform_point(&self.c);
    }

    fn is_degenerate(&self, eps: Real) -> bool {
        self.vertices().iter().any(|p| is_non_finite(&p.coords))
            || !(self.scaled_normal().norm() > eps)
    }
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Triangle::new(arr[0], arr[1], arr[2])
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pt) in self.vertices().iter().enumerate() {
            write!(f, "Vertex {i} = ")?;
            utils::fmt_vector(f, &pt.coords)?;
            f.write_str("\n")?;
        }
        Ok(())
    }
}
