use core::fmt;

use crate::bounding_volume::Aabb;
use crate::math::{Affine, Point, Real, Vector};
use crate::shape::{
    Circle, Entity, EntityType, Line, Plane, Ray, Segment, Sphere, Triangle, TypedEntity,
};
use crate::utils;
use either::Either;

/// An owned entity of any type.
///
/// This is what the intersection dispatcher returns: the type of the result
/// depends on the configuration of its inputs (two lines may intersect on a
/// point, on a whole line, or not at all).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone, Default)]
pub enum AnyEntity {
    /// No entity, e.g., the result of a query between two disjoint entities.
    #[default]
    None,
    /// A point.
    Point(Point<Real>),
    /// An infinite line.
    Line(Line),
    /// A half-line.
    Ray(Ray),
    /// An infinite plane.
    Plane(Plane),
    /// A segment.
    Segment(Segment),
    /// A triangle.
    Triangle(Triangle),
    /// A disk.
    Circle(Circle),
    /// A ball.
    Sphere(Sphere),
    /// An axis-aligned bounding box.
    Aabb(Aabb),
}

impl AnyEntity {
    /// The wrapped entity, or `None` for the sentinel.
    pub fn as_entity(&self) -> Option<&dyn Entity> {
        match self {
            AnyEntity::None => None,
            AnyEntity::Point(e) => Some(e),
            AnyEntity::Line(e) => Some(e),
            AnyEntity::Ray(e) => Some(e),
            AnyEntity::Plane(e) => Some(e),
            AnyEntity::Segment(e) => Some(e),
            AnyEntity::Triangle(e) => Some(e),
            AnyEntity::Circle(e) => Some(e),
            AnyEntity::Sphere(e) => Some(e),
            AnyEntity::Aabb(e) => Some(e),
        }
    }

    fn as_entity_mut(&mut self) -> Option<&mut dyn Entity> {
        match self {
            AnyEntity::None => None,
            AnyEntity::Point(e) => Some(e),
            AnyEntity::Line(e) => Some(e),
            AnyEntity::Ray(e) => Some(e),
            AnyEntity::Plane(e) => Some(e),
            AnyEntity::Segment(e) => Some(e),
            AnyEntity::Triangle(e) => Some(e),
            AnyEntity::Circle(e) => Some(e),
            AnyEntity::Sphere(e) => Some(e),
            AnyEntity::Aabb(e) => Some(e),
        }
    }

    /// The wrapped point, if this is one.
    pub fn as_point(&self) -> Option<&Point<Real>> {
        match self {
            AnyEntity::Point(e) => Some(e),
            _ => None,
        }
    }

    /// The wrapped line, if this is one.
    pub fn as_line(&self) -> Option<&Line> {
        match self {
            AnyEntity::Line(e) => Some(e),
            _ => None,
        }
    }

    /// The wrapped ray, if this is one.
    pub fn as_ray(&self) -> Option<&Ray> {
        match self {
            AnyEntity::Ray(e) => Some(e),
            _ => None,
        }
    }

    /// The wrapped plane, if this is one.
    pub fn as_plane(&self) -> Option<&Plane> {
        match self {
            AnyEntity::Plane(e) => Some(e),
            _ => None,
        }
    }

    /// The wrapped segment, if this is one.
    pub fn as_segment(&self) -> Option<&Segment> {
        match self {
            AnyEntity::Segment(e) => Some(e),
            _ => None,
        }
    }

    /// The wrapped triangle, if this is one.
    pub fn as_triangle(&self) -> Option<&Triangle> {
        match self {
            AnyEntity::Triangle(e) => Some(e),
            _ => None,
        }
    }

    /// The wrapped circle, if this is one.
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            AnyEntity::Circle(e) => Some(e),
            _ => None,
        }
    }

    /// The wrapped sphere, if this is one.
    pub fn as_sphere(&self) -> Option<&Sphere> {
        match self {
            AnyEntity::Sphere(e) => Some(e),
            _ => None,
        }
    }

    /// The wrapped box, if this is one.
    pub fn as_aabb(&self) -> Option<&Aabb> {
        match self {
            AnyEntity::Aabb(e) => Some(e),
            _ => None,
        }
    }
}

impl Entity for AnyEntity {
    fn entity_type(&self) -> EntityType {
        self.as_entity()
            .map(|e| e.entity_type())
            .unwrap_or(EntityType::None)
    }

    fn as_typed_entity(&self) -> TypedEntity<'_> {
        self.as_entity()
            .map(|e| e.as_typed_entity())
            .unwrap_or(TypedEntity::None)
    }

    fn translate(&mut self, shift: &Vector<Real>) {
        if let Some(e) = self.as_entity_mut() {
            e.translate(shift)
        }
    }

    fn transform(&mut self, m: &Affine<Real>) {
        if let Some(e) = self.as_entity_mut() {
            e.transform(m)
        }
    }

    /// The `None` sentinel is always degenerate.
    fn is_degenerate(&self, eps: Real) -> bool {
        self.as_entity().map_or(true, |e| e.is_degenerate(eps))
    }
}

impl fmt::Display for AnyEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyEntity::None => f.write_str("none\n"),
            AnyEntity::Point(e) => {
                utils::fmt_vector(f, &e.coords)?;
                f.write_str("\n")
            }
            AnyEntity::Line(e) => fmt::Display::fmt(e, f),
            AnyEntity::Ray(e) => fmt::Display::fmt(e, f),
            AnyEntity::Plane(e) => fmt::Display::fmt(e, f),
            AnyEntity::Segment(e) => fmt::Display::fmt(e, f),
            AnyEntity::Triangle(e) => fmt::Display::fmt(e, f),
            AnyEntity::Circle(e) => fmt::Display::fmt(e, f),
            AnyEntity::Sphere(e) => fmt::Display::fmt(e, f),
            AnyEntity::Aabb(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl From<Point<Real>> for AnyEntity {
    fn from(e: Point<Real>) -> Self {
        AnyEntity::Point(e)
    }
}

impl From<Line> for AnyEntity {
    fn from(e: Line) -> Self {
        AnyEntity::Line(e)
    }
}

impl From<Ray> for AnyEntity {
    fn from(e: Ray) -> Self {
        AnyEntity::Ray(e)
    }
}

impl From<Plane> for AnyEntity {
    fn from(e: Plane) -> Self {
        AnyEntity::Plane(e)
    }
}

impl From<Segment> for AnyEntity {
    fn from(e: Segment) -> Self {
        AnyEntity::Segment(e)
    }
}

impl From<Triangle> for AnyEntity {
    fn from(e: Triangle) -> Self {
        AnyEntity::Triangle(e)
    }
}

impl From<Circle> for AnyEntity {
    fn from(e: Circle) -> Self {
        AnyEntity::Circle(e)
    }
}

impl From<Sphere> for AnyEntity {
    fn from(e: Sphere) -> Self {
        AnyEntity::Sphere(e)
    }
}

impl From<Aabb> for AnyEntity {
    fn from(e: Aabb) -> Self {
        AnyEntity::Aabb(e)
    }
}

impl<L: Into<AnyEntity>, R: Into<AnyEntity>> From<Either<L, R>> for AnyEntity {
    fn from(e: Either<L, R>) -> Self {
        e.either(Into::into, Into::into)
    }
}

impl<T: Into<AnyEntity>> From<Option<T>> for AnyEntity {
    fn from(e: Option<T>) -> Self {
        e.map_or(AnyEntity::None, Into::into)
    }
}
