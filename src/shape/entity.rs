use core::fmt;

use crate::bounding_volume::Aabb;
use crate::math::{Affine, Point, Real, Vector};
use crate::shape::{Circle, Line, Plane, Ray, Segment, Sphere, Triangle};
use downcast_rs::{impl_downcast, DowncastSync};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// Enum representing the type of an entity.
pub enum EntityType {
    /// The "no entity" sentinel.
    None,
    /// A point.
    Point,
    /// An infinite line.
    Line,
    /// A half-line.
    Ray,
    /// An infinite plane.
    Plane,
    /// A segment.
    Segment,
    /// A triangle.
    Triangle,
    /// A disk.
    Circle,
    /// A ball.
    Sphere,
    /// An axis-aligned bounding box.
    Aabb,
}

impl EntityType {
    /// All the entity types, sorted by rank.
    pub const ALL: [EntityType; 10] = [
        EntityType::None,
        EntityType::Point,
        EntityType::Line,
        EntityType::Ray,
        EntityType::Plane,
        EntityType::Segment,
        EntityType::Triangle,
        EntityType::Circle,
        EntityType::Sphere,
        EntityType::Aabb,
    ];

    /// The rank used to order the two arguments of a pairwise query.
    ///
    /// Pairwise queries are implemented for the "lowest rank first" order
    /// only, the other order is obtained by swapping the arguments.
    pub fn rank(self) -> u8 {
        match self {
            EntityType::None => 0,
            EntityType::Point => 2,
            EntityType::Line => 3,
            EntityType::Ray => 4,
            EntityType::Plane => 5,
            EntityType::Segment => 6,
            EntityType::Triangle => 7,
            EntityType::Circle => 8,
            EntityType::Sphere | EntityType::Aabb => 9,
        }
    }

    /// The lowercase name of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::None => "none",
            EntityType::Point => "point",
            EntityType::Line => "line",
            EntityType::Ray => "ray",
            EntityType::Plane => "plane",
            EntityType::Segment => "segment",
            EntityType::Triangle => "triangle",
            EntityType::Circle => "circle",
            EntityType::Sphere => "sphere",
            EntityType::Aabb => "aabb",
        }
    }

    /// Is this a line, a ray or a segment?
    pub fn is_linear(self) -> bool {
        matches!(
            self,
            EntityType::Line | EntityType::Ray | EntityType::Segment
        )
    }

    /// Is this a plane, a triangle or a circle?
    pub fn is_planar(self) -> bool {
        matches!(
            self,
            EntityType::Plane | EntityType::Triangle | EntityType::Circle
        )
    }

    /// Do entities of this type have a finite bounding box?
    ///
    /// Lines, rays, planes and the `None` sentinel do not.
    pub fn is_bounded(self) -> bool {
        matches!(
            self,
            EntityType::Point
                | EntityType::Segment
                | EntityType::Triangle
                | EntityType::Circle
                | EntityType::Sphere
                | EntityType::Aabb
        )
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Copy, Clone, Debug)]
/// Enum representing the entity with its actual type.
pub enum TypedEntity<'a> {
    /// The "no entity" sentinel.
    None,
    /// A point.
    Point(&'a Point<Real>),
    /// An infinite line.
    Line(&'a Line),
    /// A half-line.
    Ray(&'a Ray),
    /// An infinite plane.
    Plane(&'a Plane),
    /// A segment.
    Segment(&'a Segment),
    /// A triangle.
    Triangle(&'a Triangle),
    /// A disk.
    Circle(&'a Circle),
    /// A ball.
    Sphere(&'a Sphere),
    /// An axis-aligned bounding box.
    Aabb(&'a Aabb),
}

impl<'a> TypedEntity<'a> {
    /// The type tag of the referenced entity.
    pub fn entity_type(&self) -> EntityType {
        match self {
            TypedEntity::None => EntityType::None,
            TypedEntity::Point(_) => EntityType::Point,
            TypedEntity::Line(_) => EntityType::Line,
            TypedEntity::Ray(_) => EntityType::Ray,
            TypedEntity::Plane(_) => EntityType::Plane,
            TypedEntity::Segment(_) => EntityType::Segment,
            TypedEntity::Triangle(_) => EntityType::Triangle,
            TypedEntity::Circle(_) => EntityType::Circle,
            TypedEntity::Sphere(_) => EntityType::Sphere,
            TypedEntity::Aabb(_) => EntityType::Aabb,
        }
    }

    /// The referenced entity as a [`Linear`], if it is a line, a ray, or a segment.
    pub fn as_linear(&self) -> Option<&'a dyn Linear> {
        match *self {
            TypedEntity::Line(l) => Some(l),
            TypedEntity::Ray(r) => Some(r),
            TypedEntity::Segment(s) => Some(s),
            _ => None,
        }
    }

    /// The referenced entity as a [`Planar`], if it is a plane, a triangle, or a circle.
    pub fn as_planar(&self) -> Option<&'a dyn Planar> {
        match *self {
            TypedEntity::Plane(p) => Some(p),
            TypedEntity::Triangle(t) => Some(t),
            TypedEntity::Circle(c) => Some(c),
            _ => None,
        }
    }
}

/// Trait implemented by every geometric primitive.
///
/// This is the common surface the relation predicates and the intersection
/// dispatcher work with when the concrete types are only known at runtime.
pub trait Entity: DowncastSync + fmt::Debug {
    /// Gets the type tag of this entity.
    fn entity_type(&self) -> EntityType;

    /// Gets the underlying entity as an enum.
    fn as_typed_entity(&self) -> TypedEntity<'_>;

    /// Translates this entity by `shift`.
    fn translate(&mut self, shift: &Vector<Real>);

    /// Applies the affine transformation `m` to this entity.
    ///
    /// Points are transformed by the full affine map while directions and
    /// normals are only affected by its linear part.
    fn transform(&mut self, m: &Affine<Real>);

    /// Does this entity collapse to a lower-dimensional (or empty) set?
    fn is_degenerate(&self, eps: Real) -> bool;

    /// Is this the "no entity" sentinel?
    fn is_none(&self) -> bool {
        self.entity_type() == EntityType::None
    }

    /// Is this entity a point?
    fn is_point(&self) -> bool {
        self.entity_type() == EntityType::Point
    }

    /// Is this entity a line?
    fn is_line(&self) -> bool {
        self.entity_type() == EntityType::Line
    }

    /// Is this entity a ray?
    fn is_ray(&self) -> bool {
        self.entity_type() == EntityType::Ray
    }

    /// Is this entity a plane?
    fn is_plane(&self) -> bool {
        self.entity_type() == EntityType::Plane
    }

    /// Is this entity a segment?
    fn is_segment(&self) -> bool {
        self.entity_type() == EntityType::Segment
    }

    /// Is this entity a triangle?
    fn is_triangle(&self) -> bool {
        self.entity_type() == EntityType::Triangle
    }

    /// Is this entity a circle?
    fn is_circle(&self) -> bool {
        self.entity_type() == EntityType::Circle
    }

    /// Is this entity a sphere?
    fn is_sphere(&self) -> bool {
        self.entity_type() == EntityType::Sphere
    }

    /// Is this entity an axis-aligned bounding box?
    fn is_aabb(&self) -> bool {
        self.entity_type() == EntityType::Aabb
    }

    /// Is this entity a line, a ray, or a segment?
    fn is_linear(&self) -> bool {
        self.entity_type().is_linear()
    }

    /// Is this entity a plane, a triangle, or a circle?
    fn is_planar(&self) -> bool {
        self.entity_type().is_planar()
    }

    /// Does this entity have a finite bounding box?
    fn is_bounded(&self) -> bool {
        self.entity_type().is_bounded()
    }
}

impl_downcast!(sync Entity);

impl dyn Entity {
    /// Converts this abstract entity to the given entity, if it is one.
    ///
    /// Unlike the typed shortcuts below, this does not look through an
    /// [`AnyEntity`](crate::shape::AnyEntity).
    pub fn as_entity<T: Entity>(&self) -> Option<&T> {
        self.downcast_ref()
    }

    /// Converts this abstract entity to a point, if it is one.
    pub fn as_point(&self) -> Option<&Point<Real>> {
        match self.as_typed_entity() {
            TypedEntity::Point(e) => Some(e),
            _ => None,
        }
    }

    /// Converts this abstract entity to a line, if it is one.
    pub fn as_line(&self) -> Option<&Line> {
        match self.as_typed_entity() {
            TypedEntity::Line(e) => Some(e),
            _ => None,
        }
    }

    /// Converts this abstract entity to a ray, if it is one.
    pub fn as_ray(&self) -> Option<&Ray> {
        match self.as_typed_entity() {
            TypedEntity::Ray(e) => Some(e),
            _ => None,
        }
    }

    /// Converts this abstract entity to a plane, if it is one.
    pub fn as_plane(&self) -> Option<&Plane> {
        match self.as_typed_entity() {
            TypedEntity::Plane(e) => Some(e),
            _ => None,
        }
    }

    /// Converts this abstract entity to a segment, if it is one.
    pub fn as_segment(&self) -> Option<&Segment> {
        match self.as_typed_entity() {
            TypedEntity::Segment(e) => Some(e),
            _ => None,
        }
    }

    /// Converts this abstract entity to a triangle, if it is one.
    pub fn as_triangle(&self) -> Option<&Triangle> {
        match self.as_typed_entity() {
            TypedEntity::Triangle(e) => Some(e),
            _ => None,
        }
    }

    /// Converts this abstract entity to a circle, if it is one.
    pub fn as_circle(&self) -> Option<&Circle> {
        match self.as_typed_entity() {
            TypedEntity::Circle(e) => Some(e),
            _ => None,
        }
    }

    /// Converts this abstract entity to a sphere, if it is one.
    pub fn as_sphere(&self) -> Option<&Sphere> {
        match self.as_typed_entity() {
            TypedEntity::Sphere(e) => Some(e),
            _ => None,
        }
    }

    /// Converts this abstract entity to an axis-aligned bounding box, if it is one.
    pub fn as_aabb(&self) -> Option<&Aabb> {
        match self.as_typed_entity() {
            TypedEntity::Aabb(e) => Some(e),
            _ => None,
        }
    }
}

/// A line, a ray, or a segment: anything with an origin and a direction.
pub trait Linear {
    /// A point of this entity.
    fn origin(&self) -> Point<Real>;

    /// The direction of this entity.
    ///
    /// Lines and rays return their stored direction, segments the unit vector
    /// from their first to their second endpoint.
    fn direction(&self) -> Vector<Real>;

    /// Does `pt` lie on this entity, within `eps`?
    fn contains_point(&self, pt: &Point<Real>, eps: Real) -> bool;

    /// The infinite line supporting this entity.
    fn to_line(&self) -> Line {
        Line::new(self.origin(), self.direction())
    }
}

/// A plane, a triangle, or a circle: anything lying on a plane.
pub trait Planar {
    /// The plane this entity lies on.
    fn laying_plane(&self) -> Plane;

    /// Does `pt` lie on this entity, within `eps`?
    fn contains_point(&self, pt: &Point<Real>, eps: Real) -> bool;

    /// The normal of the plane this entity lies on.
    fn normal(&self) -> Vector<Real> {
        self.laying_plane().normal
    }
}

/// Is any coordinate of `v` NaN or infinite?
#[inline]
pub(crate) fn is_non_finite(v: &Vector<Real>) -> bool {
    v.iter().any(|x| !x.is_finite())
}
