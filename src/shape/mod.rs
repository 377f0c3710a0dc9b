//! Geometric primitives supported by geoprim3d.

pub use self::any_entity::AnyEntity;
#[doc(inline)]
pub use self::entity::{Entity, EntityType, Linear, Planar, TypedEntity};
pub use self::circle::Circle;
pub use self::collection::Collection;
pub use self::line::Line;
pub use self::plane::Plane;
pub use self::point::nan_point;
pub use self::ray::Ray;
pub use self::segment::Segment;
pub use self::sphere::Sphere;
pub use self::triangle::Triangle;

mod any_entity;
mod circle;
mod collection;
#[doc(hidden)]
pub mod entity;
mod line;
mod plane;
mod point;
mod ray;
mod segment;
mod sphere;
mod triangle;
