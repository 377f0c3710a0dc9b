/*!
geoprim3d
========

**geoprim3d** is a 3-dimensional geometric kernel written with the rust
programming language: primitives (points, lines, rays, segments, planes,
triangles, disks, balls and boxes), the relations between them, their exact
intersections, and an AABB tree to prune candidate pairs.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![allow(clippy::type_complexity)] // Complains about closures that are fairly simple.
#![deny(unused_qualifications)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate either;
pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod partitioning;
pub mod query;
pub mod shape;
pub mod utils;

/// Aliases for mathematical types and the tolerances used throughout this crate.
pub mod math {
    pub use na::{Affine3, Matrix3, Point3, UnitVector3, Vector3};

    /// The scalar type used throughout this crate.
    pub use f64 as Real;

    /// The machine epsilon of [`Real`].
    pub const EPSILON_MACHINE: Real = Real::EPSILON;

    /// A very tight tolerance, below the machine epsilon of unit-sized values.
    pub const EPSILON_HIGH: Real = 1.0e-16;

    /// The standard tolerance.
    pub const EPSILON_MEDIUM: Real = 1.0e-10;

    /// A loose tolerance, for data coming from single-precision sources.
    pub const EPSILON_LOW: Real = 1.0e-7;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = EPSILON_MEDIUM;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The affine transformation type.
    pub use Affine3 as Affine;

    /// Is `x` within `eps` of zero?
    ///
    /// NaN is never approximately zero.
    #[inline]
    pub fn approx_zero(x: Real, eps: Real) -> bool {
        x.abs() <= eps
    }
}
