//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general functions provided by this module are:
//!
//! * [`query::intersection()`](intersection()) to compute the exact intersection between two entities.
//! * [`query::intersects()`](intersects()) to determine if two entities intersect.
//! * [`query::is_parallel()`](is_parallel()), [`query::is_orthogonal()`](is_orthogonal()),
//!   [`query::is_collinear()`](is_collinear()) and [`query::is_coplanar()`](is_coplanar()) to
//!   classify the relative position of two entities.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are more specific versions of the ones described above.
//! For example `intersection_line_plane` computes the intersection between two entities known at compile-time
//! to be a line and a plane. They are less convenient to use than the most generic version but skip the
//! dynamic dispatch, and let the caller pick the configuration (collinear, coplanar or general) directly.
//! The specific functions have the form `[configuration_]intersection_[entity1]_[entity2]()` where:
//!
//! * `[configuration]` is `collinear` or `coplanar` if the function assumes its inputs to be in that
//!   configuration, and is omitted otherwise.
//! * `[entity1]` is the type of the first entity passed to the function, e.g., `line`, or `plane`. Can
//!   also identify a trait implemented by supported entities, e.g., `linear`.
//! * `[entity2]` is the type of the second entity passed to the function.

pub use self::error::QueryError;
pub use self::intersection::{intersection, intersects};
pub use self::relation::{is_collinear, is_coplanar, is_orthogonal, is_parallel};

mod error;
mod intersection;
pub mod relation;

/// Queries dedicated to specific pairs of entities.
pub mod details {
    pub use super::intersection::*;
    pub use super::relation::*;
}
