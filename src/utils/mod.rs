//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::fmt::{fmt_real, fmt_vector};
pub use self::point_set::push_distinct;

mod center;
mod fmt;
mod point_set;
