//! Text rendering shared by the `Display` implementations of the primitives.

use core::fmt;

use crate::math::{Real, Vector};

/// Writes `x` in scientific notation with six significant digits.
pub fn fmt_real(f: &mut fmt::Formatter<'_>, x: Real) -> fmt::Result {
    write!(f, "{x:.5e}")
}

/// Writes `v` as `[ x, y, z ]`, each component in scientific notation.
pub fn fmt_vector(f: &mut fmt::Formatter<'_>, v: &Vector<Real>) -> fmt::Result {
    f.write_str("[ ")?;
    for (i, x) in v.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        fmt_real(f, *x)?;
    }
    f.write_str(" ]")
}
