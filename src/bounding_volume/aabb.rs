//! Axis Aligned Bounding Box.

use core::fmt;

use crate::bounding_volume::BoundingVolume;
use crate::math::{Affine, Point, Real, Vector, DIM};
use crate::shape::{Entity, EntityType, TypedEntity};
use crate::utils;
use na;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners, with the invariant
/// `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y` and `mins.z ≤ maxs.z`. Use
/// [`Aabb::update`] to restore this invariant after editing the corners by hand.
///
/// Each box also carries two user integers: an `id` identifying the object it
/// bounds and a `pos` giving its position in some user container. They are
/// ignored by every geometric query.
///
/// Boxes with NaN corners are used as "no box" sentinels: every comparison
/// involving a NaN is false, so such a box never intersects nor contains
/// anything.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
    /// User identifier of the bounded object.
    pub id: usize,
    /// User position of the bounded object.
    pub pos: usize,
}

impl Aabb {
    /// Creates a new Aabb, with zero `id` and `pos`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb::with_id(mins, maxs, 0, 0)
    }

    /// Creates a new Aabb tagged with the given `id` and `pos`.
    #[inline]
    pub fn with_id(mins: Point<Real>, maxs: Point<Real>, id: usize, pos: usize) -> Aabb {
        Aabb { mins, maxs, id, pos }
    }

    /// An Aabb with all its corners set to NaN.
    pub fn nan() -> Self {
        let nan = Point::from(Vector::repeat(Real::NAN));
        Self::new(nan, nan)
    }

    /// Creates an invalid Aabb with `mins` components set to `Real::max_values` and `maxs`components set to `-Real::max_values`.
    ///
    /// This is often used as the initial values of some Aabb merging algorithms.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Creates a new Aabb from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Computes the Aabb bounding the given set of points.
    ///
    /// Returns [`Aabb::new_invalid`] if `pts` is empty.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut result = Self::new_invalid();
        for pt in pts {
            result.take_point(pt);
        }
        result
    }

    /// The union of all the given boxes.
    ///
    /// Returns a box with both corners at the origin if `boxes` is empty.
    pub fn merged_all<'a, I>(boxes: I) -> Self
    where
        I: IntoIterator<Item = &'a Aabb>,
    {
        let mut it = boxes.into_iter();
        let Some(first) = it.next() else {
            return Self::new(Point::origin(), Point::origin());
        };
        let mut result = Self::new(first.mins, first.maxs);
        for aabb in it {
            result.merge(aabb);
        }
        result
    }

    /// The center of this Aabb.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this Aabb.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The extents of this Aabb.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The volume of this Aabb.
    #[inline]
    pub fn volume(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y * extents.z
    }

    /// Enlarges this Aabb so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Swaps the components of `mins` and `maxs` that are in the wrong order.
    ///
    /// Returns `false` if at least one pair of components had to be swapped.
    pub fn update(&mut self) -> bool {
        let mut valid = true;
        for i in 0..DIM {
            if self.mins[i] > self.maxs[i] {
                core::mem::swap(&mut self.mins[i], &mut self.maxs[i]);
                valid = false;
            }
        }
        valid
    }

    /// Does this Aabb have a NaN corner?
    #[inline]
    pub fn has_nan(&self) -> bool {
        self.mins.iter().chain(self.maxs.iter()).any(|x| x.is_nan())
    }

    /// Does this Aabb contain the given point?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if !(point[i] >= self.mins[i] && point[i] <= self.maxs[i]) {
                return false;
            }
        }

        true
    }

    /// Computes the intersection of this Aabb and another one.
    ///
    /// Returns `None` unless both boxes overlap on every axis.
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        if !self.intersects(other) {
            return None;
        }

        Some(Aabb::new(
            self.mins.sup(&other.mins),
            self.maxs.inf(&other.maxs),
        ))
    }

    /// The distance from `pt` to this Aabb, zero if `pt` is inside.
    ///
    /// Returns NaN if a corner of this Aabb is NaN.
    pub fn distance_to_local_point(&self, pt: &Point<Real>) -> Real {
        if self.has_nan() {
            return Real::NAN;
        }

        let below = self.mins - pt;
        let above = pt - self.maxs;
        below.sup(&above).sup(&Vector::zeros()).norm()
    }

    /// The distance from `pt` to the farthest corner of this Aabb.
    ///
    /// Any point of the box is at most this far from `pt`. Returns NaN if a
    /// corner of this Aabb is NaN.
    pub fn max_distance_to_local_point(&self, pt: &Point<Real>) -> Real {
        if self.has_nan() {
            return Real::NAN;
        }

        let to_mins = (self.mins - pt).abs();
        let to_maxs = (self.maxs - pt).abs();
        to_mins.sup(&to_maxs).norm()
    }

    /// The eight corners of this Aabb.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        [
            Point::new(self.mins.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            Point::new(self.mins.x, self.maxs.y, self.maxs.z),
        ]
    }

    /// The Aabb of this Aabb transformed by `m`, keeping `id` and `pos`.
    pub fn transform_by(&self, m: &Affine<Real>) -> Self {
        let refit = Self::from_points(self.vertices().iter().map(|pt| m.transform_point(pt)));
        Self::with_id(refit.mins, refit.maxs, self.id, self.pos)
    }

    /// Returns `true` if both corners of `self` and `other` approximately match.
    ///
    /// The `id` and `pos` are ignored.
    pub fn is_approx(&self, other: &Aabb, eps: Real) -> bool {
        relative_eq!(self.mins, other.mins, epsilon = eps)
            && relative_eq!(self.maxs, other.maxs, epsilon = eps)
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center()
    }

    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    #[inline]
    fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        Aabb::with_id(
            self.mins.inf(&other.mins),
            self.maxs.sup(&other.maxs),
            self.id,
            self.pos,
        )
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.mins += Vector::repeat(-amount);
        self.maxs += Vector::repeat(amount);
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb::with_id(
            self.mins + Vector::repeat(-amount),
            self.maxs + Vector::repeat(amount),
            self.id,
            self.pos,
        )
    }
}

impl Entity for Aabb {
    fn entity_type(&self) -> EntityType {
        EntityType::Aabb
    }

    fn as_typed_entity(&self) -> TypedEntity<'_> {
        TypedEntity::Aabb(self)
    }

    fn translate(&mut self, shift: &Vector<Real>) {
        self.mins += shift;
        self.maxs += shift;
    }

    /// Replaces this box by the Aabb of its transformed corners.
    fn transform(&mut self, m: &Affine<Real>) {
        *self = self.transform_by(m);
    }

    /// A box is degenerate if its corners are in the wrong order or NaN.
    ///
    /// Flat boxes are valid: the bounding box of a planar entity is flat.
    fn is_degenerate(&self, _eps: Real) -> bool {
        !na::partial_le(&self.mins, &self.maxs)
    }
}

impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Min = ")?;
        utils::fmt_vector(f, &self.mins.coords)?;
        f.write_str("\nMax = ")?;
        utils::fmt_vector(f, &self.maxs.coords)?;
        writeln!(f, "\nId  = {}\nPos = {}", self.id, self.pos)
    }
}
