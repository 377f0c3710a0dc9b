//! A heterogeneous set of entities, with broad-phase queries on their boxes.

use core::ops::Index;

use crate::bounding_volume::Aabb;
use crate::math::{Affine, Real, Vector};
use crate::partitioning::AabbTree;
use crate::shape::{AnyEntity, Entity, EntityType};

/// An ordered set of entities of any type.
///
/// The collection keeps the local Aabb of each bounded entity, tagged with
/// the entity index as its [`Aabb::id`]. These boxes feed the broad-phase
/// queries: a query reports the indices of the entities whose box overlaps
/// the query boxes, leaving the exact test to [`intersection`](crate::query::intersection).
/// Lines, rays, planes and `None` entities have no box and are never reported.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct Collection {
    entities: Vec<AnyEntity>,
    aabbs: Vec<Aabb>,
}

impl Collection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of entities of this collection.
    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Is this collection empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Removes every entity from this collection.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.aabbs.clear();
    }

    /// Appends an entity to this collection.
    pub fn push(&mut self, entity: impl Into<AnyEntity>) {
        let entity = entity.into();
        if let Some(aabb) = entity.local_aabb() {
            self.aabbs
                .push(Aabb::with_id(aabb.mins, aabb.maxs, self.entities.len(), 0));
        }
        self.entities.push(entity);
    }

    /// The `i`-th entity of this collection, if any.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&AnyEntity> {
        self.entities.get(i)
    }

    /// The entities of this collection, in insertion order.
    #[inline]
    pub fn entities(&self) -> &[AnyEntity] {
        &self.entities
    }

    /// Iterates through the entities of this collection.
    pub fn iter(&self) -> core::slice::Iter<'_, AnyEntity> {
        self.entities.iter()
    }

    /// The boxes of the bounded entities of this collection.
    ///
    /// The [`Aabb::id`] of each box is the index of its entity.
    #[inline]
    pub fn aabbs(&self) -> &[Aabb] {
        &self.aabbs
    }

    /// Translates every entity of this collection.
    pub fn translate(&mut self, shift: &Vector<Real>) {
        self.entities.iter_mut().for_each(|e| e.translate(shift));
        self.update_aabbs();
    }

    /// Applies the affine transformation `m` to every entity of this collection.
    pub fn transform(&mut self, m: &Affine<Real>) {
        self.entities.iter_mut().for_each(|e| e.transform(m));
        self.update_aabbs();
    }

    fn update_aabbs(&mut self) {
        self.aabbs.clear();
        for (i, entity) in self.entities.iter().enumerate() {
            if let Some(aabb) = entity.local_aabb() {
                self.aabbs.push(Aabb::with_id(aabb.mins, aabb.maxs, i, 0));
            }
        }
    }

    /// Removes the entities not matching `f`, then re-indexes the boxes.
    ///
    /// Returns the number of removed entities.
    pub fn retain(&mut self, mut f: impl FnMut(&AnyEntity) -> bool) -> usize {
        let len = self.entities.len();
        self.entities.retain(|e| f(e));
        self.update_aabbs();
        len - self.entities.len()
    }

    /// Does this collection contain an entity of the given type?
    pub fn contains_type(&self, ty: EntityType) -> bool {
        self.entities.iter().any(|e| e.entity_type() == ty)
    }

    /// Are all the entities of this collection of the given type?
    ///
    /// Returns `true` for an empty collection.
    pub fn all_of_type(&self, ty: EntityType) -> bool {
        self.entities.iter().all(|e| e.entity_type() == ty)
    }

    /// The number of entities of the given type.
    pub fn count_type(&self, ty: EntityType) -> usize {
        self.entities
            .iter()
            .filter(|e| e.entity_type() == ty)
            .count()
    }

    /// Removes every entity of the given type.
    pub fn remove_type(&mut self, ty: EntityType) -> usize {
        self.retain(|e| e.entity_type() != ty)
    }

    /// Does this collection contain a degenerate entity?
    pub fn contains_degenerate(&self, eps: Real) -> bool {
        self.entities.iter().any(|e| e.is_degenerate(eps))
    }

    /// Are all the entities of this collection degenerate?
    pub fn all_degenerate(&self, eps: Real) -> bool {
        self.entities.iter().all(|e| e.is_degenerate(eps))
    }

    /// The number of degenerate entities.
    pub fn count_degenerate(&self, eps: Real) -> usize {
        self.entities
            .iter()
            .filter(|e| e.is_degenerate(eps))
            .count()
    }

    /// Removes every degenerate entity, including `None` entities.
    pub fn remove_degenerate(&mut self, eps: Real) -> usize {
        let removed = self.retain(|e| !e.is_degenerate(eps));
        if removed > 0 {
            log::debug!("removed {} degenerate entities from a collection", removed);
        }
        removed
    }

    /// Does this collection contain an entity with a finite bounding box?
    pub fn contains_bounded(&self) -> bool {
        !self.aabbs.is_empty()
    }

    /// Do all the entities of this collection have a finite bounding box?
    pub fn all_bounded(&self) -> bool {
        self.aabbs.len() == self.entities.len()
    }

    /// The number of entities with a finite bounding box.
    pub fn count_bounded(&self) -> usize {
        self.aabbs.len()
    }

    /// Removes every entity without a finite bounding box.
    pub fn remove_unbounded(&mut self) -> usize {
        self.retain(|e| e.is_bounded())
    }

    /// Builds a tree over the boxes of the bounded entities of this collection.
    pub fn aabb_tree(&self) -> AabbTree<'_> {
        let refs: Vec<_> = self.aabbs.iter().collect();
        AabbTree::from_boxes(&refs)
    }

    /// Collects the indices of the entities whose box overlaps a box of `tree`.
    ///
    /// The indices pushed to `out` are sorted and unique. Returns `true` if at
    /// least one was found.
    pub fn intersect_tree(&self, tree: &AabbTree<'_>, out: &mut Vec<usize>) -> bool {
        let start = out.len();
        let _ = self.aabb_tree().collision(
            tree,
            |a, _| {
                out.push(a.id);
                false
            },
            false,
        );
        out[start..].sort_unstable();
        let mut candidates = out.split_off(start);
        candidates.dedup();
        out.append(&mut candidates);
        out.len() > start
    }

    /// Collects the indices of the entities whose box overlaps one of `boxes`.
    pub fn intersect_aabbs(&self, boxes: &[&Aabb], out: &mut Vec<usize>) -> bool {
        self.intersect_tree(&AabbTree::from_boxes(boxes), out)
    }

    /// Collects the indices of the entities whose box overlaps `aabb`.
    pub fn intersect_aabb(&self, aabb: &Aabb, out: &mut Vec<usize>) -> bool {
        self.intersect_aabbs(&[aabb], out)
    }

    /// Collects the pairs of entities of `self` and `other` with overlapping boxes.
    ///
    /// Each pair holds the index of the entity of `self` first. The pairs
    /// pushed to `out` are sorted. Returns `true` if at least one was found.
    pub fn intersect_collection(&self, other: &Collection, out: &mut Vec<(usize, usize)>) -> bool {
        let start = out.len();
        let other_tree = other.aabb_tree();
        let _ = self.aabb_tree().collision(
            &other_tree,
            |a, b| {
                out.push((a.id, b.id));
                false
            },
            false,
        );
        out[start..].sort_unstable();
        out.len() > start
    }
}

impl Index<usize> for Collection {
    type Output = AnyEntity;

    #[inline]
    fn index(&self, i: usize) -> &AnyEntity {
        &self.entities[i]
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a AnyEntity;
    type IntoIter = core::slice::Iter<'a, AnyEntity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

impl<E: Into<AnyEntity>> Extend<E> for Collection {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for e in iter {
            self.push(e);
        }
    }
}

impl<E: Into<AnyEntity>> FromIterator<E> for Collection {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}
