use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real};
use smallvec::SmallVec;

const TRAVERSAL_STACK_SIZE: usize = 32;

/// A node of an [`AabbTree`].
#[derive(Copy, Clone, Debug)]
enum AabbTreeNode<'a> {
    /// A box indexed by the tree.
    Leaf(&'a Aabb),
    /// The union of the boxes of two subtrees.
    Internal { aabb: Aabb, left: u32, right: u32 },
}

impl AabbTreeNode<'_> {
    #[inline]
    fn aabb(&self) -> &Aabb {
        match self {
            AabbTreeNode::Leaf(aabb) => aabb,
            AabbTreeNode::Internal { aabb, .. } => aabb,
        }
    }
}

/// A binary tree of axis-aligned bounding boxes.
///
/// The tree borrows the boxes it indexes, and only stores their unions. It
/// is either empty or built: [`AabbTree::build`] replaces its whole content,
/// [`AabbTree::clear`] empties it. Queries never modify it.
///
/// Boxes with NaN corners can be indexed but are never reported by any
/// query, since they overlap nothing.
#[derive(Clone, Debug, Default)]
pub struct AabbTree<'a> {
    // The root is the first node.
    nodes: Vec<AabbTreeNode<'a>>,
}

impl<'a> AabbTree<'a> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tree indexing the given boxes.
    pub fn from_boxes(boxes: &[&'a Aabb]) -> Self {
        let mut tree = Self::new();
        tree.build(boxes);
        tree
    }

    /// Rebuilds this tree so it indexes the given boxes.
    ///
    /// Each internal node splits its boxes along the longest axis of their
    /// union, at the middle of that union: boxes whose center lies strictly
    /// above the cut go to the right subtree. If all the boxes end up on the
    /// same side, they are split in two halves instead.
    pub fn build(&mut self, boxes: &[&'a Aabb]) {
        self.clear();

        if boxes.is_empty() {
            return;
        }

        let mut boxes = boxes.to_vec();
        self.nodes.reserve(2 * boxes.len() - 1);
        let _ = self.build_recurse(&mut boxes);

        log::trace!(
            "built an AABB tree with {} leaves and depth {}",
            boxes.len(),
            self.depth()
        );
    }

    fn build_recurse(&mut self, boxes: &mut [&'a Aabb]) -> u32 {
        let id = self.nodes.len() as u32;

        if let [leaf] = boxes {
            self.nodes.push(AabbTreeNode::Leaf(*leaf));
            return id;
        }

        // NaN boxes overlap nothing, so they must not spoil the union of the valid ones.
        let aabb = boxes
            .iter()
            .filter(|b| !b.has_nan())
            .fold(Aabb::new_invalid(), |acc, b| acc.merged(b));
        // Placeholder, until the children indices are known.
        self.nodes.push(AabbTreeNode::Leaf(boxes[0]));

        let axis = aabb.extents().imax();
        let cut = aabb.center()[axis];
        let is_right = |b: &&Aabb| b.center()[axis] > cut;

        // Stable, so the order of the input boxes is kept within each side.
        boxes.sort_by_key(|b| is_right(b));
        let mut mid = boxes.partition_point(|b| !is_right(b));

        if mid == 0 || mid == boxes.len() {
            mid = boxes.len() / 2;
        }

        let (lhs, rhs) = boxes.split_at_mut(mid);
        let left = self.build_recurse(lhs);
        let right = self.build_recurse(rhs);
        self.nodes[id as usize] = AabbTreeNode::Internal { aabb, left, right };
        id
    }

    /// Is this tree empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes every box from this tree.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// The box bounding every box of this tree, or `None` if it is empty.
    pub fn root_aabb(&self) -> Option<Aabb> {
        self.nodes.first().map(|root| *root.aabb())
    }

    /// The number of boxes indexed by this tree.
    pub fn num_leaves(&self) -> usize {
        self.leaves().count()
    }

    /// The number of nodes on the longest path from the root to a leaf.
    ///
    /// An empty tree has a depth of 0, a tree with a single box a depth of 1.
    pub fn depth(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.depth_recurse(0)
        }
    }

    fn depth_recurse(&self, id: u32) -> usize {
        match self.nodes[id as usize] {
            AabbTreeNode::Leaf(_) => 1,
            AabbTreeNode::Internal { left, right, .. } => {
                1 + self.depth_recurse(left).max(self.depth_recurse(right))
            }
        }
    }

    /// Iterates through the boxes indexed by this tree.
    pub fn leaves(&self) -> impl Iterator<Item = &'a Aabb> + '_ {
        self.nodes.iter().filter_map(|node| match node {
            AabbTreeNode::Leaf(aabb) => Some(*aabb),
            AabbTreeNode::Internal { .. } => None,
        })
    }

    /// Traverses every pair of overlapping leaves of `self` and `other`.
    ///
    /// Stops as soon as `f` returns `true`, and returns `true` in that case.
    fn traverse_overlaps<'b>(
        &self,
        other: &AabbTree<'b>,
        mut f: impl FnMut(&'a Aabb, &'b Aabb) -> bool,
    ) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        let mut stack: SmallVec<[(u32, u32); TRAVERSAL_STACK_SIZE]> = SmallVec::new();
        stack.push((0, 0));

        while let Some((id1, id2)) = stack.pop() {
            let node1 = &self.nodes[id1 as usize];
            let node2 = &other.nodes[id2 as usize];

            if !node1.aabb().intersects(node2.aabb()) {
                continue;
            }

            match (*node1, *node2) {
                (AabbTreeNode::Leaf(a), AabbTreeNode::Leaf(b)) => {
                    if f(a, b) {
                        return true;
                    }
                }
                (AabbTreeNode::Internal { left, right, .. }, AabbTreeNode::Leaf(_)) => {
                    stack.push((right, id2));
                    stack.push((left, id2));
                }
                (AabbTreeNode::Leaf(_), AabbTreeNode::Internal { left, right, .. }) => {
                    stack.push((id1, right));
                    stack.push((id1, left));
                }
                (
                    AabbTreeNode::Internal {
                        aabb: aabb1,
                        left: left1,
                        right: right1,
                    },
                    AabbTreeNode::Internal {
                        aabb: aabb2,
                        left: left2,
                        right: right2,
                    },
                ) => {
                    // Descend into the biggest of both nodes.
                    if aabb1.volume() >= aabb2.volume() {
                        stack.push((right1, id2));
                        stack.push((left1, id2));
                    } else {
                        stack.push((id1, right2));
                        stack.push((id1, left2));
                    }
                }
            }
        }

        false
    }

    /// Tests if any pair of overlapping boxes of `self` and `other` passes `test`.
    ///
    /// `test` is called on each pair of overlapping leaves, with the box of
    /// `self` first, or the box of `other` first if `swap` is `true`. The
    /// traversal stops at the first pair for which `test` returns `true`.
    pub fn collision(
        &self,
        other: &AabbTree<'_>,
        mut test: impl FnMut(&Aabb, &Aabb) -> bool,
        swap: bool,
    ) -> bool {
        self.traverse_overlaps(other, |a, b| if swap { test(b, a) } else { test(a, b) })
    }

    /// Collects every pair of overlapping boxes of `self` and `other` into `out`.
    ///
    /// Each pair has the box of `self` first, or the box of `other` first if
    /// `swap` is `true`. `out` is not cleared.
    pub fn intersect(
        &self,
        other: &AabbTree<'a>,
        out: &mut Vec<(&'a Aabb, &'a Aabb)>,
        swap: bool,
    ) {
        let _ = self.traverse_overlaps(other, |a, b| {
            out.push(if swap { (b, a) } else { (a, b) });
            false
        });
    }

    /// Collects the boxes possibly containing the point of this tree closest to `pt`.
    ///
    /// Any box contains a point at most `max_distance_to_local_point` away
    /// from `pt`, so the closest point of the tree is within the smallest of
    /// these distances. This bound is returned, and every box whose distance
    /// to `pt` is not greater than it is pushed to `out` (which is not
    /// cleared).
    ///
    /// Returns `Real::INFINITY` if this tree is empty.
    pub fn min_distance(&self, pt: &Point<Real>, out: &mut Vec<&'a Aabb>) -> Real {
        if self.is_empty() {
            return Real::INFINITY;
        }

        let mut stack: SmallVec<[u32; TRAVERSAL_STACK_SIZE]> = SmallVec::new();
        let mut bound = Real::INFINITY;

        // Every leaf of a subtree lies inside the subtree box, so the farthest corner of that box
        // bounds the farthest corners of its leaves.
        stack.push(0);
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id as usize];
            let aabb = node.aabb();

            if aabb.distance_to_local_point(pt) > bound {
                continue;
            }

            let max_dist = aabb.max_distance_to_local_point(pt);
            if max_dist < bound {
                bound = max_dist;
            }

            if let AabbTreeNode::Internal { left, right, .. } = *node {
                stack.push(right);
                stack.push(left);
            }
        }

        stack.push(0);
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id as usize];

            if !(node.aabb().distance_to_local_point(pt) <= bound) {
                continue;
            }

            match *node {
                AabbTreeNode::Leaf(aabb) => out.push(aabb),
                AabbTreeNode::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }

        bound
    }

    /// Panics if this tree isn't well-formed.
    ///
    /// The tree is well-formed if every internal node has valid children
    /// indices, and if its box contains the boxes of its children. Leaves with
    /// NaN corners are exempt from the containment check.
    pub fn assert_well_formed(&self) {
        if self.is_empty() {
            return;
        }

        let leaf_count = self.assert_well_formed_recurse(0);
        assert_eq!(leaf_count, self.num_leaves());
        assert_eq!(self.nodes.len(), 2 * leaf_count - 1);
    }

    fn assert_well_formed_recurse(&self, id: u32) -> usize {
        match self.nodes[id as usize] {
            AabbTreeNode::Leaf(_) => 1,
            AabbTreeNode::Internal { aabb, left, right } => {
                assert!(left > id && right > id, "Detected loop at node {}.", id);

                for child in [left, right] {
                    let child_aabb = self.nodes[child as usize].aabb();
                    assert!(
                        child_aabb.has_nan() || aabb.contains(child_aabb),
                        "The box of node {} does not contain the box of its child {}.",
                        id,
                        child
                    );
                }

                self.assert_well_formed_recurse(left) + self.assert_well_formed_recurse(right)
            }
        }
    }
}
