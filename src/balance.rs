use std::mem;
use tracing::{debug, trace};

use crate::rope::Rope;

/*
 Rotations change the shape of a subtree without moving any text.

       P                      Q
      / \    rotate_left     / \
     A   Q   ------------>  P   C
        / \  <------------ / \
       B   C  rotate_right A   B
*/
impl Rope {
    /// Makes the right child the root of this subtree. The old root takes
    /// the right child's left subtree as its new right child.
    ///
    /// # Panics
    ///
    /// Panics if there is no right child.
    pub fn rotate_left(&mut self) {
        let Some(mut pivot) = self.right.take() else {
            panic!("rotate_left requires a right child");
        };
        trace!(root = self.text(), pivot = pivot.text(), "rotating left");

        self.right = pivot.left.take();
        mem::swap(self, &mut *pivot);
        self.left = Some(pivot);
    }

    /// Makes the left child the root of this subtree. The old root takes
    /// the left child's right subtree as its new left child.
    ///
    /// # Panics
    ///
    /// Panics if there is no left child.
    pub fn rotate_right(&mut self) {
        let Some(mut pivot) = self.left.take() else {
            panic!("rotate_right requires a left child");
        };
        trace!(root = self.text(), pivot = pivot.text(), "rotating right");

        self.left = pivot.right.take();
        mem::swap(self, &mut *pivot);
        self.right = Some(pivot);
    }

    /// Rotates until no node has subtrees whose depths differ by two or more.
    /// The flattened text is unchanged, and a balanced tree is left alone.
    ///
    /// One pass over the tree decides which subtrees must be rebuilt: the
    /// highest ones whose children, once balanced themselves, would still
    /// differ in depth by two or more. Each of those is rebuilt by rotations
    /// alone, so the whole call is linear in the number of nodes.
    pub fn rebalance(&mut self) {
        let (plan, ..) = Plan::of(self);
        let rotations = plan.apply(self);

        if rotations > 0 {
            debug!(rotations, depth = self.depth(), "rebalanced rope");
        }
    }

    // Rotates the subtree into a chain down the right spine, then folds the
    // chain into a tree of minimal depth whose leaves sit on the last two
    // levels.
    fn rebuild(&mut self, count: usize) -> usize {
        let mut rotations = self.straighten();

        let full = (1usize << (count + 1).ilog2()) - 1;
        rotations += self.compress(count - full);

        let mut size = full;
        while size > 1 {
            size /= 2;
            rotations += self.compress(size);
        }

        rotations
    }

    fn straighten(&mut self) -> usize {
        let mut rotations = 0;
        let mut cursor = self;
        loop {
            if cursor.left.is_some() {
                cursor.rotate_right();
                rotations += 1;
                continue;
            }
            match cursor.right.as_deref_mut() {
                Some(next) => cursor = next,
                None => break,
            }
        }

        rotations
    }

    // Rotates every other node of the right spine left, `count` times.
    fn compress(&mut self, count: usize) -> usize {
        let mut rotations = 0;
        let mut cursor = self;
        for _ in 0..count {
            cursor.rotate_left();
            rotations += 1;
            match cursor.right.as_deref_mut() {
                Some(next) => cursor = next,
                None => break,
            }
        }

        rotations
    }
}

/// What [`Rope::rebalance`] does to a subtree, worked out before any rotation.
enum Plan {
    Keep {
        left: Option<Box<Plan>>,
        right: Option<Box<Plan>>,
    },
    Rebuild {
        count: usize,
    },
}

impl Plan {
    // Returns the plan along with the depth the subtree will have once it is
    // applied and the number of nodes in it.
    fn of(rope: &Rope) -> (Plan, usize, usize) {
        let (left, left_depth, left_count) = Self::of_child(rope.left());
        let (right, right_depth, right_count) = Self::of_child(rope.right());
        let count = 1 + left_count + right_count;

        if left_depth.abs_diff(right_depth) < 2 {
            let depth = 1 + left_depth.max(right_depth);
            return (Plan::Keep { left, right }, depth, count);
        }

        (Plan::Rebuild { count }, count.ilog2() as usize + 1, count)
    }

    fn of_child(child: Option<&Rope>) -> (Option<Box<Plan>>, usize, usize) {
        match child {
            Some(child) => {
                let (plan, depth, count) = Self::of(child);
                (Some(Box::new(plan)), depth, count)
            }
            None => (None, 0, 0),
        }
    }

    fn apply(self, rope: &mut Rope) -> usize {
        match self {
            Plan::Rebuild { count } => rope.rebuild(count),
            Plan::Keep { left, right } => {
                let mut rotations = 0;
                if let (Some(plan), Some(node)) = (left, rope.left.as_deref_mut()) {
                    rotations += plan.apply(node);
                }
                if let (Some(plan), Some(node)) = (right, rope.right.as_deref_mut()) {
                    rotations += plan.apply(node);
                }
                rotations
            }
        }
    }
}
