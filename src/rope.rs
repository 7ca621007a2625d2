use std::fmt;

use crate::error::{Result, RopeError};

/// A node of a rope, and the handle to the whole tree rooted at it.
///
/// Every node stores a fragment of text. The represented sequence is the
/// in-order flattening `left + text + right`. Children are owned, so a
/// subtree is never reachable from two parents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rope {
    text: String,
    size: usize,
    pub(crate) left: Option<Box<Rope>>,
    pub(crate) right: Option<Box<Rope>>,
}

impl Rope {
    /// Builds a leaf holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self::from_parts(text.into(), None, None)
    }

    /// Builds a node holding `text` with the given subtrees on either side.
    pub fn with_children(text: impl Into<String>, left: Option<Rope>, right: Option<Rope>) -> Self {
        Self::from_parts(text.into(), left.map(Box::new), right.map(Box::new))
    }

    pub(crate) fn from_parts(
        text: String,
        left: Option<Box<Rope>>,
        right: Option<Box<Rope>>,
    ) -> Self {
        Self {
            size: text.len(),
            text,
            left,
            right,
        }
    }

    pub(crate) fn into_parts(self) -> (String, Option<Box<Rope>>, Option<Box<Rope>>) {
        (self.text, self.left, self.right)
    }

    /// The fragment stored at this node, excluding descendants.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the local fragment.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn left(&self) -> Option<&Rope> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Rope> {
        self.right.as_deref()
    }

    /// Length of the full sequence rooted at this node.
    pub fn total_size(&self) -> usize {
        self.left.as_ref().map_or(0, |left| left.total_size())
            + self.size
            + self.right.as_ref().map_or(0, |right| right.total_size())
    }

    pub fn len(&self) -> usize {
        self.total_size()
    }

    pub fn is_empty(&self) -> bool {
        self.total_size() == 0
    }

    pub fn depth(&self) -> usize {
        1 + self.left_depth().max(self.right_depth())
    }

    pub fn left_depth(&self) -> usize {
        self.left.as_ref().map_or(0, |left| left.depth())
    }

    pub fn right_depth(&self) -> usize {
        self.right.as_ref().map_or(0, |right| right.depth())
    }

    /// Whether every node in the tree has subtrees whose depths differ by
    /// less than two.
    pub fn is_balanced(&self) -> bool {
        self.balanced_depth().is_some()
    }

    // Depth of the tree, or None as soon as an unbalanced node is found.
    fn balanced_depth(&self) -> Option<usize> {
        let left = match &self.left {
            Some(left) => left.balanced_depth()?,
            None => 0,
        };
        let right = match &self.right {
            Some(right) => right.balanced_depth()?,
            None => 0,
        };

        (left.abs_diff(right) < 2).then_some(1 + left.max(right))
    }

    /// Checks that `position` can split the rope: it must not exceed the
    /// length and must fall between two chars of the fragment it lands in.
    pub(crate) fn check_position(&self, position: usize) -> Result<()> {
        let len = self.total_size();
        if position > len {
            return Err(RopeError::OutOfRange { position, limit: len });
        }
        if !self.is_char_boundary(position) {
            return Err(RopeError::NotCharBoundary { position });
        }

        Ok(())
    }

    fn is_char_boundary(&self, position: usize) -> bool {
        let left_size = self.left.as_ref().map_or(0, |left| left.total_size());
        if position < left_size {
            return self.left.as_ref().is_some_and(|left| left.is_char_boundary(position));
        }

        let offset = position - left_size;
        if offset <= self.size {
            return self.text.is_char_boundary(offset);
        }

        self.right
            .as_ref()
            .is_some_and(|right| right.is_char_boundary(offset - self.size))
    }

    fn collect_text(&self, result: &mut String) {
        if let Some(left) = &self.left {
            left.collect_text(result);
        }
        result.push_str(&self.text);
        if let Some(right) = &self.right {
            right.collect_text(result);
        }
    }
}

impl fmt::Display for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = String::with_capacity(self.total_size());
        self.collect_text(&mut result);
        f.write_str(&result)
    }
}

impl From<&str> for Rope {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Rope {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
