use std::mem;
use tracing::trace;

use crate::error::{Result, RopeError};
use crate::rope::Rope;

/// How a rope is cut in two by [`Rope::split_off_with`] and the edits built on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplitStrategy {
    /// Flatten the whole rope and rebuild both halves as single leaves.
    Flatten,
    /// Descend only into the subtree holding the split point and keep every
    /// other subtree as it is.
    #[default]
    Structural,
}

impl Rope {
    /// Builds a node with an empty fragment holding `left` and `right`.
    pub fn concat(left: Rope, right: Rope) -> Rope {
        Rope::from_parts(String::new(), Some(Box::new(left)), Some(Box::new(right)))
    }

    /// Attaches `other` at the end of the right spine.
    pub fn concat_right(&mut self, other: Rope) {
        match &mut self.right {
            Some(right) => right.concat_right(other),
            slot @ None => *slot = Some(Box::new(other)),
        }
    }

    /// Attaches a new leaf at the end of the left spine.
    pub fn prepend(&mut self, text: &str) {
        match &mut self.left {
            Some(left) => left.prepend(text),
            slot @ None => *slot = Some(Box::new(Rope::new(text))),
        }
    }

    /// Attaches a new leaf at the end of the right spine.
    pub fn append(&mut self, text: &str) {
        match &mut self.right {
            Some(right) => right.append(text),
            slot @ None => *slot = Some(Box::new(Rope::new(text))),
        }
    }

    /// Splits the rope into the first `position` bytes and the rest.
    pub fn split_at(mut self, position: usize) -> Result<(Rope, Rope)> {
        let rest = self.split_off(position)?;
        Ok((self, rest))
    }

    /// Splits by flattening, leaving `self` untouched. Both halves are leaves.
    pub fn split_at_flattening(&self, position: usize) -> Result<(Rope, Rope)> {
        self.check_position(position)?;
        Ok(self.split_flattening(position))
    }

    /// Truncates `self` to its first `position` bytes and returns the rest.
    ///
    /// On error `self` is left as it was.
    pub fn split_off(&mut self, position: usize) -> Result<Rope> {
        self.split_off_with(position, SplitStrategy::default())
    }

    pub fn split_off_with(&mut self, position: usize, strategy: SplitStrategy) -> Result<Rope> {
        self.check_position(position)?;

        let (head, tail) = match strategy {
            SplitStrategy::Flatten => self.split_flattening(position),
            SplitStrategy::Structural => mem::take(self).split_structural(position),
        };
        *self = head;
        Ok(tail)
    }

    /// Inserts `text` so that it starts at byte `location`.
    pub fn insert(&mut self, location: usize, text: &str) -> Result<()> {
        self.insert_with(location, text, SplitStrategy::default())
    }

    /// The inserted text becomes the root fragment, with the two halves of
    /// the old rope on either side.
    pub fn insert_with(
        &mut self,
        location: usize,
        text: &str,
        strategy: SplitStrategy,
    ) -> Result<()> {
        let tail = self.split_off_with(location, strategy)?;
        let head = mem::take(self);
        *self = Rope::from_parts(text.to_string(), head.into_child(), tail.into_child());
        Ok(())
    }

    /// Removes the bytes in `start..end` and returns them as a rope.
    pub fn delete_range(&mut self, start: usize, end: usize) -> Result<Rope> {
        self.delete_range_with(start, end, SplitStrategy::default())
    }

    pub fn delete_range_with(
        &mut self,
        start: usize,
        end: usize,
        strategy: SplitStrategy,
    ) -> Result<Rope> {
        let len = self.total_size();
        if end > len {
            return Err(RopeError::OutOfRange { position: end, limit: len });
        }
        if start > end {
            return Err(RopeError::OutOfRange { position: start, limit: end });
        }
        self.check_position(start)?;
        self.check_position(end)?;

        let tail = self.split_off_with(end, strategy)?;
        let removed = self.split_off_with(start, strategy)?;
        let head = mem::take(self);
        *self = match (head.into_child(), tail.into_child()) {
            (Some(head), Some(tail)) => Rope::concat(*head, *tail),
            (Some(kept), None) | (None, Some(kept)) => *kept,
            (None, None) => Rope::default(),
        };
        Ok(removed)
    }

    fn split_flattening(&self, position: usize) -> (Rope, Rope) {
        let mut text = self.to_string();
        let tail = text.split_off(position);
        (Rope::from(text), Rope::from(tail))
    }

    // Callers guarantee `position` is in range and on a char boundary.
    fn split_structural(self, position: usize) -> (Rope, Rope) {
        let (text, left, right) = self.into_parts();
        let left_size = left.as_ref().map_or(0, |left| left.total_size());
        let local_end = left_size + text.len();

        match (left, right) {
            (Some(left), right) if position < left_size => {
                trace!(position, left_size, "split descends left");
                let (head, inner) = left.split_structural(position);
                (head, joined(text, inner.into_child(), right))
            }
            (left, Some(right)) if position > local_end => {
                trace!(position, local_end, "split descends right");
                let (inner, tail) = right.split_structural(position - local_end);
                (joined(text, left, inner.into_child()), tail)
            }
            (left, right) => {
                trace!(position, left_size, "split inside fragment");
                let mut head = text;
                let tail = head.split_off(position - left_size);
                (joined(head, left, None), joined(tail, None, right))
            }
        }
    }

    // An empty leaf carries nothing worth keeping as a child.
    fn into_child(self) -> Option<Box<Rope>> {
        let bare = self.text().is_empty() && self.left.is_none() && self.right.is_none();
        (!bare).then(|| Box::new(self))
    }
}

// Builds a node, but lets a lone child stand in for an empty-fragment parent.
fn joined(text: String, left: Option<Box<Rope>>, right: Option<Box<Rope>>) -> Rope {
    if !text.is_empty() {
        return Rope::from_parts(text, left, right);
    }

    match (left, right) {
        (Some(only), None) | (None, Some(only)) => *only,
        (left, right) => Rope::from_parts(text, left, right),
    }
}
