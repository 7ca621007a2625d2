use std::fmt;

use crate::rope::Rope;

/// Renders a rope one fragment per line, in text order, with each fragment
/// prefixed by one `-` per level of depth below the root.
///
/// A root `ABC` with a left child `DEF` and a right child `GHI` renders as
///
/// ```text
/// -DEF
/// ABC
/// -GHI
/// ```
pub struct TreeDisplay<'a> {
    rope: &'a Rope,
}

impl<'a> TreeDisplay<'a> {
    pub fn new(rope: &'a Rope) -> Self {
        Self { rope }
    }

    fn write_node(f: &mut fmt::Formatter<'_>, node: &Rope, indent: usize) -> fmt::Result {
        if let Some(left) = node.left() {
            Self::write_node(f, left, indent + 1)?;
        }

        writeln!(f, "{}{}", "-".repeat(indent), node.text())?;

        if let Some(right) = node.right() {
            Self::write_node(f, right, indent + 1)?;
        }

        Ok(())
    }
}

impl fmt::Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_node(f, self.rope, 0)
    }
}

impl Rope {
    pub fn display_tree(&self) -> TreeDisplay<'_> {
        TreeDisplay::new(self)
    }

    pub fn to_debug_string(&self) -> String {
        self.display_tree().to_string()
    }
}
