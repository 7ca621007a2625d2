use serde::{Deserialize, Serialize};

use crate::rope::Rope;

/// A nested description of a rope's shape.
///
/// Absent children are skipped when serialized, and a missing or `null`
/// child is read back as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RopeMap {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<RopeMap>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<RopeMap>>,
}

impl RopeMap {
    pub fn leaf(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn node(text: impl Into<String>, left: Option<RopeMap>, right: Option<RopeMap>) -> Self {
        Self {
            text: text.into(),
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }
}

impl Rope {
    pub fn from_map(map: RopeMap) -> Self {
        let RopeMap { text, left, right } = map;
        Rope::with_children(
            text,
            left.map(|left| Rope::from_map(*left)),
            right.map(|right| Rope::from_map(*right)),
        )
    }

    pub fn to_map(&self) -> RopeMap {
        RopeMap::node(
            self.text(),
            self.left().map(Rope::to_map),
            self.right().map(Rope::to_map),
        )
    }
}

impl From<RopeMap> for Rope {
    fn from(map: RopeMap) -> Self {
        Rope::from_map(map)
    }
}

impl From<&Rope> for RopeMap {
    fn from(rope: &Rope) -> Self {
        rope.to_map()
    }
}
