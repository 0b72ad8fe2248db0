// sm130-rs/sm130/src/card/info.rs

use crate::types::{TagId, TagType};

/// Tag reported by a seek or select: its type and serial number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagInfo {
    /// Type byte reported by the reader
    pub tag_type: TagType,
    /// Serial number bytes
    pub id: TagId,
}

impl TagInfo {
    /// Pair a type with its id.
    pub fn new(tag_type: TagType, id: TagId) -> Self {
        Self { tag_type, id }
    }

    /// Type of the tag.
    pub fn tag_type(&self) -> TagType {
        self.tag_type
    }

    /// Serial number bytes of the tag.
    pub fn id(&self) -> &TagId {
        &self.id
    }

    /// Serial number as an integer, first byte most significant
    pub fn number(&self) -> u64 {
        self.id.as_u64()
    }
}

impl std::fmt::Display for TagInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} {}", self.tag_type, self.id)
    }
}
