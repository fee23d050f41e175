//! Fixed field lists of the five record streams.

use serde::{Deserialize, Serialize};

use crate::element::ElementKind;

/// Columns of the node stream.
pub const NODE_FIELDS: &[&str] = &[
    "id",
    "lat",
    "lon",
    "user",
    "uid",
    "version",
    "changeset",
    "timestamp",
];

/// Columns of the way stream. Ways carry no coordinates.
pub const WAY_FIELDS: &[&str] = &["id", "user", "uid", "version", "changeset", "timestamp"];

/// Columns shared by the node tag and way tag streams.
pub const TAG_FIELDS: &[&str] = &["id", "key", "value", "type"];

/// Columns of the way node stream.
pub const WAY_NODE_FIELDS: &[&str] = &["id", "node_id", "position"];

/// One of the five output record streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Node,
    NodeTags,
    Way,
    WayNodes,
    WayTags,
}

impl RecordKind {
    /// All streams in output order.
    pub const ALL: [RecordKind; 5] = [
        Self::Node,
        Self::NodeTags,
        Self::Way,
        Self::WayNodes,
        Self::WayTags,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::NodeTags => "node_tags",
            Self::Way => "way",
            Self::WayNodes => "way_nodes",
            Self::WayTags => "way_tags",
        }
    }

    /// Header row of the stream.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::Node => NODE_FIELDS,
            Self::Way => WAY_FIELDS,
            Self::NodeTags | Self::WayTags => TAG_FIELDS,
            Self::WayNodes => WAY_NODE_FIELDS,
        }
    }

    /// Stream holding the element's own attributes.
    pub fn attributes_of(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Node => Self::Node,
            ElementKind::Way => Self::Way,
        }
    }

    /// Stream holding the element's tag rows.
    pub fn tags_of(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Node => Self::NodeTags,
            ElementKind::Way => Self::WayTags,
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
