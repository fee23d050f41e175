//! Shaped records produced from one element.

use serde::{Deserialize, Serialize};

use crate::element::ElementKind;
use crate::fields::RecordKind;

/// A tag row: `id, key, value, type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRow {
    /// Id of the owning node or way.
    pub id: String,
    pub key: String,
    pub value: String,
    /// Namespace prefix of the key, or the default tag type.
    #[serde(rename = "type")]
    pub tag_type: String,
}

impl TagRow {
    pub fn new(
        id: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
        tag_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
            value: value.into(),
            tag_type: tag_type.into(),
        }
    }

    /// Value of a column by header name.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "key" => Some(&self.key),
            "value" => Some(&self.value),
            "type" => Some(&self.tag_type),
            _ => None,
        }
    }
}

/// A way node row: `id, node_id, position`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WayNodeRow {
    /// Id of the owning way.
    pub id: String,
    pub node_id: String,
    /// 0-based position of the reference within the way.
    pub position: usize,
}

impl WayNodeRow {
    /// Value of a column by header name, rendered as text.
    pub fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.clone()),
            "node_id" => Some(self.node_id.clone()),
            "position" => Some(self.position.to_string()),
            _ => None,
        }
    }
}

/// The tabular form of one node or way.
///
/// `attributes` is ordered by the stream's field list. `way_nodes` is always
/// empty for nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapedRecord {
    pub kind: ElementKind,
    pub attributes: Vec<(&'static str, String)>,
    pub tags: Vec<TagRow>,
    pub way_nodes: Vec<WayNodeRow>,
    /// Tag keys discarded for containing problem characters.
    pub dropped_keys: Vec<String>,
}

impl ShapedRecord {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attributes: Vec::new(),
            tags: Vec::new(),
            way_nodes: Vec::new(),
            dropped_keys: Vec::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    /// Stream receiving the element's attribute row.
    pub fn attribute_stream(&self) -> RecordKind {
        RecordKind::attributes_of(self.kind)
    }

    /// Stream receiving the element's tag rows.
    pub fn tag_stream(&self) -> RecordKind {
        RecordKind::tags_of(self.kind)
    }
}
