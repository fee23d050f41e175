//! Raw elements as read from an OSM XML document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Element kinds that can be shaped into tabular records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Way,
}

impl ElementKind {
    /// Classify an XML tag name. Anything other than `node` or `way` is `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "node" => Some(Self::Node),
            "way" => Some(Self::Way),
            _ => None,
        }
    }

    /// XML tag name of this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Way => "way",
        }
    }
}

/// A child entry of an element, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChildEntry {
    /// `<tag k=".." v=".."/>`
    Tag { key: String, value: String },
    /// `<nd ref=".."/>`
    NodeRef { id: String },
}

impl ChildEntry {
    pub fn tag(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Tag {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn node_ref(id: impl Into<String>) -> Self {
        Self::NodeRef { id: id.into() }
    }
}

/// A parsed element: its tag name, scalar attributes, and child entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawElement {
    /// XML tag name (`node`, `way`, `relation`, ...).
    pub tag: String,
    /// Scalar attributes of the element itself (`id`, `lat`, `user`, ...).
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<ChildEntry>,
}

impl RawElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute setter, mostly for tests and fixtures.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder-style child setter.
    #[must_use]
    pub fn with_child(mut self, child: ChildEntry) -> Self {
        self.children.push(child);
        self
    }

    pub fn kind(&self) -> Option<ElementKind> {
        ElementKind::from_tag(&self.tag)
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Iterate `(key, value)` pairs of tag children.
    pub fn tags(&self) -> impl Iterator<Item = (&str, &str)> {
        self.children.iter().filter_map(|child| match child {
            ChildEntry::Tag { key, value } => Some((key.as_str(), value.as_str())),
            ChildEntry::NodeRef { .. } => None,
        })
    }

    /// Iterate referenced node ids in document order.
    pub fn node_refs(&self) -> impl Iterator<Item = &str> {
        self.children.iter().filter_map(|child| match child {
            ChildEntry::NodeRef { id } => Some(id.as_str()),
            ChildEntry::Tag { .. } => None,
        })
    }
}
