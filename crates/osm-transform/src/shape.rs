//! Shaping of one node or way into its tabular records.
//!
//! Each tag child is classified, first match wins:
//!
//! 1. key contains a problem character: dropped
//! 2. key is `lower:lower...`: split on the first colon into type and key
//! 3. key is `addr:street`: split on the colon, value cleaned and normalized
//! 4. key is `name`: value cleaned and normalized, type `name`
//! 5. anything else: kept as is with the default tag type
//!
//! `addr:street` itself matches rule 2, so street values pass through
//! unchanged.
//!
//! Node references of a way become way node rows numbered from 0 in document
//! order.

use std::sync::LazyLock;

use osm_model::{
    ChildEntry, ElementKind, NODE_FIELDS, RawElement, ShapedRecord, TagRow, WAY_FIELDS,
    WayNodeRow,
};
use regex::Regex;
use tracing::{trace, warn};

use crate::error::{Result, ShapeError};
use crate::street::{AbbreviationMap, NAME_KEY, STREET_KEY, clean_value, normalize_name};

/// Characters that cannot round-trip through a flat tag table.
pub static PROBLEM_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[=+/&<>;'"?%#$@,. \t\r\n]"#).expect("Invalid problem character regex")
});

/// Lowercase namespaced key such as `addr:city`.
static LOWER_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z]|_)+:([a-z]|_)+").expect("Invalid namespaced key regex"));

/// Tag type used for keys without a namespace.
pub const DEFAULT_TAG_TYPE: &str = "regular";

/// Options controlling [`shape_element`].
#[derive(Debug, Clone)]
pub struct ShapeOptions {
    /// Node attributes to copy (intersected with [`NODE_FIELDS`]).
    pub node_fields: Vec<String>,
    /// Way attributes to copy (intersected with [`WAY_FIELDS`]).
    pub way_fields: Vec<String>,
    /// Keys matching this pattern are dropped.
    pub problem_chars: Regex,
    pub default_tag_type: String,
    pub abbreviations: AbbreviationMap,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            node_fields: NODE_FIELDS.iter().map(|f| (*f).to_string()).collect(),
            way_fields: WAY_FIELDS.iter().map(|f| (*f).to_string()).collect(),
            problem_chars: PROBLEM_CHARS.clone(),
            default_tag_type: DEFAULT_TAG_TYPE.to_string(),
            abbreviations: AbbreviationMap::default(),
        }
    }
}

impl ShapeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_abbreviations(mut self, abbreviations: AbbreviationMap) -> Self {
        self.abbreviations = abbreviations;
        self
    }

    #[must_use]
    pub fn with_node_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.node_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_way_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.way_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_problem_chars(mut self, pattern: Regex) -> Self {
        self.problem_chars = pattern;
        self
    }

    #[must_use]
    pub fn with_default_tag_type(mut self, tag_type: impl Into<String>) -> Self {
        self.default_tag_type = tag_type.into();
        self
    }
}

/// How a tag key is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass<'a> {
    Problem,
    StreetName { namespace: &'a str, key: &'a str },
    Namespaced { namespace: &'a str, key: &'a str },
    DisplayName,
    Regular,
}

/// Classify a tag key.
pub fn classify_tag<'a>(key: &'a str, problem_chars: &Regex) -> TagClass<'a> {
    if problem_chars.is_match(key) {
        return TagClass::Problem;
    }
    if LOWER_COLON.is_match(key) {
        let (namespace, key) = split_namespace(key);
        return TagClass::Namespaced { namespace, key };
    }
    if key == STREET_KEY {
        let (namespace, key) = split_namespace(key);
        return TagClass::StreetName { namespace, key };
    }
    if key == NAME_KEY {
        return TagClass::DisplayName;
    }
    TagClass::Regular
}

fn split_namespace(key: &str) -> (&str, &str) {
    key.split_once(':').unwrap_or((key, ""))
}

/// Shape a node or way into its attribute row, tag rows and way node rows.
///
/// Fails without producing anything when the element is neither a node nor
/// a way, or when a selected attribute (or `id`) is missing.
pub fn shape_element(element: &RawElement, options: &ShapeOptions) -> Result<ShapedRecord> {
    let kind = element
        .kind()
        .ok_or_else(|| ShapeError::UnsupportedElement {
            tag: element.tag.clone(),
        })?;
    let (fixed_fields, desired) = match kind {
        ElementKind::Node => (NODE_FIELDS, &options.node_fields),
        ElementKind::Way => (WAY_FIELDS, &options.way_fields),
    };
    let missing = |attribute: &str| ShapeError::MissingAttribute {
        element: kind.tag(),
        id: element.id().map(str::to_string),
        attribute: attribute.to_string(),
    };

    let mut record = ShapedRecord::new(kind);
    for field in fixed_fields {
        if !desired.iter().any(|wanted| wanted == field) {
            continue;
        }
        let value = element.attribute(field).ok_or_else(|| missing(*field))?;
        record.attributes.push((*field, value.to_string()));
    }

    let id = element.id().ok_or_else(|| missing("id"))?;
    let mut position = 0usize;
    for child in &element.children {
        match child {
            ChildEntry::Tag { key, value } => {
                match shape_tag(id, key, value, options) {
                    Some(row) => record.tags.push(row),
                    None => {
                        trace!(
                            element = kind.tag(),
                            id,
                            key = %key,
                            "dropped tag with problem characters"
                        );
                        record.dropped_keys.push(key.clone());
                    }
                }
            }
            ChildEntry::NodeRef { id: node_id } => {
                if kind != ElementKind::Way {
                    warn!(id, node_id = %node_id, "ignoring node reference inside a node");
                    continue;
                }
                record.way_nodes.push(WayNodeRow {
                    id: id.to_string(),
                    node_id: node_id.clone(),
                    position,
                });
                position += 1;
            }
        }
    }

    Ok(record)
}

/// Shape a single tag, or `None` when it must be dropped.
pub fn shape_tag(id: &str, key: &str, value: &str, options: &ShapeOptions) -> Option<TagRow> {
    let row = match classify_tag(key, &options.problem_chars) {
        TagClass::Problem => return None,
        TagClass::StreetName { namespace, key } => {
            TagRow::new(id, key, rewrite(id, value, options), namespace)
        }
        TagClass::Namespaced { namespace, key } => TagRow::new(id, key, value, namespace),
        TagClass::DisplayName => TagRow::new(id, key, rewrite(id, value, options), key),
        TagClass::Regular => TagRow::new(id, key, value, options.default_tag_type.as_str()),
    };
    Some(row)
}

fn rewrite(id: &str, value: &str, options: &ShapeOptions) -> String {
    let normalized = normalize_name(&clean_value(value), &options.abbreviations);
    if normalized != value {
        trace!(id, original = %value, normalized = %normalized, "rewrote name");
    }
    normalized
}
