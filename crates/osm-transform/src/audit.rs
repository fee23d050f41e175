//! Street-type auditing.
//!
//! The auditor never rewrites anything. It collects street names whose
//! trailing token is not an expected street type, grouped by that token, so a
//! person can decide what belongs in the abbreviation table.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use osm_model::RawElement;
use regex::Regex;

use crate::street::{AbbreviationMap, ExpectedVocabulary, STREET_KEY, normalize_name};

/// Last word of a name, period included, anchored at the end.
static STREET_TYPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b\S+\.?$").expect("Invalid street type regex"));

/// Trailing street-type token of a name, if any.
///
/// A single trailing newline is ignored; any other trailing whitespace means
/// there is no trailing token.
pub fn street_type(name: &str) -> Option<&str> {
    let name = name.strip_suffix('\n').unwrap_or(name);
    STREET_TYPE_REGEX.find(name).map(|m| m.as_str())
}

/// Whether a tag key holds a street address.
pub fn is_street_name(key: &str) -> bool {
    key == STREET_KEY
}

/// A proposed rewrite for an audited street name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub street_type: String,
    pub original: String,
    pub normalized: String,
}

impl Rewrite {
    pub fn changes(&self) -> bool {
        self.original != self.normalized
    }
}

/// Unexpected street types mapped to the names that carry them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreetTypeAudit {
    types: BTreeMap<String, BTreeSet<String>>,
}

impl StreetTypeAudit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Audit every street-name tag of a node or way. Other elements are skipped.
    pub fn audit_element(&mut self, element: &RawElement, vocabulary: &ExpectedVocabulary) {
        if element.kind().is_none() {
            return;
        }
        for (key, value) in element.tags() {
            if is_street_name(key) {
                audit_street_type(self, value, vocabulary);
            }
        }
    }

    /// Names recorded under a street type.
    pub fn names(&self, street_type: &str) -> Option<&BTreeSet<String>> {
        self.types.get(street_type)
    }

    /// Number of distinct unexpected street types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.types.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// What each recorded name would become under `table`.
    pub fn suggest(&self, table: &AbbreviationMap) -> Vec<Rewrite> {
        self.types
            .iter()
            .flat_map(|(street_type, names)| {
                names.iter().map(move |name| Rewrite {
                    street_type: street_type.clone(),
                    original: name.clone(),
                    normalized: normalize_name(name, table),
                })
            })
            .collect()
    }

    pub fn into_inner(self) -> BTreeMap<String, BTreeSet<String>> {
        self.types
    }
}

/// Record `street_name` under its trailing token when that token is not an
/// expected street type.
pub fn audit_street_type(
    audit: &mut StreetTypeAudit,
    street_name: &str,
    vocabulary: &ExpectedVocabulary,
) {
    let Some(street_type) = street_type(street_name) else {
        return;
    };
    if vocabulary.contains(street_type) {
        return;
    }
    audit
        .types
        .entry(street_type.to_string())
        .or_default()
        .insert(street_name.to_string());
}

/// Audit a batch of elements.
pub fn audit_elements<'a, I>(elements: I, vocabulary: &ExpectedVocabulary) -> StreetTypeAudit
where
    I: IntoIterator<Item = &'a RawElement>,
{
    let mut audit = StreetTypeAudit::new();
    for element in elements {
        audit.audit_element(element, vocabulary);
    }
    audit
}
