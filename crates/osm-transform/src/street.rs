//! Street-type vocabulary and abbreviation rewriting.
//!
//! Both tables are plain values. They are built once (from the defaults or a
//! TOML file, see [`crate::config`]) and passed explicitly to the functions
//! that need them.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::StreetConfigError;

/// Tag key holding a street address.
pub const STREET_KEY: &str = "addr:street";

/// Tag key holding a display name.
pub const NAME_KEY: &str = "name";

/// Abbreviations found in the Denver sample extract.
pub const DEFAULT_ABBREVIATIONS: &[(&str, &str)] = &[
    ("St", "Street"),
    ("St.", "Street"),
    ("Ave", "Avenue"),
    ("Ave.", "Avenue"),
    ("Blvd", "Boulevard"),
    ("Blvd.", "Boulevard"),
    ("Dr", "Drive"),
    ("Dr.", "Drive"),
    ("Ct", "Court"),
    ("Ct.", "Court"),
    ("Pl", "Place"),
    ("Pl.", "Place"),
    ("Sq", "Square"),
    ("Sq.", "Square"),
    ("Ln", "Lane"),
    ("Ln.", "Lane"),
    ("Rd", "Road"),
    ("Rd.", "Road"),
    ("Tr", "Trail"),
    ("Tr.", "Trail"),
    ("Pkwy", "Parkway"),
    ("Pkwy.", "Parkway"),
    ("Cir", "Circle"),
    ("Cir.", "Circle"),
];

/// Street types accepted as already canonical by the auditor.
pub const DEFAULT_EXPECTED: &[&str] = &[
    "Street",
    "Avenue",
    "Boulevard",
    "Drive",
    "Court",
    "Place",
    "Square",
    "Lane",
    "Road",
    "Trail",
    "Parkway",
    "Commons",
];

/// Abbreviated token to canonical token.
///
/// Keys are case-sensitive literal tokens, including any trailing period.
/// No key maps to itself and no canonical token is also a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbbreviationMap {
    entries: BTreeMap<String, String>,
}

impl AbbreviationMap {
    /// Build a map, rejecting entries that would break whole-token rewriting.
    pub fn new<I, K, V>(entries: I) -> Result<Self, StreetConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries: BTreeMap<String, String> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        for (token, canonical) in &entries {
            if token.is_empty() || token.chars().any(char::is_whitespace) {
                return Err(StreetConfigError::InvalidToken {
                    token: token.clone(),
                });
            }
            if token == canonical {
                return Err(StreetConfigError::SelfMapping {
                    token: token.clone(),
                });
            }
            if entries.contains_key(canonical) {
                return Err(StreetConfigError::ChainedMapping {
                    token: token.clone(),
                    canonical: canonical.clone(),
                });
            }
        }

        Ok(Self { entries })
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for AbbreviationMap {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ABBREVIATIONS
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }
}

/// Canonical street-type suffixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedVocabulary {
    types: BTreeSet<String>,
}

impl ExpectedVocabulary {
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, street_type: &str) -> bool {
        self.types.contains(street_type)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for ExpectedVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_EXPECTED.iter().copied())
    }
}

/// Rewrite abbreviated tokens of `name` to their canonical form.
///
/// The name is split on whitespace and rejoined with single spaces. Only
/// whole tokens are matched: `"Blvd,"` is left alone even though `"Blvd"` is
/// a key.
pub fn normalize_name(name: &str, table: &AbbreviationMap) -> String {
    name.split_whitespace()
        .map(|token| table.get(token).unwrap_or(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip backticks and surrounding whitespace from a free-text value.
pub fn clean_value(value: &str) -> String {
    value.replace('`', "").trim().to_string()
}
