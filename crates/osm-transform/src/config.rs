//! Street configuration: abbreviation table plus expected vocabulary.
//!
//! The built-in tables are used unless a TOML file replaces them:
//!
//! ```toml
//! expected = ["Street", "Avenue"]
//!
//! [abbreviations]
//! St = "Street"
//! "Ave." = "Avenue"
//! ```
//!
//! A section left out of the file keeps its default.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::StreetConfigError;
use crate::street::{AbbreviationMap, ExpectedVocabulary};

/// Environment variable naming a street config file.
pub const STREET_CONFIG_ENV_VAR: &str = "OSM_TABULAR_MAPPING";

/// Tables driving normalization and auditing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreetConfig {
    pub abbreviations: AbbreviationMap,
    pub expected: ExpectedVocabulary,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StreetConfigFile {
    #[serde(default)]
    abbreviations: Option<BTreeMap<String, String>>,
    #[serde(default)]
    expected: Option<Vec<String>>,
}

impl StreetConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, StreetConfigError> {
        let file: StreetConfigFile =
            toml::from_str(text).map_err(|source| StreetConfigError::Toml { source })?;

        let abbreviations = match file.abbreviations {
            Some(entries) => AbbreviationMap::new(entries)?,
            None => AbbreviationMap::default(),
        };
        let expected = match file.expected {
            Some(types) => ExpectedVocabulary::new(types),
            None => ExpectedVocabulary::default(),
        };

        Ok(Self {
            abbreviations,
            expected,
        })
    }

    /// Load a TOML file.
    pub fn load(path: &Path) -> Result<Self, StreetConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| StreetConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(
            path = %path.display(),
            abbreviations = config.abbreviations.len(),
            expected = config.expected.len(),
            "loaded street config"
        );
        Ok(config)
    }

    /// Load from an explicit path, then `OSM_TABULAR_MAPPING`, else defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self, StreetConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match std::env::var_os(STREET_CONFIG_ENV_VAR) {
            Some(value) if !value.is_empty() => Self::load(&PathBuf::from(value)),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = StreetConfig::from_toml_str("").unwrap();
        assert_eq!(config, StreetConfig::default());
    }

    #[test]
    fn test_abbreviations_replace_defaults() {
        let config = StreetConfig::from_toml_str(
            r#"
[abbreviations]
Hwy = "Highway"
"Hwy." = "Highway"
"#,
        )
        .unwrap();
        assert_eq!(config.abbreviations.len(), 2);
        assert_eq!(config.abbreviations.get("Hwy."), Some("Highway"));
        assert_eq!(config.abbreviations.get("St"), None);
        assert_eq!(config.expected, ExpectedVocabulary::default());
    }

    #[test]
    fn test_expected_replaces_defaults() {
        let config = StreetConfig::from_toml_str(r#"expected = ["Highway"]"#).unwrap();
        assert!(config.expected.contains("Highway"));
        assert!(!config.expected.contains("Street"));
        assert_eq!(config.abbreviations, AbbreviationMap::default());
    }

    #[test]
    fn test_invalid_table_is_rejected() {
        let err = StreetConfig::from_toml_str(
            r#"
[abbreviations]
Street = "Street"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, StreetConfigError::SelfMapping { .. }));

        let err = StreetConfig::from_toml_str("unknown = 1").unwrap_err();
        assert!(matches!(err, StreetConfigError::Toml { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = StreetConfig::load(Path::new("/nonexistent/streets.toml")).unwrap_err();
        assert!(matches!(err, StreetConfigError::Io { .. }));
    }
}
