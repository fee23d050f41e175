//! Street-name normalization and element shaping for OpenStreetMap exports.
//!
//! - **Normalization** (`street`): whole-token rewriting of abbreviated street
//!   types (`Blvd` to `Boulevard`)
//! - **Auditing** (`audit`): collect street names whose trailing token is not
//!   an expected street type
//! - **Shaping** (`shape`): turn one node or way into attribute, tag and way
//!   node rows
//! - **Configuration** (`config`): built-in tables or a TOML replacement
//!
//! # Example
//!
//! ```ignore
//! use osm_transform::{ShapeOptions, StreetConfig, shape_element};
//!
//! let config = StreetConfig::resolve(None)?;
//! let options = ShapeOptions::new().with_abbreviations(config.abbreviations);
//! let record = shape_element(&element, &options)?;
//! ```

pub mod audit;
pub mod config;
pub mod error;
pub mod shape;
pub mod street;

pub use audit::{
    Rewrite, StreetTypeAudit, audit_elements, audit_street_type, is_street_name, street_type,
};
pub use config::{STREET_CONFIG_ENV_VAR, StreetConfig};
pub use error::{Result, ShapeError, StreetConfigError};
pub use shape::{
    DEFAULT_TAG_TYPE, PROBLEM_CHARS, ShapeOptions, TagClass, classify_tag, shape_element,
    shape_tag,
};
pub use street::{
    AbbreviationMap, DEFAULT_ABBREVIATIONS, DEFAULT_EXPECTED, ExpectedVocabulary, NAME_KEY,
    STREET_KEY, clean_value, normalize_name,
};
