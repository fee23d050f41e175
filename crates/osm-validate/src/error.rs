//! Validation failure reported for a shaped record.

use std::fmt;

use osm_model::RecordKind;
use thiserror::Error;

/// What is wrong with a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    /// Required field is absent.
    Missing,
    /// Value does not parse as the declared type.
    TypeMismatch {
        expected: &'static str,
        value: String,
    },
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("required field"),
            Self::TypeMismatch { expected, value } => {
                write!(f, "must be of {expected} type, got '{value}'")
            }
        }
    }
}

/// First schema violation found in a shaped record.
///
/// Names the stream, the field, and (for multi-row streams) the row index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("element of type '{record}' has the following errors: {field}{}: {issue}", row_suffix(.row))]
pub struct ValidationError {
    pub record: RecordKind,
    pub field: String,
    pub row: Option<usize>,
    pub issue: FieldIssue,
}

fn row_suffix(row: &Option<usize>) -> String {
    row.map(|row| format!(" (row {row})")).unwrap_or_default()
}
