//! Error types for OSM XML ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading an OSM document.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file could not be opened.
    #[error("failed to open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed XML or an I/O failure underneath the parser.
    #[error("XML error at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    /// A `tag` or `nd` child lacks an attribute every row needs.
    #[error("<{child}> inside {element} {id} is missing attribute '{attribute}'")]
    MissingChildAttribute {
        element: String,
        id: String,
        child: &'static str,
        attribute: &'static str,
    },

    /// Document ended inside an element.
    #[error("document ended inside <{element}> {id}")]
    UnexpectedEof { element: String, id: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::MissingChildAttribute {
            element: "way".to_string(),
            id: "7".to_string(),
            child: "nd",
            attribute: "ref",
        };
        assert_eq!(err.to_string(), "<nd> inside way 7 is missing attribute 'ref'");
    }
}
