//! Error types for CSV output.

use std::path::PathBuf;

use osm_model::RecordKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {table} row: {source}")]
    Csv {
        table: RecordKind,
        #[source]
        source: csv::Error,
    },

    #[error("failed to flush {table}: {source}")]
    Flush {
        table: RecordKind,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
