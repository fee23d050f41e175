//! CSV output for shaped OpenStreetMap records.
//!
//! Records go to five streams (`nodes.csv`, `nodes_tags.csv`, `ways.csv`,
//! `ways_nodes.csv`, `ways_tags.csv`) through the [`RecordSink`] trait.

mod csv_tables;
mod error;
mod sink;
mod tables;

pub use csv_tables::CsvTables;
pub use error::{OutputError, Result};
pub use sink::{CollectSink, RecordSink, row_counts};
pub use tables::{Tables, file_name};
