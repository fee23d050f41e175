//! CSV files for the five record streams.
//!
//! Every file gets its header row as soon as it is opened, so a stream that
//! never receives a row still has a header.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use osm_model::{RecordKind, ShapedRecord};
use tracing::debug;

use crate::error::{OutputError, Result};
use crate::sink::{RecordSink, row_counts};
use crate::tables::{Tables, file_name};

/// Writers for the five streams.
pub struct CsvTables<W: Write> {
    writers: Tables<csv::Writer<W>>,
    rows: Tables<usize>,
}

impl CsvTables<File> {
    /// Create (or truncate) the five CSV files in `dir`.
    pub fn create(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let files = Tables::<PathBuf>::from_fn(|kind| dir.join(file_name(kind))).try_map(
            |_, path| {
                File::create(&path).map_err(|source| OutputError::CreateFile { path, source })
            },
        )?;
        debug!(dir = %dir.display(), "created output tables");
        Self::new(files)
    }
}

impl<W: Write> CsvTables<W> {
    /// Wrap one writer per stream and write the header rows.
    pub fn new(outputs: Tables<W>) -> Result<Self> {
        let writers = outputs.try_map(|kind, output| {
            let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);
            writer
                .write_record(kind.fields())
                .map_err(|source| OutputError::Csv {
                    table: kind,
                    source,
                })?;
            Ok::<_, OutputError>(writer)
        })?;
        Ok(Self {
            writers,
            rows: Tables::default(),
        })
    }

    /// Data rows written so far, per stream.
    pub fn rows(&self) -> &Tables<usize> {
        &self.rows
    }

    /// Flush and return the underlying writers.
    pub fn into_inner(self) -> Result<Tables<W>> {
        self.writers.try_map(|kind, writer| {
            writer.into_inner().map_err(|err| OutputError::Flush {
                table: kind,
                source: err.into_error(),
            })
        })
    }

    fn write_attributes(&mut self, record: &ShapedRecord) -> Result<()> {
        let kind = record.attribute_stream();
        let row: Vec<&str> = kind
            .fields()
            .iter()
            .map(|field| record.attribute(field).unwrap_or_default())
            .collect();
        self.writers
            .get_mut(kind)
            .write_record(&row)
            .map_err(|source| OutputError::Csv {
                table: kind,
                source,
            })
    }
}

impl<W: Write> RecordSink for CsvTables<W> {
    fn write_record(&mut self, record: &ShapedRecord) -> Result<()> {
        self.write_attributes(record)?;

        let way_nodes = self.writers.get_mut(RecordKind::WayNodes);
        for row in &record.way_nodes {
            way_nodes
                .serialize(row)
                .map_err(|source| OutputError::Csv {
                    table: RecordKind::WayNodes,
                    source,
                })?;
        }

        let tag_stream = record.tag_stream();
        let tags = self.writers.get_mut(tag_stream);
        for row in &record.tags {
            tags.serialize(row).map_err(|source| OutputError::Csv {
                table: tag_stream,
                source,
            })?;
        }

        let counts = row_counts(record);
        for kind in RecordKind::ALL {
            *self.rows.get_mut(kind) += *counts.get(kind);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        for kind in RecordKind::ALL {
            self.writers
                .get_mut(kind)
                .flush()
                .map_err(|source| OutputError::Flush {
                    table: kind,
                    source,
                })?;
        }
        Ok(())
    }
}
