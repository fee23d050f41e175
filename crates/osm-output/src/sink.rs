//! Destination for shaped records.

use osm_model::{RecordKind, ShapedRecord};

use crate::error::Result;
use crate::tables::Tables;

/// Consumes shaped records one element at a time.
pub trait RecordSink {
    /// Write every row of one record.
    fn write_record(&mut self, record: &ShapedRecord) -> Result<()>;

    /// Flush buffered rows. Called once after the last record.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Number of rows a record contributes to each stream.
pub fn row_counts(record: &ShapedRecord) -> Tables<usize> {
    let mut counts = Tables::default();
    *counts.get_mut(record.attribute_stream()) += 1;
    *counts.get_mut(record.tag_stream()) += record.tags.len();
    *counts.get_mut(RecordKind::WayNodes) += record.way_nodes.len();
    counts
}

/// Keeps records in memory.
#[derive(Debug, Default)]
pub struct CollectSink {
    pub records: Vec<ShapedRecord>,
}

impl RecordSink for CollectSink {
    fn write_record(&mut self, record: &ShapedRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}
