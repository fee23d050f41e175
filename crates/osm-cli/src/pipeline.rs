//! Processing pipeline with explicit stages.
//!
//! Each element flows through the stages one at a time:
//! 1. **Ingest**: read the next node or way from the XML stream
//! 2. **Shape**: classify tags, normalize names, number way nodes
//! 3. **Validate**: check every row against the schema (optional)
//! 4. **Output**: hand the record to a [`RecordSink`]
//!
//! The first failure in any stage aborts the run.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use osm_ingest::{IngestError, open_osm_file};
use osm_model::{ElementKind, RawElement, RecordKind, ShapedRecord};
use osm_output::{RecordSink, Tables, row_counts};
use osm_transform::{ExpectedVocabulary, ShapeOptions, StreetTypeAudit, shape_element};
use osm_validate::{Schema, validate_record};
use tracing::{debug, info, info_span};

/// Options for [`process_elements`].
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub shape: ShapeOptions,
    /// Validate every record before it is written.
    pub validate: bool,
    pub schema: Schema,
}

impl ProcessOptions {
    /// Shaping with `shape`, validation against the default schema.
    pub fn new(shape: ShapeOptions) -> Self {
        Self {
            shape,
            validate: true,
            schema: Schema::default(),
        }
    }

    #[must_use]
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    #[must_use]
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self::new(ShapeOptions::default())
    }
}

/// Counts gathered while processing a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    pub nodes: usize,
    pub ways: usize,
    /// Rows handed to the sink, per stream.
    pub rows: Tables<usize>,
    /// Dropped tag keys and how often each was seen.
    pub dropped: BTreeMap<String, usize>,
}

impl ProcessSummary {
    pub fn elements(&self) -> usize {
        self.nodes + self.ways
    }

    pub fn dropped_total(&self) -> usize {
        self.dropped.values().sum()
    }

    fn record(&mut self, record: &ShapedRecord) {
        match record.kind {
            ElementKind::Node => self.nodes += 1,
            ElementKind::Way => self.ways += 1,
        }
        let counts = row_counts(record);
        for kind in RecordKind::ALL {
            *self.rows.get_mut(kind) += *counts.get(kind);
        }
        for key in &record.dropped_keys {
            *self.dropped.entry(key.clone()).or_default() += 1;
        }
    }
}

/// Shape, validate and write every element of a stream.
pub fn process_elements<I, S>(
    elements: I,
    sink: &mut S,
    options: &ProcessOptions,
) -> Result<ProcessSummary>
where
    I: IntoIterator<Item = Result<RawElement, IngestError>>,
    S: RecordSink + ?Sized,
{
    let mut summary = ProcessSummary::default();
    for element in elements {
        let element = element.context("read element")?;
        let record = shape_element(&element, &options.shape).with_context(|| {
            format!(
                "shape {} {}",
                element.tag,
                element.id().unwrap_or("<unknown id>")
            )
        })?;
        if options.validate {
            validate_record(&record, &options.schema).with_context(|| {
                format!(
                    "validate {} {}",
                    element.tag,
                    record.id().unwrap_or("<unknown id>")
                )
            })?;
        }
        sink.write_record(&record).context("write record")?;
        summary.record(&record);
        debug!(
            element = %element.tag,
            id = record.id().unwrap_or(""),
            tags = record.tags.len(),
            way_nodes = record.way_nodes.len(),
            dropped = record.dropped_keys.len(),
            "processed element"
        );
    }
    sink.finish().context("flush output")?;
    Ok(summary)
}

/// Process an OSM file into `sink`.
pub fn process_map<S>(
    input: &Path,
    sink: &mut S,
    options: &ProcessOptions,
) -> Result<ProcessSummary>
where
    S: RecordSink + ?Sized,
{
    let span = info_span!("process", input = %input.display(), validate = options.validate);
    let _guard = span.enter();
    let start = Instant::now();

    let reader = open_osm_file(input).context("open OSM file")?;
    let summary = process_elements(reader, sink, options)?;

    info!(
        nodes = summary.nodes,
        ways = summary.ways,
        node_tags = summary.rows.node_tags,
        way_nodes = summary.rows.way_nodes,
        way_tags = summary.rows.way_tags,
        dropped = summary.dropped_total(),
        duration_ms = start.elapsed().as_millis(),
        "process complete"
    );
    Ok(summary)
}

/// Collect unexpected street types from an element stream.
pub fn audit_stream<I>(elements: I, vocabulary: &ExpectedVocabulary) -> Result<StreetTypeAudit>
where
    I: IntoIterator<Item = Result<RawElement, IngestError>>,
{
    let mut audit = StreetTypeAudit::new();
    for element in elements {
        let element = element.context("read element")?;
        audit.audit_element(&element, vocabulary);
    }
    Ok(audit)
}

/// Audit the street names of an OSM file.
pub fn audit_map(input: &Path, vocabulary: &ExpectedVocabulary) -> Result<StreetTypeAudit> {
    let span = info_span!("audit", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let reader = open_osm_file(input).context("open OSM file")?;
    let audit = audit_stream(reader, vocabulary)?;

    info!(
        street_types = audit.len(),
        duration_ms = start.elapsed().as_millis(),
        "audit complete"
    );
    Ok(audit)
}
