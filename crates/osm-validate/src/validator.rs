//! Record validation against a [`Schema`].

use osm_model::{RecordKind, ShapedRecord};
use tracing::debug;

use crate::error::{FieldIssue, ValidationError};
use crate::schema::{FieldRule, Schema};

/// Validate every row of a shaped record.
///
/// Rows are checked attributes first, then way nodes, then tags; the first
/// violation is returned.
pub fn validate_record(record: &ShapedRecord, schema: &Schema) -> Result<(), ValidationError> {
    check_row(
        schema.rules(record.attribute_stream()),
        record.attribute_stream(),
        None,
        |name| record.attribute(name).map(str::to_string),
    )?;

    for (index, row) in record.way_nodes.iter().enumerate() {
        check_row(
            schema.rules(RecordKind::WayNodes),
            RecordKind::WayNodes,
            Some(index),
            |name| row.field(name),
        )?;
    }

    let tag_stream = record.tag_stream();
    for (index, row) in record.tags.iter().enumerate() {
        check_row(schema.rules(tag_stream), tag_stream, Some(index), |name| {
            row.field(name).map(str::to_string)
        })?;
    }

    Ok(())
}

fn check_row<F>(
    rules: &[FieldRule],
    record: RecordKind,
    row: Option<usize>,
    lookup: F,
) -> Result<(), ValidationError>
where
    F: Fn(&str) -> Option<String>,
{
    for rule in rules {
        let issue = match lookup(rule.name) {
            None if rule.required => Some(FieldIssue::Missing),
            None => None,
            Some(value) if !rule.field_type.accepts(&value) => Some(FieldIssue::TypeMismatch {
                expected: rule.field_type.label(),
                value,
            }),
            Some(_) => None,
        };
        if let Some(issue) = issue {
            debug!(record = %record, field = rule.name, ?row, %issue, "schema violation");
            return Err(ValidationError {
                record,
                field: rule.name.to_string(),
                row,
                issue,
            });
        }
    }
    Ok(())
}
