//! Field rules for each output stream.

use std::collections::BTreeMap;

use osm_model::RecordKind;

/// Value type a column must parse as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Integer,
    Float,
    String,
}

impl FieldType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
        }
    }

    /// Whether `value` is acceptable for this type.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Integer => value.trim().parse::<i64>().is_ok(),
            Self::Float => value
                .trim()
                .parse::<f64>()
                .is_ok_and(f64::is_finite),
            Self::String => true,
        }
    }
}

/// Rule for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub field_type: FieldType,
    pub required: bool,
}

impl FieldRule {
    pub const fn required(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: true,
        }
    }
}

/// Rules for every stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    records: BTreeMap<RecordKind, Vec<FieldRule>>,
}

impl Schema {
    pub fn new(records: BTreeMap<RecordKind, Vec<FieldRule>>) -> Self {
        Self { records }
    }

    /// Rules of a stream; empty when the stream is unconstrained.
    pub fn rules(&self, kind: RecordKind) -> &[FieldRule] {
        self.records.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for Schema {
    /// The relational schema the CSV files are loaded into.
    fn default() -> Self {
        use FieldType::{Float, Integer, String as Text};

        let tags = vec![
            FieldRule::required("id", Integer),
            FieldRule::required("key", Text),
            FieldRule::required("value", Text),
            FieldRule::required("type", Text),
        ];
        let mut records = BTreeMap::new();
        records.insert(
            RecordKind::Node,
            vec![
                FieldRule::required("id", Integer),
                FieldRule::required("lat", Float),
                FieldRule::required("lon", Float),
                FieldRule::required("user", Text),
                FieldRule::required("uid", Integer),
                FieldRule::required("version", Text),
                FieldRule::required("changeset", Integer),
                FieldRule::required("timestamp", Text),
            ],
        );
        records.insert(RecordKind::NodeTags, tags.clone());
        records.insert(
            RecordKind::Way,
            vec![
                FieldRule::required("id", Integer),
                FieldRule::required("user", Text),
                FieldRule::required("uid", Integer),
                FieldRule::required("version", Text),
                FieldRule::required("changeset", Integer),
                FieldRule::required("timestamp", Text),
            ],
        );
        records.insert(
            RecordKind::WayNodes,
            vec![
                FieldRule::required("id", Integer),
                FieldRule::required("node_id", Integer),
                FieldRule::required("position", Integer),
            ],
        );
        records.insert(RecordKind::WayTags, tags);
        Self { records }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_accepts() {
        assert!(FieldType::Integer.accepts("42"));
        assert!(FieldType::Integer.accepts("-7"));
        assert!(!FieldType::Integer.accepts("4.2"));
        assert!(!FieldType::Integer.accepts(""));
        assert!(FieldType::Float.accepts("39.7392"));
        assert!(FieldType::Float.accepts("-105"));
        assert!(!FieldType::Float.accepts("NaN"));
        assert!(!FieldType::Float.accepts("north"));
        assert!(FieldType::String.accepts(""));
    }

    #[test]
    fn test_default_schema_matches_headers() {
        let schema = Schema::default();
        for kind in RecordKind::ALL {
            let names: Vec<&str> = schema.rules(kind).iter().map(|r| r.name).collect();
            assert_eq!(names, kind.fields(), "{kind}");
        }
    }
}
