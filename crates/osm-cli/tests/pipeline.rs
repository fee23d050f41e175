//! Integration tests for the processing pipeline.

use std::fs;

use osm_cli::pipeline::{
    ProcessOptions, audit_map, audit_stream, process_elements, process_map,
};
use osm_ingest::OsmReader;
use osm_model::TagRow;
use osm_output::{CollectSink, CsvTables};
use osm_transform::ExpectedVocabulary;

const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6">
  <node id="261114295" lat="39.7392" lon="-104.9903" user="mapper" uid="10" version="7" changeset="11129782" timestamp="2012-03-28T18:31:23Z">
    <tag k="addr:street" v="S Colorado Blvd"/>
    <tag k="addr:city" v="Denver"/>
    <tag k="FIXME,note" v="check"/>
  </node>
  <node id="261114296" lat="39.7400" lon="-104.9910" user="mapper" uid="10" version="1" changeset="11129782" timestamp="2012-03-28T18:31:24Z"/>
  <way id="8581395" user="mapper" uid="10" version="3" changeset="14927972" timestamp="2013-02-05T22:43:49Z">
    <nd ref="261114295"/>
    <tag k="name" v="`E Yale Ave`"/>
    <nd ref="261114296"/>
    <tag k="highway" v="residential"/>
  </way>
  <relation id="1" user="mapper" uid="10" version="1" changeset="1" timestamp="2013-02-05T22:43:49Z">
    <member type="way" ref="8581395" role="outer"/>
  </relation>
</osm>
"#;

fn reader(xml: &str) -> OsmReader<&[u8]> {
    OsmReader::new(xml.as_bytes())
}

#[test]
fn test_process_collects_records_and_counts() {
    let mut sink = CollectSink::default();
    let summary =
        process_elements(reader(SAMPLE), &mut sink, &ProcessOptions::default()).unwrap();

    assert_eq!(summary.nodes, 2);
    assert_eq!(summary.ways, 1);
    assert_eq!(summary.rows.nodes, 2);
    assert_eq!(summary.rows.node_tags, 2);
    assert_eq!(summary.rows.way_nodes, 2);
    assert_eq!(summary.rows.way_tags, 2);
    assert_eq!(summary.dropped.get("FIXME,note"), Some(&1));

    assert_eq!(sink.records.len(), 3);
    assert_eq!(
        sink.records[0].tags[0],
        TagRow::new("261114295", "street", "S Colorado Blvd", "addr")
    );
    assert_eq!(
        sink.records[2].tags[0],
        TagRow::new("8581395", "name", "E Yale Avenue", "name")
    );
}

#[test]
fn test_process_writes_csv_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sample.osm");
    fs::write(&input, SAMPLE).unwrap();
    let out = dir.path().join("csv");

    let mut tables = CsvTables::create(&out).unwrap();
    let summary = process_map(&input, &mut tables, &ProcessOptions::default()).unwrap();
    tables.into_inner().unwrap();
    assert_eq!(summary.elements(), 3);

    let way_nodes = fs::read_to_string(out.join("ways_nodes.csv")).unwrap();
    assert_eq!(
        way_nodes,
        "id,node_id,position\n8581395,261114295,0\n8581395,261114296,1\n"
    );
    let node_tags = fs::read_to_string(out.join("nodes_tags.csv")).unwrap();
    assert!(node_tags.contains("261114295,city,Denver,addr\n"));
    assert!(!node_tags.contains("FIXME"));
}

#[test]
fn test_validation_failure_aborts() {
    let xml = r#"<osm>
  <node id="1" lat="north" lon="-104.99" user="u" uid="1" version="1" changeset="1" timestamp="t"/>
  <node id="2" lat="39.7" lon="-104.99" user="u" uid="1" version="1" changeset="1" timestamp="t"/>
</osm>"#;
    let mut sink = CollectSink::default();
    let err = process_elements(reader(xml), &mut sink, &ProcessOptions::default()).unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("validate node 1"), "{message}");
    assert!(
        message.contains("element of type 'node' has the following errors: lat"),
        "{message}"
    );
    assert!(sink.records.is_empty());
}

#[test]
fn test_skip_validation_writes_everything() {
    let xml = r#"<osm>
  <node id="1" lat="north" lon="-104.99" user="u" uid="1" version="1" changeset="1" timestamp="t"/>
</osm>"#;
    let mut sink = CollectSink::default();
    let options = ProcessOptions::default().with_validation(false);
    let summary = process_elements(reader(xml), &mut sink, &options).unwrap();
    assert_eq!(summary.nodes, 1);
    assert_eq!(sink.records[0].attribute("lat"), Some("north"));
}

#[test]
fn test_missing_attribute_names_element() {
    let xml = r#"<osm><way id="5" user="u" uid="1" version="1" changeset="1"><nd ref="1"/></way></osm>"#;
    let mut sink = CollectSink::default();
    let err = process_elements(reader(xml), &mut sink, &ProcessOptions::default()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("shape way 5"), "{message}");
    assert!(message.contains("timestamp"), "{message}");
}

#[test]
fn test_malformed_xml_is_reported() {
    let mut sink = CollectSink::default();
    let err = process_elements(
        reader("<osm><node id=\"1\">"),
        &mut sink,
        &ProcessOptions::default(),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("read element"));
}

#[test]
fn test_audit_stream_groups_unexpected_types() {
    let audit = audit_stream(reader(SAMPLE), &ExpectedVocabulary::default()).unwrap();
    let types: Vec<&str> = audit.iter().map(|(t, _)| t).collect();
    assert_eq!(types, vec!["Blvd"]);
}

#[test]
fn test_audit_map_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = audit_map(&dir.path().join("absent.osm"), &ExpectedVocabulary::default())
        .unwrap_err();
    assert!(format!("{err:#}").contains("open OSM file"));
}
