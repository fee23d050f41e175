//! Tests for shaping nodes and ways into tabular records.

use osm_model::{ChildEntry, ElementKind, RawElement, TagRow, WayNodeRow};
use osm_transform::{ShapeError, ShapeOptions, shape_element};

fn node(id: &str) -> RawElement {
    RawElement::new("node")
        .with_attribute("id", id)
        .with_attribute("lat", "39.7392")
        .with_attribute("lon", "-104.9903")
        .with_attribute("user", "mapper")
        .with_attribute("uid", "1234")
        .with_attribute("version", "3")
        .with_attribute("changeset", "5678")
        .with_attribute("timestamp", "2017-01-01T00:00:00Z")
}

fn way(id: &str) -> RawElement {
    RawElement::new("way")
        .with_attribute("id", id)
        .with_attribute("user", "mapper")
        .with_attribute("uid", "1234")
        .with_attribute("version", "2")
        .with_attribute("changeset", "5678")
        .with_attribute("timestamp", "2017-01-01T00:00:00Z")
}

#[test]
fn test_node_attributes_follow_field_list() {
    let record = shape_element(&node("42"), &ShapeOptions::default()).unwrap();

    assert_eq!(record.kind, ElementKind::Node);
    let fields: Vec<&str> = record.attributes.iter().map(|(f, _)| *f).collect();
    assert_eq!(
        fields,
        vec!["id", "lat", "lon", "user", "uid", "version", "changeset", "timestamp"]
    );
    assert_eq!(record.attribute("lon"), Some("-104.9903"));
    assert!(record.tags.is_empty());
    assert!(record.way_nodes.is_empty());
}

#[test]
fn test_namespaced_tag() {
    let element = node("42").with_child(ChildEntry::tag("addr:city", "Denver"));
    let record = shape_element(&element, &ShapeOptions::default()).unwrap();

    assert_eq!(record.tags, vec![TagRow::new("42", "city", "Denver", "addr")]);
    assert!(record.dropped_keys.is_empty());
}

#[test]
fn test_display_name_is_cleaned_and_normalized() {
    let element = node("42").with_child(ChildEntry::tag("name", "`Elm St.`"));
    let record = shape_element(&element, &ShapeOptions::default()).unwrap();

    assert_eq!(
        record.tags,
        vec![TagRow::new("42", "name", "Elm Street", "name")]
    );
}

#[test]
fn test_street_address_is_namespaced_on_nodes_and_ways() {
    let options = ShapeOptions::default();
    let street = ChildEntry::tag("addr:street", "S Colorado Blvd");

    let record = shape_element(&node("1").with_child(street.clone()), &options).unwrap();
    assert_eq!(
        record.tags,
        vec![TagRow::new("1", "street", "S Colorado Blvd", "addr")]
    );

    let record = shape_element(&way("2").with_child(street), &options).unwrap();
    assert_eq!(
        record.tags,
        vec![TagRow::new("2", "street", "S Colorado Blvd", "addr")]
    );
}

#[test]
fn test_street_address_value_is_not_cleaned() {
    let element = node("1").with_child(ChildEntry::tag("addr:street", " `Elm St.` "));
    let record = shape_element(&element, &ShapeOptions::default()).unwrap();
    assert_eq!(
        record.tags,
        vec![TagRow::new("1", "street", " `Elm St.` ", "addr")]
    );
}

#[test]
fn test_problem_keys_are_dropped() {
    let element = node("42")
        .with_child(ChildEntry::tag("FIXME,note", "check"))
        .with_child(ChildEntry::tag("amenity", "cafe"));
    let record = shape_element(&element, &ShapeOptions::default()).unwrap();

    assert_eq!(record.tags, vec![TagRow::new("42", "amenity", "cafe", "regular")]);
    assert_eq!(record.dropped_keys, vec!["FIXME,note".to_string()]);
}

#[test]
fn test_way_node_positions_ignore_interleaved_tags() {
    let element = way("7")
        .with_child(ChildEntry::node_ref("100"))
        .with_child(ChildEntry::tag("highway", "residential"))
        .with_child(ChildEntry::node_ref("101"))
        .with_child(ChildEntry::tag("name", "E Yale Ave"))
        .with_child(ChildEntry::tag("bad key", "x"))
        .with_child(ChildEntry::node_ref("102"));
    let record = shape_element(&element, &ShapeOptions::default()).unwrap();

    let positions: Vec<(String, usize)> = record
        .way_nodes
        .iter()
        .map(|row| (row.node_id.clone(), row.position))
        .collect();
    assert_eq!(
        positions,
        vec![
            ("100".to_string(), 0),
            ("101".to_string(), 1),
            ("102".to_string(), 2)
        ]
    );
    assert!(record.way_nodes.iter().all(|row| row.id == "7"));
    assert_eq!(
        record.tags,
        vec![
            TagRow::new("7", "highway", "residential", "regular"),
            TagRow::new("7", "name", "E Yale Avenue", "name"),
        ]
    );
}

#[test]
fn test_tag_count_invariant() {
    let element = way("7")
        .with_child(ChildEntry::node_ref("1"))
        .with_child(ChildEntry::tag("addr:street", "Main St"))
        .with_child(ChildEntry::tag("a=b", "x"))
        .with_child(ChildEntry::tag("name", "Main"))
        .with_child(ChildEntry::tag("oneway", "yes"))
        .with_child(ChildEntry::node_ref("2"));
    let record = shape_element(&element, &ShapeOptions::default()).unwrap();

    let children = element.children.len();
    let refs = element.node_refs().count();
    assert_eq!(
        record.tags.len(),
        children - record.dropped_keys.len() - refs
    );
    assert_eq!(record.way_nodes.len(), refs);
}

#[test]
fn test_way_has_no_coordinates() {
    let record = shape_element(&way("7"), &ShapeOptions::default()).unwrap();
    assert_eq!(record.attribute("lat"), None);
    assert_eq!(record.attributes.len(), 6);
    assert_eq!(
        record.way_nodes,
        Vec::<WayNodeRow>::new(),
        "way without references has no way nodes"
    );
}

#[test]
fn test_desired_fields_are_intersected() {
    let options = ShapeOptions::default().with_node_fields(["id", "lat", "bogus"]);
    let record = shape_element(&node("42"), &options).unwrap();
    assert_eq!(
        record.attributes,
        vec![("id", "42".to_string()), ("lat", "39.7392".to_string())]
    );
}

#[test]
fn test_missing_attribute_is_fatal() {
    let mut element = node("42").with_child(ChildEntry::tag("amenity", "cafe"));
    element.attributes.remove("lat");

    let err = shape_element(&element, &ShapeOptions::default()).unwrap_err();
    match err {
        ShapeError::MissingAttribute {
            element, attribute, ..
        } => {
            assert_eq!(element, "node");
            assert_eq!(attribute, "lat");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_id_is_fatal_even_when_not_selected() {
    let element = RawElement::new("way").with_child(ChildEntry::node_ref("1"));
    let options = ShapeOptions::default().with_way_fields(Vec::<String>::new());

    let err = shape_element(&element, &options).unwrap_err();
    assert!(matches!(err, ShapeError::MissingAttribute { ref attribute, .. } if attribute == "id"));
}

#[test]
fn test_unsupported_element() {
    let element = RawElement::new("relation").with_attribute("id", "9");
    let err = shape_element(&element, &ShapeOptions::default()).unwrap_err();
    assert!(matches!(err, ShapeError::UnsupportedElement { ref tag } if tag == "relation"));
}
