//! Property tests for street-name normalization.

use osm_transform::{AbbreviationMap, normalize_name};
use proptest::prelude::*;

/// Tokens drawn from table keys, canonical values and arbitrary words.
fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "St", "St.", "Ave", "Ave.", "Blvd", "Blvd,", "Pkwy.", "Street", "Cir", "E", "S",
        ])
        .prop_map(str::to_string),
        "[A-Za-z.,#0-9]{1,8}",
    ]
}

fn name() -> impl Strategy<Value = String> {
    prop::collection::vec((token(), prop::sample::select(vec![" ", "  ", "\t"])), 0..6).prop_map(
        |parts| {
            parts
                .into_iter()
                .map(|(token, sep)| format!("{token}{sep}"))
                .collect::<String>()
        },
    )
}

proptest! {
    #[test]
    fn normalize_is_idempotent(name in name()) {
        let table = AbbreviationMap::default();
        let once = normalize_name(&name, &table);
        prop_assert_eq!(normalize_name(&once, &table), once);
    }

    #[test]
    fn normalize_keeps_token_count_and_order(name in name()) {
        let table = AbbreviationMap::default();
        let before: Vec<&str> = name.split_whitespace().collect();
        let normalized = normalize_name(&name, &table);
        let after: Vec<&str> = normalized.split_whitespace().collect();

        prop_assert_eq!(before.len(), after.len());
        for (original, rewritten) in before.iter().zip(&after) {
            match table.get(original) {
                Some(canonical) => prop_assert_eq!(*rewritten, canonical),
                None => prop_assert_eq!(rewritten, original),
            }
        }
    }
}

#[test]
fn unmapped_names_are_unchanged() {
    let table = AbbreviationMap::default();
    for name in ["Larimer Street", "Broadway", "16th Street Mall", "Colorado Blvd,"] {
        assert_eq!(normalize_name(name, &table), name);
    }
}

#[test]
fn custom_table_is_used() {
    let table = AbbreviationMap::new([("Hwy", "Highway")]).unwrap();
    assert_eq!(normalize_name("US Hwy 287", &table), "US Highway 287");
    assert_eq!(normalize_name("Main St", &table), "Main St");
}
