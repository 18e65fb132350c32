//! Tests for the serde representation of the concept graph

use conceptmap::parse;
use serde_json::json;

#[test]
fn test_database_serializes_as_ordered_list() {
    let db = parse("1 - B; second letter\n- is a type of `Letter`\n2 - A; first letter\n- has 2 `Stroke`")
        .unwrap();
    let value = serde_json::to_value(&db).unwrap();

    assert_eq!(
        value,
        json!([
            {
                "name": "B",
                "kind": "specialized_entity",
                "description": "second letter",
                "attributes": [],
                "relationships": [],
                "parent": "Letter"
            },
            {
                "name": "A",
                "kind": "entity",
                "description": "first letter",
                "attributes": [],
                "relationships": [
                    { "target": "Stroke", "kind": "composition", "cardinality": "2" }
                ],
                "parent": null
            }
        ])
    );
}

#[test]
fn test_concept_deserializes() {
    let concept: conceptmap::plugins::concept::Concept = serde_json::from_value(json!({
        "name": "Badge",
        "kind": "value_object",
        "description": "",
        "attributes": ["colour"],
        "relationships": [{ "target": "Icon", "kind": "displays", "cardinality": "1" }],
        "parent": null
    }))
    .unwrap();
    assert_eq!(concept.name, "Badge");
    assert_eq!(concept.relationships[0].target, "Icon");
}
