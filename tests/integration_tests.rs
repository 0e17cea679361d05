use chrono::{DateTime, TimeZone, Utc};
use docwire::{
    doc, document_record, from_document, to_document, to_document_renamed, to_json, to_json_with,
    DocValue, EncodeOptions, RenameTable,
};
use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Deserialize, Debug, PartialEq)]
struct User {
    id: i64,
    name: String,
    active: bool,
    tags: Vec<String>,
}

document_record!(User { id, name, active, tags });

#[derive(Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    quantity: i64,
}

document_record!(Product { sku, quantity });

#[derive(Deserialize, Debug, PartialEq)]
struct Order {
    order_id: i64,
    customer: User,
    items: Vec<Product>,
    placed_at: DateTime<Utc>,
}

document_record!(Order {
    order_id,
    customer,
    items,
    placed_at,
});

fn sample_order() -> Order {
    Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["vip".to_string()],
        },
        items: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                quantity: 1,
            },
        ],
        placed_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
    }
}

#[test]
fn test_simple_record_round_trip() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    };

    let doc = to_document(&user);
    let user_back: User = from_document(&doc).unwrap();
    assert_eq!(user, user_back);
}

#[test]
fn test_nested_record_round_trip() {
    let order = sample_order();
    let doc = to_document(&order);
    let order_back: Order = from_document(&doc).unwrap();
    assert_eq!(order, order_back);
}

#[test]
fn test_nested_record_structure() {
    let doc = to_document(&sample_order());

    let customer = doc.get("customer").and_then(|v| v.as_map()).unwrap();
    assert_eq!(customer.get("name"), Some(&DocValue::from("Alice")));

    let items = doc.get("items").and_then(|v| v.as_list()).unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|item| item.is_map()));
}

#[test]
fn test_list_of_strings_encodes_quoted() {
    let user = User {
        id: 1,
        name: "Bob".to_string(),
        active: false,
        tags: vec!["a".to_string(), "b".to_string()],
    };

    let json = to_json(&to_document(&user)).unwrap();
    assert!(json.contains("\"tags\": [\"a\",\"b\"]"));
}

#[test]
fn test_list_of_records_encodes_objects() {
    let json = to_json(&to_document(&sample_order())).unwrap();
    assert!(json.contains("\"items\": [{\"sku\": \"WIDGET-001\""));
}

#[test]
fn test_empty_record_is_empty_object() {
    struct Empty {}
    document_record!(Empty {});

    let json = to_json(&to_document(&Empty {})).unwrap();
    assert_eq!(json, "{}");
}

#[test]
fn test_option_fields() {
    struct Profile {
        nickname: Option<String>,
        age: Option<i64>,
    }
    document_record!(Profile { nickname, age });

    let profile = Profile {
        nickname: None,
        age: Some(30),
    };

    let json = to_json(&to_document(&profile)).unwrap();
    assert_eq!(json, "{\"nickname\": null,\n\"age\": 30}");
}

#[test]
fn test_map_field() {
    struct Scores {
        by_subject: IndexMap<String, i64>,
    }
    document_record!(Scores { by_subject });

    let mut by_subject = IndexMap::new();
    by_subject.insert("math".to_string(), 90);
    by_subject.insert("art".to_string(), 80);

    let json = to_json(&to_document(&Scores { by_subject })).unwrap();
    assert_eq!(json, "{\"by_subject\": {\"math\": 90,\n\"art\": 80}}");
}

#[test]
fn test_rename_collision_last_write_wins() {
    struct Pair {
        first: i64,
        second: i64,
    }
    document_record!(Pair { first, second });

    // Both fields renamed to the same output key: one entry survives,
    // holding the later field's value.
    let renames = RenameTable::from_iter([("first", "only"), ("second", "only")]);
    let doc = to_document_renamed(&Pair { first: 1, second: 2 }, &renames);

    assert_eq!(doc.len(), 1);
    assert_eq!(doc.get("only"), Some(&DocValue::Integer(2)));
}

#[test]
fn test_document_keys_unique() {
    let doc = to_document(&sample_order());
    let mut keys: Vec<_> = doc.keys().cloned().collect();
    let total = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), total);
}

#[test]
fn test_pretty_and_compact_agree() {
    let doc = to_document(&sample_order());

    let compact = to_json_with(&doc, &RenameTable::new(), &EncodeOptions::new()).unwrap();
    let pretty = to_json_with(&doc, &RenameTable::new(), &EncodeOptions::pretty()).unwrap();

    let a: serde_json::Value = serde_json::from_str(&compact).unwrap();
    let b: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_hand_built_document_encodes() {
    let doc = doc!({
        "title": "report",
        "sections": [{ "heading": "intro", "pages": 2 }],
        "published": false
    });

    let json = to_json(doc.as_map().unwrap()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["sections"][0]["pages"], 2);
}
