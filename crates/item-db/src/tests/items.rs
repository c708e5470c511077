use chat_markup::ItemLookup;

use super::test_db;
use crate::ItemRecord;

fn record(low_id: u32, high_id: u32, low_ql: u32, high_ql: u32, name: &str) -> ItemRecord {
    ItemRecord {
        low_id,
        high_id,
        low_ql,
        high_ql,
        name: name.into(),
    }
}

fn seeded() -> crate::Database {
    let db = test_db();
    db.insert_items(&[
        record(246660, 246661, 1, 200, "Combined Commando's Jacket"),
        record(246661, 246662, 201, 300, "Combined Commando's Jacket"),
        record(123, 123, 1, 1, "Jacket of the Grid"),
        record(500, 501, 10, 100, "Notum Tree Bark"),
        record(600, 600, 50, 50, "100% Cotton Shirt"),
    ])
    .unwrap();
    db
}

#[test]
fn test_open_and_migrate() {
    let db = test_db();
    assert_eq!(db.count_items().unwrap(), 0);
}

#[test]
fn test_insert_and_count() {
    let db = seeded();
    assert_eq!(db.count_items().unwrap(), 5);

    // Same key again replaces instead of duplicating.
    db.insert_items(&[record(123, 123, 1, 1, "Jacket of the Grid")]).unwrap();
    assert_eq!(db.count_items().unwrap(), 5);
}

#[test]
fn test_insert_rejects_nameless_rows() {
    let db = test_db();
    assert!(db.insert_items(&[record(1, 1, 1, 1, "  ")]).is_err());
    assert_eq!(db.count_items().unwrap(), 0);
}

#[test]
fn test_get_item_by_low_or_high_id() {
    let db = seeded();
    let by_low = db.get_item_by_id(500).unwrap().unwrap();
    assert_eq!(by_low.name, "Notum Tree Bark");
    let by_high = db.get_item_by_id(501).unwrap().unwrap();
    assert_eq!(by_high, by_low);
    assert!(db.get_item_by_id(999).unwrap().is_none());

    // 246661 is the high id of one range and the low id of the next.
    let shared = db.get_item_by_id(246661).unwrap().unwrap();
    assert_eq!(shared.high_ql, 300);
}

#[test]
fn test_item_lookup_capability() {
    let db = seeded();
    let item = db.find_by_id(500).unwrap();
    assert_eq!(item.low_ql, 10);
    assert_eq!(item.ql_for(501), 100);
    assert!(db.find_by_id(42).is_none());
}

#[test]
fn test_search_requires_every_word() {
    let db = seeded();
    let hits = db.search_items("jacket", 40).unwrap();
    assert_eq!(hits.len(), 3);
    assert!(hits.iter().all(|h| h.exact_match_percent == 100));

    let hits = db.search_items("COMMANDO jack", 40).unwrap();
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|h| h.exact_match_percent == 0));

    assert!(db.search_items("nothing like this", 40).unwrap().is_empty());
    assert!(db.search_items("   ", 40).unwrap().is_empty());
}

#[test]
fn test_search_is_ordered_and_limited() {
    let db = seeded();
    let hits = db.search_items("jacket", 2).unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].item.name, "Combined Commando's Jacket");
    assert_eq!(hits[0].item.high_ql, 300);
    assert_eq!(hits[1].item.high_ql, 200);
}

#[test]
fn test_search_treats_wildcards_literally() {
    let db = seeded();
    let hits = db.search_items("100%", 40).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].item.low_id, 600);
    assert!(db.search_items("%", 40).unwrap().len() == 1);
}

#[test]
fn test_import_json() {
    let db = test_db();
    let json = r#"[
        {"lowid": 1, "highid": 2, "lowql": 1, "highql": 50, "name": "Small Thing"},
        {"low_id": 3, "high_id": 3, "low_ql": 5, "high_ql": 5, "name": "Other Thing"}
    ]"#;
    assert_eq!(db.import_json(json).unwrap(), 2);
    assert_eq!(db.search_items("thing", 10).unwrap().len(), 2);
    assert!(db.import_json("not json").is_err());
}
