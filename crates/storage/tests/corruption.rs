#![forbid(unsafe_code)]

use insp_core::model::{Inspection, PropertyType};
use insp_storage::SqliteStore;
use rusqlite::{Connection, params};
use std::path::PathBuf;

fn temp_dir(test_name: &str) -> PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let dir = base.join(format!("insp_storage_{test_name}_{pid}_{nonce}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn inspection_on(date: &str) -> Inspection {
    Inspection {
        id: format!("insp_{date}"),
        client_name: "Ahmed".to_string(),
        property_location: "Al Mouj".to_string(),
        property_type: PropertyType::Apartment,
        inspector_name: "Said".to_string(),
        inspection_date: date.to_string(),
        areas: Vec::new(),
        ai_summary: None,
    }
}

fn corrupt_row(storage_dir: &PathBuf, id: &str) {
    let conn = Connection::open(storage_dir.join("inspecta.db")).expect("open raw db");
    conn.execute(
        "INSERT INTO inspections(id, inspection_date, doc) VALUES (?1, ?2, ?3)",
        params![id, "2024-07-01", "{not json"],
    )
    .expect("plant corrupt row");
}

#[test]
fn corrupt_documents_are_skipped_not_fatal() {
    let storage_dir = temp_dir("corrupt_documents_are_skipped");
    let mut store = SqliteStore::open(&storage_dir).expect("open store");
    store.save_inspection(&inspection_on("2024-03-01")).expect("save");
    drop(store);

    corrupt_row(&storage_dir, "insp_bad");

    let store = SqliteStore::open(&storage_dir).expect("reopen");
    let listed = store.list_inspections().expect("list survives corruption");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].inspection_date, "2024-03-01");

    // Corrupt single-row reads degrade to absent, they never raise.
    assert!(store.get_inspection("insp_bad").expect("get").is_none());
}
