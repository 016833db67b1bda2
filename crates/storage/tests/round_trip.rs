#![forbid(unsafe_code)]

use insp_core::model::{
    Inspection, Invoice, InvoiceServiceItem, InvoiceStatus, InvoiceTemplate, ItemStatus, Photo,
    PropertyType,
};
use insp_core::session::EditSession;
use insp_storage::SqliteStore;
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
        client_name: "Ahmed Al Farsi".to_string(),
        property_location: "Villa 123, Al Mouj".to_string(),
        property_type: PropertyType::Villa,
        inspector_name: "Said".to_string(),
        inspection_date: date.to_string(),
        areas: Vec::new(),
        ai_summary: None,
    }
}

fn invoice_on(date: &str) -> Invoice {
    Invoice {
        id: format!("inv_{date}"),
        invoice_number: format!("INV-{date}"),
        invoice_date: date.to_string(),
        due_date: "2024-12-31".to_string(),
        client_id: String::new(),
        client_name: "Fatima Al Balushi".to_string(),
        client_address: "Apartment 7B, Qurum Heights".to_string(),
        client_email: "fatima.b@email.com".to_string(),
        property_location: "Apt 7B, Qurum Heights".to_string(),
        services: vec![
            InvoiceServiceItem {
                id: "svc_1".to_string(),
                description: "Full inspection".to_string(),
                quantity: 1.0,
                unit_price: 120.0,
                total: 120.0,
            },
            InvoiceServiceItem {
                id: "svc_2".to_string(),
                description: "Thermal imaging".to_string(),
                quantity: 2.0,
                unit_price: 35.0,
                total: 70.0,
            },
        ],
        subtotal: 190.0,
        tax: 9.5,
        total_amount: 199.5,
        amount_paid: 0.0,
        status: InvoiceStatus::Unpaid,
        notes: Some("Payable within 30 days.".to_string()),
        template: Some(InvoiceTemplate::Classic),
    }
}

#[test]
fn edit_session_scenario_survives_save_and_reload() {
    let storage_dir = temp_dir("edit_session_scenario");
    let mut store = SqliteStore::open(&storage_dir).expect("open store");

    let mut session = EditSession::new("2024-03-15");
    let general = session.draft().areas[0].id;
    session.remove_area(general).expect("remove default area");
    let kitchen = session.add_area().expect("add area");
    session.rename_area(kitchen, "Kitchen").expect("rename");
    let item_id = session
        .add_item(kitchen, "Kitchen Inspection", "Sink & Mixer Tap Functionality")
        .expect("add item");

    let mut item = session.draft().areas[0].items[0].clone();
    item.status = ItemStatus::Fail;
    session.update_item(kitchen, item).expect("update item");
    session
        .attach_photo(
            kitchen,
            item_id,
            Photo {
                image_data: "ZGVmZWN0".to_string(),
                file_name: "sink.jpg".to_string(),
            },
        )
        .expect("attach photo");

    let saved = session.save().expect("save session");
    store.save_inspection(&saved).expect("persist");

    let reloaded = store
        .get_inspection(&saved.id)
        .expect("get")
        .expect("present");
    assert_eq!(reloaded, saved);
    assert_eq!(reloaded.areas.len(), 1);
    assert_eq!(reloaded.areas[0].name, "Kitchen");
    assert_eq!(reloaded.areas[0].items.len(), 1);
    assert_eq!(reloaded.areas[0].items[0].status, ItemStatus::Fail);
    assert_eq!(reloaded.areas[0].items[0].photos.len(), 1);
    assert_eq!(reloaded.areas[0].items[0].photos[0].file_name, "sink.jpg");
}

#[test]
fn save_is_an_idempotent_upsert() {
    let storage_dir = temp_dir("save_is_an_idempotent_upsert");
    let mut store = SqliteStore::open(&storage_dir).expect("open store");

    let mut inspection = inspection_on("2024-05-01");
    store.save_inspection(&inspection).expect("first save");
    store.save_inspection(&inspection).expect("second save");
    assert_eq!(store.list_inspections().expect("list").len(), 1);

    inspection.client_name = "Renamed".to_string();
    store.save_inspection(&inspection).expect("third save");
    let listed = store.list_inspections().expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].client_name, "Renamed");
}

#[test]
fn inspections_list_newest_date_first() {
    let storage_dir = temp_dir("inspections_list_newest_date_first");
    let mut store = SqliteStore::open(&storage_dir).expect("open store");

    for date in ["2024-02-10", "2024-06-01", "2023-12-31"] {
        store.save_inspection(&inspection_on(date)).expect("save");
    }

    let dates: Vec<String> = store
        .list_inspections()
        .expect("list")
        .into_iter()
        .map(|inspection| inspection.inspection_date)
        .collect();
    assert_eq!(dates, ["2024-06-01", "2024-02-10", "2023-12-31"]);
}

#[test]
fn invoices_round_trip_and_list_newest_first() {
    let storage_dir = temp_dir("invoices_round_trip");
    let mut store = SqliteStore::open(&storage_dir).expect("open store");

    let first = invoice_on("2024-01-15");
    let second = invoice_on("2024-04-02");
    store.save_invoice(&first).expect("save first");
    store.save_invoice(&second).expect("save second");

    let reloaded = store
        .get_invoice(&first.id)
        .expect("get")
        .expect("present");
    assert_eq!(reloaded, first);
    assert_eq!(reloaded.services.len(), 2);
    assert_eq!(reloaded.services[0].description, "Full inspection");

    let ids: Vec<String> = store
        .list_invoices()
        .expect("list")
        .into_iter()
        .map(|invoice| invoice.id)
        .collect();
    assert_eq!(ids, [second.id.clone(), first.id.clone()]);
}

#[test]
fn delete_reports_whether_anything_went() {
    let storage_dir = temp_dir("delete_reports");
    let mut store = SqliteStore::open(&storage_dir).expect("open store");

    let inspection = inspection_on("2024-03-03");
    store.save_inspection(&inspection).expect("save");
    assert!(store.delete_inspection(&inspection.id).expect("delete"));
    assert!(!store.delete_inspection(&inspection.id).expect("delete again"));
    assert!(store.get_inspection(&inspection.id).expect("get").is_none());
}

#[test]
fn absent_ids_read_back_as_none() {
    let storage_dir = temp_dir("absent_ids");
    let store = SqliteStore::open(&storage_dir).expect("open store");
    assert!(store.get_inspection("insp_missing").expect("get").is_none());
    assert!(store.get_invoice("inv_missing").expect("get").is_none());
    assert!(store.get_client("client_missing").expect("get").is_none());
}
