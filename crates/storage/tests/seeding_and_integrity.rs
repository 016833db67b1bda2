#![forbid(unsafe_code)]

use insp_core::model::{Client, Invoice, InvoiceStatus};
use insp_storage::{SqliteStore, StoreError, sample_clients};
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

fn invoice_for(client_id: &str) -> Invoice {
    Invoice {
        id: "inv_1".to_string(),
        invoice_number: "INV-001".to_string(),
        invoice_date: "2024-04-01".to_string(),
        due_date: "2024-05-01".to_string(),
        client_id: client_id.to_string(),
        client_name: String::new(),
        client_address: String::new(),
        client_email: String::new(),
        property_location: String::new(),
        services: Vec::new(),
        subtotal: 0.0,
        tax: 0.0,
        total_amount: 0.0,
        amount_paid: 0.0,
        status: InvoiceStatus::Draft,
        notes: None,
        template: None,
    }
}

#[test]
fn empty_store_is_seeded_with_sample_clients() {
    let storage_dir = temp_dir("empty_store_is_seeded");
    let store = SqliteStore::open(&storage_dir).expect("open store");

    let clients = store.list_clients().expect("list");
    assert_eq!(clients.len(), sample_clients().len());
    assert!(clients.iter().any(|client| client.id == "client_1"));

    let ahmed = store
        .get_client("client_1")
        .expect("get")
        .expect("seeded client present");
    assert_eq!(ahmed.name, "Ahmed Al Farsi");
    assert_eq!(ahmed.properties.len(), 2);
}

#[test]
fn reopening_does_not_reseed() {
    let storage_dir = temp_dir("reopening_does_not_reseed");
    {
        let mut store = SqliteStore::open(&storage_dir).expect("first open");
        // Emptying the collection is a deliberate user state; it must survive
        // a reopen rather than being refilled.
        for client in store.list_clients().expect("list") {
            store.delete_client(&client.id).expect("delete");
        }
        store
            .save_client(&Client {
                id: "client_9".to_string(),
                name: "Zahra".to_string(),
                email: "zahra@email.com".to_string(),
                phone: "99887766".to_string(),
                address: "Seeb".to_string(),
                properties: Vec::new(),
            })
            .expect("save");
    }

    let store = SqliteStore::open(&storage_dir).expect("second open");
    let clients = store.list_clients().expect("list");
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].id, "client_9");
}

#[test]
fn clients_list_is_name_ordered() {
    let storage_dir = temp_dir("clients_list_is_name_ordered");
    let store = SqliteStore::open(&storage_dir).expect("open store");
    let names: Vec<String> = store
        .list_clients()
        .expect("list")
        .into_iter()
        .map(|client| client.name)
        .collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn invoice_save_rejects_dangling_client_reference() {
    let storage_dir = temp_dir("invoice_dangling_client");
    let mut store = SqliteStore::open(&storage_dir).expect("open store");

    let err = store
        .save_invoice(&invoice_for("client_404"))
        .expect_err("dangling reference must fail");
    match err {
        StoreError::UnknownClient { client_id } => assert_eq!(client_id, "client_404"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(store.list_invoices().expect("list").is_empty());
}

#[test]
fn invoice_save_accepts_seeded_client_and_empty_reference() {
    let storage_dir = temp_dir("invoice_accepts_valid");
    let mut store = SqliteStore::open(&storage_dir).expect("open store");

    store
        .save_invoice(&invoice_for("client_2"))
        .expect("seeded client reference");

    let mut detached = invoice_for("");
    detached.id = "inv_2".to_string();
    store.save_invoice(&detached).expect("empty reference");

    assert_eq!(store.list_invoices().expect("list").len(), 2);
}
