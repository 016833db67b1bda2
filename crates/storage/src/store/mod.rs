#![forbid(unsafe_code)]

mod error;
mod seed;

pub use error::StoreError;
pub use seed::sample_clients;

use insp_core::model::{Client, Inspection, Invoice};
use rusqlite::{Connection, OptionalExtension, Transaction, params};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Device-local document store for the three collections. Each entity is one
/// JSON document row; saves replace the whole document, never patch it.
/// Single-writer by assumption: nothing here guards against a second
/// concurrent process.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    storage_dir: PathBuf,
}

impl SqliteStore {
    pub fn open(storage_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let storage_dir = storage_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&storage_dir)?;

        let db_path = storage_dir.join("inspecta.db");
        let mut conn = Connection::open(db_path)?;
        conn.busy_timeout(Duration::from_secs(5))?;

        install_schema(&conn)?;
        seed_clients_if_empty(&mut conn)?;

        Ok(Self { conn, storage_dir })
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    // --- inspections ---

    /// All inspections, newest inspection date first. Rows whose document no
    /// longer decodes are skipped and logged, never surfaced.
    pub fn list_inspections(&self) -> Result<Vec<Inspection>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, doc FROM inspections ORDER BY inspection_date DESC, id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (id, doc) = row?;
            match serde_json::from_str::<Inspection>(&doc) {
                Ok(inspection) => out.push(inspection),
                Err(err) => log::warn!("skipping corrupt inspection {id}: {err}"),
            }
        }
        Ok(out)
    }

    pub fn get_inspection(&self, id: &str) -> Result<Option<Inspection>, StoreError> {
        let doc = self
            .conn
            .query_row(
                "SELECT doc FROM inspections WHERE id = ?1",
                params![id],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(doc.and_then(|doc| decode_or_warn("inspection", id, &doc)))
    }

    /// Upsert by id: the stored document is fully replaced.
    pub fn save_inspection(&mut self, inspection: &Inspection) -> Result<(), StoreError> {
        let doc = serde_json::to_string(inspection)?;
        let tx = self.conn.transaction()?;
        tx.execute(
            "DELETE FROM inspections WHERE id = ?1",
            params![inspection.id],
        )?;
        tx.execute(
            "INSERT INTO inspections(id, inspection_date, doc) VALUES (?1, ?2, ?3)",
            params![inspection.id, inspection.inspection_date, doc],
        )?;
        tx.commit()?;
        Ok(())
    }

    pub fn delete_inspection(&mut self, id: &str) -> Result<bool, StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM inspections WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    // --- clients ---

    /// All clients, name order for stable output (the collection itself is
    /// unordered).
    pub fn list_clients(&self) -> Result<Vec<Client>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT id, doc FROM clients")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (id, doc) = row?;
            match serde_json::from_str::<Client>(&doc) {
                Ok(client) => out.push(client),
                Err(err) => log::warn!("skipping corrupt client {id}: {err}"),
            }
        }
        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }

    pub fn get_client(&self, id: &str) -> Result<Option<Client>, StoreError> {
        let doc = self
            .conn
            .query_row(
                "SELECT doc FROM clients WHERE id = ?1",
                params![id],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(doc.and_then(|doc| decode_or_warn("client", id, &doc)))
    }

    pub fn save_client(&mut self, client: &Client) -> Result<(), StoreError> {
        let doc = serde_json::to_string(client)?;
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM clients WHERE id = ?1", params![client.id])?;
        tx.execute(
            "INSERT INTO clients(id, doc) VALUES (?1, ?2)",
            params![client.id, doc],
        )?;
        tx.commit()?;
        Ok(())
    }

    pub fn delete_client(&mut self, id: &str) -> Result<bool, StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM clients WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    // --- invoices ---

    /// All invoices, newest invoice date first, corrupt rows skipped.
    pub fn list_invoices(&self) -> Result<Vec<Invoice>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, doc FROM invoices ORDER BY invoice_date DESC, id DESC")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (id, doc) = row?;
            match serde_json::from_str::<Invoice>(&doc) {
                Ok(invoice) => out.push(invoice),
                Err(err) => log::warn!("skipping corrupt invoice {id}: {err}"),
            }
        }
        Ok(out)
    }

    pub fn get_invoice(&self, id: &str) -> Result<Option<Invoice>, StoreError> {
        let doc = self
            .conn
            .query_row(
                "SELECT doc FROM invoices WHERE id = ?1",
                params![id],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(doc.and_then(|doc| decode_or_warn("invoice", id, &doc)))
    }

    /// Upsert by id. A non-empty `client_id` must reference a stored client;
    /// an empty one (free-standing draft invoice) is accepted as-is.
    pub fn save_invoice(&mut self, invoice: &Invoice) -> Result<(), StoreError> {
        let doc = serde_json::to_string(invoice)?;
        let tx = self.conn.transaction()?;

        if !invoice.client_id.is_empty() {
            let exists = tx
                .query_row(
                    "SELECT 1 FROM clients WHERE id = ?1",
                    params![invoice.client_id],
                    |_| Ok(()),
                )
                .optional()?
                .is_some();
            if !exists {
                return Err(StoreError::UnknownClient {
                    client_id: invoice.client_id.clone(),
                });
            }
        }

        tx.execute("DELETE FROM invoices WHERE id = ?1", params![invoice.id])?;
        tx.execute(
            "INSERT INTO invoices(id, invoice_date, doc) VALUES (?1, ?2, ?3)",
            params![invoice.id, invoice.invoice_date, doc],
        )?;
        tx.commit()?;
        Ok(())
    }

    pub fn delete_invoice(&mut self, id: &str) -> Result<bool, StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM invoices WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }
}

fn decode_or_warn<T: serde::de::DeserializeOwned>(kind: &str, id: &str, doc: &str) -> Option<T> {
    match serde_json::from_str(doc) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("corrupt {kind} {id}: {err}");
            None
        }
    }
}

fn install_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        r#"
        PRAGMA journal_mode=WAL;
        PRAGMA synchronous=NORMAL;

        CREATE TABLE IF NOT EXISTS inspections (
          id TEXT PRIMARY KEY,
          inspection_date TEXT NOT NULL,
          doc TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS clients (
          id TEXT PRIMARY KEY,
          doc TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS invoices (
          id TEXT PRIMARY KEY,
          invoice_date TEXT NOT NULL,
          doc TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_inspections_date ON inspections(inspection_date);
        CREATE INDEX IF NOT EXISTS idx_invoices_date ON invoices(invoice_date);
        "#,
    )?;
    Ok(())
}

/// First-run rule: an empty clients collection is initialized from the
/// built-in sample set and persisted immediately, so later reads are stable.
fn seed_clients_if_empty(conn: &mut Connection) -> Result<(), StoreError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM clients", [], |row| row.get(0))?;
    if count > 0 {
        return Ok(());
    }

    let clients = sample_clients();
    let tx = conn.transaction()?;
    for client in &clients {
        insert_client_tx(&tx, client)?;
    }
    tx.commit()?;
    log::debug!("seeded {} sample clients", clients.len());
    Ok(())
}

fn insert_client_tx(tx: &Transaction<'_>, client: &Client) -> Result<(), StoreError> {
    let doc = serde_json::to_string(client)?;
    tx.execute(
        "INSERT INTO clients(id, doc) VALUES (?1, ?2)",
        params![client.id, doc],
    )?;
    Ok(())
}
