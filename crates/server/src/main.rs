#![forbid(unsafe_code)]

mod handlers;
mod server;
mod support;

use crate::server::Server;
use crate::support::{JsonRpcRequest, json_rpc_error};
use insp_storage::SqliteStore;
use insp_suggest::GeminiClient;
use std::io::{BufRead, Write};
use std::path::PathBuf;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        log::error!("fatal: {err}");
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let storage_dir = storage_dir();
    log::info!("opening store at {}", storage_dir.display());
    let store = SqliteStore::open(&storage_dir)?;
    let suggest = Box::new(GeminiClient::from_env());
    let mut server = Server::new(store, suggest);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = match serde_json::from_str::<JsonRpcRequest>(&line) {
            Ok(request) => server.handle(request),
            Err(err) => Some(json_rpc_error(
                None,
                -32700,
                &format!("parse error: {err}"),
                None,
            )),
        };
        if let Some(response) = response {
            serde_json::to_writer(&mut out, &response)?;
            out.write_all(b"\n")?;
            out.flush()?;
        }
    }
    Ok(())
}

/// Storage directory: first CLI argument, else `INSPECTA_DATA_DIR`, else a
/// local `.inspecta` directory.
fn storage_dir() -> PathBuf {
    if let Some(arg) = std::env::args().nth(1) {
        return PathBuf::from(arg);
    }
    if let Ok(dir) = std::env::var("INSPECTA_DATA_DIR")
        && !dir.trim().is_empty()
    {
        return PathBuf::from(dir);
    }
    PathBuf::from(".inspecta")
}
