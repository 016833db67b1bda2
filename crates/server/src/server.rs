#![forbid(unsafe_code)]

use crate::support::{JsonRpcRequest, json_rpc_error, json_rpc_response};
use insp_core::session::{EditSession, SessionError};
use insp_storage::{SqliteStore, StoreError};
use insp_suggest::TextSuggestionService;
use serde_json::{Map, Value, json};

#[derive(Debug)]
pub(crate) struct RpcError {
    pub(crate) code: &'static str,
    pub(crate) message: String,
}

impl RpcError {
    pub(crate) fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::new("INVALID_INPUT", message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub(crate) fn no_session() -> Self {
        Self::new("NO_SESSION", "no edit session is open")
    }

    fn json_rpc_code(&self) -> i64 {
        match self.code {
            "INVALID_INPUT" => -32602,
            "METHOD_NOT_FOUND" => -32601,
            _ => -32000,
        }
    }

    fn into_response(self, id: Option<Value>) -> Value {
        json_rpc_error(id, self.json_rpc_code(), &self.message, Some(self.code))
    }
}

impl From<StoreError> for RpcError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::UnknownClient { .. } => Self::new("UNKNOWN_CLIENT", value.to_string()),
            other => Self::new("STORE", other.to_string()),
        }
    }
}

impl From<SessionError> for RpcError {
    fn from(value: SessionError) -> Self {
        match value {
            SessionError::Closed => Self::no_session(),
            other => Self::new("SESSION", other.to_string()),
        }
    }
}

/// One server == one device-local editing seat: a store, a collaborator
/// client, and at most one live edit session.
pub(crate) struct Server {
    pub(crate) store: SqliteStore,
    pub(crate) suggest: Box<dyn TextSuggestionService>,
    pub(crate) session: Option<EditSession>,
}

impl Server {
    pub(crate) fn new(store: SqliteStore, suggest: Box<dyn TextSuggestionService>) -> Self {
        Self {
            store,
            suggest,
            session: None,
        }
    }

    /// Dispatches one request. Requests without an id are notifications and
    /// get no response.
    pub(crate) fn handle(&mut self, request: JsonRpcRequest) -> Option<Value> {
        let params = request.params.unwrap_or_else(|| json!({}));
        let args = params.as_object().cloned().unwrap_or_default();
        let result = self.dispatch(&request.method, &args);

        let id = request.id?;
        Some(match result {
            Ok(value) => json_rpc_response(Some(id), value),
            Err(err) => err.into_response(Some(id)),
        })
    }

    fn dispatch(&mut self, method: &str, args: &Map<String, Value>) -> Result<Value, RpcError> {
        match method {
            "inspection.list" => self.inspection_list(),
            "inspection.get" => self.inspection_get(args),
            "inspection.delete" => self.inspection_delete(args),
            "client.list" => self.client_list(),
            "client.get" => self.client_get(args),
            "client.save" => self.client_save(args),
            "client.delete" => self.client_delete(args),
            "invoice.list" => self.invoice_list(),
            "invoice.get" => self.invoice_get(args),
            "invoice.save" => self.invoice_save(args),
            "invoice.delete" => self.invoice_delete(args),
            "dashboard.totals" => self.dashboard_totals(),
            "catalog.list" => self.catalog_list(),
            "session.new" => self.session_new(),
            "session.load" => self.session_load(args),
            "session.draft" => self.session_draft(),
            "session.edit" => self.session_edit(args),
            "session.save" => self.session_save(),
            "session.cancel" => self.session_cancel(),
            "suggest.analyze" => self.suggest_analyze(args),
            "suggest.summary" => self.suggest_summary(),
            other => Err(RpcError::new(
                "METHOD_NOT_FOUND",
                format!("unknown method {other}"),
            )),
        }
    }
}
