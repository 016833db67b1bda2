#![forbid(unsafe_code)]

use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
pub(crate) struct JsonRpcRequest {
    #[serde(default)]
    #[serde(rename = "jsonrpc")]
    pub(crate) _jsonrpc: Option<String>,
    pub(crate) method: String,
    #[serde(default)]
    pub(crate) id: Option<Value>,
    #[serde(default)]
    pub(crate) params: Option<Value>,
}

pub(crate) fn json_rpc_response(id: Option<Value>, result: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "result": result })
}

pub(crate) fn json_rpc_error(
    id: Option<Value>,
    code: i64,
    message: &str,
    data_code: Option<&str>,
) -> Value {
    let mut error = json!({ "code": code, "message": message });
    if let Some(data_code) = data_code {
        error["data"] = json!({ "code": data_code });
    }
    json!({ "jsonrpc": "2.0", "id": id, "error": error })
}
