#![forbid(unsafe_code)]

use crate::server::RpcError;
use serde_json::{Map, Value};

pub(crate) fn require_str(args: &Map<String, Value>, key: &str) -> Result<String, RpcError> {
    let Some(value) = args.get(key).and_then(Value::as_str) else {
        return Err(RpcError::invalid(format!("{key} is required")));
    };
    Ok(value.to_string())
}

pub(crate) fn require_i64(args: &Map<String, Value>, key: &str) -> Result<i64, RpcError> {
    let Some(value) = args.get(key).and_then(Value::as_i64) else {
        return Err(RpcError::invalid(format!("{key} must be an integer")));
    };
    Ok(value)
}

pub(crate) fn require_usize(args: &Map<String, Value>, key: &str) -> Result<usize, RpcError> {
    let Some(value) = args.get(key).and_then(Value::as_u64) else {
        return Err(RpcError::invalid(format!(
            "{key} must be a non-negative integer"
        )));
    };
    Ok(value as usize)
}

pub(crate) fn optional_usize(
    args: &Map<String, Value>,
    key: &str,
) -> Result<Option<usize>, RpcError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => match value.as_u64() {
            Some(v) => Ok(Some(v as usize)),
            None => Err(RpcError::invalid(format!(
                "{key} must be a non-negative integer"
            ))),
        },
    }
}

/// Decodes a nested object param into its model type.
pub(crate) fn require_decoded<T: serde::de::DeserializeOwned>(
    args: &Map<String, Value>,
    key: &str,
) -> Result<T, RpcError> {
    let Some(value) = args.get(key) else {
        return Err(RpcError::invalid(format!("{key} is required")));
    };
    serde_json::from_value(value.clone())
        .map_err(|err| RpcError::invalid(format!("{key} is malformed: {err}")))
}
