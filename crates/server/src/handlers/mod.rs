#![forbid(unsafe_code)]

mod collections;
mod dashboard;
mod session;
mod suggest;

use crate::server::RpcError;
use serde_json::Value;

pub(crate) fn encode<T: serde::Serialize>(value: &T) -> Result<Value, RpcError> {
    serde_json::to_value(value).map_err(|err| RpcError::new("STORE", err.to_string()))
}
