#![forbid(unsafe_code)]

use super::encode;
use crate::server::{RpcError, Server};
use crate::support::{require_decoded, require_str};
use insp_core::model::{Client, Invoice};
use serde_json::{Map, Value, json};

impl Server {
    pub(crate) fn inspection_list(&mut self) -> Result<Value, RpcError> {
        Ok(json!({ "inspections": encode(&self.store.list_inspections()?)? }))
    }

    pub(crate) fn inspection_get(&mut self, args: &Map<String, Value>) -> Result<Value, RpcError> {
        let id = require_str(args, "id")?;
        match self.store.get_inspection(&id)? {
            Some(inspection) => encode(&inspection),
            None => Err(RpcError::not_found(format!("no inspection {id}"))),
        }
    }

    pub(crate) fn inspection_delete(
        &mut self,
        args: &Map<String, Value>,
    ) -> Result<Value, RpcError> {
        let id = require_str(args, "id")?;
        Ok(json!({ "deleted": self.store.delete_inspection(&id)? }))
    }

    pub(crate) fn client_list(&mut self) -> Result<Value, RpcError> {
        Ok(json!({ "clients": encode(&self.store.list_clients()?)? }))
    }

    pub(crate) fn client_get(&mut self, args: &Map<String, Value>) -> Result<Value, RpcError> {
        let id = require_str(args, "id")?;
        match self.store.get_client(&id)? {
            Some(client) => encode(&client),
            None => Err(RpcError::not_found(format!("no client {id}"))),
        }
    }

    pub(crate) fn client_save(&mut self, args: &Map<String, Value>) -> Result<Value, RpcError> {
        let client: Client = require_decoded(args, "client")?;
        self.store.save_client(&client)?;
        Ok(json!({ "id": client.id }))
    }

    pub(crate) fn client_delete(&mut self, args: &Map<String, Value>) -> Result<Value, RpcError> {
        let id = require_str(args, "id")?;
        Ok(json!({ "deleted": self.store.delete_client(&id)? }))
    }

    pub(crate) fn invoice_list(&mut self) -> Result<Value, RpcError> {
        Ok(json!({ "invoices": encode(&self.store.list_invoices()?)? }))
    }

    pub(crate) fn invoice_get(&mut self, args: &Map<String, Value>) -> Result<Value, RpcError> {
        let id = require_str(args, "id")?;
        match self.store.get_invoice(&id)? {
            Some(invoice) => encode(&invoice),
            None => Err(RpcError::not_found(format!("no invoice {id}"))),
        }
    }

    pub(crate) fn invoice_save(&mut self, args: &Map<String, Value>) -> Result<Value, RpcError> {
        let invoice: Invoice = require_decoded(args, "invoice")?;
        self.store.save_invoice(&invoice)?;
        Ok(json!({ "id": invoice.id }))
    }

    pub(crate) fn invoice_delete(&mut self, args: &Map<String, Value>) -> Result<Value, RpcError> {
        let id = require_str(args, "id")?;
        Ok(json!({ "deleted": self.store.delete_invoice(&id)? }))
    }
}
