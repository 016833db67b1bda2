#![forbid(unsafe_code)]

use super::encode;
use crate::server::{RpcError, Server};
use crate::support::{require_decoded, require_i64, require_str, require_usize, today};
use insp_core::model::{Item, Photo, PropertyType};
use insp_core::session::{EditSession, SessionState};
use serde_json::{Map, Value, json};

impl Server {
    fn ensure_seat_free(&self) -> Result<(), RpcError> {
        if self.session.is_some() {
            return Err(RpcError::new(
                "SESSION_BUSY",
                "an edit session is already open; save or cancel it first",
            ));
        }
        Ok(())
    }

    pub(crate) fn session_new(&mut self) -> Result<Value, RpcError> {
        self.ensure_seat_free()?;
        let session = EditSession::new(&today());
        let draft = encode(session.draft())?;
        self.session = Some(session);
        Ok(json!({ "draft": draft }))
    }

    pub(crate) fn session_load(&mut self, args: &Map<String, Value>) -> Result<Value, RpcError> {
        self.ensure_seat_free()?;
        let id = require_str(args, "id")?;
        let Some(inspection) = self.store.get_inspection(&id)? else {
            return Err(RpcError::not_found(format!("no inspection {id}")));
        };
        let session = EditSession::load(inspection);
        let draft = encode(session.draft())?;
        self.session = Some(session);
        Ok(json!({ "draft": draft }))
    }

    pub(crate) fn session_draft(&mut self) -> Result<Value, RpcError> {
        let Some(session) = self.session.as_ref() else {
            return Err(RpcError::no_session());
        };
        let state = match session.state() {
            SessionState::Ready => "ready",
            SessionState::Saved => "saved",
            SessionState::Cancelled => "cancelled",
        };
        Ok(json!({ "draft": encode(session.draft())?, "state": state }))
    }

    pub(crate) fn session_edit(&mut self, args: &Map<String, Value>) -> Result<Value, RpcError> {
        let op = require_str(args, "op")?;
        let Some(session) = self.session.as_mut() else {
            return Err(RpcError::no_session());
        };

        let mut response = Map::new();
        match op.as_str() {
            "setField" => {
                let field = require_str(args, "field")?;
                match field.as_str() {
                    "clientName" => session.set_client_name(require_str(args, "value")?)?,
                    "propertyLocation" => {
                        session.set_property_location(require_str(args, "value")?)?
                    }
                    "inspectorName" => session.set_inspector_name(require_str(args, "value")?)?,
                    "inspectionDate" => session.set_inspection_date(require_str(args, "value")?)?,
                    "aiSummary" => session.set_ai_summary(require_str(args, "value")?)?,
                    "propertyType" => {
                        let value: PropertyType = require_decoded(args, "value")?;
                        session.set_property_type(value)?;
                    }
                    other => {
                        return Err(RpcError::invalid(format!("unknown field {other}")));
                    }
                }
            }
            "addArea" => {
                let area_id = session.add_area()?;
                response.insert("areaId".to_string(), json!(area_id));
            }
            "renameArea" => {
                session.rename_area(require_i64(args, "areaId")?, require_str(args, "name")?)?;
            }
            "removeArea" => {
                session.remove_area(require_i64(args, "areaId")?)?;
            }
            "addItem" => {
                let item_id = session.add_item(
                    require_i64(args, "areaId")?,
                    require_str(args, "category")?,
                    require_str(args, "point")?,
                )?;
                response.insert("itemId".to_string(), json!(item_id));
            }
            "updateItem" => {
                let item: Item = require_decoded(args, "item")?;
                session.update_item(require_i64(args, "areaId")?, item)?;
            }
            "removeItem" => {
                session.remove_item(require_i64(args, "areaId")?, require_i64(args, "itemId")?)?;
            }
            "attachPhoto" => {
                let photo: Photo = require_decoded(args, "photo")?;
                session.attach_photo(
                    require_i64(args, "areaId")?,
                    require_i64(args, "itemId")?,
                    photo,
                )?;
            }
            "detachPhoto" => {
                session.detach_photo(
                    require_i64(args, "areaId")?,
                    require_i64(args, "itemId")?,
                    require_usize(args, "index")?,
                )?;
            }
            other => {
                return Err(RpcError::invalid(format!("unknown edit op {other}")));
            }
        }

        response.insert("draft".to_string(), encode(session.draft())?);
        Ok(Value::Object(response))
    }

    pub(crate) fn session_save(&mut self) -> Result<Value, RpcError> {
        let Some(session) = self.session.as_ref() else {
            return Err(RpcError::no_session());
        };
        // Persist first: a store failure leaves the session open so the user
        // can retry instead of losing the draft.
        let inspection = session.draft().clone();
        self.store.save_inspection(&inspection)?;
        if let Some(session) = self.session.as_mut() {
            session.save()?;
        }
        self.session = None;
        Ok(json!({ "id": inspection.id }))
    }

    pub(crate) fn session_cancel(&mut self) -> Result<Value, RpcError> {
        let Some(session) = self.session.as_mut() else {
            return Err(RpcError::no_session());
        };
        session.cancel()?;
        self.session = None;
        Ok(json!({ "cancelled": true }))
    }
}
