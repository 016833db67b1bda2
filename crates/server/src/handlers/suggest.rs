#![forbid(unsafe_code)]

use crate::server::{RpcError, Server};
use crate::support::{optional_usize, require_i64};
use insp_core::derive::failed_items;
use insp_core::session::{Applied, SuggestionTarget};
use insp_suggest::{FailedFinding, inline_error};
use serde_json::{Map, Value, json};

impl Server {
    /// Runs the defect analysis for one photo of one draft item and merges
    /// the outcome (or its inline error text) into that item's comments.
    pub(crate) fn suggest_analyze(&mut self, args: &Map<String, Value>) -> Result<Value, RpcError> {
        let area_id = require_i64(args, "areaId")?;
        let item_id = require_i64(args, "itemId")?;
        let photo_index = optional_usize(args, "photoIndex")?.unwrap_or(0);

        let Some(session) = self.session.as_ref() else {
            return Err(RpcError::no_session());
        };
        let draft = session.draft();
        let Some(item) = draft
            .areas
            .iter()
            .find(|area| area.id == area_id)
            .and_then(|area| area.items.iter().find(|item| item.id == item_id))
        else {
            return Err(RpcError::invalid(format!(
                "unknown item {item_id} in area {area_id}"
            )));
        };
        let Some(photo) = item.photos.get(photo_index) else {
            return Err(RpcError::invalid(format!(
                "item {item_id} has no photo at index {photo_index}"
            )));
        };
        let photo = photo.clone();
        let point = item.point.clone();
        let ticket = session.ticket(SuggestionTarget::ItemComment { area_id, item_id })?;

        let text = match self.suggest.analyze_defect(&photo, &point) {
            Ok(text) => text,
            Err(err) => inline_error(&err),
        };

        let Some(session) = self.session.as_mut() else {
            return Err(RpcError::no_session());
        };
        let applied = session.apply_suggestion(ticket, &text);
        Ok(json!({ "applied": applied == Applied::Merged, "text": text }))
    }

    /// Summarizes the draft's failed items and merges the outcome into its
    /// report summary field.
    pub(crate) fn suggest_summary(&mut self) -> Result<Value, RpcError> {
        let Some(session) = self.session.as_ref() else {
            return Err(RpcError::no_session());
        };
        let findings: Vec<FailedFinding> = failed_items(session.draft())
            .into_iter()
            .map(FailedFinding::from)
            .collect();
        let ticket = session.ticket(SuggestionTarget::ReportSummary)?;

        let text = match self.suggest.summarize_failures(&findings) {
            Ok(text) => text,
            Err(err) => inline_error(&err),
        };

        let Some(session) = self.session.as_mut() else {
            return Err(RpcError::no_session());
        };
        let applied = session.apply_suggestion(ticket, &text);
        Ok(json!({ "applied": applied == Applied::Merged, "text": text }))
    }
}
