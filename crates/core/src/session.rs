#![forbid(unsafe_code)]

use crate::catalog::{DEFAULT_AREA_NAME, next_area_name};
use crate::ids::IdGen;
use crate::model::{Area, Inspection, Item, Photo, PropertyType};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, PartialEq, Eq)]
pub enum SessionError {
    Closed,
    UnknownArea { area_id: i64 },
    UnknownItem { area_id: i64, item_id: i64 },
    PhotoIndex { index: usize, len: usize },
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "edit session is closed"),
            Self::UnknownArea { area_id } => write!(f, "unknown area {area_id}"),
            Self::UnknownItem { area_id, item_id } => {
                write!(f, "unknown item {item_id} in area {area_id}")
            }
            Self::PhotoIndex { index, len } => {
                write!(f, "photo index {index} out of range (len={len})")
            }
        }
    }
}

impl std::error::Error for SessionError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Ready,
    Saved,
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuggestionTarget {
    ItemComment { area_id: i64, item_id: i64 },
    ReportSummary,
}

/// Handle for merging a collaborator response back into the draft it was
/// requested for. The nonce pins the ticket to one session, so a response
/// that resolves after cancel (or against a different session) is dropped
/// instead of applied.
#[derive(Clone, Copy, Debug)]
pub struct SuggestionTicket {
    nonce: u64,
    target: SuggestionTarget,
}

impl SuggestionTicket {
    pub fn target(&self) -> SuggestionTarget {
        self.target
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    Merged,
    Dropped,
}

static NEXT_NONCE: AtomicU64 = AtomicU64::new(1);

/// In-memory edit session over one inspection draft.
///
/// `Ready` until `save` or `cancel`; every mutating operation afterwards
/// fails with `SessionError::Closed`. The draft is exclusively owned here:
/// persistence is the caller's move, with the inspection `save` returns.
#[derive(Debug)]
pub struct EditSession {
    draft: Inspection,
    state: SessionState,
    ids: IdGen,
    nonce: u64,
}

impl EditSession {
    /// Fresh draft: generated id, empty identifying fields, today's date,
    /// one default area with no items.
    pub fn new(today: &str) -> Self {
        let mut ids = IdGen::new();
        let id = ids.inspection_id();
        let area = Area::new(ids.next(), DEFAULT_AREA_NAME);
        let draft = Inspection {
            id,
            client_name: String::new(),
            property_location: String::new(),
            property_type: PropertyType::Apartment,
            inspector_name: String::new(),
            inspection_date: today.to_string(),
            areas: vec![area],
            ai_summary: None,
        };
        Self::over(draft, ids)
    }

    /// Session over an already-loaded inspection. The id generator is seeded
    /// past every id in the record so additions cannot collide.
    pub fn load(inspection: Inspection) -> Self {
        let max_id = inspection
            .areas
            .iter()
            .flat_map(|area| std::iter::once(area.id).chain(area.items.iter().map(|item| item.id)))
            .max()
            .unwrap_or(0);
        Self::over(inspection, IdGen::seeded(max_id))
    }

    fn over(draft: Inspection, ids: IdGen) -> Self {
        Self {
            draft,
            state: SessionState::Ready,
            ids,
            nonce: NEXT_NONCE.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn draft(&self) -> &Inspection {
        &self.draft
    }

    fn ensure_ready(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Ready => Ok(()),
            SessionState::Saved | SessionState::Cancelled => Err(SessionError::Closed),
        }
    }

    fn area_mut(&mut self, area_id: i64) -> Result<&mut Area, SessionError> {
        self.draft
            .areas
            .iter_mut()
            .find(|area| area.id == area_id)
            .ok_or(SessionError::UnknownArea { area_id })
    }

    fn item_mut(&mut self, area_id: i64, item_id: i64) -> Result<&mut Item, SessionError> {
        self.area_mut(area_id)?
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(SessionError::UnknownItem { area_id, item_id })
    }

    pub fn set_client_name(&mut self, value: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_ready()?;
        self.draft.client_name = value.into();
        Ok(())
    }

    pub fn set_property_location(&mut self, value: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_ready()?;
        self.draft.property_location = value.into();
        Ok(())
    }

    pub fn set_inspector_name(&mut self, value: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_ready()?;
        self.draft.inspector_name = value.into();
        Ok(())
    }

    pub fn set_property_type(&mut self, value: PropertyType) -> Result<(), SessionError> {
        self.ensure_ready()?;
        self.draft.property_type = value;
        Ok(())
    }

    pub fn set_inspection_date(&mut self, value: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_ready()?;
        self.draft.inspection_date = value.into();
        Ok(())
    }

    pub fn set_ai_summary(&mut self, value: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_ready()?;
        self.draft.ai_summary = Some(value.into());
        Ok(())
    }

    /// Appends an area with a generated id and the default `"New Area N"`
    /// name. Returns the new area's id.
    pub fn add_area(&mut self) -> Result<i64, SessionError> {
        self.ensure_ready()?;
        let name = next_area_name(self.draft.areas.len());
        let id = self.ids.next();
        self.draft.areas.push(Area::new(id, name));
        Ok(id)
    }

    pub fn rename_area(&mut self, area_id: i64, name: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_ready()?;
        self.area_mut(area_id)?.name = name.into();
        Ok(())
    }

    /// Removes the area and, with it, every item and photo it owned.
    pub fn remove_area(&mut self, area_id: i64) -> Result<(), SessionError> {
        self.ensure_ready()?;
        self.area_mut(area_id)?;
        self.draft.areas.retain(|area| area.id != area_id);
        Ok(())
    }

    /// Appends a fresh `N/A` item to the target area. Returns the item id.
    pub fn add_item(
        &mut self,
        area_id: i64,
        category: impl Into<String>,
        point: impl Into<String>,
    ) -> Result<i64, SessionError> {
        self.ensure_ready()?;
        let id = self.ids.next();
        let item = Item::new(id, category, point);
        self.area_mut(area_id)?.items.push(item);
        Ok(id)
    }

    /// Replace-by-id field edit: the item with `item.id` is swapped for the
    /// given one, position and siblings untouched.
    pub fn update_item(&mut self, area_id: i64, item: Item) -> Result<(), SessionError> {
        self.ensure_ready()?;
        let slot = self.item_mut(area_id, item.id)?;
        *slot = item;
        Ok(())
    }

    pub fn remove_item(&mut self, area_id: i64, item_id: i64) -> Result<(), SessionError> {
        self.ensure_ready()?;
        self.item_mut(area_id, item_id)?;
        self.area_mut(area_id)?.items.retain(|item| item.id != item_id);
        Ok(())
    }

    /// Appends to the item's photo sequence; last attached ends up last.
    pub fn attach_photo(
        &mut self,
        area_id: i64,
        item_id: i64,
        photo: Photo,
    ) -> Result<(), SessionError> {
        self.ensure_ready()?;
        self.item_mut(area_id, item_id)?.photos.push(photo);
        Ok(())
    }

    /// Removes by positional index; the rest keep their relative order.
    pub fn detach_photo(
        &mut self,
        area_id: i64,
        item_id: i64,
        index: usize,
    ) -> Result<(), SessionError> {
        self.ensure_ready()?;
        let photos = &mut self.item_mut(area_id, item_id)?.photos;
        if index >= photos.len() {
            return Err(SessionError::PhotoIndex {
                index,
                len: photos.len(),
            });
        }
        photos.remove(index);
        Ok(())
    }

    /// Merges a defect analysis into the item's comments, below whatever the
    /// inspector already wrote.
    pub fn append_item_analysis(
        &mut self,
        area_id: i64,
        item_id: i64,
        text: &str,
    ) -> Result<(), SessionError> {
        self.ensure_ready()?;
        let item = self.item_mut(area_id, item_id)?;
        item.comments = merge_analysis(&item.comments, text);
        Ok(())
    }

    pub fn ticket(&self, target: SuggestionTarget) -> Result<SuggestionTicket, SessionError> {
        self.ensure_ready()?;
        Ok(SuggestionTicket {
            nonce: self.nonce,
            target,
        })
    }

    /// Merges a resolved suggestion. A ticket from a closed or different
    /// session is dropped, as is one whose target item has since been
    /// removed: a late response must never resurrect discarded state.
    pub fn apply_suggestion(&mut self, ticket: SuggestionTicket, text: &str) -> Applied {
        if self.state != SessionState::Ready || ticket.nonce != self.nonce {
            return Applied::Dropped;
        }
        match ticket.target {
            SuggestionTarget::ItemComment { area_id, item_id } => {
                match self.item_mut(area_id, item_id) {
                    Ok(item) => {
                        item.comments = merge_analysis(&item.comments, text);
                        Applied::Merged
                    }
                    Err(_) => Applied::Dropped,
                }
            }
            SuggestionTarget::ReportSummary => {
                self.draft.ai_summary = Some(text.to_string());
                Applied::Merged
            }
        }
    }

    /// Ends the session; the returned inspection is what the caller persists.
    pub fn save(&mut self) -> Result<Inspection, SessionError> {
        self.ensure_ready()?;
        self.state = SessionState::Saved;
        Ok(self.draft.clone())
    }

    /// Discards the draft. No store interaction happens here or later.
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        self.ensure_ready()?;
        self.state = SessionState::Cancelled;
        Ok(())
    }
}

fn merge_analysis(comments: &str, text: &str) -> String {
    if comments.is_empty() {
        format!("AI Analysis: {text}")
    } else {
        format!("{comments}\n\nAI Analysis: {text}")
    }
}
