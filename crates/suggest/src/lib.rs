#![forbid(unsafe_code)]

mod error;
mod gemini;
mod prompt;

pub use error::{SuggestError, inline_error};
pub use gemini::GeminiClient;

use insp_core::model::{Item, Photo};
use serde::{Deserialize, Serialize};

/// Wire shape of one failed inspection point in a summary request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedFinding {
    pub category: String,
    pub point: String,
    pub comments: String,
    pub location: String,
}

impl From<&Item> for FailedFinding {
    fn from(item: &Item) -> Self {
        Self {
            category: item.category.clone(),
            point: item.point.clone(),
            comments: item.comments.clone(),
            location: item.location.clone(),
        }
    }
}

/// Free-text assistance consumed by the editing flow. One request per
/// explicit user action; no caching, no retry — a repeated action issues a
/// fresh request.
pub trait TextSuggestionService {
    /// Short factual defect description for one photo, or an explicit
    /// no-defect statement.
    fn analyze_defect(&self, photo: &Photo, point_description: &str)
    -> Result<String, SuggestError>;

    /// Grouped, prioritized natural-language summary of the failed items,
    /// in the order given.
    fn summarize_failures(&self, findings: &[FailedFinding]) -> Result<String, SuggestError>;
}
