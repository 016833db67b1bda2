#![forbid(unsafe_code)]

use crate::error::SuggestError;
use crate::prompt::{defect_prompt, summary_prompt};
use crate::{FailedFinding, TextSuggestionService};
use insp_core::model::Photo;
use serde_json::{Value, json};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MODEL: &str = "gemini-1.5-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Blocking client for the Gemini `generateContent` endpoint. Holding a
/// client without a key is fine; every call then fails fast with
/// `MissingCredential` instead of attempting the request.
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Self {
        let api_key = api_key.filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            log::warn!("GEMINI_API_KEY is not set; suggestion calls will fail fast");
        }
        Self {
            http: reqwest::blocking::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key,
            base_url: base_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            std::env::var("GEMINI_API_KEY").ok(),
            std::env::var("GEMINI_BASE_URL").ok(),
        )
    }

    fn generate(&self, parts: Vec<Value>) -> Result<String, SuggestError> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(SuggestError::MissingCredential);
        };

        let url = format!(
            "{}/v1beta/models/{MODEL}:generateContent?key={key}",
            self.base_url
        );
        let body = json!({ "contents": [{ "parts": parts }] });

        let response = self.http.post(&url).json(&body).send()?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            log::warn!("gemini call failed with status {status}");
            return Err(SuggestError::Status {
                code: status.as_u16(),
                message,
            });
        }

        let payload: Value = response.json()?;
        payload
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .map(|text| text.trim().to_string())
            .ok_or(SuggestError::MalformedResponse)
    }
}

impl TextSuggestionService for GeminiClient {
    fn analyze_defect(
        &self,
        photo: &Photo,
        point_description: &str,
    ) -> Result<String, SuggestError> {
        self.generate(vec![
            json!({ "text": defect_prompt(point_description) }),
            json!({
                "inline_data": {
                    "mime_type": "image/jpeg",
                    "data": photo.image_data,
                }
            }),
        ])
    }

    fn summarize_failures(&self, findings: &[FailedFinding]) -> Result<String, SuggestError> {
        self.generate(vec![json!({ "text": summary_prompt(findings) })])
    }
}
