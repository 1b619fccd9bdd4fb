use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::actions::{ImageAction, ImageParams, TextAction};

/// Body of a `POST /scrape`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeRequest {
    pub url: String,
}

/// Body of a `POST /edit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditRequest {
    pub text: String,
    pub action: TextAction,
}

/// Body of a `POST /process-image`. `width`/`height` are omitted entirely
/// except for resize; `quality` and `factor` are always sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessImageRequest {
    pub image_url: String,
    pub action: ImageAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub quality: u32,
    pub factor: f64,
}

impl ProcessImageRequest {
    pub fn new(image_url: impl Into<String>, action: ImageAction) -> Self {
        let params = ImageParams::for_action(action);
        Self {
            image_url: image_url.into(),
            action,
            width: params.width,
            height: params.height,
            quality: params.quality,
            factor: params.factor,
        }
    }
}

/// Structured scrape payload. All fields are defaulted so a sparse backend
/// response degrades to empty sections rather than a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ScrapedPage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub images: Vec<ScrapedImage>,
    #[serde(default)]
    pub content_blocks: Vec<ScrapedBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ScrapedImage {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ScrapedBlock {
    #[serde(default)]
    pub id: String,
    /// The backend spells this `type`.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub images: Vec<ScrapedImage>,
}

/// Settled `/process-image` result with the data URI already decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedImage {
    pub bytes: Vec<u8>,
    /// Media type from the data URI, e.g. `image/jpeg`.
    pub media_type: String,
    pub original_size: (u32, u32),
    pub processed_size: (u32, u32),
    pub original_file_size: u64,
    pub processed_file_size: u64,
    /// Positive for a reduction, as reported by the backend.
    pub size_reduction_percent: f64,
    /// Output format tag, e.g. `JPG` or `PNG`.
    pub format: String,
}

/// Uniform error for everything that can go wrong at the dispatcher
/// boundary. `message` is what the user sees, verbatim for application
/// errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiErrorKind {
    #[error("invalid base url")]
    InvalidBaseUrl,
    #[error("network error")]
    Network,
    #[error("timeout")]
    Timeout,
    #[error("http status {0}")]
    HttpStatus(u16),
    /// The backend answered 2xx with an `error` field.
    #[error("application error")]
    Application,
    #[error("malformed response")]
    MalformedResponse,
}

#[cfg(test)]
mod tests {
    use super::{ApiError, ApiErrorKind, ProcessImageRequest, ScrapedPage};
    use crate::actions::ImageAction;

    #[test]
    fn api_error_displays_its_message() {
        let err = ApiError::new(ApiErrorKind::Application, "invalid url");
        assert_eq!(err.to_string(), "invalid url");
        assert_eq!(err.kind.to_string(), "application error");
    }

    #[test]
    fn blur_request_omits_dimensions() {
        let request = ProcessImageRequest::new("https://example.com/a.png", ImageAction::Blur);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "image_url": "https://example.com/a.png",
                "action": "blur",
                "quality": 85,
                "factor": 2.0,
            })
        );
    }

    #[test]
    fn sparse_scrape_payload_defaults_to_empty_sections() {
        let page: ScrapedPage = serde_json::from_str(r#"{"title": "T"}"#).unwrap();
        assert_eq!(page.title, "T");
        assert!(page.meta_description.is_empty());
        assert!(page.images.is_empty());
        assert!(page.content_blocks.is_empty());
    }

    #[test]
    fn block_kind_deserializes_from_type_field() {
        let page: ScrapedPage = serde_json::from_str(
            r#"{"content_blocks": [{"id": "b1", "type": "heading", "text": "Hi"}]}"#,
        )
        .unwrap();
        assert_eq!(page.content_blocks[0].kind, "heading");
    }
}
