use std::time::Duration;

use serde::Deserialize;

use crate::actions::{ImageAction, TextAction};
use crate::download::decode_data_uri;
use crate::types::{
    ApiError, ApiErrorKind, EditRequest, ProcessImageRequest, ProcessedImage, ScrapeRequest,
    ScrapedPage,
};

/// `/edit` input is capped backend-side; truncate before dispatch so the
/// request mirrors what will actually be processed.
pub const MAX_EDIT_INPUT_CHARS: usize = 300;

#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
        }
    }
}

/// The three backend operations. Success for `/process-image` requires the
/// explicit success flag in addition to the absence of an `error` field.
#[async_trait::async_trait]
pub trait BackendApi: Send + Sync {
    async fn scrape(&self, url: &str) -> Result<ScrapedPage, ApiError>;
    async fn edit_text(&self, text: &str, action: TextAction)
        -> Result<Option<String>, ApiError>;
    async fn process_image(
        &self,
        image_url: &str,
        action: ImageAction,
    ) -> Result<ProcessedImage, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    base_url: reqwest::Url,
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(settings: BackendSettings) -> Result<Self, ApiError> {
        let base_url = reqwest::Url::parse(&settings.base_url)
            .map_err(|err| ApiError::new(ApiErrorKind::InvalidBaseUrl, err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(ApiErrorKind::Network, err.to_string()))?;
        Ok(Self { base_url, client })
    }

    /// JSON-body POST shared by all endpoints: non-2xx statuses and 2xx
    /// bodies carrying an `error` field both map to `ApiError`.
    async fn post_json<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<serde_json::Value, ApiError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|err| ApiError::new(ApiErrorKind::InvalidBaseUrl, err.to_string()))?;

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                ApiErrorKind::HttpStatus(status.as_u16()),
                format!("HTTP error! status: {}", status.as_u16()),
            ));
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|err| ApiError::new(ApiErrorKind::MalformedResponse, err.to_string()))?;

        // Any non-null `error` value is fatal, even if the backend ever
        // sends a structured one instead of a string.
        if let Some(error) = value.get("error").filter(|v| !v.is_null()) {
            let message = match error.as_str() {
                Some(text) => text.to_owned(),
                None => error.to_string(),
            };
            return Err(ApiError::new(ApiErrorKind::Application, message));
        }

        Ok(value)
    }
}

#[async_trait::async_trait]
impl BackendApi for ReqwestBackend {
    async fn scrape(&self, url: &str) -> Result<ScrapedPage, ApiError> {
        let value = self
            .post_json(
                "/scrape",
                &ScrapeRequest {
                    url: url.to_string(),
                },
            )
            .await?;
        serde_json::from_value(value)
            .map_err(|err| ApiError::new(ApiErrorKind::MalformedResponse, err.to_string()))
    }

    async fn edit_text(
        &self,
        text: &str,
        action: TextAction,
    ) -> Result<Option<String>, ApiError> {
        let value = self
            .post_json(
                "/edit",
                &EditRequest {
                    text: truncate_for_edit(text),
                    action,
                },
            )
            .await?;
        let payload: EditResponsePayload = serde_json::from_value(value)
            .map_err(|err| ApiError::new(ApiErrorKind::MalformedResponse, err.to_string()))?;
        // An absent or empty result means the backend made no change.
        Ok(payload.result.filter(|result| !result.is_empty()))
    }

    async fn process_image(
        &self,
        image_url: &str,
        action: ImageAction,
    ) -> Result<ProcessedImage, ApiError> {
        let value = self
            .post_json("/process-image", &ProcessImageRequest::new(image_url, action))
            .await?;
        let payload: ProcessResponsePayload = serde_json::from_value(value)
            .map_err(|err| ApiError::new(ApiErrorKind::MalformedResponse, err.to_string()))?;

        if !payload.success {
            return Err(ApiError::new(
                ApiErrorKind::Application,
                "Unknown error occurred",
            ));
        }

        let (bytes, media_type) = decode_data_uri(&payload.image_base64)
            .map_err(|err| ApiError::new(ApiErrorKind::MalformedResponse, err.to_string()))?;

        Ok(ProcessedImage {
            bytes,
            media_type,
            original_size: (payload.original_size[0], payload.original_size[1]),
            processed_size: (payload.processed_size[0], payload.processed_size[1]),
            original_file_size: payload.original_file_size,
            processed_file_size: payload.processed_file_size,
            size_reduction_percent: payload.size_reduction_percent,
            format: payload.format,
        })
    }
}

#[derive(Debug, Deserialize)]
struct EditResponsePayload {
    #[serde(default)]
    result: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProcessResponsePayload {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    image_base64: String,
    #[serde(default)]
    original_size: [u32; 2],
    #[serde(default)]
    processed_size: [u32; 2],
    #[serde(default)]
    original_file_size: u64,
    #[serde(default)]
    processed_file_size: u64,
    #[serde(default)]
    size_reduction_percent: f64,
    #[serde(default)]
    format: String,
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(ApiErrorKind::Timeout, err.to_string());
    }
    ApiError::new(ApiErrorKind::Network, err.to_string())
}

fn truncate_for_edit(text: &str) -> String {
    if text.chars().count() <= MAX_EDIT_INPUT_CHARS {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(MAX_EDIT_INPUT_CHARS).collect();
    truncated.push_str("...");
    truncated
}
