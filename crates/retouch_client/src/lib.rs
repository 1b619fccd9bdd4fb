//! Retouch client: wire contracts and request dispatch for the scrape,
//! text-edit, and image-process backends.
mod actions;
mod api;
mod client;
mod download;
mod types;

pub use actions::{ImageAction, ImageParams, TextAction};
pub use api::{BackendApi, BackendSettings, ReqwestBackend, MAX_EDIT_INPUT_CHARS};
pub use client::{ClientEvent, ClientHandle, RequestToken};
pub use download::{decode_data_uri, download_filename, DataUriError};
pub use types::{
    ApiError, ApiErrorKind, EditRequest, ProcessImageRequest, ProcessedImage, ScrapeRequest,
    ScrapedBlock, ScrapedImage, ScrapedPage,
};
