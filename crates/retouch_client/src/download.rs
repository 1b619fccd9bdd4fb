use base64::Engine as _;
use thiserror::Error;

use crate::actions::ImageAction;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataUriError {
    #[error("missing data: prefix")]
    MissingPrefix,
    #[error("missing ;base64, marker")]
    MissingBase64Marker,
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),
}

/// Splits `data:<media>;base64,<payload>` into decoded bytes and media type.
pub fn decode_data_uri(uri: &str) -> Result<(Vec<u8>, String), DataUriError> {
    let rest = uri.strip_prefix("data:").ok_or(DataUriError::MissingPrefix)?;
    let (media_type, payload) = rest
        .split_once(";base64,")
        .ok_or(DataUriError::MissingBase64Marker)?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|err| DataUriError::InvalidBase64(err.to_string()))?;
    Ok((bytes, media_type.to_string()))
}

/// Filename for a saved result: the action kind plus a caller-supplied
/// timestamp, with the extension following the backend's format tag.
pub fn download_filename(action: ImageAction, format: &str, timestamp_ms: u64) -> String {
    let extension = match format.to_ascii_lowercase().as_str() {
        "png" => "png",
        _ => "jpg",
    };
    format!(
        "processed_image_{}_{}.{}",
        action.as_str(),
        timestamp_ms,
        extension
    )
}

#[cfg(test)]
mod tests {
    use super::{decode_data_uri, download_filename, DataUriError};
    use crate::actions::ImageAction;

    #[test]
    fn decodes_media_type_and_payload() {
        let (bytes, media_type) = decode_data_uri("data:image/jpg;base64,aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
        assert_eq!(media_type, "image/jpg");
    }

    #[test]
    fn rejects_non_data_uris() {
        assert_eq!(
            decode_data_uri("https://example.com/a.png").unwrap_err(),
            DataUriError::MissingPrefix
        );
        assert_eq!(
            decode_data_uri("data:image/png,plain").unwrap_err(),
            DataUriError::MissingBase64Marker
        );
    }

    #[test]
    fn filename_embeds_action_and_timestamp() {
        assert_eq!(
            download_filename(ImageAction::Blur, "JPG", 1_700_000_000_000),
            "processed_image_blur_1700000000000.jpg"
        );
        assert_eq!(
            download_filename(ImageAction::Grayscale, "PNG", 1),
            "processed_image_grayscale_1.png"
        );
    }
}
