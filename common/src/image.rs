//! Encoding of uploaded image files into self-contained `data:` URLs.
//!
//! The browser hands the frontend raw bytes (read with `gloo-file`); this
//! module turns them into the payload stored on an image item so the template
//! never references the local file system.

use base64::{Engine as _, engine::general_purpose};

use crate::error::ImageError;

/// Mime type used when the browser reports none for a file.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Builds a `data:<mime>;base64,<payload>` URL from raw file bytes.
///
/// An empty `bytes` slice is treated as an unreadable file and rejected, so
/// the caller keeps whatever source the item had before.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> Result<String, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::EmptyPayload);
    }
    let mime = match mime.trim() {
        "" => FALLBACK_MIME,
        m => m,
    };
    let payload = general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{};base64,{}", mime, payload))
}
