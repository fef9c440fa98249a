//! Image file → inline request payload
//!
//! Reads the selected file and turns it into the `{ mime_type, data }` block
//! the AI service accepts next to the text prompt.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::ImageFormat;
use tokio::task;

use crate::analysis::AnalysisError;
use crate::state::data::{ImageMime, SelectedImage};

/// Base64 image tagged with its MIME type, built fresh for each request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImagePart {
    pub mime_type: String,
    /// Standard alphabet, padded
    pub data: String,
}

/// Read and encode the selected image
///
/// # Returns
/// * `Ok(EncodedImagePart)` - Payload ready to embed in a request
/// * `Err(AnalysisError::Read)` - The file could not be read
/// * `Err(AnalysisError::Unknown)` - The encoding worker died
pub async fn encode_file(image: &SelectedImage) -> Result<EncodedImagePart, AnalysisError> {
    let bytes = tokio::fs::read(&image.path).await.map_err(|e| {
        AnalysisError::Read(format!("failed to read {}: {}", image.name, e))
    })?;

    log::info!("📷 Read {} ({} KB)", image.name, bytes.len() / 1024);

    let mime = image.mime;
    let name = image.name.clone();

    // Base64 of a multi-megabyte photo is CPU work, keep it off the UI executor
    task::spawn_blocking(move || {
        warn_on_mismatch(&name, mime, &bytes);
        encode_bytes(&bytes, mime)
    })
    .await
    .map_err(|e| {
        log::error!("Encoding worker failed: {}", e);
        AnalysisError::Unknown
    })
}

/// Encode raw bytes with the declared type
pub fn encode_bytes(bytes: &[u8], mime: ImageMime) -> EncodedImagePart {
    EncodedImagePart {
        mime_type: mime.as_str().to_string(),
        data: STANDARD.encode(bytes),
    }
}

/// Type suggested by the file's magic bytes, if it is one we accept
pub fn sniff_mime(bytes: &[u8]) -> Option<ImageMime> {
    match image::guess_format(bytes).ok()? {
        ImageFormat::Jpeg => Some(ImageMime::Jpeg),
        ImageFormat::Png => Some(ImageMime::Png),
        ImageFormat::WebP => Some(ImageMime::Webp),
        _ => None,
    }
}

/// The declared type is what gets sent; a mismatch is only worth a warning
fn warn_on_mismatch(name: &str, declared: ImageMime, bytes: &[u8]) {
    match sniff_mime(bytes) {
        Some(actual) if actual != declared => {
            log::warn!(
                "⚠️  {} is named as {} but looks like {}, sending as declared",
                name,
                declared,
                actual
            );
        }
        None => log::warn!("⚠️  {} does not look like a JPEG, PNG or WebP image", name),
        _ => {}
    }
}
