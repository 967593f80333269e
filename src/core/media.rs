//! Demo content providers.
//!
//! Fetches a remote image into a tagged blob and synthesizes the demo PDF.
//! Both are used by the page only; the preview panel never calls them.

use pipdemo_core::demo_pdf::{self, DemoPage};
use pipdemo_core::{BlobContent, PreviewError};

use crate::core::error::FetchError;
use crate::utils::fetch_bytes;

/// MIME type of the synthesized document.
pub const PDF_MIME: &str = "application/pdf";

/// Download `url` and wrap it as a file named `file_name`.
///
/// The MIME tag comes from the response's `Content-Type`, falling back to
/// sniffing the bytes.
pub async fn capture_image(url: &str, file_name: &str) -> Result<BlobContent, FetchError> {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&format!("Capturing image from {}", url).into());

    let fetched = fetch_bytes(url).await?;
    Ok(BlobContent::from_response(
        file_name,
        fetched.content_type.as_deref(),
        fetched.bytes,
    ))
}

/// Build the demo PDF as a blob.
pub fn create_pdf(file_name: &str, pages: &[DemoPage]) -> Result<BlobContent, PreviewError> {
    let bytes = demo_pdf::build(pages)?;
    Ok(BlobContent::new(file_name, PDF_MIME, bytes))
}
