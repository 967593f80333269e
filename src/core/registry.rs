//! Browser object-URL registry backed by `Blob` and `URL.createObjectURL`.

use js_sys::{Array, Uint8Array};
use pipdemo_core::{PreviewError, UrlRegistry};
use web_sys::{Blob, BlobPropertyBag, Url};

/// Mints `blob:` URLs in the current document.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserUrls;

impl UrlRegistry for BrowserUrls {
    fn register(&self, bytes: &[u8], mime: &str) -> Result<String, PreviewError> {
        let parts = Array::new();
        parts.push(&Uint8Array::from(bytes).buffer());

        let options = BlobPropertyBag::new();
        if !mime.trim().is_empty() {
            options.set_type(mime);
        }

        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| PreviewError::ObjectUrl(format!("{:?}", e)))?;
        Url::create_object_url_with_blob(&blob)
            .map_err(|e| PreviewError::ObjectUrl(format!("{:?}", e)))
    }

    fn revoke(&self, url: &str) {
        let _ = Url::revoke_object_url(url);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use pipdemo_core::ScopedUrl;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_register_returns_blob_url() {
        let guard = ScopedUrl::acquire(BrowserUrls, b"hello", "text/plain").unwrap();
        assert!(guard.url().starts_with("blob:"));
    }

    #[wasm_bindgen_test]
    fn test_distinct_registrations_get_distinct_urls() {
        let a = ScopedUrl::acquire(BrowserUrls, b"a", "image/png").unwrap();
        let b = ScopedUrl::acquire(BrowserUrls, b"a", "image/png").unwrap();
        assert_ne!(a.url(), b.url());
    }
}
