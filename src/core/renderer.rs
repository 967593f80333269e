//! Document renderer implementations available to the page.
//!
//! The panel only forwards a locator; which viewer turns it into a frame is
//! decided here from configuration.

use pipdemo_core::{DocumentRenderer, DocumentSurface, EmbeddedViewer};
use serde::Deserialize;

use crate::config::PDFJS_VIEWER_URL;

/// Hosted PDF.js viewer. Suitable for remote `http(s)` documents only, since
/// the viewer cannot read another origin's `blob:` URLs.
#[derive(Clone, Debug)]
pub struct PdfJsViewer {
    pub viewer_url: String,
}

impl Default for PdfJsViewer {
    fn default() -> Self {
        Self {
            viewer_url: PDFJS_VIEWER_URL.to_string(),
        }
    }
}

impl DocumentRenderer for PdfJsViewer {
    fn surface(&self, locator: &str) -> DocumentSurface {
        let encoded = js_sys::encode_uri_component(locator);
        DocumentSurface {
            src: format!("{}?file={}", self.viewer_url, String::from(encoded)),
            title: "PDF viewer".to_string(),
        }
    }
}

/// Renderer choice as written in `demo.toml`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RendererKind {
    /// Browser built-in viewer in an iframe
    #[default]
    Embedded,
    /// Hosted PDF.js viewer
    PdfJs,
}

/// Configured renderer, dispatched without boxing so it can live in signals.
#[derive(Clone, Debug)]
pub enum Renderer {
    Embedded(EmbeddedViewer),
    PdfJs(PdfJsViewer),
}

impl Renderer {
    /// Picks a renderer for a locator. `blob:` and `data:` documents always use
    /// the embedded viewer.
    pub fn for_locator(kind: RendererKind, locator: &str) -> Self {
        let local = locator.starts_with("blob:") || locator.starts_with("data:");
        match kind {
            RendererKind::PdfJs if !local => Renderer::PdfJs(PdfJsViewer::default()),
            _ => Renderer::Embedded(EmbeddedViewer),
        }
    }
}

impl DocumentRenderer for Renderer {
    fn surface(&self, locator: &str) -> DocumentSurface {
        match self {
            Renderer::Embedded(viewer) => viewer.surface(locator),
            Renderer::PdfJs(viewer) => viewer.surface(locator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_locators_use_embedded_viewer() {
        for locator in ["blob:http://localhost/1", "data:application/pdf;base64,AA=="] {
            assert!(matches!(
                Renderer::for_locator(RendererKind::PdfJs, locator),
                Renderer::Embedded(_)
            ));
        }
    }

    #[test]
    fn test_remote_locator_uses_configured_viewer() {
        assert!(matches!(
            Renderer::for_locator(RendererKind::PdfJs, "https://example.com/a.pdf"),
            Renderer::PdfJs(_)
        ));
        assert!(matches!(
            Renderer::for_locator(RendererKind::Embedded, "https://example.com/a.pdf"),
            Renderer::Embedded(_)
        ));
    }

    #[test]
    fn test_pdf_js_setting_leaves_generated_blob_embedded() {
        let source = crate::config::DEMO_TOML
            .replace("renderer = \"embedded\"", "renderer = \"pdf-js\"");
        let config = crate::config::DemoConfig::parse(&source).unwrap();
        assert_eq!(config.pdf.renderer, RendererKind::PdfJs);

        let blob = Renderer::for_locator(config.pdf.renderer, "blob:http://localhost/demo");
        assert!(matches!(blob, Renderer::Embedded(_)));
        assert_eq!(
            blob.surface("blob:http://localhost/demo").src,
            "blob:http://localhost/demo"
        );

        let remote = Renderer::for_locator(config.pdf.renderer, "https://example.com/a.pdf");
        assert!(matches!(remote, Renderer::PdfJs(_)));
    }

    #[test]
    fn test_embedded_surface_forwards_locator() {
        let renderer = Renderer::for_locator(RendererKind::Embedded, "blob:x");
        assert_eq!(renderer.surface("blob:x").src, "blob:x");
    }
}
