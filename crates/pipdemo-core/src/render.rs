//! Render descriptions produced by a preview session.
//!
//! These are plain data; the web layer turns them into DOM. Keeping them
//! free of `web_sys` lets the dispatch logic be tested natively.

use crate::zoom::Zoom;

/// Tallest an image may be drawn, as a percentage of viewport height.
pub const MAX_IMAGE_HEIGHT_VH: u8 = 80;

/// Raster image scaled by the session zoom.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageSurface {
    pub src: String,
    pub alt: String,
    pub zoom: Zoom,
    pub max_height_vh: u8,
}

impl ImageSurface {
    /// Inline style: scaled, capped to the viewport, horizontally centered.
    pub fn style(&self) -> String {
        format!(
            "transform: scale({}); max-width: 100%; max-height: {}vh; display: block; margin: 0 auto;",
            self.zoom.factor(),
            self.max_height_vh
        )
    }
}

/// Surface produced by a [`DocumentRenderer`] for a locator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentSurface {
    /// URL loaded into the embedding frame
    pub src: String,
    /// Accessible title for the frame
    pub title: String,
}

/// What the panel body should draw.
#[derive(Clone, Debug, PartialEq)]
pub enum Drawable {
    Image(ImageSurface),
    Document(DocumentSurface),
    /// Placeholder naming the content kind
    Unsupported { kind: String },
}

impl Drawable {
    /// Message shown for the unsupported placeholder.
    pub fn unsupported_message(kind: &str) -> String {
        format!("Unsupported file type: {}", kind)
    }
}

/// Out-of-process document renderer. Locator in, surface out.
pub trait DocumentRenderer {
    fn surface(&self, locator: &str) -> DocumentSurface;
}

/// Hands the locator straight to the host's built-in viewer.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedViewer;

impl DocumentRenderer for EmbeddedViewer {
    fn surface(&self, locator: &str) -> DocumentSurface {
        DocumentSurface {
            src: locator.to_string(),
            title: "Document preview".to_string(),
        }
    }
}

/// Minimized thumbnail body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Thumbnail {
    Image { src: String },
    Label(String),
}

/// Stand-alone page showing an image as a full-bleed background.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalView {
    pub title: String,
    pub html: String,
}

impl ExternalView {
    pub fn full_bleed_image(src: &str) -> Self {
        let title = "Image Preview".to_string();
        let html = format!(
            r#"<html>
  <head>
    <title>{title}</title>
    <style>
      body {{
        margin: 0;
        height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        background: url('{src}') no-repeat center center fixed;
        background-size: cover;
      }}
    </style>
  </head>
  <body></body>
</html>"#,
            title = title,
            src = escape_css_string(src),
        );
        Self { title, html }
    }
}

/// Escapes a value for use inside a single-quoted CSS string in a `<style>` block.
fn escape_css_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '<' => out.push_str("\\3c "),
            '\n' | '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_style() {
        let surface = ImageSurface {
            src: "blob:x".to_string(),
            alt: "Preview".to_string(),
            zoom: Zoom::clamped(2.0),
            max_height_vh: MAX_IMAGE_HEIGHT_VH,
        };
        let style = surface.style();
        assert!(style.contains("transform: scale(2)"));
        assert!(style.contains("max-height: 80vh"));
        assert!(style.contains("margin: 0 auto"));
    }

    #[test]
    fn test_embedded_viewer_forwards_locator() {
        let surface = EmbeddedViewer.surface("blob:http://localhost/1234");
        assert_eq!(surface.src, "blob:http://localhost/1234");
    }

    #[test]
    fn test_unsupported_message() {
        assert_eq!(
            Drawable::unsupported_message("text/plain"),
            "Unsupported file type: text/plain"
        );
    }

    #[test]
    fn test_full_bleed_page() {
        let view = ExternalView::full_bleed_image("blob:http://localhost/abc");
        assert_eq!(view.title, "Image Preview");
        assert!(view.html.contains("<title>Image Preview</title>"));
        assert!(view.html.contains("url('blob:http://localhost/abc')"));
        assert!(view.html.contains("background-size: cover;"));
    }

    #[test]
    fn test_full_bleed_page_escapes_src() {
        let view = ExternalView::full_bleed_image("x');}</style><script>");
        assert!(!view.html.contains("</style><script>"));
        assert!(view.html.contains("x\\');}\\3c /style>"));
    }
}
