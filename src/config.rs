//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Demo content (URLs, file names, PDF pages) is loaded at compile time from
//! `assets/demo.toml` using `include_str!` and parsed on startup.

use pipdemo_core::demo_pdf::DemoPage;
use serde::Deserialize;

use crate::core::RendererKind;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Demo content definition.
pub const DEMO_TOML: &str = include_str!("../assets/demo.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Page heading.
pub const APP_TITLE: &str = "Picture-in-Picture Demo";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Hosted PDF.js viewer used for remote documents.
pub const PDFJS_VIEWER_URL: &str = "https://mozilla.github.io/pdf.js/web/viewer.html";

// =============================================================================
// Preview Configuration
// =============================================================================

/// Preview panel layout constants.
pub mod preview {
    /// Modal width as a share of the viewport.
    pub const MODAL_WIDTH: &str = "80%";
    /// Upper bound on modal width.
    pub const MODAL_MAX_WIDTH_PX: u32 = 1080;
    /// Minimized thumbnail size.
    pub const THUMBNAIL_WIDTH_PX: u32 = 150;
    pub const THUMBNAIL_HEIGHT_PX: u32 = 100;
    /// Distance of the thumbnail anchor from the bottom-right corner.
    pub const THUMBNAIL_INSET_PX: u32 = 20;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Demo Content
// =============================================================================

/// Video player settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoConfig {
    pub src: String,
    pub width: u32,
    pub captions: Option<String>,
    #[serde(default = "default_captions_lang")]
    pub captions_lang: String,
}

fn default_captions_lang() -> String {
    "en".to_string()
}

/// Source of the demo image.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageConfig {
    pub url: String,
    pub file_name: String,
}

/// One page of the demo PDF.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageConfig {
    pub heading: String,
    pub footer: Option<String>,
}

impl From<&PageConfig> for DemoPage {
    fn from(page: &PageConfig) -> Self {
        DemoPage::new(page.heading.clone(), page.footer.as_deref())
    }
}

/// Demo PDF settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PdfConfig {
    pub file_name: String,
    #[serde(default)]
    pub renderer: RendererKind,
    #[serde(default)]
    pub pages: Vec<PageConfig>,
}

impl PdfConfig {
    pub fn demo_pages(&self) -> Vec<DemoPage> {
        self.pages.iter().map(DemoPage::from).collect()
    }
}

/// Everything the demo page needs to know about its content.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DemoConfig {
    pub video: VideoConfig,
    pub image: ImageConfig,
    pub pdf: PdfConfig,
}

impl DemoConfig {
    /// Parse a TOML document.
    pub fn parse(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Load the embedded configuration, falling back to built-in defaults.
    pub fn load() -> Self {
        match Self::parse(DEMO_TOML) {
            Ok(config) => config,
            Err(_e) => {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::warn_1(
                    &format!("Invalid demo.toml, using defaults: {}", _e).into(),
                );
                Self::default()
            }
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            video: VideoConfig {
                src: "https://www.w3schools.com/html/mov_bbb.mp4".to_string(),
                width: 600,
                captions: None,
                captions_lang: default_captions_lang(),
            },
            image: ImageConfig {
                url: "https://images.pexels.com/photos/1525041/pexels-photo-1525041.jpeg"
                    .to_string(),
                file_name: "example-image.png".to_string(),
            },
            pdf: PdfConfig {
                file_name: "example-pdf.pdf".to_string(),
                renderer: RendererKind::Embedded,
                pages: pipdemo_core::demo_pdf::default_pages()
                    .into_iter()
                    .map(|p| PageConfig {
                        heading: p.heading,
                        footer: p.footer,
                    })
                    .collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = DemoConfig::parse(DEMO_TOML).unwrap();
        assert_eq!(config.video.width, 600);
        assert_eq!(config.video.captions_lang, "en");
        assert!(config.video.captions.is_some());
        assert_eq!(config.image.file_name, "example-image.png");
        assert_eq!(config.pdf.file_name, "example-pdf.pdf");
        assert_eq!(config.pdf.renderer, RendererKind::Embedded);
    }

    #[test]
    fn test_embedded_pages_match_stock_document() {
        let config = DemoConfig::parse(DEMO_TOML).unwrap();
        assert_eq!(
            config.pdf.demo_pages(),
            pipdemo_core::demo_pdf::default_pages()
        );
    }

    #[test]
    fn test_default_matches_embedded_pages() {
        assert_eq!(
            DemoConfig::default().pdf.demo_pages(),
            DemoConfig::parse(DEMO_TOML).unwrap().pdf.demo_pages()
        );
    }

    #[test]
    fn test_renderer_kind_spelling() {
        let source = DEMO_TOML.replace("renderer = \"embedded\"", "renderer = \"pdf-js\"");
        let config = DemoConfig::parse(&source).unwrap();
        assert_eq!(config.pdf.renderer, RendererKind::PdfJs);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(DemoConfig::parse("[video]\nsrc = 1").is_err());
    }
}
