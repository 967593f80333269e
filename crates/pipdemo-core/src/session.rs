//! Preview session: one piece of content plus its visibility and zoom.

use crate::content::{ContentKind, PreviewContent};
use crate::error::PreviewError;
use crate::object_url::{ScopedUrl, UrlRegistry};
use crate::render::{
    DocumentRenderer, Drawable, ExternalView, ImageSurface, MAX_IMAGE_HEIGHT_VH, Thumbnail,
};
use crate::visibility::Visibility;
use crate::zoom::Zoom;

/// User-triggerable panel command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanelCommand {
    Open,
    Close,
    Minimize,
    Restore,
    SetZoom(f64),
}

/// State bundle for one previewed file or document.
///
/// Content is fixed at construction. Image blobs get exactly one object URL
/// for the whole session, released when the session is dropped.
pub struct PreviewSession<R: UrlRegistry> {
    content: PreviewContent,
    kind: ContentKind,
    object_url: Option<ScopedUrl<R>>,
    visibility: Visibility,
    zoom: Zoom,
}

impl<R: UrlRegistry> PreviewSession<R> {
    /// Creates a closed session at default zoom.
    ///
    /// Fails only when the registry cannot mint a URL for image content.
    pub fn new(content: PreviewContent, registry: R) -> Result<Self, PreviewError> {
        let kind = content.kind();
        let object_url = match (&content, kind.is_image()) {
            (PreviewContent::Blob(blob), true) => {
                Some(ScopedUrl::acquire(registry, &blob.bytes, &blob.mime)?)
            }
            _ => None,
        };

        Ok(Self {
            content,
            kind,
            object_url,
            visibility: Visibility::default(),
            zoom: Zoom::default(),
        })
    }

    pub fn content(&self) -> &PreviewContent {
        &self.content
    }

    pub fn kind(&self) -> &ContentKind {
        &self.kind
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Current zoom. Always the default for non-image content.
    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    /// Whether zoom and open-externally apply to this content.
    pub fn is_image(&self) -> bool {
        self.kind.is_image()
    }

    /// Object URL of the image, if this is an image session.
    pub fn image_url(&self) -> Option<&str> {
        self.object_url.as_ref().map(ScopedUrl::url)
    }

    // ------------------------------------------------------------------
    // Transitions. Each returns whether observable state changed.
    // ------------------------------------------------------------------

    pub fn open(&mut self) -> bool {
        self.set_visibility(self.visibility.open())
    }

    /// Closes from any state and resets zoom.
    pub fn close(&mut self) -> bool {
        let zoom_changed = !self.zoom.is_default();
        self.zoom = Zoom::default();
        self.set_visibility(self.visibility.close()) || zoom_changed
    }

    pub fn minimize(&mut self) -> bool {
        self.set_visibility(self.visibility.minimize())
    }

    pub fn restore(&mut self) -> bool {
        self.set_visibility(self.visibility.restore())
    }

    /// Clamps and applies a zoom factor. Ignored for non-image content.
    pub fn set_zoom(&mut self, value: f64) -> bool {
        if !self.is_image() {
            return false;
        }
        let zoom = Zoom::clamped(value);
        let changed = zoom != self.zoom;
        self.zoom = zoom;
        changed
    }

    pub fn apply(&mut self, command: PanelCommand) -> bool {
        match command {
            PanelCommand::Open => self.open(),
            PanelCommand::Close => self.close(),
            PanelCommand::Minimize => self.minimize(),
            PanelCommand::Restore => self.restore(),
            PanelCommand::SetZoom(value) => self.set_zoom(value),
        }
    }

    fn set_visibility(&mut self, next: Visibility) -> bool {
        let changed = next != self.visibility;
        self.visibility = next;
        changed
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Describes the panel body for the current content and zoom.
    pub fn render_content(&self, renderer: &dyn DocumentRenderer) -> Drawable {
        match (&self.content, self.image_url()) {
            (PreviewContent::Blob(_), Some(src)) => Drawable::Image(ImageSurface {
                src: src.to_string(),
                alt: "Preview".to_string(),
                zoom: self.zoom,
                max_height_vh: MAX_IMAGE_HEIGHT_VH,
            }),
            (PreviewContent::Locator(locator), _) => {
                Drawable::Document(renderer.surface(locator))
            }
            (PreviewContent::Blob(blob), None) => Drawable::Unsupported {
                kind: blob.mime.clone(),
            },
        }
    }

    /// Body of the minimized thumbnail.
    pub fn thumbnail(&self) -> Thumbnail {
        match (&self.content, self.image_url()) {
            (_, Some(src)) => Thumbnail::Image {
                src: src.to_string(),
            },
            (PreviewContent::Locator(_), None) => Thumbnail::Label("PDF".to_string()),
            (PreviewContent::Blob(blob), None) if blob.mime.is_empty() => {
                Thumbnail::Label("File".to_string())
            }
            (PreviewContent::Blob(blob), None) => Thumbnail::Label(blob.mime.clone()),
        }
    }

    /// Full-bleed page for a new window. Offered only for image content and
    /// independent of visibility.
    pub fn open_externally(&self) -> Option<ExternalView> {
        self.image_url().map(ExternalView::full_bleed_image)
    }
}

impl<R: UrlRegistry> std::fmt::Debug for PreviewSession<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewSession")
            .field("kind", &self.kind)
            .field("visibility", &self.visibility)
            .field("zoom", &self.zoom)
            .field("object_url", &self.object_url)
            .finish()
    }
}
