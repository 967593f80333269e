//! Browser-independent core of the preview demo.
//!
//! - [`PreviewSession`] - visibility / zoom state machine over one piece of content
//! - [`PreviewContent`], [`ContentKind`] - what is being previewed and how it is classified
//! - [`Drawable`], [`DocumentRenderer`] - render descriptions handed to the UI layer
//! - [`ScopedUrl`], [`UrlRegistry`] - one revocable object URL per session
//! - [`ThumbnailDrag`] - free-floating offset of the minimized thumbnail
//! - [`BackdropClick`] - press/release pairing for dismissing the modal
//! - [`demo_pdf`] - synthesis of the demo PDF document
//!
//! Nothing in this crate touches `web_sys`; the web layer supplies the
//! registry and renderer implementations.

mod content;
pub mod demo_pdf;
mod dismiss;
mod drag;
mod error;
mod object_url;
mod render;
mod session;
mod visibility;
mod zoom;

pub use content::{BlobContent, ContentKind, OCTET_STREAM, PreviewContent};
pub use dismiss::BackdropClick;
pub use drag::{DRAG_THRESHOLD_PX, ThumbnailDrag};
pub use error::PreviewError;
pub use object_url::{ScopedUrl, UrlRegistry};
pub use render::{
    DocumentRenderer, DocumentSurface, Drawable, EmbeddedViewer, ExternalView, ImageSurface,
    MAX_IMAGE_HEIGHT_VH, Thumbnail,
};
pub use session::{PanelCommand, PreviewSession};
pub use visibility::Visibility;
pub use zoom::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP, Zoom};
