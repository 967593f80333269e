//! Shared preview session hook.
//!
//! Owns the [`PreviewSession`] for one piece of content and mirrors its
//! visibility and zoom into signals for the modal and thumbnail views.

use leptos::prelude::*;
use pipdemo_core::{
    Drawable, PanelCommand, PreviewContent, PreviewSession, Thumbnail, Visibility, Zoom,
};

use crate::core::surface;
use crate::core::{BrowserUrls, Renderer, RendererKind};

/// Handle to a mounted preview session.
///
/// This struct is `Copy` because every field is an arena handle; the session
/// itself (and its object URL) is dropped with the owning component.
#[derive(Clone, Copy)]
pub struct PreviewHandle {
    session: StoredValue<Option<PreviewSession<BrowserUrls>>, LocalStorage>,
    renderer: StoredValue<Renderer>,
    visibility_state: RwSignal<Visibility>,
    zoom_state: RwSignal<Zoom>,
    /// Current visibility
    pub visibility: Signal<Visibility>,
    /// Current zoom (default for non-image content)
    pub zoom: Signal<Zoom>,
    /// Whether zoom and open-in-new-tab apply
    pub is_image: bool,
    /// Whether the content is a document locator
    pub is_document: bool,
}

impl PreviewHandle {
    /// Apply a command and refresh the mirrored signals if anything changed.
    pub fn dispatch(&self, command: PanelCommand) {
        let mut changed = false;
        self.session.update_value(|session| {
            if let Some(session) = session {
                changed = session.apply(command);
            }
        });
        if changed {
            self.sync();
        }
    }

    fn sync(&self) {
        let state = self
            .session
            .try_with_value(|s| s.as_ref().map(|s| (s.visibility(), s.zoom())))
            .flatten();
        if let Some((visibility, zoom)) = state {
            self.visibility_state.set(visibility);
            self.zoom_state.set(zoom);
        }
    }

    /// Render description of the panel body; tracks zoom.
    pub fn drawable(&self) -> Signal<Option<Drawable>> {
        let session = self.session;
        let renderer = self.renderer;
        let zoom = self.zoom;
        Signal::derive(move || {
            zoom.track();
            renderer
                .try_with_value(|renderer| {
                    session
                        .try_with_value(|s| s.as_ref().map(|s| s.render_content(renderer)))
                        .flatten()
                })
                .flatten()
        })
    }

    /// Body of the minimized thumbnail.
    pub fn thumbnail(&self) -> Option<Thumbnail> {
        self.session
            .try_with_value(|s| s.as_ref().map(|s| s.thumbnail()))
            .flatten()
    }

    /// Open the image in a new window. Does nothing for non-image content.
    pub fn open_externally(&self) {
        let view = self
            .session
            .try_with_value(|s| s.as_ref().and_then(|s| s.open_externally()))
            .flatten();
        let Some(view) = view else {
            return;
        };

        if let Err(_e) = surface::open_window(&view) {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(&format!("Open in new tab failed: {}", _e).into());
        }
    }
}

/// Create a session for `content` in the current reactive owner.
///
/// A registry failure leaves the handle without a session: commands become
/// no-ops and the body renders as unavailable.
pub fn use_preview(content: PreviewContent, renderer_kind: RendererKind) -> PreviewHandle {
    let renderer = match &content {
        PreviewContent::Locator(locator) => Renderer::for_locator(renderer_kind, locator),
        PreviewContent::Blob(_) => Renderer::for_locator(RendererKind::Embedded, ""),
    };

    let session = match PreviewSession::new(content, BrowserUrls) {
        Ok(session) => Some(session),
        Err(_e) => {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::error_1(&format!("Preview unavailable: {}", _e).into());
            None
        }
    };

    let is_image = session.as_ref().is_some_and(|s| s.is_image());
    let is_document = session
        .as_ref()
        .is_some_and(|s| matches!(s.content(), PreviewContent::Locator(_)));

    let visibility_state = RwSignal::new(Visibility::default());
    let zoom_state = RwSignal::new(Zoom::default());

    PreviewHandle {
        session: StoredValue::new_local(session),
        renderer: StoredValue::new(renderer),
        visibility_state,
        zoom_state,
        visibility: visibility_state.into(),
        zoom: zoom_state.into(),
        is_image,
        is_document,
    }
}
