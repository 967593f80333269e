//! File preview trigger, modal, and minimized thumbnail.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use leptos_use::use_media_query;
use pipdemo_core::{
    BackdropClick, MAX_ZOOM, MIN_ZOOM, PanelCommand, PreviewContent, ZOOM_STEP, Zoom,
};

use super::{MinimizedThumbnail, PreviewBody, use_preview};
use crate::components::icons as ic;
use crate::config::preview as layout;
use crate::core::RendererKind;

stylance::import_crate_style!(css, "src/components/preview/preview.module.css");

/// Preview panel for one file.
///
/// Renders a trigger button; the modal and thumbnail appear per the session's
/// visibility.
///
/// # Props
/// - `content`: Captured blob or document locator
/// - `renderer_kind`: Viewer used for remote document locators
#[component]
pub fn FilePreview(
    content: PreviewContent,
    #[prop(optional)] renderer_kind: RendererKind,
) -> impl IntoView {
    let handle = use_preview(content, renderer_kind);
    let reduce_motion = use_media_query("(prefers-reduced-motion: reduce)");
    let drawable = handle.drawable();

    let (label, trigger_icon) = if handle.is_image {
        ("Preview Image", ic::FILE_IMAGE)
    } else if handle.is_document {
        ("Preview PDF", ic::FILE_PDF)
    } else {
        ("Preview File", ic::FILE)
    };

    let is_open = move || handle.visibility.get().is_open();
    let is_minimized = move || handle.visibility.get().is_minimized();

    let close = move || handle.dispatch(PanelCommand::Close);

    // Overlay dismissal needs both press and release on the overlay itself
    let backdrop = StoredValue::new(BackdropClick::new());
    let on_overlay_mousedown = move |ev: ev::MouseEvent| {
        backdrop.update_value(|b| b.press(targets_self(&ev)));
    };
    let on_overlay_click = move |ev: ev::MouseEvent| {
        let mut dismiss = false;
        backdrop.update_value(|b| dismiss = b.click(targets_self(&ev)));
        if dismiss {
            close();
        }
    };

    // Handle keyboard events for closing
    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    let on_zoom_input = move |ev: ev::Event| {
        let zoom = Zoom::parse(&event_target_value(&ev));
        handle.dispatch(PanelCommand::SetZoom(zoom.factor()));
    };

    // Focus the dialog whenever it opens for keyboard events
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        if let Some(el) = dialog_ref.get() {
            let _ = el.focus();
        }
    });

    let modal_style = format!(
        "width: {}; max-width: {}px;",
        layout::MODAL_WIDTH,
        layout::MODAL_MAX_WIDTH_PX
    );
    let thumbnail_anchor = format!(
        "right: {inset}px; bottom: {inset}px; width: {w}px; height: {h}px;",
        inset = layout::THUMBNAIL_INSET_PX,
        w = layout::THUMBNAIL_WIDTH_PX,
        h = layout::THUMBNAIL_HEIGHT_PX,
    );

    view! {
        <button class=css::trigger on:click=move |_| handle.dispatch(PanelCommand::Open)>
            <Icon icon=trigger_icon />
            <span>{label}</span>
        </button>

        <Show when=is_open>
            <div
                class=css::overlay
                on:mousedown=on_overlay_mousedown
                on:click=on_overlay_click
            >
                <div
                    node_ref=dialog_ref
                    class=css::modal
                    style=modal_style.clone()
                    role="dialog"
                    aria-modal="true"
                    aria-label="Image Preview"
                    tabindex="-1"
                    on:keydown=handle_keydown
                >
                    <div class=css::body>
                        <PreviewBody drawable=drawable reduce_motion=reduce_motion />
                    </div>

                    <div class=css::controls>
                        <Show when=move || handle.is_image>
                            <label class=css::zoomRow>
                                <span class=css::zoomLabel>
                                    <Icon icon=ic::ZOOM />
                                    "Zoom:"
                                </span>
                                <input
                                    type="range"
                                    class=css::zoomSlider
                                    min=MIN_ZOOM
                                    max=MAX_ZOOM
                                    step=ZOOM_STEP
                                    prop:value=move || handle.zoom.get().factor()
                                    on:input=on_zoom_input
                                />
                                <span class=css::zoomValue>
                                    {move || handle.zoom.get().to_string()}
                                </span>
                            </label>
                        </Show>

                        <div class=css::actions>
                            <button
                                class=css::button
                                on:click=move |_| handle.dispatch(PanelCommand::Minimize)
                                title="Minimize"
                            >
                                <Icon icon=ic::MINIMIZE />
                                "Minimize"
                            </button>
                            <Show when=move || handle.is_image>
                                <button
                                    class=css::button
                                    on:click=move |_| handle.open_externally()
                                    title="Open in New Tab"
                                >
                                    <Icon icon=ic::EXTERNAL_LINK />
                                    "Open in New Tab"
                                </button>
                            </Show>
                            <button
                                class=css::button
                                on:click=move |_| close()
                                title="Close (Esc)"
                            >
                                <Icon icon=ic::CLOSE />
                                "Close"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>

        <Show when=is_minimized>
            <div class=css::thumbnailAnchor style=thumbnail_anchor.clone()>
                <MinimizedThumbnail handle=handle />
            </div>
        </Show>
    }
}

/// Whether the event was dispatched to the element the listener is on,
/// rather than bubbling up from a descendant.
fn targets_self(ev: &ev::MouseEvent) -> bool {
    ev.target().is_some() && ev.target() == ev.current_target()
}
