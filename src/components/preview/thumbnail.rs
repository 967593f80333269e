//! Draggable thumbnail shown while a preview is minimized.
//!
//! Anchored at the bottom-right corner; the user can drag it anywhere. A
//! press without travel counts as a click and restores the modal.

use leptos::prelude::*;
use pipdemo_core::{PanelCommand, Thumbnail, ThumbnailDrag};

use super::PreviewHandle;

stylance::import_crate_style!(css, "src/components/preview/preview.module.css");

#[component]
pub fn MinimizedThumbnail(handle: PreviewHandle) -> impl IntoView {
    // Fresh on every mount, so the position never outlives a close.
    let drag = RwSignal::new(ThumbnailDrag::new());

    let restore = move || handle.dispatch(PanelCommand::Restore);

    // Drag start handler (shared logic for touch and mouse)
    let start_drag = move |x: f64, y: f64| drag.update(|d| d.start(x, y));

    // Drag move handler (shared logic)
    let move_drag = move |x: f64, y: f64| {
        let mut changed = false;
        drag.update_untracked(|d| changed = d.move_to(x, y));
        if changed {
            drag.notify();
        }
    };

    // Drag end handler; restores when the gesture was a click
    let end_drag = move || {
        let mut clicked = false;
        drag.update(|d| clicked = d.end());
        if clicked {
            restore();
        }
    };

    // Touch event handlers
    let on_touch_start = move |event: leptos::ev::TouchEvent| {
        if let Some(touch) = event.touches().get(0) {
            start_drag(touch.client_x() as f64, touch.client_y() as f64);
        }
    };

    let on_touch_move = move |event: leptos::ev::TouchEvent| {
        if let Some(touch) = event.touches().get(0) {
            event.prevent_default();
            move_drag(touch.client_x() as f64, touch.client_y() as f64);
        }
    };

    let on_touch_end = move |_: leptos::ev::TouchEvent| {
        end_drag();
    };

    // Mouse event handlers
    let on_mouse_down = move |event: leptos::ev::MouseEvent| {
        event.prevent_default();
        start_drag(event.client_x() as f64, event.client_y() as f64);
    };

    let on_mouse_move = move |event: leptos::ev::MouseEvent| {
        move_drag(event.client_x() as f64, event.client_y() as f64);
    };

    let on_mouse_up = move |_: leptos::ev::MouseEvent| {
        end_drag();
    };

    let on_mouse_leave = move |_: leptos::ev::MouseEvent| {
        drag.update(|d| d.cancel());
    };

    let on_key_down = move |event: leptos::ev::KeyboardEvent| {
        if matches!(event.key().as_str(), "Enter" | " ") {
            event.prevent_default();
            restore();
        }
    };

    let thumbnail_class = move || {
        if drag.with(|d| d.is_dragging()) {
            format!("{} {}", css::thumbnail, css::thumbnailDragging)
        } else {
            css::thumbnail.to_string()
        }
    };

    let body = match handle.thumbnail() {
        Some(Thumbnail::Image { src }) => view! {
            <img src=src alt="Minimized Preview" class=css::thumbnailImage draggable="false" />
        }
        .into_any(),
        Some(Thumbnail::Label(label)) => view! {
            <p class=css::thumbnailLabel>{label}</p>
        }
        .into_any(),
        None => ().into_any(),
    };

    view! {
        <div
            class=thumbnail_class
            style=move || format!("transform: {};", drag.with(|d| d.transform()))
            role="button"
            tabindex="0"
            aria-label="Restore preview"
            title="Click to restore, drag to move"
            on:touchstart=on_touch_start
            on:touchmove=on_touch_move
            on:touchend=on_touch_end
            on:mousedown=on_mouse_down
            on:mousemove=on_mouse_move
            on:mouseup=on_mouse_up
            on:mouseleave=on_mouse_leave
            on:keydown=on_key_down
        >
            {body}
        </div>
    }
}
