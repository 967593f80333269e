//! Panel body: scaled image, delegated document frame, or placeholder.

use leptos::prelude::*;
use leptos_icons::Icon;
use pipdemo_core::Drawable;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/preview/preview.module.css");

/// Draws whatever the session describes.
///
/// Content never changes for a mounted session, so the element tree is built
/// once; only the image style follows zoom, which keeps the scale transition.
#[component]
pub fn PreviewBody(drawable: Signal<Option<Drawable>>, reduce_motion: Signal<bool>) -> impl IntoView {
    match drawable.get_untracked() {
        Some(Drawable::Image(surface)) => {
            let class = move || {
                if reduce_motion.get() {
                    css::image.to_string()
                } else {
                    format!("{} {}", css::image, css::imageAnimated)
                }
            };
            let style = move || match drawable.get() {
                Some(Drawable::Image(surface)) => surface.style(),
                _ => String::new(),
            };
            view! {
                <div class=css::imageFrame>
                    <img src=surface.src alt=surface.alt class=class style=style />
                </div>
            }
            .into_any()
        }
        Some(Drawable::Document(surface)) => view! {
            <div class=css::documentFrame>
                <iframe src=surface.src title=surface.title class=css::frame />
            </div>
        }
        .into_any(),
        Some(Drawable::Unsupported { kind }) => view! {
            <p class=css::unsupported>{Drawable::unsupported_message(&kind)}</p>
        }
        .into_any(),
        None => view! {
            <div class=css::warning>
                <span class=css::warningIcon><Icon icon=ic::WARNING /></span>
                <p>"Preview not available"</p>
            </div>
        }
        .into_any(),
    }
}
