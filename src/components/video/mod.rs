//! Video player with Picture-in-Picture controls.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::components::icons as ic;
use crate::config::VideoConfig;
use crate::core::pip;

stylance::import_crate_style!(css, "src/components/video/video.module.css");

/// `<video>` element plus Enter/Exit Picture-in-Picture buttons.
///
/// PiP failures are logged and otherwise ignored.
#[component]
pub fn VideoPlayer(config: VideoConfig) -> impl IntoView {
    let video_ref = NodeRef::<leptos::html::Video>::new();
    let available = pip::is_available();

    let on_enter = move |_: leptos::ev::MouseEvent| {
        let video = video_ref.get_untracked();
        spawn_local(async move {
            if let Err(_e) = pip::enter(video).await {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::error_1(&format!("Failed to enter PiP: {}", _e).into());
            }
        });
    };

    let on_exit = move |_: leptos::ev::MouseEvent| {
        spawn_local(async move {
            if let Err(_e) = pip::exit().await {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::error_1(&format!("Failed to exit PiP: {}", _e).into());
            }
        });
    };

    let captions = config.captions.map(|src| {
        view! {
            <track default=true kind="captions" srclang=config.captions_lang src=src />
        }
    });

    view! {
        <section class=css::player>
            <video
                node_ref=video_ref
                class=css::video
                controls=true
                src=config.src
                width=config.width
            >
                {captions}
            </video>

            <div class=css::controls>
                <button class=css::button on:click=on_enter disabled=!available>
                    <Icon icon=ic::PIP_ENTER />
                    "Enter Picture-in-Picture"
                </button>
                <button class=css::button on:click=on_exit disabled=!available>
                    <Icon icon=ic::PIP_EXIT />
                    "Exit Picture-in-Picture"
                </button>
            </div>

            <Show when=move || !available>
                <p class=css::notice>"Picture-in-Picture is not supported in this browser."</p>
            </Show>
        </section>
    }
}
