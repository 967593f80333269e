//! Root application module.
//!
//! Contains the main App component, the demo page state, and the
//! generate-content handlers.

use leptos::prelude::*;
use pipdemo_core::{BlobContent, PreviewContent, ScopedUrl};
use wasm_bindgen_futures::spawn_local;

use crate::components::preview::FilePreview;
use crate::components::video::VideoPlayer;
use crate::config::{APP_TITLE, DemoConfig};
use crate::core::BrowserUrls;
use crate::core::media;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// DemoState
// ============================================================================

/// Generated files and the status line.
///
/// Blobs hold `Rc` byte buffers, so the content signals use local storage.
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct DemoState {
    /// Most recently captured image.
    pub image: RwSignal<Option<BlobContent>, LocalStorage>,
    /// Most recently generated PDF.
    pub pdf: RwSignal<Option<BlobContent>, LocalStorage>,
    /// Image capture in flight.
    pub loading: RwSignal<bool>,
    /// Last capture or generation error.
    pub error: RwSignal<Option<String>>,
}

impl DemoState {
    pub fn new() -> Self {
        Self {
            image: RwSignal::new_local(None),
            pdf: RwSignal::new_local(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Fetch the configured image; replaces any previous image on success.
    pub fn generate_image(&self, url: String, file_name: String) {
        if self.loading.get_untracked() {
            return;
        }
        self.loading.set(true);
        self.error.set(None);

        let state = *self;
        spawn_local(async move {
            match media::capture_image(&url, &file_name).await {
                Ok(blob) => state.image.set(Some(blob)),
                Err(e) => {
                    #[cfg(target_arch = "wasm32")]
                    web_sys::console::error_1(&format!("Error capturing image: {}", e).into());
                    state.error.set(Some(format!("Error capturing image: {}", e)));
                }
            }
            state.loading.set(false);
        });
    }

    /// Synthesize the demo PDF; replaces any previous PDF on success.
    pub fn generate_pdf(&self, config: &DemoConfig) {
        self.error.set(None);
        match media::create_pdf(&config.pdf.file_name, &config.pdf.demo_pages()) {
            Ok(blob) => self.pdf.set(Some(blob)),
            Err(e) => {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::error_1(&format!("Error creating PDF: {}", e).into());
                self.error.set(Some(format!("Error creating PDF: {}", e)));
            }
        }
    }
}

impl Default for DemoState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// App
// ============================================================================

/// Preview for the generated PDF.
///
/// The document is handed to the viewer as a `blob:` locator. The URL lives as
/// long as this component, so regenerating revokes the previous one.
#[component]
fn PdfPreview(blob: BlobContent, config: StoredValue<DemoConfig>) -> impl IntoView {
    match ScopedUrl::acquire(BrowserUrls, &blob.bytes, &blob.mime) {
        Ok(url) => {
            let locator = url.url().to_string();
            let _guard = StoredValue::new_local(url);
            let renderer_kind = config.with_value(|c| c.pdf.renderer);
            view! {
                <FilePreview content=PreviewContent::Locator(locator) renderer_kind=renderer_kind />
            }
            .into_any()
        }
        Err(_e) => {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::error_1(&format!("PDF preview unavailable: {}", _e).into());
            view! { <p class=css::error>"PDF preview unavailable"</p> }.into_any()
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Loads the demo configuration
/// - Wraps the page in an ErrorBoundary for graceful error handling
/// - Renders the video player and one preview per generated file
#[component]
pub fn App() -> impl IntoView {
    let config = StoredValue::new(DemoConfig::load());
    let state = DemoState::new();

    let on_generate_image = move |_: leptos::ev::MouseEvent| {
        let (url, file_name) =
            config.with_value(|c| (c.image.url.clone(), c.image.file_name.clone()));
        state.generate_image(url, file_name);
    };

    let on_generate_pdf =
        move |_: leptos::ev::MouseEvent| config.with_value(|c| state.generate_pdf(c));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fallback>
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <details>
                        <summary>"Error details"</summary>
                        <ul>
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                    </details>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <main class=css::page>
                <h1 class=css::title>{APP_TITLE}</h1>

                <VideoPlayer config=config.with_value(|c| c.video.clone()) />

                <div class=css::actions>
                    <button
                        class=css::button
                        on:click=on_generate_image
                        disabled=move || state.loading.get()
                    >
                        "Generate Image File"
                    </button>
                    <button class=css::button on:click=on_generate_pdf>
                        "Generate PDF File"
                    </button>
                </div>

                <Show when=move || state.loading.get()>
                    <p class=css::status>"Loading image…"</p>
                </Show>
                {move || state.error.get().map(|e| view! { <p class=css::error>{e}</p> })}

                <div class=css::previews>
                    // Each regeneration remounts the preview, disposing the old session
                    {move || state.image.get().map(|blob| view! {
                        <FilePreview content=PreviewContent::from(blob) />
                    })}
                    {move || state.pdf.get().map(|blob| view! {
                        <PdfPreview blob=blob config=config />
                    })}
                </div>
            </main>
        </ErrorBoundary>
    }
}
