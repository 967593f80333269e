//! Network fetching utilities with timeout support.
//!
//! Provides an async binary fetch raced against a timeout.

use js_sys::{Array, Promise, Uint8Array};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// # Returns
/// * `RaceResult::Completed` if promise resolves before timeout
/// * `RaceResult::TimedOut` if timeout occurs first
/// * `RaceResult::Error` if promise rejects
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Timeout promise resolves to undefined
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| format!("{:?}", e))),
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Response body plus its declared content type.
#[derive(Debug, Clone)]
pub struct FetchedBytes {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Fetch binary content from a URL using the Fetch API with timeout.
///
/// If the response headers or the body each take longer than
/// `FETCH_TIMEOUT_MS`, returns `FetchError::Timeout`.
pub async fn fetch_bytes(url: &str) -> Result<FetchedBytes, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

            if !resp.ok() {
                return Err(FetchError::HttpError(resp.status()));
            }

            let content_type = resp.headers().get("content-type").ok().flatten();

            // The body can stall after headers arrive, so it gets its own deadline
            let body_promise = resp
                .array_buffer()
                .map_err(|_| FetchError::ResponseReadFailed)?;
            let buffer = match race_with_timeout(body_promise, FETCH_TIMEOUT_MS).await {
                RaceResult::TimedOut => return Err(FetchError::Timeout),
                RaceResult::Error(_) => return Err(FetchError::ResponseReadFailed),
                RaceResult::Completed(buffer) => buffer,
            };

            Ok(FetchedBytes {
                content_type,
                bytes: Uint8Array::new(&buffer).to_vec(),
            })
        }
    }
}
