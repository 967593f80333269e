//! Picture-in-Picture control for a video element.
//!
//! `web-sys` has no bindings for the Picture-in-Picture API, so the calls go
//! through the Reflect API like any other optional browser feature.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlVideoElement};

use crate::core::error::PipError;
use crate::utils::dom;

/// Look up a method on `target` and call it, awaiting the returned promise.
async fn call_promise_method(target: &JsValue, method: &str) -> Result<JsValue, PipError> {
    let func = Reflect::get(target, &method.into())
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or(PipError::Unsupported)?;

    let promise: Promise = func
        .call0(target)
        .map_err(|e| PipError::Rejected(describe(&e)))?
        .into();

    JsFuture::from(promise)
        .await
        .map_err(|e| PipError::Rejected(describe(&e)))
}

fn document() -> Result<Document, PipError> {
    dom::window()
        .and_then(|w| w.document())
        .ok_or(PipError::Unsupported)
}

/// Error name/message of a rejected promise (`DOMException`s carry a name).
fn describe(err: &JsValue) -> String {
    Reflect::get(err, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Whether the document allows Picture-in-Picture at all.
pub fn is_available() -> bool {
    document()
        .ok()
        .and_then(|doc| Reflect::get(&doc, &"pictureInPictureEnabled".into()).ok())
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// Whether some element is currently shown in Picture-in-Picture.
pub fn is_active() -> bool {
    document()
        .ok()
        .and_then(|doc| Reflect::get(&doc, &"pictureInPictureElement".into()).ok())
        .is_some_and(|el| !el.is_null() && !el.is_undefined())
}

/// Request Picture-in-Picture for a video (`video.requestPictureInPicture()`).
pub async fn enter(video: Option<HtmlVideoElement>) -> Result<(), PipError> {
    let video = video.ok_or(PipError::NoVideo)?;
    call_promise_method(video.as_ref(), "requestPictureInPicture").await?;
    Ok(())
}

/// Leave Picture-in-Picture if active (`document.exitPictureInPicture()`).
pub async fn exit() -> Result<(), PipError> {
    if !is_active() {
        return Ok(());
    }
    let doc = document()?;
    call_promise_method(doc.as_ref(), "exitPictureInPicture").await?;
    Ok(())
}
