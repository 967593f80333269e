//! Stand-alone browser window for "Open in New Tab".

use pipdemo_core::ExternalView;

use crate::core::error::SurfaceError;
use crate::utils::dom;

/// Opens a blank window and writes the page into it.
///
/// Returns as soon as the document is written; image loading in the new
/// window is not awaited.
pub fn open_window(view: &ExternalView) -> Result<(), SurfaceError> {
    let window = dom::window().ok_or(SurfaceError::Blocked)?;
    let new_window = window
        .open()
        .ok()
        .flatten()
        .ok_or(SurfaceError::Blocked)?;

    let document = dom::html_document(&new_window).ok_or(SurfaceError::WriteFailed)?;
    document
        .write_1(&view.html)
        .map_err(|_| SurfaceError::WriteFailed)?;
    document.close().map_err(|_| SurfaceError::WriteFailed)?;
    Ok(())
}
