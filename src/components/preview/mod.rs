//! File preview panel.
//!
//! The trigger, modal, and minimized thumbnail all read one
//! [`PreviewSession`](pipdemo_core::PreviewSession) through the [`use_preview`] hook.

mod content;
mod hook;
mod modal;
mod thumbnail;

pub use content::PreviewBody;
pub use hook::{PreviewHandle, use_preview};
pub use modal::FilePreview;
pub use thumbnail::MinimizedThumbnail;
