//! UI components built with Leptos.
//!
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`preview`] - File preview modal and minimized thumbnail
//! - [`video`] - Video player with Picture-in-Picture controls

pub mod icons;
pub mod preview;
pub mod video;
