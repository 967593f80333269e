//! Browser-side collaborators of the preview panel.
//!
//! This module provides:
//! - [`registry::BrowserUrls`] - object URLs for in-memory blobs
//! - [`renderer::Renderer`] - document renderer selection
//! - [`media`] - demo image capture and PDF synthesis
//! - [`pip`] - Picture-in-Picture control
//! - [`surface`] - the "Open in New Tab" window

pub mod error;
pub mod media;
pub mod pip;
pub mod registry;
pub mod renderer;
pub mod surface;

pub use registry::BrowserUrls;
pub use renderer::{Renderer, RendererKind};
