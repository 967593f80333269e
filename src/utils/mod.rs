//! Utility modules for DOM access and network fetching.
//!
//! Provides:
//! - [`dom`] - window / document helpers
//! - [`fetch_bytes`] - binary fetch with timeout

pub mod dom;
mod fetch;

pub use fetch::fetch_bytes;
