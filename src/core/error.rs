//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for media capture
//! - [`PipError`] - Picture-in-Picture requests
//! - [`SurfaceError`] - Opening the external image window

use std::fmt;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    HttpError(u16),
    /// Failed to read response body
    ResponseReadFailed,
    /// Response was not a `Response` object
    InvalidContent,
    /// Request timed out
    Timeout,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Picture-in-Picture errors.
#[derive(Debug, Clone)]
pub enum PipError {
    /// Browser does not expose the Picture-in-Picture API
    Unsupported,
    /// The video element is not mounted
    NoVideo,
    /// The browser rejected the request
    Rejected(String),
}

impl fmt::Display for PipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => write!(f, "Picture-in-Picture is not supported"),
            Self::NoVideo => write!(f, "Video element not available"),
            Self::Rejected(msg) => write!(f, "Picture-in-Picture request rejected: {}", msg),
        }
    }
}

impl std::error::Error for PipError {}

/// Errors opening the stand-alone image window.
#[derive(Debug, Clone)]
pub enum SurfaceError {
    /// `window.open` returned nothing (popup blocker)
    Blocked,
    /// The new window's document could not be written
    WriteFailed,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blocked => write!(f, "New window was blocked"),
            Self::WriteFailed => write!(f, "Failed to write preview window"),
        }
    }
}

impl std::error::Error for SurfaceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(FetchError::HttpError(404).to_string(), "HTTP error: 404");
        assert_eq!(FetchError::Timeout.to_string(), "Request timed out");
        assert_eq!(
            FetchError::NetworkError("offline".to_string()).to_string(),
            "Network error: offline"
        );
    }

    #[test]
    fn test_pip_error_display() {
        assert_eq!(
            PipError::Unsupported.to_string(),
            "Picture-in-Picture is not supported"
        );
        assert_eq!(
            PipError::Rejected("NotAllowedError".to_string()).to_string(),
            "Picture-in-Picture request rejected: NotAllowedError"
        );
    }

    #[test]
    fn test_surface_error_display() {
        assert_eq!(SurfaceError::Blocked.to_string(), "New window was blocked");
    }
}
