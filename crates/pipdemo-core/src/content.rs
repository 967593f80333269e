//! Previewable content and its classification.

use std::rc::Rc;

use imagesize::ImageType;

/// MIME tag used when nothing better is known.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// How the panel treats a piece of content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentKind {
    /// Blob whose MIME type starts with `image/`
    RasterImage,
    /// Opaque locator handed to the document renderer
    Document,
    /// Blob of any other type; carries the MIME tag for the placeholder
    Unsupported(String),
}

impl ContentKind {
    /// Classifies a blob by its MIME tag.
    pub fn from_mime(mime: &str) -> Self {
        if mime.trim().to_ascii_lowercase().starts_with("image/") {
            ContentKind::RasterImage
        } else {
            ContentKind::Unsupported(mime.to_string())
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, ContentKind::RasterImage)
    }
}

/// In-memory file: name, MIME tag and bytes.
///
/// Bytes are reference counted so that clones handed to the UI layer do not
/// copy the payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlobContent {
    pub file_name: String,
    pub mime: String,
    pub bytes: Rc<[u8]>,
}

impl BlobContent {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }

    /// Builds a blob, deriving the MIME tag from a `Content-Type` header value.
    ///
    /// Header parameters (`; charset=...`) are dropped. A missing, empty or
    /// generic header falls back to sniffing the bytes.
    pub fn from_response(
        file_name: impl Into<String>,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Self {
        let declared = content_type
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().to_ascii_lowercase())
            .filter(|ct| !ct.is_empty() && ct != OCTET_STREAM);

        let mime = declared
            .or_else(|| sniff_image_mime(&bytes).map(String::from))
            .unwrap_or_else(|| OCTET_STREAM.to_string());

        Self::new(file_name, mime, bytes)
    }

    pub fn kind(&self) -> ContentKind {
        ContentKind::from_mime(&self.mime)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Detects common raster formats from the file header.
pub fn sniff_image_mime(bytes: &[u8]) -> Option<&'static str> {
    let mime = match imagesize::image_type(bytes).ok()? {
        ImageType::Png => "image/png",
        ImageType::Jpeg => "image/jpeg",
        ImageType::Gif => "image/gif",
        ImageType::Webp => "image/webp",
        ImageType::Bmp => "image/bmp",
        ImageType::Tiff => "image/tiff",
        ImageType::Ico => "image/x-icon",
        _ => return None,
    };
    Some(mime)
}

/// The thing a preview session shows. Immutable for the session's lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewContent {
    /// In-memory file
    Blob(BlobContent),
    /// Opaque locator (URL) for out-of-process document rendering
    Locator(String),
}

impl PreviewContent {
    pub fn kind(&self) -> ContentKind {
        match self {
            PreviewContent::Blob(blob) => blob.kind(),
            PreviewContent::Locator(_) => ContentKind::Document,
        }
    }

    pub fn as_blob(&self) -> Option<&BlobContent> {
        match self {
            PreviewContent::Blob(blob) => Some(blob),
            PreviewContent::Locator(_) => None,
        }
    }
}

impl From<BlobContent> for PreviewContent {
    fn from(blob: BlobContent) -> Self {
        PreviewContent::Blob(blob)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const PNG_HEADER: [u8; 16] = [
        0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D',
        b'R',
    ];

    const JPEG_HEADER: [u8; 12] = [
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01,
    ];

    #[test]
    fn test_kind_from_mime() {
        assert_eq!(ContentKind::from_mime("image/png"), ContentKind::RasterImage);
        assert_eq!(ContentKind::from_mime("IMAGE/JPEG"), ContentKind::RasterImage);
        assert_eq!(
            ContentKind::from_mime("text/plain"),
            ContentKind::Unsupported("text/plain".to_string())
        );
        assert_eq!(
            ContentKind::from_mime(""),
            ContentKind::Unsupported(String::new())
        );
    }

    #[test]
    fn test_locator_is_document() {
        let content = PreviewContent::Locator("blob:abc".to_string());
        assert_eq!(content.kind(), ContentKind::Document);
        assert!(content.as_blob().is_none());
    }

    #[test]
    fn test_sniff_png_and_jpeg() {
        assert_eq!(sniff_image_mime(&PNG_HEADER), Some("image/png"));
        assert_eq!(sniff_image_mime(&JPEG_HEADER), Some("image/jpeg"));
    }

    #[test]
    fn test_sniff_garbage() {
        assert_eq!(sniff_image_mime(b"hello, world! not an image"), None);
        assert_eq!(sniff_image_mime(b"%P"), None);
    }

    #[test]
    fn test_from_response_uses_header() {
        let blob = BlobContent::from_response("a.jpg", Some("image/jpeg; q=1"), vec![1, 2, 3]);
        assert_eq!(blob.mime, "image/jpeg");
        assert!(blob.kind().is_image());
    }

    #[test]
    fn test_from_response_sniffs_when_generic() {
        let blob = BlobContent::from_response(
            "a.bin",
            Some("application/octet-stream"),
            PNG_HEADER.to_vec(),
        );
        assert_eq!(blob.mime, "image/png");

        let blob = BlobContent::from_response("a.bin", None, PNG_HEADER.to_vec());
        assert_eq!(blob.mime, "image/png");
    }

    #[test]
    fn test_from_response_unknown_bytes() {
        let blob = BlobContent::from_response("a.bin", Some(""), b"plain text body".to_vec());
        assert_eq!(blob.mime, OCTET_STREAM);
        assert_eq!(blob.kind(), ContentKind::Unsupported(OCTET_STREAM.to_string()));
    }

    #[test]
    fn test_blob_clone_shares_bytes() {
        let blob = BlobContent::new("x.png", "image/png", vec![0; 64]);
        let copy = blob.clone();
        assert!(Rc::ptr_eq(&blob.bytes, &copy.bytes));
        assert_eq!(copy.len(), 64);
        assert!(!copy.is_empty());
    }
}
