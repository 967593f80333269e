//! Error type for fallible core operations.
//!
//! The panel itself never fails; errors only come from acquiring an object
//! URL for blob content or from encoding the demo PDF.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    /// The host could not mint an object URL for the blob.
    #[error("failed to create object URL: {0}")]
    ObjectUrl(String),
    /// The demo PDF could not be encoded.
    #[error("failed to build PDF: {0}")]
    Pdf(String),
}

impl From<lopdf::Error> for PreviewError {
    fn from(err: lopdf::Error) -> Self {
        Self::Pdf(err.to_string())
    }
}

impl From<std::io::Error> for PreviewError {
    fn from(err: std::io::Error) -> Self {
        Self::Pdf(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_to(sink: &mut impl std::io::Write) -> Result<(), PreviewError> {
        sink.write_all(b"%PDF-1.5")?;
        Ok(())
    }

    struct ClosedSink;

    impl std::io::Write for ClosedSink {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_io_failure_while_saving_is_a_pdf_error() {
        assert_eq!(
            write_to(&mut ClosedSink),
            Err(PreviewError::Pdf("sink closed".to_string()))
        );
        assert_eq!(
            PreviewError::Pdf("sink closed".to_string()).to_string(),
            "failed to build PDF: sink closed"
        );
    }

    #[test]
    fn test_io_success_passes_through() {
        let mut bytes = Vec::new();
        assert_eq!(write_to(&mut bytes), Ok(()));
        assert_eq!(bytes, b"%PDF-1.5");
    }
}
