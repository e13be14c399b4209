//! Error types for the ocrpdf library.

use std::io;
use thiserror::Error;

/// Result type alias for ocrpdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during the OCR pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No OCR engine is installed on this host.
    #[error("No OCR engine found")]
    NoEngine,

    /// The requested engine was not among the discovered ones.
    #[error("Unknown OCR engine: {requested} (available: {available})")]
    UnknownEngine {
        /// Engine name that was requested.
        requested: String,
        /// Comma-separated names of the discovered engines.
        available: String,
    },

    /// The selected engine does not support the requested language.
    #[error("Engine {engine} does not support language \"{lang}\"")]
    LanguageNotSupported {
        /// Name of the selected engine.
        engine: String,
        /// The unsupported language identifier.
        lang: String,
    },

    /// Failure loading or rendering the source PDF.
    #[error("PDF rendering error: {0}")]
    PdfRender(String),

    /// The source document has no pages.
    #[error("Document has no pages")]
    EmptyDocument,

    /// A page blob could not be decoded as an image.
    #[error("Image decoding error on page {page}: {message}")]
    ImageDecode {
        /// 1-based page number.
        page: u32,
        /// Decoder error message.
        message: String,
    },

    /// A rendered page could not be encoded as JPEG.
    #[error("Image encoding error on page {page}: {message}")]
    ImageEncode {
        /// 1-based page number.
        page: u32,
        /// Encoder error message.
        message: String,
    },

    /// The OCR engine failed while processing input.
    #[error("{engine} recognition failed: {message}")]
    Recognition {
        /// Name of the engine that failed.
        engine: String,
        /// Engine error output.
        message: String,
    },
}

impl From<pdfium_render::prelude::PdfiumError> for Error {
    fn from(err: pdfium_render::prelude::PdfiumError) -> Self {
        Error::PdfRender(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoEngine;
        assert_eq!(err.to_string(), "No OCR engine found");

        let err = Error::LanguageNotSupported {
            engine: "tesseract".to_string(),
            lang: "spa".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Engine tesseract does not support language \"spa\""
        );

        let err = Error::ImageDecode {
            page: 3,
            message: "truncated".to_string(),
        };
        assert_eq!(err.to_string(), "Image decoding error on page 3: truncated");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
