//! The linear recognition pipeline.
//!
//! One run is a single pass with no retries: discover engines, validate the
//! language, rasterize every page, recognize each page in order, write the
//! joined text. The only handled branch is an empty engine set; every other
//! failure propagates and aborts the run.

use std::path::PathBuf;

use log::{debug, info};

use crate::engine::{self, OcrEngine};
use crate::error::{Error, Result};
use crate::model::{PageImage, PageText, Recognition};
use crate::raster::{RasterOptions, Rasterizer, DEFAULT_DPI};
use crate::writer;

/// Default OCR language hint.
pub const DEFAULT_LANGUAGE: &str = "spa";

/// Default output file path.
pub const DEFAULT_OUTPUT: &str = "textfile.txt";

/// Configuration for one pipeline run.
///
/// All inputs are explicit values so runs are reproducible and testable
/// without process-wide state.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Source PDF path
    pub input: PathBuf,

    /// Destination text file path
    pub output: PathBuf,

    /// OCR language identifier passed to the engine
    pub language: String,

    /// Rasterization resolution in DPI
    pub dpi: f32,

    /// Engine name to use; first discovered engine if `None`
    pub engine: Option<String>,
}

impl PipelineOptions {
    /// Create options for an input file with defaults for everything else.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            language: DEFAULT_LANGUAGE.to_string(),
            dpi: DEFAULT_DPI,
            engine: None,
        }
    }

    /// Set the output file path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the OCR language identifier.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the rasterization resolution.
    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Select an engine by name instead of taking the first discovered one.
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Number of recognized pages
    pub pages: usize,

    /// Total recognized characters across all pages
    pub total_chars: usize,

    /// Path the joined text was written to
    pub output: PathBuf,
}

/// Run the pipeline without progress callbacks.
pub fn run(options: &PipelineOptions) -> Result<Summary> {
    run_with_observer(options, |_| {})
}

/// Run the pipeline, invoking `observer` once per recognized page.
///
/// Observer calls arrive in page order, before the output file is written.
/// Engine discovery happens first, so a host without any OCR engine fails
/// before the output path is touched.
pub fn run_with_observer<F>(options: &PipelineOptions, observer: F) -> Result<Summary>
where
    F: FnMut(&PageText),
{
    let engines = engine::discover();
    let selected = engine::select(&engines, options.engine.as_deref())?;
    info!("selected OCR engine: {}", selected.name());

    if !selected.supports_language(&options.language)? {
        return Err(Error::LanguageNotSupported {
            engine: selected.name().to_string(),
            lang: options.language.clone(),
        });
    }

    let rasterizer = Rasterizer::new()?;
    let raster_options = RasterOptions::new().with_dpi(options.dpi);
    let images = rasterizer.rasterize(&options.input, &raster_options)?;

    let recognition = recognize_pages(&images, selected.as_ref(), &options.language, observer)?;

    writer::write_text(&options.output, &recognition.joined_text())?;

    Ok(Summary {
        pages: recognition.page_count(),
        total_chars: recognition.total_chars(),
        output: options.output.clone(),
    })
}

/// Recognize an ordered sequence of page blobs.
///
/// Each blob is decoded and handed to the engine sequentially; the observer
/// fires after each page, in order.
pub fn recognize_pages<F>(
    images: &[PageImage],
    engine: &dyn OcrEngine,
    lang: &str,
    mut observer: F,
) -> Result<Recognition>
where
    F: FnMut(&PageText),
{
    let mut recognition = Recognition::new();

    for image in images {
        let decoded = image.decode()?;
        let text = engine.recognize(&decoded, lang)?;
        let page = PageText::new(image.number, text);
        debug!("page {}: {} chars", page.number, page.char_count());
        observer(&page);
        recognition.push(page);
    }

    Ok(recognition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_options_defaults() {
        let options = PipelineOptions::new("input.pdf");
        assert_eq!(options.input, PathBuf::from("input.pdf"));
        assert_eq!(options.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(options.language, DEFAULT_LANGUAGE);
        assert_eq!(options.dpi, DEFAULT_DPI);
        assert!(options.engine.is_none());
    }

    #[test]
    fn test_pipeline_options_builder() {
        let options = PipelineOptions::new("input.pdf")
            .with_output("out.txt")
            .with_language("eng")
            .with_dpi(150.0)
            .with_engine("tesseract");

        assert_eq!(options.output, PathBuf::from("out.txt"));
        assert_eq!(options.language, "eng");
        assert_eq!(options.dpi, 150.0);
        assert_eq!(options.engine.as_deref(), Some("tesseract"));
    }
}
