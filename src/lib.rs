//! # ocrpdf
//!
//! PDF page OCR pipeline for Rust.
//!
//! ocrpdf renders every page of a PDF document to an image and extracts its
//! text with an external OCR engine, concatenating the per-page results into
//! a single text output.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ocrpdf::{pipeline, PipelineOptions};
//!
//! fn main() -> ocrpdf::Result<()> {
//!     let options = PipelineOptions::new("document.pdf")
//!         .with_output("document.txt")
//!         .with_language("spa");
//!
//!     let summary = pipeline::run(&options)?;
//!     println!("{} pages, {} characters", summary.pages, summary.total_chars);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline stages
//!
//! - **Discovery**: probe the host for installed OCR engines; an empty set
//!   is fatal before any file is touched
//! - **Rasterization**: render each page at the configured DPI into a JPEG
//!   blob, in document order
//! - **Recognition**: decode each blob and hand it to the engine with the
//!   configured language hint
//! - **Output**: join page texts with a blank line and replace the output
//!   file through a staged write

pub mod engine;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod raster;
pub mod writer;

// Re-export commonly used types
pub use engine::{discover, EngineInfo, OcrEngine, TesseractEngine};
pub use error::{Error, Result};
pub use model::{PageImage, PageText, Recognition};
pub use pipeline::{PipelineOptions, Summary, DEFAULT_LANGUAGE, DEFAULT_OUTPUT};
pub use raster::{RasterOptions, Rasterizer, DEFAULT_DPI};

use std::path::Path;

/// Recognize every page of a PDF and return the joined text.
///
/// Uses the first discovered engine and default rasterization settings;
/// nothing is written to disk.
///
/// # Example
///
/// ```no_run
/// let text = ocrpdf::recognize_file("document.pdf", "spa").unwrap();
/// println!("{}", text);
/// ```
pub fn recognize_file<P: AsRef<Path>>(path: P, language: &str) -> Result<String> {
    let engines = engine::discover();
    let selected = engine::select(&engines, None)?;

    if !selected.supports_language(language)? {
        return Err(Error::LanguageNotSupported {
            engine: selected.name().to_string(),
            lang: language.to_string(),
        });
    }

    let rasterizer = Rasterizer::new()?;
    let images = rasterizer.rasterize(path, &RasterOptions::default())?;
    let recognition = pipeline::recognize_pages(&images, selected.as_ref(), language, |_| {})?;

    Ok(recognition.joined_text())
}
