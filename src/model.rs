//! Page-level data types for the recognition pipeline.

use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single page rendered to an encoded raster image.
///
/// Produced by the rasterizer in document order and consumed by the
/// recognizer; blobs are held in memory only, never persisted.
#[derive(Debug, Clone)]
pub struct PageImage {
    /// Page number (1-indexed)
    pub number: u32,

    /// JPEG-encoded image data
    pub data: Vec<u8>,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,
}

impl PageImage {
    /// Create a new page image from an encoded blob.
    pub fn new(number: u32, data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            number,
            data,
            width,
            height,
        }
    }

    /// Decode the blob back into a raster image.
    pub fn decode(&self) -> Result<DynamicImage> {
        image::load_from_memory(&self.data).map_err(|e| Error::ImageDecode {
            page: self.number,
            message: e.to_string(),
        })
    }

    /// Size of the encoded blob in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the blob is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Recognized text for a single page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageText {
    /// Page number (1-indexed)
    pub number: u32,

    /// Recognized text content
    pub text: String,
}

impl PageText {
    /// Create a new page text.
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Number of recognized characters (not bytes).
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// The ordered recognition result for one document.
///
/// Page order matches the source document; the invariant is one
/// [`PageText`] per source page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recognition {
    /// Per-page recognized text, in document order
    pub pages: Vec<PageText>,
}

impl Recognition {
    /// Create a new empty recognition result.
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Append the next page's text.
    pub fn push(&mut self, page: PageText) {
        self.pages.push(page);
    }

    /// Number of recognized pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Check if any pages were recognized.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total recognized characters across all pages.
    pub fn total_chars(&self) -> usize {
        self.pages.iter().map(|p| p.char_count()).sum()
    }

    /// Concatenate all page texts, separated by a blank line.
    pub fn joined_text(&self) -> String {
        self.pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
