//! PDF page rasterization through pdfium.

use std::io::Cursor;
use std::path::Path;

use image::DynamicImage;
use log::debug;
use pdfium_render::prelude::*;

use crate::error::{Error, Result};
use crate::model::PageImage;

/// Default rasterization resolution.
pub const DEFAULT_DPI: f32 = 300.0;

/// PDF user-space points per inch.
const POINTS_PER_INCH: f32 = 72.0;

/// JPEG quality for encoded page blobs.
const JPEG_QUALITY: u8 = 90;

/// Options for rasterizing a document.
#[derive(Debug, Clone)]
pub struct RasterOptions {
    /// Render resolution in dots per inch
    pub dpi: f32,
}

impl RasterOptions {
    /// Create new raster options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the render resolution.
    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { dpi: DEFAULT_DPI }
    }
}

/// Renders every page of a PDF document to a JPEG blob.
pub struct Rasterizer {
    pdfium: Pdfium,
}

impl Rasterizer {
    /// Bind the pdfium library.
    ///
    /// Looks for a bundled library next to the executable first, then falls
    /// back to the system-installed one.
    pub fn new() -> Result<Self> {
        let bindings =
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
                .or_else(|_| Pdfium::bind_to_system_library())?;
        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }

    /// Rasterize every page of the document, in document order.
    ///
    /// The whole document is rendered eagerly; the returned sequence holds
    /// one JPEG blob per source page.
    pub fn rasterize<P: AsRef<Path>>(
        &self,
        path: P,
        options: &RasterOptions,
    ) -> Result<Vec<PageImage>> {
        let path = path.as_ref();
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| Error::PdfRender(format!("{}: {}", path.display(), e)))?;

        let page_count = document.pages().len();
        if page_count == 0 {
            return Err(Error::EmptyDocument);
        }
        debug!(
            "rasterizing {} pages from {} at {} dpi",
            page_count,
            path.display(),
            options.dpi
        );

        let scale = options.dpi / POINTS_PER_INCH;
        let mut images = Vec::with_capacity(page_count as usize);
        for (index, page) in document.pages().iter().enumerate() {
            let number = index as u32 + 1;
            let pixel_width = (page.width().value * scale) as i32;
            let pixel_height = (page.height().value * scale) as i32;

            let bitmap = page
                .render_with_config(
                    &PdfRenderConfig::new()
                        .set_target_width(pixel_width)
                        .set_target_height(pixel_height),
                )
                .map_err(|e| Error::PdfRender(format!("page {}: {}", number, e)))?;

            images.push(encode_page(number, &bitmap.as_image())?);
        }

        Ok(images)
    }
}

/// Encode a rendered page as a JPEG blob.
fn encode_page(number: u32, image: &DynamicImage) -> Result<PageImage> {
    let rgb = image.to_rgb8();
    let (width, height) = (rgb.width(), rgb.height());

    let mut data = Vec::new();
    DynamicImage::ImageRgb8(rgb)
        .write_to(
            &mut Cursor::new(&mut data),
            image::ImageOutputFormat::Jpeg(JPEG_QUALITY),
        )
        .map_err(|e| Error::ImageEncode {
            page: number,
            message: e.to_string(),
        })?;

    Ok(PageImage::new(number, data, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn test_raster_options_builder() {
        let options = RasterOptions::new().with_dpi(150.0);
        assert_eq!(options.dpi, 150.0);

        let options = RasterOptions::default();
        assert_eq!(options.dpi, DEFAULT_DPI);
    }

    #[test]
    fn test_encode_page_roundtrip() {
        let source = DynamicImage::ImageRgb8(RgbImage::new(8, 6));
        let page = encode_page(3, &source).unwrap();

        assert_eq!(page.number, 3);
        assert_eq!((page.width, page.height), (8, 6));
        assert!(!page.is_empty());

        // The blob decodes back to an image of the same dimensions.
        let decoded = page.decode().unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 6));
    }
}
