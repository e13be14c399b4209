//! OCR engine wrapping the `tesseract` CLI tool.

use std::fs;
use std::process::Command;

use image::DynamicImage;
use log::debug;

use super::OcrEngine;
use crate::error::{Error, Result};

/// Default binary name resolved through `PATH`.
const TESSERACT_BIN: &str = "tesseract";

/// OCR engine backed by an installed `tesseract` executable.
///
/// Recognition round-trips through the filesystem: the page image is written
/// to a scoped temporary directory, `tesseract` is run on it, and the text
/// output file is read back.
#[derive(Debug)]
pub struct TesseractEngine {
    binary: String,
}

impl TesseractEngine {
    /// Create an engine using the default binary name.
    pub fn new() -> Self {
        Self::with_binary(TESSERACT_BIN)
    }

    /// Create an engine using a specific binary path.
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Probe for an installed `tesseract` binary.
    ///
    /// Returns `None` when the binary is missing or cannot report a version.
    pub fn detect() -> Option<Self> {
        let engine = Self::new();
        match Command::new(&engine.binary).arg("--version").output() {
            Ok(output) if output.status.success() => Some(engine),
            _ => None,
        }
    }

    fn command_failure(&self, output: &std::process::Output) -> Error {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = match stderr.trim() {
            "" => format!("exited with {}", output.status),
            detail => detail.to_string(),
        };
        Error::Recognition {
            engine: self.name().to_string(),
            message,
        }
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractEngine {
    fn name(&self) -> &str {
        "tesseract"
    }

    fn languages(&self) -> Result<Vec<String>> {
        let output = Command::new(&self.binary).arg("--list-langs").output()?;
        if !output.status.success() {
            return Err(self.command_failure(&output));
        }

        // The inventory goes to stdout since tesseract 4.1, stderr before.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let listing = if stdout.trim().is_empty() {
            String::from_utf8_lossy(&output.stderr).to_string()
        } else {
            stdout.to_string()
        };

        Ok(parse_lang_listing(&listing))
    }

    fn recognize(&self, image: &DynamicImage, lang: &str) -> Result<String> {
        let scratch = tempfile::Builder::new().prefix("ocrpdf").tempdir()?;
        let input_path = scratch.path().join("page.png");
        let output_base = scratch.path().join("page");

        image.save(&input_path).map_err(|e| Error::Recognition {
            engine: self.name().to_string(),
            message: format!("cannot write engine input: {e}"),
        })?;

        debug!("running {} -l {} on {}", self.binary, lang, input_path.display());
        let output = Command::new(&self.binary)
            .arg(&input_path)
            .arg(&output_base)
            .args(["-l", lang])
            .output()?;
        if !output.status.success() {
            return Err(self.command_failure(&output));
        }

        let text = fs::read_to_string(output_base.with_extension("txt"))?;
        Ok(text.trim_end().to_string())
    }
}

/// Parse the output of `tesseract --list-langs`.
///
/// The listing is a header line ("List of available languages (3):")
/// followed by one identifier per line.
fn parse_lang_listing(listing: &str) -> Vec<String> {
    listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.contains(' ') && !line.ends_with(':'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lang_listing() {
        let listing = "List of available languages (3):\neng\nosd\nspa\n";
        assert_eq!(parse_lang_listing(listing), vec!["eng", "osd", "spa"]);
    }

    #[test]
    fn test_parse_lang_listing_empty() {
        assert!(parse_lang_listing("").is_empty());
        assert!(parse_lang_listing("List of available languages (0):\n").is_empty());
    }

    #[test]
    fn test_parse_lang_listing_script_names() {
        // Script packs use slash-separated identifiers; those are kept.
        let listing = "List of available languages (2):\nscript/Latin\nspa\n";
        assert_eq!(parse_lang_listing(listing), vec!["script/Latin", "spa"]);
    }

    #[test]
    fn test_detect_missing_binary() {
        let engine = TesseractEngine::with_binary("definitely-not-a-real-ocr-binary");
        let err = engine.languages().unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
