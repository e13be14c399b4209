//! OCR engine abstraction and discovery.
//!
//! Engines are probed from the host environment at runtime. The trait-based
//! interface isolates the concrete engine (an external `tesseract` binary)
//! from the recognition pipeline, so tests can inject mock engines.

mod tesseract;

pub use tesseract::TesseractEngine;

use std::sync::Arc;

use image::DynamicImage;
use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};

/// Discovery report for a single engine: its name and language inventory.
#[derive(Debug, Clone, Serialize)]
pub struct EngineInfo {
    /// Engine identifier (e.g., "tesseract")
    pub name: String,

    /// Language identifiers the engine reports as installed
    pub languages: Vec<String>,
}

/// Abstract interface for OCR engines.
///
/// Implementations wrap one installed OCR tool and expose its language
/// inventory plus single-image recognition.
pub trait OcrEngine: Send + Sync + std::fmt::Debug {
    /// Engine identifier (e.g., "tesseract").
    fn name(&self) -> &str;

    /// Query the engine for its installed language identifiers.
    fn languages(&self) -> Result<Vec<String>>;

    /// Recognize text in a decoded image using the given language hint.
    fn recognize(&self, image: &DynamicImage, lang: &str) -> Result<String>;

    /// Check whether the engine supports a language identifier.
    fn supports_language(&self, lang: &str) -> Result<bool> {
        Ok(self.languages()?.iter().any(|l| l == lang))
    }

    /// Build a discovery report for this engine.
    fn info(&self) -> Result<EngineInfo> {
        Ok(EngineInfo {
            name: self.name().to_string(),
            languages: self.languages()?,
        })
    }
}

/// Probe the host for installed OCR engines.
///
/// The returned order is deterministic; extending the engine set means
/// appending further probes here.
pub fn discover() -> Vec<Arc<dyn OcrEngine>> {
    let mut engines: Vec<Arc<dyn OcrEngine>> = Vec::new();

    if let Some(engine) = TesseractEngine::detect() {
        debug!("discovered OCR engine: {}", engine.name());
        engines.push(Arc::new(engine));
    }

    engines
}

/// Select an engine from the discovered set.
///
/// Without a name the first discovered engine wins; with a name the match
/// is case-insensitive. An empty set is fatal.
pub fn select(
    engines: &[Arc<dyn OcrEngine>],
    name: Option<&str>,
) -> Result<Arc<dyn OcrEngine>> {
    if engines.is_empty() {
        return Err(Error::NoEngine);
    }

    match name {
        None => Ok(engines[0].clone()),
        Some(requested) => engines
            .iter()
            .find(|e| e.name().eq_ignore_ascii_case(requested))
            .cloned()
            .ok_or_else(|| Error::UnknownEngine {
                requested: requested.to_string(),
                available: engines
                    .iter()
                    .map(|e| e.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FakeEngine {
        name: &'static str,
        languages: Vec<String>,
    }

    impl OcrEngine for FakeEngine {
        fn name(&self) -> &str {
            self.name
        }

        fn languages(&self) -> Result<Vec<String>> {
            Ok(self.languages.clone())
        }

        fn recognize(&self, _image: &DynamicImage, _lang: &str) -> Result<String> {
            Ok(String::new())
        }
    }

    fn fake(name: &'static str, languages: &[&str]) -> Arc<dyn OcrEngine> {
        Arc::new(FakeEngine {
            name,
            languages: languages.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[test]
    fn test_select_empty_set() {
        let engines: Vec<Arc<dyn OcrEngine>> = Vec::new();
        let err = select(&engines, None).unwrap_err();
        assert!(matches!(err, Error::NoEngine));
    }

    #[test]
    fn test_select_first_by_default() {
        let engines = vec![fake("alpha", &["eng"]), fake("beta", &["eng"])];
        let selected = select(&engines, None).unwrap();
        assert_eq!(selected.name(), "alpha");
    }

    #[test]
    fn test_select_by_name() {
        let engines = vec![fake("alpha", &["eng"]), fake("beta", &["eng"])];
        let selected = select(&engines, Some("BETA")).unwrap();
        assert_eq!(selected.name(), "beta");
    }

    #[test]
    fn test_select_unknown_name() {
        let engines = vec![fake("alpha", &["eng"])];
        let err = select(&engines, Some("gamma")).unwrap_err();
        match err {
            Error::UnknownEngine {
                requested,
                available,
            } => {
                assert_eq!(requested, "gamma");
                assert_eq!(available, "alpha");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_supports_language() {
        let engine = fake("alpha", &["eng", "spa"]);
        assert!(engine.supports_language("spa").unwrap());
        assert!(!engine.supports_language("deu").unwrap());
    }

    #[test]
    fn test_engine_info() {
        let engine = fake("alpha", &["eng", "spa"]);
        let info = engine.info().unwrap();
        assert_eq!(info.name, "alpha");
        assert_eq!(info.languages, vec!["eng", "spa"]);
    }
}
