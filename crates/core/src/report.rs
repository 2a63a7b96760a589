//! Report analysis: decode, preprocess, recognise, summarise.
//!
//! One straight-line pipeline per uploaded document. Undecodable uploads are
//! an expected outcome, reported as a typed error the API layer turns into a
//! structured negative response; recognition failures degrade to an empty
//! extraction so a response is always produced.

use crate::error::ReportError;
use crate::preprocess::preprocess;
use crate::recognize::TextRecognizer;
use std::sync::Arc;

/// Maximum excerpt length in characters.
const EXCERPT_LIMIT: usize = 200;

const CRITICAL_SUMMARY: &str = "Critical findings detected";
const NORMAL_SUMMARY: &str = "Normal findings";

/// Outcome of a successful report analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportAnalysis {
    pub summary: String,
    /// First [`EXCERPT_LIMIT`] characters of the recognised text, with a
    /// trailing `"..."` when truncated.
    pub extracted_text: String,
}

/// Orchestrates decode → preprocess → recognise → summarise for one upload.
///
/// Holds only the injected recogniser; no state is shared between requests.
pub struct ReportAnalyzer {
    recognizer: Arc<dyn TextRecognizer>,
}

impl ReportAnalyzer {
    pub fn new(recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self { recognizer }
    }

    /// Analyse one uploaded document image.
    ///
    /// # Errors
    /// Returns [`ReportError::Decode`] when the bytes are not a decodable
    /// image; no recognition is attempted in that case.
    pub fn analyze(&self, bytes: &[u8]) -> Result<ReportAnalysis, ReportError> {
        let decoded = image::load_from_memory(bytes).map_err(ReportError::Decode)?;
        let prepared = preprocess(&decoded);

        let text = match self.recognizer.recognize(&prepared) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Text recognition failed ({e}), treating as empty");
                String::new()
            }
        };

        Ok(ReportAnalysis {
            summary: summarise(&text).to_owned(),
            extracted_text: excerpt(&text),
        })
    }
}

/// Crude keyword scan, documented as such: not semantic analysis.
fn summarise(text: &str) -> &'static str {
    let lowered = text.to_lowercase();
    if lowered.contains("critical") || lowered.contains("abnormal") {
        CRITICAL_SUMMARY
    } else {
        NORMAL_SUMMARY
    }
}

/// First [`EXCERPT_LIMIT`] characters, with an ellipsis marker appended iff
/// the text was longer.
fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_LIMIT {
        return text.to_owned();
    }
    let mut cut: String = text.chars().take(EXCERPT_LIMIT).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecognitionError;
    use image::{DynamicImage, GrayImage, ImageFormat, Luma};
    use std::io::Cursor;

    struct FixedText(&'static str);

    impl TextRecognizer for FixedText {
        fn recognize(&self, _image: &GrayImage) -> Result<String, RecognitionError> {
            Ok(self.0.to_owned())
        }
    }

    struct PanickingRecognizer;

    impl TextRecognizer for PanickingRecognizer {
        fn recognize(&self, _image: &GrayImage) -> Result<String, RecognitionError> {
            panic!("recognition must not run for undecodable uploads");
        }
    }

    struct BrokenRecognizer;

    impl TextRecognizer for BrokenRecognizer {
        fn recognize(&self, _image: &GrayImage) -> Result<String, RecognitionError> {
            Err(RecognitionError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "engine unavailable",
            )))
        }
    }

    fn png_bytes() -> Vec<u8> {
        let image = DynamicImage::ImageLuma8(GrayImage::from_pixel(16, 16, Luma([255])));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode test png");
        bytes
    }

    #[test]
    fn undecodable_bytes_fail_without_recognition() {
        let analyzer = ReportAnalyzer::new(Arc::new(PanickingRecognizer));
        let err = analyzer
            .analyze(b"definitely not an image")
            .expect_err("non-image bytes should not decode");
        assert!(matches!(err, ReportError::Decode(_)));
    }

    #[test]
    fn keyword_scan_is_case_insensitive() {
        assert_eq!(summarise("ABNORMAL findings in lung field"), CRITICAL_SUMMARY);
        assert_eq!(summarise("patient is CriTiCal"), CRITICAL_SUMMARY);
        assert_eq!(summarise("all values within range"), NORMAL_SUMMARY);
        assert_eq!(summarise(""), NORMAL_SUMMARY);
    }

    #[test]
    fn excerpt_truncates_long_text_with_marker() {
        let text = "a".repeat(250);
        let cut = excerpt(&text);
        assert_eq!(cut.chars().count(), 203);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn excerpt_keeps_short_text_unchanged() {
        let text = "b".repeat(50);
        assert_eq!(excerpt(&text), text);
    }

    #[test]
    fn excerpt_keeps_exact_limit_text_unchanged() {
        let text = "c".repeat(200);
        assert_eq!(excerpt(&text), text);
    }

    #[test]
    fn analysis_summarises_recognised_text() {
        let analyzer = ReportAnalyzer::new(Arc::new(FixedText("Results ABNORMAL, follow up")));
        let analysis = analyzer.analyze(&png_bytes()).expect("analyze png");
        assert_eq!(analysis.summary, CRITICAL_SUMMARY);
        assert_eq!(analysis.extracted_text, "Results ABNORMAL, follow up");
    }

    #[test]
    fn recognition_failure_degrades_to_empty_extraction() {
        let analyzer = ReportAnalyzer::new(Arc::new(BrokenRecognizer));
        let analysis = analyzer.analyze(&png_bytes()).expect("analyze png");
        assert_eq!(analysis.summary, NORMAL_SUMMARY);
        assert_eq!(analysis.extracted_text, "");
    }
}
