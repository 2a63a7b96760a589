//! Text recognition over preprocessed images.
//!
//! Recognition is a black box behind the [`TextRecognizer`] trait: binary
//! image in, plain text out. The production implementation shells out to the
//! Tesseract command-line tool; tests substitute fixed or failing
//! implementations.

use crate::error::RecognitionError;
use image::GrayImage;
use std::process::Command;

/// Black-box text recognition: image in, plain text out.
///
/// No structure is guaranteed for the returned text; it may be empty for a
/// well-formed image. Implementations must be safe for concurrent use.
pub trait TextRecognizer: Send + Sync {
    fn recognize(&self, image: &GrayImage) -> Result<String, RecognitionError>;
}

/// Recognizer backed by the Tesseract command-line tool.
///
/// The image is staged as a temporary PNG and `<command> <png> stdout` is
/// invoked; Tesseract prints the recognised text on stdout. The temporary
/// file is removed when the handle drops.
pub struct TesseractCli {
    command: String,
}

impl TesseractCli {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl TextRecognizer for TesseractCli {
    fn recognize(&self, image: &GrayImage) -> Result<String, RecognitionError> {
        let staged = tempfile::Builder::new()
            .prefix("triage-report-")
            .suffix(".png")
            .tempfile()?;
        image.save(staged.path())?;

        let output = Command::new(&self.command)
            .arg(staged.path())
            .arg("stdout")
            .output()?;

        if !output.status.success() {
            return Err(RecognitionError::Engine {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}
