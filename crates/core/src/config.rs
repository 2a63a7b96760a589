//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process
//! startup and then passed into core services. The intent is to avoid reading
//! process-wide environment variables during request handling, which can lead
//! to inconsistent behaviour in multi-threaded runtimes and test harnesses.

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Default on-disk location of the optional model artifact.
pub const DEFAULT_MODEL_PATH: &str = "model/triage_model.json";

/// Default command used to invoke the text-recognition engine.
pub const DEFAULT_TESSERACT_CMD: &str = "tesseract";

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    model_path: PathBuf,
    tesseract_cmd: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(model_path: PathBuf, tesseract_cmd: String) -> Result<Self, ConfigError> {
        if tesseract_cmd.trim().is_empty() {
            return Err(ConfigError::EmptyRecognitionCommand);
        }

        Ok(Self {
            model_path,
            tesseract_cmd,
        })
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    pub fn tesseract_cmd(&self) -> &str {
        &self.tesseract_cmd
    }
}
