//! Error types for the triage core.
//!
//! Model and recognition failures are deliberately typed rather than
//! suppressed wholesale: callers funnel them into fallbacks, but tests can
//! still distinguish "artifact absent" from "artifact broken" from
//! "inference failed".

/// Errors from validating core configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("text-recognition command cannot be empty")]
    EmptyRecognitionCommand,
}

/// Errors from loading or invoking the optional triage model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// No artifact exists at the configured path. Not a fault: the service
    /// runs heuristic-only in this case.
    #[error("model artifact not found at {0}")]
    Absent(std::path::PathBuf),
    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse model artifact: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("feature row has {got} values, model expects {expected}")]
    FeatureShape { expected: usize, got: usize },
    #[error("model produced no score")]
    EmptyPrediction,
}

/// Errors from the text-recognition engine.
#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("recognition I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode image for recognition: {0}")]
    Encode(#[from] image::ImageError),
    #[error("recognition engine exited with {status}: {stderr}")]
    Engine {
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("recognition engine produced non-UTF-8 output: {0}")]
    Output(#[from] std::string::FromUtf8Error),
}

/// Errors from the report-analysis pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The uploaded bytes could not be decoded as an image. An expected,
    /// recoverable outcome reported to the client as a structured response.
    #[error("unable to decode image: {0}")]
    Decode(#[source] image::ImageError),
}
