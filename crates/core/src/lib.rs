//! # Triage Core
//!
//! Decision logic for the triage AI service:
//! - Urgency scoring from vital signs, with an optional pre-trained model and
//!   a deterministic heuristic fallback
//! - Document-image preprocessing and OCR-based report summarisation
//!
//! Every anticipated failure path inside this crate has an explicit fallback:
//! a triage score is always producible, and report analysis converts expected
//! failures into structured negative results rather than aborting a request.
//!
//! **No API concerns**: HTTP routing, schemas and serialization belong in
//! `api-rest` and `triage-types`.

pub mod config;
pub mod error;
pub mod model;
pub mod preprocess;
pub mod recognize;
pub mod report;
pub mod scoring;

pub use config::CoreConfig;
pub use error::{ConfigError, ModelError, RecognitionError, ReportError};
pub use model::{LinearModel, TriageModel};
pub use recognize::{TesseractCli, TextRecognizer};
pub use report::{ReportAnalysis, ReportAnalyzer};
pub use scoring::{Category, TriageScore, TriageScorer, VitalSigns};
