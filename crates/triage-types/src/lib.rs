//! # Triage Types
//!
//! Request/response schema types for the triage AI service API.
//!
//! These are plain serde structs with OpenAPI schemas attached; all decision
//! logic lives in `triage-core`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Vital signs submitted for triage scoring.
///
/// `symptoms` is accepted for forward compatibility (future text-based feature
/// extraction) but is not currently used by the scoring logic.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PredictReq {
    pub symptoms: String,
    pub heart_rate: i32,
    pub temperature: f64,
    pub oxygen_saturation: i32,
}

/// Normalised triage score and urgency category.
///
/// `score` is always within `[0, 100]`, rounded to two decimal places.
/// `category` is one of `Critical`, `Urgent`, `Less-Urgent`, `Non-Urgent`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PredictRes {
    pub score: f64,
    pub category: String,
}

/// Result of analysing an uploaded report image.
///
/// On success `summary` and `extracted_text` are present; when the upload
/// cannot be decoded as an image, `success` is false and `message` explains
/// why. Absent fields are omitted from the JSON body.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeReportRes {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
