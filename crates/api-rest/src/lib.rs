//! # API REST
//!
//! REST API implementation for the triage AI service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, multipart uploads, CORS)
//!
//! All decision logic lives in `triage-core`; handlers map between the wire
//! schemas in `triage-types` and core domain types.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use triage_core::{ReportAnalyzer, ReportError, TriageScorer, VitalSigns};
use triage_types::{AnalyzeReportRes, HealthRes, PredictReq, PredictRes};

/// Application state shared across REST API handlers.
///
/// Both services are read-only after startup and safe for concurrent use
/// from simultaneously handled requests.
#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<TriageScorer>,
    pub analyzer: Arc<ReportAnalyzer>,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, predict, analyze_report),
    components(schemas(HealthRes, PredictReq, PredictRes, AnalyzeReportRes))
)]
struct ApiDoc;

/// Build the REST router with Swagger UI and permissive CORS.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/predict", post(predict))
        .route("/analyze-report", post(analyze_report))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Triage AI service is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/predict",
    request_body = PredictReq,
    responses(
        (status = 200, description = "Triage score and category", body = PredictRes)
    )
)]
/// Compute a triage score and urgency category from vital signs.
///
/// Uses the pre-trained model when one is loaded, with a silent heuristic
/// fallback; a score is always produced for a well-formed request.
#[axum::debug_handler]
async fn predict(State(state): State<AppState>, Json(req): Json<PredictReq>) -> Json<PredictRes> {
    // req.symptoms is accepted but not yet used by scoring.
    let vitals = VitalSigns {
        heart_rate: req.heart_rate,
        temperature: req.temperature,
        oxygen_saturation: req.oxygen_saturation,
    };

    let result = state.scorer.score(&vitals);
    Json(PredictRes {
        score: result.score,
        category: result.category.to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/analyze-report",
    request_body(content = String, content_type = "multipart/form-data", description = "Report image file upload"),
    responses(
        (status = 200, description = "Report summary and text excerpt", body = AnalyzeReportRes),
        (status = 400, description = "Bad request")
    )
)]
/// Analyse an uploaded report image with OCR.
///
/// The first multipart field's bytes are taken as the image. An upload that
/// cannot be decoded yields a `200` with `success: false`; only a missing or
/// malformed multipart body is a `400`.
#[axum::debug_handler]
async fn analyze_report(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeReportRes>, (StatusCode, &'static str)> {
    let field = multipart.next_field().await.map_err(|e| {
        tracing::error!("Multipart read error: {:?}", e);
        (StatusCode::BAD_REQUEST, "Malformed multipart body")
    })?;

    let Some(field) = field else {
        return Err((StatusCode::BAD_REQUEST, "Missing file upload"));
    };

    let bytes = field.bytes().await.map_err(|e| {
        tracing::error!("Multipart field read error: {:?}", e);
        (StatusCode::BAD_REQUEST, "Malformed multipart body")
    })?;

    match state.analyzer.analyze(&bytes) {
        Ok(analysis) => Ok(Json(AnalyzeReportRes {
            success: true,
            summary: Some(analysis.summary),
            extracted_text: Some(analysis.extracted_text),
            message: None,
        })),
        Err(ReportError::Decode(e)) => {
            tracing::debug!("Report decode failed: {:?}", e);
            Ok(Json(AnalyzeReportRes {
                success: false,
                summary: None,
                extracted_text: None,
                message: Some("Unable to decode image".into()),
            }))
        }
    }
}
