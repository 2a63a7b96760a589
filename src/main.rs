//! Triage AI service binary.
//!
//! Starts the REST API server for the triage microservice:
//! - `POST /predict` computes an urgency score and category from vital signs
//! - `POST /analyze-report` runs OCR-based analysis over an uploaded report image
//!
//! An optional pre-trained model artifact is loaded once at startup; when it is
//! missing or broken the service runs in heuristic-only mode.

use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{build_router, AppState};
use triage_core::{model, CoreConfig, ReportAnalyzer, TesseractCli, TriageScorer};

/// Main entry point for the triage AI service.
///
/// # Environment Variables
/// - `TRIAGE_REST_ADDR`: server address (default: "0.0.0.0:3000")
/// - `TRIAGE_MODEL_PATH`: model artifact location (default: "model/triage_model.json")
/// - `TRIAGE_TESSERACT_CMD`: text-recognition engine command (default: "tesseract")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid, or
/// - the server address cannot be bound.
///
/// A missing or unreadable model artifact is not an error; the service starts
/// in heuristic-only mode instead.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("triage_run=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("TRIAGE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let model_path = std::env::var("TRIAGE_MODEL_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(triage_core::config::DEFAULT_MODEL_PATH));
    let tesseract_cmd = std::env::var("TRIAGE_TESSERACT_CMD")
        .unwrap_or_else(|_| triage_core::config::DEFAULT_TESSERACT_CMD.into());

    let cfg = CoreConfig::new(model_path, tesseract_cmd)?;

    tracing::info!("++ Starting triage AI REST on {}", addr);

    let model = model::load_or_heuristic_only(cfg.model_path());
    let state = AppState {
        scorer: Arc::new(TriageScorer::new(model)),
        analyzer: Arc::new(ReportAnalyzer::new(Arc::new(TesseractCli::new(
            cfg.tesseract_cmd(),
        )))),
    };

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
