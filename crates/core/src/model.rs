//! Optional pre-trained triage model.
//!
//! The scorer works with or without a model. The model is an external,
//! optionally-present artifact loaded once at startup from a fixed on-disk
//! location and injected into [`crate::TriageScorer`] at construction time;
//! it is never mutated afterwards, so it is safe to share across concurrently
//! handled requests.

use crate::error::ModelError;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// A pre-trained model mapping vital-sign feature rows to raw urgency scores.
///
/// `predict` takes a batch of feature rows and returns one raw score per row.
/// Raw scores are unbounded; normalisation is the scorer's job.
pub trait TriageModel: Send + Sync {
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, ModelError>;
}

/// Linear regression artifact stored as JSON on disk.
///
/// The artifact is a document of the form
/// `{"weights": [w_hr, w_temp, w_spo2], "intercept": b}` and predicts
/// `w · features + b` for each row.
#[derive(Clone, Debug, Deserialize)]
pub struct LinearModel {
    weights: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    /// Load a model artifact from `path`.
    ///
    /// # Errors
    /// Returns [`ModelError::Absent`] when no file exists at `path`, so
    /// callers can distinguish "no model deployed" from a broken artifact,
    /// which is reported as [`ModelError::Io`] or [`ModelError::Malformed`].
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::Absent(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path)?;
        let model: LinearModel = serde_json::from_str(&raw)?;
        Ok(model)
    }
}

impl TriageModel for LinearModel {
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, ModelError> {
        rows.iter()
            .map(|row| {
                if row.len() != self.weights.len() {
                    return Err(ModelError::FeatureShape {
                        expected: self.weights.len(),
                        got: row.len(),
                    });
                }
                let dot: f64 = row.iter().zip(&self.weights).map(|(x, w)| x * w).sum();
                Ok(dot + self.intercept)
            })
            .collect()
    }
}

/// Load the model artifact for startup, falling back to heuristic-only mode.
///
/// Never fails: any load problem is logged and the service runs without a
/// model.
pub fn load_or_heuristic_only(path: &Path) -> Option<Arc<dyn TriageModel>> {
    match LinearModel::load(path) {
        Ok(model) => {
            tracing::info!("Loaded triage model from {}", path.display());
            Some(Arc::new(model))
        }
        Err(ModelError::Absent(_)) => {
            tracing::info!(
                "No model artifact at {}, running heuristic-only",
                path.display()
            );
            None
        }
        Err(e) => {
            tracing::warn!("Failed to load model artifact ({e}), running heuristic-only");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_artifact(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(json.as_bytes()).expect("write artifact");
        file
    }

    #[test]
    fn loads_and_predicts_from_linear_artifact() {
        let file = write_artifact(r#"{"weights": [0.5, 10.0, -1.0], "intercept": 2.0}"#);
        let model = LinearModel::load(file.path()).expect("load model");
        let scores = model
            .predict(&[vec![80.0, 37.0, 98.0]])
            .expect("predict one row");
        assert_eq!(scores, vec![40.0 + 370.0 - 98.0 + 2.0]);
    }

    #[test]
    fn missing_artifact_is_reported_as_absent() {
        let err = LinearModel::load(Path::new("/nonexistent/triage_model.json"))
            .expect_err("missing file should not load");
        assert!(matches!(err, ModelError::Absent(_)));
    }

    #[test]
    fn corrupt_artifact_is_reported_as_malformed() {
        let file = write_artifact("definitely not json");
        let err = LinearModel::load(file.path()).expect_err("corrupt file should not load");
        assert!(matches!(err, ModelError::Malformed(_)));
    }

    #[test]
    fn wrong_feature_shape_is_rejected() {
        let file = write_artifact(r#"{"weights": [1.0, 1.0, 1.0], "intercept": 0.0}"#);
        let model = LinearModel::load(file.path()).expect("load model");
        let err = model
            .predict(&[vec![1.0, 2.0]])
            .expect_err("short row should be rejected");
        assert!(matches!(
            err,
            ModelError::FeatureShape {
                expected: 3,
                got: 2
            }
        ));
    }

    #[test]
    fn startup_load_never_fails() {
        assert!(load_or_heuristic_only(Path::new("/nonexistent/triage_model.json")).is_none());

        let file = write_artifact("{broken");
        assert!(load_or_heuristic_only(file.path()).is_none());

        let file = write_artifact(r#"{"weights": [1.0, 1.0, 1.0], "intercept": 0.0}"#);
        assert!(load_or_heuristic_only(file.path()).is_some());
    }
}
