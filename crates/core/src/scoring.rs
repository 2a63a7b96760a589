//! Triage scoring: raw score, normalisation and categorisation.
//!
//! The raw score comes from the injected model when one is present, otherwise
//! from a deterministic heuristic. Any model failure falls back to the
//! heuristic silently (a triage decision must always be producible); the raw
//! value is then clamped into `[0, 100]` and mapped to a discrete urgency
//! category.

use crate::model::TriageModel;
use std::fmt;
use std::sync::Arc;

/// Vital signs for a single triage request.
///
/// The request's free-text symptoms field is not part of this struct: it is
/// accepted at the API boundary but unused by scoring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VitalSigns {
    pub heart_rate: i32,
    pub temperature: f64,
    pub oxygen_saturation: i32,
}

impl VitalSigns {
    /// Feature row in the order the model was trained on:
    /// heart rate, temperature, oxygen saturation.
    fn feature_row(&self) -> Vec<f64> {
        vec![
            f64::from(self.heart_rate),
            self.temperature,
            f64::from(self.oxygen_saturation),
        ]
    }
}

/// Discrete urgency band derived from the normalised score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Critical,
    Urgent,
    LessUrgent,
    NonUrgent,
}

impl Category {
    /// Categorise a clamped score. Total and deterministic; band lower
    /// bounds are inclusive (a score of exactly 80 is `Critical`).
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Category::Critical
        } else if score >= 60.0 {
            Category::Urgent
        } else if score >= 40.0 {
            Category::LessUrgent
        } else {
            Category::NonUrgent
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Critical => "Critical",
            Category::Urgent => "Urgent",
            Category::LessUrgent => "Less-Urgent",
            Category::NonUrgent => "Non-Urgent",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalised triage result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriageScore {
    /// Urgency score in `[0, 100]`, rounded to two decimal places.
    pub score: f64,
    pub category: Category,
}

/// Converts vital signs into a bounded urgency score and category.
///
/// Construct with `Some(model)` to score via the pre-trained model, or `None`
/// for heuristic-only mode. Holds no mutable state; safe to share across
/// requests.
pub struct TriageScorer {
    model: Option<Arc<dyn TriageModel>>,
}

impl TriageScorer {
    pub fn new(model: Option<Arc<dyn TriageModel>>) -> Self {
        Self { model }
    }

    /// Score a patient's vitals. Never fails: model errors fall back to the
    /// heuristic, and a non-finite raw value is coerced to zero.
    pub fn score(&self, vitals: &VitalSigns) -> TriageScore {
        let raw = match &self.model {
            Some(model) => match model.predict(&[vitals.feature_row()]) {
                Ok(scores) => match scores.first() {
                    Some(raw) => *raw,
                    None => {
                        tracing::warn!("Model returned no score, using heuristic");
                        heuristic(vitals)
                    }
                },
                Err(e) => {
                    tracing::warn!("Model inference failed ({e}), using heuristic");
                    heuristic(vitals)
                }
            },
            None => heuristic(vitals),
        };

        let clamped = clamp(raw);
        TriageScore {
            score: round2(clamped),
            category: Category::from_score(clamped),
        }
    }
}

/// Heuristic fallback formula.
///
/// Deliberately simple and not a medical scoring standard; it can produce
/// values far outside `[0, 100]` (typical vitals already saturate the clamp).
fn heuristic(vitals: &VitalSigns) -> f64 {
    f64::from(vitals.heart_rate) / 2.0 + vitals.temperature * 10.0
        - (100.0 - f64::from(vitals.oxygen_saturation))
}

/// Clamp a raw score into `[0, 100]`, coercing non-finite values to zero.
///
/// A logistic rescale that compresses large raw values smoothly is a possible
/// future alternative; hard clamping is the active contract.
fn clamp(raw: f64) -> f64 {
    if !raw.is_finite() {
        return 0.0;
    }
    raw.clamp(0.0, 100.0)
}

fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
