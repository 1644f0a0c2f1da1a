//! Manifest-aligned encoding of survey answers.
//!
//! Converts one [`RawAnswers`] into the fixed-width numeric vector the fitted
//! scaler and classifier were trained against:
//!
//! 1. The six numeric fields are copied verbatim under their canonical names.
//! 2. Each categorical field contributes a single composite key,
//!    `<Field>_<SelectedLabel>`, with value 1.0.
//! 3. Every manifest column not produced by steps 1-2 is filled with 0.0, so
//!    the vector is always complete even when a selected category was the
//!    training-time baseline (no column of its own) or when the non-selected
//!    categories have columns.
//! 4. Output order is manifest order, exactly.
//!
//! A synthesized composite key that appears nowhere in the manifest is
//! silently dropped, not an error; the signal is simply absent from the
//! vector. Manifest validation at startup keeps that path confined to the
//! baseline-category case.
//!
//! Encoding is a pure function of its two inputs: no side effects, no hidden
//! state, identical output on identical input.

use crate::manifest::ColumnManifest;
use crate::survey::{ChestPainType, ExerciseAngina, RawAnswers, RestingEcg, Sex, StSlope};

/// A complete, manifest-ordered numeric feature row.
///
/// Constructed only by [`encode`]; immutable afterwards. One entry per
/// manifest column.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    /// Number of entries; always equals the width of the manifest it was
    /// encoded against.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in manifest order.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// Encode one survey response against a column manifest.
pub fn encode(answers: &RawAnswers, manifest: &ColumnManifest) -> FeatureVector {
    let composites = [
        format!("{}_{}", Sex::FIELD, answers.sex.label()),
        format!("{}_{}", ChestPainType::FIELD, answers.chest_pain.label()),
        format!("{}_{}", RestingEcg::FIELD, answers.resting_ecg.label()),
        format!(
            "{}_{}",
            ExerciseAngina::FIELD,
            answers.exercise_angina.label()
        ),
        format!("{}_{}", StSlope::FIELD, answers.st_slope.label()),
    ];

    let values = manifest
        .names()
        .iter()
        .map(|name| match name.as_str() {
            "Age" => answers.age as f64,
            "RestingBP" => answers.resting_bp as f64,
            "Cholesterol" => answers.cholesterol as f64,
            "FastingBS" => answers.fasting_bs as f64,
            "MaxHR" => answers.max_hr as f64,
            "Oldpeak" => answers.oldpeak,
            other => {
                if composites.iter().any(|c| c == other) {
                    1.0
                } else {
                    0.0
                }
            }
        })
        .collect();

    FeatureVector { values }
}
