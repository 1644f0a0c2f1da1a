//! Logistic classifier: a pre-trained linear decision boundary.
//!
//! Decision rule: `w·x + b > 0` is class 1. The weights were fit against
//! standardized features, so this classifier only ever sees the scaler's
//! output, never raw survey values.

use crate::error::{PredictError, StartupError};
use crate::traits::BinaryClassifier;
use serde::{Deserialize, Serialize};

/// Serializable parameters of a trained logistic classifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogisticParams {
    pub weights: Vec<f64>,
    pub bias: f64,
}

/// Trained logistic classifier ready for inference.
#[derive(Clone, Debug)]
pub struct LogisticClassifier {
    weights: Vec<f64>,
    bias: f64,
}

impl LogisticClassifier {
    /// Reconstruct a classifier from parameters, checking internal
    /// consistency.
    pub fn from_params(params: LogisticParams) -> Result<Self, StartupError> {
        if params.weights.is_empty() {
            return Err(corrupt("no weights"));
        }
        if params.weights.iter().any(|w| !w.is_finite()) || !params.bias.is_finite() {
            return Err(corrupt("non-finite weight or bias"));
        }
        Ok(Self {
            weights: params.weights,
            bias: params.bias,
        })
    }

    /// Extract parameters for serialization.
    pub fn extract_params(&self) -> LogisticParams {
        LogisticParams {
            weights: self.weights.clone(),
            bias: self.bias,
        }
    }

    /// Signed distance from the decision boundary: `w·x + b`.
    pub fn decision_function(&self, features: &[f64]) -> Result<f64, PredictError> {
        if features.len() != self.weights.len() {
            return Err(PredictError::ModelInvocation(format!(
                "classifier expects {} features, got {}",
                self.weights.len(),
                features.len()
            )));
        }

        let logit = self
            .weights
            .iter()
            .zip(features.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias;
        Ok(logit)
    }
}

fn corrupt(detail: &str) -> StartupError {
    StartupError::Corrupt {
        name: "classifier",
        detail: detail.to_string(),
    }
}

impl BinaryClassifier for LogisticClassifier {
    fn predict(&self, features: &[f64]) -> Result<u8, PredictError> {
        let logit = self.decision_function(features)?;
        Ok(if logit > 0.0 { 1 } else { 0 })
    }

    fn n_features_in(&self) -> usize {
        self.weights.len()
    }
}
