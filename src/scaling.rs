//! Pre-fit standard scaling (z-score normalization).
//!
//! The transform applies the training-time standardization to each feature:
//! ```text
//! z = (x - mean) / scale
//! ```
//! where `mean` and `scale` were computed when the model was fit and arrive
//! here as an opaque artifact. This crate never fits a scaler; only the
//! fitted half exists.
//!
//! The transform is positional. Feeding it a vector of the wrong width is an
//! [`InputShape`](crate::error::PredictError::InputShape) error, never a pad
//! or truncate.

use crate::error::{PredictError, StartupError};
use crate::serialization::SerializableParams;
use crate::traits::FeatureScaler;
use log::info;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

/// Serializable parameters of a fitted standard scaler.
///
/// `scale` is the training-time standard deviation with zeros already
/// replaced by 1.0 (constant features pass through unchanged).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandardScalerParams {
    /// Mean of each feature at fit time.
    pub mean: Vec<f64>,
    /// Divisor for each feature; finite and nonzero.
    pub scale: Vec<f64>,
    /// Number of features seen during fit.
    pub n_features: usize,
}

/// Fitted standard scaler ready for inference.
#[derive(Clone, Debug)]
pub struct FittedStandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
    n_features: usize,
}

impl FittedStandardScaler {
    /// Reconstruct a fitted scaler from parameters, checking internal
    /// consistency.
    pub fn from_params(params: StandardScalerParams) -> Result<Self, StartupError> {
        if params.n_features == 0 {
            return Err(corrupt("scaler fit against zero features"));
        }
        if params.mean.len() != params.n_features || params.scale.len() != params.n_features {
            return Err(corrupt(&format!(
                "parameter lengths disagree: mean {}, scale {}, n_features {}",
                params.mean.len(),
                params.scale.len(),
                params.n_features
            )));
        }
        if params.mean.iter().any(|m| !m.is_finite()) {
            return Err(corrupt("non-finite mean"));
        }
        if params.scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
            return Err(corrupt("scale must be finite and nonzero"));
        }

        Ok(Self {
            mean: params.mean,
            scale: params.scale,
            n_features: params.n_features,
        })
    }

    /// Extract parameters for serialization.
    pub fn extract_params(&self) -> StandardScalerParams {
        StandardScalerParams {
            mean: self.mean.clone(),
            scale: self.scale.clone(),
            n_features: self.n_features,
        }
    }

    /// Per-feature means from fit time.
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Per-feature divisors from fit time.
    pub fn scale(&self) -> &[f64] {
        &self.scale
    }

    /// Write the scaler parameters as a binary artifact.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let bytes = self
            .extract_params()
            .to_bytes()
            .map_err(std::io::Error::other)?;
        std::fs::write(path, bytes)
    }

    /// Load a fitted scaler from a binary artifact.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, StartupError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StartupError::MissingArtifact {
                    name: "scaler",
                    path: path.display().to_string(),
                }
            } else {
                StartupError::Io {
                    name: "scaler",
                    detail: e.to_string(),
                }
            }
        })?;
        let params = StandardScalerParams::from_bytes(&bytes)
            .map_err(|e| corrupt(&e.to_string()))?;
        let scaler = Self::from_params(params)?;
        info!("loaded scaler for {} features", scaler.n_features);
        Ok(scaler)
    }
}

fn corrupt(detail: &str) -> StartupError {
    StartupError::Corrupt {
        name: "scaler",
        detail: detail.to_string(),
    }
}

impl FeatureScaler for FittedStandardScaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, PredictError> {
        if features.len() != self.n_features {
            return Err(PredictError::InputShape {
                expected: self.n_features,
                got: features.len(),
            });
        }

        Ok(features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (m, s))| (x - m) / s)
            .collect())
    }

    fn n_features_in(&self) -> usize {
        self.n_features
    }
}
