//! Error types for the risk pipeline.
//!
//! Two families, matching the two phases of the crate's life:
//! - [`StartupError`]: artifact loading failed; fatal, the pipeline must not
//!   serve requests.
//! - [`PredictError`]: a single request failed; surfaced synchronously to the
//!   caller and never retried (a shape or invocation failure indicates drift
//!   between artifacts, not a transient condition).
//!
//! [`DomainError`] belongs to the input collector, not the pipeline: the
//! pipeline assumes in-domain answers and performs no range validation of its
//! own.

use std::fmt;

/// Error raised while loading the startup artifacts.
///
/// Every variant is fatal. Predictions cannot be served unless the manifest,
/// the scaler, and the classifier all loaded and agree on vector width; there
/// is no degraded mode.
#[derive(Debug)]
pub enum StartupError {
    /// An artifact file does not exist at the expected path.
    MissingArtifact { name: &'static str, path: String },
    /// An artifact file exists but could not be read.
    Io { name: &'static str, detail: String },
    /// An artifact file was read but could not be decoded or is internally
    /// inconsistent.
    Corrupt { name: &'static str, detail: String },
    /// The column manifest contains a name outside the known column schema,
    /// a duplicate, or no columns at all.
    InvalidManifest(String),
    /// The manifest and the fitted artifacts disagree on vector width.
    ShapeDisagreement {
        manifest: usize,
        scaler: usize,
        classifier: usize,
    },
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::MissingArtifact { name, path } => {
                write!(f, "Missing artifact: {} not found at {}", name, path)
            }
            StartupError::Io { name, detail } => {
                write!(f, "I/O error reading {}: {}", name, detail)
            }
            StartupError::Corrupt { name, detail } => {
                write!(f, "Corrupt artifact: {}: {}", name, detail)
            }
            StartupError::InvalidManifest(msg) => {
                write!(f, "Invalid manifest: {}", msg)
            }
            StartupError::ShapeDisagreement {
                manifest,
                scaler,
                classifier,
            } => {
                write!(
                    f,
                    "Shape disagreement: manifest has {} columns, scaler expects {}, classifier expects {}",
                    manifest, scaler, classifier
                )
            }
        }
    }
}

impl std::error::Error for StartupError {}

/// Error raised while scoring a single request.
#[derive(Debug)]
pub enum PredictError {
    /// Feature vector width does not match what the fitted transform expects.
    /// Never padded or truncated.
    InputShape { expected: usize, got: usize },
    /// The classifier rejected its input or produced an out-of-range output.
    ModelInvocation(String),
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::InputShape { expected, got } => {
                write!(
                    f,
                    "Input shape mismatch: expected {} features, got {}",
                    expected, got
                )
            }
            PredictError::ModelInvocation(msg) => {
                write!(f, "Model invocation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for PredictError {}

/// A survey answer outside its stated domain.
///
/// Produced by [`crate::survey::RawAnswers::validate`] for the input
/// collector's benefit. The pipeline itself never raises this.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainError {
    pub field: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} out of domain: {} not in [{}, {}]",
            self.field, self.value, self.min, self.max
        )
    }
}

impl std::error::Error for DomainError {}
