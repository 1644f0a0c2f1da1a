//! The assembled risk pipeline: encode, scale, classify, label.
//!
//! One [`RiskPipeline`] owns the three read-only artifacts and serves any
//! number of requests. Each request is a single linear pass with no
//! intermediate states, no waiting, and no shared mutable state, so one
//! instance can back concurrent requests without locking.

use crate::encoding::encode;
use crate::error::{PredictError, StartupError};
use crate::manifest::ColumnManifest;
use crate::survey::RawAnswers;
use crate::traits::{BinaryClassifier, FeatureScaler};
use std::fmt;

/// Binary risk outcome handed to the presentation layer.
///
/// The only two values this pipeline produces; an error is surfaced as an
/// error, never folded into a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLabel {
    HighRisk,
    LowRisk,
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLabel::HighRisk => write!(f, "HIGH RISK"),
            RiskLabel::LowRisk => write!(f, "LOW RISK"),
        }
    }
}

/// Survey-to-label inference pipeline around three pre-loaded artifacts.
///
/// Construction cross-checks the artifacts' shapes so a width drift fails at
/// startup instead of on the first request. After that the pipeline is
/// immutable; [`assess`](Self::assess) takes `&self` and is safe to call from
/// many threads at once.
pub struct RiskPipeline {
    manifest: ColumnManifest,
    scaler: Box<dyn FeatureScaler + Send + Sync>,
    classifier: Box<dyn BinaryClassifier + Send + Sync>,
}

impl RiskPipeline {
    /// Assemble a pipeline, verifying that manifest, scaler, and classifier
    /// agree on vector width.
    pub fn new(
        manifest: ColumnManifest,
        scaler: Box<dyn FeatureScaler + Send + Sync>,
        classifier: Box<dyn BinaryClassifier + Send + Sync>,
    ) -> Result<Self, StartupError> {
        let widths = (
            manifest.len(),
            scaler.n_features_in(),
            classifier.n_features_in(),
        );
        if widths.0 != widths.1 || widths.1 != widths.2 {
            return Err(StartupError::ShapeDisagreement {
                manifest: widths.0,
                scaler: widths.1,
                classifier: widths.2,
            });
        }

        Ok(Self {
            manifest,
            scaler,
            classifier,
        })
    }

    /// The column manifest this pipeline encodes against.
    pub fn manifest(&self) -> &ColumnManifest {
        &self.manifest
    }

    /// Score one survey response.
    ///
    /// Encode against the manifest, apply the pre-fit scaling transform, run
    /// the classifier, and map its {0, 1} output to a [`RiskLabel`]. Any
    /// failure propagates immediately; nothing is retried.
    pub fn assess(&self, answers: &RawAnswers) -> Result<RiskLabel, PredictError> {
        let vector = encode(answers, &self.manifest);
        let scaled = self.scaler.transform(vector.as_slice())?;
        let class = self.classifier.predict(&scaled)?;

        match class {
            1 => Ok(RiskLabel::HighRisk),
            0 => Ok(RiskLabel::LowRisk),
            other => Err(PredictError::ModelInvocation(format!(
                "classifier produced non-binary class {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::test_manifest;
    use crate::survey::StSlope;

    /// Pass-through scaler for a fixed width.
    struct IdentityScaler {
        width: usize,
    }

    impl FeatureScaler for IdentityScaler {
        fn transform(&self, features: &[f64]) -> Result<Vec<f64>, PredictError> {
            if features.len() != self.width {
                return Err(PredictError::InputShape {
                    expected: self.width,
                    got: features.len(),
                });
            }
            Ok(features.to_vec())
        }

        fn n_features_in(&self) -> usize {
            self.width
        }
    }

    /// Classifies on a single feature position against a threshold.
    struct ThresholdClassifier {
        width: usize,
        position: usize,
        threshold: f64,
    }

    impl BinaryClassifier for ThresholdClassifier {
        fn predict(&self, features: &[f64]) -> Result<u8, PredictError> {
            if features.len() != self.width {
                return Err(PredictError::ModelInvocation(format!(
                    "classifier expects {} features, got {}",
                    self.width,
                    features.len()
                )));
            }
            Ok(if features[self.position] > self.threshold {
                1
            } else {
                0
            })
        }

        fn n_features_in(&self) -> usize {
            self.width
        }
    }

    /// Always reports a class outside {0, 1}.
    struct BrokenClassifier {
        width: usize,
    }

    impl BinaryClassifier for BrokenClassifier {
        fn predict(&self, _features: &[f64]) -> Result<u8, PredictError> {
            Ok(2)
        }

        fn n_features_in(&self) -> usize {
            self.width
        }
    }

    fn oldpeak_pipeline(threshold: f64) -> RiskPipeline {
        let manifest = test_manifest();
        let width = manifest.len();
        let position = manifest.position("Oldpeak").unwrap();
        RiskPipeline::new(
            manifest,
            Box::new(IdentityScaler { width }),
            Box::new(ThresholdClassifier {
                width,
                position,
                threshold,
            }),
        )
        .unwrap()
    }

    #[test]
    fn test_assess_maps_one_to_high_risk() {
        let pipeline = oldpeak_pipeline(3.0);

        let mild = RawAnswers {
            oldpeak: 1.0,
            ..RawAnswers::default()
        };
        let severe = RawAnswers {
            oldpeak: 5.5,
            ..RawAnswers::default()
        };

        assert_eq!(pipeline.assess(&mild).unwrap(), RiskLabel::LowRisk);
        assert_eq!(pipeline.assess(&severe).unwrap(), RiskLabel::HighRisk);
    }

    #[test]
    fn test_assess_is_stateless_across_requests() {
        let pipeline = oldpeak_pipeline(3.0);
        let answers = RawAnswers::default();

        let first = pipeline.assess(&answers).unwrap();
        let second = pipeline.assess(&answers).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_assess_survives_unmatched_composite() {
        // Down has no manifest column in test_manifest; the signal drops
        // silently and assessment still succeeds.
        let pipeline = oldpeak_pipeline(3.0);
        let answers = RawAnswers {
            st_slope: StSlope::Down,
            ..RawAnswers::default()
        };

        assert!(pipeline.assess(&answers).is_ok());
    }

    #[test]
    fn test_new_rejects_shape_disagreement() {
        let manifest = test_manifest();
        let width = manifest.len();

        let result = RiskPipeline::new(
            manifest,
            Box::new(IdentityScaler { width }),
            Box::new(ThresholdClassifier {
                width: width + 4,
                position: 0,
                threshold: 0.0,
            }),
        );
        assert!(matches!(
            result,
            Err(StartupError::ShapeDisagreement { .. })
        ));
    }

    #[test]
    fn test_assess_propagates_scaler_shape_error() {
        // Scaler fit for a different width than the manifest cannot be
        // assembled; simulate drift by building the scaler mismatch inside
        // the fake instead.
        struct DriftingScaler {
            claimed: usize,
            actual: usize,
        }
        impl FeatureScaler for DriftingScaler {
            fn transform(&self, features: &[f64]) -> Result<Vec<f64>, PredictError> {
                Err(PredictError::InputShape {
                    expected: self.actual,
                    got: features.len(),
                })
            }
            fn n_features_in(&self) -> usize {
                self.claimed
            }
        }

        let manifest = test_manifest();
        let width = manifest.len();
        let pipeline = RiskPipeline::new(
            manifest,
            Box::new(DriftingScaler {
                claimed: width,
                actual: width + 1,
            }),
            Box::new(ThresholdClassifier {
                width,
                position: 0,
                threshold: 0.0,
            }),
        )
        .unwrap();

        let result = pipeline.assess(&RawAnswers::default());
        assert!(matches!(result, Err(PredictError::InputShape { .. })));
    }

    #[test]
    fn test_assess_rejects_non_binary_class() {
        let manifest = test_manifest();
        let width = manifest.len();
        let pipeline = RiskPipeline::new(
            manifest,
            Box::new(IdentityScaler { width }),
            Box::new(BrokenClassifier { width }),
        )
        .unwrap();

        let result = pipeline.assess(&RawAnswers::default());
        assert!(matches!(result, Err(PredictError::ModelInvocation(_))));
    }

    #[test]
    fn test_pipeline_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RiskPipeline>();
    }

    #[test]
    fn test_risk_label_display() {
        assert_eq!(RiskLabel::HighRisk.to_string(), "HIGH RISK");
        assert_eq!(RiskLabel::LowRisk.to_string(), "LOW RISK");
    }
}
