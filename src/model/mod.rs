//! Pre-trained binary classifiers.
//!
//! Two artifact families, both behind [`BinaryClassifier`]:
//! - [`LogisticClassifier`] — a linear decision boundary, `w·x + b > 0`.
//! - [`DecisionForest`] — flattened decision trees with majority vote, the
//!   shape a random-forest export arrives in.
//!
//! [`ClassifierParams`] is the on-disk representation: a single `model.bin`
//! artifact carries either family, and the loader does not need to know which
//! ahead of time.

mod forest;
mod linear;

pub use forest::{DecisionForest, ForestParams, TreeNode};
pub use linear::{LogisticClassifier, LogisticParams};

use crate::error::StartupError;
use crate::serialization::SerializableParams;
use crate::traits::BinaryClassifier;
use log::info;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

/// Serializable parameters for either classifier family.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ClassifierParams {
    Logistic(LogisticParams),
    Forest(ForestParams),
}

impl ClassifierParams {
    /// Vector width the parameters were trained against.
    pub fn n_features(&self) -> usize {
        match self {
            ClassifierParams::Logistic(p) => p.weights.len(),
            ClassifierParams::Forest(p) => p.n_features,
        }
    }

    /// Build the matching classifier, validating the parameters.
    pub fn into_classifier(
        self,
    ) -> Result<Box<dyn BinaryClassifier + Send + Sync>, StartupError> {
        match self {
            ClassifierParams::Logistic(p) => {
                let model = LogisticClassifier::from_params(p)?;
                info!("loaded logistic classifier for {} features", model.n_features_in());
                Ok(Box::new(model))
            }
            ClassifierParams::Forest(p) => {
                let model = DecisionForest::from_params(p)?;
                info!(
                    "loaded decision forest: {} trees, {} features",
                    model.n_trees(),
                    model.n_features_in()
                );
                Ok(Box::new(model))
            }
        }
    }

    /// Write the parameters as a binary artifact.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let bytes = self.to_bytes().map_err(std::io::Error::other)?;
        std::fs::write(path, bytes)
    }

    /// Load classifier parameters from a binary artifact.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, StartupError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StartupError::MissingArtifact {
                    name: "classifier",
                    path: path.display().to_string(),
                }
            } else {
                StartupError::Io {
                    name: "classifier",
                    detail: e.to_string(),
                }
            }
        })?;
        Self::from_bytes(&bytes).map_err(|e| StartupError::Corrupt {
            name: "classifier",
            detail: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_roundtrip_logistic() {
        let params = ClassifierParams::Logistic(LogisticParams {
            weights: vec![0.5, -0.5],
            bias: 0.1,
        });
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");

        params.save_to_file(&path).unwrap();
        let loaded = ClassifierParams::load_from_file(&path).unwrap();

        assert_eq!(loaded, params);
        assert_eq!(loaded.n_features(), 2);
    }

    #[test]
    fn test_params_roundtrip_forest() {
        let params = ClassifierParams::Forest(ForestParams {
            trees: vec![vec![TreeNode::Leaf { class: 1 }]],
            n_features: 4,
        });
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");

        params.save_to_file(&path).unwrap();
        let loaded = ClassifierParams::load_from_file(&path).unwrap();

        assert_eq!(loaded, params);
        assert_eq!(loaded.n_features(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ClassifierParams::load_from_file(dir.path().join("absent.bin"));
        assert!(matches!(
            result,
            Err(StartupError::MissingArtifact { .. })
        ));
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        std::fs::write(&path, [0xde, 0xad]).unwrap();

        let result = ClassifierParams::load_from_file(&path);
        assert!(matches!(result, Err(StartupError::Corrupt { .. })));
    }

    #[test]
    fn test_into_classifier_validates() {
        let bad = ClassifierParams::Logistic(LogisticParams {
            weights: Vec::new(),
            bias: 0.0,
        });
        assert!(bad.into_classifier().is_err());
    }
}
