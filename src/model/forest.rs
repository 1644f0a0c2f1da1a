//! Decision forest: a pre-trained tree ensemble with majority vote.
//!
//! Each tree is a flat node array in preorder; traversal starts at node 0 and
//! follows `left` on `x[feature] <= threshold`, `right` otherwise, until a
//! leaf. The ensemble votes and ties go to class 0. This is the shape a
//! random-forest export lands in when its trees are flattened to arrays.

use crate::error::{PredictError, StartupError};
use crate::traits::BinaryClassifier;
use serde::{Deserialize, Serialize};

/// One node of a flattened decision tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TreeNode {
    /// Internal split. `left`/`right` index into the same node array and
    /// always point past the current node.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal class, 0 or 1.
    Leaf { class: u8 },
}

/// Serializable parameters of a trained decision forest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForestParams {
    /// One flat node array per tree; node 0 is the root.
    pub trees: Vec<Vec<TreeNode>>,
    /// Number of features the forest was trained against.
    pub n_features: usize,
}

/// Trained decision forest ready for inference.
#[derive(Clone, Debug)]
pub struct DecisionForest {
    trees: Vec<Vec<TreeNode>>,
    n_features: usize,
}

impl DecisionForest {
    /// Reconstruct a forest from parameters, checking tree structure.
    ///
    /// Child indices must stay in range and point strictly forward, which
    /// rules out cycles and guarantees traversal terminates.
    pub fn from_params(params: ForestParams) -> Result<Self, StartupError> {
        if params.n_features == 0 {
            return Err(corrupt("forest trained against zero features"));
        }
        if params.trees.is_empty() {
            return Err(corrupt("empty forest"));
        }

        for (t, tree) in params.trees.iter().enumerate() {
            if tree.is_empty() {
                return Err(corrupt(&format!("tree {} has no nodes", t)));
            }
            for (i, node) in tree.iter().enumerate() {
                match node {
                    TreeNode::Split {
                        feature,
                        threshold,
                        left,
                        right,
                    } => {
                        if *feature >= params.n_features {
                            return Err(corrupt(&format!(
                                "tree {} node {} splits on feature {} of {}",
                                t, i, feature, params.n_features
                            )));
                        }
                        if !threshold.is_finite() {
                            return Err(corrupt(&format!(
                                "tree {} node {} has non-finite threshold",
                                t, i
                            )));
                        }
                        for child in [*left, *right] {
                            if child <= i || child >= tree.len() {
                                return Err(corrupt(&format!(
                                    "tree {} node {} has bad child index {}",
                                    t, i, child
                                )));
                            }
                        }
                    }
                    TreeNode::Leaf { class } => {
                        if *class > 1 {
                            return Err(corrupt(&format!(
                                "tree {} node {} has non-binary class {}",
                                t, i, class
                            )));
                        }
                    }
                }
            }
        }

        Ok(Self {
            trees: params.trees,
            n_features: params.n_features,
        })
    }

    /// Extract parameters for serialization.
    pub fn extract_params(&self) -> ForestParams {
        ForestParams {
            trees: self.trees.clone(),
            n_features: self.n_features,
        }
    }

    /// Number of trees in the ensemble.
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    fn walk(tree: &[TreeNode], features: &[f64]) -> Result<u8, PredictError> {
        let mut idx = 0;
        loop {
            match tree.get(idx) {
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    idx = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                Some(TreeNode::Leaf { class }) => return Ok(*class),
                None => {
                    return Err(PredictError::ModelInvocation(format!(
                        "node index {} out of range",
                        idx
                    )))
                }
            }
        }
    }
}

fn corrupt(detail: &str) -> StartupError {
    StartupError::Corrupt {
        name: "classifier",
        detail: detail.to_string(),
    }
}

impl BinaryClassifier for DecisionForest {
    fn predict(&self, features: &[f64]) -> Result<u8, PredictError> {
        if features.len() != self.n_features {
            return Err(PredictError::ModelInvocation(format!(
                "classifier expects {} features, got {}",
                self.n_features,
                features.len()
            )));
        }

        let mut ones = 0usize;
        for tree in &self.trees {
            if Self::walk(tree, features)? == 1 {
                ones += 1;
            }
        }

        Ok(if ones * 2 > self.trees.len() { 1 } else { 0 })
    }

    fn n_features_in(&self) -> usize {
        self.n_features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Single stump: x[0] <= 0.0 -> class 0, else class 1.
    fn stump() -> Vec<TreeNode> {
        vec![
            TreeNode::Split {
                feature: 0,
                threshold: 0.0,
                left: 1,
                right: 2,
            },
            TreeNode::Leaf { class: 0 },
            TreeNode::Leaf { class: 1 },
        ]
    }

    fn constant(class: u8) -> Vec<TreeNode> {
        vec![TreeNode::Leaf { class }]
    }

    #[test]
    fn test_single_stump_routes_both_sides() {
        let forest = DecisionForest::from_params(ForestParams {
            trees: vec![stump()],
            n_features: 1,
        })
        .unwrap();

        assert_eq!(forest.predict(&[-1.0]).unwrap(), 0);
        assert_eq!(forest.predict(&[0.0]).unwrap(), 0); // <= goes left
        assert_eq!(forest.predict(&[1.0]).unwrap(), 1);
    }

    #[test]
    fn test_majority_vote() {
        let forest = DecisionForest::from_params(ForestParams {
            trees: vec![constant(1), constant(1), constant(0)],
            n_features: 2,
        })
        .unwrap();

        assert_eq!(forest.predict(&[0.0, 0.0]).unwrap(), 1);
    }

    #[test]
    fn test_tie_votes_class_zero() {
        let forest = DecisionForest::from_params(ForestParams {
            trees: vec![constant(1), constant(0)],
            n_features: 1,
        })
        .unwrap();

        assert_eq!(forest.predict(&[0.0]).unwrap(), 0);
    }

    #[test]
    fn test_predict_rejects_wrong_width() {
        let forest = DecisionForest::from_params(ForestParams {
            trees: vec![stump()],
            n_features: 1,
        })
        .unwrap();

        let result = forest.predict(&[1.0, 2.0]);
        assert!(matches!(result, Err(PredictError::ModelInvocation(_))));
    }

    #[test]
    fn test_from_params_rejects_empty_forest() {
        let result = DecisionForest::from_params(ForestParams {
            trees: Vec::new(),
            n_features: 1,
        });
        assert!(matches!(result, Err(StartupError::Corrupt { .. })));
    }

    #[test]
    fn test_from_params_rejects_empty_tree() {
        let result = DecisionForest::from_params(ForestParams {
            trees: vec![Vec::new()],
            n_features: 1,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_from_params_rejects_feature_out_of_range() {
        let result = DecisionForest::from_params(ForestParams {
            trees: vec![vec![
                TreeNode::Split {
                    feature: 5,
                    threshold: 0.0,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf { class: 0 },
                TreeNode::Leaf { class: 1 },
            ]],
            n_features: 2,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_from_params_rejects_backward_child() {
        // Child pointing at itself (or any earlier node) would loop forever.
        let result = DecisionForest::from_params(ForestParams {
            trees: vec![vec![
                TreeNode::Split {
                    feature: 0,
                    threshold: 0.0,
                    left: 0,
                    right: 1,
                },
                TreeNode::Leaf { class: 0 },
            ]],
            n_features: 1,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_from_params_rejects_child_out_of_range() {
        let result = DecisionForest::from_params(ForestParams {
            trees: vec![vec![
                TreeNode::Split {
                    feature: 0,
                    threshold: 0.0,
                    left: 1,
                    right: 9,
                },
                TreeNode::Leaf { class: 0 },
            ]],
            n_features: 1,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_from_params_rejects_non_binary_leaf() {
        let result = DecisionForest::from_params(ForestParams {
            trees: vec![vec![TreeNode::Leaf { class: 3 }]],
            n_features: 1,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_two_level_tree() {
        // x[0] <= 0: class 0. x[0] > 0 and x[1] <= 1: class 0, else class 1.
        let tree = vec![
            TreeNode::Split {
                feature: 0,
                threshold: 0.0,
                left: 1,
                right: 2,
            },
            TreeNode::Leaf { class: 0 },
            TreeNode::Split {
                feature: 1,
                threshold: 1.0,
                left: 3,
                right: 4,
            },
            TreeNode::Leaf { class: 0 },
            TreeNode::Leaf { class: 1 },
        ];
        let forest = DecisionForest::from_params(ForestParams {
            trees: vec![tree],
            n_features: 2,
        })
        .unwrap();

        assert_eq!(forest.predict(&[-1.0, 5.0]).unwrap(), 0);
        assert_eq!(forest.predict(&[1.0, 0.5]).unwrap(), 0);
        assert_eq!(forest.predict(&[1.0, 2.0]).unwrap(), 1);
    }
}
