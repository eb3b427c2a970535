//! Regression tree representation and traversal.
//!
//! A tree is a strict owned recursion: every split owns exactly two children,
//! so sharing and cycles are impossible by construction. Score and explain
//! run the *same* routing decision at every split; the explanation is a
//! by-product of the traversal, never a second, independent computation.

use std::fmt::Write as _;

/// Slack added to every split threshold at parse time.
///
/// Compensates for the floating-point round trip of training-time split
/// values, so a feature value that equaled the split point during training
/// still routes left.
pub const SPLIT_SLACK: f32 = 1e-6;

/// One node of a regression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// Terminal node holding the tree's contribution on this path.
    Leaf { value: f32 },

    /// Binary split on one feature.
    Split {
        /// Declared feature name, kept for explanation output.
        feature: String,
        /// Ordinal index into the feature vector; `-1` when the name did not
        /// resolve against the model's declared feature list.
        feature_index: i32,
        /// Split point, already slack-adjusted.
        threshold: f32,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

/// Routing decision at a split, shared by score and explain.
enum Route {
    /// Feature reference unresolved or beyond the vector: go left.
    MissingGoLeft,
    /// Feature value at or below the threshold: go left.
    GoLeft(f32),
    /// Feature value above the threshold: go right.
    GoRight(f32),
}

fn route(feature_index: i32, threshold: f32, features: &[f32]) -> Route {
    if feature_index < 0 || feature_index as usize >= features.len() {
        return Route::MissingGoLeft;
    }
    let value = features[feature_index as usize];
    // A NaN value compares false against any threshold and routes right.
    if value <= threshold {
        Route::GoLeft(value)
    } else {
        Route::GoRight(value)
    }
}

impl TreeNode {
    /// Evaluate this subtree against a feature vector.
    pub fn score(&self, features: &[f32]) -> f32 {
        match self {
            TreeNode::Leaf { value } => *value,
            TreeNode::Split {
                feature_index,
                threshold,
                left,
                right,
                ..
            } => match route(*feature_index, *threshold, features) {
                Route::MissingGoLeft | Route::GoLeft(_) => left.score(features),
                Route::GoRight(_) => right.score(features),
            },
        }
    }

    /// Trace the decision path [`score`](Self::score) takes for this vector.
    pub fn explain(&self, features: &[f32]) -> String {
        let mut trace = String::new();
        self.write_trace(features, &mut trace);
        trace
    }

    fn write_trace(&self, features: &[f32], out: &mut String) {
        match self {
            TreeNode::Leaf { value } => {
                let _ = write!(out, "val: {value}");
            }
            TreeNode::Split {
                feature,
                feature_index,
                threshold,
                left,
                right,
            } => match route(*feature_index, *threshold, features) {
                Route::MissingGoLeft => {
                    let _ = write!(out, "'{feature}' does not exist in FV, Go Left | ");
                    left.write_trace(features, out);
                }
                Route::GoLeft(value) => {
                    let _ = write!(out, "'{feature}':{value} <= {threshold}, Go Left | ");
                    left.write_trace(features, out);
                }
                Route::GoRight(value) => {
                    let _ = write!(out, "'{feature}':{value} > {threshold}, Go Right | ");
                    right.write_trace(features, out);
                }
            },
        }
    }
}

/// A weighted regression tree.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionTree {
    pub weight: f32,
    pub root: TreeNode,
}

impl RegressionTree {
    /// Weighted contribution of this tree for a feature vector.
    pub fn score(&self, features: &[f32]) -> f32 {
        self.weight * self.root.score(features)
    }

    /// Decision-path trace for this tree.
    ///
    /// The weight is reported by the ensemble record, not embedded here.
    pub fn explain(&self, features: &[f32]) -> String {
        self.root.explain(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn split(feature_index: i32, threshold: f32, left: f32, right: f32) -> TreeNode {
        TreeNode::Split {
            feature: "f0".into(),
            feature_index,
            threshold,
            left: Box::new(TreeNode::Leaf { value: left }),
            right: Box::new(TreeNode::Leaf { value: right }),
        }
    }

    #[test]
    fn leaf_returns_value_for_any_vector() {
        let leaf = TreeNode::Leaf { value: 42.0 };
        assert_eq!(leaf.score(&[]), 42.0);
        assert_eq!(leaf.score(&[1.0, 2.0, 3.0]), 42.0);
    }

    #[test]
    fn split_routes_on_threshold() {
        let node = split(0, 0.5, 10.0, 20.0);
        assert_eq!(node.score(&[0.3]), 10.0);
        assert_eq!(node.score(&[0.9]), 20.0);
        // At the threshold exactly: left.
        assert_eq!(node.score(&[0.5]), 10.0);
    }

    #[test]
    fn unresolved_feature_goes_left() {
        let node = split(-1, 0.5, 10.0, 20.0);
        assert_eq!(node.score(&[100.0]), 10.0);
    }

    #[test]
    fn out_of_range_feature_goes_left() {
        // Stale tree referencing index 3 of a 1-wide vector.
        let node = split(3, 0.5, 10.0, 20.0);
        assert_eq!(node.score(&[0.9]), 10.0);
    }

    #[test]
    fn nan_feature_goes_right() {
        let node = split(0, 0.5, 10.0, 20.0);
        assert_eq!(node.score(&[f32::NAN]), 20.0);
    }

    #[test]
    fn tree_applies_weight() {
        let tree = RegressionTree {
            weight: 2.5,
            root: TreeNode::Leaf { value: 4.0 },
        };
        assert_abs_diff_eq!(tree.score(&[]), 10.0);
    }

    #[test]
    fn explain_traces_left_path() {
        let node = split(0, 0.5, 10.0, 20.0);
        assert_eq!(node.explain(&[0.3]), "'f0':0.3 <= 0.5, Go Left | val: 10");
    }

    #[test]
    fn explain_traces_right_path() {
        let node = split(0, 0.5, 10.0, 20.0);
        assert_eq!(node.explain(&[0.9]), "'f0':0.9 > 0.5, Go Right | val: 20");
    }

    #[test]
    fn explain_reports_missing_feature() {
        let node = split(-1, 0.5, 10.0, 20.0);
        assert_eq!(
            node.explain(&[0.9]),
            "'f0' does not exist in FV, Go Left | val: 10"
        );
    }

    #[test]
    fn explain_mirrors_score_on_out_of_range_index() {
        // Index equal to the vector length is out of range for score, so the
        // trace must also report the missing feature and go left.
        let node = split(1, 0.5, 10.0, 20.0);
        assert_eq!(node.score(&[0.9]), 10.0);
        assert_eq!(
            node.explain(&[0.9]),
            "'f0' does not exist in FV, Go Left | val: 10"
        );
    }

    #[test]
    fn explain_follows_nan_to_the_right() {
        let node = split(0, 0.5, 10.0, 20.0);
        assert_eq!(node.score(&[f32::NAN]), 20.0);
        assert_eq!(
            node.explain(&[f32::NAN]),
            "'f0':NaN > 0.5, Go Right | val: 20"
        );
    }

    #[test]
    fn deep_tree_traces_full_path() {
        let node = TreeNode::Split {
            feature: "a".into(),
            feature_index: 0,
            threshold: 0.5,
            left: Box::new(TreeNode::Split {
                feature: "b".into(),
                feature_index: 1,
                threshold: 1.5,
                left: Box::new(TreeNode::Leaf { value: 1.0 }),
                right: Box::new(TreeNode::Leaf { value: 2.0 }),
            }),
            right: Box::new(TreeNode::Leaf { value: 3.0 }),
        };

        assert_eq!(node.score(&[0.2, 2.0]), 2.0);
        assert_eq!(
            node.explain(&[0.2, 2.0]),
            "'a':0.2 <= 0.5, Go Left | 'b':2 > 1.5, Go Right | val: 2"
        );
    }
}
