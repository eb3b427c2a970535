//! Weighted tree ensembles.
//!
//! An ensemble is an ordered, non-empty list of weighted regression trees
//! plus the model's declared feature list. Its score is the plain sum of the
//! per-tree contributions; the order carries no numeric meaning but fixes the
//! ordering of the explanation records.

use crate::error::ModelError;
use crate::explain::Explanation;
use crate::features::FeatureResolver;
use crate::scorer::Scorer;
use crate::tree::RegressionTree;

/// An additive ensemble of weighted regression trees.
#[derive(Debug, Clone)]
pub struct TreeEnsemble {
    trees: Vec<RegressionTree>,
    features: FeatureResolver,
}

impl TreeEnsemble {
    /// Create an ensemble from already-built trees.
    ///
    /// Fails with [`ModelError::EmptyEnsemble`] when `trees` is empty.
    pub fn new(trees: Vec<RegressionTree>, features: FeatureResolver) -> Result<Self, ModelError> {
        if trees.is_empty() {
            return Err(ModelError::EmptyEnsemble);
        }
        Ok(Self { trees, features })
    }

    /// Number of trees.
    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    /// The trees, in declaration order.
    pub fn trees(&self) -> &[RegressionTree] {
        &self.trees
    }

    /// The model's declared feature list.
    pub fn features(&self) -> &FeatureResolver {
        &self.features
    }
}

impl Scorer for TreeEnsemble {
    fn score(&self, features: &[f32]) -> f32 {
        self.trees.iter().map(|tree| tree.score(features)).sum()
    }

    fn explain(&self, features: &[f32], final_score: f32) -> Explanation {
        let details = self
            .trees
            .iter()
            .enumerate()
            .map(|(index, tree)| {
                Explanation::leaf(
                    tree.score(features),
                    format!("tree {index} | {}", tree.explain(features)),
                )
            })
            .collect();

        Explanation::with_children(
            final_score,
            "tree ensemble model applied to features, sum of:",
            details,
        )
    }
}
