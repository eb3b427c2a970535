//! The scoring capability and batch evaluation helpers.
//!
//! [`Scorer`] is the single seam between model types: the ensemble implements
//! it, and the boost decorator implements it over any other scorer it owns.
//! Scoring is pure and allocation-light, so one model instance is shared
//! read-only across worker threads with no locking.

use crate::explain::Explanation;

/// A compiled, immutable scoring model.
///
/// `score` and `explain` take the same feature vector; `explain` re-runs the
/// identical deterministic evaluation, so no per-call intermediates ever live
/// on the model itself.
pub trait Scorer: Send + Sync {
    /// Score one candidate document's feature vector.
    fn score(&self, features: &[f32]) -> f32;

    /// Explain how `final_score` was produced for this vector.
    ///
    /// `final_score` should be the value a preceding [`score`](Self::score)
    /// call returned for the same vector.
    fn explain(&self, features: &[f32], final_score: f32) -> Explanation;
}

// =============================================================================
// FeatureMatrix
// =============================================================================

/// Row-major batch of feature vectors, one row per candidate document.
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    data: Box<[f32]>,
    num_rows: usize,
    num_features: usize,
}

impl FeatureMatrix {
    /// Create a matrix from row-major data, taking ownership.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != num_rows * num_features`.
    pub fn from_vec(data: Vec<f32>, num_rows: usize, num_features: usize) -> Self {
        assert_eq!(
            data.len(),
            num_rows * num_features,
            "data length {} does not match dimensions {}x{}",
            data.len(),
            num_rows,
            num_features
        );
        Self {
            data: data.into_boxed_slice(),
            num_rows,
            num_features,
        }
    }

    /// Number of rows (candidate documents).
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of features per row.
    #[inline]
    pub fn num_features(&self) -> usize {
        self.num_features
    }

    /// The feature vector of one row.
    #[inline]
    pub fn row(&self, row_idx: usize) -> &[f32] {
        let start = row_idx * self.num_features;
        &self.data[start..start + self.num_features]
    }
}

// =============================================================================
// Batch scoring
// =============================================================================

/// Score every row of a matrix into `scores`, one score per row.
pub fn score_batch<S: Scorer + ?Sized>(model: &S, matrix: &FeatureMatrix, scores: &mut [f32]) {
    debug_assert_eq!(scores.len(), matrix.num_rows());

    for (row_idx, slot) in scores.iter_mut().enumerate() {
        *slot = model.score(matrix.row(row_idx));
    }
}

/// Parallel [`score_batch`] across rows via Rayon.
///
/// Safe because models are immutable after construction and scoring one row
/// never depends on another.
pub fn par_score_batch<S: Scorer + ?Sized>(model: &S, matrix: &FeatureMatrix, scores: &mut [f32]) {
    use rayon::prelude::*;

    debug_assert_eq!(scores.len(), matrix.num_rows());

    scores
        .par_iter_mut()
        .enumerate()
        .for_each(|(row_idx, slot)| {
            *slot = model.score(matrix.row(row_idx));
        });
}
