//! Testing utilities for ltr-scoring.
//!
//! Shared float assertion helpers used by both unit tests and the
//! integration tests under `tests/`.

use approx::AbsDiffEq;

/// Default tolerance for floating point score comparisons.
pub const DEFAULT_TOLERANCE: f32 = 1e-5;

/// Assert two scores are approximately equal within [`DEFAULT_TOLERANCE`].
///
/// # Panics
///
/// Panics with both values when they differ by more than the tolerance.
pub fn assert_score_eq(actual: f32, expected: f32) {
    assert!(
        actual.abs_diff_eq(&expected, DEFAULT_TOLERANCE),
        "score mismatch: got {actual}, expected {expected}"
    );
}

/// Assert two score slices are element-wise approximately equal.
///
/// # Panics
///
/// Panics on the first differing element, or on a length mismatch.
pub fn assert_scores_eq(actual: &[f32], expected: &[f32]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "score count mismatch: got {}, expected {}",
        actual.len(),
        expected.len()
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            a.abs_diff_eq(e, DEFAULT_TOLERANCE),
            "score mismatch at row {i}: got {a}, expected {e}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_scores_within_tolerance() {
        assert_score_eq(1.0, 1.0 + 1e-6);
        assert_scores_eq(&[1.0, 2.0], &[1.0, 2.0 - 1e-6]);
    }

    #[test]
    #[should_panic(expected = "score mismatch")]
    fn rejects_scores_outside_tolerance() {
        assert_score_eq(1.0, 1.1);
    }
}
