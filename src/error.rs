//! Shared error types for model construction.

use thiserror::Error;

/// Errors raised while building a scoring model from its definition.
///
/// All variants are construction-time and fatal: a model is either fully
/// valid or it is not built at all. Scoring a constructed model never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A required key is absent from the model definition.
    #[error("model definition is missing required field: {0}")]
    MissingField(&'static str),

    /// The definition declares no trees.
    #[error("model definition does not contain any trees")]
    EmptyEnsemble,

    /// A boost block targets a feature the model does not declare.
    #[error("boost references unknown feature: {0}")]
    UnknownBoostFeature(String),

    /// A boost block carries an unrecognized `type` value.
    #[error("unknown boost type: {0} (expected \"additive\" or \"multiplicative\")")]
    InvalidBoostType(String),

    /// A value that should be numeric cannot be parsed as one.
    #[error("cannot parse numeric value: {0}")]
    NumberFormat(String),
}
