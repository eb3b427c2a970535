//! ltr-scoring: tree-ensemble scoring for learned ranking models.
//!
//! This crate parses a declarative model definition into an immutable
//! regression-tree ensemble, optionally composed with a heuristic feature
//! boost, and evaluates it against per-document feature vectors. Every score
//! can be explained: the explanation trace reproduces the exact decision
//! path that produced the number, for debugging and audit.

pub mod boost;
pub mod ensemble;
pub mod error;
pub mod explain;
pub mod features;
pub mod parse;
pub mod scorer;
pub mod testing;
pub mod tree;
