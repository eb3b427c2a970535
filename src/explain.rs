//! Structured scoring explanations.
//!
//! An [`Explanation`] is a tree of `{score, description, children}` nodes
//! mirroring the computation that produced a score: the ensemble emits one
//! child per tree, a boosted model emits a boost term plus the inner model's
//! explanation. The tree serializes to JSON for audit logs and renders as an
//! indented text block via [`Display`](std::fmt::Display).

use serde::Serialize;
use std::fmt;

/// One node of an explanation tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    /// The score this node accounts for.
    pub score: f32,
    /// Human-readable description of how the score was produced.
    pub description: String,
    /// Sub-explanations this node is composed of.
    pub children: Vec<Explanation>,
}

impl Explanation {
    /// Create a terminal explanation with no sub-explanations.
    pub fn leaf(score: f32, description: impl Into<String>) -> Self {
        Self {
            score,
            description: description.into(),
            children: Vec::new(),
        }
    }

    /// Create an explanation composed of child explanations.
    pub fn with_children(
        score: f32,
        description: impl Into<String>,
        children: Vec<Explanation>,
    ) -> Self {
        Self {
            score,
            description: description.into(),
            children,
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for _ in 0..depth {
            write!(f, "  ")?;
        }
        writeln!(f, "{} = {}", self.score, self.description)?;
        for child in &self.children {
            child.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
