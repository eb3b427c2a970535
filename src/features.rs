//! Feature name resolution against a model's declared feature list.
//!
//! A model declares an ordered list of feature names; a feature's ordinal
//! index is its position in that list (0-based), assigned once at model
//! construction. The index is local to the model and distinct from any
//! global feature-store id.
//!
//! Resolution has two policies, on purpose:
//! - tree splits tolerate unknown names (sentinel `-1`), because trees may
//!   have been trained against a feature set that has since been pruned;
//! - boost targets must resolve, because a boost silently reading a missing
//!   feature would corrupt every score.

use std::collections::HashMap;

use crate::error::ModelError;

/// Maps feature names to their ordinal index in a model's declared list.
#[derive(Debug, Clone)]
pub struct FeatureResolver {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl FeatureResolver {
    /// Build a resolver from the declared ordered feature list.
    ///
    /// A duplicated name resolves to its last declared position.
    pub fn new(names: Vec<String>) -> Self {
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            index.insert(name.clone(), i);
        }
        Self { names, index }
    }

    /// Number of declared features.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the declared list is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The declared name at an ordinal index.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Resolve a tree-split feature reference.
    ///
    /// Unknown names return `-1`; split construction never fails on them.
    pub fn split_index(&self, name: &str) -> i32 {
        match self.index.get(name) {
            Some(&i) => i as i32,
            None => -1,
        }
    }

    /// Resolve a boost feature reference.
    ///
    /// Unknown names abort model construction.
    pub fn boost_index(&self, name: &str) -> Result<usize, ModelError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| ModelError::UnknownBoostFeature(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> FeatureResolver {
        FeatureResolver::new(vec!["title_match".into(), "freshness".into()])
    }

    #[test]
    fn split_index_resolves_declared_names() {
        let resolver = resolver();
        assert_eq!(resolver.split_index("title_match"), 0);
        assert_eq!(resolver.split_index("freshness"), 1);
    }

    #[test]
    fn split_index_tolerates_unknown_names() {
        assert_eq!(resolver().split_index("pruned_feature"), -1);
    }

    #[test]
    fn boost_index_rejects_unknown_names() {
        let err = resolver().boost_index("pruned_feature").unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownBoostFeature("pruned_feature".into())
        );
    }

    #[test]
    fn boost_index_resolves_declared_names() {
        assert_eq!(resolver().boost_index("freshness").unwrap(), 1);
    }

    #[test]
    fn duplicate_names_resolve_to_last_position() {
        let resolver = FeatureResolver::new(vec!["f".into(), "f".into()]);
        assert_eq!(resolver.split_index("f"), 1);
    }
}
