//! Model definition parsing.
//!
//! Converts an already-deserialized key/value definition (a
//! [`serde_json::Value`]) into a validated, immutable scoring model in a
//! single pass. Every required field is checked here; the constructed model
//! never re-validates during scoring.
//!
//! Expected shape:
//!
//! ```json
//! {
//!   "trees": [ { "weight": 1.0, "tree": { ... } }, ... ],
//!   "boost": { "feature": "name", "weight": 2.0, "type": "additive" }
//! }
//! ```
//!
//! where a tree node is either `{ "value": n }` or
//! `{ "feature": "name", "threshold": n, "left": node, "right": node }`.
//! The `boost` block is optional, as is its `type` (default multiplicative).
//! Numeric literals may be JSON numbers or numeric strings.

use serde_json::Value;

use crate::boost::{BoostMode, BoostedModel, FeatureBoost};
use crate::ensemble::TreeEnsemble;
use crate::error::ModelError;
use crate::features::FeatureResolver;
use crate::tree::{RegressionTree, TreeNode, SPLIT_SLACK};

/// Parse a complete model definition.
///
/// `features` is the model's declared ordered feature list; it defines the
/// ordinal index every feature vector is aligned to.
pub fn parse_model(
    params: &Value,
    features: &[String],
) -> Result<BoostedModel<TreeEnsemble>, ModelError> {
    let ensemble = parse_ensemble(params, features)?;
    let boost = match params.get("boost") {
        Some(block) => Some(parse_boost(block, ensemble.features())?),
        None => None,
    };
    Ok(BoostedModel::new(ensemble, boost))
}

/// Parse the tree-ensemble portion of a model definition.
pub fn parse_ensemble(params: &Value, features: &[String]) -> Result<TreeEnsemble, ModelError> {
    let resolver = FeatureResolver::new(features.to_vec());

    let entries = params
        .get("trees")
        .and_then(Value::as_array)
        .ok_or(ModelError::MissingField("trees"))?;
    if entries.is_empty() {
        return Err(ModelError::EmptyEnsemble);
    }

    let mut trees = Vec::with_capacity(entries.len());
    for entry in entries {
        trees.push(parse_tree(entry, &resolver)?);
    }
    TreeEnsemble::new(trees, resolver)
}

fn parse_tree(entry: &Value, resolver: &FeatureResolver) -> Result<RegressionTree, ModelError> {
    let weight = entry
        .get("weight")
        .ok_or(ModelError::MissingField("weight"))?;
    let weight = convert_to_float(weight)?;

    let root = entry.get("tree").ok_or(ModelError::MissingField("tree"))?;
    let root = parse_node(root, resolver)?;

    Ok(RegressionTree { weight, root })
}

fn parse_node(node: &Value, resolver: &FeatureResolver) -> Result<TreeNode, ModelError> {
    if let Some(value) = node.get("value") {
        return Ok(TreeNode::Leaf {
            value: convert_to_float(value)?,
        });
    }

    let feature = node
        .get("feature")
        .and_then(Value::as_str)
        .ok_or(ModelError::MissingField("feature"))?
        .to_owned();
    // Trees may reference features pruned from the declared list since
    // training; those resolve to -1 and route left at scoring time.
    let feature_index = resolver.split_index(&feature);

    let threshold = node
        .get("threshold")
        .ok_or(ModelError::MissingField("threshold"))?;
    let threshold = convert_to_float(threshold)? + SPLIT_SLACK;

    let left = node.get("left").ok_or(ModelError::MissingField("left"))?;
    let left = parse_node(left, resolver)?;

    let right = node.get("right").ok_or(ModelError::MissingField("right"))?;
    let right = parse_node(right, resolver)?;

    Ok(TreeNode::Split {
        feature,
        feature_index,
        threshold,
        left: Box::new(left),
        right: Box::new(right),
    })
}

fn parse_boost(block: &Value, resolver: &FeatureResolver) -> Result<FeatureBoost, ModelError> {
    let feature = block
        .get("feature")
        .and_then(Value::as_str)
        .ok_or(ModelError::MissingField("feature"))?
        .to_owned();

    let weight = block
        .get("weight")
        .ok_or(ModelError::MissingField("weight"))?;
    let weight = convert_to_float(weight)?;

    let mode = match block.get("type") {
        None | Some(Value::Null) => BoostMode::default(),
        Some(value) => {
            let name = value
                .as_str()
                .ok_or_else(|| ModelError::InvalidBoostType(value.to_string()))?;
            BoostMode::from_name(name)?
        }
    };

    FeatureBoost::new(resolver, feature, weight, mode)
}

/// Coerce a JSON value into `f32`, accepting numbers and numeric strings.
fn convert_to_float(value: &Value) -> Result<f32, ModelError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .map(|f| f as f32)
            .ok_or_else(|| ModelError::NumberFormat(n.to_string())),
        Value::String(s) => s
            .trim()
            .parse::<f32>()
            .map_err(|_| ModelError::NumberFormat(s.clone())),
        other => Err(ModelError::NumberFormat(other.to_string())),
    }
}
