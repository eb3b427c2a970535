//! Heuristic feature boost composed over a base scoring model.
//!
//! [`BoostedModel`] decorates any [`Scorer`] with an optional adjustment
//! driven by a single designated feature. The multiplicative mode inverts the
//! weighted boost value when the base score is negative; that heuristic is
//! kept verbatim for behavioral compatibility with deployed models, including
//! its IEEE-754 behavior near zero (see `evaluate`).

use serde::Serialize;

use crate::error::ModelError;
use crate::explain::Explanation;
use crate::features::FeatureResolver;
use crate::scorer::Scorer;

/// How the weighted boost value combines with the base score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoostMode {
    /// `base + weight * boost_value`
    Additive,
    /// `base * (weight * boost_value)`, inverted for negative base scores.
    #[default]
    Multiplicative,
}

impl BoostMode {
    /// Parse the `type` value of a boost block.
    pub fn from_name(name: &str) -> Result<Self, ModelError> {
        match name {
            "additive" => Ok(BoostMode::Additive),
            "multiplicative" => Ok(BoostMode::Multiplicative),
            other => Err(ModelError::InvalidBoostType(other.to_owned())),
        }
    }

    /// Combining-operator label used in explanations.
    fn operator_label(self) -> &'static str {
        match self {
            BoostMode::Additive => "sum",
            BoostMode::Multiplicative => "prod",
        }
    }
}

/// A resolved boost configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureBoost {
    /// Declared name of the boosting feature.
    pub feature: String,
    /// Ordinal index of the boosting feature; resolution is strict.
    pub feature_index: usize,
    /// Weight applied to the feature value.
    pub weight: f32,
    /// Composition mode.
    pub mode: BoostMode,
}

impl FeatureBoost {
    /// Resolve a boost configuration against the model's feature list.
    ///
    /// Unlike tree splits, an unknown boost feature aborts construction.
    pub fn new(
        resolver: &FeatureResolver,
        feature: String,
        weight: f32,
        mode: BoostMode,
    ) -> Result<Self, ModelError> {
        let feature_index = resolver.boost_index(&feature)?;
        Ok(Self {
            feature,
            feature_index,
            weight,
            mode,
        })
    }
}

/// Everything one evaluation of a boosted model produces.
///
/// Score and explanation both read from this, so no per-call intermediate is
/// ever cached on the shared model instance.
struct BoostEvaluation {
    base: f32,
    boost_value: f32,
    weighted: f32,
    score: f32,
}

/// A scoring model with an optional heuristic feature boost on top.
#[derive(Debug, Clone)]
pub struct BoostedModel<M> {
    inner: M,
    boost: Option<FeatureBoost>,
}

impl<M: Scorer> BoostedModel<M> {
    /// Compose a boost (or none) over a base model.
    pub fn new(inner: M, boost: Option<FeatureBoost>) -> Self {
        Self { inner, boost }
    }

    /// A pass-through wrapper with no boost configured.
    pub fn unboosted(inner: M) -> Self {
        Self { inner, boost: None }
    }

    /// The wrapped base model.
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// The boost configuration, if any.
    pub fn boost(&self) -> Option<&FeatureBoost> {
        self.boost.as_ref()
    }

    /// Single evaluation feeding both score and explain.
    ///
    /// The feature vector must cover the declared feature list; the boost
    /// index was validated against that list at construction.
    ///
    /// In multiplicative mode with a negative base score the weighted boost
    /// value is inverted before multiplying. When it is zero the division
    /// follows IEEE-754: `1.0 / 0.0` is `+inf` and `1.0 / -0.0` is `-inf`,
    /// and the final product carries the resulting sign.
    fn evaluate(&self, boost: &FeatureBoost, features: &[f32]) -> BoostEvaluation {
        let base = self.inner.score(features);
        let boost_value = features[boost.feature_index];
        let mut weighted = boost.weight * boost_value;

        let score = match boost.mode {
            BoostMode::Multiplicative => {
                if base < 0.0 {
                    weighted = 1.0 / weighted;
                }
                base * weighted
            }
            BoostMode::Additive => base + weighted,
        };

        BoostEvaluation {
            base,
            boost_value,
            weighted,
            score,
        }
    }
}

impl<M: Scorer> Scorer for BoostedModel<M> {
    fn score(&self, features: &[f32]) -> f32 {
        match &self.boost {
            None => self.inner.score(features),
            Some(boost) => self.evaluate(boost, features).score,
        }
    }

    fn explain(&self, features: &[f32], final_score: f32) -> Explanation {
        let Some(boost) = &self.boost else {
            let base = self.inner.score(features);
            return self.inner.explain(features, base);
        };

        let eval = self.evaluate(boost, features);
        let boost_term = Explanation::leaf(
            eval.weighted,
            format!(
                "{} weight on feature [{}] : {}",
                boost.weight, boost.feature, eval.boost_value
            ),
        );
        let base_term = self.inner.explain(features, eval.base);

        Explanation::with_children(
            final_score,
            format!(
                "boosted model applied to features, {} of:",
                boost.mode.operator_label()
            ),
            vec![boost_term, base_term],
        )
    }
}
