//! Feature extractors.
//!
//! Each heuristic is an independent unit implementing [`Feature`]: it reads a
//! segmented [`Document`] and returns a [`MetricResult`]. No extractor looks
//! at another's output. A [`FeatureSet`] holds the registered extractors and
//! runs them into a name-keyed map that the aggregator reduces.
//!
//! Every extractor has a minimum sample size. Below it the result has score
//! `0`, issue [`IssueTag::InsufficientData`] and a detail naming the
//! shortfall, so degenerate input never produces a spurious high score.

pub mod abstraction;
pub mod paragraphs;
pub mod passive;
pub mod reports;
pub mod transitions;
pub mod uniformity;
pub mod vocabulary;

use std::collections::BTreeMap;

pub use abstraction::AbstractLanguage;
pub use paragraphs::ParagraphPatterns;
pub use passive::PassiveVoice;
pub use reports::{IssueTag, Measurements, MetricResult};
pub use transitions::TransitionOveruse;
pub use uniformity::SentenceUniformity;
pub use vocabulary::VocabularyDiversity;

use crate::error::{EngineError, EngineResult};
use crate::lexicon::Lexicon;
use crate::text::Document;

/// Names of all built-in features, in report order.
pub const ALL_FEATURES: &[&str] = &[
    uniformity::NAME,
    transitions::NAME,
    abstraction::NAME,
    vocabulary::NAME,
    passive::NAME,
    paragraphs::NAME,
];

/// A single heuristic over a segmented document.
pub trait Feature: Send + Sync {
    /// Stable snake_case name, used as the key in results and weight tables.
    fn name(&self) -> &'static str;

    /// Score the document. Must not panic on any segmented input.
    fn extract(&self, doc: &Document) -> MetricResult;
}

/// Ordered collection of registered extractors.
pub struct FeatureSet {
    features: Vec<Box<dyn Feature>>,
}

impl std::fmt::Debug for FeatureSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureSet")
            .field("features", &self.names())
            .finish()
    }
}

impl FeatureSet {
    /// All built-in features, reading phrase lists from `lexicon`.
    pub fn from_lexicon(lexicon: &Lexicon) -> EngineResult<Self> {
        Ok(Self {
            features: vec![
                Box::new(SentenceUniformity),
                Box::new(TransitionOveruse::new(&lexicon.transitions)?),
                Box::new(AbstractLanguage::new(&lexicon.abstract_phrases)),
                Box::new(VocabularyDiversity),
                Box::new(PassiveVoice::new(
                    &lexicon.passive_auxiliaries,
                    &lexicon.irregular_participles,
                )?),
                Box::new(ParagraphPatterns),
            ],
        })
    }

    /// All built-in features with the built-in lexicon.
    pub fn standard() -> EngineResult<Self> {
        Self::from_lexicon(&Lexicon::default())
    }

    /// Keep only the named features, preserving registry order.
    ///
    /// Fails on the first name no registered feature answers to.
    pub fn select<S: AsRef<str>>(mut self, names: &[S]) -> EngineResult<Self> {
        let registered = self.names();
        if let Some(unknown) = names
            .iter()
            .map(AsRef::as_ref)
            .find(|name| !registered.contains(name))
        {
            return Err(EngineError::UnknownFeature {
                name: unknown.to_string(),
                available: registered.join(", "),
            });
        }

        self.features
            .retain(|f| names.iter().any(|n| n.as_ref() == f.name()));
        Ok(self)
    }

    /// Add a custom feature after the built-ins.
    pub fn register(&mut self, feature: Box<dyn Feature>) {
        self.features.push(feature);
    }

    /// Registered feature names, in registry order.
    pub fn names(&self) -> Vec<&'static str> {
        self.features.iter().map(|f| f.name()).collect()
    }

    /// Number of registered features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns `true` if no feature is registered.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Run every registered feature over `doc`.
    #[tracing::instrument(skip_all, fields(features = self.features.len()))]
    pub fn extract_all(&self, doc: &Document) -> BTreeMap<String, MetricResult> {
        self.features
            .iter()
            .map(|feature| {
                let result = feature.extract(doc);
                tracing::debug!(
                    feature = feature.name(),
                    score = result.score,
                    issue = result.issue.as_str(),
                    "feature extracted"
                );
                (feature.name().to_string(), result)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::segment;

    #[test]
    fn standard_set_registers_all_features() {
        let set = FeatureSet::standard().unwrap();
        assert_eq!(set.names(), ALL_FEATURES);
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn select_keeps_registry_order() {
        let set = FeatureSet::standard()
            .unwrap()
            .select(&["paragraph_patterns", "sentence_uniformity"])
            .unwrap();
        assert_eq!(set.names(), vec!["sentence_uniformity", "paragraph_patterns"]);
    }

    #[test]
    fn select_rejects_unknown_names() {
        let err = FeatureSet::standard()
            .unwrap()
            .select(&["sentence_uniformity", "burstiness"])
            .unwrap_err();
        match err {
            EngineError::UnknownFeature { name, available } => {
                assert_eq!(name, "burstiness");
                assert!(available.contains("passive_voice"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extract_all_keys_by_name() {
        let set = FeatureSet::standard().unwrap();
        let results = set.extract_all(&segment("One sentence only."));
        assert_eq!(results.len(), 6);
        assert!(results["sentence_uniformity"].is_insufficient());
    }

    struct Constant;

    impl Feature for Constant {
        fn name(&self) -> &'static str {
            "constant"
        }

        fn extract(&self, _doc: &Document) -> MetricResult {
            MetricResult {
                score: 1.0,
                issue: IssueTag::HighUniformity,
                detail: "always".to_string(),
                measurements: None,
            }
        }
    }

    #[test]
    fn custom_features_can_be_registered() {
        let mut set = FeatureSet::standard().unwrap();
        set.register(Box::new(Constant));
        let results = set.extract_all(&segment("Text."));
        assert!((results["constant"].score - 1.0).abs() < f64::EPSILON);
    }
}
