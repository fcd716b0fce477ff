//! Entry points tying segmentation, extraction and aggregation together.

use crate::aggregate::{AnalysisResult, TextStats, WeightTable, aggregate_with};
use crate::compare::{ProfileComparison, compare};
use crate::error::{EngineError, EngineResult};
use crate::features::FeatureSet;
use crate::lexicon::Lexicon;
use crate::profile::{QualityProfile, QualityProfiler};
use crate::text::{Document, segment};

/// A configured analysis pipeline.
///
/// Holds the registered features, the weight table and the quality
/// profiler. Building one compiles the phrase matchers once; every call
/// after that is pure.
#[derive(Debug)]
pub struct Engine {
    features: FeatureSet,
    weights: WeightTable,
    profiler: QualityProfiler,
}

impl Engine {
    /// Pipeline with every built-in feature over `lexicon`.
    pub fn new(lexicon: &Lexicon) -> EngineResult<Self> {
        Ok(Self {
            features: FeatureSet::from_lexicon(lexicon)?,
            weights: WeightTable::default(),
            profiler: QualityProfiler::new(lexicon)?,
        })
    }

    /// Restrict detection to the named features.
    pub fn with_features<S: AsRef<str>>(mut self, names: &[S]) -> EngineResult<Self> {
        self.features = self.features.select(names)?;
        Ok(self)
    }

    /// Replace the weight table.
    #[must_use]
    pub fn with_weights(mut self, weights: WeightTable) -> Self {
        self.weights = weights;
        self
    }

    /// Names of the features `detect` will run.
    pub fn feature_names(&self) -> Vec<&'static str> {
        self.features.names()
    }

    /// Score `text` for machine-generated patterns.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn detect(&self, text: &str) -> EngineResult<AnalysisResult> {
        let doc = non_blank(text)?;
        let mut result = aggregate_with(self.features.extract_all(&doc), &self.weights);
        result.text_stats = Some(TextStats::of(&doc));
        tracing::info!(
            overall = result.overall_score,
            tier = result.tier.label(),
            "detection complete"
        );
        Ok(result)
    }

    /// Descriptive quality statistics for `text`.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn profile(&self, text: &str) -> EngineResult<QualityProfile> {
        Ok(self.profiler.profile(&non_blank(text)?))
    }

    /// Profile both texts and diff them, second minus first.
    pub fn compare(&self, first: &str, second: &str) -> EngineResult<ProfileComparison> {
        Ok(compare(&self.profile(first)?, &self.profile(second)?))
    }
}

fn non_blank(text: &str) -> EngineResult<Document> {
    if text.trim().is_empty() {
        return Err(EngineError::EmptyInput);
    }
    Ok(segment(text))
}

/// Detect with the built-in lexicon and every feature.
pub fn detect(text: &str) -> EngineResult<AnalysisResult> {
    Engine::new(&Lexicon::default())?.detect(text)
}

/// Profile with the built-in lexicon.
pub fn profile(text: &str) -> EngineResult<QualityProfile> {
    Engine::new(&Lexicon::default())?.profile(text)
}
