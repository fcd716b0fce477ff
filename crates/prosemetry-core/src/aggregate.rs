//! Weighted aggregation of feature scores into a probability tier.
//!
//! The overall score is a plain weighted sum over the features present in
//! both the weight table and the results. A feature that is missing from
//! either side contributes nothing, and the remaining weights are not
//! renormalised, so a partial run scores lower than a full one.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::features::{
    MetricResult, abstraction, paragraphs, passive, transitions, uniformity, vocabulary,
};
use crate::text::Document;

/// Built-in feature weights. They sum to 1.0.
pub const DEFAULT_WEIGHTS: &[(&str, f64)] = &[
    (uniformity::NAME, 0.25),
    (transitions::NAME, 0.20),
    (abstraction::NAME, 0.20),
    (vocabulary::NAME, 0.15),
    (passive::NAME, 0.10),
    (paragraphs::NAME, 0.10),
];

/// Mapping from feature name to weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    weights: Vec<(String, f64)>,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHTS.iter().copied())
    }
}

impl WeightTable {
    /// Build a table from `(name, weight)` pairs. Later duplicates win.
    pub fn new<'a>(weights: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let mut table = Self {
            weights: Vec::new(),
        };
        for (name, weight) in weights {
            match table.weights.iter_mut().find(|(n, _)| n == name) {
                Some(entry) => entry.1 = weight,
                None => table.weights.push((name.to_string(), weight)),
            }
        }
        table
    }

    /// Weight for `name`, if the table has one.
    pub fn weight(&self, name: &str) -> Option<f64> {
        self.weights
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, w)| *w)
    }

    /// `(name, weight)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(n, w)| (n.as_str(), *w))
    }
}

/// Likelihood band for the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Score of 0.35 or less.
    Low,
    /// Score above 0.35.
    Moderate,
    /// Score above 0.5.
    High,
    /// Score above 0.7.
    VeryHigh,
}

impl Tier {
    /// Map a score to its tier. Boundaries belong to the lower tier.
    pub fn from_score(score: f64) -> Self {
        if score > 0.7 {
            Self::VeryHigh
        } else if score > 0.5 {
            Self::High
        } else if score > 0.35 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// Advice for a document in this tier.
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::VeryHigh => "Text shows strong AI patterns. Significant rewriting recommended.",
            Self::High => "Text shows multiple AI patterns. Rewriting recommended.",
            Self::Moderate => "Text shows some AI patterns. Selective rewriting recommended.",
            Self::Low => "Text appears relatively natural. Minor adjustments may help.",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Paragraph, sentence and token counts for a detection report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextStats {
    /// Paragraphs.
    pub paragraphs: usize,
    /// Sentences.
    pub sentences: usize,
    /// Whitespace-delimited tokens.
    pub words: usize,
}

impl TextStats {
    /// Counts for a segmented document.
    pub fn of(doc: &Document) -> Self {
        Self {
            paragraphs: doc.paragraphs().len(),
            sentences: doc.sentences().len(),
            words: doc.token_count(),
        }
    }
}

/// Full detection report for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResult {
    /// Weighted sum of feature scores (3 dp).
    pub overall_score: f64,
    /// Band of the overall score.
    pub tier: Tier,
    /// Advice matching the tier.
    pub recommendation: String,
    /// Per-feature results keyed by feature name.
    pub metrics: BTreeMap<String, MetricResult>,
    /// Document counts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_stats: Option<TextStats>,
}

/// Aggregate with the default weights.
pub fn aggregate(results: BTreeMap<String, MetricResult>) -> AnalysisResult {
    aggregate_with(results, &WeightTable::default())
}

/// Aggregate with a custom weight table.
#[tracing::instrument(skip_all, fields(metrics = results.len()))]
pub fn aggregate_with(
    results: BTreeMap<String, MetricResult>,
    weights: &WeightTable,
) -> AnalysisResult {
    let overall: f64 = weights
        .iter()
        .filter_map(|(name, weight)| results.get(name).map(|r| r.score * weight))
        .sum();
    let tier = Tier::from_score(overall);
    tracing::debug!(overall, tier = tier.label(), "aggregated");

    AnalysisResult {
        overall_score: crate::stats::round_to(overall, 3),
        tier,
        recommendation: tier.recommendation().to_string(),
        metrics: results,
        text_stats: None,
    }
}
