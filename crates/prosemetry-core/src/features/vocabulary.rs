//! Vocabulary diversity as a type-token ratio.

use std::collections::HashSet;

use crate::stats;
use crate::text::Document;

use super::reports::{IssueTag, Measurements, MetricResult, VocabularyMeasurements};
use super::Feature;

/// Feature name.
pub const NAME: &str = "vocabulary_diversity";

/// Minimum alphabetic word count to score.
pub const MIN_WORDS: usize = 10;

const BANDS: &[(f64, f64, IssueTag)] = &[
    (0.40, 0.8, IssueTag::LowDiversity),
    (0.50, 0.5, IssueTag::ModerateDiversity),
];
const OTHERWISE: (f64, IssueTag) = (0.2, IssueTag::GoodDiversity);

/// Type-token ratio extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct VocabularyDiversity;

impl Feature for VocabularyDiversity {
    fn name(&self) -> &'static str {
        NAME
    }

    fn extract(&self, doc: &Document) -> MetricResult {
        vocabulary_diversity(doc)
    }
}

/// Score vocabulary diversity over the document's alphabetic words.
#[tracing::instrument(skip_all)]
pub fn vocabulary_diversity(doc: &Document) -> MetricResult {
    let words = doc.words();
    if words.len() < MIN_WORDS {
        return MetricResult::insufficient("Too few words to analyze");
    }

    let unique_words = words.iter().collect::<HashSet<_>>().len();
    let total_words = words.len();
    let ttr = stats::ratio(unique_words, total_words);
    let (score, issue) = stats::band_below(ttr, BANDS, OTHERWISE);

    MetricResult {
        score,
        issue,
        detail: format!("Type-Token Ratio: {ttr:.3} ({unique_words} unique / {total_words} total)"),
        measurements: Some(Measurements::Vocabulary(VocabularyMeasurements {
            ttr: stats::round_to(ttr, 3),
            unique_words,
            total_words,
        })),
    }
}
