//! Sentence-length uniformity.
//!
//! Human prose mixes short and long sentences; generated prose tends to
//! settle on one length. The spread is measured as the coefficient of
//! variation (sample standard deviation over mean) of per-sentence word
//! counts. A lower ratio means a higher score.

use crate::stats;
use crate::text::Document;

use super::reports::{IssueTag, Measurements, MetricResult, UniformityMeasurements};
use super::Feature;

/// Feature name.
pub const NAME: &str = "sentence_uniformity";

/// Minimum number of sentences to score.
pub const MIN_SENTENCES: usize = 3;

const BANDS: &[(f64, f64, IssueTag)] = &[
    (0.25, 0.8, IssueTag::HighUniformity),
    (0.35, 0.5, IssueTag::ModerateUniformity),
];
const OTHERWISE: (f64, IssueTag) = (0.1, IssueTag::GoodVariation);

/// Sentence-length uniformity extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceUniformity;

impl Feature for SentenceUniformity {
    fn name(&self) -> &'static str {
        NAME
    }

    fn extract(&self, doc: &Document) -> MetricResult {
        sentence_uniformity(doc)
    }
}

/// Score how uniform the sentence lengths are.
#[tracing::instrument(skip_all)]
pub fn sentence_uniformity(doc: &Document) -> MetricResult {
    let sentences = doc.sentences();
    if sentences.len() < MIN_SENTENCES {
        return MetricResult::insufficient("Too few sentences to analyze");
    }

    let lengths: Vec<f64> = sentences
        .iter()
        .map(|s| s.split_whitespace().count() as f64)
        .collect();
    let avg = stats::mean(&lengths);
    let std_dev = stats::sample_std_dev(&lengths);
    let variance_ratio = if avg > 0.0 { std_dev / avg } else { 0.0 };

    let (score, issue) = stats::band_below(variance_ratio, BANDS, OTHERWISE);

    MetricResult {
        score,
        issue,
        detail: format!(
            "Avg sentence length: {avg:.1} words, Std dev: {std_dev:.1} (variance ratio: {variance_ratio:.2})"
        ),
        measurements: Some(Measurements::Uniformity(UniformityMeasurements {
            avg_length: stats::round_to(avg, 1),
            std_dev: stats::round_to(std_dev, 1),
            variance_ratio: stats::round_to(variance_ratio, 2),
        })),
    }
}
