//! Repeated paragraph openings.
//!
//! Every paragraph's opening (its first sentence, lowercased, cut to
//! [`OPENING_CHARS`]) is compared against every other, and a pair counts as
//! similar when the first [`COMPARE_CHARS`] characters agree. The comparison
//! is quadratic in the number of paragraphs.

use crate::stats;
use crate::text::{Document, first_sentence};

use super::reports::{IssueTag, Measurements, MetricResult, ParagraphMeasurements};
use super::Feature;

/// Feature name.
pub const NAME: &str = "paragraph_patterns";

/// Minimum number of paragraphs to score.
pub const MIN_PARAGRAPHS: usize = 3;

/// Characters kept from each paragraph's first sentence.
pub const OPENING_CHARS: usize = 30;

/// Leading characters two openings must share to count as similar.
pub const COMPARE_CHARS: usize = 20;

const BANDS: &[(f64, f64, IssueTag)] = &[
    (0.3, 0.7, IssueTag::RepetitiveOpenings),
    (0.15, 0.4, IssueTag::SomeRepetition),
];
const OTHERWISE: (f64, IssueTag) = (0.1, IssueTag::VariedOpenings);

/// Paragraph opening repetition extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphPatterns;

impl Feature for ParagraphPatterns {
    fn name(&self) -> &'static str {
        NAME
    }

    fn extract(&self, doc: &Document) -> MetricResult {
        paragraph_patterns(doc)
    }
}

/// Normalized opening of one paragraph.
pub fn opening(paragraph: &str) -> String {
    first_sentence(paragraph)
        .to_lowercase()
        .chars()
        .take(OPENING_CHARS)
        .collect()
}

fn prefix(opening: &str) -> &str {
    opening
        .char_indices()
        .nth(COMPARE_CHARS)
        .map_or(opening, |(end, _)| &opening[..end])
}

/// Score how often paragraphs open the same way.
#[tracing::instrument(skip_all)]
pub fn paragraph_patterns(doc: &Document) -> MetricResult {
    let paragraphs = doc.paragraphs();
    if paragraphs.len() < MIN_PARAGRAPHS {
        return MetricResult::insufficient("Too few paragraphs to analyze");
    }

    let openings: Vec<String> = paragraphs.iter().map(|p| opening(p)).collect();
    let prefixes: Vec<&str> = openings.iter().map(|o| prefix(o)).collect();

    let similar_count: usize = prefixes
        .iter()
        .enumerate()
        .map(|(i, a)| prefixes[i + 1..].iter().filter(|b| a == *b).count())
        .sum();
    let total_paragraphs = paragraphs.len();
    let ratio = stats::ratio(similar_count, total_paragraphs);
    let (score, issue) = stats::band_above(ratio, BANDS, OTHERWISE);

    MetricResult {
        score,
        issue,
        detail: format!(
            "{similar_count} similar paragraph openings detected among {total_paragraphs} paragraphs"
        ),
        measurements: Some(Measurements::Paragraphs(ParagraphMeasurements {
            similar_count,
            total_paragraphs,
        })),
    }
}
