//! Abstract placeholder language ("various aspects", "plays a crucial role").

use std::sync::LazyLock;

use crate::stats;
use crate::text::Document;
use crate::word_lists::ABSTRACT_PHRASES;

use super::reports::{AbstractionMeasurements, IssueTag, Measurements, MetricResult, PhraseCount};
use super::Feature;

/// Feature name.
pub const NAME: &str = "abstract_language";

/// Minimum whitespace token count to score.
pub const MIN_TOKENS: usize = 10;

const BANDS: &[(f64, f64, IssueTag)] = &[
    (2.0, 0.9, IssueTag::ExcessiveAbstraction),
    (1.0, 0.6, IssueTag::HighAbstraction),
    (0.5, 0.3, IssueTag::ModerateAbstraction),
];
const OTHERWISE: (f64, IssueTag) = (0.1, IssueTag::AppropriateSpecificity);

static BUILT_IN: LazyLock<AbstractLanguage> =
    LazyLock::new(|| AbstractLanguage::new(ABSTRACT_PHRASES));

/// Abstract phrase density extractor.
#[derive(Debug, Clone)]
pub struct AbstractLanguage {
    phrases: Vec<String>,
}

impl AbstractLanguage {
    /// Build an extractor counting `phrases` (lowercase).
    pub fn new<S: AsRef<str>>(phrases: &[S]) -> Self {
        Self {
            phrases: phrases.iter().map(|p| p.as_ref().to_string()).collect(),
        }
    }

    /// Per-phrase occurrence counts in `lower`, list order, zeros omitted.
    ///
    /// Overlapping phrases are each counted; occurrences of one phrase are
    /// non-overlapping.
    pub fn occurrences(&self, lower: &str) -> Vec<PhraseCount> {
        self.phrases
            .iter()
            .filter(|p| !p.is_empty())
            .filter_map(|phrase| {
                let count = lower.matches(phrase.as_str()).count();
                (count > 0).then(|| PhraseCount {
                    phrase: phrase.clone(),
                    count,
                })
            })
            .collect()
    }
}

impl Feature for AbstractLanguage {
    fn name(&self) -> &'static str {
        NAME
    }

    #[tracing::instrument(skip_all, fields(phrases = self.phrases.len()))]
    fn extract(&self, doc: &Document) -> MetricResult {
        let tokens = doc.token_count();
        if tokens < MIN_TOKENS {
            return MetricResult::insufficient("Too few words to analyze");
        }

        let found = self.occurrences(&doc.raw_text().to_lowercase());
        let total_count: usize = found.iter().map(|f| f.count).sum();
        let density = stats::ratio(total_count, tokens) * 100.0;
        let (score, issue) = stats::band_above(density, BANDS, OTHERWISE);

        MetricResult {
            score,
            issue,
            detail: format!(
                "{total_count} abstract phrases found (density: {density:.2} per 100 words)"
            ),
            measurements: Some(Measurements::Abstraction(AbstractionMeasurements {
                total_count,
                density: stats::round_to(density, 2),
                found,
            })),
        }
    }
}

/// Score abstract phrase density using the built-in phrase list.
pub fn abstract_language(doc: &Document) -> MetricResult {
    BUILT_IN.extract(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::segment;

    #[test]
    fn dense_abstraction() {
        // 2 phrases in 20 tokens = 10 per 100
        let doc = segment(
            "Culture plays a crucial role in society and in terms of growth the \
             market matters to every single person today.",
        );
        let result = abstract_language(&doc);
        assert_eq!(result.issue, IssueTag::ExcessiveAbstraction);
        assert!((result.score - 0.9).abs() < f64::EPSILON);
        let Some(Measurements::Abstraction(m)) = result.measurements else {
            panic!("expected abstraction measurements");
        };
        assert_eq!(m.total_count, 2);
        assert!((m.density - 10.0).abs() < f64::EPSILON);
        assert_eq!(m.found[0].phrase, "in terms of");
        assert_eq!(m.found[1].phrase, "plays a crucial role");
    }

    #[test]
    fn one_phrase_in_sixty_one_tokens_is_high() {
        // 1 phrase in 61 tokens = 1.64 per 100
        let text = format!(
            "In terms of cost the plan works. {}",
            "The cat sat on the mat. ".repeat(9)
        );
        let result = abstract_language(&segment(&text));
        assert_eq!(result.issue, IssueTag::HighAbstraction);
        assert!((result.score - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn one_phrase_in_121_tokens_is_moderate() {
        // 1 phrase in 121 tokens = 0.83 per 100
        let text = format!(
            "In terms of cost the plan works. {}",
            "The cat sat on the mat. ".repeat(19)
        );
        let result = abstract_language(&segment(&text));
        assert_eq!(result.issue, IssueTag::ModerateAbstraction);
        assert!((result.score - 0.3).abs() < f64::EPSILON);
        let Some(Measurements::Abstraction(m)) = result.measurements else {
            panic!("expected abstraction measurements");
        };
        assert_eq!(m.total_count, 1);
    }

    #[test]
    fn overlapping_phrases_both_count() {
        let extractor = AbstractLanguage::new(&["with regard", "with regard to"]);
        let found = extractor.occurrences("with regard to this, with regard to that");
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|f| f.count == 2));
    }

    #[test]
    fn plain_text_is_specific() {
        let doc = segment("The cat sat on the mat and then the dog ran past the old red barn.");
        let result = abstract_language(&doc);
        assert_eq!(result.issue, IssueTag::AppropriateSpecificity);
        assert!((result.score - 0.1).abs() < f64::EPSILON);
        assert!(result.detail.starts_with("0 abstract phrases found"));
    }

    #[test]
    fn too_few_tokens() {
        let result = abstract_language(&segment("Various aspects matter."));
        assert!(result.is_insufficient());
        assert_eq!(result.detail, "Too few words to analyze");
    }
}
