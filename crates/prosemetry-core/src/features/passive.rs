//! Passive voice density.
//!
//! Two patterns run over the lowercased text and their match counts are
//! added: an auxiliary followed by any `-ed` word, and an auxiliary followed
//! by a listed irregular participle. A participle on the list that also ends
//! in `-ed` is therefore counted by both. The count is taken relative to the
//! number of sentences, so the percentage can exceed 100.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::EngineResult;
use crate::stats;
use crate::text::Document;
use crate::word_lists::{IRREGULAR_PARTICIPLES, PASSIVE_AUXILIARIES};

use super::reports::{IssueTag, Measurements, MetricResult, PassiveMeasurements};
use super::Feature;

/// Feature name.
pub const NAME: &str = "passive_voice";

/// Minimum number of sentences to score.
pub const MIN_SENTENCES: usize = 3;

const BANDS: &[(f64, f64, IssueTag)] = &[
    (50.0, 0.7, IssueTag::ExcessivePassive),
    (35.0, 0.5, IssueTag::HighPassive),
    (20.0, 0.2, IssueTag::ModeratePassive),
];
const OTHERWISE: (f64, IssueTag) = (0.1, IssueTag::AppropriateVoiceMix);

static BUILT_IN: LazyLock<PassiveVoice> = LazyLock::new(|| {
    PassiveVoice::new(PASSIVE_AUXILIARIES, IRREGULAR_PARTICIPLES)
        .expect("built-in passive patterns compile")
});

/// Passive construction extractor.
#[derive(Debug, Clone)]
pub struct PassiveVoice {
    regular: Option<Regex>,
    irregular: Option<Regex>,
}

impl PassiveVoice {
    /// Compile the passive patterns from auxiliaries and irregular participles.
    ///
    /// An empty list disables the patterns that depend on it.
    pub fn new<A, P>(auxiliaries: &[A], participles: &[P]) -> EngineResult<Self>
    where
        A: AsRef<str>,
        P: AsRef<str>,
    {
        let Some(aux) = alternation(auxiliaries) else {
            return Ok(Self {
                regular: None,
                irregular: None,
            });
        };

        let regular = Regex::new(&format!(r"\b(?:{aux})\s+\w+ed\b"))?;
        let irregular = alternation(participles)
            .map(|parts| Regex::new(&format!(r"\b(?:{aux})\s+(?:{parts})\b")))
            .transpose()?;

        Ok(Self {
            regular: Some(regular),
            irregular,
        })
    }

    /// Passive constructions in already-lowercased text.
    pub fn count(&self, lower: &str) -> usize {
        [&self.regular, &self.irregular]
            .into_iter()
            .flatten()
            .map(|re| re.find_iter(lower).count())
            .sum()
    }
}

fn alternation<S: AsRef<str>>(words: &[S]) -> Option<String> {
    let escaped: Vec<String> = words
        .iter()
        .map(AsRef::as_ref)
        .filter(|w| !w.is_empty())
        .map(regex::escape)
        .collect();
    (!escaped.is_empty()).then(|| escaped.join("|"))
}

impl Feature for PassiveVoice {
    fn name(&self) -> &'static str {
        NAME
    }

    #[tracing::instrument(skip_all)]
    fn extract(&self, doc: &Document) -> MetricResult {
        let sentences = doc.sentences().len();
        if sentences < MIN_SENTENCES {
            return MetricResult::insufficient("Too few sentences to analyze");
        }

        let count = self.count(&doc.raw_text().to_lowercase());
        let percentage = stats::percentage(count, sentences);
        let (score, issue) = stats::band_above(percentage, BANDS, OTHERWISE);

        MetricResult {
            score,
            issue,
            detail: format!(
                "{count} passive constructions detected ({percentage:.1}% of sentences)"
            ),
            measurements: Some(Measurements::Passive(PassiveMeasurements {
                count,
                percentage: stats::round_to(percentage, 1),
            })),
        }
    }
}

/// Score passive voice density using the built-in patterns.
pub fn passive_voice(doc: &Document) -> MetricResult {
    BUILT_IN.extract(doc)
}

/// Count passive constructions in `text` using the built-in patterns.
pub fn count_passive(text: &str) -> usize {
    BUILT_IN.count(&text.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::segment;

    #[test]
    fn regular_and_irregular_forms() {
        assert_eq!(count_passive("The samples were collected."), 1);
        assert_eq!(count_passive("It was shown clearly."), 1);
        assert_eq!(count_passive("The cat sat."), 0);
    }

    #[test]
    fn listed_ed_participles_count_twice() {
        assert_eq!(count_passive("This was noted."), 2);
    }

    #[test]
    fn excessive_passive() {
        let doc = segment("The data were collected. The model was trained. The results were found.");
        let result = passive_voice(&doc);
        assert_eq!(result.issue, IssueTag::ExcessivePassive);
        assert!((result.score - 0.7).abs() < f64::EPSILON);
        let Some(Measurements::Passive(m)) = result.measurements else {
            panic!("expected passive measurements");
        };
        assert_eq!(m.count, 3);
        assert!((m.percentage - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn two_in_five_sentences_is_high() {
        let doc = segment(
            "The data were collected. The model was trained. We ran home. \
             Dinner came late. Sleep came fast.",
        );
        // 2 of 5 sentences = 40%
        let result = passive_voice(&doc);
        assert_eq!(result.issue, IssueTag::HighPassive);
        assert!((result.score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn one_in_four_sentences_is_moderate() {
        let doc = segment("The data were collected. We ran home. Dinner came late. Sleep came fast.");
        // 1 of 4 sentences = 25%
        let result = passive_voice(&doc);
        assert_eq!(result.issue, IssueTag::ModeratePassive);
        assert!((result.score - 0.2).abs() < f64::EPSILON);
        assert_eq!(result.detail, "1 passive constructions detected (25.0% of sentences)");
    }

    #[test]
    fn active_prose_is_balanced() {
        let doc = segment("We ran the tests. They passed quickly. Everyone went home.");
        let result = passive_voice(&doc);
        assert_eq!(result.issue, IssueTag::AppropriateVoiceMix);
        assert_eq!(result.detail, "0 passive constructions detected (0.0% of sentences)");
    }

    #[test]
    fn empty_lists_disable_patterns() {
        let none: &[&str] = &[];
        let extractor = PassiveVoice::new(none, IRREGULAR_PARTICIPLES).unwrap();
        assert_eq!(extractor.count("it was shown and was tested"), 0);

        let regular_only = PassiveVoice::new(PASSIVE_AUXILIARIES, none).unwrap();
        assert_eq!(regular_only.count("it was shown and was tested"), 1);
    }

    #[test]
    fn too_few_sentences() {
        assert!(passive_voice(&segment("It was done. It was seen.")).is_insufficient());
    }
}
