//! Mechanical transition overuse.
//!
//! Counts sentences that open with a stock connective ("Moreover",
//! "It is important to note that", ...). Only the first 50 characters of
//! each sentence are inspected, and a sentence counts at most once: when
//! several phrases prefix it, the one listed first wins.

use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, Anchored, Input, MatchKind, StartKind};

use crate::error::EngineResult;
use crate::stats;
use crate::text::Document;
use crate::word_lists::MECHANICAL_TRANSITIONS;

use super::reports::{IssueTag, Measurements, MetricResult, TransitionMeasurements};
use super::Feature;

/// Feature name.
pub const NAME: &str = "transition_overuse";

/// Minimum number of sentences to score.
pub const MIN_SENTENCES: usize = 3;

/// Characters of each sentence inspected for an opener.
pub const OPENER_WINDOW: usize = 50;

const BANDS: &[(f64, f64, IssueTag)] = &[
    (25.0, 0.9, IssueTag::ExcessiveTransitions),
    (15.0, 0.6, IssueTag::HighTransitions),
    (8.0, 0.3, IssueTag::ModerateTransitions),
];
const OTHERWISE: (f64, IssueTag) = (0.1, IssueTag::AppropriateTransitions);

static BUILT_IN: LazyLock<TransitionOveruse> = LazyLock::new(|| {
    TransitionOveruse::new(MECHANICAL_TRANSITIONS).expect("built-in transitions build a matcher")
});

/// Mechanical transition extractor.
#[derive(Debug, Clone)]
pub struct TransitionOveruse {
    phrases: Vec<String>,
    matcher: AhoCorasick,
}

impl TransitionOveruse {
    /// Build an extractor for `phrases`, in match-priority order.
    ///
    /// Phrases are expected lowercase.
    pub fn new<S: AsRef<str>>(phrases: &[S]) -> EngineResult<Self> {
        let phrases: Vec<String> = phrases.iter().map(|p| p.as_ref().to_string()).collect();
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .start_kind(StartKind::Anchored)
            .build(&phrases)?;
        Ok(Self { phrases, matcher })
    }

    /// The listed phrase that opens `sentence`, if any.
    pub fn opener(&self, sentence: &str) -> Option<&str> {
        let window: String = sentence.to_lowercase().chars().take(OPENER_WINDOW).collect();
        self.matcher
            .find(Input::new(&window).anchored(Anchored::Yes))
            .map(|m| self.phrases[m.pattern().as_usize()].as_str())
    }
}

impl Feature for TransitionOveruse {
    fn name(&self) -> &'static str {
        NAME
    }

    #[tracing::instrument(skip_all, fields(phrases = self.phrases.len()))]
    fn extract(&self, doc: &Document) -> MetricResult {
        let sentences = doc.sentences();
        if sentences.len() < MIN_SENTENCES {
            return MetricResult::insufficient("Too few sentences to analyze");
        }

        let found: Vec<String> = sentences
            .iter()
            .filter_map(|s| self.opener(s))
            .map(str::to_string)
            .collect();
        let count = found.len();
        let percentage = stats::percentage(count, sentences.len());
        let (score, issue) = stats::band_above(percentage, BANDS, OTHERWISE);

        MetricResult {
            score,
            issue,
            detail: format!(
                "{count} sentences ({percentage:.1}%) start with mechanical transitions"
            ),
            measurements: Some(Measurements::Transitions(TransitionMeasurements {
                count,
                percentage: stats::round_to(percentage, 1),
                found,
            })),
        }
    }
}

/// Score mechanical transition openers using the built-in phrase list.
pub fn transition_overuse(doc: &Document) -> MetricResult {
    BUILT_IN.extract(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::segment;

    #[test]
    fn every_sentence_opening_with_moreover() {
        let text = "Moreover, the data agree. Moreover, the model fits. Moreover, the team \
                    agrees. Moreover, the budget holds. Moreover, the plan works.";
        let result = transition_overuse(&segment(text));
        assert_eq!(result.issue, IssueTag::ExcessiveTransitions);
        assert!((result.score - 0.9).abs() < f64::EPSILON);
        let Some(Measurements::Transitions(m)) = result.measurements else {
            panic!("expected transition measurements");
        };
        assert_eq!(m.count, 5);
        assert!((m.percentage - 100.0).abs() < f64::EPSILON);
        assert_eq!(m.found, vec!["moreover"; 5]);
    }

    #[test]
    fn first_listed_phrase_wins() {
        let extractor = TransitionOveruse::new(&["in addition", "in"]).unwrap();
        assert_eq!(extractor.opener("In addition, we ran it."), Some("in addition"));

        let reversed = TransitionOveruse::new(&["in", "in addition"]).unwrap();
        assert_eq!(reversed.opener("In addition, we ran it."), Some("in"));
    }

    #[test]
    fn only_sentence_openers_count() {
        let extractor = TransitionOveruse::new(MECHANICAL_TRANSITIONS).unwrap();
        assert_eq!(extractor.opener("The result, moreover, holds."), None);
        assert_eq!(
            extractor.opener("It is worth noting that the effect vanished."),
            Some("it is worth noting that")
        );
    }

    #[test]
    fn opener_beyond_window_is_ignored() {
        let long = format!("{} tail", "x".repeat(OPENER_WINDOW));
        let extractor = TransitionOveruse::new(&[long.clone()]).unwrap();
        assert_eq!(extractor.opener(&long), None);
    }

    #[test]
    fn one_opener_in_five_is_high() {
        let text = "Moreover, it rained. We went home. Dinner was late. Sleep came fast. \
                    Work resumed.";
        // 1 of 5 sentences = 20%
        let result = transition_overuse(&segment(text));
        assert_eq!(result.issue, IssueTag::HighTransitions);
        assert!((result.score - 0.6).abs() < f64::EPSILON);
        assert_eq!(result.detail, "1 sentences (20.0%) start with mechanical transitions");
    }

    #[test]
    fn one_opener_in_twelve_is_moderate() {
        let text = "We measured it. Then we left. The data were clean. Moreover, it rained. \
                    We went home. Dinner was late. Sleep came fast. Morning was bright. \
                    Coffee helped. Work resumed. Nothing broke. The end came.";
        // 1 of 12 sentences = 8.3%: just over the moderate line
        let result = transition_overuse(&segment(text));
        assert_eq!(result.issue, IssueTag::ModerateTransitions);
        assert!((result.score - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn too_few_sentences() {
        let result = transition_overuse(&segment("Moreover, yes. Furthermore, no."));
        assert!(result.is_insufficient());
    }
}
