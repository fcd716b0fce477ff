//! Side-by-side comparison of two quality profiles.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::profile::QualityProfile;

/// One compared figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Delta {
    /// Value for the first document.
    pub before: f64,
    /// Value for the second document.
    pub after: f64,
    /// `after - before`.
    pub change: f64,
}

impl Delta {
    fn new(before: f64, after: f64) -> Self {
        Self {
            before,
            after,
            change: after - before,
        }
    }
}

/// Differences between two profiles, second minus first.
///
/// A section missing from either profile contributes 0 on that side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProfileComparison {
    /// Mean sentence length.
    pub mean_sentence_length: Delta,
    /// Sentence length standard deviation.
    pub sentence_length_stdev: Delta,
    /// Type-token ratio.
    pub type_token_ratio: Delta,
    /// Lexical density.
    pub lexical_density: Delta,
    /// Transitions per 100 words.
    pub transition_density: Delta,
    /// Passive constructions relative to sentences, in percent.
    pub passive_percentage: Delta,
}

/// One row of the comparison table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonRow {
    /// Row label.
    pub label: &'static str,
    /// The compared figures.
    pub delta: Delta,
    /// Decimal places shown.
    pub precision: usize,
    /// Suffix printed after each figure.
    pub unit: &'static str,
}

impl ComparisonRow {
    const fn new(label: &'static str, delta: Delta, precision: usize, unit: &'static str) -> Self {
        Self {
            label,
            delta,
            precision,
            unit,
        }
    }
}

impl ProfileComparison {
    /// Table rows in report order.
    ///
    /// Ratios show three decimals, the passive share one decimal with `%`.
    pub fn rows(&self) -> [ComparisonRow; 6] {
        [
            ComparisonRow::new("Mean Length", self.mean_sentence_length, 2, ""),
            ComparisonRow::new("Std Deviation", self.sentence_length_stdev, 2, ""),
            ComparisonRow::new("Type-Token Ratio", self.type_token_ratio, 3, ""),
            ComparisonRow::new("Lexical Density", self.lexical_density, 3, ""),
            ComparisonRow::new("Density/100 words", self.transition_density, 2, ""),
            ComparisonRow::new("Passive Voice", self.passive_percentage, 1, "%"),
        ]
    }
}

/// Compare two profiles.
#[tracing::instrument(skip_all)]
pub fn compare(a: &QualityProfile, b: &QualityProfile) -> ProfileComparison {
    let mean = |p: &QualityProfile| p.sentence_stats.as_ref().map_or(0.0, |s| s.mean);
    let stdev = |p: &QualityProfile| p.sentence_stats.as_ref().map_or(0.0, |s| s.stdev);
    let ttr = |p: &QualityProfile| p.vocabulary.as_ref().map_or(0.0, |v| v.type_token_ratio);
    let density = |p: &QualityProfile| p.vocabulary.as_ref().map_or(0.0, |v| v.lexical_density);

    ProfileComparison {
        mean_sentence_length: Delta::new(mean(a), mean(b)),
        sentence_length_stdev: Delta::new(stdev(a), stdev(b)),
        type_token_ratio: Delta::new(ttr(a), ttr(b)),
        lexical_density: Delta::new(density(a), density(b)),
        transition_density: Delta::new(
            a.transitions.density_per_100_words,
            b.transitions.density_per_100_words,
        ),
        passive_percentage: Delta::new(a.passive_voice.percentage, b.passive_voice.percentage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::profile::QualityProfiler;
    use crate::text::segment;

    fn profile(text: &str) -> QualityProfile {
        QualityProfiler::new(&Lexicon::default())
            .unwrap()
            .profile(&segment(text))
    }

    fn sentences_of(len: usize, count: usize) -> String {
        let sentence = format!("Word {}.", vec!["word"; len - 1].join(" "));
        vec![sentence; count].join(" ")
    }

    #[test]
    fn mean_length_delta() {
        let a = profile(&sentences_of(12, 3));
        let b = profile(&sentences_of(18, 3));
        let cmp = compare(&a, &b);
        assert!((cmp.mean_sentence_length.before - 12.0).abs() < f64::EPSILON);
        assert!((cmp.mean_sentence_length.after - 18.0).abs() < f64::EPSILON);
        assert!((cmp.mean_sentence_length.change - 6.0).abs() < f64::EPSILON);
        assert_eq!(format!("{:+.2}", cmp.mean_sentence_length.change), "+6.00");
    }

    #[test]
    fn missing_sections_count_as_zero() {
        let empty = profile("");
        let full = profile("The data were collected. We wrote it up.");
        let cmp = compare(&full, &empty);
        assert!((cmp.passive_percentage.change + 50.0).abs() < f64::EPSILON);
        assert!(cmp.type_token_ratio.after.abs() < f64::EPSILON);
        assert!(cmp.type_token_ratio.change < 0.0);
    }

    #[test]
    fn rows_carry_per_figure_precision() {
        let a = profile(&sentences_of(12, 3));
        let rows = compare(&a, &a).rows();
        let ttr = rows.iter().find(|r| r.label == "Type-Token Ratio").unwrap();
        assert_eq!((ttr.precision, ttr.unit), (3, ""));
        let passive = rows.last().unwrap();
        assert_eq!((passive.label, passive.precision, passive.unit), ("Passive Voice", 1, "%"));
    }

    #[test]
    fn identical_profiles_have_no_change() {
        let a = profile("Some text here. And more text there.");
        let cmp = compare(&a, &a.clone());
        assert!(cmp.rows().iter().all(|row| row.delta.change.abs() < f64::EPSILON));
    }
}
