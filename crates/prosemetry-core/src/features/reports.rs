//! Result types produced by the feature extractors.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output of one feature extractor.
///
/// Created once per extractor invocation and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MetricResult {
    /// Concern score in `[0, 1]`; higher means more machine-like.
    pub score: f64,
    /// Which threshold band the measurement fell into.
    pub issue: IssueTag,
    /// Human-readable summary.
    pub detail: String,
    /// Extractor-specific figures. Absent when the sample was too small.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurements: Option<Measurements>,
}

impl MetricResult {
    /// A zero-score result for input below the extractor's minimum sample.
    pub fn insufficient(detail: impl Into<String>) -> Self {
        Self {
            score: 0.0,
            issue: IssueTag::InsufficientData,
            detail: detail.into(),
            measurements: None,
        }
    }

    /// Returns `true` if the extractor declined to score the input.
    pub const fn is_insufficient(&self) -> bool {
        matches!(self.issue, IssueTag::InsufficientData)
    }
}

/// Categorical label naming the band a measurement fell into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueTag {
    /// Minimum sample size not met; score is zero.
    InsufficientData,

    /// Sentence lengths barely vary.
    HighUniformity,
    /// Sentence lengths vary a little.
    ModerateUniformity,
    /// Sentence lengths vary naturally.
    GoodVariation,

    /// More than a quarter of sentences open with a mechanical transition.
    ExcessiveTransitions,
    /// More than 15% of sentences open with a mechanical transition.
    HighTransitions,
    /// More than 8% of sentences open with a mechanical transition.
    ModerateTransitions,
    /// Mechanical openers are rare.
    AppropriateTransitions,

    /// More than 2 abstract phrases per 100 words.
    ExcessiveAbstraction,
    /// More than 1 abstract phrase per 100 words.
    HighAbstraction,
    /// More than 0.5 abstract phrases per 100 words.
    ModerateAbstraction,
    /// Abstract placeholders are rare.
    AppropriateSpecificity,

    /// Type-token ratio below 0.40.
    LowDiversity,
    /// Type-token ratio below 0.50.
    ModerateDiversity,
    /// Type-token ratio of 0.50 or more.
    GoodDiversity,

    /// Passive constructions in more than half of the sentences.
    ExcessivePassive,
    /// Passive constructions in more than 35% of sentences.
    HighPassive,
    /// Passive constructions in more than 20% of sentences.
    ModeratePassive,
    /// Passive and active voice are balanced.
    AppropriateVoiceMix,

    /// Many paragraphs open the same way.
    RepetitiveOpenings,
    /// Some paragraphs open the same way.
    SomeRepetition,
    /// Paragraph openings differ.
    VariedOpenings,
}

impl IssueTag {
    /// Returns the tag as a snake_case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InsufficientData => "insufficient_data",
            Self::HighUniformity => "high_uniformity",
            Self::ModerateUniformity => "moderate_uniformity",
            Self::GoodVariation => "good_variation",
            Self::ExcessiveTransitions => "excessive_transitions",
            Self::HighTransitions => "high_transitions",
            Self::ModerateTransitions => "moderate_transitions",
            Self::AppropriateTransitions => "appropriate_transitions",
            Self::ExcessiveAbstraction => "excessive_abstraction",
            Self::HighAbstraction => "high_abstraction",
            Self::ModerateAbstraction => "moderate_abstraction",
            Self::AppropriateSpecificity => "appropriate_specificity",
            Self::LowDiversity => "low_diversity",
            Self::ModerateDiversity => "moderate_diversity",
            Self::GoodDiversity => "good_diversity",
            Self::ExcessivePassive => "excessive_passive",
            Self::HighPassive => "high_passive",
            Self::ModeratePassive => "moderate_passive",
            Self::AppropriateVoiceMix => "appropriate_voice_mix",
            Self::RepetitiveOpenings => "repetitive_openings",
            Self::SomeRepetition => "some_repetition",
            Self::VariedOpenings => "varied_openings",
        }
    }
}

impl std::fmt::Display for IssueTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extractor-specific figures attached to a [`MetricResult`].
///
/// Serialized without a tag; each variant has a distinct field set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Measurements {
    /// Sentence-length uniformity.
    Uniformity(UniformityMeasurements),
    /// Mechanical transition openers.
    Transitions(TransitionMeasurements),
    /// Abstract phrase density.
    Abstraction(AbstractionMeasurements),
    /// Vocabulary diversity.
    Vocabulary(VocabularyMeasurements),
    /// Passive voice density.
    Passive(PassiveMeasurements),
    /// Paragraph opening repetition.
    Paragraphs(ParagraphMeasurements),
}

// -- Sentence Uniformity ----------------------------------------------------

/// Sentence-length spread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UniformityMeasurements {
    /// Mean sentence length in words (1 dp).
    pub avg_length: f64,
    /// Sample standard deviation of sentence lengths (1 dp).
    pub std_dev: f64,
    /// Standard deviation divided by mean (2 dp).
    pub variance_ratio: f64,
}

// -- Transitions ------------------------------------------------------------

/// Mechanical transition openers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TransitionMeasurements {
    /// Sentences opening with a listed transition.
    pub count: usize,
    /// Share of sentences, in percent (1 dp).
    pub percentage: f64,
    /// The matched transition for each flagged sentence, in sentence order.
    pub found: Vec<String>,
}

// -- Abstraction ------------------------------------------------------------

/// Abstract placeholder phrases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AbstractionMeasurements {
    /// Total phrase occurrences, summed across phrases.
    pub total_count: usize,
    /// Occurrences per 100 words (2 dp).
    pub density: f64,
    /// Phrases found at least once, in list order.
    pub found: Vec<PhraseCount>,
}

/// A phrase with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PhraseCount {
    /// The phrase.
    pub phrase: String,
    /// Number of occurrences.
    pub count: usize,
}

// -- Vocabulary -------------------------------------------------------------

/// Type-token ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VocabularyMeasurements {
    /// Unique words divided by total words (3 dp).
    pub ttr: f64,
    /// Distinct words.
    pub unique_words: usize,
    /// All words.
    pub total_words: usize,
}

// -- Passive Voice ----------------------------------------------------------

/// Passive construction density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PassiveMeasurements {
    /// Pattern matches across the text.
    pub count: usize,
    /// Matches relative to sentence count, in percent (1 dp).
    pub percentage: f64,
}

// -- Paragraph Patterns -----------------------------------------------------

/// Repeated paragraph openings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ParagraphMeasurements {
    /// Paragraph pairs whose openings match.
    pub similar_count: usize,
    /// Paragraphs examined.
    pub total_paragraphs: usize,
}
