//! Descriptive quality statistics.
//!
//! A [`QualityProfile`] reports sentence-length distribution, vocabulary
//! richness, academic vocabulary, categorized transitions, passive voice and
//! simple readability figures. Nothing here is scored or aggregated; the
//! figures are for a writer to read or for [`compare`](crate::compare) to
//! diff.
//!
//! Sections that need sentences or words are `None` when the document has
//! none. All figures are rounded as they are stored.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::features::PassiveVoice;
use crate::lexicon::Lexicon;
use crate::stats;
use crate::text::Document;

/// Sentences shorter than this many words count as short.
pub const SHORT_SENTENCE_WORDS: usize = 12;

/// Sentences longer than this many words count as long.
pub const LONG_SENTENCE_WORDS: usize = 22;

/// Words longer than this many characters count as complex.
pub const COMPLEX_WORD_CHARS: usize = 6;

/// Words longer than this many characters count as content words.
pub const CONTENT_WORD_CHARS: usize = 3;

/// Entries kept in each most-frequent list.
pub const TOP_WORDS: usize = 10;

/// Complete quality profile of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QualityProfile {
    /// Sentence-length statistics. `None` without sentences.
    pub sentence_stats: Option<SentenceStats>,
    /// Vocabulary richness. `None` without words.
    pub vocabulary: Option<VocabularyStats>,
    /// Academic vocabulary usage. `None` without words.
    pub academic_vocabulary: Option<AcademicStats>,
    /// Transition words by category.
    pub transitions: TransitionStats,
    /// Passive constructions.
    pub passive_voice: PassiveStats,
    /// Readability figures. `None` without sentences or words.
    pub readability: Option<ReadabilityStats>,
}

/// Sentence lengths in whitespace-delimited words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentenceStats {
    /// Number of sentences.
    pub count: usize,
    /// Shortest sentence.
    pub min: usize,
    /// Longest sentence.
    pub max: usize,
    /// Mean length (2 dp).
    pub mean: f64,
    /// Median length (2 dp).
    pub median: f64,
    /// Sample standard deviation (2 dp); 0 for a single sentence.
    pub stdev: f64,
    /// Short / medium / long split.
    pub distribution: LengthDistribution,
}

/// Sentence count per length bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LengthDistribution {
    /// Fewer than 12 words.
    pub short: usize,
    /// Share of short sentences, in percent (1 dp).
    pub short_pct: f64,
    /// 12 to 22 words inclusive.
    pub medium: usize,
    /// Share of medium sentences, in percent (1 dp).
    pub medium_pct: f64,
    /// More than 22 words.
    pub long: usize,
    /// Share of long sentences, in percent (1 dp).
    pub long_pct: f64,
}

/// A word with its frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordCount {
    /// The word.
    pub word: String,
    /// Occurrences.
    pub count: usize,
}

/// Vocabulary richness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VocabularyStats {
    /// All alphabetic words.
    pub total_words: usize,
    /// Distinct words.
    pub unique_words: usize,
    /// Type-token ratio (3 dp).
    pub type_token_ratio: f64,
    /// Share of words longer than three characters (3 dp).
    pub lexical_density: f64,
    /// Ten most frequent words.
    pub most_common: Vec<WordCount>,
}

/// Academic vocabulary usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AcademicStats {
    /// Words found in the academic word set.
    pub academic_word_count: usize,
    /// Share of all words, in percent (2 dp).
    pub percentage: f64,
    /// Ten most frequent academic words.
    pub top_academic_words: Vec<WordCount>,
}

/// Count of transition words in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryCount {
    /// Category name.
    pub category: String,
    /// Occurrences of the category's words.
    pub count: usize,
}

/// Transition word usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TransitionStats {
    /// Occurrences across all categories.
    pub total_transitions: usize,
    /// Occurrences per 100 words (2 dp).
    pub density_per_100_words: f64,
    /// Per-category counts, in category order.
    pub by_category: Vec<CategoryCount>,
}

/// Passive voice usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PassiveStats {
    /// Passive constructions found.
    pub passive_constructions: usize,
    /// Constructions per sentence (2 dp).
    pub per_sentence: f64,
    /// Constructions relative to sentences, in percent (1 dp).
    pub percentage: f64,
}

/// Simple readability figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityStats {
    /// Alphabetic words per sentence (2 dp).
    pub avg_sentence_length: f64,
    /// Characters per word (2 dp).
    pub avg_word_length: f64,
    /// Words longer than six characters.
    pub complex_words: usize,
    /// Share of complex words, in percent (1 dp).
    pub complex_word_pct: f64,
}

/// Builds [`QualityProfile`]s from a lexicon.
#[derive(Debug, Clone)]
pub struct QualityProfiler {
    academic_words: HashSet<String>,
    transition_categories: Vec<(String, Vec<String>)>,
    passive: PassiveVoice,
}

impl QualityProfiler {
    /// Profiler using the word lists in `lexicon`.
    pub fn new(lexicon: &Lexicon) -> EngineResult<Self> {
        Ok(Self {
            academic_words: lexicon.academic_words.clone(),
            transition_categories: lexicon.transition_categories.clone(),
            passive: PassiveVoice::new(
                &lexicon.passive_auxiliaries,
                &lexicon.irregular_participles,
            )?,
        })
    }

    /// Profile a segmented document.
    #[tracing::instrument(skip_all)]
    pub fn profile(&self, doc: &Document) -> QualityProfile {
        let lower = doc.raw_text().to_lowercase();
        QualityProfile {
            sentence_stats: sentence_stats(doc),
            vocabulary: vocabulary_stats(doc),
            academic_vocabulary: self.academic_stats(doc),
            transitions: self.transition_stats(doc, &lower),
            passive_voice: self.passive_stats(doc, &lower),
            readability: readability_stats(doc),
        }
    }

    fn academic_stats(&self, doc: &Document) -> Option<AcademicStats> {
        let words = doc.words();
        if words.is_empty() {
            return None;
        }

        let academic: Vec<&str> = words
            .iter()
            .map(String::as_str)
            .filter(|w| self.academic_words.contains(*w))
            .collect();

        Some(AcademicStats {
            academic_word_count: academic.len(),
            percentage: stats::round_to(stats::percentage(academic.len(), words.len()), 2),
            top_academic_words: top_words(academic),
        })
    }

    fn transition_stats(&self, doc: &Document, lower: &str) -> TransitionStats {
        let by_category: Vec<CategoryCount> = self
            .transition_categories
            .iter()
            .map(|(category, words)| CategoryCount {
                category: category.clone(),
                count: words.iter().map(|w| transition_occurrences(lower, w)).sum(),
            })
            .collect();
        let total_transitions = by_category.iter().map(|c| c.count).sum();

        TransitionStats {
            total_transitions,
            density_per_100_words: stats::round_to(
                stats::percentage(total_transitions, doc.words().len()),
                2,
            ),
            by_category,
        }
    }

    fn passive_stats(&self, doc: &Document, lower: &str) -> PassiveStats {
        let count = self.passive.count(lower);
        let sentences = doc.sentences().len();
        PassiveStats {
            passive_constructions: count,
            per_sentence: stats::round_to(stats::ratio(count, sentences), 2),
            percentage: stats::round_to(stats::percentage(count, sentences), 1),
        }
    }
}

/// `" word "` plus `"word, "`, each counted without overlap.
fn transition_occurrences(lower: &str, word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }
    lower.matches(&format!(" {word} ")).count() + lower.matches(&format!("{word}, ")).count()
}

fn top_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Vec<WordCount> {
    stats::most_common(words, TOP_WORDS)
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

fn sentence_stats(doc: &Document) -> Option<SentenceStats> {
    let lengths: Vec<usize> = doc
        .sentences()
        .iter()
        .map(|s| s.split_whitespace().count())
        .collect();
    let min = *lengths.iter().min()?;
    let max = *lengths.iter().max()?;
    let values = stats::as_f64(&lengths);

    let short = lengths.iter().filter(|&&l| l < SHORT_SENTENCE_WORDS).count();
    let long = lengths.iter().filter(|&&l| l > LONG_SENTENCE_WORDS).count();
    let medium = lengths.len() - short - long;
    let pct = |n| stats::round_to(stats::percentage(n, lengths.len()), 1);

    Some(SentenceStats {
        count: lengths.len(),
        min,
        max,
        mean: stats::round_to(stats::mean(&values), 2),
        median: stats::round_to(stats::median(&values), 2),
        stdev: stats::round_to(stats::sample_std_dev(&values), 2),
        distribution: LengthDistribution {
            short,
            short_pct: pct(short),
            medium,
            medium_pct: pct(medium),
            long,
            long_pct: pct(long),
        },
    })
}

fn vocabulary_stats(doc: &Document) -> Option<VocabularyStats> {
    let words = doc.words();
    if words.is_empty() {
        return None;
    }

    let unique_words = words.iter().collect::<HashSet<_>>().len();
    let content_words = words.iter().filter(|w| w.len() > CONTENT_WORD_CHARS).count();

    Some(VocabularyStats {
        total_words: words.len(),
        unique_words,
        type_token_ratio: stats::round_to(stats::ratio(unique_words, words.len()), 3),
        lexical_density: stats::round_to(stats::ratio(content_words, words.len()), 3),
        most_common: top_words(words.iter().map(String::as_str)),
    })
}

fn readability_stats(doc: &Document) -> Option<ReadabilityStats> {
    let words = doc.words();
    let sentences = doc.sentences();
    if words.is_empty() || sentences.is_empty() {
        return None;
    }

    let total_chars: usize = words.iter().map(String::len).sum();
    let complex_words = words.iter().filter(|w| w.len() > COMPLEX_WORD_CHARS).count();

    Some(ReadabilityStats {
        avg_sentence_length: stats::round_to(stats::ratio(words.len(), sentences.len()), 2),
        avg_word_length: stats::round_to(stats::ratio(total_chars, words.len()), 2),
        complex_words,
        complex_word_pct: stats::round_to(stats::percentage(complex_words, words.len()), 1),
    })
}
