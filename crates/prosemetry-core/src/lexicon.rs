//! Word lists bundled for the extractors.
//!
//! A [`Lexicon`] starts from the built-in lists in
//! [`word_lists`](crate::word_lists) and can be extended (never replaced)
//! with [`LexiconExtensions`] from configuration. Extractors take their
//! phrase sets from a lexicon at construction time, so adding a phrase never
//! touches extractor logic.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::word_lists::{
    ABSTRACT_PHRASES, ACADEMIC_WORDS, IRREGULAR_PARTICIPLES, MECHANICAL_TRANSITIONS,
    PASSIVE_AUXILIARIES, TRANSITION_CATEGORIES,
};

/// Extra entries appended to the built-in lists.
///
/// Entries are lowercased and trimmed; blanks and duplicates of existing
/// entries are dropped.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LexiconExtensions {
    /// Additional mechanical sentence openers.
    pub transitions: Option<Vec<String>>,
    /// Additional abstract placeholder phrases.
    pub abstract_phrases: Option<Vec<String>>,
    /// Additional academic vocabulary.
    pub academic_words: Option<Vec<String>>,
}

impl LexiconExtensions {
    /// Returns `true` if no extension list is set.
    pub const fn is_empty(&self) -> bool {
        self.transitions.is_none() && self.abstract_phrases.is_none() && self.academic_words.is_none()
    }
}

/// The complete set of word lists used by one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    /// Mechanical sentence openers, in match-priority order.
    pub transitions: Vec<String>,
    /// Abstract placeholder phrases.
    pub abstract_phrases: Vec<String>,
    /// Academic vocabulary.
    pub academic_words: HashSet<String>,
    /// Transition words grouped by category, in report order.
    pub transition_categories: Vec<(String, Vec<String>)>,
    /// Auxiliaries that introduce passive constructions.
    pub passive_auxiliaries: Vec<String>,
    /// Irregular past participles.
    pub irregular_participles: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            transitions: owned(MECHANICAL_TRANSITIONS),
            abstract_phrases: owned(ABSTRACT_PHRASES),
            academic_words: ACADEMIC_WORDS.iter().map(|w| (*w).to_string()).collect(),
            transition_categories: TRANSITION_CATEGORIES
                .iter()
                .map(|(name, words)| ((*name).to_string(), owned(words)))
                .collect(),
            passive_auxiliaries: owned(PASSIVE_AUXILIARIES),
            irregular_participles: owned(IRREGULAR_PARTICIPLES),
        }
    }
}

impl Lexicon {
    /// Built-in lists extended with `extensions`.
    #[tracing::instrument(skip_all)]
    pub fn extended(extensions: &LexiconExtensions) -> Self {
        let mut lexicon = Self::default();
        if let Some(ref extra) = extensions.transitions {
            append_unique(&mut lexicon.transitions, extra);
        }
        if let Some(ref extra) = extensions.abstract_phrases {
            append_unique(&mut lexicon.abstract_phrases, extra);
        }
        if let Some(ref extra) = extensions.academic_words {
            lexicon
                .academic_words
                .extend(extra.iter().filter_map(|w| normalize(w)));
        }
        tracing::debug!(
            transitions = lexicon.transitions.len(),
            abstract_phrases = lexicon.abstract_phrases.len(),
            academic_words = lexicon.academic_words.len(),
            "lexicon built"
        );
        lexicon
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

fn normalize(entry: &str) -> Option<String> {
    let entry = entry.trim().to_lowercase();
    (!entry.is_empty()).then_some(entry)
}

fn append_unique(list: &mut Vec<String>, extra: &[String]) {
    for entry in extra.iter().filter_map(|e| normalize(e)) {
        if !list.contains(&entry) {
            list.push(entry);
        }
    }
}
