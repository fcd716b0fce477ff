//! Curated word lists for the feature extractors.
//!
//! Mechanical transitions, abstract placeholder phrases, academic
//! vocabulary, categorized transition words, passive auxiliaries and
//! irregular participles. These are data, not logic: extractors read them
//! through a [`Lexicon`](crate::lexicon::Lexicon), which can extend them from
//! configuration.
//!
//! Lists whose order matters (first match wins) are slices; pure membership
//! sets are `HashSet`s.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Sentence openers typical of machine-generated academic prose.
///
/// Order matters: when two entries both prefix a sentence, the earlier one
/// is reported.
pub static MECHANICAL_TRANSITIONS: &[&str] = &[
    "moreover",
    "furthermore",
    "additionally",
    "in addition",
    "it is important to note that",
    "it should be noted that",
    "it is worth noting that",
    "notably",
    "significantly",
];

/// Abstract placeholder phrases that stand in for concrete claims.
pub static ABSTRACT_PHRASES: &[&str] = &[
    "various aspects",
    "multiple factors",
    "different perspectives",
    "in terms of",
    "with regard to",
    "with respect to",
    "it can be seen that",
    "it has been shown that",
    "plays an important role",
    "plays a crucial role",
    "serves as",
    "acts as",
    "functions as",
];

/// Common academic vocabulary.
pub static ACADEMIC_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "analyze", "analysis", "approach", "area", "assess", "assume", "authority", "available",
        "benefit", "concept", "consistent", "constitute", "context", "contrast", "create", "data",
        "define", "derive", "distribute", "economy", "environment", "establish", "estimate",
        "evident", "export", "factor", "financial", "formula", "function", "identify", "income",
        "indicate", "individual", "interpret", "involve", "issue", "labor", "legal", "legislate",
        "major", "method", "occur", "percent", "period", "policy", "principle", "proceed",
        "process", "require", "research", "respond", "role", "section", "sector", "significant",
        "similar", "source", "specific", "structure", "theory", "variable",
    ]
    .into_iter()
    .collect()
});

/// Transition words grouped by rhetorical function.
///
/// Categories are reported in this order.
pub static TRANSITION_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "additive",
        &["moreover", "furthermore", "additionally", "also", "besides"],
    ),
    (
        "adversative",
        &["however", "nevertheless", "nonetheless", "yet", "still"],
    ),
    (
        "causal",
        &["therefore", "thus", "consequently", "hence", "accordingly"],
    ),
    (
        "sequential",
        &["first", "second", "finally", "subsequently", "meanwhile"],
    ),
];

/// Forms of "to be" that introduce a passive construction.
pub static PASSIVE_AUXILIARIES: &[&str] = &["is", "are", "was", "were", "been", "be", "being"];

/// Irregular past participles that the `-ed` pattern cannot see.
///
/// Entries ending in "-ed" also match the regular pattern, so "was noted"
/// counts once under each.
pub static IRREGULAR_PARTICIPLES: &[&str] = &[
    "shown",
    "demonstrated",
    "observed",
    "found",
    "noted",
    "seen",
    "considered",
    "analyzed",
];
