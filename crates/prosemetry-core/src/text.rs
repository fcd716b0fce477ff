//! Text segmentation.
//!
//! Splits raw text into paragraphs, sentences, and normalized word tokens.
//! Every feature extractor works from the [`Document`] built here and never
//! re-reads the raw text on its own terms.
//!
//! The sentence splitter is deliberately simple: a break happens only where
//! `.`, `!` or `?` is followed by whitespace and an ASCII capital letter.
//! Abbreviations ("Dr. Smith"), decimals and lower-case continuations are
//! mis-split. The scoring bands are calibrated against this exact behavior,
//! so it must stay as it is.

use std::sync::LazyLock;

use regex::Regex;

/// Maximal runs of lowercase ASCII letters delimited by word boundaries.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z]+\b").expect("valid regex"));

/// A segmented block of prose.
///
/// Built once by [`segment`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    raw_text: String,
    paragraphs: Vec<String>,
    sentences: Vec<String>,
    words: Vec<String>,
    token_count: usize,
}

impl Document {
    /// The original input text.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Paragraphs in order, trimmed and non-empty (see [`split_paragraphs`]).
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Sentences in order, trimmed and non-empty.
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Lowercase alphabetic tokens in appearance order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of whitespace-delimited tokens in the raw text.
    ///
    /// Differs from `words().len()`: "don't" is one token but two words, and
    /// "42" is a token but not a word.
    pub const fn token_count(&self) -> usize {
        self.token_count
    }

    /// Returns `true` if the document has no words and no sentences.
    pub fn is_blank(&self) -> bool {
        self.words.is_empty() && self.sentences.is_empty()
    }
}

/// Segment raw text into a [`Document`].
///
/// Never fails. Empty or whitespace-only input produces a document with no
/// sentences and no words.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn segment(text: &str) -> Document {
    let document = Document {
        raw_text: text.to_string(),
        paragraphs: split_paragraphs(text),
        sentences: split_sentences(text),
        words: extract_words(text),
        token_count: text.split_whitespace().count(),
    };
    tracing::debug!(
        paragraphs = document.paragraphs.len(),
        sentences = document.sentences.len(),
        words = document.words.len(),
        "segmented text"
    );
    document
}

/// Split text into paragraphs on blank lines (`"\n\n"`).
///
/// If no non-empty paragraph remains, the whole trimmed text is returned as
/// the single paragraph.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let paragraphs: Vec<String> = text
        .split("\n\n")
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();

    if paragraphs.is_empty() {
        vec![text.trim().to_string()]
    } else {
        paragraphs
    }
}

/// Split text into sentences at terminal punctuation followed by whitespace
/// and an ASCII capital letter.
pub fn split_sentences(text: &str) -> Vec<String> {
    split_at_terminals(text, |next| next.is_ascii_uppercase())
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Return the opening sentence of a paragraph, terminal included.
///
/// Looser than [`split_sentences`]: any terminal punctuation followed by
/// whitespace ends the sentence, whatever the next letter is. A paragraph
/// with no such break is returned whole.
pub fn first_sentence(paragraph: &str) -> &str {
    split_at_terminals(paragraph, |_| true)
        .first()
        .copied()
        .unwrap_or(paragraph)
}

/// Extract lowercase alphabetic words.
///
/// The text is lowercased first, then every maximal run of `a`-`z` bounded
/// by word boundaries is taken. Digits and punctuation never appear in a
/// token; "don't" yields `["don", "t"]`.
pub fn extract_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Split `text` at every run of whitespace that directly follows a terminal
/// character and is directly followed by a character accepted by
/// `accept_next`. The whitespace run is dropped; the terminal stays with the
/// left-hand piece.
fn split_at_terminals(text: &str, accept_next: impl Fn(char) -> bool) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut after_terminal = false;
    let mut iter = text.char_indices().peekable();

    while let Some((idx, ch)) = iter.next() {
        if after_terminal && ch.is_whitespace() {
            while iter.peek().is_some_and(|&(_, c)| c.is_whitespace()) {
                iter.next();
            }
            if let Some(&(next_idx, next_ch)) = iter.peek()
                && accept_next(next_ch)
            {
                pieces.push(&text[start..idx]);
                start = next_idx;
            }
            after_terminal = false;
            continue;
        }
        after_terminal = is_sentence_terminator(ch);
    }

    pieces.push(&text[start..]);
    pieces
}
