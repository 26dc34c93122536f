//! Text normalization shared by every analyzer.
//!
//! A [`NormalizedText`] is computed once per pipeline run and handed to each
//! analyzer by reference. It keeps the raw text untouched (rules run their own
//! case-insensitive patterns against it) and records word tokens and sentence
//! spans using fixed, simple rules:
//!
//! - **Words**: runs of non-whitespace. Punctuation is not stripped.
//! - **Sentences**: the text is cut after every `.`, `!` or `?` that is
//!   followed by whitespace or the end of the text. The delimiter stays with
//!   the preceding sentence and blank fragments are dropped.

pub mod matcher;

pub use matcher::{compile_patterns, term_pattern, TermMatcher};

use std::ops::Range;

/// Raw text plus its word tokens and sentence spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    raw: String,
    words: Vec<Range<usize>>,
    sentences: Vec<Range<usize>>,
}

impl NormalizedText {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let words = word_spans(&raw);
        let sentences = sentence_spans(&raw);
        Self {
            raw,
            words,
            sentences,
        }
    }

    /// The original text, unchanged.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_blank(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(move |span| &self.raw[span.clone()])
    }

    pub fn sentences(&self) -> impl Iterator<Item = &str> + '_ {
        self.sentences.iter().map(move |span| &self.raw[span.clone()])
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Sentence containing the given byte offset of the raw text.
    ///
    /// Offsets that fall in the whitespace between two sentences resolve to
    /// the following sentence.
    pub fn sentence_at(&self, offset: usize) -> Option<&str> {
        self.sentences
            .iter()
            .find(|span| offset < span.end)
            .map(|span| &self.raw[span.clone()])
    }
}

fn word_spans(raw: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = None;

    for (idx, ch) in raw.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(s)) => {
                spans.push(s..idx);
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push(s..raw.len());
    }

    spans
}

fn sentence_spans(raw: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut chars = raw.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        let at_boundary = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
        if at_boundary {
            let end = idx + ch.len_utf8();
            push_trimmed(raw, start..end, &mut spans);
            start = end;
        }
    }
    push_trimmed(raw, start..raw.len(), &mut spans);

    spans
}

/// Push `span` with surrounding whitespace removed, skipping blank fragments.
fn push_trimmed(raw: &str, span: Range<usize>, spans: &mut Vec<Range<usize>>) {
    let fragment = &raw[span.clone()];
    let leading = fragment.len() - fragment.trim_start().len();
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        let begin = span.start + leading;
        spans.push(begin..begin + trimmed.len());
    }
}
