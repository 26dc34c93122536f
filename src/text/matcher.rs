//! Whole-word term matching.
//!
//! Lexicon and keyword rules compare terms case-insensitively and only as
//! whole words: a match may not touch a word character on either side, so
//! "war" never matches inside "award" while "u.s." and "#resist" still match
//! where they stand alone. Multi-word terms ("stand for") match across any
//! run of whitespace.

use regex::{Match, Regex};

/// Build the case-insensitive pattern for a single term.
///
/// The pattern carries no edge anchors. Word isolation is checked against
/// the neighbouring characters by [`TermMatcher`], which also works for terms
/// that begin or end with punctuation.
pub fn term_pattern(term: &str) -> String {
    let body = term
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    format!("(?i){body}")
}

/// Compile a fixed list of rule patterns.
///
/// Only used for patterns written into the source, so a failure here is a
/// programming error caught by the module's tests.
pub fn compile_patterns(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).unwrap_or_else(|e| panic!("invalid rule pattern {p:?}: {e}")))
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn stands_alone(haystack: &str, start: usize, end: usize) -> bool {
    let before = haystack[..start].chars().next_back();
    let after = haystack[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// Leftmost match of `re` at or after `start` that stands alone as a word.
fn find_whole_word<'t>(re: &Regex, haystack: &'t str, mut start: usize) -> Option<Match<'t>> {
    while start <= haystack.len() {
        let m = re.find_at(haystack, start)?;
        if m.end() > m.start() && stands_alone(haystack, m.start(), m.end()) {
            return Some(m);
        }
        // retry one character past the rejected candidate's start
        start = m.start() + haystack[m.start()..].chars().next().map_or(1, char::len_utf8);
    }
    None
}

/// A compiled set of terms, each matched as a whole word.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    terms: Vec<(String, Regex)>,
}

impl TermMatcher {
    pub fn new<I, S>(terms: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|term| {
                let term = term.as_ref();
                Regex::new(&term_pattern(term)).map(|re| (term.to_string(), re))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { terms })
    }

    /// Matcher over a fixed keyword list written into the source.
    pub fn fixed(terms: &[&str]) -> Self {
        Self::new(terms.iter().copied())
            .unwrap_or_else(|e| panic!("invalid keyword list {terms:?}: {e}"))
    }

    pub fn empty() -> Self {
        Self { terms: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|(term, _)| term.as_str())
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.terms
            .iter()
            .any(|(_, re)| find_whole_word(re, text, 0).is_some())
    }

    /// Terms present in `text`, in declaration order, each at most once.
    pub fn matched_terms<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.terms
            .iter()
            .filter(move |(_, re)| find_whole_word(re, text, 0).is_some())
            .map(|(term, _)| term.as_str())
    }

    /// Number of distinct terms present in `text`.
    pub fn count_present(&self, text: &str) -> usize {
        self.matched_terms(text).count()
    }

    /// Leftmost match of any term in `text`.
    pub fn first_match<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        self.terms
            .iter()
            .filter_map(|(_, re)| find_whole_word(re, text, 0))
            .min_by_key(|m| m.start())
    }
}
