//! Pattern-based logical fallacy flags.
//!
//! Each rule is a pure predicate over the text that yields at most one flag
//! per run:
//!
//! - **False Dilemma**: an "either ... or ..." construction inside a sentence,
//!   unless the second option negates the first (doesn't / isn't / not /
//!   never) or the two options are a complementary pair (true/false,
//!   yes/no). Those are genuine dichotomies.
//! - **Appeal to Fear**: threat vocabulary.
//! - **Ad Hominem / Attack**: "they want to <verb>", hostile intent
//!   attributed to a third party.
//!
//! The exclusion list for false dilemmas is deliberately small; many genuine
//! dichotomies will still be flagged.

use super::{Analyzer, Finding};
use crate::core::{FallacyFlag, FallacyType};
use crate::text::{compile_patterns, NormalizedText, TermMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

pub const FALSE_DILEMMA_HINT: &str = "pattern: either X or Y";
pub const APPEAL_TO_FEAR_HINT: &str = "threat language";
pub const AD_HOMINEM_HINT: &str = "they want to [verb] pattern";

static EITHER_OR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)\beither\b(?P<first>.*?)\bor\b(?P<second>.*)").unwrap());

static NEGATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:doesn['’]t|isn['’]t|not|never)\b").unwrap());

const COMPLEMENTARY_PAIRS: &[(&str, &str)] = &[("true", "false"), ("yes", "no")];

/// Threat vocabulary with its regular inflections spelled out.
pub const THREAT_TERMS: &[&str] = &[
    "collapse", "collapses", "collapsed", "collapsing", "destroy", "destroys", "destroyed",
    "destroying", "threat", "threats", "danger", "dangers", "catastrophe", "catastrophes",
    "crisis", "crises",
];

static THREATS: Lazy<TermMatcher> = Lazy::new(|| TermMatcher::fixed(THREAT_TERMS));

static ATTACK_PATTERNS: Lazy<Vec<Regex>> =
    Lazy::new(|| compile_patterns(&[r"(?i)\bthey\s+want\s+to\s+\w+"]));

#[derive(Debug, Clone, Copy, Default)]
pub struct LogicalFallacyAnalyzer;

impl LogicalFallacyAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Flags in rule order: False Dilemma, Appeal to Fear, Ad Hominem.
    pub fn flags(&self, text: &NormalizedText) -> Vec<FallacyFlag> {
        [
            detect_false_dilemma(text),
            detect_appeal_to_fear(text),
            detect_attack(text),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Analyzer for LogicalFallacyAnalyzer {
    fn name(&self) -> &'static str {
        "logical_fallacy"
    }

    fn analyze(&self, text: &NormalizedText) -> Finding {
        Finding::Fallacies(self.flags(text))
    }
}

/// First sentence with a non-excluded "either ... or ..." construction.
pub fn detect_false_dilemma(text: &NormalizedText) -> Option<FallacyFlag> {
    text.sentences()
        .find(|sentence| is_false_dilemma(sentence))
        .map(|sentence| FallacyFlag {
            fallacy: FallacyType::FalseDilemma,
            pattern_hint: FALSE_DILEMMA_HINT.to_string(),
            matched_text: Some(sentence.to_string()),
        })
}

fn is_false_dilemma(sentence: &str) -> bool {
    let Some(caps) = EITHER_OR.captures(sentence) else {
        return false;
    };
    let first = caps.name("first").map_or("", |m| m.as_str());
    let second = caps.name("second").map_or("", |m| m.as_str());

    !(NEGATION.is_match(second) || is_complementary_pair(first, second))
}

fn is_complementary_pair(first: &str, second: &str) -> bool {
    let words = |clause: &str| -> Vec<String> {
        clause
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect()
    };
    let (first, second) = (words(first), words(second));
    let has = |words: &[String], term: &str| words.iter().any(|w| w == term);

    COMPLEMENTARY_PAIRS.iter().any(|(a, b)| {
        (has(&first, a) && has(&second, b)) || (has(&first, b) && has(&second, a))
    })
}

pub fn detect_appeal_to_fear(text: &NormalizedText) -> Option<FallacyFlag> {
    THREATS.first_match(text.raw()).map(|m| FallacyFlag {
        fallacy: FallacyType::AppealToFear,
        pattern_hint: APPEAL_TO_FEAR_HINT.to_string(),
        matched_text: text.sentence_at(m.start()).map(str::to_string),
    })
}

pub fn detect_attack(text: &NormalizedText) -> Option<FallacyFlag> {
    ATTACK_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text.raw()))
        .map(|m| FallacyFlag {
            fallacy: FallacyType::AdHominem,
            pattern_hint: AD_HOMINEM_HINT.to_string(),
            matched_text: text.sentence_at(m.start()).map(str::to_string),
        })
}
