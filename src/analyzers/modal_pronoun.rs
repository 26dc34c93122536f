//! Modal verb and pronoun framing analysis.
//!
//! Both work on whitespace tokens with every non-word character removed and
//! the rest lowercased, so a token must equal the word exactly: "We're"
//! becomes "were", "can't" becomes "cant" and "i.e." becomes "ie", none of
//! which count. Modal verbs are reported in the fixed list order (not text
//! order). Pronouns are counted per occurrence; all six keys are always
//! reported. When the text uses both an in-group pronoun (we/us) and an
//! out-group pronoun (they/them) the analyzer adds an insight line.

use super::{Analyzer, Finding};
use crate::core::{Pronoun, PronounFraming};
use crate::text::NormalizedText;
use std::collections::HashSet;

pub const MODAL_VERBS: &[&str] = &[
    "must", "should", "could", "would", "might", "can", "will", "shall",
];

pub const IN_GROUP_INSIGHT: &str = "Possible in-group / out-group framing";

/// Lowercased tokens with non-word characters stripped; empty tokens dropped.
fn bare_words(text: &NormalizedText) -> impl Iterator<Item = String> + '_ {
    text.words()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || *c == '_')
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalPronounResult {
    pub modal_verbs: Vec<String>,
    pub pronoun_framing: PronounFraming,
    pub pronoun_insight: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ModalPronounAnalyzer;

impl ModalPronounAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn modal_verbs(&self, text: &NormalizedText) -> Vec<String> {
        let present: HashSet<String> = bare_words(text).collect();
        MODAL_VERBS
            .iter()
            .filter(|modal| present.contains(**modal))
            .map(|modal| modal.to_string())
            .collect()
    }

    pub fn pronoun_framing(&self, text: &NormalizedText) -> PronounFraming {
        let words: Vec<String> = bare_words(text).collect();
        PronounFraming::from_counts(Pronoun::ALL.into_iter().map(|p| {
            let count = words.iter().filter(|w| w.as_str() == p.as_str()).count();
            (p, count)
        }))
    }

    pub fn frame(&self, text: &NormalizedText) -> ModalPronounResult {
        let pronoun_framing = self.pronoun_framing(text);
        ModalPronounResult {
            modal_verbs: self.modal_verbs(text),
            pronoun_insight: insight(&pronoun_framing),
            pronoun_framing,
        }
    }
}

fn insight(framing: &PronounFraming) -> Option<String> {
    (framing.in_group() > 0 && framing.out_group() > 0).then(|| IN_GROUP_INSIGHT.to_string())
}

impl Analyzer for ModalPronounAnalyzer {
    fn name(&self) -> &'static str {
        "modal_pronoun"
    }

    fn analyze(&self, text: &NormalizedText) -> Finding {
        let result = self.frame(text);
        Finding::ModalPronoun {
            modal_verbs: result.modal_verbs,
            pronoun_framing: result.pronoun_framing,
            pronoun_insight: result.pronoun_insight,
        }
    }
}
