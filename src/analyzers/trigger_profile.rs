//! Fear, authority and identity trigger levels.
//!
//! For each lexicon the analyzer counts how many distinct terms appear in the
//! text as whole words and maps that count to a [`Level`]. Repeating the same
//! term does not raise the level; using more of the lexicon does.

use super::{Analyzer, Finding};
use crate::core::{Level, TriggerProfile};
use crate::lexicon::{LexiconCategory, LexiconStore};
use crate::text::NormalizedText;
use std::sync::Arc;

/// Raw hit counts behind a [`TriggerProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriggerCounts {
    pub fear: usize,
    pub authority: usize,
    pub identity: usize,
}

impl TriggerCounts {
    pub fn profile(&self) -> TriggerProfile {
        TriggerProfile {
            fear: Level::from_count(self.fear),
            authority: Level::from_count(self.authority),
            identity: Level::from_count(self.identity),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TriggerProfileAnalyzer {
    lexicons: Arc<LexiconStore>,
}

impl TriggerProfileAnalyzer {
    pub fn new(lexicons: Arc<LexiconStore>) -> Self {
        Self { lexicons }
    }

    pub fn counts(&self, text: &NormalizedText) -> TriggerCounts {
        let hits = |category| self.lexicons.get(category).hits(text.raw());
        TriggerCounts {
            fear: hits(LexiconCategory::Fear),
            authority: hits(LexiconCategory::Authority),
            identity: hits(LexiconCategory::Identity),
        }
    }

    pub fn profile(&self, text: &NormalizedText) -> TriggerProfile {
        self.counts(text).profile()
    }
}

impl Analyzer for TriggerProfileAnalyzer {
    fn name(&self) -> &'static str {
        "trigger_profile"
    }

    fn analyze(&self, text: &NormalizedText) -> Finding {
        Finding::TriggerProfile(self.profile(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconSet;

    fn store() -> Arc<LexiconStore> {
        Arc::new(
            LexiconStore::from_sets(
                LexiconSet::new(LexiconCategory::Fear, ["threat", "collapse", "destroy", "war"])
                    .unwrap(),
                LexiconSet::new(LexiconCategory::Authority, ["must", "law"]).unwrap(),
                LexiconSet::empty(LexiconCategory::Identity),
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_profile_maps_counts_to_levels() {
        let analyzer = TriggerProfileAnalyzer::new(store());
        let text = NormalizedText::new(
            "Either we pass this law, or our nation will collapse. \
             We must stop this threat before they destroy us.",
        );
        let counts = analyzer.counts(&text);
        assert_eq!(
            counts,
            TriggerCounts {
                fear: 3,
                authority: 2,
                identity: 0
            }
        );
        assert_eq!(
            counts.profile(),
            TriggerProfile {
                fear: Level::High,
                authority: Level::Moderate,
                identity: Level::Low,
            }
        );
    }

    #[test]
    fn test_substrings_inside_words_do_not_count() {
        let analyzer = TriggerProfileAnalyzer::new(store());
        let text = NormalizedText::new("She won an award for the lawn display.");
        assert_eq!(analyzer.counts(&text), TriggerCounts::default());
    }

    #[test]
    fn test_empty_text_is_all_low() {
        let analyzer = TriggerProfileAnalyzer::new(store());
        assert_eq!(
            analyzer.profile(&NormalizedText::new("")),
            TriggerProfile::default()
        );
    }
}
