//! Strategic discourse techniques, grouped into five families:
//! Deflecting, Dividing, Asserting, Personalizing and Framing.
//!
//! Techniques are checked in a fixed table order and each fires at most once
//! per run. Us vs Them has two independent triggers (pronoun polarization and
//! hostile out-group vocabulary); whichever comes first in the table supplies
//! the hint.

use super::{Analyzer, Finding};
use crate::core::{AgendaFamily, AgendaFlag};
use crate::lexicon::LexiconStore;
use crate::text::{compile_patterns, NormalizedText, TermMatcher};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

/// Used by Emotional Sensationalism when the fear lexicon is empty.
pub const DEFAULT_FEAR_TERMS: &[&str] = &[
    "collapse",
    "destroy",
    "threat",
    "danger",
    "catastrophe",
    "crisis",
    "terror",
    "disaster",
    "attack",
];

pub const SENSATIONALISM_HINT: &str = "fear or threat language";

struct Technique {
    family: AgendaFamily,
    name: &'static str,
    hint: &'static str,
    patterns: Vec<Regex>,
}

static TECHNIQUES: Lazy<Vec<Technique>> = Lazy::new(|| {
    vec![
        Technique {
            family: AgendaFamily::Deflecting,
            name: "Whataboutism",
            hint: "counter-accusation or deflection ('what about', 'how about')",
            patterns: compile_patterns(&[
                r"(?i)\b(?:but\s+)?what\s+about\b",
                r"(?i)\bhow\s+about\s+when\b",
                r"(?i)\byet\s+(?:what|how)\s+about\b",
            ]),
        },
        Technique {
            family: AgendaFamily::Deflecting,
            name: "Shifting Goalpost",
            hint: "relativizing by redefining ('this is not X, it's Y')",
            patterns: compile_patterns(&[
                r"(?i)\bthis\s+is\s+not\s+(?:\w+\s+)?(?:,\s*)?(?:it['’]?s\s+)?(?:a\s+)?\w+",
                r"(?i)\bthat['’]?s\s+not\s+\w+[,.]\s*(?:it['’]?s|that['’]?s)\s+",
            ]),
        },
        Technique {
            family: AgendaFamily::Deflecting,
            name: "Side Note",
            hint: "diversion or tangential insertion ('Meanwhile', 'In other news')",
            patterns: compile_patterns(&[
                r"(?im)^\s*meanwhile[,.]\s+",
                r"(?i)\bmeanwhile[,.]\s+\w+",
                r"(?i)\bin\s+other\s+news[,.]\s+",
            ]),
        },
        Technique {
            family: AgendaFamily::Dividing,
            name: "Us vs Them",
            hint: "pronoun polarization ('they want', 'they are')",
            patterns: compile_patterns(&[r"(?i)\b(?:they|them|their)\s+(?:want|are|will|have|had)\s+"]),
        },
        Technique {
            family: AgendaFamily::Dividing,
            name: "Us vs Them",
            hint: "dehumanizing or hostile out-group language",
            patterns: compile_patterns(&[r"(?i)\b(?:poison\w*|enem(?:y|ies)|invaders?|infest\w*)\b"]),
        },
        Technique {
            family: AgendaFamily::Dividing,
            name: "Gatekeeping",
            hint: "defining who 'truly' belongs ('only real', 'true patriots')",
            patterns: compile_patterns(&[
                r"(?i)\b(?:the\s+)?only\s+real\s+\w+",
                r"(?i)\btrue\s+(?:believers?|patriots?|americans?)\b",
                r"(?i)\bgenuine\s+\w+\b",
            ]),
        },
        Technique {
            family: AgendaFamily::Asserting,
            name: "Speculation",
            hint: "speculative or unconfirmed framing ('rumors', 'allegedly')",
            patterns: compile_patterns(&[
                r"(?i)\brumou?rs?\b",
                r"(?i)\ballegedly\b",
                r"(?i)\breportedly\b",
                r"(?i)\bit\s+(?:has\s+)?been\s+(?:widely\s+)?(?:reported|rumou?red)\b",
            ]),
        },
        Technique {
            family: AgendaFamily::Asserting,
            name: "Vagueness",
            hint: "vague authority without specification",
            patterns: compile_patterns(&[
                r"(?i)\bexperts?\s+(?:say|agree|believe|warn)",
                r"(?i)\bstudies?\s+(?:show|suggest|indicate)",
                r"(?i)\bmany\s+(?:people|critics|observers)\s+",
            ]),
        },
        Technique {
            family: AgendaFamily::Personalizing,
            name: "Mud & Honey",
            hint: "personal attack or derogatory framing",
            patterns: compile_patterns(&[
                r"(?i)\b(?:hypocrites?|liars?|crooks?|frauds?)\b",
                r"(?i)\b(?:bedraggled|terrifying)\s+\w+\b",
            ]),
        },
    ]
});

static DEFAULT_FEAR: Lazy<TermMatcher> = Lazy::new(|| TermMatcher::fixed(DEFAULT_FEAR_TERMS));

#[derive(Debug, Clone)]
pub struct HiddenAgendaAnalyzer {
    lexicons: Arc<LexiconStore>,
}

impl HiddenAgendaAnalyzer {
    pub fn new(lexicons: Arc<LexiconStore>) -> Self {
        Self { lexicons }
    }

    pub fn flags(&self, text: &NormalizedText) -> Vec<AgendaFlag> {
        if text.is_blank() {
            return Vec::new();
        }

        let mut flags: Vec<AgendaFlag> = Vec::new();
        for technique in TECHNIQUES.iter() {
            if flags.iter().any(|f| f.technique == technique.name) {
                continue;
            }
            let hit = technique
                .patterns
                .iter()
                .find_map(|pattern| pattern.find(text.raw()));
            if let Some(m) = hit {
                flags.push(AgendaFlag {
                    family: technique.family,
                    technique: technique.name.to_string(),
                    pattern_hint: technique.hint.to_string(),
                    matched_text: text.sentence_at(m.start()).map(str::to_string),
                });
            }
        }

        if let Some(flag) = self.sensationalism(text) {
            flags.push(flag);
        }
        flags
    }

    fn sensationalism(&self, text: &NormalizedText) -> Option<AgendaFlag> {
        let fear = self.lexicons.fear().matcher();
        let matcher = if fear.is_empty() { &*DEFAULT_FEAR } else { fear };

        matcher.first_match(text.raw()).map(|m| AgendaFlag {
            family: AgendaFamily::Framing,
            technique: "Emotional Sensationalism".to_string(),
            pattern_hint: SENSATIONALISM_HINT.to_string(),
            matched_text: text.sentence_at(m.start()).map(str::to_string),
        })
    }
}

impl Analyzer for HiddenAgendaAnalyzer {
    fn name(&self) -> &'static str {
        "hidden_agenda"
    }

    fn analyze(&self, text: &NormalizedText) -> Finding {
        Finding::Agenda(self.flags(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{LexiconCategory, LexiconSet};

    fn analyzer() -> HiddenAgendaAnalyzer {
        HiddenAgendaAnalyzer::new(Arc::new(LexiconStore::builtin().unwrap()))
    }

    fn techniques(text: &str) -> Vec<String> {
        analyzer()
            .flags(&NormalizedText::new(text))
            .into_iter()
            .map(|f| f.technique)
            .collect()
    }

    #[test]
    fn test_deflecting_family() {
        assert_eq!(techniques("But what about their record?"), vec!["Whataboutism"]);
        assert_eq!(
            techniques("Meanwhile, the harbor opened."),
            vec!["Side Note"]
        );
    }

    #[test]
    fn test_us_vs_them_fires_once_with_pronoun_hint() {
        let flags = analyzer().flags(&NormalizedText::new(
            "They want our jobs. The invaders are here.",
        ));
        let us_vs_them: Vec<_> = flags.iter().filter(|f| f.technique == "Us vs Them").collect();
        assert_eq!(us_vs_them.len(), 1);
        assert_eq!(us_vs_them[0].family, AgendaFamily::Dividing);
        assert!(us_vs_them[0].pattern_hint.starts_with("pronoun polarization"));
        assert_eq!(us_vs_them[0].matched_text.as_deref(), Some("They want our jobs."));
    }

    #[test]
    fn test_hostile_vocabulary_alone() {
        let flags = analyzer().flags(&NormalizedText::new("Those people are enemies."));
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].pattern_hint, "dehumanizing or hostile out-group language");
    }

    #[test]
    fn test_asserting_and_personalizing() {
        assert_eq!(
            techniques("Allegedly the mayor is a liar. Experts warn of delays."),
            vec!["Speculation", "Vagueness", "Mud & Honey"]
        );
    }

    #[test]
    fn test_gatekeeping() {
        assert_eq!(techniques("Only true patriots vote."), vec!["Gatekeeping"]);
    }

    #[test]
    fn test_sensationalism_uses_fear_lexicon() {
        let flags = analyzer().flags(&NormalizedText::new("A crisis looms."));
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].family, AgendaFamily::Framing);
        assert_eq!(flags[0].pattern_hint, SENSATIONALISM_HINT);
    }

    #[test]
    fn test_sensationalism_falls_back_when_fear_lexicon_empty() {
        let store = LexiconStore::from_sets(
            LexiconSet::empty(LexiconCategory::Fear),
            LexiconSet::empty(LexiconCategory::Authority),
            LexiconSet::empty(LexiconCategory::Identity),
        )
        .unwrap();
        let analyzer = HiddenAgendaAnalyzer::new(Arc::new(store));
        let flags = analyzer.flags(&NormalizedText::new("A terror campaign."));
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].technique, "Emotional Sensationalism");
    }

    #[test]
    fn test_plain_text_has_no_flags() {
        assert!(techniques("The committee met on Tuesday to review the budget.").is_empty());
        assert!(techniques("   ").is_empty());
    }
}
