//! Satire and hyperbole heuristics.
//!
//! Four signal detectors look for markers of playful exaggeration rather than
//! genuine persuasion. Each signal carries an internal weight; the strongest
//! one decides the [`ContentType`]. Weights stay private, only the signals
//! and the categorical hint are reported.

use super::{Analyzer, Finding};
use crate::core::{ContentType, SatireAssessment, SatireSignal, SatireSignalKind};
use crate::text::{compile_patterns, NormalizedText};
use once_cell::sync::Lazy;
use regex::Regex;

const SATIRE_THRESHOLD: f64 = 0.6;
const UNCERTAIN_THRESHOLD: f64 = 0.35;

const DISPROPORTIONATE_WEIGHT: f64 = 0.75;
const INCONGRUITY_WEIGHT: f64 = 0.8;
const SELF_UNDERMINING_WEIGHT: f64 = 0.7;

static ABSURD_OUTCOMES: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_patterns(&[
        r"(?i)\bruled by cats\b",
        r"(?i)\bzombie\w*\b",
        r"(?i)\bchaos ruled by\b",
        r"(?i)\buniverse will collapse\b",
        r"(?i)\bworld will end\b",
        r"(?i)\bsociety will (?:turn into|become)\s+\w+\s+(?:ruled by|run by)",
        r"(?i)\b(?:melt|explode|implode)\s+into\s+\w+",
        r"(?i)\bend of (?:the )?universe\b",
        r"(?i)\bliterally\s+(?:everything|the worst)\b",
        r"(?i)\b\d+\s+percent\s+(?:\w+\s+){0,2}(?:certified|guaranteed)\b",
        r"(?i)\bdeath panels?\b",
    ])
});

static DISPROPORTIONATE_CAUSATION: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_patterns(&[
        r"(?is)\b(?:if|when)\s+(?:we\s+)?(?:allow|pass|do)\s+(?:one\s+)?(?:small|tiny|minor|single)\s+(?:\w+\s+){0,3}(?:change|policy|thing)\b.*\b(?:collapse|end|destroy|chaos|ruin)",
        r"(?is)\b(?:one|a single)\s+(?:\w+\s+){0,2}(?:change|mistake|error)\b.*\b(?:universe|world|society|civilization)\b",
        r"(?is)\b(?:small|tiny|minor|one|single|little)\b.*\b(?:collapse|chaos|destroy|end|ruin|catastrophe|apocalypse)\b",
    ])
});

static INCONGRUITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:ruled|run|led|controlled|governed)\s+by\s+(\w+)").unwrap()
});

const ABSURD_NOUNS: &[&str] = &[
    "cats", "dogs", "penguins", "zombies", "aliens", "unicorns", "clowns", "potatoes", "bananas",
    "robots", "sentient",
];

static SELF_UNDERMINING: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_patterns(&[
        r"(?i)\bbecause\s+it\s+completely\s+ignores\b",
        r"(?i)\bperfect\s+because\s+it\s+(?:ignores|rejects)\b",
        r"(?i)\bthe\s+best\s+plan\s+that\s+ignores\b",
    ])
});

#[derive(Debug, Clone, Copy, Default)]
pub struct SatireAnalyzer;

impl SatireAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, text: &NormalizedText) -> SatireAssessment {
        if text.is_blank() {
            return SatireAssessment::default();
        }
        let raw = text.raw();

        let mut weighted: Vec<(f64, SatireSignal)> = Vec::new();

        let absurd = ABSURD_OUTCOMES.iter().filter(|re| re.is_match(raw)).count();
        if absurd > 0 {
            weighted.push((
                absurd_weight(absurd),
                SatireSignal {
                    kind: SatireSignalKind::AbsurdOutcome,
                    description: format!(
                        "Phrases suggesting impossible or playful outcomes ({absurd} detected)"
                    ),
                },
            ));
        }

        if DISPROPORTIONATE_CAUSATION.iter().any(|re| re.is_match(raw)) {
            weighted.push((
                DISPROPORTIONATE_WEIGHT,
                SatireSignal {
                    kind: SatireSignalKind::DisproportionateCausation,
                    description: "Trivial cause linked to catastrophic or absurd effect".to_string(),
                },
            ));
        }

        if has_absurd_ruler(raw) {
            weighted.push((
                INCONGRUITY_WEIGHT,
                SatireSignal {
                    kind: SatireSignalKind::SemanticIncongruity,
                    description: "Serious framing combined with an absurd or impossible noun"
                        .to_string(),
                },
            ));
        }

        if SELF_UNDERMINING.iter().any(|re| re.is_match(raw)) {
            weighted.push((
                SELF_UNDERMINING_WEIGHT,
                SatireSignal {
                    kind: SatireSignalKind::SelfUndermining,
                    description: "Position undermines itself (mocking structure)".to_string(),
                },
            ));
        }

        let strongest = weighted.iter().map(|(w, _)| *w).fold(0.0, f64::max);
        SatireAssessment {
            content_type: content_type(strongest),
            signals: weighted.into_iter().map(|(_, signal)| signal).collect(),
        }
    }
}

fn absurd_weight(matches: usize) -> f64 {
    (0.5 + 0.2 * matches as f64).min(0.9)
}

fn has_absurd_ruler(text: &str) -> bool {
    INCONGRUITY.captures_iter(text).any(|caps| {
        caps.get(1)
            .map(|noun| ABSURD_NOUNS.contains(&noun.as_str().to_lowercase().as_str()))
            .unwrap_or(false)
    })
}

fn content_type(strongest: f64) -> ContentType {
    if strongest >= SATIRE_THRESHOLD {
        ContentType::PossiblySatire
    } else if strongest >= UNCERTAIN_THRESHOLD {
        ContentType::Uncertain
    } else {
        ContentType::GenuineArgument
    }
}

impl Analyzer for SatireAnalyzer {
    fn name(&self) -> &'static str {
        "satire"
    }

    fn analyze(&self, text: &NormalizedText) -> Finding {
        Finding::Satire(self.assess(text))
    }
}
