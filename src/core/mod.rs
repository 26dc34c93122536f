//! Value objects produced by the analyzers and collected into a [`Report`].
//!
//! Everything here is created fresh for each analysis and never shared
//! mutably between runs.

pub mod report;

pub use report::{Report, ReportBuilder};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Ordinal intensity of a trigger category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
pub enum Level {
    #[default]
    Low,
    Moderate,
    High,
}

impl Level {
    /// Map a hit count through the fixed thresholds: 0 is Low, 1-2 Moderate,
    /// 3 or more High.
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Level::Low,
            1..=2 => Level::Moderate,
            _ => Level::High,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Level::Low => "Low",
            Level::Moderate => "Moderate",
            Level::High => "High",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub struct TriggerProfile {
    pub fear: Level,
    pub authority: Level,
    pub identity: Level,
}

/// Tone labels, in the order they are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tone {
    Urgent,
    Defensive,
    #[serde(rename = "Fear-oriented")]
    FearOriented,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tone::Urgent => "Urgent",
            Tone::Defensive => "Defensive",
            Tone::FearOriented => "Fear-oriented",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Pronoun {
    We,
    They,
    Us,
    Them,
    I,
    You,
}

impl Pronoun {
    pub const ALL: [Pronoun; 6] = [
        Pronoun::We,
        Pronoun::They,
        Pronoun::Us,
        Pronoun::Them,
        Pronoun::I,
        Pronoun::You,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Pronoun::We => "we",
            Pronoun::They => "they",
            Pronoun::Us => "us",
            Pronoun::Them => "them",
            Pronoun::I => "i",
            Pronoun::You => "you",
        }
    }

    pub fn parse(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(word))
    }
}

/// Occurrence count for every tracked pronoun. All six keys are always
/// present, in a fixed order, with zero for absent pronouns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PronounFraming {
    counts: [usize; 6],
}

impl PronounFraming {
    pub fn from_counts(counts: impl IntoIterator<Item = (Pronoun, usize)>) -> Self {
        let mut framing = Self::default();
        for (pronoun, count) in counts {
            framing.counts[Self::slot(pronoun)] = count;
        }
        framing
    }

    fn slot(pronoun: Pronoun) -> usize {
        Pronoun::ALL
            .iter()
            .position(|p| *p == pronoun)
            .unwrap_or_default()
    }

    pub fn get(&self, pronoun: Pronoun) -> usize {
        self.counts[Self::slot(pronoun)]
    }

    /// Look up a count by the pronoun's text (case-insensitive).
    pub fn count_of(&self, word: &str) -> Option<usize> {
        Pronoun::parse(word).map(|p| self.get(p))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pronoun, usize)> + '_ {
        Pronoun::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// Combined count of we/us.
    pub fn in_group(&self) -> usize {
        self.get(Pronoun::We) + self.get(Pronoun::Us)
    }

    /// Combined count of they/them.
    pub fn out_group(&self) -> usize {
        self.get(Pronoun::They) + self.get(Pronoun::Them)
    }
}

impl Serialize for PronounFraming {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Pronoun::ALL.len()))?;
        for (pronoun, count) in self.iter() {
            map.serialize_entry(pronoun.as_str(), &count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FallacyType {
    FalseDilemma,
    AppealToFear,
    AdHominem,
}

impl fmt::Display for FallacyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FallacyType::FalseDilemma => "False Dilemma",
            FallacyType::AppealToFear => "Appeal to Fear",
            FallacyType::AdHominem => "Ad Hominem / Attack",
        };
        f.write_str(label)
    }
}

/// A logical fallacy rule that fired.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FallacyFlag {
    pub fallacy: FallacyType,
    pub pattern_hint: String,
    /// Sentence that triggered the rule.
    pub matched_text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AgendaFamily {
    Deflecting,
    Dividing,
    Asserting,
    Personalizing,
    Framing,
}

impl fmt::Display for AgendaFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A hidden agenda technique that fired.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AgendaFlag {
    pub family: AgendaFamily,
    pub technique: String,
    pub pattern_hint: String,
    /// Sentence that triggered the technique.
    pub matched_text: Option<String>,
}

/// The six hidden assumption rule families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AssumptionRule {
    Presupposition,
    EpistemicShortcut,
    UniversalQuantifier,
    ConclusionMarker,
    LoadedQuestion,
    VagueAuthority,
}

impl fmt::Display for AssumptionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AssumptionRule::Presupposition => "Presupposition",
            AssumptionRule::EpistemicShortcut => "Epistemic shortcut",
            AssumptionRule::UniversalQuantifier => "Universal quantifier",
            AssumptionRule::ConclusionMarker => "Conclusion marker",
            AssumptionRule::LoadedQuestion => "Loaded question",
            AssumptionRule::VagueAuthority => "Vague authority",
        };
        f.write_str(label)
    }
}

/// An unstated premise the text relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HiddenAssumption {
    pub rule: AssumptionRule,
    /// The trigger that was found, lowercased.
    pub trigger: String,
    /// Rule label, matched trigger and implication in one line.
    pub description: String,
}

impl fmt::Display for HiddenAssumption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SatireSignalKind {
    AbsurdOutcome,
    DisproportionateCausation,
    SemanticIncongruity,
    SelfUndermining,
}

impl fmt::Display for SatireSignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SatireSignalKind::AbsurdOutcome => "Absurd outcome",
            SatireSignalKind::DisproportionateCausation => "Disproportionate causation",
            SatireSignalKind::SemanticIncongruity => "Semantic incongruity",
            SatireSignalKind::SelfUndermining => "Self-undermining",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SatireSignal {
    pub kind: SatireSignalKind,
    pub description: String,
}

/// Whether the text reads as a genuine argument or as satire/hyperbole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum ContentType {
    GenuineArgument,
    #[default]
    Uncertain,
    PossiblySatire,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContentType::GenuineArgument => "Genuine Argument",
            ContentType::Uncertain => "Uncertain",
            ContentType::PossiblySatire => "Possibly Satire / Hyperbole",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Default)]
pub struct SatireAssessment {
    pub content_type: ContentType,
    pub signals: Vec<SatireSignal>,
}
