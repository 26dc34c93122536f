//! Independent, stateless analyzers.
//!
//! Every analyzer is a pure function of the normalized text (and, for some,
//! a shared read-only [`LexiconStore`](crate::lexicon::LexiconStore)). Each
//! exposes a typed entry point of its own plus the [`Analyzer`] trait the
//! pipeline drives; the trait returns a [`Finding`], the partial result the
//! pipeline folds into the report.

pub mod extractor;
pub mod hidden_agenda;
pub mod hidden_assumptions;
pub mod logical_fallacy;
pub mod modal_pronoun;
pub mod satire;
pub mod statistics;
pub mod tone;
pub mod trigger_profile;

pub use extractor::{
    select_extractor, AssumptionAnalyzer, AssumptionExtractor, ExternalExtractor,
    RuleBasedExtractor,
};
pub use hidden_agenda::HiddenAgendaAnalyzer;
pub use logical_fallacy::LogicalFallacyAnalyzer;
pub use modal_pronoun::{ModalPronounAnalyzer, ModalPronounResult};
pub use satire::SatireAnalyzer;
pub use statistics::StatisticsAnalyzer;
pub use tone::ToneAnalyzer;
pub use trigger_profile::TriggerProfileAnalyzer;

use crate::core::{
    AgendaFlag, FallacyFlag, HiddenAssumption, PronounFraming, SatireAssessment, Tone,
    TriggerProfile,
};
use crate::text::NormalizedText;

/// Partial result of one analyzer.
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    Statistics {
        word_count: usize,
        sentence_count: usize,
    },
    TriggerProfile(TriggerProfile),
    Tone(Vec<Tone>),
    ModalPronoun {
        modal_verbs: Vec<String>,
        pronoun_framing: PronounFraming,
        pronoun_insight: Option<String>,
    },
    Fallacies(Vec<FallacyFlag>),
    Assumptions(Vec<HiddenAssumption>),
    Agenda(Vec<AgendaFlag>),
    Satire(SatireAssessment),
}

pub trait Analyzer: Send + Sync {
    /// Short name used in tracing spans.
    fn name(&self) -> &'static str;

    fn analyze(&self, text: &NormalizedText) -> Finding;
}
