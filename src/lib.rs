//! Rule-based analysis of rhetoric, framing and persuasion techniques.
//!
//! Text goes through a [`Pipeline`] of independent analyzers and comes out as
//! an immutable [`Report`]: statistics, trigger levels, tone, modal verbs,
//! pronoun framing, logical fallacy flags, hidden assumptions, hidden agenda
//! techniques and a satire assessment.

pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod lexicon;
pub mod pipeline;
pub mod text;

// Re-export commonly used types
pub use crate::core::{
    AgendaFamily, AgendaFlag, AssumptionRule, ContentType, FallacyFlag, FallacyType,
    HiddenAssumption, Level, Pronoun, PronounFraming, Report, ReportBuilder, SatireAssessment,
    SatireSignal, SatireSignalKind, Tone, TriggerProfile,
};

pub use crate::analyzers::{Analyzer, AssumptionExtractor, Finding};
pub use crate::config::EngineConfig;
pub use crate::errors::{Error, Result};
pub use crate::io::output::{create_writer, format_report, OutputFormat, OutputWriter};
pub use crate::lexicon::{LexiconCategory, LexiconSet, LexiconStore};
pub use crate::pipeline::{run_pipeline, Pipeline};
pub use crate::text::NormalizedText;
