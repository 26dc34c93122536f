//! The immutable analysis report and the builder the pipeline folds analyzer
//! findings into.

use super::{
    AgendaFlag, FallacyFlag, HiddenAssumption, PronounFraming, SatireAssessment, Tone,
    TriggerProfile,
};
use crate::analyzers::Finding;
use serde::Serialize;

/// Aggregate of every analyzer's output for one text.
///
/// A report is built once per pipeline run and has no setters; the caller
/// that requested the analysis owns it outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    word_count: usize,
    sentence_count: usize,
    trigger_profile: TriggerProfile,
    tone: Vec<Tone>,
    modal_verbs: Vec<String>,
    pronoun_framing: PronounFraming,
    pronoun_insight: Option<String>,
    fallacy_flags: Vec<FallacyFlag>,
    hidden_assumptions: Vec<HiddenAssumption>,
    agenda_flags: Vec<AgendaFlag>,
    satire: SatireAssessment,
}

impl Report {
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    pub fn trigger_profile(&self) -> &TriggerProfile {
        &self.trigger_profile
    }

    /// Tone labels in evaluation order (Urgent, Defensive, Fear-oriented).
    pub fn tone(&self) -> &[Tone] {
        &self.tone
    }

    /// Modal verbs present, in the fixed modal list order.
    pub fn modal_verbs(&self) -> &[String] {
        &self.modal_verbs
    }

    pub fn pronoun_framing(&self) -> &PronounFraming {
        &self.pronoun_framing
    }

    pub fn pronoun_insight(&self) -> Option<&str> {
        self.pronoun_insight.as_deref()
    }

    pub fn fallacy_flags(&self) -> &[FallacyFlag] {
        &self.fallacy_flags
    }

    pub fn hidden_assumptions(&self) -> &[HiddenAssumption] {
        &self.hidden_assumptions
    }

    pub fn agenda_flags(&self) -> &[AgendaFlag] {
        &self.agenda_flags
    }

    pub fn satire(&self) -> &SatireAssessment {
        &self.satire
    }

    /// True when no rule of any kind fired.
    pub fn is_quiet(&self) -> bool {
        self.tone.is_empty()
            && self.fallacy_flags.is_empty()
            && self.hidden_assumptions.is_empty()
            && self.agenda_flags.is_empty()
            && self.satire.signals.is_empty()
    }
}

/// Collects analyzer findings; starts from the zero-valued report.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    word_count: usize,
    sentence_count: usize,
    trigger_profile: TriggerProfile,
    tone: Vec<Tone>,
    modal_verbs: Vec<String>,
    pronoun_framing: PronounFraming,
    pronoun_insight: Option<String>,
    fallacy_flags: Vec<FallacyFlag>,
    hidden_assumptions: Vec<HiddenAssumption>,
    agenda_flags: Vec<AgendaFlag>,
    satire: SatireAssessment,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one analyzer's finding into the report under construction.
    ///
    /// Sequence-valued findings are appended, so analyzers registered later
    /// add to (never replace) what earlier ones produced.
    pub fn absorb(&mut self, finding: Finding) {
        match finding {
            Finding::Statistics {
                word_count,
                sentence_count,
            } => {
                self.word_count = word_count;
                self.sentence_count = sentence_count;
            }
            Finding::TriggerProfile(profile) => self.trigger_profile = profile,
            Finding::Tone(tones) => extend_unique(&mut self.tone, tones),
            Finding::ModalPronoun {
                modal_verbs,
                pronoun_framing,
                pronoun_insight,
            } => {
                extend_unique(&mut self.modal_verbs, modal_verbs);
                self.pronoun_framing = pronoun_framing;
                self.pronoun_insight = pronoun_insight;
            }
            Finding::Fallacies(flags) => self.fallacy_flags.extend(flags),
            Finding::Assumptions(assumptions) => self.hidden_assumptions.extend(assumptions),
            Finding::Agenda(flags) => self.agenda_flags.extend(flags),
            Finding::Satire(assessment) => self.satire = assessment,
        }
    }

    pub fn build(self) -> Report {
        Report {
            word_count: self.word_count,
            sentence_count: self.sentence_count,
            trigger_profile: self.trigger_profile,
            tone: self.tone,
            modal_verbs: self.modal_verbs,
            pronoun_framing: self.pronoun_framing,
            pronoun_insight: self.pronoun_insight,
            fallacy_flags: self.fallacy_flags,
            hidden_assumptions: self.hidden_assumptions,
            agenda_flags: self.agenda_flags,
            satire: self.satire,
        }
    }
}

/// Append items not already present, keeping first-seen order.
fn extend_unique<T: PartialEq>(target: &mut Vec<T>, items: Vec<T>) {
    for item in items {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FallacyType, Level, PronounFraming, Tone};

    #[test]
    fn test_empty_builder_yields_zero_report() {
        let report = ReportBuilder::new().build();
        assert_eq!(report.word_count(), 0);
        assert_eq!(report.sentence_count(), 0);
        assert_eq!(report.trigger_profile().fear, Level::Low);
        assert!(report.pronoun_insight().is_none());
        assert!(report.is_quiet());
    }

    #[test]
    fn test_absorb_appends_sequences() {
        let flag = |fallacy| FallacyFlag {
            fallacy,
            pattern_hint: "hint".into(),
            matched_text: None,
        };
        let mut builder = ReportBuilder::new();
        builder.absorb(Finding::Fallacies(vec![flag(FallacyType::AppealToFear)]));
        builder.absorb(Finding::Fallacies(vec![flag(FallacyType::AdHominem)]));
        builder.absorb(Finding::Statistics {
            word_count: 5,
            sentence_count: 1,
        });

        let report = builder.build();
        let kinds: Vec<_> = report.fallacy_flags().iter().map(|f| f.fallacy).collect();
        assert_eq!(kinds, vec![FallacyType::AppealToFear, FallacyType::AdHominem]);
        assert_eq!(report.word_count(), 5);
        assert!(!report.is_quiet());
    }

    #[test]
    fn test_repeated_findings_keep_labels_unique() {
        let modal = |verbs: &[&str]| Finding::ModalPronoun {
            modal_verbs: verbs.iter().map(|v| v.to_string()).collect(),
            pronoun_framing: PronounFraming::default(),
            pronoun_insight: None,
        };
        let mut builder = ReportBuilder::new();
        builder.absorb(modal(&["must", "will"]));
        builder.absorb(modal(&["will", "can"]));
        builder.absorb(Finding::Tone(vec![Tone::Urgent]));
        builder.absorb(Finding::Tone(vec![Tone::Urgent, Tone::Defensive]));

        let report = builder.build();
        assert_eq!(report.modal_verbs(), ["must", "will", "can"]);
        assert_eq!(report.tone(), [Tone::Urgent, Tone::Defensive]);
    }
}
