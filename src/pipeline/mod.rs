//! Analysis orchestration.
//!
//! A [`Pipeline`] owns an ordered list of analyzers and runs each of them on
//! the same [`NormalizedText`], folding the findings into a [`Report`].
//! Analyzers share nothing mutable, so a single pipeline can analyze many
//! texts concurrently.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug_span;

use crate::analyzers::{
    select_extractor, Analyzer, AssumptionAnalyzer, AssumptionExtractor, HiddenAgendaAnalyzer,
    LogicalFallacyAnalyzer, ModalPronounAnalyzer, RuleBasedExtractor, SatireAnalyzer,
    StatisticsAnalyzer, ToneAnalyzer, TriggerProfileAnalyzer,
};
use crate::config::EngineConfig;
use crate::core::{Report, ReportBuilder};
use crate::errors::Result;
use crate::lexicon::LexiconStore;
use crate::text::NormalizedText;

pub struct Pipeline {
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl Pipeline {
    /// A pipeline with no analyzers; its reports are all zero.
    pub fn empty() -> Self {
        Self {
            analyzers: Vec::new(),
        }
    }

    /// The standard analyzer set in report order.
    pub fn standard(
        lexicons: Arc<LexiconStore>,
        extractor: Box<dyn AssumptionExtractor>,
    ) -> Self {
        Self::empty()
            .with_analyzer(StatisticsAnalyzer::new())
            .with_analyzer(TriggerProfileAnalyzer::new(Arc::clone(&lexicons)))
            .with_analyzer(ToneAnalyzer::new())
            .with_analyzer(ModalPronounAnalyzer::new())
            .with_analyzer(LogicalFallacyAnalyzer::new())
            .with_analyzer(AssumptionAnalyzer::new(extractor))
            .with_analyzer(HiddenAgendaAnalyzer::new(lexicons))
            .with_analyzer(SatireAnalyzer::new())
    }

    /// Standard pipeline over the built-in lexicons with rule-based
    /// assumption extraction.
    pub fn builtin() -> Result<Self> {
        Ok(Self::standard(
            Arc::new(LexiconStore::builtin()?),
            Box::new(RuleBasedExtractor),
        ))
    }

    /// Load lexicons and pick the extractor strategy from `config`.
    ///
    /// Lexicon loading is all-or-nothing: any malformed file fails the whole
    /// construction.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let lexicons = LexiconStore::load_or_builtin(config.lexicon_dir())?;
        Ok(Self::standard(Arc::new(lexicons), select_extractor(config)))
    }

    pub fn with_analyzer(mut self, analyzer: impl Analyzer + 'static) -> Self {
        self.analyzers.push(Box::new(analyzer));
        self
    }

    pub fn analyzer_names(&self) -> Vec<&'static str> {
        self.analyzers.iter().map(|a| a.name()).collect()
    }

    pub fn analyze(&self, text: &str) -> Report {
        let text = NormalizedText::new(text);
        let mut builder = ReportBuilder::new();
        for analyzer in &self.analyzers {
            let _span = debug_span!("analyzer", name = analyzer.name()).entered();
            builder.absorb(analyzer.analyze(&text));
        }
        builder.build()
    }

    /// Analyze independent texts in parallel. Reports keep input order.
    pub fn analyze_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Report> {
        texts
            .par_iter()
            .map(|text| self.analyze(text.as_ref()))
            .collect()
    }
}

/// One-shot analysis: build a pipeline from `config` and run it on `text`.
///
/// # Examples
///
/// ```
/// use discourse_engine::config::EngineConfig;
/// use discourse_engine::pipeline::run_pipeline;
///
/// let report = run_pipeline("We must act now.", &EngineConfig::default()).unwrap();
/// assert_eq!(report.word_count(), 4);
/// assert_eq!(report.modal_verbs(), ["must"]);
/// ```
pub fn run_pipeline(text: &str, config: &EngineConfig) -> Result<Report> {
    Ok(Pipeline::from_config(config)?.analyze(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::Finding;
    use crate::core::{FallacyFlag, FallacyType, Tone};

    struct AlwaysAttack;

    impl Analyzer for AlwaysAttack {
        fn name(&self) -> &'static str {
            "always_attack"
        }

        fn analyze(&self, _text: &NormalizedText) -> Finding {
            Finding::Fallacies(vec![FallacyFlag {
                fallacy: FallacyType::AdHominem,
                pattern_hint: "custom".to_string(),
                matched_text: None,
            }])
        }
    }

    #[test]
    fn test_standard_order() {
        let pipeline = Pipeline::builtin().unwrap();
        assert_eq!(
            pipeline.analyzer_names(),
            vec![
                "statistics",
                "trigger_profile",
                "tone",
                "modal_pronoun",
                "logical_fallacy",
                "hidden_assumptions",
                "hidden_agenda",
                "satire",
            ]
        );
    }

    #[test]
    fn test_custom_analyzer_appends_findings() {
        let pipeline = Pipeline::builtin().unwrap().with_analyzer(AlwaysAttack);
        let report = pipeline.analyze("Either we win or we lose.");
        let kinds: Vec<_> = report.fallacy_flags().iter().map(|f| f.fallacy).collect();
        assert_eq!(kinds, vec![FallacyType::FalseDilemma, FallacyType::AdHominem]);
    }

    #[test]
    fn test_empty_pipeline_yields_zero_report() {
        let report = Pipeline::empty().analyze("We must act now.");
        assert_eq!(report.word_count(), 0);
        assert!(report.is_quiet());
    }

    #[test]
    fn test_batch_keeps_input_order() {
        let pipeline = Pipeline::builtin().unwrap();
        let texts = ["Act now!", "", "They defend the harbor. We rest."];
        let reports = pipeline.analyze_batch(&texts);
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].word_count(), 2);
        assert_eq!(reports[1].word_count(), 0);
        assert_eq!(reports[2].sentence_count(), 2);
        assert_eq!(reports[2].tone(), [Tone::Defensive]);
    }

    #[test]
    fn test_from_config_propagates_lexicon_errors() {
        let config = EngineConfig::default().with_lexicon_dir("/definitely/not/a/lexicon/dir");
        assert!(Pipeline::from_config(&config).is_err());
    }
}
