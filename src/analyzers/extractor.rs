//! Hidden assumption extraction strategies.
//!
//! The rule-based extractor is always available. When an LLM API key is
//! configured the pipeline selects [`ExternalExtractor`] instead; it carries
//! the credentials and request prompt, but the crate ships no transport, so
//! it reports the rule-based findings it wraps.

use super::hidden_assumptions;
use super::{Analyzer, Finding};
use crate::config::EngineConfig;
use crate::core::HiddenAssumption;
use crate::text::NormalizedText;
use std::fmt;
use std::sync::Once;

pub trait AssumptionExtractor: Send + Sync {
    fn name(&self) -> &'static str;

    fn extract(&self, text: &NormalizedText) -> Vec<HiddenAssumption>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedExtractor;

impl AssumptionExtractor for RuleBasedExtractor {
    fn name(&self) -> &'static str {
        "rule_based"
    }

    fn extract(&self, text: &NormalizedText) -> Vec<HiddenAssumption> {
        hidden_assumptions::extract_all(text)
    }
}

pub struct ExternalExtractor {
    api_key: String,
    model: String,
    fallback: RuleBasedExtractor,
    warned: Once,
}

impl ExternalExtractor {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            fallback: RuleBasedExtractor,
            warned: Once::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_credentials(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// The request body a transport would send for `text`.
    pub fn prompt(&self, text: &str) -> String {
        format!(
            "Extract the hidden assumptions in the following text. \
             List each unstated premise the argument relies on, one per line.\n\n{text}"
        )
    }
}

impl fmt::Debug for ExternalExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalExtractor")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .finish()
    }
}

impl AssumptionExtractor for ExternalExtractor {
    fn name(&self) -> &'static str {
        "external"
    }

    fn extract(&self, text: &NormalizedText) -> Vec<HiddenAssumption> {
        if self.has_credentials() {
            self.warned.call_once(|| {
                tracing::warn!(
                    model = %self.model,
                    "no LLM transport available; using rule-based assumption extraction"
                );
            });
            tracing::trace!(
                model = %self.model,
                prompt = %self.prompt(text.raw()),
                "external extraction request not sent"
            );
        }
        self.fallback.extract(text)
    }
}

/// External extractor when an API key is configured, rule-based otherwise.
pub fn select_extractor(config: &EngineConfig) -> Box<dyn AssumptionExtractor> {
    match config.llm_api_key() {
        Some(key) => {
            tracing::debug!(model = config.llm_model(), "selected external assumption extractor");
            Box::new(ExternalExtractor::new(key, config.llm_model()))
        }
        None => Box::new(RuleBasedExtractor),
    }
}

pub struct AssumptionAnalyzer {
    extractor: Box<dyn AssumptionExtractor>,
}

impl AssumptionAnalyzer {
    pub fn new(extractor: Box<dyn AssumptionExtractor>) -> Self {
        Self { extractor }
    }

    pub fn extractor_name(&self) -> &'static str {
        self.extractor.name()
    }
}

impl Default for AssumptionAnalyzer {
    fn default() -> Self {
        Self::new(Box::new(RuleBasedExtractor))
    }
}

impl Analyzer for AssumptionAnalyzer {
    fn name(&self) -> &'static str {
        "hidden_assumptions"
    }

    fn analyze(&self, text: &NormalizedText) -> Finding {
        Finding::Assumptions(self.extractor.extract(text))
    }
}
