use super::{Analyzer, Finding};
use crate::core::Tone;
use crate::text::{NormalizedText, TermMatcher};
use once_cell::sync::Lazy;

const URGENT_TERMS: &[&str] = &[
    "must",
    "need",
    "now",
    "urgent",
    "immediately",
    "critical",
    "crisis",
];
const DEFENSIVE_TERMS: &[&str] = &["protect", "defend", "against", "threat", "attack", "stand for"];
// Inflected forms are listed explicitly, as in the threat list of
// `logical_fallacy`.
const FEAR_TERMS: &[&str] = &[
    "fear", "fears", "feared", "fearing", "afraid", "danger", "dangers", "collapse",
    "collapses", "collapsed", "collapsing", "destroy", "destroys", "destroyed", "destroying",
    "threat", "threats", "crisis", "crises",
];

static TONE_RULES: Lazy<Vec<(Tone, TermMatcher)>> = Lazy::new(|| {
    vec![
        (Tone::Urgent, TermMatcher::fixed(URGENT_TERMS)),
        (Tone::Defensive, TermMatcher::fixed(DEFENSIVE_TERMS)),
        (Tone::FearOriented, TermMatcher::fixed(FEAR_TERMS)),
    ]
});

/// Keyword-driven tone labels. Each tone is tested once, in the fixed order
/// Urgent, Defensive, Fear-oriented, so labels never repeat.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToneAnalyzer;

impl ToneAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn detect(&self, text: &NormalizedText) -> Vec<Tone> {
        TONE_RULES
            .iter()
            .filter(|(_, keywords)| keywords.is_match(text.raw()))
            .map(|(tone, _)| *tone)
            .collect()
    }
}

impl Analyzer for ToneAnalyzer {
    fn name(&self) -> &'static str {
        "tone"
    }

    fn analyze(&self, text: &NormalizedText) -> Finding {
        Finding::Tone(self.detect(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Vec<Tone> {
        ToneAnalyzer::new().detect(&NormalizedText::new(text))
    }

    #[test]
    fn test_all_three_tones_in_order() {
        let tones = detect(
            "We must protect our people from this growing threat. \
             They want to destroy everything we stand for.",
        );
        assert_eq!(tones, vec![Tone::Urgent, Tone::Defensive, Tone::FearOriented]);
    }

    #[test]
    fn test_single_tone() {
        assert_eq!(detect("Act IMMEDIATELY, please."), vec![Tone::Urgent]);
        assert_eq!(detect("They defend the harbor."), vec![Tone::Defensive]);
    }

    #[test]
    fn test_fear_tone_covers_inflections() {
        assert_eq!(detect("The army destroyed the city."), vec![Tone::FearOriented]);
        assert_eq!(detect("Bridges collapsing everywhere."), vec![Tone::FearOriented]);
    }

    #[test]
    fn test_keywords_need_word_boundaries() {
        assert!(detect("The nowhere man knows nothing of needles.").is_empty());
    }

    #[test]
    fn test_empty_text_has_no_tone() {
        assert!(detect("").is_empty());
    }
}
