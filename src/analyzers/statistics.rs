use super::{Analyzer, Finding};
use crate::text::NormalizedText;

/// Word and sentence counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsAnalyzer;

impl StatisticsAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Returns `(word_count, sentence_count)`.
    pub fn count(&self, text: &NormalizedText) -> (usize, usize) {
        (text.word_count(), text.sentence_count())
    }
}

impl Analyzer for StatisticsAnalyzer {
    fn name(&self) -> &'static str {
        "statistics"
    }

    fn analyze(&self, text: &NormalizedText) -> Finding {
        let (word_count, sentence_count) = self.count(text);
        Finding::Statistics {
            word_count,
            sentence_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_words_and_sentences() {
        let text = NormalizedText::new("We must act. Now!");
        assert_eq!(StatisticsAnalyzer::new().count(&text), (4, 2));
    }

    #[test]
    fn test_blank_text_counts_zero() {
        let text = NormalizedText::new("   ");
        assert_eq!(
            StatisticsAnalyzer.analyze(&text),
            Finding::Statistics {
                word_count: 0,
                sentence_count: 0
            }
        );
    }
}
