use crate::core::Report;
use colored::*;
use std::fmt::Write as _;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl OutputFormat {
    /// Parse a config-file format name (`terminal`, `json`, `markdown`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            "terminal" | "text" => Some(OutputFormat::Terminal),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_trigger_profile(report)?;
        self.write_framing(report)?;
        self.write_flags(report)?;
        self.write_content_type(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &Report) -> anyhow::Result<()> {
        writeln!(self.writer, "# Discourse Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Words | {} |", report.word_count())?;
        writeln!(self.writer, "| Sentences | {} |", report.sentence_count())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_trigger_profile(&mut self, report: &Report) -> anyhow::Result<()> {
        let profile = report.trigger_profile();
        writeln!(self.writer, "## Trigger Profile")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | Level |")?;
        writeln!(self.writer, "|----------|-------|")?;
        writeln!(self.writer, "| Fear | {} |", profile.fear)?;
        writeln!(self.writer, "| Authority | {} |", profile.authority)?;
        writeln!(self.writer, "| Identity | {} |", profile.identity)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_framing(&mut self, report: &Report) -> anyhow::Result<()> {
        writeln!(self.writer, "## Framing")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- **Tone:** {}", join_or_none(report.tone()))?;
        writeln!(
            self.writer,
            "- **Modal verbs:** {}",
            join_or_none(report.modal_verbs())
        )?;
        let pronouns: Vec<String> = report
            .pronoun_framing()
            .iter()
            .map(|(pronoun, count)| format!("`{}` {count}", pronoun.as_str()))
            .collect();
        writeln!(self.writer, "- **Pronouns:** {}", pronouns.join(", "))?;
        if let Some(insight) = report.pronoun_insight() {
            writeln!(self.writer, "- **Insight:** {insight}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_flags(&mut self, report: &Report) -> anyhow::Result<()> {
        if !report.fallacy_flags().is_empty() {
            writeln!(self.writer, "## Logical Fallacies")?;
            writeln!(self.writer)?;
            for flag in report.fallacy_flags() {
                writeln!(self.writer, "- **{}** ({})", flag.fallacy, flag.pattern_hint)?;
                if let Some(text) = &flag.matched_text {
                    writeln!(self.writer, "  > {text}")?;
                }
            }
            writeln!(self.writer)?;
        }

        if !report.hidden_assumptions().is_empty() {
            writeln!(self.writer, "## Hidden Assumptions")?;
            writeln!(self.writer)?;
            for assumption in report.hidden_assumptions() {
                writeln!(self.writer, "- {assumption}")?;
            }
            writeln!(self.writer)?;
        }

        if !report.agenda_flags().is_empty() {
            writeln!(self.writer, "## Hidden Agenda")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Family | Technique | Hint |")?;
            writeln!(self.writer, "|--------|-----------|------|")?;
            for flag in report.agenda_flags() {
                writeln!(
                    self.writer,
                    "| {} | {} | {} |",
                    flag.family, flag.technique, flag.pattern_hint
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_content_type(&mut self, report: &Report) -> anyhow::Result<()> {
        let satire = report.satire();
        writeln!(self.writer, "## Content Type")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**{}**", satire.content_type)?;
        for signal in &satire.signals {
            writeln!(self.writer, "- {}: {}", signal.kind, signal.description)?;
        }
        Ok(())
    }
}

/// Plain-text report writer, styled with `colored` when colour is enabled
/// globally.
pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", render(report, true))?;
        Ok(())
    }
}

/// The uncoloured text layout of a report.
pub fn format_report(report: &Report) -> String {
    render(report, false)
}

fn heading(text: &str, styled: bool) -> String {
    if styled {
        text.bold().cyan().to_string()
    } else {
        text.to_string()
    }
}

fn join_or_none<T: ToString>(items: &[T]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn render(report: &Report, styled: bool) -> String {
    let mut out = String::new();
    let title = heading("--- Discourse Analysis Report ---", styled);
    let profile = report.trigger_profile();

    // writing into a String cannot fail
    let _ = writeln!(out, "{title}\n");
    let _ = writeln!(out, "Word Count: {}", report.word_count());
    let _ = writeln!(out, "Sentence Count: {}\n", report.sentence_count());

    let _ = writeln!(out, "{}", heading("Trigger Profile:", styled));
    let _ = writeln!(out, "- Fear Language: {}", profile.fear);
    let _ = writeln!(out, "- Authority Language: {}", profile.authority);
    let _ = writeln!(out, "- Identity Framing: {}\n", profile.identity);

    let _ = writeln!(out, "{}", heading("Modal Verbs Detected:", styled));
    let _ = writeln!(out, "- {}\n", join_or_none(report.modal_verbs()));

    let _ = writeln!(out, "{}", heading("Pronoun Framing:", styled));
    for (pronoun, count) in report.pronoun_framing().iter() {
        let _ = writeln!(out, "- \"{}\": {count}", pronoun.as_str());
    }
    if let Some(insight) = report.pronoun_insight() {
        let insight = if styled {
            insight.yellow().to_string()
        } else {
            insight.to_string()
        };
        let _ = writeln!(out, "-> {insight}");
    }
    out.push('\n');

    let _ = writeln!(out, "{}", heading("Logical Fallacy Flags:", styled));
    if report.fallacy_flags().is_empty() {
        out.push_str("- (none)\n");
    }
    for flag in report.fallacy_flags() {
        let name = if styled {
            flag.fallacy.to_string().red().to_string()
        } else {
            flag.fallacy.to_string()
        };
        let _ = writeln!(out, "- {name} ({})", flag.pattern_hint);
    }
    out.push('\n');

    let _ = writeln!(out, "{}", heading("Hidden Assumptions:", styled));
    if report.hidden_assumptions().is_empty() {
        out.push_str("- (none)\n");
    }
    for assumption in report.hidden_assumptions() {
        let _ = writeln!(out, "- {assumption}");
    }
    out.push('\n');

    let _ = writeln!(out, "{}", heading("Hidden Agenda:", styled));
    if report.agenda_flags().is_empty() {
        out.push_str("- (none)\n");
    }
    for flag in report.agenda_flags() {
        let _ = writeln!(
            out,
            "- [{}] {} ({})",
            flag.family, flag.technique, flag.pattern_hint
        );
    }
    out.push('\n');

    let _ = writeln!(out, "{}", heading("Tone:", styled));
    let _ = writeln!(out, "- {}\n", join_or_none(report.tone()));

    let satire = report.satire();
    let _ = writeln!(out, "{}", heading("Content Type:", styled));
    let _ = write!(out, "- {}", satire.content_type);
    for signal in &satire.signals {
        let _ = write!(out, "\n  * {}: {}", signal.kind, signal.description);
    }
    out
}

pub fn create_writer<'a>(format: OutputFormat, out: Box<dyn Write + 'a>) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(out)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(out)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Pipeline;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "We must protect our people from this growing threat. \
                          They want to destroy everything we stand for. \
                          Either we act now or our nation will collapse.";

    fn sample_report() -> Report {
        Pipeline::builtin().unwrap().analyze(SAMPLE)
    }

    #[test]
    fn test_format_report_empty_layout() {
        let report = Pipeline::builtin().unwrap().analyze("");
        let expected = indoc! {r#"
            --- Discourse Analysis Report ---

            Word Count: 0
            Sentence Count: 0

            Trigger Profile:
            - Fear Language: Low
            - Authority Language: Low
            - Identity Framing: Low

            Modal Verbs Detected:
            - (none)

            Pronoun Framing:
            - "we": 0
            - "they": 0
            - "us": 0
            - "them": 0
            - "i": 0
            - "you": 0

            Logical Fallacy Flags:
            - (none)

            Hidden Assumptions:
            - (none)

            Hidden Agenda:
            - (none)

            Tone:
            - (none)

            Content Type:
            - Uncertain"#};
        assert_eq!(format_report(&report), expected);
    }

    #[test]
    fn test_format_report_lists_findings() {
        let text = format_report(&sample_report());
        assert!(text.contains("Word Count: 26"));
        assert!(text.contains("- Fear Language: High"));
        assert!(text.contains("- must, will"));
        assert!(text.contains("-> Possible in-group / out-group framing"));
        assert!(text.contains("- False Dilemma (pattern: either X or Y)"));
        assert!(text.contains("- Urgent, Defensive, Fear-oriented"));
    }

    #[test]
    fn test_json_writer_emits_report() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["word_count"], 26);
        assert_eq!(value["trigger_profile"]["fear"], "High");
        assert_eq!(value["pronoun_framing"]["we"], 3);
    }

    #[test]
    fn test_markdown_writer_sections() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();
        let markdown = String::from_utf8(buffer).unwrap();
        assert!(markdown.starts_with("# Discourse Analysis Report"));
        assert!(markdown.contains("| Fear | High |"));
        assert!(markdown.contains("## Logical Fallacies"));
        assert!(markdown.contains("## Content Type"));
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_name("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("md"), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::from_name("yaml"), None);
    }
}
