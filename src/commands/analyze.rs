use crate::config::{self, EngineConfig};
use crate::core::Report;
use crate::io::{self, create_writer, OutputFormat};
use crate::pipeline::Pipeline;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{BufRead, IsTerminal, Read, Write};
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub text: Vec<String>,
    pub files: Vec<PathBuf>,
    pub format: Option<crate::cli::OutputFormat>,
    pub output: Option<PathBuf>,
    pub lexicon_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub plain: bool,
}

/// One input document and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub source: String,
    pub text: String,
}

#[derive(Serialize)]
struct DocumentReport<'a> {
    source: &'a str,
    report: &'a Report,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    configure_output(&config);

    let engine = load_engine_config(&config)?;
    let format = resolve_format(config.format, &engine);
    let pipeline = Pipeline::from_config(&engine).context("Failed to load lexicons")?;

    let documents = collect_documents(&config)?;
    if documents.iter().all(|doc| doc.text.trim().is_empty()) {
        anyhow::bail!("No text provided.");
    }

    let texts: Vec<&str> = documents.iter().map(|doc| doc.text.as_str()).collect();
    let reports = pipeline.analyze_batch(&texts);
    tracing::debug!("Analyzed {} document(s)", reports.len());

    let mut sink: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };
    write_reports(&mut sink, format, &documents, &reports)?;
    sink.flush()?;
    Ok(())
}

fn configure_output(config: &AnalyzeConfig) {
    let use_color = !config.plain && config.output.is_none() && std::io::stdout().is_terminal();
    colored::control::set_override(use_color);
}

/// Explicit `--config` file, else the ancestor search; then environment
/// overrides; then the `--lexicon-dir` flag.
pub fn load_engine_config(config: &AnalyzeConfig) -> Result<EngineConfig> {
    let engine = match &config.config {
        Some(path) => EngineConfig::from_path(path)?,
        None => config::load_config(),
    }
    .with_env_overrides();

    Ok(match &config.lexicon_dir {
        Some(dir) => engine.with_lexicon_dir(dir),
        None => engine,
    })
}

fn resolve_format(flag: Option<crate::cli::OutputFormat>, engine: &EngineConfig) -> OutputFormat {
    if let Some(format) = flag {
        return format.into();
    }
    match engine.default_format() {
        Some(name) => OutputFormat::from_name(name).unwrap_or_else(|| {
            tracing::warn!("Unknown output format '{}' in config. Using terminal.", name);
            OutputFormat::Terminal
        }),
        None => OutputFormat::Terminal,
    }
}

/// Positional text, then files, then piped stdin, then an interactive
/// prompt.
pub fn collect_documents(config: &AnalyzeConfig) -> Result<Vec<Document>> {
    if !config.text.is_empty() {
        return Ok(vec![Document {
            source: "<args>".to_string(),
            text: config.text.join(" "),
        }]);
    }

    if !config.files.is_empty() {
        return config
            .files
            .iter()
            .map(|path| {
                Ok(Document {
                    source: path.display().to_string(),
                    text: io::read_file(path)?,
                })
            })
            .collect();
    }

    let stdin = std::io::stdin();
    let text = if stdin.is_terminal() {
        prompt_for_text(stdin.lock())?
    } else {
        let mut buffer = String::new();
        stdin
            .lock()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        buffer
    };
    Ok(vec![Document {
        source: "<stdin>".to_string(),
        text,
    }])
}

/// Read lines until the first blank one.
pub fn prompt_for_text(input: impl BufRead) -> Result<String> {
    eprintln!("Enter text to analyze (finish with an empty line):");
    let mut lines = Vec::new();
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

fn write_reports(
    sink: &mut dyn Write,
    format: OutputFormat,
    documents: &[Document],
    reports: &[Report],
) -> Result<()> {
    if documents.len() > 1 && format == OutputFormat::Json {
        let entries: Vec<DocumentReport> = documents
            .iter()
            .zip(reports)
            .map(|(doc, report)| DocumentReport {
                source: &doc.source,
                report,
            })
            .collect();
        serde_json::to_writer_pretty(&mut *sink, &entries)?;
        writeln!(sink)?;
        return Ok(());
    }

    for (index, (doc, report)) in documents.iter().zip(reports).enumerate() {
        if documents.len() > 1 {
            if index > 0 {
                writeln!(sink)?;
            }
            writeln!(sink, "==> {} <==", doc.source)?;
        }
        create_writer(format, Box::new(&mut *sink)).write_report(report)?;
    }
    Ok(())
}
