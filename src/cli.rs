use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "discourse")]
#[command(about = "Rule-based rhetoric and framing analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze text for framing, fallacies and hidden assumptions
    Analyze {
        /// Text to analyze (joined with spaces). Reads files, piped stdin or
        /// an interactive prompt when omitted.
        text: Vec<String>,

        /// Analyze a file; repeat to analyze several documents
        #[arg(short = 'f', long = "file")]
        files: Vec<PathBuf>,

        /// Output format (defaults to the config file's, then terminal)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory with fear/authority/identity lexicon JSON files
        #[arg(long = "lexicon-dir", env = "DISCOURSE_LEXICON_DIR")]
        lexicon_dir: Option<PathBuf>,

        /// Explicit config file (skips the .discourse.toml search)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Plain output without colors
        #[arg(long)]
        plain: bool,

        /// Increase log verbosity (-v info, -vv debug)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },
    /// Initialize a .discourse.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Json),
            crate::io::output::OutputFormat::Json
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Markdown),
            crate::io::output::OutputFormat::Markdown
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Terminal),
            crate::io::output::OutputFormat::Terminal
        );
    }

    #[test]
    fn test_cli_parsing_analyze_command() {
        let cli = Cli::parse_from([
            "discourse",
            "analyze",
            "We",
            "must",
            "act.",
            "--format",
            "json",
            "--lexicon-dir",
            "/lexicons",
            "-vv",
        ]);

        match cli.command {
            Commands::Analyze {
                text,
                format,
                lexicon_dir,
                verbosity,
                files,
                ..
            } => {
                assert_eq!(text, vec!["We", "must", "act."]);
                assert_eq!(format, Some(OutputFormat::Json));
                assert_eq!(lexicon_dir, Some(PathBuf::from("/lexicons")));
                assert_eq!(verbosity, 2);
                assert!(files.is_empty());
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_cli_parsing_repeated_files() {
        let cli = Cli::parse_from(["discourse", "analyze", "-f", "a.txt", "--file", "b.txt"]);
        match cli.command {
            Commands::Analyze { files, text, .. } => {
                assert_eq!(files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
                assert!(text.is_empty());
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(["discourse", "init", "--force"]);
        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }
}
