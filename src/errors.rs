//! Error types for discourse analysis.
//!
//! Analysis itself is total over string input: every analyzer accepts any
//! text, including an empty one. The only modeled failures happen while the
//! engine is being put together, when lexicon files or the configuration
//! file cannot be read or parsed.
//!
//! # Example
//!
//! ```rust
//! use discourse_engine::errors::Error;
//!
//! let err = Error::configuration_at("expected a JSON array", "lexicons/fear_terms.json");
//! assert_eq!(err.category(), "Config");
//! assert!(err.to_string().contains("fear_terms.json"));
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for engine construction.
#[derive(Debug, Error)]
pub enum Error {
    /// Lexicon or configuration content is unusable
    #[error("Configuration error{}: {message}", display_path(.path))]
    Configuration {
        message: String,
        path: Option<PathBuf>,
    },

    /// A file could not be read
    #[error("I/O error{}: {message}", display_path(.path))]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// A lexicon term could not be compiled into a matcher
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            path: None,
        }
    }

    pub fn configuration_at(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Configuration {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn io_at(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::Io {
            message: source.to_string(),
            path: Some(path.as_ref().to_path_buf()),
            source,
        }
    }

    /// Short category name used in log lines and CLI messages.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Configuration { .. } | Self::Json(_) | Self::Toml(_) => "Config",
            Self::Io { .. } => "I/O",
            Self::Pattern(_) => "Pattern",
        }
    }

    /// Path the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Configuration { path, .. } | Self::Io { path, .. } => path.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
