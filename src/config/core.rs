use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{Error, Result};

pub const DEFAULT_LLM_MODEL: &str = "gpt-4";

pub const LEXICON_DIR_ENV: &str = "DISCOURSE_LEXICON_DIR";
pub const LLM_API_KEY_ENV: &str = "DISCOURSE_LLM_API_KEY";
pub const LLM_MODEL_ENV: &str = "DISCOURSE_LLM_MODEL";

/// Root configuration structure, read from `.discourse.toml`.
///
/// Configuration only decides which lexicons load and which assumption
/// extractor runs; it never changes detection thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EngineConfig {
    /// Lexicon directory configuration
    #[serde(default)]
    pub lexicons: Option<LexiconConfig>,

    /// LLM credentials for external assumption extraction
    #[serde(default)]
    pub llm: Option<LlmConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LexiconConfig {
    /// Directory holding `fear_terms.json`, `authority_terms.json` and
    /// `identity_terms.json`. Built-in lexicons are used when unset.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    #[serde(default = "default_llm_model")]
    pub model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_llm_model(),
        }
    }
}

fn default_llm_model() -> String {
    DEFAULT_LLM_MODEL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<String>,
}

impl EngineConfig {
    /// Load an explicit config file. Unlike the ancestor search, a malformed
    /// file here is an error rather than a warning.
    ///
    /// # Examples
    ///
    /// ```
    /// use discourse_engine::config::EngineConfig;
    /// let missing = EngineConfig::from_path("/definitely/not/here.toml");
    /// assert!(missing.is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::io_at(e, path))?;
        toml::from_str(&contents).map_err(|e| {
            Error::configuration_at(format!("failed to parse config: {e}"), path)
        })
    }

    /// Apply `DISCOURSE_*` environment overrides.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup. Empty values are
    /// ignored.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(dir) = var(LEXICON_DIR_ENV) {
            self.lexicons = Some(LexiconConfig {
                dir: Some(PathBuf::from(dir)),
            });
        }
        if let Some(key) = var(LLM_API_KEY_ENV) {
            self.llm.get_or_insert_with(LlmConfig::default).api_key = Some(key);
        }
        if let Some(model) = var(LLM_MODEL_ENV) {
            self.llm.get_or_insert_with(LlmConfig::default).model = model;
        }
        self
    }

    pub fn with_lexicon_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.lexicons = Some(LexiconConfig {
            dir: Some(dir.into()),
        });
        self
    }

    pub fn lexicon_dir(&self) -> Option<&Path> {
        self.lexicons.as_ref().and_then(|l| l.dir.as_deref())
    }

    /// Configured API key, if non-blank.
    pub fn llm_api_key(&self) -> Option<&str> {
        self.llm
            .as_ref()
            .and_then(|llm| llm.api_key.as_deref())
            .filter(|key| !key.trim().is_empty())
    }

    pub fn llm_model(&self) -> &str {
        self.llm
            .as_ref()
            .map(|llm| llm.model.as_str())
            .unwrap_or(DEFAULT_LLM_MODEL)
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.lexicon_dir(), None);
        assert_eq!(config.llm_api_key(), None);
        assert_eq!(config.llm_model(), "gpt-4");
    }

    #[test]
    fn test_llm_model_defaults_when_omitted() {
        let config: EngineConfig = toml::from_str("[llm]\napi_key = \"k\"\n").unwrap();
        assert_eq!(config.llm_model(), DEFAULT_LLM_MODEL);
        assert_eq!(config.llm_api_key(), Some("k"));
    }

    #[test]
    fn test_blank_api_key_is_ignored() {
        let config: EngineConfig = toml::from_str("[llm]\napi_key = \"  \"\n").unwrap();
        assert_eq!(config.llm_api_key(), None);
    }

    #[test]
    fn test_env_overrides_take_precedence() {
        let config: EngineConfig = toml::from_str(
            "[lexicons]\ndir = \"from-file\"\n[llm]\nmodel = \"file-model\"\n",
        )
        .unwrap();
        let vars: HashMap<&str, &str> = [
            (LEXICON_DIR_ENV, "from-env"),
            (LLM_API_KEY_ENV, "sk-env"),
            (LLM_MODEL_ENV, ""),
        ]
        .into_iter()
        .collect();

        let config = config.with_overrides_from(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.lexicon_dir(), Some(Path::new("from-env")));
        assert_eq!(config.llm_api_key(), Some("sk-env"));
        assert_eq!(config.llm_model(), "file-model");
    }
}
