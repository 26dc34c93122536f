//! Engine configuration: `.discourse.toml` discovery plus environment
//! overrides.

mod core;
mod loader;

pub use self::core::{
    EngineConfig, LexiconConfig, LlmConfig, OutputConfig, DEFAULT_LLM_MODEL, LEXICON_DIR_ENV,
    LLM_API_KEY_ENV, LLM_MODEL_ENV,
};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_config, CONFIG_FILE_NAME,
};
