//! CLI command implementations.
//!
//! - **analyze**: run the analysis pipeline on text, files or stdin
//! - **init**: write a default `.discourse.toml`

pub mod analyze;
pub mod init;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_config;
