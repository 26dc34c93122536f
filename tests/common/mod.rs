// Shared fixtures for discourse-engine integration tests
#![allow(dead_code)]

use discourse_engine::lexicon::LexiconCategory;
use discourse_engine::pipeline::Pipeline;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const THREAT_SAMPLE: &str = "We must protect our people from this growing threat. \
                                 They want to destroy everything we stand for.";

pub const EPISTEMIC_SAMPLE: &str = "Obviously, we need to act now.";

pub const GENUINE_DICHOTOMY: &str = "Either the file exists or it doesn't.";

pub const FALSE_DILEMMA: &str = "Either you support this bill or you hate this country.";

pub fn builtin_pipeline() -> Pipeline {
    Pipeline::builtin().expect("built-in lexicons load")
}

/// A temporary lexicon directory with one JSON file per given category.
pub fn lexicon_dir(files: &[(LexiconCategory, &str)]) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    for (category, contents) in files {
        write_lexicon(dir.path(), *category, contents);
    }
    dir
}

pub fn write_lexicon(dir: &Path, category: LexiconCategory, contents: &str) {
    fs::write(dir.join(category.file_name()), contents).expect("write lexicon file");
}
