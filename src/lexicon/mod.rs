//! Named term lists (fear, authority, identity) used for keyword presence
//! detection.
//!
//! A [`LexiconStore`] is built once, either from the lexicons embedded in the
//! binary or from a directory of JSON files, and is read-only afterwards. It is
//! shared by reference (usually through an `Arc`) between analyzers and across
//! threads.
//!
//! Each lexicon file is a JSON array of strings named `<category>_terms.json`.
//! A missing file yields an empty lexicon; anything unreadable or malformed
//! fails the whole load so that analysis never runs on a partial store.

use crate::errors::{Error, Result};
use crate::text::TermMatcher;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const BUILTIN_FEAR: &str = include_str!("../../lexicons/fear_terms.json");
const BUILTIN_AUTHORITY: &str = include_str!("../../lexicons/authority_terms.json");
const BUILTIN_IDENTITY: &str = include_str!("../../lexicons/identity_terms.json");

/// The lexicon categories the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum LexiconCategory {
    Fear,
    Authority,
    Identity,
}

impl LexiconCategory {
    pub const ALL: [LexiconCategory; 3] = [Self::Fear, Self::Authority, Self::Identity];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Fear => "fear_terms.json",
            Self::Authority => "authority_terms.json",
            Self::Identity => "identity_terms.json",
        }
    }

    fn builtin_source(self) -> &'static str {
        match self {
            Self::Fear => BUILTIN_FEAR,
            Self::Authority => BUILTIN_AUTHORITY,
            Self::Identity => BUILTIN_IDENTITY,
        }
    }
}

impl fmt::Display for LexiconCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fear => "fear",
            Self::Authority => "authority",
            Self::Identity => "identity",
        };
        f.write_str(name)
    }
}

/// One named, case-folded, deduplicated term list with its compiled matcher.
#[derive(Debug, Clone)]
pub struct LexiconSet {
    category: LexiconCategory,
    terms: BTreeSet<String>,
    matcher: TermMatcher,
}

impl LexiconSet {
    pub fn new<I, S>(category: LexiconCategory, terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms: BTreeSet<String> = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        let matcher = TermMatcher::new(&terms)?;
        Ok(Self {
            category,
            terms,
            matcher,
        })
    }

    pub fn empty(category: LexiconCategory) -> Self {
        Self {
            category,
            terms: BTreeSet::new(),
            matcher: TermMatcher::empty(),
        }
    }

    pub fn category(&self) -> LexiconCategory {
        self.category
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(&term.to_lowercase())
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn matcher(&self) -> &TermMatcher {
        &self.matcher
    }

    /// Number of distinct lexicon terms present in `text` as whole words.
    pub fn hits(&self, text: &str) -> usize {
        self.matcher.count_present(text)
    }
}

/// The three lexicons, loaded together.
#[derive(Debug, Clone)]
pub struct LexiconStore {
    fear: LexiconSet,
    authority: LexiconSet,
    identity: LexiconSet,
    source: Option<PathBuf>,
}

impl LexiconStore {
    /// Lexicons shipped with the crate.
    pub fn builtin() -> Result<Self> {
        let load = |category: LexiconCategory| {
            parse_terms(category.builtin_source(), None)
                .and_then(|terms| LexiconSet::new(category, terms))
        };
        Ok(Self {
            fear: load(LexiconCategory::Fear)?,
            authority: load(LexiconCategory::Authority)?,
            identity: load(LexiconCategory::Identity)?,
            source: None,
        })
    }

    /// Load every category from `dir`. Missing files become empty lexicons.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::configuration_at(
                "lexicon directory does not exist or is not a directory",
                dir,
            ));
        }

        let store = Self {
            fear: load_category(dir, LexiconCategory::Fear)?,
            authority: load_category(dir, LexiconCategory::Authority)?,
            identity: load_category(dir, LexiconCategory::Identity)?,
            source: Some(dir.to_path_buf()),
        };
        tracing::debug!(
            dir = %dir.display(),
            fear = store.fear.len(),
            authority = store.authority.len(),
            identity = store.identity.len(),
            "loaded lexicons"
        );
        Ok(store)
    }

    /// Load from `dir` when given, otherwise fall back to the built-in set.
    pub fn load_or_builtin(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Self::load(dir),
            None => Self::builtin(),
        }
    }

    /// Assemble a store from already-built sets. Each set must carry the
    /// category it is placed under.
    pub fn from_sets(fear: LexiconSet, authority: LexiconSet, identity: LexiconSet) -> Result<Self> {
        let placed = [
            (LexiconCategory::Fear, &fear),
            (LexiconCategory::Authority, &authority),
            (LexiconCategory::Identity, &identity),
        ];
        if let Some((expected, set)) = placed.iter().find(|(c, s)| s.category() != *c) {
            return Err(Error::configuration(format!(
                "{} lexicon supplied where the {} lexicon was expected",
                set.category(),
                expected
            )));
        }
        Ok(Self {
            fear,
            authority,
            identity,
            source: None,
        })
    }

    pub fn get(&self, category: LexiconCategory) -> &LexiconSet {
        match category {
            LexiconCategory::Fear => &self.fear,
            LexiconCategory::Authority => &self.authority,
            LexiconCategory::Identity => &self.identity,
        }
    }

    pub fn fear(&self) -> &LexiconSet {
        &self.fear
    }

    pub fn authority(&self) -> &LexiconSet {
        &self.authority
    }

    pub fn identity(&self) -> &LexiconSet {
        &self.identity
    }

    /// Directory the store was loaded from; `None` for the built-in lexicons.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn load_category(dir: &Path, category: LexiconCategory) -> Result<LexiconSet> {
    let path = dir.join(category.file_name());
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "lexicon file missing, using empty {category} lexicon");
            return Ok(LexiconSet::empty(category));
        }
        Err(e) => {
            return Err(Error::configuration_at(
                format!("failed to read lexicon: {e}"),
                path,
            ))
        }
    };

    let terms = parse_terms(&contents, Some(&path))?;
    LexiconSet::new(category, terms)
}

/// Parse a lexicon file body: a JSON array of strings and nothing else.
fn parse_terms(contents: &str, path: Option<&Path>) -> Result<Vec<String>> {
    let fail = |message: String| match path {
        Some(p) => Error::configuration_at(message, p),
        None => Error::configuration(message),
    };

    let value: serde_json::Value =
        serde_json::from_str(contents).map_err(|e| fail(format!("malformed lexicon JSON: {e}")))?;
    let items = value
        .as_array()
        .ok_or_else(|| fail("lexicon must be a JSON array of strings".to_string()))?;

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| fail(format!("lexicon entry {idx} is not a string")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_store_has_all_categories() {
        let store = LexiconStore::builtin().unwrap();
        for category in LexiconCategory::ALL {
            assert!(!store.get(category).is_empty(), "{category} lexicon empty");
        }
        assert!(store.fear().contains("threat"));
        assert!(store.source().is_none());
    }

    #[test]
    fn test_terms_are_case_folded_and_deduplicated() {
        let set = LexiconSet::new(LexiconCategory::Fear, ["Threat", "threat ", "DANGER", ""])
            .unwrap();
        let terms: Vec<_> = set.terms().collect();
        assert_eq!(terms, vec!["danger", "threat"]);
    }

    #[test]
    fn test_hits_counts_distinct_whole_words() {
        let set = LexiconSet::new(LexiconCategory::Fear, ["war", "threat"]).unwrap();
        assert_eq!(set.hits("An award for the warden."), 0);
        assert_eq!(set.hits("War! War is a threat."), 2);
    }

    #[test]
    fn test_load_missing_files_yield_empty_lexicons() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("fear_terms.json"), r#"["panic"]"#).unwrap();

        let store = LexiconStore::load(dir.path()).unwrap();
        assert_eq!(store.fear().len(), 1);
        assert!(store.authority().is_empty());
        assert!(store.identity().is_empty());
        assert_eq!(store.source(), Some(dir.path()));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("fear_terms.json"), r#"["panic""#).unwrap();

        let err = LexiconStore::load(dir.path()).unwrap_err();
        assert_eq!(err.category(), "Config");
        assert!(err.path().unwrap().ends_with("fear_terms.json"));
    }

    #[test]
    fn test_load_rejects_non_array_and_non_string_entries() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("authority_terms.json"), r#"{"terms": []}"#).unwrap();
        assert!(LexiconStore::load(dir.path()).is_err());

        fs::write(dir.path().join("authority_terms.json"), r#"["law", 3]"#).unwrap();
        let err = LexiconStore::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("entry 1"));
    }

    #[test]
    fn test_load_rejects_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            LexiconStore::load(&missing),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_from_sets_checks_categories() {
        let fear = LexiconSet::empty(LexiconCategory::Fear);
        let authority = LexiconSet::empty(LexiconCategory::Authority);
        let identity = LexiconSet::empty(LexiconCategory::Identity);
        assert!(LexiconStore::from_sets(
            fear.clone(),
            authority.clone(),
            identity.clone()
        )
        .is_ok());
        assert!(LexiconStore::from_sets(authority, fear, identity).is_err());
    }
}
