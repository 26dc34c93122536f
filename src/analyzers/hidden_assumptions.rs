//! Rule-based hidden assumption extraction.
//!
//! Six independent rule families look for pragmatic triggers: wording that
//! makes a reader accept something the text never argues for.
//!
//! 1. **Presupposition**: factive, implicative, change-of-state and
//!    repetition verbs/adverbs, each sub-category with its own term list.
//! 2. **Epistemic shortcut**: obviousness claims ("obviously", "of course").
//! 3. **Universal quantifier**: blanket generalization or shared belief.
//! 4. **Conclusion marker**: an inference whose premises stay unstated
//!    (an enthymeme).
//! 5. **Loaded question**: "why do you still X", "when did you stop X".
//! 6. **Vague authority**: unspecified expert consensus.
//!
//! Every distinct trigger emits one assumption. A trigger never fires twice
//! within its own rule, but the same sentence may feed several rules.

use crate::core::{AssumptionRule, HiddenAssumption};
use crate::text::NormalizedText;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// A named trigger and the pattern that finds it.
struct Trigger {
    term: &'static str,
    pattern: Regex,
}

fn triggers(specs: &[(&'static str, &str)]) -> Vec<Trigger> {
    specs
        .iter()
        .map(|&(term, pattern)| Trigger {
            term,
            pattern: Regex::new(&format!(r"(?i)\b(?:{pattern})\b"))
                .unwrap_or_else(|e| panic!("invalid trigger pattern for {term:?}: {e}")),
        })
        .collect()
}

/// A presupposition sub-category with the proposition its triggers carry.
struct PresuppositionKind {
    label: &'static str,
    implication: &'static str,
    triggers: Vec<Trigger>,
}

static PRESUPPOSITIONS: Lazy<Vec<PresuppositionKind>> = Lazy::new(|| {
    vec![
        PresuppositionKind {
            label: "factive",
            implication: "treats the embedded claim as an established fact",
            triggers: triggers(&[
                ("realize", r"realiz(?:e|es|ed|ing)"),
                ("know", r"know|knows|knew|known"),
                ("regret", r"regret(?:s|ted|ting)?"),
                ("discover", r"discover(?:s|ed|ing)?"),
                ("notice", r"notic(?:e|es|ed|ing)"),
                ("be aware", r"(?:is|are|was|were|be)\s+aware"),
            ]),
        },
        PresuppositionKind {
            label: "implicative",
            implication: "presupposes an attempt, intention or obligation",
            triggers: triggers(&[
                ("manage to", r"manag(?:e|es|ed|ing)\s+to"),
                ("forget to", r"(?:forget|forgets|forgot|forgotten)\s+to"),
                ("fail to", r"fail(?:s|ed|ing)?\s+to"),
                ("bother to", r"bother(?:s|ed)?\s+to"),
                ("happen to", r"happen(?:s|ed)?\s+to"),
            ]),
        },
        PresuppositionKind {
            label: "change of state",
            implication: "presupposes a prior state that is now changing",
            triggers: triggers(&[
                ("stop", r"stop(?:s|ped|ping)?"),
                ("start", r"start(?:s|ed|ing)?"),
                ("begin", r"begin|begins|began|begun"),
                ("continue", r"continu(?:e|es|ed|ing)"),
                ("quit", r"quit(?:s|ting)?"),
                ("cease", r"ceas(?:e|es|ed|ing)"),
            ]),
        },
        PresuppositionKind {
            label: "repetition",
            implication: "presupposes the event or state happened before",
            triggers: triggers(&[
                ("again", r"again"),
                ("anymore", r"any\s?more"),
                ("once more", r"once\s+more"),
                ("restore", r"restor(?:e|es|ed|ing)"),
                ("return to", r"return(?:s|ed|ing)?\s+to"),
            ]),
        },
    ]
});

/// A rule family with one implication shared by all of its triggers.
struct TriggerRule {
    rule: AssumptionRule,
    implication: &'static str,
    triggers: Vec<Trigger>,
}

static EPISTEMIC_SHORTCUTS: Lazy<TriggerRule> = Lazy::new(|| TriggerRule {
    rule: AssumptionRule::EpistemicShortcut,
    implication: "asserts the claim is self-evident without justification",
    triggers: triggers(&[
        ("obviously", r"obviously"),
        ("clearly", r"clearly"),
        ("of course", r"of\s+course"),
        ("everyone knows", r"every(?:one|body)\s+knows"),
        ("it goes without saying", r"it\s+goes\s+without\s+saying"),
        ("needless to say", r"needless\s+to\s+say"),
        ("undeniably", r"undeniabl[ey]"),
        ("evidently", r"evidently"),
    ]),
});

static UNIVERSAL_QUANTIFIERS: Lazy<TriggerRule> = Lazy::new(|| TriggerRule {
    rule: AssumptionRule::UniversalQuantifier,
    implication: "assumes a blanket generalization or a belief everyone shares",
    triggers: triggers(&[
        ("everyone", r"everyone|everybody"),
        ("no one", r"no\s+one|nobody"),
        ("always", r"always"),
        ("never", r"never"),
        ("all", r"all"),
        ("every", r"every"),
        ("none", r"none"),
    ]),
});

static CONCLUSION_MARKERS: Lazy<TriggerRule> = Lazy::new(|| TriggerRule {
    rule: AssumptionRule::ConclusionMarker,
    implication: "draws an inference whose premises are left unstated",
    triggers: triggers(&[
        ("therefore", r"therefore"),
        ("thus", r"thus"),
        ("hence", r"hence"),
        ("consequently", r"consequently"),
        ("so it follows", r"(?:so\s+)?it\s+follows"),
        ("which means", r"which\s+means"),
        ("that's why", r"that['’]?s\s+why|that\s+is\s+why"),
    ]),
});

static VAGUE_AUTHORITY: Lazy<TriggerRule> = Lazy::new(|| TriggerRule {
    rule: AssumptionRule::VagueAuthority,
    implication: "invokes an unspecified expert consensus",
    triggers: triggers(&[
        ("experts say", r"experts?\s+(?:say|says|agree|believe|warn)"),
        ("studies show", r"(?:studies|research)\s+(?:shows?|suggests?|proves?)"),
        ("scientists agree", r"scientists\s+(?:say|agree|believe)"),
        ("it is widely believed", r"it\s+is\s+widely\s+(?:believed|accepted|known)"),
        ("many people say", r"many\s+(?:people|observers|critics)\s+(?:say|believe|think)"),
        ("sources say", r"sources\s+(?:say|claim|confirm)"),
    ]),
});

static LOADED_QUESTIONS: Lazy<Vec<Regex>> = Lazy::new(|| {
    crate::text::compile_patterns(&[
        r"(?i)\bwhy\s+(?:do|does|did)\s+(?:you|they|he|she|we)\s+still\s+\w+",
        r"(?i)\bwhen\s+did\s+(?:you|they|he|she|we)\s+stop\s+\w+",
        r"(?i)\b(?:have|has)\s+(?:you|they|he|she)\s+stopped\s+\w+",
        r"(?i)\bwhy\s+(?:do|does)\s+(?:you|they|he|she)\s+keep\s+\w+",
    ])
});

const LOADED_QUESTION_IMPLICATION: &str =
    "presupposes guilt or a prior commitment the respondent must accept to answer";

/// Presupposition triggers, one assumption per matched sub-category term.
pub fn presuppositions(text: &NormalizedText) -> Vec<HiddenAssumption> {
    PRESUPPOSITIONS
        .iter()
        .flat_map(|kind| {
            kind.triggers
                .iter()
                .filter(|t| t.pattern.is_match(text.raw()))
                .map(move |t| HiddenAssumption {
                    rule: AssumptionRule::Presupposition,
                    trigger: t.term.to_string(),
                    description: format!(
                        "Presupposition ({}) \"{}\": {}",
                        kind.label, t.term, kind.implication
                    ),
                })
        })
        .collect()
}

fn scan(rule: &TriggerRule, text: &NormalizedText) -> Vec<HiddenAssumption> {
    rule.triggers
        .iter()
        .filter(|t| t.pattern.is_match(text.raw()))
        .map(|t| HiddenAssumption {
            rule: rule.rule,
            trigger: t.term.to_string(),
            description: format!("{} \"{}\": {}", rule.rule, t.term, rule.implication),
        })
        .collect()
}

pub fn epistemic_shortcuts(text: &NormalizedText) -> Vec<HiddenAssumption> {
    scan(&EPISTEMIC_SHORTCUTS, text)
}

pub fn universal_quantifiers(text: &NormalizedText) -> Vec<HiddenAssumption> {
    scan(&UNIVERSAL_QUANTIFIERS, text)
}

pub fn conclusion_markers(text: &NormalizedText) -> Vec<HiddenAssumption> {
    scan(&CONCLUSION_MARKERS, text)
}

pub fn vague_authority(text: &NormalizedText) -> Vec<HiddenAssumption> {
    scan(&VAGUE_AUTHORITY, text)
}

/// Loaded questions in text order; the same question (case-folded, with
/// whitespace collapsed) is reported once.
pub fn loaded_questions(text: &NormalizedText) -> Vec<HiddenAssumption> {
    let mut matches: Vec<(usize, String)> = LOADED_QUESTIONS
        .iter()
        .flat_map(|re| re.find_iter(text.raw()))
        .map(|m| {
            let phrase = m
                .as_str()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase();
            (m.start(), phrase)
        })
        .collect();
    matches.sort_by_key(|(start, _)| *start);

    let mut seen = HashSet::new();
    matches
        .into_iter()
        .filter(|(_, phrase)| seen.insert(phrase.clone()))
        .map(|(_, phrase)| HiddenAssumption {
            rule: AssumptionRule::LoadedQuestion,
            description: format!(
                "{} \"{}\": {}",
                AssumptionRule::LoadedQuestion,
                phrase,
                LOADED_QUESTION_IMPLICATION
            ),
            trigger: phrase,
        })
        .collect()
}

/// All six rule families, in rule order.
pub fn extract_all(text: &NormalizedText) -> Vec<HiddenAssumption> {
    let rules: [fn(&NormalizedText) -> Vec<HiddenAssumption>; 6] = [
        presuppositions,
        epistemic_shortcuts,
        universal_quantifiers,
        conclusion_markers,
        loaded_questions,
        vague_authority,
    ];
    rules.iter().flat_map(|rule| rule(text)).collect()
}
