//! Integration tests for the `discourse` binary.

mod common;

use assert_cmd::Command;
use common::{lexicon_dir, EPISTEMIC_SAMPLE, THREAT_SAMPLE};
use discourse_engine::lexicon::LexiconCategory;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn discourse() -> Command {
    let mut cmd = Command::cargo_bin("discourse").unwrap();
    cmd.env_remove("DISCOURSE_LEXICON_DIR")
        .env_remove("DISCOURSE_LLM_API_KEY")
        .env_remove("DISCOURSE_LLM_MODEL")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    if !output.status.success() {
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("discourse command failed");
    }
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_analyze_positional_text_plain() {
    let stdout = stdout_of(discourse().args(["analyze", "--plain", THREAT_SAMPLE]));

    assert!(stdout.starts_with("--- Discourse Analysis Report ---"));
    assert!(stdout.contains("Word Count: 17"));
    assert!(stdout.contains("- Appeal to Fear (threat language)"));
    assert!(stdout.contains("- Ad Hominem / Attack (they want to [verb] pattern)"));
    assert!(stdout.contains("-> Possible in-group / out-group framing"));
}

#[test]
fn test_analyze_json_from_stdin() {
    let stdout = stdout_of(
        discourse()
            .args(["analyze", "--format", "json"])
            .write_stdin(EPISTEMIC_SAMPLE),
    );

    let json: Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["word_count"], 6);
    assert_eq!(json["sentence_count"], 1);
    let assumptions = json["hidden_assumptions"].as_array().unwrap();
    assert!(assumptions
        .iter()
        .any(|a| a["description"].as_str().unwrap().contains("obviously")));
}

#[test]
fn test_blank_input_is_rejected() {
    let output = discourse()
        .args(["analyze"])
        .write_stdin("   \n")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No text provided."));
}

#[test]
fn test_multiple_files_as_json_array() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    fs::write(&first, "Act now!").unwrap();
    fs::write(&second, THREAT_SAMPLE).unwrap();

    let stdout = stdout_of(discourse().args([
        "analyze",
        "--format",
        "json",
        "-f",
        first.to_str().unwrap(),
        "-f",
        second.to_str().unwrap(),
    ]));

    let json: Value = serde_json::from_str(&stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["report"]["word_count"], 2);
    assert_eq!(entries[1]["report"]["word_count"], 17);
}

#[test]
fn test_output_file_markdown() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.md");

    discourse()
        .args([
            "analyze",
            "--format",
            "markdown",
            "-o",
            out.to_str().unwrap(),
            THREAT_SAMPLE,
        ])
        .assert()
        .success();

    let markdown = fs::read_to_string(&out).unwrap();
    assert!(markdown.starts_with("# Discourse Analysis Report"));
    assert!(markdown.contains("## Hidden Agenda"));
}

#[test]
fn test_lexicon_dir_flag() {
    let lexicons = lexicon_dir(&[(LexiconCategory::Fear, r#"["storm", "flood", "drought"]"#)]);
    let stdout = stdout_of(discourse().args([
        "analyze",
        "--plain",
        "--lexicon-dir",
        lexicons.path().to_str().unwrap(),
        "The storm, the flood and the drought.",
    ]));
    assert!(stdout.contains("- Fear Language: High"));
}

#[test]
fn test_malformed_lexicon_fails() {
    let lexicons = lexicon_dir(&[(LexiconCategory::Fear, "not json")]);
    discourse()
        .args([
            "analyze",
            "--lexicon-dir",
            lexicons.path().to_str().unwrap(),
            "Some text.",
        ])
        .assert()
        .failure();
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().unwrap();

    discourse()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    assert!(dir.path().join(".discourse.toml").exists());

    discourse()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure();

    discourse()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_file_sets_default_format() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[output]\ndefault_format = \"json\"\n").unwrap();

    let stdout = stdout_of(discourse().args([
        "analyze",
        "--config",
        config.to_str().unwrap(),
        "We must act.",
    ]));
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["modal_verbs"][0], "must");
}
