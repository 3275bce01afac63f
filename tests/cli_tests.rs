//! CLI integration tests for the stemmer-hr binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stemmer_hr() -> Command {
    let mut cmd = Command::cargo_bin("stemmer-hr").unwrap();
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"))
        .env_remove("STEMMER_HR_DATA_DIR");
    cmd
}

#[test]
fn test_stem_words() {
    stemmer_hr()
        .args(["stem", "Striborovu", "njoj"])
        .assert()
        .success()
        .stdout("Striborovu -> striborov\nnjoj -> njoj\n");
}

#[test]
fn test_stem_words_verbose_shows_rules() {
    stemmer_hr()
        .args(["-vv", "stem", "njoj"])
        .assert()
        .success()
        .stdout(predicate::str::contains("njoj -> njoj [no rule]"));
}

#[test]
fn test_text_from_stdin_as_json() {
    stemmer_hr()
        .args(["--format", "json", "text"])
        .write_stdin("Zašao neki momak u šumu")
        .assert()
        .success()
        .stdout("{\"documents\":[[\"zaša\",\"nek\",\"momak\",\"u\",\"šum\"]]}\n");
}

#[test]
fn test_text_lines_from_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "Zašao neki momak\nu šumu Striborovu\n").unwrap();

    stemmer_hr()
        .args(["text", "--lines"])
        .arg(&input)
        .assert()
        .success()
        .stdout("zaša nek momak\nu šum striborov\n");
}

#[test]
fn test_rules_reports_skipped_lines() {
    let dir = TempDir::new().unwrap();
    let rules = dir.path().join("rules.txt");
    fs::write(&rules, ".+m u|a\nbroken line here\n").unwrap();

    stemmer_hr()
        .args(["rules", "--skipped-only", "--rules"])
        .arg(&rules)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 rules loaded, 1 lines skipped"))
        .stdout(predicate::str::contains("line 2:"));
}

#[test]
fn test_missing_rules_file_exits_with_error() {
    stemmer_hr()
        .args(["stem", "šumu", "--rules", "/nonexistent/rules.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: rule file not found"));
}

#[test]
fn test_explain_logs_decisions() {
    stemmer_hr()
        .args(["--explain", "stem", "šumu"])
        .assert()
        .success()
        .stdout("šumu -> šum\n")
        .stderr(predicate::str::contains("accepted"));
}
