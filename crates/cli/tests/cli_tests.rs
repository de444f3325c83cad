//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("lexmetric")
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn get_site_fixture_path(site: &str, name: &str) -> String {
    format!("../../tests/fixtures/sites/{}/{}", site, name)
}

fn lexicon_args() -> [String; 2] {
    ["--lexicons".to_string(), get_fixture_path("lexicons")]
}

#[test]
fn test_cli_text_table() {
    cmd()
        .args(lexicon_args())
        .args(["text", &get_fixture_path("texts/101.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("POSITIVE SCORE"))
        .stdout(predicate::str::contains("FOG INDEX"));
}

#[test]
fn test_cli_text_json() {
    let output = cmd()
        .args(lexicon_args())
        .args(["text", "-f", "json", &get_fixture_path("texts/101.txt")])
        .output()
        .unwrap();

    assert!(output.status.success());
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records[0]["url_id"], "101");
    assert_eq!(records[0]["positive_score"], 4);
    assert_eq!(records[0]["personal_pronouns"], 1);
}

#[test]
fn test_cli_text_stdin() {
    cmd()
        .args(lexicon_args())
        .args(["text", "-f", "csv", "-"])
        .write_stdin("Losses were weak. Fears of decline grew.")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("URL_ID,URL,POSITIVE SCORE"))
        .stdout(predicate::str::contains("stdin,-,0,4"));
}

#[test]
fn test_cli_text_html() {
    cmd()
        .args(lexicon_args())
        .args(["text", "--html", "-f", "json", &get_site_fixture_path("blog", "article.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"positive_score\": 4"));
}

#[test]
fn test_cli_text_html_without_article() {
    cmd()
        .args(lexicon_args())
        .args(["text", "--html", &get_fixture_path("no_article.html")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to extract article"));
}

#[test]
fn test_cli_text_empty_document() {
    cmd()
        .args(lexicon_args())
        .args(["text", &get_fixture_path("texts/104.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn test_cli_text_empty_document_zero_policy() {
    cmd()
        .args(lexicon_args())
        .args(["--empty-policy", "zero", "text", "-f", "csv", &get_fixture_path("texts/104.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("104,"));
}

#[test]
fn test_cli_text_empty_document_zero_record_policy() {
    cmd()
        .args(lexicon_args())
        .args(["--empty-policy", "zero-record", "text", "-f", "csv", &get_fixture_path("texts/104.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("104,"));
}

#[test]
fn test_cli_analyze_text_dir() {
    cmd()
        .args(lexicon_args())
        .args([
            "analyze",
            &get_fixture_path("input.csv"),
            "--text-dir",
            &get_fixture_path("texts"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("101,https://example.com/record-profits"))
        .stdout(predicate::str::contains("102,https://example.com/market-slump"))
        .stdout(predicate::str::contains("103,https").not())
        .stderr(predicate::str::contains("103"));
}

#[test]
fn test_cli_analyze_json_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("report.json");

    cmd()
        .args(lexicon_args())
        .args([
            "analyze",
            &get_fixture_path("input.csv"),
            "--text-dir",
            &get_fixture_path("texts"),
            "-f",
            "json",
            "--pretty",
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let records: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["negative_score"], 7);
}

#[test]
fn test_cli_analyze_missing_input() {
    cmd()
        .args(lexicon_args())
        .args(["analyze", "no_such_input.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input list"));
}

#[test]
fn test_cli_missing_lexicons() {
    cmd()
        .args(["--lexicons", "/no/such/lexicons", "text", &get_fixture_path("texts/101.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load lexicons"));
}

#[test]
fn test_cli_invalid_format() {
    cmd()
        .args(lexicon_args())
        .args(["analyze", &get_fixture_path("input.csv"), "-f", "xlsx"])
        .assert()
        .failure();
}

#[test]
fn test_cli_completions() {
    cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lexmetric"));
}

#[test]
fn test_cli_completions_elvish() {
    cmd()
        .args(["completions", "elvish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lexmetric"));
}

#[test]
fn test_cli_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("text"));
}

#[test]
fn test_cli_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}
