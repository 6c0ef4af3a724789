// Command-line tests for the portfolio-builder binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("portfolio-builder").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn new_session(dir: &TempDir, template: &str) {
    cli(dir)
        .args(["new", template, "-o", "session.json"])
        .assert()
        .success();
}

#[test]
fn test_templates_lists_catalog() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("codecraft"))
        .stdout(predicate::str::contains("FreshStart"));

    cli(&dir)
        .args(["templates", "--category", "designer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PixelPerfect"))
        .stdout(predicate::str::contains("BugHunter").not());
}

#[test]
fn test_fields_unknown_template_fails() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["fields", "retro"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Unknown template: retro"));
}

#[test]
fn test_fields_shows_schema() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["fields", "freshstart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("goals"))
        .stdout(predicate::str::contains("education"));
}

#[test]
fn test_new_edit_and_export_html() {
    let dir = TempDir::new().unwrap();
    new_session(&dir, "devflow");

    cli(&dir)
        .args(["edit", "session.json", "set", "name", "Ada Lovelace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set name"));
    cli(&dir)
        .args(["edit", "session.json", "add", "skills", "Rust"])
        .assert()
        .success();

    cli(&dir)
        .args(["export", "session.json", "-o", "site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("devflow-portfolio.html"));

    let html = fs::read_to_string(dir.path().join("site/devflow-portfolio.html")).unwrap();
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("Rust"));
}

#[test]
fn test_edit_rejects_wrong_kind() {
    let dir = TempDir::new().unwrap();
    new_session(&dir, "codecraft");
    cli(&dir)
        .args(["edit", "session.json", "set", "skills", "Rust"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Field 'skills'"));
}

#[test]
fn test_export_react() {
    let dir = TempDir::new().unwrap();
    new_session(&dir, "techstack");
    cli(&dir)
        .args(["export", "session.json", "--format", "react", "-o", "out"])
        .assert()
        .success();

    let tsx = fs::read_to_string(dir.path().join("out/TechStackPortfolio.tsx")).unwrap();
    assert!(tsx.contains("export default function TechStackPortfolio()"));
}

#[test]
fn test_export_zip_fallback_with_archive_disabled() {
    let dir = TempDir::new().unwrap();
    new_session(&dir, "testlab");
    fs::write(dir.path().join("no-zip.toml"), "[export]\narchive = false\n").unwrap();

    cli(&dir)
        .args([
            "export", "session.json", "--format", "zip", "-o", "out", "--config", "no-zip.toml",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Downloading HTML file instead"));

    assert!(dir.path().join("out/testlab-portfolio.html").exists());
    assert!(!dir.path().join("out/testlab-portfolio.zip").exists());
}

#[test]
fn test_export_uses_config_brand() {
    let dir = TempDir::new().unwrap();
    new_session(&dir, "creativeflow");
    fs::write(
        dir.path().join("portfolio.toml"),
        "[output]\ndirectory = \"public\"\n\n[export]\nbrand = \"Acme Studio\"\n",
    )
    .unwrap();

    cli(&dir).args(["export", "session.json"]).assert().success();

    let html = fs::read_to_string(dir.path().join("public/creativeflow-portfolio.html")).unwrap();
    assert!(html.contains("Acme Studio"));
}

#[test]
fn test_preview_to_stdout() {
    let dir = TempDir::new().unwrap();
    new_session(&dir, "bughunter");
    cli(&dir)
        .args(["preview", "session.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bug Hunter"));
}

#[test]
fn test_seo_prints_metadata() {
    let dir = TempDir::new().unwrap();
    new_session(&dir, "qualitypro");
    cli(&dir)
        .args(["seo", "session.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Portfolio - Professional Portfolio\""));
}

#[test]
fn test_missing_session_fails() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["preview", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: IO error"));
}
