use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn beauti_tex() -> Command {
    let mut cmd = Command::cargo_bin("beauti-tex").unwrap();
    cmd.env("BEAUTI_TEX_ASSETS", fixture_path("assets"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn make_project_creates_tree() {
    let out = tempfile::tempdir().unwrap();

    beauti_tex()
        .args(["make-project", "--name", "MyCLITest", "--project-path"])
        .arg(out.path())
        .args(["--config-path"])
        .arg(fixture_path("report.ini"))
        .assert()
        .success()
        .stdout(predicate::str::contains("LaTeX project created"));

    let root = out.path().join("MyCLITest");
    for folder in ["figures", "tables", "chapters"] {
        assert!(root.join(folder).is_dir(), "{folder}");
    }
    let main = std::fs::read_to_string(root.join("main.tex")).unwrap();
    assert!(main.contains("report document class"));
    assert!(main.contains("size 12"));
    for chapter in ["intro", "methods"] {
        assert!(main.contains(&format!("\\input{{chapters/{chapter}}}")));
    }
    for file in [
        "pak.tex",
        "literature.bib",
        "chapters/appendix.tex",
        "chapters/abstract.tex",
        "chapters/titlepage.tex",
    ] {
        assert!(root.join(file).exists(), "{file}");
    }
}

#[test]
fn short_flags_are_accepted() {
    let out = tempfile::tempdir().unwrap();

    beauti_tex()
        .args(["make-project", "-N", "Short", "-p"])
        .arg(out.path())
        .assert()
        .success();

    assert!(out.path().join("Short/main.tex").is_file());
}

#[test]
fn existing_project_exits_non_zero() {
    let out = tempfile::tempdir().unwrap();
    std::fs::create_dir(out.path().join("Taken")).unwrap();

    beauti_tex()
        .args(["make-project", "--name", "Taken", "--project-path"])
        .arg(out.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn missing_config_file_exits_non_zero() {
    let out = tempfile::tempdir().unwrap();

    beauti_tex()
        .args(["make-project", "--name", "Paper", "--project-path"])
        .arg(out.path())
        .args(["--config-path"])
        .arg(out.path().join("nope.ini"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));

    assert!(!out.path().join("Paper").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let out = tempfile::tempdir().unwrap();

    beauti_tex()
        .args(["make-project", "--name", "Preview", "--dry-run", "--project-path"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("chapters/titlepage.tex"))
        .stdout(predicate::str::contains("no files written"));

    assert!(!out.path().join("Preview").exists());
}

#[test]
fn check_prints_json_config() {
    let output = beauti_tex()
        .args(["check", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["document_class"], "article");
    assert_eq!(json["size"], 11);
    assert_eq!(json["chapters"], serde_json::json!(["intro", "methods"]));
}

#[test]
fn check_reports_valid_configuration() {
    beauti_tex()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}
