//! Edge case and error handling tests for ofexport


use assert_cmd::Command;
use harness::{TestInput, sample_folders};
use predicates::prelude::*;

fn ofexport() -> Command {
    let mut cmd = Command::cargo_bin("ofexport").expect("binary should build");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Input errors
// ============================================================================

#[test]
fn test_missing_file() {
    ofexport()
        .arg("/nonexistent/tasks.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ofexport: cannot read '/nonexistent/tasks.json'"));
}

#[test]
fn test_invalid_json() {
    let input = TestInput::new();
    let path = input.add_raw("broken.json", "{ not json");

    ofexport()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid task document"));
}

#[test]
fn test_unknown_node_type() {
    let input = TestInput::new();
    let path = input.add_raw("area.json", r#"{"type": "area", "name": "Home"}"#);

    ofexport()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid task document"));
}

#[test]
fn test_empty_document_fields_default() {
    let input = TestInput::new();
    let path = input.add_raw("bare.json", r#"{"type": "project", "name": "Bare"}"#);

    ofexport()
        .arg(&path)
        .assert()
        .success()
        .stdout("Project: Bare\n\n0 folders, 1 projects, 0 contexts, 0 tasks\n");
}

// ============================================================================
// Argument errors
// ============================================================================

#[test]
fn test_bad_task_regex() {
    let input = TestInput::new();
    let path = input.add_tree("tasks.json", &sample_folders());

    ofexport()
        .arg(&path)
        .args(["--tasks", "("])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid task pattern"));
}

#[test]
fn test_bad_project_glob() {
    let input = TestInput::new();
    let path = input.add_tree("tasks.json", &sample_folders());

    ofexport()
        .arg(&path)
        .args(["--project", "[abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid project pattern"));
}

#[test]
fn test_bad_duration() {
    let input = TestInput::new();
    let path = input.add_tree("tasks.json", &sample_folders());

    ofexport()
        .arg(&path)
        .args(["--due-within", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --due-within duration 'soon'"));
}

#[test]
fn test_unknown_format() {
    ofexport()
        .args(["-", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'yaml'"));
}

// ============================================================================
// Input sources and logging
// ============================================================================

#[test]
fn test_reads_stdin_by_default() {
    ofexport()
        .write_stdin(r#"{"type": "context", "name": "Phone", "tasks": [{"name": "Call Sam"}]}"#)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Context: Phone\n  [ ] Call Sam\n"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let input = TestInput::new();
    let path = input.add_tree("tasks.json", &sample_folders());

    ofexport()
        .arg(&path)
        .arg("-v")
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded folder 'Life'"))
        .stderr(predicate::str::contains("Traversing folder: Life"))
        .stdout(predicate::str::starts_with("Folder: Life\n"))
        .stdout(predicate::str::contains("DEBUG").not());
}

#[test]
fn test_everything_filtered_out() {
    let input = TestInput::new();
    let path = input.add_tree("tasks.json", &sample_folders());

    ofexport()
        .arg(&path)
        .args(["--tasks", "no such task", "--prune"])
        .assert()
        .success()
        .stdout("Folder: Life\n\n1 folders, 0 projects, 0 contexts, 0 tasks\n");
}
