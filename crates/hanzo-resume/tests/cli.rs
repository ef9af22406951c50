//! Binary contract: JSON on stdout, exit status only for usage errors

mod common;

use common::write_file;
use serde_json::Value;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hanzo-resume"))
        .args(args)
        .env_remove("HANZO_RESUME_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run hanzo-resume")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_missing_argument_exits_non_zero() {
    let output = run(&[]);
    assert!(!output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "No file path provided");
    assert_eq!(json["error_kind"], "missing_argument");
}

#[test]
fn test_success_is_indented_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "resume.txt",
        "Visit https://github.com/jdoe and email jdoe@example.com",
    );

    let output = run(&[path.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    assert!(stdout.starts_with("{\n  \"success\": true"));

    let json = stdout_json(&output);
    assert_eq!(json["word_count"], 6);
    assert_eq!(json["emails"], serde_json::json!(["jdoe@example.com"]));
    assert_eq!(
        json["urls"],
        serde_json::json!([{"platform": "GitHub", "url": "https://github.com/jdoe"}])
    );
}

#[test]
fn test_extraction_failure_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    let output = run(&[missing.to_str().unwrap()]);
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "File not found");

    let unsupported = write_file(dir.path(), "resume.xyz", "text");
    let output = run(&[unsupported.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["error"], "Unsupported file type: .xyz");
}

#[test]
fn test_compact_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "resume.txt", "hello");

    let output = run(&["--compact", path.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    assert_eq!(stdout.trim_end().lines().count(), 1);
    assert_eq!(stdout_json(&output)["text"], "hello");
}

#[test]
fn test_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "resume.txt", "a resume that is longer than eight bytes");
    let config = write_file(dir.path(), "resume.toml", "max_file_size = 8\n");

    let output = run(&["--config", config.to_str().unwrap(), path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["error_kind"], "file_too_large");

    let bad = write_file(dir.path(), "bad.toml", "max_file_size = [");
    let output = run(&["--config", bad.to_str().unwrap(), path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert_eq!(stdout_json(&output)["error_kind"], "invalid_config");
}

#[test]
fn test_extra_arguments_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "resume.txt", "hello world");

    let output = run(&[path.to_str().unwrap(), "extra.txt", "--unknown"]);
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["success"], true);
    assert_eq!(json["word_count"], 2);
}

#[test]
fn test_hyphen_leading_path_is_reported_as_json() {
    let output = run(&["-resume.txt"]);
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["success"], false);
    assert_eq!(json["error_kind"], "file_not_found");
}
