//! Ensure CLI failures honor `--output json` and exit non-zero.

use std::process::Command;

use assert_cmd::cargo;

fn dataurl_cmd() -> Command {
    Command::new(cargo::cargo_bin!("dataurl"))
}

fn run_failing_json(args: &[&str]) -> serde_json::Value {
    let output = dataurl_cmd()
        .args(args)
        .args(["--output", "json"])
        .output()
        .expect("run dataurl command");
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid json envelope");
    assert_eq!(json["success"], false);
    json
}

#[test]
fn missing_comma_emits_json_error_envelope() {
    let json = run_failing_json(&["parse", "data:text/plain"]);
    assert_eq!(json["error"], "missing_comma");
    assert!(
        json["message"].as_str().is_some_and(|m| m.contains("U+002C")),
        "unexpected message: {}",
        json["message"]
    );
}

#[test]
fn wrong_scheme_emits_json_error_envelope() {
    let json = run_failing_json(&["decode", "data2:text/plain"]);
    assert_eq!(json["error"], "invalid_scheme");
}

#[test]
fn not_a_url_emits_json_error_envelope() {
    let json = run_failing_json(&["normalize", "data"]);
    assert_eq!(json["error"], "not_a_url");
}

#[test]
fn bad_base64_emits_json_error_envelope() {
    let json = run_failing_json(&["parse", "data:text/plain;base64,Q"]);
    assert_eq!(json["error"], "base64_decode");
}

#[test]
fn invalid_encode_type_emits_json_error_envelope() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("x.bin");
    std::fs::write(&path, b"x").expect("write temp file");
    let path = path.to_string_lossy().to_string();
    let json = run_failing_json(&["encode", &path, "--type", "nonsense"]);
    assert_eq!(json["error"], "invalid_type");
}

#[test]
fn missing_file_emits_command_failed_envelope() {
    let json = run_failing_json(&["encode", "nope-does-not-exist.bin"]);
    assert_eq!(json["error"], "command_failed");
    assert!(
        json["message"]
            .as_str()
            .is_some_and(|m| m.contains("nope-does-not-exist.bin")),
        "unexpected message: {}",
        json["message"]
    );
}

#[test]
fn pretty_errors_go_to_stderr() {
    let output = dataurl_cmd()
        .args(["parse", "data:text/plain", "--output", "pretty"])
        .output()
        .expect("run parse");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found in data URL body"), "stderr={stderr}");
}
