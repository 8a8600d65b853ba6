//! Tests for the binary's exit status and usage output.

use std::process::Command;

use tempfile::TempDir;

#[test]
fn test_no_arguments_prints_usage_and_exits_1() {
    let output = Command::new(env!("CARGO_BIN_EXE_whoispf"))
        .output()
        .expect("Failed to run whoispf");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage: whoispf"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_file_with_only_comments_exits_1() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("targets.txt");
    std::fs::write(&path, "# nothing to look up\n\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_whoispf"))
        .args(["-plain", path.to_str().unwrap()])
        .output()
        .expect("Failed to run whoispf");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
}

#[test]
fn test_help_exits_0() {
    let output = Command::new(env!("CARGO_BIN_EXE_whoispf"))
        .arg("--help")
        .output()
        .expect("Failed to run whoispf");

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--spf"));
}
