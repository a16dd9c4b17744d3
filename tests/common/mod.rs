// tests/common/mod.rs
// Shared test utilities for integration tests
#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::{NamedTempFile, TempDir};

fn strutil_command(home: &Path) -> Command {
    // Run from an empty home so neither a user nor a project .strutilrc
    // leaks into the tests
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_strutil"));
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    cmd
}

/// Helper function to run strutil with given arguments and input via stdin
pub fn run_strutil_with_input(args: &[&str], input: &str) -> (String, String, i32) {
    run_strutil_with_bytes(args, input.as_bytes())
}

/// Like `run_strutil_with_input`, for stdin that is not valid UTF-8
pub fn run_strutil_with_bytes(args: &[&str], input: &[u8]) -> (String, String, i32) {
    let home = TempDir::new().expect("Failed to create temp home");
    let mut child = strutil_command(home.path())
        .args(args)
        .spawn()
        .expect("Failed to start strutil");

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input).expect("Failed to write to stdin");
    }

    let output = child.wait_with_output().expect("Failed to read output");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

/// Helper function to run strutil without stdin input
pub fn run_strutil(args: &[&str]) -> (String, String, i32) {
    run_strutil_with_input(args, "")
}

/// Write content to a temporary file that lives as long as the returned handle
pub fn temp_file_with(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file.flush().expect("Failed to flush temp file");
    file
}
