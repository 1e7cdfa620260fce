//! CLI tests for the `inspector` binary.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use collector::exit_codes;

fn run_inspector(dir: &std::path::Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_inspector"))
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn inspector");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("inspector output")
}

#[test]
fn prompted_path_resolves_under_src() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::create_dir(temp.path().join("src")).expect("mkdir");
    fs::write(temp.path().join("src").join("poem.txt"), "roses are red\nviolets\n").expect("write");

    let output = run_inspector(temp.path(), &[], "poem.txt\n");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--- Reading File: poem.txt ---"));
    assert!(stdout.contains("roses are red"));
    assert!(stdout.contains("Number of Lines: 2"));
    assert!(stdout.contains("Number of Words: 4"));
    assert!(stdout.contains("Number of Characters: 20"));
}

#[test]
fn closed_stdin_cancels_without_error() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = run_inspector(temp.path(), &[], "");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Warning: 'src' directory not found"));
    assert!(stdout.contains("File selection cancelled"));
}

#[test]
fn missing_file_fails() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = run_inspector(temp.path(), &["absent.txt"], "");

    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"));
}
