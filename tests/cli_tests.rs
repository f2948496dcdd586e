//! CLI integration tests for file2string.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn file2string_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_file2string"));
    cmd.current_dir(dir)
        .env_remove("FILE2STRING_PKG")
        .env_remove("FILE2STRING_VAR")
        .env_remove("FILE2STRING_OUTPUT")
        .env_remove("RUST_LOG");
    cmd
}

fn run_with_stdin(mut cmd: Command, stdin: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute file2string");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    let output = file2string_cmd(dir.path())
        .arg("--help")
        .output()
        .expect("Failed to execute file2string");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--pkg"));
    assert!(stdout.contains("--var"));
    assert!(stdout.contains("--o"));
}

#[test]
fn test_cli_no_files() {
    let dir = TempDir::new().unwrap();
    let output = file2string_cmd(dir.path())
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute file2string");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please specify files."));
    assert!(!dir.path().join("text.go").exists());
}

#[test]
fn test_cli_writes_default_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "has a ` inside").unwrap();

    let output = file2string_cmd(dir.path())
        .arg("a.txt")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute file2string");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generated text.go with 1 file(s)."));

    let generated = fs::read_to_string(dir.path().join("text.go")).unwrap();
    assert!(generated.contains("package main\n"));
    assert!(generated.contains("var text = map[string]string{"));
    assert!(generated.contains("\t\"a.txt\": `has a ` + \"`\" + ` inside`,\n"));
}

#[test]
fn test_cli_flags_and_nested_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "x").unwrap();

    let output = file2string_cmd(dir.path())
        .args(["--pkg", "assets", "--var", "files", "--o", "gen/assets.go", "--quiet", "a.txt"])
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute file2string");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let generated = fs::read_to_string(dir.path().join("gen/assets.go")).unwrap();
    assert!(generated.contains("package assets\n"));
    assert!(generated.contains("var files = map[string]string{"));
}

#[test]
fn test_cli_missing_input() {
    let dir = TempDir::new().unwrap();
    let output = file2string_cmd(dir.path())
        .arg("nope.txt")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute file2string");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("File nope.txt does not exist."));
}

#[test]
fn test_cli_binary_input() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("logo.png"), b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR").unwrap();

    let output = file2string_cmd(dir.path())
        .arg("logo.png")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute file2string");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("logo.png isn't a textual file"));
    assert!(!dir.path().join("text.go").exists());
}

#[test]
fn test_cli_directory_input() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("assets")).unwrap();

    let output = file2string_cmd(dir.path())
        .arg("assets")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute file2string");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("assets is a directory."));
}

#[test]
fn test_cli_overwrite_declined() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "new").unwrap();
    fs::write(dir.path().join("text.go"), "keep me").unwrap();

    let mut cmd = file2string_cmd(dir.path());
    cmd.arg("a.txt");
    let output = run_with_stdin(cmd, "x\nN\n");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "File has existed, do you want to rewrite the file? (y/n): Please input y or n: Abort.\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("text.go")).unwrap(),
        "keep me"
    );
}

#[test]
fn test_cli_overwrite_accepted() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "new").unwrap();
    fs::write(dir.path().join("text.go"), "old").unwrap();

    let mut cmd = file2string_cmd(dir.path());
    cmd.arg("a.txt");
    let output = run_with_stdin(cmd, "y\n");

    assert!(output.status.success());
    let generated = fs::read_to_string(dir.path().join("text.go")).unwrap();
    assert!(generated.contains("\t\"a.txt\": `new`,\n"));
}

#[test]
fn test_cli_invalid_package_name() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "x").unwrap();

    let output = file2string_cmd(dir.path())
        .args(["--pkg", "not-valid", "a.txt"])
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute file2string");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid package name"));
}

#[test]
fn test_cli_print_config_layers() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".file2string.yaml"), "pkg: assets\noutput: gen/a.go\n").unwrap();

    let output = file2string_cmd(dir.path())
        .env("FILE2STRING_VAR", "files")
        .args(["--o", "override.go", "--print-config"])
        .output()
        .expect("Failed to execute file2string");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pkg: assets"));
    assert!(stdout.contains("var: files"));
    assert!(stdout.contains("output: override.go"));
}

#[test]
fn test_cli_directory_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "x").unwrap();
    fs::create_dir(dir.path().join("out")).unwrap();

    let output = file2string_cmd(dir.path())
        .args(["--o", "out", "a.txt"])
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute file2string");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("out is a directory."));
}
