//! Integration tests for top-level CLI behavior.
//!
//! These drive the compiled binary in a temp directory, so every scenario
//! fails before the GitHub existence check — no network is touched.

use std::path::PathBuf;
use std::process::{Command, Output};

fn run_ghlink(dir: &PathBuf, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_ghlink");
    Command::new(bin)
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run ghlink binary")
}

fn temp_workdir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn help_shows_usage() {
    let dir = temp_workdir("ghlink_cli_help");
    let output = run_ghlink(&dir, &["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--lines"));
    assert!(stdout.contains("FILE_PATH") || stdout.contains("file_path"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_file_path_argument_exits_with_error() {
    let dir = temp_workdir("ghlink_cli_noargs");
    let output = run_ghlink(&dir, &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!output.status.success());
    assert!(stdout.contains("Error:"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn invalid_line_spec_prints_diagnostic_and_no_url() {
    let dir = temp_workdir("ghlink_cli_badlines");
    std::fs::write(dir.join("a.py"), "print()\n").unwrap();

    let output = run_ghlink(&dir, &["a.py", "-l", "1,2,3"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!output.status.success());
    assert!(stdout.contains("invalid line spec"));
    assert!(!stdout.contains("https://"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_file_prints_file_not_found() {
    let dir = temp_workdir("ghlink_cli_nofile");
    let output = run_ghlink(&dir, &["nope.py"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!output.status.success());
    assert!(stdout.contains("file not found"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn outside_a_repository_prints_not_a_git_repository() {
    let dir = temp_workdir("ghlink_cli_norepo");
    std::fs::write(dir.join("a.py"), "print()\n").unwrap();

    let output = run_ghlink(&dir, &["a.py"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!output.status.success());
    assert!(stdout.contains("not a git repository"));
    let _ = std::fs::remove_dir_all(&dir);
}
