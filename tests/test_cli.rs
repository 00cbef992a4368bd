use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::tempdir;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_log-viewer")
}

fn write_file(path: &Path, content: &str) {
    fs::write(path, content).expect("failed to write test file");
}

fn run_with_stdin(args: &[&str], input: &str) -> std::process::Output {
    let mut child = Command::new(bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary should start");

    child
        .stdin
        .as_mut()
        .expect("piped stdin")
        .write_all(input.as_bytes())
        .expect("stdin should accept input");

    child.wait_with_output().expect("binary should exit")
}

#[test]
fn test_interactive_session_exits_zero_on_quit() {
    let dir = tempdir().expect("temp dir");
    let log = dir.path().join("app.log");
    let config = dir.path().join("logging.toml");
    write_file(&log, "DEBUG: a\nERROR: one\nERROR: two\n");
    write_file(&config, "level = \"info\"\n");

    let input = format!("{}\nERROR\nnext\nquit\n", log.display());
    let output = run_with_stdin(
        &["--log-config", config.to_str().expect("utf8 path")],
        &input,
    );

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ERROR: one"));
    assert!(stdout.contains("ERROR: two"));
}

#[test]
fn test_file_and_level_flags_skip_the_prompts() {
    let dir = tempdir().expect("temp dir");
    let log = dir.path().join("app.log");
    let config = dir.path().join("logging.toml");
    write_file(&log, "CRITICAL: boom\n");
    write_file(&config, "level = \"info\"\n");

    let output = run_with_stdin(
        &[
            "--log-config",
            config.to_str().expect("utf8 path"),
            "--file",
            log.to_str().expect("utf8 path"),
            "--level",
            "critical",
        ],
        "quit\n",
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CRITICAL: boom"));
    assert!(!stdout.contains("Enter the path of your log file"));
}

#[test]
fn test_missing_logging_config_fails_the_process() {
    let dir = tempdir().expect("temp dir");
    let missing = dir.path().join("nope.toml");

    let output = run_with_stdin(
        &["--log-config", missing.to_str().expect("utf8 path")],
        "",
    );

    assert!(!output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("Failed to read logging config"),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_invalid_command_exits_nonzero() {
    let dir = tempdir().expect("temp dir");
    let log = dir.path().join("app.log");
    let config = dir.path().join("logging.toml");
    write_file(&log, "ERROR: one\nERROR: two\n");
    write_file(&config, "level = \"info\"\n");

    let input = format!("{}\nERROR\nbogus\n", log.display());
    let output = run_with_stdin(
        &["--log-config", config.to_str().expect("utf8 path")],
        &input,
    );

    assert!(!output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("bogus is not a valid action, enter next or quit.")
    );
}

#[test]
fn test_wrong_path_is_reported_on_stdout_not_stderr() {
    let dir = tempdir().expect("temp dir");
    let config = dir.path().join("logging.toml");
    write_file(&config, "level = \"info\"\n");

    let input = format!("{}\nERROR\n", dir.path().join("no-such.log").display());
    let output = run_with_stdin(
        &["--log-config", config.to_str().expect("utf8 path")],
        &input,
    );

    assert!(output.status.success(), "a wrong path does not crash the app");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout
            .matches("The given path is wrong. Please provide a valid file path.")
            .count(),
        1
    );
}
