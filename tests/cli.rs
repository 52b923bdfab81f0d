//! Tests for the `gridwalk` binary.
//!
//! Each test writes an instruction file into a temporary directory, runs the
//! built binary on it and inspects stdout, stderr and the exit status.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn gridwalk() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gridwalk"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_input(dir: &TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn run_file(contents: &[u8], extra_args: &[&str]) -> Output {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "instructions.txt", contents);
    gridwalk().arg(&input).args(extra_args).output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn assert_reports(contents: &[u8], expected: &str) {
    let output = run_file(contents, &[]);
    assert!(output.status.success(), "exit status: {}", output.status);
    assert_eq!(stdout(&output), expected);
}

#[test]
fn place_move_report() {
    assert_reports(b"PLACE 0,0,NORTH\nMOVE\nREPORT\n", "0,1,NORTH\n");
}

#[test]
fn place_left_report() {
    assert_reports(b"PLACE 0,0,NORTH\nLEFT\nREPORT\n", "0,0,WEST\n");
}

#[test]
fn multi_step_walk() {
    assert_reports(
        b"PLACE 1,2,EAST\nMOVE\nMOVE\nLEFT\nMOVE\nREPORT\n",
        "3,3,NORTH\n",
    );
}

#[test]
fn nothing_is_printed_before_place() {
    assert_reports(b"MOVE\nREPORT\n", "");
}

#[test]
fn moves_off_the_grid_are_ignored() {
    assert_reports(
        b"PLACE 0,0,NORTH\nLEFT\nMOVE\nMOVE\nLEFT\nMOVE\nREPORT\nRIGHT\nMOVE\nREPORT\n",
        "0,0,SOUTH\n0,0,WEST\n",
    );
}

#[test]
fn invalid_utf8_line_does_not_stop_the_run() {
    assert_reports(
        b"PLACE 0,0,NORTH\nMOVE\n\xff\xfe garbage\nMOVE\nREPORT\n",
        "0,2,NORTH\n",
    );
}

#[test]
fn crlf_input_is_accepted() {
    assert_reports(b"PLACE 2,2,SOUTH\r\nMOVE\r\nREPORT\r\n", "2,1,SOUTH\n");
}

#[test]
fn logs_go_to_stderr_only() {
    let output = run_file(b"PLACE 0,0,NORTH\nJUMP\nMOVE\nREPORT\n", &["-v"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "0,1,NORTH\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Ignoring malformed instruction"), "stderr: {stderr}");
}

#[test]
fn quiet_by_default() {
    let output = run_file(b"JUMP\nPLACE 9,9,NORTH\n", &[]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn reads_directions_txt_by_default() {
    let dir = TempDir::new().unwrap();
    write_input(&dir, "directions.txt", b"PLACE 4,4,WEST\nMOVE\nREPORT\n");

    let output = gridwalk().current_dir(dir.path()).output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "3,4,WEST\n");
}

#[test]
fn dash_reads_stdin() {
    let mut child = gridwalk()
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"PLACE 1,1,EAST\nRIGHT\nREPORT\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "1,1,SOUTH\n");
}

#[test]
fn missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = gridwalk()
        .arg(dir.path().join("absent.txt"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn config_bounds_are_applied() {
    let dir = TempDir::new().unwrap();
    let config = write_input(&dir, "grid.json", br#"{"bounds":{"max":{"x":1,"y":1}}}"#);
    let input = write_input(&dir, "in.txt", b"PLACE 0,0,NORTH\nMOVE\nMOVE\nREPORT\n");

    let output = gridwalk()
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "0,1,NORTH\n");
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    gridwalk().current_dir(dir).args(args).output().unwrap()
}

#[test]
fn checkpoint_then_resume_continues_the_walk() {
    let dir = TempDir::new().unwrap();
    write_input(&dir, "first.txt", b"PLACE 1,2,EAST\nMOVE\nMOVE\nREPORT\n");
    write_input(&dir, "second.txt", b"LEFT\nMOVE\nREPORT\n");

    let first = run_in(dir.path(), &["first.txt", "--checkpoint", "saved.json"]);
    assert!(first.status.success());
    assert_eq!(stdout(&first), "3,2,EAST\n");
    assert!(dir.path().join("saved.json").exists());

    let second = run_in(dir.path(), &["second.txt", "--resume", "saved.json"]);
    assert!(second.status.success());
    assert_eq!(stdout(&second), "3,3,NORTH\n");
}

#[test]
fn resume_reports_the_saved_pose() {
    let dir = TempDir::new().unwrap();
    write_input(&dir, "walk.txt", b"PLACE 0,0,NORTH\nMOVE\nRIGHT\n");
    write_input(&dir, "report.txt", b"REPORT\n");

    assert!(run_in(dir.path(), &["walk.txt", "--checkpoint", "cp.json"])
        .status
        .success());
    let resumed = run_in(dir.path(), &["report.txt", "--resume", "cp.json"]);

    assert!(resumed.status.success());
    assert_eq!(stdout(&resumed), "0,1,EAST\n");
}

#[test]
fn corrupt_checkpoint_is_rejected() {
    let dir = TempDir::new().unwrap();
    write_input(&dir, "cp.json", b"{not a checkpoint");
    write_input(&dir, "in.txt", b"REPORT\n");

    let output = run_in(dir.path(), &["in.txt", "--resume", "cp.json"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
