//! End-to-end CLI integration tests for the `zephyr` binary.
//!
//! Each test works in its own temporary directory and runs the binary as a
//! subprocess via `assert_cmd`.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a `Command` targeting the cargo-built `zephyr` binary, isolated
/// from the caller's environment.
fn zephyr(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("zephyr").unwrap();
    cmd.current_dir(dir)
        .env_remove("ZEPHYR_DIR")
        .env_remove("ZEPHYR_DATA_FILE")
        .env_remove("ZEPHYR_AUTOSAVE")
        .env_remove("ZEPHYR_WELCOME")
        .env_remove("ZEPHYR_COLOR")
        .arg("--no-color");
    cmd
}

fn task_file(tmp: &TempDir) -> PathBuf {
    tmp.path().join("tasks.md")
}

/// Run `zephyr --file <tmp>/tasks.md exec <words>` and assert success.
fn exec_ok(tmp: &TempDir, words: &[&str]) -> String {
    let output = zephyr(tmp.path())
        .arg("--file")
        .arg(task_file(tmp))
        .arg("exec")
        .args(words)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "exec {:?} failed: {}",
        words,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// exec
// ---------------------------------------------------------------------------

#[test]
fn exec_adds_and_persists_tasks() {
    let tmp = TempDir::new().unwrap();

    let out = exec_ok(&tmp, &["todo", "buy", "milk"]);
    assert!(out.contains("Got it. I've added this task:"));
    assert!(out.contains("Now thou have 1 tasks in the list."));

    exec_ok(&tmp, &["deadline", "return book /by 17 Feb 2025"]);
    exec_ok(&tmp, &["event", "fair", "/from", "10 Apr 2025", "/to", "12 Apr 2025"]);
    exec_ok(&tmp, &["tag", "1", "urgent", "home"]);
    exec_ok(&tmp, &["mark", "2"]);

    let content = fs::read_to_string(task_file(&tmp)).unwrap();
    assert_eq!(
        content,
        "- [ ] T: buy milk #tags urgent home\n\
         - [X] D: return book (by: 17 Feb 2025)\n\
         - [ ] E: fair (from: 10 Apr 2025 to: 12 Apr 2025)\n"
    );

    let out = exec_ok(&tmp, &["list"]);
    assert!(out.contains("1. [T][ ] buy milk #tags urgent home"));
    assert!(out.contains("2. [D][X] return book (by: 17 Feb 2025)"));
}

#[test]
fn exec_list_on_missing_file_is_empty() {
    let tmp = TempDir::new().unwrap();
    let out = exec_ok(&tmp, &["list"]);
    assert_eq!(out, "There are no tasks in thine list.\n");
    assert!(!task_file(&tmp).exists());
}

#[test]
fn exec_command_error_exits_nonzero() {
    let tmp = TempDir::new().unwrap();
    zephyr(tmp.path())
        .arg("--file")
        .arg(task_file(&tmp))
        .args(["exec", "deadline", "buy", "milk"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: the deadline command must contain a '/by' keyword",
        ));
    assert!(!task_file(&tmp).exists());
}

#[test]
fn exec_out_of_range_leaves_file_alone() {
    let tmp = TempDir::new().unwrap();
    exec_ok(&tmp, &["todo", "a"]);

    zephyr(tmp.path())
        .arg("--file")
        .arg(task_file(&tmp))
        .args(["exec", "delete", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    let content = fs::read_to_string(task_file(&tmp)).unwrap();
    assert_eq!(content, "- [ ] T: a\n");
}

#[test]
fn exec_unknown_keyword_prints_help() {
    let tmp = TempDir::new().unwrap();
    let out = exec_ok(&tmp, &["frobnicate"]);
    assert!(out.starts_with("I do not understand"));
    assert!(out.contains("deadline <task description> /by <dd MMM yyyy>"));
}

#[test]
fn exec_drops_malformed_lines() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        task_file(&tmp),
        "- [ ] T: keep me\ngarbage\n- [?] T: bad flag\n- [ ] D: no date\n",
    )
    .unwrap();

    let out = exec_ok(&tmp, &["list"]);
    assert_eq!(out, "Here are the tasks in thine list:\n1. [T][ ] keep me\n");
}

#[test]
fn exec_keeps_tasks_around_invalid_utf8_line() {
    let tmp = TempDir::new().unwrap();
    fs::write(task_file(&tmp), b"- [ ] T: one\n- [ ] T: \xff\n- [ ] T: two\n").unwrap();

    exec_ok(&tmp, &["todo", "new"]);
    let content = fs::read_to_string(task_file(&tmp)).unwrap();
    assert_eq!(content, "- [ ] T: one\n- [ ] T: two\n- [ ] T: new\n");
}

// ---------------------------------------------------------------------------
// Interactive session
// ---------------------------------------------------------------------------

#[test]
fn session_reads_stdin_until_bye() {
    let tmp = TempDir::new().unwrap();
    zephyr(tmp.path())
        .arg("--file")
        .arg(task_file(&tmp))
        .write_stdin("todo read book\nmark 1\nlist\nbye\ntodo never\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello! I'm Zephyr."))
        .stdout(predicate::str::contains("1. [T][X] read book"))
        .stdout(predicate::str::contains("Goodbye!"));

    let content = fs::read_to_string(task_file(&tmp)).unwrap();
    assert_eq!(content, "- [X] T: read book\n");
}

#[test]
fn session_errors_do_not_end_it() {
    let tmp = TempDir::new().unwrap();
    zephyr(tmp.path())
        .arg("--file")
        .arg(task_file(&tmp))
        .arg("--quiet")
        .write_stdin("mark 1\ntodo still here\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("task number 1 is out of range"))
        .stdout(predicate::str::contains("Hello").not())
        .stdout(predicate::str::contains("[T][ ] still here"));

    let content = fs::read_to_string(task_file(&tmp)).unwrap();
    assert_eq!(content, "- [ ] T: still here\n");
}

#[test]
fn session_survives_invalid_utf8_input() {
    let tmp = TempDir::new().unwrap();
    zephyr(tmp.path())
        .arg("--file")
        .arg(task_file(&tmp))
        .write_stdin(&b"todo a\n\xff\ntodo b\nbye\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));

    let content = fs::read_to_string(task_file(&tmp)).unwrap();
    assert_eq!(content, "- [ ] T: a\n- [ ] T: b\n");
}

// ---------------------------------------------------------------------------
// init / config
// ---------------------------------------------------------------------------

#[test]
fn init_creates_project_and_tasks_live_inside() {
    let tmp = TempDir::new().unwrap();
    zephyr(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized zephyr"));
    assert!(tmp.path().join(".zephyr/config.yaml").is_file());

    zephyr(tmp.path())
        .args(["exec", "todo", "inside"])
        .assert()
        .success();
    let content = fs::read_to_string(tmp.path().join(".zephyr/tasks.md")).unwrap();
    assert_eq!(content, "- [ ] T: inside\n");

    zephyr(tmp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    zephyr(tmp.path()).args(["init", "--force"]).assert().success();
}

#[test]
fn config_data_file_is_relative_to_project_root() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join(".zephyr")).unwrap();
    fs::write(
        tmp.path().join(".zephyr/config.yaml"),
        "data-file: notes/mine.md\nwelcome: false\n",
    )
    .unwrap();
    let sub = tmp.path().join("sub");
    fs::create_dir(&sub).unwrap();

    zephyr(&sub).args(["exec", "todo", "x"]).assert().success();
    assert!(tmp.path().join("notes/mine.md").is_file());

    zephyr(&sub)
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello").not())
        .stdout(predicate::str::contains("1. [T][ ] x"));
}

#[test]
fn completion_generates_script() {
    let tmp = TempDir::new().unwrap();
    zephyr(tmp.path())
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zephyr"));
}
