//! End-to-end runs of the `todo` binary against a throwaway data file.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn todo(data: &Path) -> Command {
    let mut cmd = Command::cargo_bin("todo").unwrap();
    cmd.arg("--data-file").arg(data).env_remove("RUST_LOG");
    cmd
}

fn data_file(dir: &TempDir) -> PathBuf {
    dir.path().join("todo_list.json")
}

fn stored(data: &Path) -> Vec<String> {
    serde_json::from_slice(&std::fs::read(data).unwrap()).unwrap()
}

#[test]
fn empty_list_shows_hint() {
    let dir = TempDir::new().unwrap();
    todo(&data_file(&dir))
        .assert()
        .success()
        .stdout("The todo list is empty. Add items with the '-a' argument.\n");
}

#[test]
fn add_add_delete_scenario() {
    let dir = TempDir::new().unwrap();
    let data = data_file(&dir);

    todo(&data).args(["-a", "groceries"]).assert().success();
    todo(&data)
        .args(["-a", "chore: clean garage"])
        .assert()
        .success()
        .stdout("\n  1 - groceries\n\nchore:\n\n  2 - clean garage\n");
    todo(&data)
        .args(["-d", "1"])
        .assert()
        .success()
        .stdout("\nRemoved: groceries\n\nchore:\n\n  1 - clean garage\n");

    assert_eq!(stored(&data), ["chore: clean garage"]);
}

#[test]
fn out_of_range_delete_exits_with_arg_code() {
    let dir = TempDir::new().unwrap();
    let data = data_file(&dir);
    todo(&data).args(["-a", "only"]).assert().success();

    for bad in ["0", "2", "-1"] {
        todo(&data)
            .args(["-d", bad])
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains(format!("ERROR: Index {bad} is out of range.")));
    }
    assert_eq!(stored(&data), ["only"]);
}

#[test]
fn reword_reads_replacement_from_stdin() {
    let dir = TempDir::new().unwrap();
    let data = data_file(&dir);
    todo(&data).args(["-a", "first"]).assert().success();
    todo(&data).args(["-a", "second"]).assert().success();

    todo(&data)
        .args(["-r", "2"])
        .write_stdin("work: second, reworded\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Original: second"))
        .stdout(predicate::str::ends_with("work:\n\n  2 - second, reworded\n"));

    assert_eq!(stored(&data), ["first", "work: second, reworded"]);
}

#[test]
fn reword_cancelled_by_eof() {
    let dir = TempDir::new().unwrap();
    let data = data_file(&dir);
    todo(&data).args(["-a", "keep me"]).assert().success();

    todo(&data).args(["-r", "1"]).write_stdin("").assert().code(2);
    assert_eq!(stored(&data), ["keep me"]);
}

#[test]
fn reword_out_of_range_does_not_prompt() {
    let dir = TempDir::new().unwrap();
    let data = data_file(&dir);

    todo(&data)
        .args(["-r", "3"])
        .write_stdin("ignored\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Original").not())
        .stderr(predicate::str::contains("Index 3 is out of range."));
    assert!(!data.exists());
}

#[test]
fn add_takes_precedence_over_delete() {
    let dir = TempDir::new().unwrap();
    let data = data_file(&dir);
    todo(&data).args(["-a", "one"]).assert().success();

    todo(&data).args(["-d", "1", "-a", "two"]).assert().success();
    assert_eq!(stored(&data), ["one", "two"]);
}

#[test]
fn bad_index_is_an_argument_error() {
    let dir = TempDir::new().unwrap();
    todo(&data_file(&dir)).args(["-d", "abc"]).assert().code(1);
}

#[test]
fn help_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    todo(&data_file(&dir))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("-a"));
}

#[test]
fn malformed_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let data = data_file(&dir);
    std::fs::write(&data, "not json").unwrap();

    let out = todo(&data).assert().failure().get_output().stderr.clone();
    let stderr = String::from_utf8(out).unwrap();
    assert_eq!(stderr.matches("Malformed todo file").count(), 1);
    assert!(stderr.contains(&format!("todo file {}", data.display())));
}

#[test]
fn ignored_flags_are_logged() {
    let dir = TempDir::new().unwrap();
    let data = data_file(&dir);

    todo(&data)
        .args(["-a", "x", "-d", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("only the first applies"));
    assert_eq!(stored(&data), ["x"]);
}

#[cfg(unix)]
#[test]
fn interrupt_while_waiting_for_reword_exits_with_2() {
    use std::io::{BufRead, BufReader};
    use std::process::{Command as StdCommand, Stdio};

    let dir = TempDir::new().unwrap();
    let data = data_file(&dir);
    todo(&data).args(["-a", "keep"]).assert().success();

    let mut child = StdCommand::new(assert_cmd::cargo::cargo_bin("todo"))
        .arg("--data-file")
        .arg(&data)
        .args(["-r", "1"])
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    // Held open so the prompt keeps waiting.
    let _stdin = child.stdin.take().unwrap();

    let mut lines = BufReader::new(child.stdout.take().unwrap()).lines();
    assert!(lines.any(|l| l.unwrap().starts_with("Original: keep")));

    let killed = StdCommand::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(killed.success());

    assert_eq!(child.wait().unwrap().code(), Some(2));
    assert_eq!(stored(&data), ["keep"]);
}
