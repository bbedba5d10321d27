//! End-to-end tests running the compiled binaries

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn codebase_format() -> Command {
    Command::cargo_bin("codebase-format").unwrap()
}

fn codebase_replace() -> Command {
    Command::cargo_bin("codebase-replace").unwrap()
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Write an executable shell script standing in for the formatter
#[cfg(unix)]
fn fake_formatter(dir: &Path, body: &str) -> String {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-formatter.sh");
    fs::write(&script, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script.to_str().unwrap().to_string()
}

#[test]
fn replace_dry_run_leaves_files_untouched() {
    let tree = TempDir::new().unwrap();
    write(&tree.path().join("a.txt"), "foo bar\n");
    write(&tree.path().join("sub").join("b.txt"), "bar foo\n");

    codebase_replace()
        .arg(tree.path())
        .args(["--old-str", "foo", "--new-str", "baz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-- File count: 2."))
        .stdout(predicate::str::contains(
            ">>> Running in test mode, no file editing is conducted.",
        ));

    assert_eq!(fs::read_to_string(tree.path().join("a.txt")).unwrap(), "foo bar\n");
    assert_eq!(
        fs::read_to_string(tree.path().join("sub").join("b.txt")).unwrap(),
        "bar foo\n"
    );
}

#[test]
fn replace_apply_round_trip() {
    let tree = TempDir::new().unwrap();
    let file = tree.path().join("a.txt");
    write(&file, "foo bar\nbar foo\n");

    codebase_replace()
        .arg("--file")
        .arg(&file)
        .args(["--old-str", "foo", "--new-str", "baz", "-run"])
        .assert()
        .success()
        .stdout("-- File count: 1.\n");
    assert_eq!(fs::read_to_string(&file).unwrap(), "baz bar\nbar baz\n");

    codebase_replace()
        .arg("--file")
        .arg(&file)
        .args(["--old-str", "baz", "--new-str", "foo", "-r"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&file).unwrap(), "foo bar\nbar foo\n");
}

#[test]
fn replace_does_not_cross_lines() {
    let tree = TempDir::new().unwrap();
    let file = tree.path().join("a.txt");
    write(&file, "fo\no bar");

    codebase_replace()
        .arg("--files")
        .arg(&file)
        .args(["--old-str", "foo", "--new-str", "baz", "-run"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "fo\no bar");
}

#[test]
fn replace_apply_without_strings_is_rejected() {
    let tree = TempDir::new().unwrap();
    let file = tree.path().join("a.txt");
    write(&file, "foo\n");

    codebase_replace()
        .arg("--file")
        .arg(&file)
        .args(["--old-str", "foo", "-run"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--new-str"));

    assert_eq!(fs::read_to_string(&file).unwrap(), "foo\n");
}

#[test]
fn missing_directory_warns_and_counts_zero() {
    let tree = TempDir::new().unwrap();

    codebase_replace()
        .arg(tree.path().join("nowhere"))
        .args(["--old-str", "a", "--new-str", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING: directory"))
        .stdout(predicate::str::contains("-- File count: 0."));
}

#[test]
fn missing_file_counts_zero() {
    let tree = TempDir::new().unwrap();

    codebase_format()
        .arg("--file")
        .arg(tree.path().join("gone.cpp"))
        .arg("-verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING: file"))
        .stdout(predicate::str::contains("-- Conversion done. File count: 0."));
}

#[test]
fn file_filters_select_files() {
    let tree = TempDir::new().unwrap();
    write(&tree.path().join("a.cpp"), "");
    write(&tree.path().join("b.h"), "");
    write(&tree.path().join("c.txt"), "");

    codebase_format()
        .arg(tree.path())
        .args(["--file-filters", "*.cpp", "*.h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-- Conversion done. File count: 2."));
}

#[test]
fn two_root_directories_are_a_usage_error() {
    codebase_format()
        .args(["src", "include"])
        .assert()
        .code(2);
}

#[test]
fn unknown_flag_is_a_usage_error() {
    codebase_replace().arg("--no-such-flag").assert().code(2);
}

#[cfg(unix)]
#[test]
fn format_invokes_formatter_with_style_arguments() {
    let tree = TempDir::new().unwrap();
    let log = tree.path().join("calls.log");
    let formatter = fake_formatter(
        tree.path(),
        &format!("echo \"$@\" >> \"{}\"", log.display()),
    );
    let src = tree.path().join("src");
    write(&src.join("main.cpp"), "int main(){}\n");

    codebase_format()
        .arg(&src)
        .args(["--file-filter", "*.cpp", "--formatter", formatter.as_str(), "-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-- Conversion done. File count: 1."))
        .stdout(predicate::str::contains("ATTENTION").not());

    let calls = fs::read_to_string(&log).unwrap();
    assert_eq!(
        calls.trim(),
        format!(
            "{} -style=file -assume-filename=.clang-format -i",
            src.join("main.cpp").display()
        )
    );
}

#[cfg(unix)]
#[test]
fn format_failure_aborts_with_formatter_exit_code() {
    let tree = TempDir::new().unwrap();
    let log = tree.path().join("calls.log");
    let formatter = fake_formatter(
        tree.path(),
        &format!("echo \"$1\" >> \"{}\"\nexit 2", log.display()),
    );
    let src = tree.path().join("src");
    write(&src.join("a.cpp"), "");
    write(&src.join("b.cpp"), "");

    codebase_format()
        .arg(&src)
        .args(["--file-filter", "*.cpp", "--formatter", formatter.as_str(), "-run"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "Script interrupted due to external error.",
        ))
        .stdout(predicate::str::contains("File count").not());

    let calls = fs::read_to_string(&log).unwrap();
    assert_eq!(calls.lines().count(), 1);
}

#[cfg(unix)]
#[test]
fn format_dry_run_never_runs_formatter() {
    let tree = TempDir::new().unwrap();
    let log = tree.path().join("calls.log");
    let formatter = fake_formatter(
        tree.path(),
        &format!("echo \"$1\" >> \"{}\"", log.display()),
    );
    let src = tree.path().join("src");
    write(&src.join("a.cpp"), "");

    codebase_format()
        .arg(&src)
        .args(["--file-filter", "*.cpp", "--formatter", formatter.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("-- Conversion done. File count: 1."))
        .stdout(predicate::str::contains(">>> !!! ATTENTION !!! <<<"));

    assert!(!log.exists());
}

#[cfg(unix)]
#[test]
fn format_killed_formatter_is_reported_as_interruption() {
    let tree = TempDir::new().unwrap();
    let formatter = fake_formatter(tree.path(), "kill -9 $$");
    let src = tree.path().join("src");
    write(&src.join("a.cpp"), "");

    codebase_format()
        .arg(&src)
        .args(["--file-filter", "*.cpp", "--formatter", formatter.as_str(), "-run"])
        .assert()
        .code(137)
        .stdout(predicate::str::contains(
            "Script interrupted due to external error.",
        ))
        .stdout(predicate::str::contains("File count").not());
}

#[test]
fn recursive_file_filter_is_rejected() {
    let tree = TempDir::new().unwrap();
    write(&tree.path().join("a.cpp"), "");
    write(&tree.path().join("s").join("b.cpp"), "");

    codebase_replace()
        .arg(tree.path())
        .args(["--file-filter", "**/*.cpp", "--old-str", "a", "--new-str", "b"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must not contain '**'"))
        .stdout(predicate::str::contains("File count").not());
}
