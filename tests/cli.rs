use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn three_dots(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("3dots").unwrap();
    cmd.current_dir(cwd)
        .env_remove("THREE_DOTS_VERBOSE")
        .env("THREE_DOTS_NO_COLOR", "true");
    cmd
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_no_subcommand_prints_help() {
    let temp_dir = TempDir::new().unwrap();

    three_dots(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: 3dots"))
        .stdout(predicate::str::contains("go"));
}

#[test]
fn test_unknown_subcommand_exits_one() {
    let temp_dir = TempDir::new().unwrap();

    three_dots(temp_dir.path())
        .arg("next")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_missing_path_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();

    three_dots(temp_dir.path())
        .arg("go")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("<PATH>"));
    assert!(entries(temp_dir.path()).is_empty());
}

#[test]
fn test_empty_path_warns_and_succeeds() {
    let temp_dir = TempDir::new().unwrap();

    three_dots(temp_dir.path())
        .args(["go", ""])
        .assert()
        .success()
        .stderr(predicate::str::contains("There is no paths"));
    assert!(entries(temp_dir.path()).is_empty());
}

#[test]
fn test_missing_directory_warns_and_succeeds() {
    let temp_dir = TempDir::new().unwrap();

    three_dots(temp_dir.path())
        .args(["go", "myproj"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Directory not exist: myproj/"));
    assert!(entries(temp_dir.path()).is_empty());
}

#[test]
fn test_generates_into_relative_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("myproj");
    fs::create_dir(&root).unwrap();

    three_dots(temp_dir.path())
        .args(["go", "myproj/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Go project 'myproj' generated"))
        .stderr(predicate::str::contains("myproj/api created."));

    assert_eq!(entries(temp_dir.path()), vec!["myproj"]);
    assert_eq!(
        entries(&root),
        vec!["api", "cmd", "internal", "makefile", "pkg"]
    );
    assert!(root.join("cmd").join("main.go").is_file());

    let makefile = fs::read_to_string(root.join("makefile")).unwrap();
    assert_eq!(makefile.matches("./bin/myproj").count(), 2);
}

#[test]
fn test_generates_into_current_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("dotted");
    fs::create_dir(&root).unwrap();

    three_dots(&root)
        .args(["go", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Go project 'dotted' generated"));

    assert_eq!(
        entries(&root),
        vec!["api", "cmd", "internal", "makefile", "pkg"]
    );
    let makefile = fs::read_to_string(root.join("makefile")).unwrap();
    assert!(makefile.contains("go build -o ./bin/dotted ./cmd/main.go"));
}

#[test]
fn test_verbose_shows_debug_lines() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("loud")).unwrap();

    three_dots(temp_dir.path())
        .args(["--verbose", "go", "loud"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Directory name: loud"));

    let quiet = temp_dir.path().join("quiet");
    fs::create_dir(&quiet).unwrap();

    three_dots(temp_dir.path())
        .args(["go", "quiet"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Directory name").not());
}

#[cfg(unix)]
#[test]
fn test_unwritable_target_is_fatal() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("locked");
    fs::create_dir(&root).unwrap();
    fs::set_permissions(&root, fs::Permissions::from_mode(0o555)).unwrap();

    // root ignores directory permissions
    if fs::write(root.join("write_check"), "").is_ok() {
        return;
    }

    three_dots(temp_dir.path())
        .args(["go", "locked"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to create directory"))
        .stderr(predicate::str::contains("HINT:"));

    fs::set_permissions(&root, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(target_os = "linux")]
#[test]
fn test_deleted_working_directory_warns_and_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("gone")).unwrap();
    let bin = assert_cmd::cargo::cargo_bin("3dots");

    // the shell removes its own working directory before handing over
    Command::new("sh")
        .arg("-c")
        .arg(r#"cd gone && rmdir ../gone && exec "$0" go ."#)
        .arg(&bin)
        .current_dir(temp_dir.path())
        .env_remove("THREE_DOTS_VERBOSE")
        .env("THREE_DOTS_NO_COLOR", "true")
        .assert()
        .success()
        .stderr(predicate::str::contains("Directory not exist: ./"));

    assert!(entries(temp_dir.path()).is_empty());
}
