use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn srcdump() -> Command {
    cargo_bin_cmd!("srcdump")
}

// -- help and version --

#[test]
fn help_displays_all_options() {
    srcdump()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("<ROOT>"))
        .stdout(predicate::str::contains("--profile"))
        .stdout(predicate::str::contains("--ext"))
        .stdout(predicate::str::contains("--skip-dir"))
        .stdout(predicate::str::contains("--ignore"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn version_displays_cargo_version() {
    srcdump()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// -- bad invocations --

#[test]
fn requires_root_argument() {
    srcdump().assert().failure();
}

#[test]
fn unknown_flag_exits_with_error() {
    srcdump().args(["--frobnicate", "."]).assert().failure();
}

#[test]
fn unknown_profile_exits_with_error() {
    let dir = tempdir().unwrap();
    srcdump()
        .args(["--profile", "perl"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile"));
}

#[test]
fn unknown_binary_detection_exits_with_error() {
    let dir = tempdir().unwrap();
    srcdump()
        .args(["--binary-detection", "psychic"])
        .arg(dir.path())
        .assert()
        .failure();
}

// -- root errors --

#[test]
fn nonexistent_root_exits_with_error() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.txt");

    srcdump()
        .arg(dir.path().join("missing"))
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
    assert!(!out.exists());
}

// -- dumping --

#[test]
fn dump_writes_output_and_reports_counts() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/app.js"), "let a = 1;\n").unwrap();
    let out = dir.path().join("out.txt");

    srcdump()
        .arg(dir.path())
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dump written to"))
        .stdout(predicate::str::contains("(1 files, 0 skipped)"));

    let dump = fs::read_to_string(&out).unwrap();
    assert!(dump.contains("=== Name: app.js"));
    assert!(dump.contains("let a = 1;"));
}

#[test]
fn json_flag_prints_the_report() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("app.js"), "let a;").unwrap();
    let out = dir.path().join("out.txt");

    srcdump()
        .arg(dir.path())
        .arg(&out)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"files\": 1"))
        .stdout(predicate::str::contains("\"skipped\": 0"));
}

#[test]
fn ext_flag_replaces_the_allow_list() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("README.md"), "# hello\n").unwrap();
    fs::write(dir.path().join("app.js"), "dropped").unwrap();
    let out = dir.path().join("out.txt");

    srcdump()
        .arg(dir.path())
        .arg(&out)
        .args(["-e", "md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(1 files, 0 skipped)"));

    let dump = fs::read_to_string(&out).unwrap();
    assert!(dump.contains("=== Name: README.md"));
    assert!(!dump.contains("app.js"));
}

#[test]
fn extended_profile_is_selectable() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.json"), "{}").unwrap();
    let out = dir.path().join("out.txt");

    srcdump()
        .arg(dir.path())
        .arg(&out)
        .args(["--profile", "extended"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(1 files, 0 skipped)"));
}
