use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_docit")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).unwrap()
}

fn stdout_of(assert: assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

// -- stdin mode --

#[test]
fn stdin_mode_produces_markdown() {
    let assert = cmd()
        .args(["-m", "math.js"])
        .write_stdin(fixture("math.js"))
        .assert()
        .success();
    assert_eq!(stdout_of(assert), fixture("math.expected.md"));
}

#[test]
fn stdin_mode_without_module_name_has_no_handler() {
    let assert = cmd()
        .write_stdin(fixture("math.js"))
        .assert()
        .success();
    let output = stdout_of(assert);
    assert!(output.starts_with("Math\n====\n"));
    assert!(!output.contains("add(a, b)"));
    assert!(output.contains("#### Parameters ####"));
}

#[test]
fn stdin_mode_empty_input() {
    cmd()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn stdin_mode_default_module_heading() {
    let assert = cmd()
        .write_stdin("/**\n * @author Ada\n * @module\n */\n")
        .assert()
        .success();
    assert_eq!(stdout_of(assert), "Module\n======\n\n*Author:* Ada\n\n");
}

// -- settings --

#[test]
fn set_include_private() {
    let assert = cmd()
        .args(["-m", "math.js", "--set", "includePrivate=true"])
        .write_stdin(fixture("math.js"))
        .assert()
        .success();
    let output = stdout_of(assert);
    assert!(output.contains("### secret (private) ###"));
    assert!(output.contains("*API:* private\n"));
}

#[test]
fn set_unknown_option_fails() {
    cmd()
        .args(["--set", "bogus=1"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown setting"));
}

#[test]
fn set_requires_key_value() {
    cmd()
        .args(["--set", "includePrivate"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("KEY=VALUE"));
}

#[test]
fn config_file_overrides() {
    let mut config = NamedTempFile::with_suffix(".json").unwrap();
    config
        .write_all(br#"{"typesHeading": "Classes", "includeHRBeforeMethod": "false"}"#)
        .unwrap();

    let assert = cmd()
        .args(["-m", "math.js", "-c", config.path().to_str().unwrap()])
        .write_stdin(fixture("math.js"))
        .assert()
        .success();
    let output = stdout_of(assert);
    assert!(output.contains("Classes\n-------\n"));
    assert!(!output.contains("------------------------------------------------"));
}

#[test]
fn command_line_wins_over_config_file() {
    let mut config = NamedTempFile::with_suffix(".json").unwrap();
    config
        .write_all(br#"{"typesHeading": "Classes"}"#)
        .unwrap();

    let assert = cmd()
        .args(["-c", config.path().to_str().unwrap()])
        .args(["--set", "typesHeading=Kinds"])
        .write_stdin(fixture("math.js"))
        .assert()
        .success();
    assert!(stdout_of(assert).contains("Kinds\n-----\n"));
}

#[test]
fn unknown_code_handler_is_fatal() {
    let mut config = NamedTempFile::with_suffix(".json").unwrap();
    config.write_all(br#"{"codeHandler": "cobol"}"#).unwrap();

    cmd()
        .args(["-c", config.path().to_str().unwrap()])
        .write_stdin(fixture("math.js"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown code handler: cobol"));
}

#[test]
fn malformed_config_file() {
    let mut config = NamedTempFile::with_suffix(".json").unwrap();
    config.write_all(b"{not json").unwrap();

    cmd()
        .args(["-c", config.path().to_str().unwrap()])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed config file"));
}

// -- file mode --

#[test]
fn file_mode_creates_output() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("math.js"))
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("math.md")).unwrap();
    assert_eq!(output, fixture("math.expected.md"));
}

#[test]
fn file_mode_unmatched_glob_warns() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(format!("{}/nothing-*.js", dir.path().display()))
        .assert()
        .success()
        .stderr(predicate::str::contains("no files matched"));
}

#[test]
fn dir_mode_preserves_structure_and_filters() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("src");
    fs::create_dir_all(src.join("lib")).unwrap();
    fs::write(src.join("lib/math.js"), fixture("math.js")).unwrap();
    fs::write(src.join("notes.txt"), "/** Not code. */\n").unwrap();
    let out = root.path().join("out");

    cmd()
        .args(["--dir", src.to_str().unwrap()])
        .args(["--include-files", r"\.js$"])
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success();

    let output = fs::read_to_string(out.join("lib/math.md")).unwrap();
    assert_eq!(output, fixture("math.expected.md"));
    assert!(!out.join("notes.md").exists());
}

#[test]
fn dir_mode_skips_files_without_comments() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("plain.js"), "var x = 1;\n").unwrap();
    let out = root.path().join("out");

    cmd()
        .args(["--dir", src.to_str().unwrap()])
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success();

    assert!(!out.join("plain.md").exists());
}

#[cfg(unix)]
#[test]
fn dir_mode_does_not_follow_symlinks() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("z.js"), "/** @var z */\nvar z;\n").unwrap();
    std::os::unix::fs::symlink(&src, src.join("up")).unwrap();
    let out = root.path().join("out");

    cmd()
        .args(["--dir", src.to_str().unwrap()])
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success();

    assert!(out.join("z.md").exists());
    assert!(!out.join("up").exists());
}

#[test]
fn file_mode_rejects_colliding_outputs() {
    let root = TempDir::new().unwrap();
    for dir in ["a", "b"] {
        fs::create_dir_all(root.path().join(dir)).unwrap();
        fs::write(
            root.path().join(dir).join("index.js"),
            format!("/** @var from_{dir} */\n"),
        )
        .unwrap();
    }
    let out = root.path().join("out");

    cmd()
        .args(["-o", out.to_str().unwrap()])
        .arg(root.path().join("a/index.js"))
        .arg(root.path().join("b/index.js"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("would both be written to"));

    assert!(!out.join("index.md").exists());
}

// -- output formats --

#[test]
fn file_mode_json_format() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "json"])
        .arg(fixture_path("math.js"))
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("math.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value[0]["type"], "module");
    assert_eq!(value.as_array().unwrap().len(), 6);
}

#[test]
fn invalid_format_fails() {
    cmd()
        .args(["-f", "xml"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}
