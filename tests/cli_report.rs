use std::path::Path;
use std::process::Output;

fn run_linehist(args: &[&str]) -> Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_linehist"))
        .args(args)
        .output()
        .expect("run binary")
}

fn write_fixture(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn end_to_end_report() {
    let dir = tempfile::tempdir().unwrap();
    let long = "x".repeat(85);
    let path = write_fixture(
        dir.path(),
        "sample.hs",
        &format!("short\n-- a comment\n{long}\n"),
    );

    let out = run_linehist(&[&path]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();

    // The overlong line is flagged inline at its zero-based index; its
    // printed prefix keeps the newline, hence the blank separator line.
    let expected = format!(
        "{path}:2\n{long}\n\n\
         blank lines: 0\n\
         comments: line: 1 block: 0 total: 1\n\
         \x20\x20 5 1\n\
         \x20 12 1\n\
         \x20 85 1\n"
    );
    assert_eq!(stdout, expected);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        dir.path(),
        "stable.hs",
        "module Stable where\n\n-- doc\nmain = pure ()\n",
    );

    let first = run_linehist(&[&path]);
    let second = run_linehist(&[&path]);
    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn block_nesting_carries_across_argument_order() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_fixture(dir.path(), "a.hs", "{- opened\n");
    let second = write_fixture(dir.path(), "b.hs", "carried\n-}\n");

    let out = run_linehist(&[&first, &second]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    // open line + carried line are block lines; the close line is not
    assert!(stdout.contains("comments: line: 0 block: 2 total: 2"));
}

#[test]
fn ignored_path_is_never_opened() {
    // the path does not exist; the run only succeeds if it is skipped
    // without an open attempt
    let dir = tempfile::tempdir().unwrap();
    let real = write_fixture(dir.path(), "real.hs", "x\n");
    let ghost = dir.path().join("ghost.hs");
    let ghost = ghost.to_str().unwrap();

    let out = run_linehist(&[&real, ghost, "--ignore", ghost]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("blank lines: 0"));
    assert!(stdout.contains("   1 1"));
}

#[test]
fn skip_comments_mode_excludes_comment_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        dir.path(),
        "skippy.hs",
        "-- top comment\ncode\n{- note -} x\n",
    );

    let out = run_linehist(&["--skip-comments", &path]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("comments: line: 1 block: 0 total: 1"));
    // the comment line is absent from the histogram (no 14-column row)
    assert!(!stdout.contains("  14 1"));
    assert!(stdout.contains("   4 1"));
    assert!(stdout.contains("  12 1"));
}

#[test]
fn blank_and_comment_lines_always_labeled() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "code_only.hs", "a\nb\n");

    let out = run_linehist(&[&path]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("blank lines: 0\ncomments: line: 0 block: 0 total: 0\n"));
    assert!(stdout.contains("   1 2"));
}
