// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Drives the `kolor` binary. The color support decision is global to a process and
//! frozen after the first use, so the only way to check each directive is to spawn a new
//! process per case.
//!
//! See: `src/bin/kolor.rs` and <https://docs.rs/assert_cmd/latest/assert_cmd/index.html>

use assert_cmd::Command;
use pretty_assertions::assert_eq;

fn run(args: &[&str]) -> (String, String) {
    let output = Command::cargo_bin("kolor")
        .unwrap()
        .args(args)
        .env_remove("NO_COLOR")
        .ok()
        .unwrap();
    (
        String::from_utf8_lossy(output.stdout.as_slice()).into_owned(),
        String::from_utf8_lossy(output.stderr.as_slice()).into_owned(),
    )
}

#[test]
fn color_always() {
    let (stdout, _) = run(&["--color=always"]);
    assert!(stdout.contains(" • \x1b[31mred\x1b[39m"));
    assert!(stdout.contains(" • \x1b[45mbgMagenta\x1b[49m"));
    assert!(stdout.contains(" • \x1b[0mreset"));
    // Aliases are listed too, painted with their canonical function.
    assert!(stdout.contains(" • \x1b[35mpurple\x1b[39m"));
    assert!(stdout.contains(" • \x1b[3mitalic\x1b[23m"));
}

#[test]
fn color_never() {
    let (stdout, _) = run(&["--color", "never"]);
    assert!(!stdout.contains('\x1b'));
    assert!(stdout.contains(" • red\n"));
    assert!(stdout.contains("Safe modifiers:\n"));
}

#[test]
fn color_auto_when_piped() {
    // Stdout is a pipe under assert_cmd, so auto detection turns colors off.
    let (stdout, _) = run(&[]);
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn every_style_is_listed_once_per_name() {
    let (stdout, _) = run(&["--color=never"]);
    let count = stdout.lines().filter(|it| it.starts_with(" • ")).count();
    assert_eq!(count, (32 + 8) + (4 + 2) + (9 + 6));
}

#[test]
fn logging_goes_to_stderr() {
    let (stdout, stderr) = run(&["--color=always", "--enable-logging"]);
    assert!(stderr.contains("color_support"));
    assert!(!stdout.contains("color_support"));
}

#[test]
fn invalid_mode_is_rejected() {
    Command::cargo_bin("kolor")
        .unwrap()
        .arg("--color=sometimes")
        .assert()
        .failure();
}
