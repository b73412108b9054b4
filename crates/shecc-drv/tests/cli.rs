//! CLI-level integration tests for the `shecc` driver binary (§10.4).
//!
//! These exercise the in-scope surface only: argument parsing, the
//! `--dump-ir` output, and the declared limits of the binary (no
//! lexing/parsing/ELF emission). They do not depend on a real source
//! file existing on disk, since the driver never reads the input path.

use assert_cmd::Command;
use predicates::prelude::*;

fn shecc_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shecc"))
}

#[test]
fn help_mentions_the_in_scope_flags() {
    let mut cmd = shecc_bin();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--dump-ir"))
        .stdout(predicate::str::contains("--hard-mul-div"));
}

#[test]
fn a_bare_invocation_succeeds_without_reading_the_input_file() {
    let mut cmd = shecc_bin();
    cmd.arg("nonexistent.c");

    cmd.assert().success();
}

#[test]
fn dump_ir_prints_the_fixture_functions_definition() {
    let mut cmd = shecc_bin();
    cmd.arg("nonexistent.c").arg("--dump-ir");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("def int @main()"))
        .stdout(predicate::str::contains("ret %c"));
}

#[test]
fn missing_input_argument_is_a_usage_error() {
    let mut cmd = shecc_bin();

    cmd.assert().failure();
}
