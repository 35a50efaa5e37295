#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;

fn qmgtools_update() -> Command {
    Command::cargo_bin("qmgtools-update").unwrap()
}

#[test]
fn version_flag_prints_binary_name() {
    qmgtools_update()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("qmgtools-update "));
}

#[test]
fn help_describes_the_job() {
    qmgtools_update()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("QMGTOOLS/CMPVER"));
}

#[test]
fn stray_arguments_do_not_cause_a_usage_error() {
    qmgtools_update()
        .args(["now", "--log-file", "/tmp/main.log"])
        .assert()
        .code(predicate::ne(2))
        .stderr(predicate::str::contains("unexpected argument").not());
}
