use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("primer").unwrap()
}

const FUNCTION_OUTPUT: &str = "hello world
add() return: 3
swap() x: 2, y: 1
swap_named() a: 2, b: 1
variable_cut() return: 15
modify_value() return: 1
modify_pointer() return: 10
";

const RECORD_OUTPUT: &str = "Demo { a: true, b: 98, c: 1, d: 1, e: \"E\", f: [1], g: {\"GOLANG\": 1} }
Demo { a: false, b: 98, c: 1, d: 1, e: \"E\", f: [1], g: {\"GOLANG\": 1} }
demo.b: b
";

#[test]
fn function_demo() {
    cmd().arg("function").assert().success().stdout(FUNCTION_OUTPUT);
}

#[test]
fn record_demo() {
    cmd().arg("record").assert().success().stdout(RECORD_OUTPUT);
}

#[test]
fn all_demos_in_order() {
    let expected = format!("{FUNCTION_OUTPUT}{RECORD_OUTPUT}");
    cmd()
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected.clone()));
    cmd()
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn narrow_columns_break_records() {
    let record = "Demo {
  a: true,
  b: 98,
  c: 1,
  d: 1,
  e: \"E\",
  f: [1],
  g: {\"GOLANG\": 1}
}
";
    let expected = format!("{record}{}demo.b: b\n", record.replace("a: true", "a: false"));
    cmd()
        .args(["record", "--columns", "20"])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn zero_columns_is_a_usage_error() {
    cmd()
        .args(["record", "--columns", "0"])
        .assert()
        .code(2)
        .stderr(contains("--columns").and(contains("panicked").not()));
}

#[test]
fn too_many_columns_is_a_usage_error() {
    cmd()
        .args(["record", "--columns", "65537"])
        .assert()
        .code(2)
        .stderr(contains("panicked").not());
}

#[test]
fn logs_go_to_stderr() {
    cmd()
        .args(["--debug", "function"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(FUNCTION_OUTPUT)
        .stderr(contains("modify_pointer"));
}

#[test]
fn unknown_subcommand_fails() {
    cmd().arg("pointer").assert().failure();
}
