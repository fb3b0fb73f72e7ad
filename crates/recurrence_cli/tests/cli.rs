use std::fs;
use std::process::{Command, Output};

fn run_with_input(contents: &str) -> Output {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("input.txt");
    fs::write(&path, contents).expect("input file should be written");
    Command::new(env!("CARGO_BIN_EXE_recur"))
        .arg(&path)
        .output()
        .expect("binary should run")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

#[test]
fn order_one_input_prints_the_closed_form() {
    let output = run_with_input("2\n1 -0.25\n1\n0 6\n");
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output).trim(),
        "Your solution: S(k) = 6.000000(0.250000)^k"
    );
}

#[test]
fn order_two_input_prints_the_closed_form() {
    let output = run_with_input("3\n1 -10 9\n2\n0 3\n1 11\n");
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output).trim(),
        "Your solution: S(k) = 1.000(9.000)^k + 2.000(1.000)^k"
    );
}

#[test]
fn negative_discriminant_reports_no_real_solution_and_exits_zero() {
    // r² + 1 = 0 has no real roots.
    let output = run_with_input("3\n1 0 1\n2\n0 1\n1 1\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output).trim(), "No real solution");
}

#[test]
fn repeated_root_is_reported_as_singular_with_failure_exit_code() {
    // (r − 1)² = 0.
    let output = run_with_input("3\n1 -2 1\n2\n0 1\n1 2\n");
    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Singular system"), "stdout was {stdout:?}");
    assert!(!stdout.contains("S(k)"), "no formula expected, got {stdout:?}");
}

#[test]
fn too_few_terms_exits_with_failure() {
    let output = run_with_input("1\n5\n1\n0 1\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("Too few terms"));
}

#[test]
fn missing_input_file_exits_with_failure() {
    let output = Command::new(env!("CARGO_BIN_EXE_recur"))
        .arg("no/such/input.txt")
        .output()
        .expect("binary should run");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("Could not open file"));
}
