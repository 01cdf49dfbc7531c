//! Runs the `topo-checker` binary the way a judge does and looks at its exit
//! code and result file.

use std::{fs, path::Path, process::Command};

const CHAIN: &str = "3 2\n1 2\n2 3\n";

fn check(dir: &Path, input: &str, output: &str) -> (i32, String) {
    let input_path = dir.join("input.txt");
    let answer_path = dir.join("answer.txt");
    let output_path = dir.join("output.txt");
    let result_path = dir.join("result.txt");
    fs::write(&input_path, input).unwrap();
    fs::write(&answer_path, "1 2 3\n").unwrap();
    fs::write(&output_path, output).unwrap();
    let status = Command::new(env!("CARGO_BIN_EXE_topo-checker"))
        .args([&input_path, &answer_path, &output_path, &result_path])
        .env_remove("RUST_LOG")
        .status()
        .unwrap();
    (status.code().unwrap(), fs::read_to_string(&result_path).unwrap())
}

#[test]
fn accepted() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(check(dir.path(), CHAIN, "1 2 3\n"), (0, "ok Valid topological order\n".to_string()));
}

#[test]
fn wrong_answer() {
    let dir = tempfile::tempdir().unwrap();
    let (code, line) = check(dir.path(), CHAIN, "2 1 3\n");
    assert_eq!(code, 1);
    assert_eq!(
        line,
        "wrong answer Edge (1 -> 2) violates topological order: pos[1]=1 >= pos[2]=0\n"
    );
}

#[test]
fn presentation_error() {
    let dir = tempfile::tempdir().unwrap();
    let (code, line) = check(dir.path(), CHAIN, "1 two 3\n");
    assert_eq!(code, 2);
    assert!(line.starts_with("wrong output format "));
}

#[test]
fn broken_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (code, line) = check(dir.path(), "3 1\n1 4\n", "1 2 3\n");
    assert_eq!(code, 3);
    assert!(line.starts_with("FAIL "));
}

#[test]
fn missing_arguments_fail() {
    let status = Command::new(env!("CARGO_BIN_EXE_topo-checker")).arg("only-one").status().unwrap();
    assert_eq!(status.code(), Some(3));
}
