//! Runs the `tree-gen` binary and reads the test it prints.

use std::process::Command;

fn generate(args: &[&str]) -> String {
    let out = Command::new(env!("CARGO_BIN_EXE_tree-gen"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(out.status.success());
    String::from_utf8(out.stdout).unwrap()
}

#[test]
fn same_command_same_test() {
    assert_eq!(generate(&["-n", "10"]), generate(&["-n", "10"]));
}

#[test]
fn logging_keeps_stdout_and_seed() {
    let plain = generate(&["-n", "6"]);
    assert_eq!(plain, generate(&["-n", "6", "--log-level", "debug"]));
    assert_eq!(plain, generate(&["-n", "6", "--log-level=trace"]));
}

#[test]
fn printed_tree_shape() {
    let text = generate(&["-n", "4", "--seed", "9"]);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "4");
    assert_eq!(lines.len(), 4);
    for line in &lines[1..] {
        let ends: Vec<usize> = line.split(' ').map(|s| s.parse().unwrap()).collect();
        assert_eq!(ends.len(), 2);
        assert!(ends[0] != ends[1] && (1..=4).contains(&ends[0]) && (1..=4).contains(&ends[1]));
    }
}

#[test]
fn zero_vertices_fails() {
    let status = Command::new(env!("CARGO_BIN_EXE_tree-gen")).args(["-n", "0"]).status().unwrap();
    assert!(!status.success());
}
