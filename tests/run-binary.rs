use std::process::Command;

use assert_cmd::prelude::*;

fn stdout(cmd: &mut Command) -> (bool, String) {
    let output = cmd.output().unwrap();
    (
        output.status.success(),
        String::from_utf8(output.stdout).unwrap(),
    )
}

#[test]
fn run_native_a_star() {
    let (success, out) = stdout(
        Command::cargo_bin("sokoban-astar")
            .unwrap()
            .arg("levels/custom/02-one-way.txt"),
    );
    assert!(success);
    assert!(out.starts_with(
        r"Solving levels/custom/02-one-way.txt...
###
#.#
# #
# #
#x#
#o#
###
"
    ));
    assert!(out.contains("States created total: 4\nUnique visited total: 4\n"));
    assert!(out.ends_with("Found solution:\nWWW\nMoves: 3\nPushes: 3\n"));
    assert!(!out.contains("Visited new depth"));
}

#[test]
fn run_xsb_bfs_with_status() {
    let (success, out) = stdout(
        Command::cargo_bin("sokoban-astar")
            .unwrap()
            .arg("--xsb")
            .arg("--bfs")
            .arg("--status")
            .arg("levels/custom/01-simplest-xsb.txt"),
    );
    assert!(success);
    assert!(out.contains("#@$.#"));
    assert!(out.contains("Visited new depth: 0\n"));
    assert!(out.contains("Visited new depth: 1\n"));
    assert!(out.ends_with("Found solution:\nD\nMoves: 1\nPushes: 1\n"));
}

#[test]
fn run_two_boxes_bfs() {
    let (success, out) = stdout(
        Command::cargo_bin("sokoban-astar")
            .unwrap()
            .arg("-b")
            .arg("levels/custom/04-two-boxes.txt"),
    );
    assert!(success);
    assert!(out.contains("Found solution:\n"));
    assert!(out.ends_with("Pushes: 6\n"));
}

#[test]
fn run_no_solution() {
    let mut cmd = Command::cargo_bin("sokoban-astar").unwrap();
    cmd.arg("levels/custom/no-solution-pit.txt");
    let output = cmd.output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let out = String::from_utf8(output.stdout).unwrap();
    assert!(out.ends_with("No solution\n"));
}

#[test]
fn run_wrong_format() {
    let (success, out) = stdout(
        Command::cargo_bin("sokoban-astar")
            .unwrap()
            .arg("--xsb")
            .arg("levels/custom/01-simplest.txt"),
    );
    assert!(!success);
    assert!(out.starts_with("Can't load level levels/custom/01-simplest.txt"));
    assert!(out.contains("Invalid cell at pos: [1, 1]"));
}

#[test]
fn run_bad_formatting_args() {
    // doesn't check stderr - clap may complain about either flag
    Command::cargo_bin("sokoban-astar")
        .unwrap()
        .arg("--native")
        .arg("--xsb")
        .arg("levels/custom/01-simplest.txt")
        .assert()
        .failure()
        .stdout("");
}
