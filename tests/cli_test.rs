use std::io::Write;
use std::process::{Command, Stdio};

#[test]
fn test_demo_runs_to_completion() {
    let output = Command::new(env!("CARGO_BIN_EXE_battleship"))
        .args(["demo", "--seed", "12345", "--difficulty", "smart", "--opponent", "random"])
        .output()
        .expect("failed to run battleship binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.contains("Move log:"));
    assert!(stdout.contains("Finished after"));
}

#[test]
fn test_local_game_exits_when_input_closes() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_battleship"))
        .args(["local", "--seed", "7", "--size", "8"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to run battleship binary");
    {
        let stdin = child.stdin.as_mut().expect("stdin");
        stdin.write_all(b"A1\nZZ\nB2\n").expect("write moves");
    }
    let output = child.wait_with_output().expect("wait for binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.contains("A1:"));
    assert!(stdout.contains("Invalid coordinate"));
    assert!(stdout.contains("Input closed"));
}
