use std::env;
use std::fs::File;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_session(input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_osc"))
        .env("NO_COLOR", "1")
        .env("TERM", "dumb")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start osc");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input)
        .expect("failed to feed session input");

    child.wait_with_output().expect("failed to wait for osc")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn cd_then_pwd_reports_new_directory() {
    let target = env::temp_dir().canonicalize().unwrap();
    let script = format!("cd {}\npwd\nexit\n", target.display());

    let output = run_session(script.as_bytes());

    assert!(output.status.success());
    let expected = target.display().to_string();
    assert!(
        stdout_lines(&output).iter().any(|line| line == &expected),
        "stdout was: {:?}",
        String::from_utf8_lossy(&output.stdout)
    );
}

#[test]
fn end_of_input_exits_cleanly() {
    let output = run_session(b"echo still-here\n");

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_lines(&output).iter().any(|line| line == "still-here"));
}

#[test]
fn unreadable_input_exits_cleanly() {
    // Reading a directory fails with EISDIR instead of returning bytes.
    let dir = File::open(env::temp_dir()).unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_osc"))
        .env("NO_COLOR", "1")
        .stdin(Stdio::from(dir))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn history_recall_reruns_command() {
    // Up arrow twice from a fresh line lands on the second-newest entry.
    let output = run_session(b"echo first\necho second\n\x1b[A\x1b[A\nexit\n");

    let lines = stdout_lines(&output);
    assert_eq!(lines.iter().filter(|line| *line == "first").count(), 2);
    assert_eq!(lines.iter().filter(|line| *line == "second").count(), 1);
}

#[test]
fn errors_do_not_stop_the_loop() {
    let output = run_session(b"cd\nosc-no-such-command\nls >\necho recovered\nexit\n");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cd: expected argument"));
    assert!(stderr.contains("command not found: osc-no-such-command"));
    assert!(stderr.contains("missing redirection target"));
    assert!(stdout_lines(&output).iter().any(|line| line == "recovered"));
}

#[test]
fn background_command_reports_pid() {
    let output = run_session(b"sleep 0 &\nexit\n");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Process running in background (PID: "));
}
