use std::process::Command;

fn demo() -> Command {
    Command::new(env!("CARGO_BIN_EXE_oparse-demo"))
}

#[test]
fn help_prints_usage_and_exits_with_1() {
    let out = demo()
        .arg("--help")
        .output()
        .expect("failed to run oparse-demo");
    assert_eq!(
        out.status.code(),
        Some(1),
        "help must exit with status 1:\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr),
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("--output") && stdout.contains("-o") && stdout.contains("--verbose"),
        "unexpected help output:\n{stdout}"
    );
}

#[test]
fn short_help_behaves_like_long_help() {
    let out = demo()
        .arg("-h")
        .output()
        .expect("failed to run oparse-demo");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stdout).contains("--format"));
}

#[test]
fn echoes_values_defaults_and_positionals() {
    let out = demo()
        .args(["--output", "out.txt", "-v", "first", "second"])
        .output()
        .expect("failed to run oparse-demo");
    assert!(
        out.status.success(),
        "run failed:\nstderr:\n{}",
        String::from_utf8_lossy(&out.stderr)
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("format: plain"),
        "default not applied:\n{stdout}"
    );
    assert!(stdout.contains("output: out.txt"));
    assert!(stdout.contains("verbose: true"));
    assert!(stdout.contains("positional: first"));
    assert!(stdout.contains("positional: second"));
}

#[test]
fn dash_prefixed_value_is_accepted() {
    let out = demo()
        .args(["--output", "-weird"])
        .output()
        .expect("failed to run oparse-demo");
    assert!(
        out.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert!(String::from_utf8_lossy(&out.stdout).contains("output: -weird"));
}

#[test]
fn unknown_option_fails_with_diagnostic() {
    let out = demo()
        .arg("--nope")
        .output()
        .expect("failed to run oparse-demo");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("unknown option"),
        "unexpected stderr:\n{stderr}"
    );
}

#[test]
fn missing_value_fails_with_diagnostic() {
    let out = demo()
        .arg("--output")
        .output()
        .expect("failed to run oparse-demo");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("missing value"),
        "unexpected stderr:\n{stderr}"
    );
}
