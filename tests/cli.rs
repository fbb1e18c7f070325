//! Runs the built binaries. None of these cases get as far as a bus connection.

use std::process::{Command, Output};

fn run(program: &str, args: &[&str]) -> Output {
    Command::new(program)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should start")
}

#[test]
fn it_prints_versions_and_exits_successfully() {
    let lsmpris = run(env!("CARGO_BIN_EXE_lsmpris"), &["--session", "--system", "-V"]);
    assert!(lsmpris.status.success());
    assert_eq!(String::from_utf8_lossy(&lsmpris.stdout), "lsmpris (pdmtools) 001\n");

    let fakeplayer = run(
        env!("CARGO_BIN_EXE_fakeplayer"),
        &["--system", "--bus", "unix:path=/nonexistent", "--version"],
    );
    assert!(fakeplayer.status.success());
    assert_eq!(
        String::from_utf8_lossy(&fakeplayer.stdout),
        "fakeplayer (pdmtools) 001\n"
    );
}

#[test]
fn it_reports_conflicting_buses_with_status_one() {
    for program in [env!("CARGO_BIN_EXE_lsmpris"), env!("CARGO_BIN_EXE_fakeplayer")] {
        let output = run(program, &["--session", "--bus", "unix:path=/nonexistent"]);

        assert_eq!(output.status.code(), Some(1), "{}", program);
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            "ConfigurationError: Must specify only one message bus.\n"
        );
    }
}

#[test]
fn it_reports_unreachable_buses_with_status_one() {
    let output = run(
        env!("CARGO_BIN_EXE_lsmpris"),
        &["--bus", "unix:path=/nonexistent/pdmtools-test-bus"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("ConnectionError: "));
}
