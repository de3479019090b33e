use std::{
    fs::File,
    io::{BufReader, Write},
    path::PathBuf,
    process::{Command, Stdio},
};

use pretty_assertions::assert_eq;

use parkinglot::Session;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn expected_output() -> String {
    std::fs::read_to_string(fixture("expected_output.txt")).unwrap()
}

#[test]
fn session_from_file() {
    let mut session = Session::new("Marina Bay Sands");
    let mut output = Vec::new();
    let file = File::open(fixture("input.txt")).unwrap();
    session.run(BufReader::new(file), &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), expected_output());

    // Commands after `exit` are not processed.
    let lot = session.lot();
    assert_eq!(lot.num_occupied(), 6);
    assert_eq!(lot.get_vehicle_by_registration_number("KA-01-HH-0000").ok(), None);
}

#[test]
fn session_with_crlf_line_endings() {
    let input = std::fs::read_to_string(fixture("input.txt"))
        .unwrap()
        .replace('\n', "\r\n");
    let mut session = Session::new("Marina Bay Sands");
    let mut output = Vec::new();
    session.run(input.as_bytes(), &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), expected_output());
}

#[test]
fn binary_reads_file_argument() {
    let home = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_parkinglot"))
        .arg(fixture("input.txt"))
        .env("HOME", home.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected_output());
}

#[test]
fn binary_reads_stdin() {
    let home = tempfile::tempdir().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_parkinglot"))
        .env("HOME", home.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    let input = std::fs::read(fixture("input.txt")).unwrap();
    child.stdin.take().unwrap().write_all(&input).unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected_output());
}

#[test]
fn binary_rejects_extra_arguments() {
    let home = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_parkinglot"))
        .arg(fixture("input.txt"))
        .arg(fixture("input.txt"))
        .env("HOME", home.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn binary_uses_config_file() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(
        home.path().join(".parkinglot.toml"),
        "address = \"Changi Airport\"\nlog_level = \"debug\"\n",
    )
    .unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_parkinglot"))
        .env("HOME", home.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"create_parking_lot 1\npark A red\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Created a parking lot with 1 slots\nAllocated slot number: 1\n"
    );

    let log = std::fs::read_to_string(home.path().join(".parkinglot/log/parkinglot.log")).unwrap();
    assert!(log.contains("Changi Airport"));
}

#[test]
fn binary_reports_broken_config() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("broken.toml");
    std::fs::write(&config, "address = [").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_parkinglot"))
        .arg("--config")
        .arg(&config)
        .env("HOME", home.path())
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("failed to parse"));
}
